//! Dockwork Core
//!
//! Shared foundations for the dockwork docking engine: integer geometry,
//! math re-exports, collections, logging and profiling.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
