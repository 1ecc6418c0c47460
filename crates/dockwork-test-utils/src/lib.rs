//! Test utilities for Dockwork.
//!
//! Provides a scripted window host and an overlay that records what the
//! engine asked it to draw, so docking behaviour can be tested without a
//! window system.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use dockwork::{DockingArea, DropZone, WindowId};
//! use dockwork_core::geometry::Rect;
//! use dockwork_test_utils::{HostCall, MockHost};
//!
//! let mut host = MockHost::new(Rect::new(0, 0, 1000, 800));
//! let mut area = DockingArea::new();
//!
//! area.dock_window(&mut host, WindowId(1), None, DropZone::Left).unwrap();
//! assert_eq!(host.calls(), &[HostCall::Dock(WindowId(1))]);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_host;
#[cfg(feature = "mock")]
pub mod mock_overlay;

#[cfg(feature = "mock")]
pub use mock_host::*;
#[cfg(feature = "mock")]
pub use mock_overlay::*;
