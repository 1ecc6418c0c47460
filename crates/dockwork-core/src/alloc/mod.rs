//! Allocation and collection types for dockwork.
//!
//! This module provides:
//! - Re-exports of hash collections using AHash
//! - SparseSet arena with generational handles

pub mod sparse_set;

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Insertion-ordered map using the AHash hasher.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;
