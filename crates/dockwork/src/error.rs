//! Error types for dock operations.

use std::fmt;

use crate::tree::SplitterId;
use crate::types::WindowId;

/// Contract violations raised by the docking engine.
///
/// None of these are user-facing conditions: each means the caller broke the
/// event sequencing or the tree and registry drifted apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockError {
    /// Dock requested for a window that is already docked.
    AlreadyDocked(WindowId),
    /// Undock or query for a window that is not docked.
    NotDocked(WindowId),
    /// The anchor window has no parent splitter.
    OrphanedAnchor(WindowId),
    /// A registered window has no parent splitter.
    OrphanedWindow(WindowId),
    /// A non-root splitter has no parent splitter.
    DetachedSplitter(SplitterId),
    /// The splitter handle refers to a discarded splitter.
    StaleSplitter(SplitterId),
}

impl fmt::Display for DockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DockError::AlreadyDocked(id) => write!(f, "Window {} is already docked", id),
            DockError::NotDocked(id) => write!(f, "Window {} is not docked", id),
            DockError::OrphanedAnchor(id) => {
                write!(f, "Anchor window {} has no parent splitter", id)
            }
            DockError::OrphanedWindow(id) => {
                write!(f, "Docked window {} has no parent splitter", id)
            }
            DockError::DetachedSplitter(id) => {
                write!(f, "Splitter {} is not the root but has no parent", id)
            }
            DockError::StaleSplitter(id) => write!(f, "Splitter {} no longer exists", id),
        }
    }
}

impl std::error::Error for DockError {}

/// Result type for dock operations.
pub type DockResult<T> = Result<T, DockError>;
