//! Dock registry: which windows are docked, and where.

use dockwork_core::alloc::IndexMap;

use crate::error::{DockError, DockResult};
use crate::types::{DockInfo, DropZone, WindowId};

/// Authoritative record of docked windows.
///
/// Iteration follows dock order, which makes hit-testing overlapping window
/// rects deterministic: the window docked first wins.
#[derive(Debug, Default, Clone)]
pub struct DockRegistry {
    entries: IndexMap<WindowId, DockInfo>,
}

impl DockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `info` for `window`, replacing any previous entry wholesale.
    pub fn insert(&mut self, window: WindowId, info: DockInfo) -> Option<DockInfo> {
        self.entries.insert(window, info)
    }

    /// Erase `window`, keeping the relative order of the others.
    pub fn remove(&mut self, window: WindowId) -> Option<DockInfo> {
        self.entries.shift_remove(&window)
    }

    pub fn contains(&self, window: WindowId) -> bool {
        self.entries.contains_key(&window)
    }

    pub fn get(&self, window: WindowId) -> Option<&DockInfo> {
        self.entries.get(&window)
    }

    /// Dock info of `window`, or [`DockError::NotDocked`].
    pub fn info(&self, window: WindowId) -> DockResult<DockInfo> {
        self.get(window)
            .copied()
            .ok_or(DockError::NotDocked(window))
    }

    pub fn location(&self, window: WindowId) -> DockResult<DropZone> {
        self.info(window).map(|info| info.location)
    }

    pub fn anchor(&self, window: WindowId) -> DockResult<Option<WindowId>> {
        self.info(window).map(|info| info.anchor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Docked windows in dock order.
    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &DockInfo)> {
        self.entries.iter().map(|(id, info)| (*id, info))
    }
}
