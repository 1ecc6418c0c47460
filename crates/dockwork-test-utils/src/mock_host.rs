//! Mock window host.

use dockwork::{DockHost, WindowId};
use dockwork_core::alloc::HashMap;
use dockwork_core::geometry::Rect;
use dockwork_core::math::IVec2;

/// A dock state transition the engine reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Dock(WindowId),
    Undock(WindowId),
}

/// Host with scripted window geometry.
///
/// Window rects are whatever the test set them to; the mock does not lay
/// out docked windows. Tests that care where a docked window ends up move
/// it with [`MockHost::set_bounds`].
#[derive(Debug, Clone)]
pub struct MockHost {
    area: Rect<i32>,
    overlay_origin: Option<IVec2>,
    windows: HashMap<WindowId, Rect<i32>>,
    calls: Vec<HostCall>,
}

impl MockHost {
    pub fn new(area: Rect<i32>) -> Self {
        Self {
            area,
            overlay_origin: None,
            windows: HashMap::default(),
            calls: Vec::new(),
        }
    }

    /// Place the overlay widget somewhere other than the area origin.
    pub fn with_overlay_origin(mut self, origin: IVec2) -> Self {
        self.overlay_origin = Some(origin);
        self
    }

    /// Add a window, or move an existing one.
    pub fn set_bounds(&mut self, window: WindowId, bounds: Rect<i32>) {
        self.windows.insert(window, bounds);
    }

    pub fn with_window(mut self, window: WindowId, bounds: Rect<i32>) -> Self {
        self.set_bounds(window, bounds);
        self
    }

    /// Forget a window, as if it was destroyed.
    pub fn remove_window(&mut self, window: WindowId) {
        self.windows.remove(&window);
    }

    pub fn set_area(&mut self, area: Rect<i32>) {
        self.area = area;
    }

    /// All recorded transitions, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn count_docks(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Dock(_)))
            .count()
    }

    pub fn count_undocks(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Undock(_)))
            .count()
    }

    /// Clear recorded calls between test steps.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl DockHost for MockHost {
    fn window_bounds(&self, window: WindowId) -> Option<Rect<i32>> {
        self.windows.get(&window).copied()
    }

    fn area_bounds(&self) -> Rect<i32> {
        self.area
    }

    fn overlay_origin(&self) -> IVec2 {
        self.overlay_origin.unwrap_or_else(|| self.area.origin())
    }

    fn dock(&mut self, window: WindowId) {
        self.calls.push(HostCall::Dock(window));
    }

    fn undock(&mut self, window: WindowId) {
        self.calls.push(HostCall::Undock(window));
    }
}
