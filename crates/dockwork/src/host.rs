//! Seams to the host toolkit.
//!
//! The engine never touches widgets. It asks the host for geometry through
//! [`DockHost`], tells it about dock state transitions through the same
//! trait, and describes what the drop overlay should show through
//! [`DockOverlay`].

use dockwork_core::geometry::Rect;
use dockwork_core::math::IVec2;

use crate::drop_zone::DropZones;
use crate::types::{DropZone, WindowId};

/// Window system access the docking engine needs.
pub trait DockHost {
    /// Current screen rect of `window`, `None` if the host no longer knows it.
    fn window_bounds(&self, window: WindowId) -> Option<Rect<i32>>;

    /// Screen rect of the docking area.
    fn area_bounds(&self) -> Rect<i32>;

    /// Screen origin of the overlay widget the drop zones are drawn on.
    fn overlay_origin(&self) -> IVec2 {
        self.area_bounds().origin()
    }

    /// `window` was embedded into the splitter tree.
    fn dock(&mut self, window: WindowId);

    /// `window` was taken out of the splitter tree and floats again.
    fn undock(&mut self, window: WindowId);
}

/// Receiver of drop overlay updates.
pub trait DockOverlay {
    /// Show the zones of the current drop candidate.
    ///
    /// `zones` are in docking-area coordinates; add `draw_offset` to map them
    /// into overlay coordinates.
    fn set_overlay(&mut self, zones: &DropZones, draw_offset: IVec2);

    /// Highlight one zone, or none.
    fn highlight_zone(&mut self, zone: Option<DropZone>);

    /// Hide the overlay.
    fn clear_overlay(&mut self);
}

/// Overlay that discards every update, for hosts without drop previews.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOverlay;

impl DockOverlay for NoOverlay {
    fn set_overlay(&mut self, _zones: &DropZones, _draw_offset: IVec2) {}

    fn highlight_zone(&mut self, _zone: Option<DropZone>) {}

    fn clear_overlay(&mut self) {}
}
