//! Overlay that records every update.

use dockwork::{DockOverlay, DropZone, DropZones};
use dockwork_core::math::IVec2;

/// One overlay update.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCall {
    SetOverlay { zones: DropZones, offset: IVec2 },
    Highlight(Option<DropZone>),
    Clear,
}

/// Records overlay updates and keeps the resulting visible state.
#[derive(Debug, Default, Clone)]
pub struct RecordingOverlay {
    calls: Vec<OverlayCall>,
    shown: Option<(DropZones, IVec2)>,
    highlighted: Option<DropZone>,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[OverlayCall] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<&OverlayCall> {
        self.calls.last()
    }

    /// Zones and draw offset currently on screen.
    pub fn shown(&self) -> Option<&(DropZones, IVec2)> {
        self.shown.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn highlighted(&self) -> Option<DropZone> {
        self.highlighted
    }

    pub fn count_clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, OverlayCall::Clear))
            .count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl DockOverlay for RecordingOverlay {
    fn set_overlay(&mut self, zones: &DropZones, draw_offset: IVec2) {
        self.shown = Some((*zones, draw_offset));
        self.calls.push(OverlayCall::SetOverlay {
            zones: *zones,
            offset: draw_offset,
        });
    }

    fn highlight_zone(&mut self, zone: Option<DropZone>) {
        self.highlighted = zone;
        self.calls.push(OverlayCall::Highlight(zone));
    }

    fn clear_overlay(&mut self) {
        self.shown = None;
        self.highlighted = None;
        self.calls.push(OverlayCall::Clear);
    }
}
