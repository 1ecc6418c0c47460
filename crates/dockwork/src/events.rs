//! Pointer event handling.
//!
//! The host forwards the pointer events of its floating and docked windows
//! here. A press arms a drag session, moves either pull a docked window out
//! of the tree or preview the drop under the pointer, and the release docks
//! the window if it landed on an edge zone.

use dockwork_core::math::IVec2;
use dockwork_core::profiling::profile_function;

use crate::area::DockingArea;
use crate::drag::DragPhase;
use crate::error::DockResult;
use crate::host::{DockHost, DockOverlay};
use crate::types::{DropZone, WindowId};

/// How a pointer release was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The window was docked on `zone` of `anchor`, or of the area itself
    /// when `anchor` is `None`.
    Docked {
        anchor: Option<WindowId>,
        zone: DropZone,
    },
    /// The window was dragged but released away from any edge zone.
    Floating,
    /// Not a docking gesture: a click, or the window is still docked.
    Ignored,
}

impl DropOutcome {
    pub fn is_docked(&self) -> bool {
        matches!(self, DropOutcome::Docked { .. })
    }
}

/// Errors reaching the event layer mean the tree and registry disagree.
fn report<T>(result: DockResult<T>, during: &str) -> DockResult<T> {
    if let Err(err) = &result {
        tracing::error!("Docking failed during {}: {}", during, err);
        debug_assert!(false, "docking state corrupted during {during}: {err}");
    }
    result
}

impl DockingArea {
    /// Pointer pressed on `window` at screen position `pos`.
    pub fn on_pointer_down(&mut self, window: WindowId, pos: IVec2) {
        let fresh = !self.drag.is_tracking(window);
        self.drag.track(window, pos);
        if fresh {
            tracing::trace!("Armed drag of {} at {}", window, pos);
            self.drag.set_phase(DragPhase::Armed);
        }
    }

    /// Pointer moved while `window` is being dragged.
    pub fn on_pointer_move<H, O>(
        &mut self,
        host: &mut H,
        overlay: &mut O,
        window: WindowId,
        pos: IVec2,
    ) -> DockResult<()>
    where
        H: DockHost + ?Sized,
        O: DockOverlay + ?Sized,
    {
        profile_function!();
        self.drag.update(window, pos);

        if self.is_docked(window) {
            if self.drag.is_dragging() {
                tracing::debug!("Pulled {} out of the docking area", window);
                report(self.undock_window(host, window), "pointer move")?;
                self.drag.set_phase(DragPhase::Dragging);
            }
            return Ok(());
        }

        match self.drop_target_at(host, pos) {
            Some(target) => {
                let area_origin = host.area_bounds().origin();
                let zones = target.zones.translated(-area_origin);
                overlay.set_overlay(&zones, area_origin - host.overlay_origin());
                let highlight = target.highlight();
                tracing::trace!(
                    "Highlight {:?} on {:?} for {}",
                    highlight,
                    target.anchor,
                    window
                );
                overlay.highlight_zone(highlight);
                self.drag.set_phase(DragPhase::Highlighting);
            }
            None => {
                overlay.highlight_zone(None);
                overlay.clear_overlay();
                self.drag.set_phase(DragPhase::Dragging);
            }
        }
        Ok(())
    }

    /// Pointer released. Ends the session in every case.
    pub fn on_pointer_up<H, O>(
        &mut self,
        host: &mut H,
        overlay: &mut O,
        window: WindowId,
        pos: IVec2,
    ) -> DockResult<DropOutcome>
    where
        H: DockHost + ?Sized,
        O: DockOverlay + ?Sized,
    {
        profile_function!();
        overlay.highlight_zone(None);
        overlay.clear_overlay();

        self.drag.update(window, pos);
        let dragged = self.drag.is_dragging();
        self.drag.end_drag();

        if !dragged || self.is_docked(window) {
            return Ok(DropOutcome::Ignored);
        }

        let Some(target) = self.drop_target_at(host, pos) else {
            tracing::trace!("{} released outside the docking area", window);
            return Ok(DropOutcome::Floating);
        };
        let zone = match target.zone {
            Some(zone) if zone.is_edge() => zone,
            _ => return Ok(DropOutcome::Floating),
        };

        let docked = report(
            self.dock_window(host, window, target.anchor, zone),
            "pointer release",
        )?;
        Ok(if docked {
            DropOutcome::Docked {
                anchor: target.anchor,
                zone,
            }
        } else {
            DropOutcome::Floating
        })
    }

    /// `window` is being destroyed. Undocks it and drops any session that
    /// tracks it.
    pub fn on_window_closed<H, O>(
        &mut self,
        host: &mut H,
        overlay: &mut O,
        window: WindowId,
    ) -> DockResult<()>
    where
        H: DockHost + ?Sized,
        O: DockOverlay + ?Sized,
    {
        if self.drag.is_tracking(window) {
            self.cancel_drag(overlay);
        }
        if self.is_docked(window) {
            report(self.undock_window(host, window), "window close")?;
        }
        Ok(())
    }

    /// Abandon the current session and hide the overlay.
    pub fn cancel_drag<O: DockOverlay + ?Sized>(&mut self, overlay: &mut O) {
        if let Some(session) = self.drag.session() {
            tracing::trace!("Cancelled drag of {}", session.window);
        }
        self.drag.cancel_drag();
        overlay.highlight_zone(None);
        overlay.clear_overlay();
    }
}

