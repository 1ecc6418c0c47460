//! Drag session tracking.

use dockwork_core::math::{IVec2, manhattan_length};

use crate::config::DRAG_THRESHOLD;
use crate::types::WindowId;

/// Where a drag session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No session.
    #[default]
    Idle,
    /// Pointer pressed on a window, not yet resolved.
    Armed,
    /// A floating window is over a drop candidate and the overlay is shown.
    Highlighting,
    /// The window floats with no drop candidate under the pointer.
    Dragging,
}

/// State of one in-progress drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Window being dragged.
    pub window: WindowId,
    /// Pointer position when the session started.
    pub origin: IVec2,
    /// Latest pointer position.
    pub current: IVec2,
    /// Whether the pointer has ever been further than the threshold from
    /// `origin`. Sticky for the rest of the session.
    pub threshold_crossed: bool,
    pub phase: DragPhase,
}

impl DragSession {
    pub fn new(window: WindowId, origin: IVec2) -> Self {
        Self {
            window,
            origin,
            current: origin,
            threshold_crossed: false,
            phase: DragPhase::Armed,
        }
    }

    /// Record a pointer position. Returns `true` when this update is the one
    /// that first crossed `threshold`.
    pub fn update(&mut self, pos: IVec2, threshold: i32) -> bool {
        self.current = pos;
        if !self.threshold_crossed && DragManager::exceeds_threshold(self.origin, pos, threshold) {
            self.threshold_crossed = true;
            return true;
        }
        false
    }

    /// Pointer displacement from the origin.
    pub fn delta(&self) -> IVec2 {
        self.current - self.origin
    }
}

/// Tracks at most one drag session.
#[derive(Debug)]
pub struct DragManager {
    session: Option<DragSession>,
    threshold: i32,
}

impl Default for DragManager {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl DragManager {
    pub fn new(threshold: i32) -> Self {
        Self {
            session: None,
            threshold,
        }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Session for `window`, starting a fresh one at `pos` if no session
    /// exists or another window was being tracked.
    pub fn track(&mut self, window: WindowId, pos: IVec2) -> &mut DragSession {
        let stale = self.session.as_ref().is_none_or(|s| s.window != window);
        if stale {
            if let Some(previous) = &self.session {
                tracing::trace!(
                    "Drag of {} replaced by {}",
                    previous.window,
                    window
                );
            }
            self.session = Some(DragSession::new(window, pos));
        }
        self.session.get_or_insert_with(|| DragSession::new(window, pos))
    }

    /// Record a pointer position for `window`. Returns `true` when this
    /// update first crossed the threshold.
    pub fn update(&mut self, window: WindowId, pos: IVec2) -> bool {
        let threshold = self.threshold;
        self.track(window, pos).update(pos, threshold)
    }

    pub fn set_phase(&mut self, phase: DragPhase) {
        if let Some(session) = self.session.as_mut() {
            session.phase = phase;
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> DragPhase {
        self.session
            .as_ref()
            .map_or(DragPhase::Idle, |s| s.phase)
    }

    pub fn is_tracking(&self, window: WindowId) -> bool {
        self.session.as_ref().is_some_and(|s| s.window == window)
    }

    /// Whether the tracked session has crossed the threshold.
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.threshold_crossed)
    }

    /// Drop the session without resolving it.
    pub fn cancel_drag(&mut self) {
        self.session = None;
    }

    /// End the session and return its final state.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// Check if `current` is further than `threshold` from `start`.
    pub fn exceeds_threshold(start: IVec2, current: IVec2, threshold: i32) -> bool {
        manhattan_length(current - start) > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let origin = IVec2::new(100, 100);
        assert!(!DragManager::exceeds_threshold(origin, IVec2::new(102, 98), 4));
        assert!(!DragManager::exceeds_threshold(origin, IVec2::new(104, 100), 4));
        assert!(DragManager::exceeds_threshold(origin, IVec2::new(103, 98), 4));
    }

    #[test]
    fn test_track_starts_session_once() {
        let mut manager = DragManager::default();
        let window = WindowId(1);

        manager.track(window, IVec2::new(10, 10));
        manager.track(window, IVec2::new(50, 50));

        let session = manager.session().unwrap();
        assert_eq!(session.origin, IVec2::new(10, 10));
        assert_eq!(session.phase, DragPhase::Armed);
        assert!(manager.is_tracking(window));
    }

    #[test]
    fn test_other_window_replaces_session() {
        let mut manager = DragManager::default();
        manager.update(WindowId(1), IVec2::new(0, 0));
        manager.update(WindowId(1), IVec2::new(10, 0));
        assert!(manager.is_dragging());

        manager.update(WindowId(2), IVec2::new(10, 0));

        let session = manager.session().unwrap();
        assert_eq!(session.window, WindowId(2));
        assert_eq!(session.origin, IVec2::new(10, 0));
        assert!(!manager.is_dragging());
    }

    #[test]
    fn test_crossing_is_sticky() {
        let mut manager = DragManager::default();
        let window = WindowId(3);

        assert!(!manager.update(window, IVec2::new(0, 0)));
        assert!(!manager.update(window, IVec2::new(2, 2)));
        assert!(manager.update(window, IVec2::new(3, 2)));
        // Moving back inside the threshold does not un-cross it.
        assert!(!manager.update(window, IVec2::new(0, 1)));
        assert!(manager.is_dragging());
        assert_eq!(manager.session().unwrap().delta(), IVec2::new(0, 1));
    }

    #[test]
    fn test_end_and_cancel() {
        let mut manager = DragManager::default();
        manager.track(WindowId(1), IVec2::ZERO);
        manager.set_phase(DragPhase::Highlighting);
        assert_eq!(manager.phase(), DragPhase::Highlighting);

        let ended = manager.end_drag().unwrap();
        assert_eq!(ended.phase, DragPhase::Highlighting);
        assert_eq!(manager.phase(), DragPhase::Idle);

        manager.track(WindowId(1), IVec2::ZERO);
        manager.cancel_drag();
        assert!(manager.session().is_none());
    }
}
