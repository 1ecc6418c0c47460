//! Shared types for the docking engine.

use std::fmt;

/// Host-supplied identity of a dockable window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<u64> for WindowId {
    fn from(id: u64) -> Self {
        WindowId(id)
    }
}

/// Axis a splitter lays its children out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Children side by side, left to right.
    #[default]
    Horizontal,
    /// Children stacked, top to bottom.
    Vertical,
}

impl Orientation {
    /// Get the perpendicular orientation.
    pub fn perpendicular(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Single-letter tag used by the tree dump.
    pub fn tag(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "H",
            Orientation::Vertical => "V",
        }
    }
}

/// Drop zone of a pointer relative to a candidate anchor.
///
/// "No zone" is expressed as `Option::<DropZone>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropZone {
    /// Left band of the target.
    Left,
    /// Right band of the target.
    Right,
    /// Top band of the target.
    Top,
    /// Bottom band of the target.
    Bottom,
    /// Inset center of the target. Classified, but never placed.
    Center,
}

impl DropZone {
    /// All zones in classification order.
    pub const ALL: [DropZone; 5] = [
        DropZone::Left,
        DropZone::Right,
        DropZone::Top,
        DropZone::Bottom,
        DropZone::Center,
    ];

    /// Position of this zone in [`DropZone::ALL`].
    pub fn index(&self) -> usize {
        match self {
            DropZone::Left => 0,
            DropZone::Right => 1,
            DropZone::Top => 2,
            DropZone::Bottom => 3,
            DropZone::Center => 4,
        }
    }

    /// Splitter orientation a drop into this zone lays out along.
    pub fn axis(&self) -> Option<Orientation> {
        match self {
            DropZone::Left | DropZone::Right => Some(Orientation::Horizontal),
            DropZone::Top | DropZone::Bottom => Some(Orientation::Vertical),
            DropZone::Center => None,
        }
    }

    /// Whether the dropped window goes before its anchor.
    pub fn is_before(&self) -> bool {
        matches!(self, DropZone::Left | DropZone::Top)
    }

    /// Whether this zone has a placement (everything except `Center`).
    pub fn is_edge(&self) -> bool {
        !matches!(self, DropZone::Center)
    }
}

/// Where a docked window was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockInfo {
    /// Side of the anchor the window was dropped on. Never `Center`.
    pub location: DropZone,
    /// Window the drop was relative to, `None` for a drop into the root area.
    pub anchor: Option<WindowId>,
}

impl DockInfo {
    pub fn new(location: DropZone, anchor: Option<WindowId>) -> Self {
        debug_assert!(location.is_edge(), "center drops are never recorded");
        Self { location, anchor }
    }
}
