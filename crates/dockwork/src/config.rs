//! Tunables for a docking area.

use crate::drop_zone::DEFAULT_MARGIN_FRACTION;
use crate::types::Orientation;

/// Manhattan distance the pointer must travel before a press becomes a drag.
pub const DRAG_THRESHOLD: i32 = 4;

/// Configuration for a [`DockingArea`](crate::DockingArea).
///
/// ```
/// use dockwork::{DockingConfig, Orientation};
///
/// let config = DockingConfig::default()
///     .margin_fraction(0.2)
///     .root_orientation(Orientation::Vertical);
/// assert_eq!(config.drag_threshold, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DockingConfig {
    /// Fraction of the shorter side used as the edge band width.
    pub margin_fraction: f32,
    /// Manhattan distance a press must exceed to count as a drag.
    pub drag_threshold: i32,
    /// Orientation of the root splitter.
    pub root_orientation: Orientation,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            margin_fraction: DEFAULT_MARGIN_FRACTION,
            drag_threshold: DRAG_THRESHOLD,
            root_orientation: Orientation::Horizontal,
        }
    }
}

impl DockingConfig {
    /// Set the edge band fraction. Clamped to `0.0..=0.5`.
    pub fn margin_fraction(mut self, fraction: f32) -> Self {
        self.margin_fraction = fraction.clamp(0.0, 0.5);
        self
    }

    /// Set the drag threshold. Negative values are treated as zero.
    pub fn drag_threshold(mut self, threshold: i32) -> Self {
        self.drag_threshold = threshold.max(0);
        self
    }

    /// Set the root splitter orientation.
    pub fn root_orientation(mut self, orientation: Orientation) -> Self {
        self.root_orientation = orientation;
        self
    }
}
