//! Drop zone geometry and classification.
//!
//! A target rectangle is divided into five regions: four trapezoidal edge
//! bands and the inset center rectangle.
//!
//! ```text
//! +-------------------+
//! |\       Top       /|
//! | +---------------+ |
//! |L|    Center     |R|
//! | +---------------+ |
//! |/     Bottom      \|
//! +-------------------+
//! ```
//!
//! The band width is `floor(min(width, height) * margin_fraction)`.

use dockwork_core::geometry::Rect;
use dockwork_core::math::IVec2;
use dockwork_core::profiling::profile_function;

use crate::types::{DropZone, WindowId};

/// Default edge band width as a fraction of the shorter side.
pub const DEFAULT_MARGIN_FRACTION: f32 = 0.10;

/// A four-vertex polygon in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    pub points: [IVec2; 4],
}

impl Quad {
    pub const fn new(points: [IVec2; 4]) -> Self {
        Self { points }
    }

    /// Quad covering `rect`, clockwise from the top-left corner.
    pub fn from_rect(rect: Rect<i32>) -> Self {
        Self::new([
            rect.top_left(),
            rect.top_right(),
            rect.bottom_right(),
            rect.bottom_left(),
        ])
    }

    fn edges(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        (0..4).map(move |i| (self.points[i], self.points[(i + 1) % 4]))
    }

    /// Twice the absolute shoelace area, exact in integers.
    pub fn doubled_area(&self) -> i64 {
        let sum: i64 = self
            .edges()
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum();
        sum.abs()
    }

    pub fn area(&self) -> f64 {
        self.doubled_area() as f64 / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.doubled_area() == 0
    }

    /// Even-odd containment with edges counted as inside.
    ///
    /// A zero-area quad contains nothing.
    pub fn contains(&self, point: IVec2) -> bool {
        if self.is_degenerate() {
            return false;
        }
        if self.edges().any(|(a, b)| on_segment(point, a, b)) {
            return true;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let dy = i64::from(b.y - a.y);
                let lhs = i64::from(point.x - a.x) * dy;
                let rhs = i64::from(b.x - a.x) * i64::from(point.y - a.y);
                let left_of_crossing = if dy > 0 { lhs < rhs } else { lhs > rhs };
                if left_of_crossing {
                    inside = !inside;
                }
            }
        }
        inside
    }

    pub fn translated(&self, offset: IVec2) -> Self {
        Self::new(self.points.map(|p| p + offset))
    }
}

fn on_segment(p: IVec2, a: IVec2, b: IVec2) -> bool {
    let cross = i64::from(b.x - a.x) * i64::from(p.y - a.y)
        - i64::from(b.y - a.y) * i64::from(p.x - a.x);
    cross == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// The five drop zone quads of one target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZones {
    bounds: Rect<i32>,
    margin: i32,
    quads: [Quad; 5],
}

impl DropZones {
    /// Build the zones of `rect`. `margin_fraction` is clamped to `0.0..=0.5`.
    pub fn new(rect: Rect<i32>, margin_fraction: f32) -> Self {
        profile_function!();
        let fraction = f64::from(margin_fraction.clamp(0.0, 0.5));
        let shorter = rect.width.min(rect.height).max(0);
        let margin = (f64::from(shorter) * fraction).floor() as i32;
        let inner = rect.inset(margin);

        let left = Quad::new([
            rect.top_left(),
            rect.bottom_left(),
            inner.bottom_left(),
            inner.top_left(),
        ]);
        let right = Quad::new([
            rect.top_right(),
            rect.bottom_right(),
            inner.bottom_right(),
            inner.top_right(),
        ]);
        let top = Quad::new([
            rect.top_left(),
            rect.top_right(),
            inner.top_right(),
            inner.top_left(),
        ]);
        let bottom = Quad::new([
            rect.bottom_right(),
            rect.bottom_left(),
            inner.bottom_left(),
            inner.bottom_right(),
        ]);
        let center = Quad::from_rect(inner);

        Self {
            bounds: rect,
            margin,
            quads: [left, right, top, bottom, center],
        }
    }

    /// The rectangle these zones were built from.
    pub fn bounds(&self) -> Rect<i32> {
        self.bounds
    }

    /// Width of the edge bands.
    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// The center rectangle.
    pub fn inner(&self) -> Rect<i32> {
        self.bounds.inset(self.margin)
    }

    /// Quads in [`DropZone::ALL`] order.
    pub fn quads(&self) -> &[Quad; 5] {
        &self.quads
    }

    pub fn zone(&self, zone: DropZone) -> &Quad {
        &self.quads[zone.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (DropZone, &Quad)> {
        DropZone::ALL.into_iter().zip(self.quads.iter())
    }

    /// First zone, in [`DropZone::ALL`] order, whose quad contains `point`.
    pub fn classify(&self, point: IVec2) -> Option<DropZone> {
        profile_function!();
        self.iter()
            .find(|(_, quad)| quad.contains(point))
            .map(|(zone, _)| zone)
    }

    /// The same zones shifted by `offset`, e.g. into overlay coordinates.
    pub fn translated(&self, offset: IVec2) -> Self {
        Self {
            bounds: self.bounds.translate(offset),
            margin: self.margin,
            quads: self.quads.map(|q| q.translated(offset)),
        }
    }
}

/// Build the drop zones of `rect`.
pub fn zones_for(rect: Rect<i32>, margin_fraction: f32) -> DropZones {
    DropZones::new(rect, margin_fraction)
}

/// Classify `point` against precomputed zones.
pub fn classify(zones: &DropZones, point: IVec2) -> Option<DropZone> {
    zones.classify(point)
}

/// Drop zone detector holding the configured band fraction.
#[derive(Debug, Clone)]
pub struct DropZoneDetector {
    /// Edge band width as a fraction of the shorter side (0.0-0.5).
    pub margin_fraction: f32,
}

impl Default for DropZoneDetector {
    fn default() -> Self {
        Self {
            margin_fraction: DEFAULT_MARGIN_FRACTION,
        }
    }
}

impl DropZoneDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom band fraction.
    pub fn with_margin_fraction(mut self, fraction: f32) -> Self {
        self.margin_fraction = fraction.clamp(0.0, 0.5);
        self
    }

    pub fn zones_for(&self, bounds: Rect<i32>) -> DropZones {
        DropZones::new(bounds, self.margin_fraction)
    }

    /// Detect which zone of `bounds` the point falls in.
    pub fn detect_zone(&self, point: IVec2, bounds: Rect<i32>) -> Option<DropZone> {
        self.zones_for(bounds).classify(point)
    }
}

/// A candidate drop under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTarget {
    /// Window under the pointer, `None` when the pointer is over empty area.
    pub anchor: Option<WindowId>,
    /// Zones of the anchor (or of the area).
    pub zones: DropZones,
    /// Zone the pointer is in.
    pub zone: Option<DropZone>,
}

impl DropTarget {
    /// Zone to highlight: `Center` and no-zone both mean no highlight.
    pub fn highlight(&self) -> Option<DropZone> {
        self.zone.filter(DropZone::is_edge)
    }

    /// Whether releasing here would dock.
    pub fn is_edge_drop(&self) -> bool {
        self.highlight().is_some()
    }

    pub fn is_center_drop(&self) -> bool {
        self.zone == Some(DropZone::Center)
    }
}
