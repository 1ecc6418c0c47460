//! Dockwork - docking tree engine for desktop window layouts
//!
//! Windows dragged over a docking area are classified against five drop
//! zones (four edge trapezoids and a center rectangle) and, on release,
//! embedded into a tree of horizontal and vertical splitters:
//! - Drop-zone geometry and hit-testing
//! - Splitter tree mutation with single-level collapse on undock
//! - Drag sessions with a click-vs-drag threshold
//! - Host and overlay seams, no widget code
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # use dockwork::{DockHost, DockingArea, NoOverlay, WindowId};
//! # use dockwork_core::geometry::Rect;
//! # use dockwork_core::math::IVec2;
//! # struct Host;
//! # impl DockHost for Host {
//! #     fn window_bounds(&self, _: WindowId) -> Option<Rect<i32>> { None }
//! #     fn area_bounds(&self) -> Rect<i32> { Rect::new(0, 0, 1000, 800) }
//! #     fn dock(&mut self, _: WindowId) {}
//! #     fn undock(&mut self, _: WindowId) {}
//! # }
//! let mut area = DockingArea::new();
//! let mut host = Host;
//! let window = WindowId(1);
//!
//! // Forwarded from the host's event loop:
//! area.on_pointer_down(window, IVec2::new(500, 400));
//! area.on_pointer_move(&mut host, &mut NoOverlay, window, IVec2::new(20, 400))?;
//! let outcome = area.on_pointer_up(&mut host, &mut NoOverlay, window, IVec2::new(20, 400))?;
//!
//! assert!(outcome.is_docked());
//! println!("{}", area.tree());
//! # Ok::<(), dockwork::DockError>(())
//! ```

pub mod area;
pub mod config;
pub mod debug;
pub mod drag;
pub mod drop_zone;
pub mod error;
pub mod events;
pub mod host;
pub mod operations;
pub mod registry;
pub mod tree;
pub mod types;

pub use area::DockingArea;
pub use config::{DRAG_THRESHOLD, DockingConfig};
pub use drag::{DragManager, DragPhase, DragSession};
pub use drop_zone::{
    DEFAULT_MARGIN_FRACTION, DropTarget, DropZoneDetector, DropZones, Quad, classify, zones_for,
};
pub use error::{DockError, DockResult};
pub use events::DropOutcome;
pub use host::{DockHost, DockOverlay, NoOverlay};
pub use registry::DockRegistry;
pub use tree::{DockTree, InvariantViolation, SplitterId, SplitterNode, TreeChild};
pub use types::{DockInfo, DropZone, Orientation, WindowId};
