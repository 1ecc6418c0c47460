//! The docking area: one docking surface's tree, registry and drag state.

use dockwork_core::math::IVec2;

use crate::config::DockingConfig;
use crate::drag::{DragManager, DragPhase, DragSession};
use crate::drop_zone::{DropTarget, DropZoneDetector};
use crate::error::DockResult;
use crate::host::DockHost;
use crate::registry::DockRegistry;
use crate::tree::{DockTree, InvariantViolation};
use crate::types::{DockInfo, DropZone, WindowId};

/// Owns the splitter tree and dock registry of one docking surface.
///
/// Create one per surface and drop it with the surface. All methods run on
/// the thread that delivers pointer events.
#[derive(Debug)]
pub struct DockingArea {
    pub(crate) tree: DockTree,
    pub(crate) registry: DockRegistry,
    pub(crate) drag: DragManager,
    pub(crate) detector: DropZoneDetector,
    config: DockingConfig,
}

impl Default for DockingArea {
    fn default() -> Self {
        Self::new()
    }
}

impl DockingArea {
    pub fn new() -> Self {
        Self::with_config(DockingConfig::default())
    }

    pub fn with_config(config: DockingConfig) -> Self {
        Self {
            tree: DockTree::new(config.root_orientation),
            registry: DockRegistry::new(),
            drag: DragManager::new(config.drag_threshold),
            detector: DropZoneDetector::new().with_margin_fraction(config.margin_fraction),
            config,
        }
    }

    pub fn config(&self) -> &DockingConfig {
        &self.config
    }

    pub fn tree(&self) -> &DockTree {
        &self.tree
    }

    pub fn registry(&self) -> &DockRegistry {
        &self.registry
    }

    pub fn detector(&self) -> &DropZoneDetector {
        &self.detector
    }

    pub fn is_docked(&self, window: WindowId) -> bool {
        self.registry.contains(window)
    }

    /// Dock info of `window`, failing with
    /// [`DockError::NotDocked`](crate::DockError::NotDocked).
    pub fn dock_info(&self, window: WindowId) -> DockResult<DockInfo> {
        self.registry.info(window)
    }

    pub fn dock_location(&self, window: WindowId) -> DockResult<DropZone> {
        self.registry.location(window)
    }

    pub fn dock_anchor(&self, window: WindowId) -> DockResult<Option<WindowId>> {
        self.registry.anchor(window)
    }

    /// Docked windows in dock order.
    pub fn docked_windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.registry.windows()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Check the tree/registry invariants.
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        self.tree.validate(&self.registry)
    }

    /// First docked window, in dock order, whose screen rect contains `pos`.
    pub fn docked_window_at<H: DockHost + ?Sized>(&self, host: &H, pos: IVec2) -> Option<WindowId> {
        self.registry.windows().find(|&window| {
            host.window_bounds(window)
                .is_some_and(|bounds| bounds.contains(pos))
        })
    }

    /// Drop candidate under `pos`: a docked window, else the docking area
    /// itself, else nothing.
    pub fn drop_target_at<H: DockHost + ?Sized>(&self, host: &H, pos: IVec2) -> Option<DropTarget> {
        let (anchor, bounds) = match self.docked_window_at(host, pos) {
            Some(window) => (Some(window), host.window_bounds(window)?),
            None => {
                let area = host.area_bounds();
                if !area.contains(pos) {
                    return None;
                }
                (None, area)
            }
        };

        let zones = self.detector.zones_for(bounds);
        Some(DropTarget {
            anchor,
            zones,
            zone: zones.classify(pos),
        })
    }
}

static_assertions::assert_impl_all!(DockingArea: Send);
