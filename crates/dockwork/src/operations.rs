//! Dock and undock: the two structural mutations of the splitter tree.

use dockwork_core::profiling::profile_function;

use crate::area::DockingArea;
use crate::error::{DockError, DockResult};
use crate::host::DockHost;
use crate::tree::TreeChild;
use crate::types::{DockInfo, DropZone, WindowId};

impl DockingArea {
    /// Embed `target` next to `anchor` on the `zone` side.
    ///
    /// With no anchor the window is appended to the root splitter. With an
    /// anchor, a splitter already running along the zone's axis gets the
    /// window inserted beside the anchor; otherwise the anchor's slot is
    /// replaced by a new splitter holding both.
    ///
    /// Returns `Ok(false)` without touching anything for a `Center` drop.
    pub fn dock_window<H: DockHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: WindowId,
        anchor: Option<WindowId>,
        zone: DropZone,
    ) -> DockResult<bool> {
        profile_function!();
        if self.registry.contains(target) {
            tracing::warn!("Trying to dock {} which is already docked", target);
            return Err(DockError::AlreadyDocked(target));
        }
        let Some(axis) = zone.axis() else {
            tracing::trace!("Center drop of {} has no placement", target);
            return Ok(false);
        };

        let incoming = TreeChild::Window(target);
        match anchor {
            None => {
                let root = self.tree.root();
                self.tree.append_child(root, incoming)?;
                tracing::debug!("Docked {} into the root area", target);
            }
            Some(anchor_id) => {
                let Some(parent) = self.tree.parent_of_window(anchor_id) else {
                    tracing::warn!(
                        "Trying to dock {} to {} which has no parent splitter",
                        target,
                        anchor_id
                    );
                    return Err(DockError::OrphanedAnchor(anchor_id));
                };
                let existing = TreeChild::Window(anchor_id);

                if self.tree.orientation(parent)? == axis {
                    let index = self.tree.position_in(parent, existing)?;
                    let at = if zone.is_before() { index } else { index + 1 };
                    self.tree.insert_child(parent, at, incoming)?;
                    tracing::debug!(
                        "Docked {} {:?} of {} in splitter {}",
                        target,
                        zone,
                        anchor_id,
                        parent
                    );
                } else {
                    let split =
                        self.tree
                            .split_child(parent, existing, incoming, axis, zone.is_before())?;
                    tracing::debug!(
                        "Docked {} {:?} of {} in new {:?} splitter {}",
                        target,
                        zone,
                        anchor_id,
                        axis,
                        split
                    );
                }
            }
        }

        self.registry.insert(target, DockInfo::new(zone, anchor));
        host.dock(target);
        Ok(true)
    }

    /// Take `target` out of the tree.
    ///
    /// If that leaves its (non-root) splitter with a single child, the child
    /// takes the splitter's place. Only that one splitter is collapsed;
    /// ancestors are left as they are.
    pub fn undock_window<H: DockHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: WindowId,
    ) -> DockResult<()> {
        profile_function!();
        if !self.registry.contains(target) {
            tracing::warn!("Trying to undock {} which is not docked", target);
            return Err(DockError::NotDocked(target));
        }
        let Some(parent) = self.tree.parent_of_window(target) else {
            tracing::warn!("Docked window {} has no parent splitter", target);
            return Err(DockError::OrphanedWindow(target));
        };

        self.tree.remove_child(parent, TreeChild::Window(target))?;
        host.undock(target);
        tracing::debug!("Undocked {} from splitter {}", target, parent);

        if let Some(promoted) = self.tree.collapse(parent)? {
            tracing::debug!("Collapsed splitter {} into {:?}", parent, promoted);
        }

        self.registry.remove(target);
        Ok(())
    }
}
