//! Splitter tree: the container hierarchy docked windows live in.
//!
//! Splitters are stored in a generational arena and referenced by
//! [`SplitterId`]. Every child records its parent splitter, so finding the
//! container of a window or splitter is a lookup rather than a tree walk.
//! Mutation primitives are crate-private; the public surface is read-only and
//! all structural changes go through
//! [`DockingArea::dock_window`](crate::DockingArea::dock_window) and
//! [`DockingArea::undock_window`](crate::DockingArea::undock_window).

use std::fmt;

use dockwork_core::alloc::HashMap;
use dockwork_core::alloc::sparse_set::{IndexSlot, SparseSet};
use dockwork_core::profiling::profile_function;

use crate::error::{DockError, DockResult};
use crate::registry::DockRegistry;
use crate::types::{Orientation, WindowId};

/// Handle of a splitter in a [`DockTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SplitterId(IndexSlot);

impl SplitterId {
    /// Arena slot of this splitter. Slots are reused after a splitter is
    /// discarded; the handle itself is not.
    pub fn index(&self) -> u32 {
        self.0.index()
    }
}

impl fmt::Display for SplitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}.{}", self.0.index(), self.0.generation())
    }
}

/// A child slot of a splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeChild {
    Window(WindowId),
    Splitter(SplitterId),
}

impl TreeChild {
    pub fn as_window(&self) -> Option<WindowId> {
        match self {
            TreeChild::Window(id) => Some(*id),
            TreeChild::Splitter(_) => None,
        }
    }

    pub fn as_splitter(&self) -> Option<SplitterId> {
        match self {
            TreeChild::Splitter(id) => Some(*id),
            TreeChild::Window(_) => None,
        }
    }
}

impl From<WindowId> for TreeChild {
    fn from(id: WindowId) -> Self {
        TreeChild::Window(id)
    }
}

impl From<SplitterId> for TreeChild {
    fn from(id: SplitterId) -> Self {
        TreeChild::Splitter(id)
    }
}

/// A container laying its children out along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterNode {
    orientation: Orientation,
    children: Vec<TreeChild>,
    parent: Option<SplitterId>,
}

impl SplitterNode {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn children(&self) -> &[TreeChild] {
        &self.children
    }

    /// Containing splitter, `None` for the root.
    pub fn parent(&self) -> Option<SplitterId> {
        self.parent
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn position(&self, child: TreeChild) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }
}

/// A broken structural invariant found by [`DockTree::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A non-root splitter has fewer than two children.
    DegenerateSplitter(SplitterId),
    /// A child's recorded parent is not the splitter holding it.
    BrokenParentLink(TreeChild),
    /// A splitter is alive in the arena but not reachable from the root.
    UnreachableSplitter(SplitterId),
    /// A window leaf has no registry entry.
    UnregisteredWindow(WindowId),
    /// A registry entry has no window leaf.
    MissingWindow(WindowId),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::DegenerateSplitter(id) => {
                write!(f, "Splitter {} has fewer than two children", id)
            }
            InvariantViolation::BrokenParentLink(child) => {
                write!(f, "Parent link of {:?} does not match its container", child)
            }
            InvariantViolation::UnreachableSplitter(id) => {
                write!(f, "Splitter {} is not reachable from the root", id)
            }
            InvariantViolation::UnregisteredWindow(id) => {
                write!(f, "Window {} is in the tree but not registered", id)
            }
            InvariantViolation::MissingWindow(id) => {
                write!(f, "Window {} is registered but not in the tree", id)
            }
        }
    }
}

/// Arena-backed splitter hierarchy with a permanent root.
#[derive(Debug)]
pub struct DockTree {
    splitters: SparseSet<SplitterNode>,
    root: SplitterId,
    window_parents: HashMap<WindowId, SplitterId>,
}

impl DockTree {
    /// Create a tree holding only an empty root splitter.
    pub fn new(root_orientation: Orientation) -> Self {
        let mut splitters = SparseSet::new();
        let root = SplitterId(splitters.push(SplitterNode {
            orientation: root_orientation,
            children: Vec::new(),
            parent: None,
        }));
        Self {
            splitters,
            root,
            window_parents: HashMap::new(),
        }
    }

    pub fn root(&self) -> SplitterId {
        self.root
    }

    pub fn root_node(&self) -> &SplitterNode {
        self.splitters.get(self.root.0)
    }

    pub fn is_root(&self, id: SplitterId) -> bool {
        id == self.root
    }

    pub fn splitter(&self, id: SplitterId) -> Option<&SplitterNode> {
        self.splitters.try_get(id.0)
    }

    /// Like [`splitter`](Self::splitter), failing with
    /// [`DockError::StaleSplitter`].
    pub fn node(&self, id: SplitterId) -> DockResult<&SplitterNode> {
        self.splitter(id).ok_or(DockError::StaleSplitter(id))
    }

    fn node_mut(&mut self, id: SplitterId) -> DockResult<&mut SplitterNode> {
        self.splitters
            .try_get_mut(id.0)
            .ok_or(DockError::StaleSplitter(id))
    }

    pub fn orientation(&self, id: SplitterId) -> DockResult<Orientation> {
        self.node(id).map(SplitterNode::orientation)
    }

    pub fn parent_of_window(&self, window: WindowId) -> Option<SplitterId> {
        self.window_parents.get(&window).copied()
    }

    pub fn parent_of(&self, child: TreeChild) -> Option<SplitterId> {
        match child {
            TreeChild::Window(id) => self.parent_of_window(id),
            TreeChild::Splitter(id) => self.splitter(id).and_then(SplitterNode::parent),
        }
    }

    pub fn contains_window(&self, window: WindowId) -> bool {
        self.window_parents.contains_key(&window)
    }

    pub fn window_count(&self) -> usize {
        self.window_parents.len()
    }

    /// Number of live splitters, root included.
    pub fn splitter_count(&self) -> usize {
        self.splitters.len()
    }

    pub fn splitters(&self) -> impl Iterator<Item = (SplitterId, &SplitterNode)> {
        self.splitters
            .iter_with_slots()
            .map(|(slot, node)| (SplitterId(slot), node))
    }

    /// Pre-order walk below the root, with depth (direct root children are
    /// at depth 0).
    pub fn walk(&self) -> Vec<(usize, TreeChild)> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, TreeChild)> = self
            .root_node()
            .children
            .iter()
            .rev()
            .map(|&c| (0, c))
            .collect();

        while let Some((depth, child)) = stack.pop() {
            out.push((depth, child));
            if let TreeChild::Splitter(id) = child
                && let Some(node) = self.splitter(id)
            {
                stack.extend(node.children.iter().rev().map(|&c| (depth + 1, c)));
            }
        }
        out
    }

    /// Window leaves in depth-first, left-to-right order.
    pub fn windows(&self) -> Vec<WindowId> {
        self.walk()
            .into_iter()
            .filter_map(|(_, child)| child.as_window())
            .collect()
    }

    /// Non-root splitters with fewer than two children.
    pub fn degenerate_splitters(&self) -> Vec<SplitterId> {
        self.splitters()
            .filter(|(id, node)| !self.is_root(*id) && node.len() < 2)
            .map(|(id, _)| id)
            .collect()
    }

    /// Check parent links, splitter arity and the tree/registry pairing.
    pub fn validate(&self, registry: &DockRegistry) -> Result<(), Vec<InvariantViolation>> {
        profile_function!();
        let mut violations = Vec::new();
        let mut reached_splitters = 1;
        let mut leaves = Vec::new();

        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            let Some(node) = self.splitter(id) else {
                continue;
            };
            for &child in &node.children {
                if self.parent_of(child) != Some(id) {
                    violations.push(InvariantViolation::BrokenParentLink(child));
                }
                match child {
                    TreeChild::Window(window) => leaves.push(window),
                    TreeChild::Splitter(splitter) => {
                        reached_splitters += 1;
                        pending.push(splitter);
                    }
                }
            }
        }

        if reached_splitters != self.splitters.len() {
            let reachable: Vec<_> = self
                .walk()
                .into_iter()
                .filter_map(|(_, child)| child.as_splitter())
                .collect();
            violations.extend(
                self.splitters()
                    .map(|(id, _)| id)
                    .filter(|id| !self.is_root(*id) && !reachable.contains(id))
                    .map(InvariantViolation::UnreachableSplitter),
            );
        }

        violations.extend(
            self.degenerate_splitters()
                .into_iter()
                .map(InvariantViolation::DegenerateSplitter),
        );

        violations.extend(
            leaves
                .iter()
                .filter(|window| !registry.contains(**window))
                .map(|window| InvariantViolation::UnregisteredWindow(*window)),
        );
        violations.extend(
            registry
                .windows()
                .filter(|window| !leaves.contains(window))
                .map(InvariantViolation::MissingWindow),
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn missing_child(&self, child: TreeChild) -> DockError {
        match child {
            TreeChild::Window(id) => {
                if self.contains_window(id) {
                    DockError::OrphanedWindow(id)
                } else {
                    DockError::NotDocked(id)
                }
            }
            TreeChild::Splitter(id) if self.splitter(id).is_some() => {
                DockError::DetachedSplitter(id)
            }
            TreeChild::Splitter(id) => DockError::StaleSplitter(id),
        }
    }

    /// Index of `child` inside `parent`.
    pub fn position_in(&self, parent: SplitterId, child: TreeChild) -> DockResult<usize> {
        self.node(parent)?
            .position(child)
            .ok_or_else(|| self.missing_child(child))
    }

    fn set_parent(&mut self, child: TreeChild, parent: SplitterId) -> DockResult<()> {
        match child {
            TreeChild::Window(id) => {
                self.window_parents.insert(id, parent);
            }
            TreeChild::Splitter(id) => {
                self.node_mut(id)?.parent = Some(parent);
            }
        }
        Ok(())
    }

    pub(crate) fn insert_child(
        &mut self,
        parent: SplitterId,
        index: usize,
        child: TreeChild,
    ) -> DockResult<()> {
        let node = self.node_mut(parent)?;
        let index = index.min(node.children.len());
        node.children.insert(index, child);
        self.set_parent(child, parent)
    }

    pub(crate) fn append_child(&mut self, parent: SplitterId, child: TreeChild) -> DockResult<()> {
        let len = self.node(parent)?.len();
        self.insert_child(parent, len, child)
    }

    /// Detach `child` from `parent`, returning the index it occupied.
    pub(crate) fn remove_child(&mut self, parent: SplitterId, child: TreeChild) -> DockResult<usize> {
        let index = self.position_in(parent, child)?;
        self.node_mut(parent)?.children.remove(index);
        match child {
            TreeChild::Window(id) => {
                self.window_parents.remove(&id);
            }
            TreeChild::Splitter(id) => {
                self.node_mut(id)?.parent = None;
            }
        }
        Ok(index)
    }

    /// Replace `existing` inside `parent` with a new splitter holding
    /// `incoming` and `existing`, `incoming` first when `before` is set.
    pub(crate) fn split_child(
        &mut self,
        parent: SplitterId,
        existing: TreeChild,
        incoming: TreeChild,
        orientation: Orientation,
        before: bool,
    ) -> DockResult<SplitterId> {
        profile_function!();
        let index = self.position_in(parent, existing)?;
        let children = if before {
            vec![incoming, existing]
        } else {
            vec![existing, incoming]
        };

        let split = SplitterId(self.splitters.push(SplitterNode {
            orientation,
            children,
            parent: Some(parent),
        }));
        self.node_mut(parent)?.children[index] = TreeChild::Splitter(split);
        self.set_parent(existing, split)?;
        self.set_parent(incoming, split)?;
        Ok(split)
    }

    /// If `splitter` is a non-root splitter with exactly one child, put that
    /// child in the splitter's place and discard the splitter.
    ///
    /// Only `splitter` itself is examined; ancestors are not re-checked.
    pub(crate) fn collapse(&mut self, splitter: SplitterId) -> DockResult<Option<TreeChild>> {
        if self.is_root(splitter) {
            return Ok(None);
        }
        let node = self.node(splitter)?;
        let &[remaining] = node.children.as_slice() else {
            return Ok(None);
        };
        let grandparent = node
            .parent
            .ok_or(DockError::DetachedSplitter(splitter))?;

        let index = self.position_in(grandparent, TreeChild::Splitter(splitter))?;
        self.node_mut(grandparent)?.children[index] = remaining;
        self.set_parent(remaining, grandparent)?;
        self.splitters.try_remove(splitter.0);
        Ok(Some(remaining))
    }
}
