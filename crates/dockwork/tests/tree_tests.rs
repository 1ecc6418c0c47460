//! Splitter tree mutation tests.
//!
//! Exercise dock/undock against a mock host and check the tree shape, the
//! dock registry and the host transitions after each step.

use dockwork::{
    DockError, DockInfo, DockingArea, DockingConfig, DropZone, InvariantViolation, Orientation,
    TreeChild, WindowId,
};
use dockwork_core::geometry::Rect;
use dockwork_test_utils::{HostCall, MockHost};

const A: WindowId = WindowId(1);
const B: WindowId = WindowId(2);
const C: WindowId = WindowId(3);
const D: WindowId = WindowId(4);

fn setup() -> (DockingArea, MockHost) {
    dockwork_core::logging::try_init();
    (DockingArea::new(), MockHost::new(Rect::new(0, 0, 1000, 800)))
}

fn win(id: WindowId) -> TreeChild {
    TreeChild::Window(id)
}

fn root_children(area: &DockingArea) -> Vec<TreeChild> {
    area.tree().root_node().children().to_vec()
}

/// Registry and tree leaves hold the same windows and every link is intact.
fn assert_consistent(area: &DockingArea) {
    let mut leaves = area.tree().windows();
    let mut docked: Vec<_> = area.docked_windows().collect();
    leaves.sort();
    docked.sort();
    assert_eq!(leaves, docked);
    assert_eq!(area.validate(), Ok(()));
}

/// Scenario: A, B side by side, then C on top of A.
fn dock_abc(area: &mut DockingArea, host: &mut MockHost) {
    area.dock_window(host, A, None, DropZone::Left).unwrap();
    area.dock_window(host, B, Some(A), DropZone::Right).unwrap();
    area.dock_window(host, C, Some(A), DropZone::Top).unwrap();
}

#[test]
fn test_dock_first_window_into_empty_root() {
    let (mut area, mut host) = setup();

    assert_eq!(area.dock_window(&mut host, A, None, DropZone::Left), Ok(true));

    assert_eq!(root_children(&area), vec![win(A)]);
    assert!(area.is_docked(A));
    assert_eq!(area.dock_info(A), Ok(DockInfo::new(DropZone::Left, None)));
    assert_eq!(host.calls(), &[HostCall::Dock(A)]);
    assert_consistent(&area);
}

#[test]
fn test_same_axis_insert_after_anchor() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();

    area.dock_window(&mut host, B, Some(A), DropZone::Right).unwrap();

    assert_eq!(root_children(&area), vec![win(A), win(B)]);
    assert_eq!(area.dock_location(B), Ok(DropZone::Right));
    assert_eq!(area.dock_anchor(B), Ok(Some(A)));
    assert_eq!(area.tree().splitter_count(), 1);
    assert_consistent(&area);
}

#[test]
fn test_same_axis_insert_before_anchor() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();
    area.dock_window(&mut host, B, Some(A), DropZone::Right).unwrap();

    area.dock_window(&mut host, C, Some(B), DropZone::Left).unwrap();

    assert_eq!(root_children(&area), vec![win(A), win(C), win(B)]);
    assert_consistent(&area);
}

#[test]
fn test_cross_axis_dock_splits_anchor_slot() {
    let (mut area, mut host) = setup();
    dock_abc(&mut area, &mut host);

    let children = root_children(&area);
    assert_eq!(children.len(), 2);
    assert_eq!(children[1], win(B));

    let split = children[0].as_splitter().expect("anchor slot holds a splitter");
    let node = area.tree().node(split).unwrap();
    assert_eq!(node.orientation(), Orientation::Vertical);
    assert_eq!(node.children(), &[win(C), win(A)]);
    assert_eq!(node.parent(), Some(area.tree().root()));
    assert_eq!(area.tree().parent_of_window(A), Some(split));
    assert_consistent(&area);
}

#[test]
fn test_cross_axis_bottom_puts_target_after_anchor() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();

    area.dock_window(&mut host, B, Some(A), DropZone::Bottom).unwrap();

    let split = root_children(&area)[0].as_splitter().unwrap();
    assert_eq!(area.tree().node(split).unwrap().children(), &[win(A), win(B)]);
    assert_consistent(&area);
}

#[test]
fn test_undock_collapses_two_child_splitter() {
    let (mut area, mut host) = setup();
    dock_abc(&mut area, &mut host);
    let split = root_children(&area)[0].as_splitter().unwrap();

    area.undock_window(&mut host, C).unwrap();

    assert_eq!(root_children(&area), vec![win(A), win(B)]);
    assert!(area.tree().splitter(split).is_none());
    assert_eq!(area.tree().parent_of_window(A), Some(area.tree().root()));
    assert!(!area.is_docked(C));
    assert_eq!(area.dock_info(C), Err(DockError::NotDocked(C)));
    assert_eq!(host.calls().last(), Some(&HostCall::Undock(C)));
    assert!(area.tree().degenerate_splitters().is_empty());
    assert_consistent(&area);
}

#[test]
fn test_dock_then_undock_restores_shape() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, B, None, DropZone::Left).unwrap();
    let before = area.tree().to_string();

    area.dock_window(&mut host, A, Some(B), DropZone::Left).unwrap();
    assert_eq!(root_children(&area), vec![win(A), win(B)]);
    area.undock_window(&mut host, A).unwrap();

    assert_eq!(area.tree().to_string(), before);
    assert_eq!(root_children(&area), vec![win(B)]);
    assert_consistent(&area);
}

#[test]
fn test_cross_axis_round_trip_restores_shape() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();
    area.dock_window(&mut host, B, Some(A), DropZone::Right).unwrap();
    let before = area.tree().to_string();

    area.dock_window(&mut host, C, Some(B), DropZone::Bottom).unwrap();
    assert_eq!(area.tree().splitter_count(), 2);
    area.undock_window(&mut host, C).unwrap();

    assert_eq!(area.tree().to_string(), before);
    assert_eq!(area.tree().splitter_count(), 1);
}

#[test]
fn test_docking_twice_is_rejected() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();

    assert_eq!(
        area.dock_window(&mut host, A, None, DropZone::Right),
        Err(DockError::AlreadyDocked(A))
    );
    assert_eq!(host.count_docks(), 1);
    assert_consistent(&area);
}

#[test]
fn test_center_leaves_everything_untouched() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();
    let before = area.tree().to_string();

    assert_eq!(area.dock_window(&mut host, B, Some(A), DropZone::Center), Ok(false));

    assert_eq!(area.tree().to_string(), before);
    assert!(!area.is_docked(B));
    assert_eq!(host.count_docks(), 1);
}

#[test]
fn test_registry_matches_tree_over_a_session() {
    let (mut area, mut host) = setup();
    let steps: &[(bool, WindowId, Option<WindowId>, DropZone)] = &[
        (true, A, None, DropZone::Left),
        (true, B, Some(A), DropZone::Right),
        (true, C, Some(B), DropZone::Top),
        (true, D, Some(C), DropZone::Left),
        (false, B, None, DropZone::Left),
        (true, B, Some(D), DropZone::Bottom),
        (false, A, None, DropZone::Left),
        (false, C, None, DropZone::Left),
        (true, A, None, DropZone::Right),
        (false, D, None, DropZone::Left),
        (false, B, None, DropZone::Left),
    ];

    for &(dock, window, anchor, zone) in steps {
        if dock {
            area.dock_window(&mut host, window, anchor, zone).unwrap();
        } else {
            area.undock_window(&mut host, window).unwrap();
            assert!(
                area.tree().degenerate_splitters().is_empty(),
                "degenerate splitter after undocking {window}:\n{}",
                area.tree()
            );
        }
        assert_consistent(&area);
    }

    assert_eq!(root_children(&area), vec![win(A)]);
}

#[test]
fn test_collapse_is_single_level() {
    let (mut area, mut host) = setup();
    dock_abc(&mut area, &mut host);
    // D left of C nests a horizontal splitter inside the vertical one.
    area.dock_window(&mut host, D, Some(C), DropZone::Left).unwrap();
    assert_eq!(
        area.tree().to_string(),
        "H\n├─ V\n│  ├─ H\n│  │  ├─ w4\n│  │  └─ w3\n│  └─ w1\n└─ w2\n"
    );

    area.undock_window(&mut host, A).unwrap();

    // The vertical splitter collapsed into its horizontal child, which now
    // sits inside the horizontal root instead of being merged into it.
    assert_eq!(
        area.tree().to_string(),
        "H\n├─ H\n│  ├─ w4\n│  └─ w3\n└─ w2\n"
    );
    assert_eq!(area.tree().splitter_count(), 2);
    assert_consistent(&area);
}

#[test]
fn test_root_keeps_lone_splitter_child() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();

    area.dock_window(&mut host, B, Some(A), DropZone::Top).unwrap();

    let children = root_children(&area);
    assert_eq!(children.len(), 1);
    assert!(children[0].as_splitter().is_some());
    assert_consistent(&area);

    area.undock_window(&mut host, A).unwrap();
    assert_eq!(root_children(&area), vec![win(B)]);
    assert_eq!(area.tree().splitter_count(), 1);
}

#[test]
fn test_vertical_root_orientation() {
    dockwork_core::logging::try_init();
    let config = DockingConfig::default().root_orientation(Orientation::Vertical);
    let mut area = DockingArea::with_config(config);
    let mut host = MockHost::new(Rect::new(0, 0, 1000, 800));
    area.dock_window(&mut host, A, None, DropZone::Top).unwrap();

    area.dock_window(&mut host, B, Some(A), DropZone::Top).unwrap();
    area.dock_window(&mut host, C, Some(A), DropZone::Right).unwrap();

    assert_eq!(area.tree().to_string(), "V\n├─ w2\n└─ H\n   ├─ w1\n   └─ w3\n");
    assert_consistent(&area);
}

#[test]
fn test_validate_reports_unregistered_leaf() {
    let (mut area, mut host) = setup();
    area.dock_window(&mut host, A, None, DropZone::Left).unwrap();

    let empty = dockwork::DockRegistry::new();
    assert_eq!(
        area.tree().validate(&empty),
        Err(vec![InvariantViolation::UnregisteredWindow(A)])
    );
}
