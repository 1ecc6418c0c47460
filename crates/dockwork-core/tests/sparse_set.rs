//! SparseSet generational handle tests.
//!
//! The docking tree stores splitters in a SparseSet and hands out
//! `IndexSlot`s as splitter handles, so stale-handle detection and slot
//! reuse are what these tests pin down.

use dockwork_core::alloc::sparse_set::{IndexSlot, SparseSet};

#[derive(Debug, Clone, PartialEq)]
struct Node {
    children: Vec<u32>,
}

fn node(children: &[u32]) -> Node {
    Node {
        children: children.to_vec(),
    }
}

#[test]
fn test_push_and_get() {
    let mut set = SparseSet::new();

    let root = set.push(node(&[1, 2]));
    let nested = set.push(node(&[3]));

    assert_eq!(set.get(root).children, vec![1, 2]);
    assert_eq!(set.get(nested).children, vec![3]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut set = SparseSet::new();
    let idx = set.push(node(&[1]));

    set.get_mut(idx).children.push(7);

    assert_eq!(set.get(idx).children, vec![1, 7]);
}

#[test]
fn test_try_get_out_of_range() {
    let set = SparseSet::<Node>::new();
    assert!(set.try_get(IndexSlot::new(0, 999)).is_none());
}

#[test]
#[should_panic(expected = "invalid generation")]
fn test_use_after_free_panics() {
    let mut set = SparseSet::new();
    let idx = set.push(node(&[]));
    set.remove(idx);

    let _ = set.get(idx);
}

#[test]
#[should_panic]
fn test_remove_already_removed_panics() {
    let mut set = SparseSet::new();
    let idx = set.push(node(&[]));
    set.remove(idx);

    set.remove(idx);
}

#[test]
fn test_try_remove_stale_returns_none() {
    let mut set = SparseSet::new();
    let idx = set.push(node(&[]));

    assert!(set.try_remove(idx).is_some());
    assert!(set.try_remove(idx).is_none());
    assert!(set.is_empty());
}

#[test]
fn test_discarded_slot_is_reused_with_new_generation() {
    let mut set = SparseSet::new();

    let first = set.push(node(&[1]));
    let second = set.push(node(&[2]));
    set.remove(first);

    let replacement = set.push(node(&[9]));
    assert_eq!(replacement.index(), first.index());
    assert_eq!(replacement.generation(), first.generation() + 1);

    // The old handle must not resolve to the new occupant.
    assert!(!set.contains(first));
    assert_eq!(set.get(replacement).children, vec![9]);
    assert_eq!(set.get(second).children, vec![2]);
}

#[test]
fn test_iteration_skips_removed_slots() {
    let mut set = SparseSet::new();

    set.push(10);
    let idx = set.push(20);
    set.push(30);
    set.remove(idx);

    let values: Vec<_> = set.iter().copied().collect();
    assert_eq!(values, vec![10, 30]);

    for value in set.iter_mut() {
        *value += 1;
    }
    let values: Vec<_> = set.iter().copied().collect();
    assert_eq!(values, vec![11, 31]);
}

#[test]
fn test_churn_keeps_len_consistent() {
    let mut set = SparseSet::with_capacity(64);
    let handles: Vec<_> = (0..64).map(|i| set.push(i)).collect();

    for handle in handles.iter().step_by(2) {
        set.remove(*handle);
    }
    assert_eq!(set.len(), 32);

    for i in 64..96 {
        set.push(i);
    }
    assert_eq!(set.len(), 64);

    // All freed slots were recycled, so the backing storage did not grow.
    let max_index = set
        .iter_with_slots()
        .map(|(slot, _)| slot.index())
        .max()
        .unwrap();
    assert_eq!(max_index, 63);
}

#[test]
fn test_index_slot_equality() {
    assert_eq!(IndexSlot::new(0, 5), IndexSlot::new(0, 5));
    assert_ne!(IndexSlot::new(0, 5), IndexSlot::new(1, 5));
    assert_ne!(IndexSlot::new(0, 5), IndexSlot::new(0, 6));
}
