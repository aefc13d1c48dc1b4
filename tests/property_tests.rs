//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap and hierarchy invariants are always maintained.

use proptest::prelude::*;

use clinic_structures::binary_heap::BinaryMinHeap;
use clinic_structures::hierarchy::HierarchyTree;
use clinic_structures::triage::{Patient, TriageQueue};
use clinic_structures::{Heap, Hierarchy, Order};

/// The heap property holds after every push and pop
fn test_push_pop_invariant(ops: Vec<(bool, u32)>) -> Result<(), TestCaseError> {
    let mut heap = BinaryMinHeap::new();
    let mut inserted = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            if let Some((priority, _)) = heap.pop() {
                let pos = inserted.iter().position(|&p| p == priority);
                prop_assert!(pos.is_some(), "popped {} which was never pushed", priority);
                inserted.swap_remove(pos.unwrap_or_default());
            }
        } else {
            heap.push(value, value);
            inserted.push(value);
        }

        prop_assert!(heap.is_valid_heap());
        prop_assert_eq!(heap.len(), inserted.len());
        prop_assert_eq!(heap.peek().map(|(p, _)| *p), inserted.iter().min().copied());
    }

    Ok(())
}

/// n inserts followed by n extractions yield the sorted input
fn test_drain_sorts(urgencies: Vec<u32>) -> Result<(), TestCaseError> {
    let mut queue = TriageQueue::new();
    for (i, urgency) in urgencies.iter().enumerate() {
        queue.insert(Patient::new(format!("patient-{i}"), *urgency));
    }

    let mut drained = Vec::with_capacity(urgencies.len());
    while let Some(patient) = queue.extract_min() {
        drained.push(patient.urgency());
    }

    let mut expected = urgencies;
    expected.sort_unstable();
    prop_assert_eq!(drained, expected);
    prop_assert!(queue.is_empty());
    Ok(())
}

/// Repeated peeks change nothing observable
fn test_peek_idempotent(values: Vec<u32>, peeks: usize) -> Result<(), TestCaseError> {
    let mut peeked: BinaryMinHeap<u32, u32> = values.iter().map(|&v| (v, v)).collect();
    let mut untouched = peeked.clone();

    let first = peeked.peek().map(|(p, t)| (*p, *t));
    for _ in 0..peeks {
        prop_assert_eq!(peeked.peek().map(|(p, t)| (*p, *t)), first);
    }

    while let Some(expected) = untouched.pop() {
        prop_assert_eq!(peeked.pop(), Some(expected));
    }
    prop_assert!(peeked.is_empty());
    Ok(())
}

/// A random tree built from numbered nodes
///
/// Each step attaches node `i + 1` under an existing node picked by index.
fn build_tree(steps: &[(usize, bool)]) -> HierarchyTree {
    let mut tree = HierarchyTree::with_root("n0");
    let mut existing = vec!["n0".to_owned()];
    for (i, &(parent_pick, left)) in steps.iter().enumerate() {
        let parent = existing[parent_pick % existing.len()].clone();
        let child = format!("n{}", i + 1);
        let side = if left { "left" } else { "right" };
        if tree.insert(&parent, &child, side) {
            existing.push(child);
        }
        existing.retain(|name| tree.contains(name));
    }
    tree
}

/// All three traversals list the same set of names, once each
fn test_traversals_are_permutations(steps: Vec<(usize, bool)>) -> Result<(), TestCaseError> {
    let tree = build_tree(&steps);

    let mut pre = tree.preorder();
    let mut ino = tree.inorder();
    let mut post = tree.postorder();

    prop_assert_eq!(pre.len(), tree.len());
    prop_assert_eq!(pre.first().copied(), tree.root_name());
    prop_assert_eq!(post.last().copied(), tree.root_name());

    pre.sort_unstable();
    ino.sort_unstable();
    post.sort_unstable();
    prop_assert_eq!(&pre, &ino);
    prop_assert_eq!(&pre, &post);

    let mut deduped = pre.clone();
    deduped.dedup();
    prop_assert_eq!(deduped.len(), pre.len());
    Ok(())
}

/// Rejected inserts never change the tree
fn test_rejected_inserts_are_noops(
    steps: Vec<(usize, bool)>,
    token: String,
) -> Result<(), TestCaseError> {
    let mut tree = build_tree(&steps);
    let before = tree.clone();

    prop_assert!(!tree.insert("no-such-node", "x", "left"));
    if token != "left" && token != "right" {
        prop_assert!(!tree.insert("n0", "x", &token));
    }
    prop_assert_eq!(tree, before);
    Ok(())
}

/// Overwriting a side leaves exactly the new leaf there
fn test_overwrite_prunes(steps: Vec<(usize, bool)>, left: bool) -> Result<(), TestCaseError> {
    let mut tree = build_tree(&steps);
    let side = if left { "left" } else { "right" };

    prop_assert!(tree.insert("n0", "fresh", side));
    prop_assert_eq!(tree.walk_from("fresh", Order::Preorder), vec!["fresh"]);

    let root = tree.root().expect("root survives overwrites");
    let other = if left { root.right() } else { root.left() };
    let expected_len = 2 + other.map_or(0, |node| node.len());
    prop_assert_eq!(tree.len(), expected_len);
    Ok(())
}

proptest! {
    #[test]
    fn test_binary_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), 0u32..100), 0..200)) {
        test_push_pop_invariant(ops)?;
    }

    #[test]
    fn test_triage_drain_sorts(urgencies in prop::collection::vec(0u32..20, 0..150)) {
        test_drain_sorts(urgencies)?;
    }

    #[test]
    fn test_binary_peek_idempotent(values in prop::collection::vec(0u32..50, 0..80), peeks in 1usize..10) {
        test_peek_idempotent(values, peeks)?;
    }

    #[test]
    fn test_tree_traversals_are_permutations(steps in prop::collection::vec((0usize..64, any::<bool>()), 0..60)) {
        test_traversals_are_permutations(steps)?;
    }

    #[test]
    fn test_tree_rejected_inserts_are_noops(
        steps in prop::collection::vec((0usize..64, any::<bool>()), 0..40),
        token in "[a-zA-Z ]{0,8}"
    ) {
        test_rejected_inserts_are_noops(steps, token)?;
    }

    #[test]
    fn test_tree_overwrite_prunes(
        steps in prop::collection::vec((0usize..64, any::<bool>()), 0..40),
        left in any::<bool>()
    ) {
        test_overwrite_prunes(steps, left)?;
    }
}
