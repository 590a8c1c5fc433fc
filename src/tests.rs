extern crate std;

use std::{
    cell::Cell,
    cmp::Ordering,
    ops::Range,
    panic::{self, AssertUnwindSafe},
    prelude::v1::*,
    ptr::NonNull,
    rc::Rc,
};

use cordyceps::Linked;
use proptest::prelude::*;

use crate::model::{self, max_height, TestNode};

use super::*;

fn insert_find_all(keys: &[u32]) {
    let mut tree: AvlTree<TestNode> = AvlTree::new();

    for &key in keys {
        assert!(tree.insert(TestNode::new(key)).unwrap().is_none());
        tree.assert_invariants();
    }

    for key in keys {
        let node = tree.get_raw(key).expect("item not found");
        assert_eq!(unsafe { node.as_ref().key() }, key);
    }

    assert_eq!(tree.len(), keys.len());
}

#[test]
fn zero_elems_find() {
    insert_find_all(&[]);
}

#[test]
fn single_elem_find() {
    insert_find_all(&[0]);
}

#[test]
fn two_elems_find() {
    insert_find_all(&[0, 1]);
    insert_find_all(&[1, 0]);
}

#[test]
fn three_elems_find() {
    insert_find_all(&[0, 1, 2]);
    insert_find_all(&[0, 2, 1]);
    insert_find_all(&[1, 0, 2]);
    insert_find_all(&[1, 2, 0]);
    insert_find_all(&[2, 0, 1]);
    insert_find_all(&[2, 1, 0]);
}

#[test]
fn four_elems_find() {
    insert_find_all(&[0, 1, 2, 3]);
    insert_find_all(&[0, 1, 3, 2]);
    insert_find_all(&[0, 2, 1, 3]);
    insert_find_all(&[0, 2, 3, 1]);
    insert_find_all(&[0, 3, 1, 2]);
    insert_find_all(&[0, 3, 2, 1]);

    insert_find_all(&[1, 0, 2, 3]);
    insert_find_all(&[1, 0, 3, 2]);
    insert_find_all(&[1, 2, 0, 3]);
    insert_find_all(&[1, 2, 3, 0]);
    insert_find_all(&[1, 3, 0, 2]);
    insert_find_all(&[1, 3, 2, 0]);

    insert_find_all(&[2, 0, 1, 3]);
    insert_find_all(&[2, 0, 3, 1]);
    insert_find_all(&[2, 1, 0, 3]);
    insert_find_all(&[2, 1, 3, 0]);
    insert_find_all(&[2, 3, 0, 1]);
    insert_find_all(&[2, 3, 1, 0]);

    insert_find_all(&[3, 0, 1, 2]);
    insert_find_all(&[3, 0, 2, 1]);
    insert_find_all(&[3, 1, 0, 2]);
    insert_find_all(&[3, 1, 2, 0]);
    insert_find_all(&[3, 2, 0, 1]);
    insert_find_all(&[3, 2, 1, 0]);
}

fn insert_remove_all(keys: &[u32]) {
    let mut tree: AvlTree<TestNode> = AvlTree::new();

    for &key in keys {
        tree.insert(TestNode::new(key)).unwrap();
        tree.assert_invariants();
    }

    for key in keys {
        let node = tree.get_raw(key).expect("item not found");
        let removed = unsafe { tree.remove_at(node) }.unwrap();
        assert_eq!(removed.key, *key);
        tree.assert_invariants();
    }

    assert!(tree.is_empty());

    for &key in keys {
        tree.insert(TestNode::new(key)).unwrap();
        tree.assert_invariants();
    }

    for key in keys.iter().rev() {
        let removed = tree.remove(key).unwrap().expect("item not found");
        assert_eq!(removed.key, *key);
        tree.assert_invariants();
    }

    assert!(tree.is_empty());
}

#[test]
fn remove_one() {
    insert_remove_all(&[0]);
}

#[test]
fn remove_two() {
    insert_remove_all(&[0, 1]);
    insert_remove_all(&[1, 0]);
}

#[test]
fn remove_three() {
    insert_remove_all(&[0, 1, 2]);
    insert_remove_all(&[0, 2, 1]);
    insert_remove_all(&[1, 0, 2]);
    insert_remove_all(&[1, 2, 0]);
    insert_remove_all(&[2, 0, 1]);
    insert_remove_all(&[2, 1, 0]);
}

#[test]
fn remove_four() {
    insert_remove_all(&[0, 1, 2, 3]);
    insert_remove_all(&[0, 1, 3, 2]);
    insert_remove_all(&[0, 2, 1, 3]);
    insert_remove_all(&[0, 2, 3, 1]);
    insert_remove_all(&[0, 3, 1, 2]);
    insert_remove_all(&[0, 3, 2, 1]);

    insert_remove_all(&[1, 0, 2, 3]);
    insert_remove_all(&[1, 0, 3, 2]);
    insert_remove_all(&[1, 2, 0, 3]);
    insert_remove_all(&[1, 2, 3, 0]);
    insert_remove_all(&[1, 3, 0, 2]);
    insert_remove_all(&[1, 3, 2, 0]);

    insert_remove_all(&[2, 0, 1, 3]);
    insert_remove_all(&[2, 0, 3, 1]);
    insert_remove_all(&[2, 1, 0, 3]);
    insert_remove_all(&[2, 1, 3, 0]);
    insert_remove_all(&[2, 3, 0, 1]);
    insert_remove_all(&[2, 3, 1, 0]);

    insert_remove_all(&[3, 0, 1, 2]);
    insert_remove_all(&[3, 0, 2, 1]);
    insert_remove_all(&[3, 1, 0, 2]);
    insert_remove_all(&[3, 1, 2, 0]);
    insert_remove_all(&[3, 2, 0, 1]);
    insert_remove_all(&[3, 2, 1, 0]);
}

fn set_of(values: &[i32]) -> AvlSet<i32> {
    let mut set = AvlSet::new();

    for &value in values {
        assert!(set.insert(value).unwrap(), "value = {value}");
        set.assert_invariants();
    }

    set
}

fn root_value(set: &AvlSet<i32>) -> i32 {
    *set.root().expect("set is empty").key()
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut tree: AvlTree<TestNode> = AvlTree::new();
    tree.insert(TestNode::new(1)).unwrap();
    tree.insert(TestNode::new(2)).unwrap();
    let mod_count = tree.mod_count();

    let rejected = tree.insert(TestNode::new(1)).unwrap().expect("duplicate was inserted");
    assert_eq!(rejected.key, 1);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.mod_count(), mod_count);

    let mut set = set_of(&[5, 3]);
    assert!(!set.insert(5).unwrap());
    assert_eq!(set.len(), 2);
}

#[derive(Debug)]
struct Tagged {
    value: i32,
    tag: &'static str,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

#[test]
fn duplicate_insert_keeps_stored_value() {
    let mut set = AvlSet::new();
    assert!(set.insert(Tagged { value: 1, tag: "first" }).unwrap());
    let mod_count = set.mod_count();

    assert!(!set.insert(Tagged { value: 1, tag: "second" }).unwrap());
    assert_eq!(set.mod_count(), mod_count);
    assert_eq!(set.len(), 1);
    assert_eq!(set.first().unwrap().tag, "first");
}

const POISON: u32 = u32::MAX;

// Comparing against `POISON` panics.
#[derive(Debug, PartialEq, Eq)]
struct TouchyKey(u32);

impl PartialOrd for TouchyKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TouchyKey {
    fn cmp(&self, other: &Self) -> Ordering {
        assert!(self.0 != POISON && other.0 != POISON, "poisoned comparison");
        self.0.cmp(&other.0)
    }
}

#[repr(C)]
struct CountedNode {
    links: Links<CountedNode>,
    key: TouchyKey,
    drops: Rc<Cell<usize>>,
}

impl CountedNode {
    fn new(key: u32, drops: &Rc<Cell<usize>>) -> Box<CountedNode> {
        Box::new(CountedNode {
            links: Links::new(),
            key: TouchyKey(key),
            drops: drops.clone(),
        })
    }
}

impl Drop for CountedNode {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

unsafe impl Linked<Links<CountedNode>> for CountedNode {
    type Handle = Box<CountedNode>;

    fn into_ptr(r: Self::Handle) -> NonNull<Self> {
        NonNull::new(Box::into_raw(r)).unwrap()
    }

    unsafe fn from_ptr(ptr: NonNull<Self>) -> Self::Handle {
        unsafe { Box::from_raw(ptr.as_ptr()) }
    }

    unsafe fn links(ptr: NonNull<Self>) -> NonNull<Links<CountedNode>> {
        // SAFETY: Self is #[repr(C)] and `links` is first field
        ptr.cast()
    }
}

impl TreeNode<Links<CountedNode>> for CountedNode {
    type Key = TouchyKey;

    fn key(&self) -> &Self::Key {
        &self.key
    }
}

#[test]
fn panicking_comparison_drops_new_node() {
    let drops = Rc::new(Cell::new(0));
    let mut tree: AvlTree<CountedNode> = AvlTree::new();
    tree.insert(CountedNode::new(1, &drops)).unwrap();
    let mod_count = tree.mod_count();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _ = tree.insert(CountedNode::new(POISON, &drops));
    }));

    assert!(result.is_err());
    assert_eq!(drops.get(), 1);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.mod_count(), mod_count);
    tree.assert_invariants();

    drop(tree);
    assert_eq!(drops.get(), 2);
}

#[test]
fn left_left_rebalance() {
    let set = set_of(&[10, 7, 15, 3, 9, 2]);

    let root = set.root().unwrap();
    assert_eq!(*root.key(), 7);
    assert!(root.parent().is_none());
    assert_eq!(root.height(), 3);
    assert_eq!(root.balance(), 0);

    assert_eq!(*root.left().unwrap().key(), 3);
    assert_eq!(*root.right().unwrap().key(), 10);
}

#[test]
fn single_and_double_rotations() {
    // left-left, right-right, left-right, right-left
    for values in [[3, 2, 1], [1, 2, 3], [3, 1, 2], [1, 3, 2]] {
        let set = set_of(&values);
        let root = set.root().unwrap();

        assert_eq!(*root.key(), 2, "values = {values:?}");
        assert_eq!(root.height(), 2);
        assert_eq!(*root.left().unwrap().key(), 1);
        assert_eq!(*root.right().unwrap().key(), 3);
        assert_eq!(root.left().unwrap().parent(), Some(root));
        assert_ne!(root.left(), root.right());
    }
}

#[test]
fn add_with_different_rotations_and_contains() {
    let set = set_of(&[5, 12, 8, 3, 20, 4, 2, 1, 50, 37]);

    for value in [5, 12, 8, 3, 20, 4, 2, 1, 50, 37] {
        assert!(set.contains(&value), "value not found: {value}");
    }

    for value in [-1, 6, 10, 51, 133] {
        assert!(!set.contains(&value), "unexpected value: {value}");
    }
}

#[test]
fn remove_until_empty() {
    let mut set = set_of(&[50, 120, 20, 90, 150, 5]);

    for value in [90, 150, 5, 20, 120, 50] {
        assert!(set.remove(&value).unwrap(), "value = {value}");
        assert!(!set.contains(&value));
        set.assert_invariants();
    }

    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert!(set.root().is_none());
}

#[test]
fn remove_binary_node_takes_from_taller_side() {
    // Left subtree taller: the maximum of the left subtree replaces the root.
    let mut set = set_of(&[5, 3, 8, 2]);
    assert!(set.remove(&5).unwrap());
    assert_eq!(root_value(&set), 3);
    set.assert_invariants();

    // Right subtree taller: the minimum of the right subtree replaces the root.
    let mut set = set_of(&[5, 3, 8, 9]);
    assert!(set.remove(&5).unwrap());
    assert_eq!(root_value(&set), 8);
    set.assert_invariants();

    // Equal heights favour the left subtree.
    let mut set = set_of(&[5, 3, 8]);
    assert!(set.remove(&5).unwrap());
    assert_eq!(root_value(&set), 3);
    assert_eq!(*set.root().unwrap().right().unwrap().key(), 8);
    set.assert_invariants();
}

#[test]
fn remove_deep_successor() {
    // Both subtrees of 20 have height 3; its replacement is 15, the maximum of the left subtree.
    let mut set = set_of(&[20, 10, 30, 5, 15, 25, 40, 3, 13, 35, 12]);

    assert!(set.remove(&20).unwrap());
    set.assert_invariants();
    assert!(!set.contains(&20));
    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        [3, 5, 10, 12, 13, 15, 25, 30, 35, 40]
    );
}

#[test]
fn remove_rotates_once_over_balanced_child() {
    // Removing 1 leaves 2 right-heavy over 4, whose subtrees are equally tall.
    let mut set = set_of(&[2, 1, 4, 3, 5]);
    assert!(set.remove(&1).unwrap());
    set.assert_invariants();

    let root = set.root().unwrap();
    assert_eq!(*root.key(), 4);
    assert_eq!(root.height(), 3);
    assert_eq!(root.balance(), 1);
    let left = root.left().unwrap();
    assert_eq!(*left.key(), 2);
    assert!(left.left().is_none());
    assert_eq!(*left.right().unwrap().key(), 3);
    assert_eq!(*root.right().unwrap().key(), 5);

    // Mirror image.
    let mut set = set_of(&[4, 5, 2, 1, 3]);
    assert!(set.remove(&5).unwrap());
    set.assert_invariants();

    let root = set.root().unwrap();
    assert_eq!(*root.key(), 2);
    assert_eq!(root.height(), 3);
    assert_eq!(root.balance(), -1);
    let right = root.right().unwrap();
    assert_eq!(*right.key(), 4);
    assert!(right.right().is_none());
    assert_eq!(*right.left().unwrap().key(), 3);
    assert_eq!(*root.left().unwrap().key(), 1);
}

#[test]
fn remove_absent_leaves_tree_unchanged() {
    let mut set = set_of(&[8, 4, 12, 2, 6]);

    let mut before = String::new();
    set.tree.dotgraph("g", &mut before).unwrap();
    let mod_count = set.mod_count();

    assert!(!set.remove(&7).unwrap());
    assert!(!set.remove(&100).unwrap());

    let mut after = String::new();
    set.tree.dotgraph("g", &mut after).unwrap();

    assert_eq!(before, after);
    assert_eq!(set.len(), 5);
    assert_eq!(set.mod_count(), mod_count);

    let mut empty: AvlSet<i32> = AvlSet::new();
    assert!(!empty.remove(&1).unwrap());
}

#[test]
fn insert_then_remove_round_trip() {
    let mut set = AvlSet::new();

    for value in 0..200 {
        assert!(set.insert(value).unwrap());
        assert!(set.contains(&value));
        assert!(set.remove(&value).unwrap());
        assert!(!set.contains(&value));
        set.assert_invariants();
    }

    assert!(set.is_empty());
}

#[test]
fn ascending_iteration() {
    let values = [78, 30, 83, 52, 9, 92, 27, 5, 34, 2, 62, 36, 49, 58, 38];
    let set = set_of(&values);

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let iter = set.iter();
    assert_eq!(iter.len(), values.len());
    assert_eq!(iter.copied().collect::<Vec<_>>(), sorted);
    assert_eq!((&set).into_iter().count(), set.len());

    assert_eq!(format!("{:?}", set_of(&[3, 1, 2])), "{1, 2, 3}");
}

#[test]
fn traversal_yields_ascending_values() {
    let set = set_of(&[4, 2, 6, 1, 3, 5, 7]);
    let mut traversal = set.traversal();

    let mut seen = Vec::new();
    while traversal.has_next() {
        seen.push(*traversal.next(&set).unwrap());
    }

    assert_eq!(seen, [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(traversal.next(&set), Err(AvlError::IteratorExhausted));
    assert!(!traversal.has_next());
}

#[test]
fn traversal_of_empty_set_is_exhausted() {
    let set: AvlSet<i32> = AvlSet::new();
    let mut traversal = set.traversal();

    assert!(!traversal.has_next());
    assert_eq!(traversal.next(&set), Err(AvlError::IteratorExhausted));
}

#[test]
fn traversal_fails_fast_after_insert() {
    let mut set = set_of(&[2, 1, 3]);
    let mut traversal = set.traversal();
    assert_eq!(traversal.next(&set), Ok(&1));

    set.insert(4).unwrap();

    assert!(traversal.has_next());
    assert_eq!(traversal.next(&set), Err(AvlError::ConcurrentModification));
    assert_eq!(traversal.next(&set), Err(AvlError::ConcurrentModification));
}

#[test]
fn traversal_fails_fast_after_remove() {
    let mut set = set_of(&[2, 1, 3]);
    let mut traversal = set.traversal();

    set.remove(&3).unwrap();

    assert_eq!(traversal.next(&set), Err(AvlError::ConcurrentModification));
}

#[test]
fn traversal_fails_fast_after_undone_change() {
    let mut set = set_of(&[2, 1, 3]);
    let mut traversal = set.traversal();

    set.insert(10).unwrap();
    set.remove(&10).unwrap();

    assert_eq!(traversal.next(&set), Err(AvlError::ConcurrentModification));
}

#[test]
fn traversal_fails_fast_after_clear() {
    let mut set = set_of(&[2, 1, 3]);
    let mut traversal = set.traversal();

    set.clear();
    assert!(set.is_empty());

    assert_eq!(traversal.next(&set), Err(AvlError::ConcurrentModification));
}

#[test]
fn traversal_survives_no_op_mutations() {
    let mut set = set_of(&[2, 1, 3]);
    let mut traversal = set.traversal();

    assert!(!set.insert(2).unwrap());
    assert!(!set.remove(&9).unwrap());

    assert_eq!(traversal.next(&set), Ok(&1));
}

#[test]
fn traversal_rejects_foreign_tree() {
    let first = set_of(&[1, 2, 3]);
    let second = set_of(&[1, 2, 3]);
    let mut traversal = first.traversal();

    assert_eq!(traversal.next(&second), Err(AvlError::ForeignTree));
    assert_eq!(traversal.next(&first), Ok(&1));
}

#[test]
fn insert_absent_value() {
    let mut set: AvlSet<i32> = AvlSet::new();

    assert!(matches!(
        set.insert_opt(None),
        Err(AvlError::InvalidArgument(_))
    ));
    assert!(set.is_empty());

    assert_eq!(set.insert_opt(Some(1)), Ok(true));
    assert_eq!(set.insert_opt(Some(1)), Ok(false));
}

#[test]
fn dynamically_typed_lookups() {
    let mut set = set_of(&[1, 2, 3]);

    assert_eq!(set.contains_dyn(Some(&2i32)), Ok(true));
    assert_eq!(set.contains_dyn(Some(&7i32)), Ok(false));
    assert_eq!(set.contains_dyn(None), Ok(false));
    assert_eq!(
        set.contains_dyn(Some(&"two")),
        Err(AvlError::TypeMismatch { expected: "i32" })
    );

    assert_eq!(set.remove_dyn(Some(&2u64)), Err(AvlError::TypeMismatch { expected: "i32" }));
    assert_eq!(set.remove_dyn(None), Ok(false));
    assert_eq!(set.remove_dyn(Some(&2i32)), Ok(true));
    assert_eq!(set.len(), 2);
}

#[test]
fn visit_post_order_reports_height_and_balance() {
    let set = set_of(&[1, 2, 3, 4, 5, 6, 7]);

    let mut visited = Vec::new();
    set.visit_post_order(|&value, height, balance| visited.push((value, height, balance)));

    assert_eq!(
        visited,
        [
            (1, 1, 0),
            (3, 1, 0),
            (2, 2, 0),
            (5, 1, 0),
            (7, 1, 0),
            (6, 2, 0),
            (4, 3, 0),
        ]
    );
}

#[test]
fn properties_visitor_bounds_balance_and_height() {
    let mut set = AvlSet::new();
    for value in 0..1000 {
        set.insert(value).unwrap();
    }
    for value in (0..1000).step_by(3) {
        set.remove(&value).unwrap();
    }
    set.assert_invariants();

    let mut props = PropertiesVisitor::new();
    set.tree.visit_post_order(&mut props);

    assert_eq!(props.height(), set.height());
    assert!(props.height() <= max_height(set.len()));
    assert!(props.min_balance().unwrap() >= -1);
    assert!(props.max_balance().unwrap() <= 1);

    let empty = PropertiesVisitor::new();
    assert_eq!(empty.min_balance(), None);
    assert_eq!(empty.height(), 0);
}

#[test]
fn closures_and_visitors_share_post_order() {
    let mut tree: AvlTree<TestNode> = AvlTree::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        tree.insert(TestNode::new(key)).unwrap();
    }

    let mut keys = Vec::new();
    tree.visit_post_order(&mut |node: NodeRef<'_, TestNode>| keys.push(*node.key()));
    assert_eq!(keys, [1, 3, 2, 5, 7, 6, 4]);

    let mut props = PropertiesVisitor::new();
    tree.visit_post_order(&mut props);
    assert_eq!(props.height(), 3);
    assert_eq!(props.min_balance(), Some(0));
    assert_eq!(props.max_balance(), Some(0));

    let empty: AvlTree<TestNode> = AvlTree::new();
    let mut nothing = PropertiesVisitor::new();
    empty.visit_post_order(&mut nothing);
    assert_eq!(nothing, PropertiesVisitor::new());
}

#[test]
fn height_stays_logarithmic() {
    let mut set = AvlSet::new();

    for value in 0..10_000u32 {
        set.insert(value).unwrap();
    }
    assert!(set.height() <= max_height(set.len()));

    for value in (0..10_000u32).rev().step_by(2) {
        set.remove(&value).unwrap();
    }
    set.assert_invariants();
    assert!(set.height() <= max_height(set.len()));
    assert_eq!(set.len(), 5_000);
}

#[test]
fn first_last_and_pop() {
    let mut tree: AvlTree<TestNode> = AvlTree::new();
    assert!(tree.first().is_none());
    assert!(tree.pop_last().unwrap().is_none());

    for key in [5, 1, 9, 3, 7] {
        tree.insert(TestNode::new(key)).unwrap();
    }

    assert_eq!(tree.first().unwrap().key, 1);
    assert_eq!(tree.last().unwrap().key, 9);

    assert_eq!(tree.pop_first().unwrap().unwrap().key, 1);
    assert_eq!(tree.pop_last().unwrap().unwrap().key, 9);
    tree.assert_invariants();

    assert_eq!(
        tree.iter().map(|node| node.key).collect::<Vec<_>>(),
        [3, 5, 7]
    );
}

#[test]
fn clear_and_reuse() {
    let mut set = set_of(&[4, 2, 6, 1, 3]);
    let mod_count = set.mod_count();

    set.clear();
    assert!(set.is_empty());
    assert!(set.mod_count() > mod_count);
    set.assert_invariants();

    assert!(set.insert(1).unwrap());
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&1));
}

#[test]
fn corrupted_heights_are_reported() {
    let mut tree: AvlTree<TestNode> = AvlTree::new();
    for key in [2, 1, 3] {
        tree.insert(TestNode::new(key)).unwrap();
    }

    let three = tree.get_raw(&3).unwrap();
    unsafe { TestNode::links(three).as_mut().set_height(10) };

    assert_eq!(
        tree.insert(TestNode::new(0)).unwrap_err(),
        AvlError::InvariantViolation {
            balance: -8,
            child_balance: None,
        }
    );
}

#[test]
fn dotgraph() {
    let empty: AvlTree<TestNode> = AvlTree::new();
    let mut out = String::new();
    empty.dotgraph("empty", &mut out).unwrap();
    assert_eq!(out, "digraph \"graph-empty\" {}");

    let mut tree: AvlTree<TestNode> = AvlTree::new();
    for key in [2, 1] {
        tree.insert(TestNode::new(key)).unwrap();
    }

    let mut out = String::new();
    tree.dotgraph("g", &mut out).unwrap();

    assert!(out.contains("\"graphg-2\" [label=\"2 h:2 b:1\"];"));
    assert!(out.contains("\"graphg-1\" [label=\"1 h:1 b:0\"];"));
    assert!(out.contains("\"graphg-2\" -> \"graphg-1\";"));
    assert!(out.contains("\"graphg-2\" -> \"graphg-missing0\";"));
}

#[cfg(miri)]
const FUZZ_RANGE: Range<usize> = 0..10;

#[cfg(not(miri))]
const FUZZ_RANGE: Range<usize> = 0..1000;

proptest::proptest! {
    #![proptest_config(ProptestConfig {
        max_shrink_iters: 65536,
        .. ProptestConfig::default()
    })]

    #[test]
    fn btree_equivalence(ops in proptest::collection::vec(model::op_strategy(), FUZZ_RANGE)) {
        model::run_btree_equivalence(ops);
    }
}
