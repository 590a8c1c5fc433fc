//! An intrusive AVL tree, and an ordered set built on top of it.
//#![no_std]

// Conventions used in comments:
// - The height of a node `x` is denoted `h(x)`. A missing child has height 0, a leaf height 1.
// - The balance of a node `x` is `h(left(x)) - h(right(x))`.
// - A node is left-heavy if its balance is positive and right-heavy if it is negative.
//
// The invariants of an AVL tree, which hold whenever no public method is executing:
// 1. Every key in the left subtree of `x` is less than the key of `x`, and every key in the
//    right subtree is greater.
// 2. The balance of every node is -1, 0 or 1.
// 3. `h(x) = 1 + max(h(left(x)), h(right(x)))` for the cached height of every node.
// 4. Child and parent links agree, and the root has no parent.
//
// Corollary:
// 5. A tree of `n` nodes has height below `1.44 * log2(n + 2)`.
//
// Insertion and removal break (2) and (3) only along the path from the mutation point to the
// root. The retrace walks that path bottom-up, recomputing heights and rotating wherever the
// balance reaches +2 or -2.

use core::{
    cell::UnsafeCell,
    cmp::{self, Ordering},
    fmt,
    marker::PhantomPinned,
    mem,
    ops::Not,
    pin::Pin,
    ptr::NonNull,
    sync::atomic::{self, AtomicU64},
};
use std::borrow::Borrow;

use cordyceps::Linked;

mod debug;
pub mod error;
pub mod iter;
#[cfg(any(test, feature = "model"))]
pub mod model;
pub mod set;
pub mod visit;

#[cfg(test)]
mod tests;

pub use error::AvlError;
pub use set::AvlSet;
pub use visit::{NodeRef, PropertiesVisitor, Visitor};

pub trait TreeNode<L>: Linked<L> {
    type Key: Ord;

    fn key(&self) -> &Self::Key;
}

/// An intrusive AVL tree.
///
/// Every node caches the height of its subtree and carries a pointer to its parent, so insertion
/// and removal rebalance with a single bottom-up walk and no auxiliary allocation.
pub struct AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    root: Link<T>,
    len: usize,
    mod_count: u64,
    id: u64,
}

pub struct Links<T: ?Sized> {
    inner: UnsafeCell<LinksInner<T>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Dir {
    Left = 0,
    Right = 1,
}

impl Not for Dir {
    type Output = Dir;

    fn not(self) -> Self::Output {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[repr(C)]
struct LinksInner<T: ?Sized> {
    parent: Link<T>,
    children: [Link<T>; 2],
    height: u8,
    _unpin: PhantomPinned,
}

type Link<T> = Option<NonNull<T>>;

// Which kind of mutation a retrace follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Retrace {
    // Heights only grow; the walk may stop once a subtree's height is unchanged.
    Insert,
    // Heights only shrink; every ancestor must be visited.
    Remove,
}

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

impl<T> AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    /// Returns a new empty tree.
    pub fn new() -> AvlTree<T> {
        AvlTree {
            root: None,
            len: 0,
            mod_count: 0,
            id: NEXT_TREE_ID.fetch_add(1, atomic::Ordering::Relaxed),
        }
    }

    /// Returns `true` if the tree contains no elements.
    pub fn is_empty(&self) -> bool {
        let empty = self.len() == 0;
        debug_assert_eq!(empty, self.root.is_none());
        empty
    }

    /// Returns the number of elements in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of structural modifications made to the tree so far.
    ///
    /// Every insertion or removal that changes the membership of the tree increments this
    /// counter. Traversals compare against it to detect concurrent modification.
    pub const fn mod_count(&self) -> u64 {
        self.mod_count
    }

    /// Returns the height of the tree, which is 0 for an empty tree and 1 for a single node.
    pub fn height(&self) -> u8 {
        unsafe { Self::height_of(self.root) }
    }

    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.len, 0, "empty tree must have length 0");
            return;
        };

        unsafe {
            assert_eq!(T::links(root).as_ref().parent(), None, "root must not have a parent");
            let (_, count) = self.assert_invariants_at(root, None, None);
            assert_eq!(count, self.len, "length does not match the number of reachable nodes");
        }
    }

    // Checks the subtree rooted at `node`, whose keys must lie strictly between `lower` and
    // `upper`. Returns the subtree's height and node count.
    unsafe fn assert_invariants_at(
        &self,
        node: NonNull<T>,
        lower: Option<&T::Key>,
        upper: Option<&T::Key>,
    ) -> (u8, usize) {
        unsafe {
            let key = node.as_ref().key();
            if let Some(lower) = lower {
                assert!(lower < key, "binary search tree order violated");
            }
            if let Some(upper) = upper {
                assert!(key < upper, "binary search tree order violated");
            }

            let mut heights = [0u8; 2];
            let mut count = 1;

            for dir in [Dir::Left, Dir::Right] {
                if let Some(child) = T::links(node).as_ref().child(dir) {
                    // Ensure child's parent link points to this node.
                    let parent = T::links(child)
                        .as_ref()
                        .parent()
                        .expect("child parent pointer not set");
                    assert_eq!(node, parent);

                    let (lower, upper) = match dir {
                        Dir::Left => (lower, Some(key)),
                        Dir::Right => (Some(key), upper),
                    };
                    let (height, sub_count) = self.assert_invariants_at(child, lower, upper);
                    heights[dir as usize] = height;
                    count += sub_count;
                }
            }

            let height = 1 + cmp::max(heights[0], heights[1]);
            assert_eq!(
                T::links(node).as_ref().height(),
                height,
                "cached height is stale"
            );

            let balance = i16::from(heights[0]) - i16::from(heights[1]);
            assert!((-1..=1).contains(&balance), "balance {balance} out of range");

            (height, count)
        }
    }

    /// Returns a reference to the node corresponding to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<Pin<&T>>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let ptr = self.get_raw(key)?;
        unsafe { Some(Pin::new_unchecked(ptr.as_ref())) }
    }

    /// Returns `true` if the tree contains a node corresponding to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get_raw(key).is_some()
    }

    fn get_raw<Q>(&self, key: &Q) -> Link<T>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        match self.find_node_or_parent(key)? {
            (node, Ordering::Equal) => Some(node),
            _ => None,
        }
    }

    // Walks down from the root looking for `key`.
    //
    // Returns the node holding `key` together with `Ordering::Equal`, or else the last node
    // visited (the parent a new node for `key` would be attached to) together with the ordering
    // of `key` relative to it. Returns `None` only if the tree is empty.
    fn find_node_or_parent<Q>(&self, key: &Q) -> Option<(NonNull<T>, Ordering)>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root?;

        loop {
            unsafe {
                let ordering = key.cmp(cur.as_ref().key().borrow());
                let next = match ordering {
                    Ordering::Less => T::links(cur).as_ref().left(),
                    Ordering::Equal => None,
                    Ordering::Greater => T::links(cur).as_ref().right(),
                };

                match next {
                    Some(next) => cur = next,
                    None => return Some((cur, ordering)),
                }
            }
        }
    }

    /// Returns the minimum element of the tree.
    pub fn first(&self) -> Option<Pin<&T>> {
        let first = self.extreme(Dir::Left)?;
        unsafe { Some(Pin::new_unchecked(first.as_ref())) }
    }

    /// Returns the maximum element of the tree.
    pub fn last(&self) -> Option<Pin<&T>> {
        let last = self.extreme(Dir::Right)?;
        unsafe { Some(Pin::new_unchecked(last.as_ref())) }
    }

    fn extreme(&self, dir: Dir) -> Link<T> {
        let root = self.root?;
        Some(unsafe { self.extreme_in_subtree(root, dir).0 })
    }

    /// Removes and returns the minimum element of the tree.
    pub fn pop_first(&mut self) -> Result<Option<T::Handle>, AvlError> {
        match self.extreme(Dir::Left) {
            Some(first) => unsafe { self.remove_at(first).map(Some) },
            None => Ok(None),
        }
    }

    /// Removes and returns the maximum element of the tree.
    pub fn pop_last(&mut self) -> Result<Option<T::Handle>, AvlError> {
        match self.extreme(Dir::Right) {
            Some(last) => unsafe { self.remove_at(last).map(Some) },
            None => Ok(None),
        }
    }

    unsafe fn maybe_set_parent(&mut self, opt_node: Link<T>, parent: Link<T>) {
        let Some(node) = opt_node else {
            return;
        };

        unsafe { T::links(node).as_mut().set_parent(parent) };
    }

    #[inline]
    unsafe fn replace_child_or_set_root(
        &mut self,
        parent: Link<T>,
        old_child: NonNull<T>,
        new_child: Link<T>,
    ) {
        match parent {
            Some(parent) => unsafe { self.replace_child(parent, old_child, new_child) },
            None => self.root = new_child,
        }
    }

    // Replaces the child pointer of `parent` pointing at `old_child` with `new_child`.
    //
    // `new_child`'s parent pointer is not updated.
    //
    // # Safety
    //
    // The caller must ensure that `old_child` is a child node of `parent`.
    #[inline]
    unsafe fn replace_child(
        &mut self,
        parent: NonNull<T>,
        old_child: NonNull<T>,
        new_child: Link<T>,
    ) {
        unsafe {
            let links = T::links(parent).as_mut();

            if links.left() == Some(old_child) {
                links.set_left(new_child);
            } else {
                debug_assert_eq!(
                    links.right(),
                    Some(old_child),
                    "`old_child` must be a child of `parent`"
                );
                links.set_right(new_child);
            }
        }
    }

    // Rotates the subtree rooted at `cur` in direction `dir`, returning the new subtree root.
    //
    // The child of `cur` opposite `dir` (the pivot) moves up into `cur`'s position and `cur`
    // becomes the pivot's `dir` child. The heights of `cur`, the pivot and `cur`'s former parent
    // are recomputed, in that order.
    //
    // # Safety
    //
    // `cur` must be a node of this tree with a child in direction `!dir`.
    unsafe fn rotate(&mut self, cur: NonNull<T>, dir: Dir) -> NonNull<T> {
        unsafe {
            let pivot = T::links(cur)
                .as_ref()
                .child(!dir)
                .expect("rotation pivot must exist");
            let parent = T::links(cur).as_ref().parent();

            log::trace!("rotating {dir:?} at height {}", T::links(cur).as_ref().height());

            // - `cur` becomes the `dir` child of `pivot`.
            // - `across` goes from the `dir` child of `pivot` to the `!dir` child of `cur`.
            let across = T::links(pivot).as_ref().child(dir);
            T::links(cur).as_mut().set_child(!dir, across);
            self.maybe_set_parent(across, Some(cur));

            T::links(pivot).as_mut().set_child(dir, Some(cur));
            T::links(cur).as_mut().set_parent(Some(pivot));

            Self::update_height(cur);
            Self::update_height(pivot);

            T::links(pivot).as_mut().set_parent(parent);
            self.replace_child_or_set_root(parent, cur, Some(pivot));
            if let Some(parent) = parent {
                Self::update_height(parent);
            }

            pivot
        }
    }

    // Restores the balance of `cur`, whose balance is +2 or -2, returning the new subtree root.
    unsafe fn rebalance_at(
        &mut self,
        cur: NonNull<T>,
        balance: i16,
    ) -> Result<NonNull<T>, AvlError> {
        unsafe {
            let heavy = if balance > 0 { Dir::Left } else { Dir::Right };

            let Some(child) = T::links(cur).as_ref().child(heavy) else {
                return Err(invariant_violation(balance, None));
            };

            let child_balance = Self::balance_of(child);

            // Positive when `child` leans the same way as `cur`, negative when it leans the other
            // way. Only the latter needs a double rotation.
            let lean = match heavy {
                Dir::Left => child_balance,
                Dir::Right => -child_balance,
            };

            match lean {
                0 | 1 => {}
                -1 => {
                    self.rotate(child, heavy);
                }
                _ => return Err(invariant_violation(balance, Some(child_balance))),
            }

            Ok(self.rotate(cur, !heavy))
        }
    }

    // Walks from `from` up to the root, recomputing heights and rotating unbalanced nodes.
    unsafe fn retrace(&mut self, from: Link<T>, mode: Retrace) -> Result<(), AvlError> {
        let mut opt_cur = from;

        while let Some(cur) = opt_cur {
            unsafe {
                let old_height = T::links(cur).as_ref().height();
                Self::update_height(cur);
                let balance = Self::balance_of(cur);

                let subtree_root = match balance {
                    -1..=1 => cur,
                    -2 | 2 => self.rebalance_at(cur, balance)?,
                    _ => return Err(invariant_violation(balance, None)),
                };

                // After an insertion, a subtree that regained its old height leaves every
                // ancestor as it was.
                if mode == Retrace::Insert
                    && T::links(subtree_root).as_ref().height() == old_height
                {
                    break;
                }

                opt_cur = T::links(subtree_root).as_ref().parent();
            }
        }

        Ok(())
    }

    /// Inserts an item into the tree.
    ///
    /// If the tree already holds an item with an equal key, the tree is left unchanged and
    /// `item` is handed back as `Ok(Some(item))`.
    ///
    /// This operation completes in _O(log(n))_ time.
    pub fn insert(&mut self, item: T::Handle) -> Result<Option<T::Handle>, AvlError> {
        let ptr = T::into_ptr(item);

        // `Ord::cmp` may panic; the node is reclaimed if it does.
        let reclaim = Reclaim(ptr);
        let found = self.find_node_or_parent(unsafe { ptr.as_ref().key() });
        mem::forget(reclaim);

        let Some((parent, ordering)) = found else {
            // Tree is empty. Set `item` as the root and return.
            unsafe {
                let links = T::links(ptr).as_mut();
                links.clear();
                links.set_height(1);
            }

            self.root = Some(ptr);
            self.len += 1;
            self.mod_count += 1;
            return Ok(None);
        };

        let dir = match ordering {
            Ordering::Less => Dir::Left,
            Ordering::Equal => return Ok(Some(unsafe { T::from_ptr(ptr) })),
            Ordering::Greater => Dir::Right,
        };

        unsafe {
            let links = T::links(ptr).as_mut();
            links.clear();
            links.set_height(1);
            links.set_parent(Some(parent));

            T::links(parent).as_mut().set_child(dir, Some(ptr));
        }

        self.len += 1;
        self.mod_count += 1;

        // The new leaf is balanced by construction; start at its parent.
        unsafe { self.retrace(Some(parent), Retrace::Insert)? };

        Ok(None)
    }

    // Returns the extreme node in direction `dir` of the subtree rooted at `root`.
    //
    // If the subtree root is not the extreme node, also returns the extreme node's parent.
    #[inline]
    unsafe fn extreme_in_subtree(&self, root: NonNull<T>, dir: Dir) -> (NonNull<T>, Link<T>) {
        let mut parent = None;
        let mut cur = root;

        while let Some(next) = unsafe { T::links(cur).as_ref().child(dir) } {
            parent = Some(cur);
            cur = next;
        }

        (cur, parent)
    }

    /// Removes the node corresponding to `key`, if any, and returns it.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<T::Handle>, AvlError>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        match self.get_raw(key) {
            Some(node) => unsafe { self.remove_at(node).map(Some) },
            None => Ok(None),
        }
    }

    /// Removes an arbitrary node from the tree.
    ///
    /// # Safety
    ///
    /// It is the caller's responsibility to ensure that `node` is an element of `self`, and not any
    /// other tree.
    pub unsafe fn remove_at(&mut self, node: NonNull<T>) -> Result<T::Handle, AvlError> {
        // There are three possible cases:
        //
        // 1. `node` is a leaf.
        //
        //    It is unlinked from its parent, and the retrace starts at the parent.
        //
        // 2. `node` has one child.
        //
        //    The child is elevated into `node`'s position, and the retrace starts at the child.
        //
        // 3. `node` has two children.
        //
        //    A replacement is taken from the taller subtree: the maximum of the left subtree if it
        //    is at least as tall as the right, otherwise the minimum of the right subtree. The
        //    replacement has at most one child, so detaching it is case 1 or 2. It then assumes
        //    `node`'s place, and the retrace starts at the replacement's former parent.

        unsafe {
            let parent = T::links(node).as_ref().parent();
            let left = T::links(node).as_ref().left();
            let right = T::links(node).as_ref().right();

            let retrace_from = match (left, right) {
                (None, None) => {
                    log::trace!("removing leaf node");
                    self.replace_child_or_set_root(parent, node, None);
                    parent
                }

                (Some(child), None) | (None, Some(child)) => {
                    log::trace!("removing unary node");
                    self.replace_child_or_set_root(parent, node, Some(child));
                    T::links(child).as_mut().set_parent(parent);
                    Some(child)
                }

                (Some(left), Some(right)) => {
                    log::trace!("removing binary node");
                    Some(self.replace_with_successor(node, parent, left, right))
                }
            };

            T::links(node).as_mut().clear();

            self.len -= 1;
            self.mod_count += 1;

            let removed = T::from_ptr(node);
            self.retrace(retrace_from, Retrace::Remove)?;
            Ok(removed)
        }
    }

    // Moves the replacement node of the binary node `node` into `node`'s position.
    //
    // Returns the node at which the retrace must start.
    unsafe fn replace_with_successor(
        &mut self,
        node: NonNull<T>,
        parent: Link<T>,
        left: NonNull<T>,
        right: NonNull<T>,
    ) -> NonNull<T> {
        unsafe {
            // `side` is the subtree the replacement is taken from; `other` stays where it is.
            let left_height = Self::height_of(Some(left));
            let right_height = Self::height_of(Some(right));

            let (side, sub, other) = if left_height >= right_height {
                (Dir::Left, left, right)
            } else {
                (Dir::Right, right, left)
            };

            let (successor, successor_parent) = self.extreme_in_subtree(sub, !side);

            let retrace_from = match successor_parent {
                Some(successor_parent) => {
                    // Elevate the successor's only possible child to replace it.
                    let successor_child = T::links(successor).as_ref().child(side);
                    T::links(successor_parent)
                        .as_mut()
                        .set_child(!side, successor_child);
                    self.maybe_set_parent(successor_child, Some(successor_parent));

                    T::links(successor).as_mut().set_child(side, Some(sub));
                    T::links(sub).as_mut().set_parent(Some(successor));

                    successor_parent
                }

                // The successor is `sub` itself and keeps its `side` subtree.
                None => successor,
            };

            T::links(successor).as_mut().set_child(!side, Some(other));
            T::links(other).as_mut().set_parent(Some(successor));

            let height = T::links(node).as_ref().height();
            T::links(successor).as_mut().set_parent(parent);
            T::links(successor).as_mut().set_height(height);
            self.replace_child_or_set_root(parent, node, Some(successor));

            retrace_from
        }
    }

    /// Clears the tree, removing all elements.
    pub fn clear(&mut self) {
        let mut opt_cur = self.root;

        if opt_cur.is_some() {
            self.mod_count += 1;
        }

        while let Some(cur) = opt_cur {
            unsafe {
                // Descend to the minimum node.
                let (cur, parent) = self.extreme_in_subtree(cur, Dir::Left);
                let parent = parent.or_else(|| T::links(cur).as_ref().parent());

                let right = T::links(cur).as_ref().right();

                // Elevate the node's right child (which may be None).
                self.replace_child_or_set_root(parent, cur, right);
                self.maybe_set_parent(right, parent);

                // Drop the node.
                T::links(cur).as_mut().clear();
                drop(T::from_ptr(cur));
                self.len -= 1;

                // If the node had no right child, climb to the parent. If the node had no parent,
                // the tree is empty.
                opt_cur = right.or(parent);
            }
        }

        debug_assert!(self.root.is_none());
        debug_assert_eq!(self.len(), 0);
    }

    // Support methods ========================================================

    /// Returns the height of the pointed-to node, or 0 for a missing node.
    #[inline]
    pub(crate) unsafe fn height_of(node: Link<T>) -> u8 {
        node.map(|n| unsafe { T::links(n).as_ref().height() })
            .unwrap_or(0)
    }

    /// Returns the balance of `node` computed from its children's cached heights.
    #[inline]
    pub(crate) unsafe fn balance_of(node: NonNull<T>) -> i16 {
        unsafe {
            let links = T::links(node).as_ref();
            i16::from(Self::height_of(links.left())) - i16::from(Self::height_of(links.right()))
        }
    }

    #[inline]
    unsafe fn update_height(node: NonNull<T>) -> u8 {
        unsafe {
            let left = Self::height_of(T::links(node).as_ref().left());
            let right = Self::height_of(T::links(node).as_ref().right());
            let height = 1 + cmp::max(left, right);
            T::links(node).as_mut().set_height(height);
            height
        }
    }
}

// Drops a node handed to the tree whose insertion was cut short by a panic.
struct Reclaim<T: TreeNode<Links<T>> + ?Sized>(NonNull<T>);

impl<T: TreeNode<Links<T>> + ?Sized> Drop for Reclaim<T> {
    fn drop(&mut self) {
        drop(unsafe { T::from_ptr(self.0) });
    }
}

fn invariant_violation(balance: i16, child_balance: Option<i16>) -> AvlError {
    log::error!("undefined rotation case: balance {balance}, child balance {child_balance:?}");
    AvlError::InvariantViolation {
        balance,
        child_balance,
    }
}

impl<T> Default for AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: ?Sized> Links<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: UnsafeCell::new(LinksInner {
                parent: None,
                children: [None; 2],
                height: 0,
                _unpin: PhantomPinned,
            }),
        }
    }

    #[inline]
    fn height(&self) -> u8 {
        unsafe { (*self.inner.get()).height }
    }

    #[inline]
    fn parent(&self) -> Link<T> {
        unsafe { (*self.inner.get()).parent }
    }

    #[inline]
    fn child(&self, dir: Dir) -> Link<T> {
        unsafe { (*self.inner.get()).children[dir as usize] }
    }

    #[inline]
    fn left(&self) -> Link<T> {
        self.child(Dir::Left)
    }

    #[inline]
    fn right(&self) -> Link<T> {
        self.child(Dir::Right)
    }

    #[inline]
    fn set_parent(&mut self, parent: Link<T>) -> Link<T> {
        mem::replace(&mut self.inner.get_mut().parent, parent)
    }

    #[inline]
    fn set_child(&mut self, dir: Dir, child: Link<T>) -> Link<T> {
        mem::replace(&mut self.inner.get_mut().children[dir as usize], child)
    }

    #[inline]
    fn set_left(&mut self, left: Link<T>) -> Link<T> {
        self.set_child(Dir::Left, left)
    }

    #[inline]
    fn set_right(&mut self, right: Link<T>) -> Link<T> {
        self.set_child(Dir::Right, right)
    }

    #[inline]
    fn set_height(&mut self, height: u8) {
        self.inner.get_mut().height = height;
    }

    // Unlinks the node, leaving it as freshly constructed.
    #[inline]
    fn clear(&mut self) {
        let inner = self.inner.get_mut();
        inner.parent = None;
        inner.children = [None; 2];
        inner.height = 0;
    }
}

impl<T: ?Sized> fmt::Debug for Links<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Links")
            .field("parent", &self.parent())
            .field("left", &self.left())
            .field("right", &self.right())
            .field("height", &self.height())
            .finish()
    }
}

impl<T: ?Sized> Default for Links<T> {
    fn default() -> Self {
        Self::new()
    }
}
