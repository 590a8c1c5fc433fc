extern crate alloc;

use alloc::boxed::Box;
use core::{
    any::{self, Any},
    borrow::Borrow,
    fmt,
    iter::FusedIterator,
    marker::PhantomPinned,
    ptr::NonNull,
};

use cordyceps::Linked;

use crate::{iter, visit::NodeRef, AvlError, AvlTree, Links, TreeNode};

/// An ordered set based on an [AVL tree].
///
/// [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
pub struct AvlSet<T: Ord> {
    pub(crate) tree: AvlTree<SetNode<T>>,
}

/// A node of an [`AvlSet`], as exposed through [`AvlSet::root`].
pub struct SetNode<T> {
    links: Links<SetNode<T>>,
    value: T,
    _unpin: PhantomPinned,
}

impl<T> SetNode<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(SetNode {
            links: Links::new(),
            value,
            _unpin: PhantomPinned,
        })
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }
}

unsafe impl<T> Linked<Links<SetNode<T>>> for SetNode<T> {
    type Handle = Box<Self>;

    fn into_ptr(r: Self::Handle) -> NonNull<Self> {
        Box::leak(r).into()
    }

    unsafe fn from_ptr(ptr: NonNull<Self>) -> Self::Handle {
        unsafe { Box::from_raw(ptr.as_ptr()) }
    }

    unsafe fn links(ptr: NonNull<Self>) -> NonNull<Links<SetNode<T>>> {
        let ptr = ptr.as_ptr();
        // SAFETY: `ptr` is non-null, so a pointer to one of its fields is too.
        unsafe { NonNull::new_unchecked(core::ptr::addr_of_mut!((*ptr).links)) }
    }
}

impl<T: Ord> TreeNode<Links<SetNode<T>>> for SetNode<T> {
    type Key = T;

    fn key(&self) -> &Self::Key {
        &self.value
    }
}

impl<T: Ord> AvlSet<T> {
    /// Creates a new, empty `AvlSet`.
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the height of the underlying tree.
    pub fn height(&self) -> u8 {
        self.tree.height()
    }

    /// Returns `true` if the set contains `value`.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(value)
    }

    /// Returns a reference to the element equal to `value`, if any.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(value).map(|node| &node.get_ref().value)
    }

    /// Adds `value` to the set.
    ///
    /// Returns `false`, leaving the set unchanged, if an equal value is already present. No node
    /// is allocated for a rejected value.
    pub fn insert(&mut self, value: T) -> Result<bool, AvlError> {
        if self.tree.contains(&value) {
            return Ok(false);
        }

        Ok(self.tree.insert(SetNode::new(value))?.is_none())
    }

    /// Adds a possibly absent value to the set.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::InvalidArgument`] if `value` is `None`.
    pub fn insert_opt(&mut self, value: Option<T>) -> Result<bool, AvlError> {
        let value = value.ok_or(AvlError::InvalidArgument("can't insert an absent value"))?;
        self.insert(value)
    }

    /// Removes `value` from the set, returning `true` if it was present.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> Result<bool, AvlError>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Ok(self.tree.remove(value)?.is_some())
    }

    /// Removes and returns the element equal to `value`, if any.
    #[inline]
    pub fn take<Q>(&mut self, value: &Q) -> Result<Option<T>, AvlError>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Ok(self.tree.remove(value)?.map(|node| node.value))
    }

    /// Returns the minimum element of the set.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|node| &node.get_ref().value)
    }

    /// Removes and returns the minimum element of the set.
    #[inline]
    pub fn pop_first(&mut self) -> Result<Option<T>, AvlError> {
        Ok(self.tree.pop_first()?.map(|node| node.value))
    }

    /// Returns the maximum element of the set.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tree.last().map(|node| &node.get_ref().value)
    }

    /// Removes and returns the maximum element of the set.
    #[inline]
    pub fn pop_last(&mut self) -> Result<Option<T>, AvlError> {
        Ok(self.tree.pop_last()?.map(|node| node.value))
    }

    /// Clears the set, removing all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over the elements of the set in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Returns a fail-fast traversal over the elements of the set in ascending order.
    ///
    /// See [`iter::Traversal`] for how the traversal detects modification of the set.
    pub fn traversal(&self) -> Traversal<T> {
        Traversal {
            inner: self.tree.traversal(),
        }
    }

    /// Returns a view of the root node of the underlying tree.
    pub fn root(&self) -> Option<NodeRef<'_, SetNode<T>>> {
        self.tree.root()
    }

    /// Calls `visit` with the value, height and balance of every node in post-order.
    pub fn visit_post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T, u8, i16),
    {
        self.tree.visit_post_order(&mut |node: NodeRef<'_, SetNode<T>>| {
            visit(&node.get().value, node.height(), node.balance())
        });
    }

    /// Returns the number of structural modifications made to the set so far.
    pub const fn mod_count(&self) -> u64 {
        self.tree.mod_count()
    }

    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        self.tree.assert_invariants();
    }
}

impl<T: Ord + Any> AvlSet<T> {
    /// Returns `true` if the set contains the dynamically typed `value`.
    ///
    /// An absent value is never contained.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::TypeMismatch`] if `value` is not a `T`.
    pub fn contains_dyn(&self, value: Option<&dyn Any>) -> Result<bool, AvlError> {
        match value {
            Some(value) => Ok(self.contains(downcast::<T>(value)?)),
            None => Ok(false),
        }
    }

    /// Removes the dynamically typed `value` from the set, returning `true` if it was present.
    ///
    /// Removing an absent value is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::TypeMismatch`] if `value` is not a `T`.
    pub fn remove_dyn(&mut self, value: Option<&dyn Any>) -> Result<bool, AvlError> {
        match value {
            Some(value) => self.remove(downcast::<T>(value)?),
            None => Ok(false),
        }
    }
}

fn downcast<T: Any>(value: &dyn Any) -> Result<&T, AvlError> {
    value.downcast_ref::<T>().ok_or(AvlError::TypeMismatch {
        expected: any::type_name::<T>(),
    })
}

impl<T: Ord> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An iterator over the elements of an [`AvlSet`] in ascending order.
pub struct Iter<'set, T: Ord> {
    inner: iter::Iter<'set, SetNode<T>>,
}

impl<'set, T: Ord> Iterator for Iter<'set, T> {
    type Item = &'set T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<'set, T: Ord> IntoIterator for &'set AvlSet<T> {
    type Item = &'set T;
    type IntoIter = Iter<'set, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A fail-fast traversal over the elements of an [`AvlSet`] in ascending order.
pub struct Traversal<T: Ord> {
    inner: iter::Traversal<SetNode<T>>,
}

impl<T: Ord> Traversal<T> {
    /// Returns `true` if the traversal has more elements.
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Advances the traversal against `set`, returning the next element.
    ///
    /// # Errors
    ///
    /// See [`iter::Traversal::next`].
    pub fn next<'set>(&mut self, set: &'set AvlSet<T>) -> Result<&'set T, AvlError> {
        self.inner.next(&set.tree).map(|node| &node.value)
    }
}
