use core::{iter::FusedIterator, ptr::NonNull};

use crate::{AvlError, AvlTree, Link, Links, TreeNode};

/// A fail-fast, single-pass in-order traversal of an [`AvlTree`].
///
/// A `Traversal` does not borrow the tree it was created from. Instead, each call to
/// [`next`](Traversal::next) takes the tree as an argument and first checks that the tree has not
/// been structurally modified since the traversal was created. Any insertion or removal made in
/// the meantime invalidates the traversal permanently, even if it was later undone.
pub struct Traversal<T: TreeNode<Links<T>> + ?Sized> {
    tree_id: u64,
    mod_count: u64,

    // The root of the subtree to descend into next.
    cur: Link<T>,
    // Ancestors whose left subtree is being traversed.
    stack: Vec<NonNull<T>>,
}

impl<T: TreeNode<Links<T>> + ?Sized> Traversal<T> {
    pub(crate) fn new(tree: &AvlTree<T>) -> Self {
        Traversal {
            tree_id: tree.id,
            mod_count: tree.mod_count,
            cur: tree.root,
            stack: Vec::with_capacity(usize::from(tree.height())),
        }
    }

    /// Returns `true` if the traversal has more elements.
    ///
    /// This never fails, even if the traversal has been invalidated.
    pub fn has_next(&self) -> bool {
        self.cur.is_some() || !self.stack.is_empty()
    }

    /// Advances the traversal, returning the next element in ascending order.
    ///
    /// # Errors
    ///
    /// - [`AvlError::ForeignTree`] if `tree` is not the tree this traversal was created from.
    /// - [`AvlError::ConcurrentModification`] if `tree` was modified since then.
    /// - [`AvlError::IteratorExhausted`] if every element has already been returned.
    pub fn next<'tree>(&mut self, tree: &'tree AvlTree<T>) -> Result<&'tree T, AvlError> {
        if tree.id != self.tree_id {
            return Err(AvlError::ForeignTree);
        }

        if tree.mod_count != self.mod_count {
            return Err(AvlError::ConcurrentModification);
        }

        // SAFETY: the tree is unmodified since this traversal was created, so every pointer held
        // by the traversal still refers to a live node of `tree`.
        unsafe {
            // Upon entering a new subtree, descend to its minimum element.
            while let Some(cur) = self.cur {
                self.stack.push(cur);
                self.cur = T::links(cur).as_ref().left();
            }

            let node = self.stack.pop().ok_or(AvlError::IteratorExhausted)?;

            // The left subtree of `node` is exhausted; its right subtree comes next.
            self.cur = T::links(node).as_ref().right();

            Ok(node.as_ref())
        }
    }
}

/// A borrowing in-order iterator over the elements of an [`AvlTree`].
pub struct Iter<'tree, T: TreeNode<Links<T>> + ?Sized> {
    tree: &'tree AvlTree<T>,
    traversal: Traversal<T>,
    len: usize,
}

impl<'tree, T: TreeNode<Links<T>> + ?Sized> Iter<'tree, T> {
    pub(crate) fn new(tree: &'tree AvlTree<T>) -> Self {
        Iter {
            tree,
            traversal: Traversal::new(tree),
            len: tree.len(),
        }
    }
}

impl<'tree, T: TreeNode<Links<T>> + ?Sized> Iterator for Iter<'tree, T> {
    type Item = &'tree T;

    fn next(&mut self) -> Option<Self::Item> {
        // The tree is borrowed for `'tree`, so the traversal can only fail by running out.
        let item = self.traversal.next(self.tree).ok()?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: TreeNode<Links<T>> + ?Sized> ExactSizeIterator for Iter<'_, T> {}

impl<T: TreeNode<Links<T>> + ?Sized> FusedIterator for Iter<'_, T> {}

impl<T> AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    /// Returns an iterator over the elements of the tree in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a fail-fast traversal over the elements of the tree in ascending key order.
    pub fn traversal(&self) -> Traversal<T> {
        Traversal::new(self)
    }
}

impl<'tree, T> IntoIterator for &'tree AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    type Item = &'tree T;
    type IntoIter = Iter<'tree, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
