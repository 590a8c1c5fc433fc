//! Read-only access to the shape of a tree, for diagnostics and tests.

use core::{
    cmp, fmt,
    marker::PhantomData,
    ptr::{self, NonNull},
};

use crate::{AvlTree, Link, Links, TreeNode};

/// A read-only view of a node in an [`AvlTree`], exposing its position and balance.
pub struct NodeRef<'tree, T: TreeNode<Links<T>> + ?Sized> {
    node: NonNull<T>,
    _tree: PhantomData<&'tree AvlTree<T>>,
}

impl<'tree, T: TreeNode<Links<T>> + ?Sized> NodeRef<'tree, T> {
    // SAFETY: `node` must be a node of a tree that is borrowed for `'tree`.
    unsafe fn new(node: NonNull<T>) -> Self {
        NodeRef {
            node,
            _tree: PhantomData,
        }
    }

    unsafe fn wrap(link: Link<T>) -> Option<Self> {
        link.map(|node| unsafe { NodeRef::new(node) })
    }

    /// Returns the item stored in this node.
    pub fn get(&self) -> &'tree T {
        unsafe { self.node.as_ref() }
    }

    /// Returns the key of this node.
    pub fn key(&self) -> &'tree T::Key {
        self.get().key()
    }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> u8 {
        unsafe { AvlTree::<T>::height_of(Some(self.node)) }
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance(&self) -> i16 {
        unsafe { AvlTree::<T>::balance_of(self.node) }
    }

    /// Returns the left child of this node.
    pub fn left(&self) -> Option<NodeRef<'tree, T>> {
        unsafe { NodeRef::wrap(T::links(self.node).as_ref().left()) }
    }

    /// Returns the right child of this node.
    pub fn right(&self) -> Option<NodeRef<'tree, T>> {
        unsafe { NodeRef::wrap(T::links(self.node).as_ref().right()) }
    }

    /// Returns the parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'tree, T>> {
        unsafe { NodeRef::wrap(T::links(self.node).as_ref().parent()) }
    }
}

impl<T: TreeNode<Links<T>> + ?Sized> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TreeNode<Links<T>> + ?Sized> Copy for NodeRef<'_, T> {}

impl<T: TreeNode<Links<T>> + ?Sized> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::addr_eq(self.node.as_ptr(), other.node.as_ptr())
    }
}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: TreeNode<Links<T>> + ?Sized,
    T::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("height", &self.height())
            .field("balance", &self.balance())
            .finish()
    }
}

/// A callback for [`AvlTree::visit_post_order`].
///
/// Implemented for any `FnMut(NodeRef<'_, T>)`.
pub trait Visitor<T: TreeNode<Links<T>> + ?Sized> {
    fn visit(&mut self, node: NodeRef<'_, T>);
}

impl<T, F> Visitor<T> for F
where
    T: TreeNode<Links<T>> + ?Sized,
    F: FnMut(NodeRef<'_, T>),
{
    #[inline]
    fn visit(&mut self, node: NodeRef<'_, T>) {
        self(node)
    }
}

impl<T> AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    /// Returns a view of the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        unsafe { NodeRef::wrap(self.root) }
    }

    /// Hands every node of the tree to `visitor` in post-order: left subtree, right subtree, node.
    pub fn visit_post_order<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        let mut stack: Vec<NonNull<T>> = Vec::with_capacity(usize::from(self.height()));
        let mut last_visited: Link<T> = None;
        let mut opt_cur = self.root;

        unsafe {
            loop {
                while let Some(cur) = opt_cur {
                    stack.push(cur);
                    opt_cur = T::links(cur).as_ref().left();
                }

                let Some(&top) = stack.last() else {
                    break;
                };

                match T::links(top).as_ref().right() {
                    // Descend into the right subtree unless it was just finished.
                    Some(right) if last_visited != Some(right) => opt_cur = Some(right),

                    _ => {
                        visitor.visit(NodeRef::new(top));
                        last_visited = stack.pop();
                    }
                }
            }
        }
    }
}

/// A post-order visitor that collects the overall height and the extreme balance factors of a
/// tree, recomputing both from the children of each node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertiesVisitor {
    height: u8,
    min_balance: Option<i16>,
    max_balance: Option<i16>,
}

impl PropertiesVisitor {
    /// Returns a visitor that has seen no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the height of the tallest visited node.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the smallest balance factor seen, or `None` if no node was visited.
    pub fn min_balance(&self) -> Option<i16> {
        self.min_balance
    }

    /// Returns the largest balance factor seen, or `None` if no node was visited.
    pub fn max_balance(&self) -> Option<i16> {
        self.max_balance
    }
}

impl<T: TreeNode<Links<T>> + ?Sized> Visitor<T> for PropertiesVisitor {
    fn visit(&mut self, node: NodeRef<'_, T>) {
        let left = node.left().map_or(0, |n| n.height());
        let right = node.right().map_or(0, |n| n.height());

        let height = 1 + cmp::max(left, right);
        let balance = i16::from(left) - i16::from(right);

        self.height = cmp::max(self.height, height);
        self.min_balance = Some(self.min_balance.map_or(balance, |b| b.min(balance)));
        self.max_balance = Some(self.max_balance.map_or(balance, |b| b.max(balance)));
    }
}
