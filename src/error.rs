use thiserror::Error;

/// Errors reported by [`AvlTree`](crate::AvlTree), [`AvlSet`](crate::AvlSet) and their
/// traversals.
///
/// Looking up or removing a value that is not present is not an error; those operations report
/// `false` or `None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    /// An absent value was offered for insertion.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A dynamically typed value did not have the element type of the set.
    #[error("type mismatch: expected a value of type `{expected}`")]
    TypeMismatch { expected: &'static str },

    /// The tree was structurally modified after the traversal was created.
    #[error("tree was modified during traversal")]
    ConcurrentModification,

    /// The traversal has no elements left.
    #[error("traversal is exhausted")]
    IteratorExhausted,

    /// The traversal was advanced against a tree other than the one it was created from.
    #[error("traversal does not belong to this tree")]
    ForeignTree,

    /// Rebalancing found a balance factor that no valid AVL tree can produce.
    ///
    /// This indicates a bug in the tree itself. The tree must not be used after this is returned.
    #[error("undefined rotation case: node balance {balance}, child balance {child_balance:?}")]
    InvariantViolation {
        balance: i16,
        child_balance: Option<i16>,
    },
}
