use thiserror::Error;

/// A violation of the BST order invariant found by [`Tree::validate`][crate::Tree::validate].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// `key` sits in a left subtree but is not less than the ancestor key `bound`.
    #[error("key {key} is in the left subtree of {bound} but is not less than it")]
    NotLessThan {
        /// The misplaced key.
        key: i32,
        /// The ancestor key it must be smaller than.
        bound: i32,
    },
    /// `key` sits in a right subtree but is not greater than the ancestor key `bound`.
    #[error("key {key} is in the right subtree of {bound} but is not greater than it")]
    NotGreaterThan {
        /// The misplaced key.
        key: i32,
        /// The ancestor key it must be larger than.
        bound: i32,
    },
}
