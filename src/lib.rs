//! This crate exposes an ordered set of `i32` keys backed by a plain,
//! unbalanced Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)`. This tree does no
//! rebalancing, so the shape is whatever the insertion order produces: inserting
//! keys in sorted order gives a tree that is really a linked list. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree (see [`Tree::walk_in_order`]).
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree: Tree = [16, 2, 8, 4, 10, 18, 6, 12, 14].iter().copied().collect();
//!
//! assert_eq!(tree.size(), 9);
//! assert!(tree.contains(16));
//! assert!(!tree.contains(9));
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(8));
//!
//! assert!(tree.remove(16));
//! assert_eq!(tree.keys(), vec![2, 4, 6, 8, 10, 12, 14, 18]);
//! ```

#![deny(missing_docs)]

mod error;
mod tree;
mod walk;

pub use error::InvariantError;
pub use tree::Tree;
pub use walk::Order;
