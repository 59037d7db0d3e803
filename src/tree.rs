//! An owned, unbalanced BST of `i32` keys. Each operation recurses over a subtree and hands back
//! the (possibly new) root of that subtree so the caller can relink it into its parent.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(1));
//!
//! // Inserting the same key again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! assert!(tree.remove(1));
//! assert!(!tree.remove(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use crate::error::InvariantError;

pub(crate) type Link = Option<Box<Node>>;

/// An ordered set of unique `i32` keys stored in a Binary Search Tree with no self-balancing.
#[derive(Clone)]
pub struct Tree {
    root: Link,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Tree {
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    /// Inserts every key in iteration order. Keys already present are skipped.
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Releases every node in the tree, leaving it empty. Calling this on an empty tree does
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree: Tree = (0..100).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.size(), 0);
    /// ```
    pub fn clear(&mut self) {
        let released = self.release();
        trace!(released, "cleared tree");
    }

    /// Whether the tree holds no keys. Unlike [`Tree::size`] this is `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        self.root().map_or(false, |n| n.contains(key))
    }

    /// Inserts `key` into the tree. Returns `false`, leaving the tree untouched, if the key was
    /// already present.
    ///
    /// No rebalancing happens so inserting keys in sorted order produces a tree whose height is
    /// its size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(7));
    /// assert!(!tree.insert(7));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        if self.contains(key) {
            return false;
        }

        self.root = Some(Node::insert(self.root.take(), key));
        trace!(key, "inserted key");
        true
    }

    /// Removes `key` from the tree. Returns `false`, leaving the tree untouched, if the key was
    /// not present.
    ///
    /// A node with two children is replaced by the smallest node of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree: Tree = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(2));
    /// assert!(!tree.contains(2));
    /// assert!(!tree.remove(2));
    /// assert_eq!(tree.keys(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, key: i32) -> bool {
        if self.is_empty() || !self.contains(key) {
            return false;
        }

        self.root = Node::remove(self.root.take(), key);
        trace!(key, "removed key");
        true
    }

    /// Counts the keys in the tree. Nothing is cached so this visits every node.
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// The height of the tree as `treeLib` has always reported it: `0` when empty, otherwise one
    /// more than the larger of the two root subtrees' *node counts*.
    ///
    /// This is not the length of the longest path; use [`Tree::depth`] for that. It does satisfy
    /// `ceil(lg(size + 1)) <= height <= size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree = vec![4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.height(), 4);
    /// assert_eq!(tree.depth(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The number of nodes on the longest path from the root to a leaf. `0` when empty.
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }

    /// The smallest key in the tree, if any.
    pub fn min(&self) -> Option<i32> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.key)
    }

    /// The largest key in the tree, if any.
    pub fn max(&self) -> Option<i32> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.key)
    }

    /// Checks the BST ordering of every node against all of its ancestors.
    ///
    /// Trees built through this API always pass. The first misplaced key found in pre-order is
    /// reported.
    pub fn validate(&self) -> Result<(), InvariantError> {
        match self.root() {
            Some(root) => root.validate(None, None),
            None => Ok(()),
        }
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Frees every node with an explicit stack so degenerate trees can't overflow the call stack
    /// through the recursive `Box` drop. Returns how many nodes were freed.
    fn release(&mut self) -> usize {
        let mut released = 0;
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            released += 1;
        }
        released
    }
}

/// A single key and the subtrees on either side of it.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl Node {
    fn new_boxed(key: i32) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn contains(&self, key: i32) -> bool {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().map_or(false, |n| n.contains(key)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().map_or(false, |n| n.contains(key)),
        }
    }

    /// Inserts `key` into the subtree rooted at `node` and returns the subtree's root. An empty
    /// subtree becomes a new leaf.
    fn insert(node: Link, key: i32) -> Box<Self> {
        let mut node = match node {
            Some(node) => node,
            None => return Self::new_boxed(key),
        };

        match key.cmp(&node.key) {
            Ordering::Less => node.left = Some(Self::insert(node.left.take(), key)),
            Ordering::Equal => {}
            Ordering::Greater => node.right = Some(Self::insert(node.right.take(), key)),
        }

        if cfg!(debug_assertions) {
            node.assert_local_order();
        }
        node
    }

    /// Removes `key` from the subtree rooted at `node` and returns what should replace `node` in
    /// its parent.
    fn remove(node: Link, key: i32) -> Link {
        let mut node = node?;
        match key.cmp(&node.key) {
            Ordering::Less => {
                node.left = Self::remove(node.left.take(), key);
                Some(node)
            }
            Ordering::Equal => node.splice_out(),
            Ordering::Greater => {
                node.right = Self::remove(node.right.take(), key);
                Some(node)
            }
        }
    }

    /// Frees this node and returns the subtree that takes its place.
    ///
    /// With two children, the smallest node of the right subtree is detached and relinked in
    /// this node's position. Its key is larger than everything on the left and smaller than
    /// everything left on the right.
    fn splice_out(self: Box<Self>) -> Link {
        let Node { left, right, .. } = *self;
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), Some(right)) => {
                let (mut successor, rest) = Self::detach_min(right);
                successor.left = Some(left);
                successor.right = rest;

                if cfg!(debug_assertions) {
                    successor.assert_local_order();
                }
                Some(successor)
            }
        }
    }

    /// Detaches the leftmost node of the subtree rooted at `node`. Returns that node, childless,
    /// along with what remains of the subtree.
    fn detach_min(mut node: Box<Self>) -> (Box<Self>, Link) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }

    fn height(&self) -> usize {
        let left_size = self.left().map_or(0, Self::size);
        let right_size = self.right().map_or(0, Self::size);
        1 + left_size.max(right_size)
    }

    fn depth(&self) -> usize {
        let left_depth = self.left().map_or(0, Self::depth);
        let right_depth = self.right().map_or(0, Self::depth);
        1 + left_depth.max(right_depth)
    }

    /// `lower` and `upper` are the exclusive bounds inherited from the nearest ancestors this
    /// subtree hangs to the right and to the left of, respectively.
    fn validate(&self, lower: Option<i32>, upper: Option<i32>) -> Result<(), InvariantError> {
        if let Some(bound) = lower {
            if self.key <= bound {
                return Err(InvariantError::NotGreaterThan {
                    key: self.key,
                    bound,
                });
            }
        }
        if let Some(bound) = upper {
            if self.key >= bound {
                return Err(InvariantError::NotLessThan {
                    key: self.key,
                    bound,
                });
            }
        }

        if let Some(left) = self.left() {
            left.validate(lower, Some(self.key))?;
        }
        if let Some(right) = self.right() {
            right.validate(Some(self.key), upper)?;
        }
        Ok(())
    }

    fn assert_local_order(&self) {
        if let Some(left) = self.left() {
            assert!(self.key > left.key);
        }
        if let Some(right) = self.right() {
            assert!(self.key < right.key);
        }
    }
}
