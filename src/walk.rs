//! Depth-first traversals. Each walk calls a caller supplied `visit` once per key, threading a
//! caller owned context through every call.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let tree: Tree = vec![2, 1, 3].into_iter().collect();
//!
//! let mut sum = 0;
//! tree.walk_post_order(|key, sum: &mut i32| *sum += key, &mut sum);
//! assert_eq!(sum, 6);
//! ```

use crate::tree::{Node, Tree};

/// Which depth-first order [`Tree::walk`] should visit keys in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// A node before either of its subtrees.
    Pre,
    /// The left subtree, then the node, then the right subtree. Keys come out ascending.
    In,
    /// Both subtrees before the node.
    Post,
}

impl Tree {
    /// Visits every key, each node before its left subtree and its left subtree before its
    /// right. Does nothing on an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree = vec![2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.walk_pre_order(|key, seen: &mut Vec<i32>| seen.push(key), &mut seen);
    /// assert_eq!(seen, vec![2, 1, 3]);
    /// ```
    pub fn walk_pre_order<C, F>(&self, mut visit: F, context: &mut C)
    where
        F: FnMut(i32, &mut C),
    {
        if let Some(root) = self.root() {
            root.pre_order(&mut visit, context);
        }
    }

    /// Visits every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree = vec![16, 2, 8, 4, 10, 18, 6, 12, 14].into_iter().collect();
    ///
    /// // Keys are the even numbers from 2 to 18 so each one is 2 more than the last.
    /// let mut expected = 2;
    /// tree.walk_in_order(
    ///     |key, expected: &mut i32| {
    ///         assert_eq!(key, *expected);
    ///         *expected += 2;
    ///     },
    ///     &mut expected,
    /// );
    /// assert_eq!(expected, 20);
    /// ```
    pub fn walk_in_order<C, F>(&self, mut visit: F, context: &mut C)
    where
        F: FnMut(i32, &mut C),
    {
        if let Some(root) = self.root() {
            root.in_order(&mut visit, context);
        }
    }

    /// Visits every key, each node after both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree = vec![2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.walk_post_order(|key, seen: &mut Vec<i32>| seen.push(key), &mut seen);
    /// assert_eq!(seen, vec![1, 3, 2]);
    /// ```
    pub fn walk_post_order<C, F>(&self, mut visit: F, context: &mut C)
    where
        F: FnMut(i32, &mut C),
    {
        if let Some(root) = self.root() {
            root.post_order(&mut visit, context);
        }
    }

    /// Dispatches to the walk matching `order`.
    pub fn walk<C, F>(&self, order: Order, visit: F, context: &mut C)
    where
        F: FnMut(i32, &mut C),
    {
        match order {
            Order::Pre => self.walk_pre_order(visit, context),
            Order::In => self.walk_in_order(visit, context),
            Order::Post => self.walk_post_order(visit, context),
        }
    }

    /// Collects the keys in ascending order.
    pub fn keys(&self) -> Vec<i32> {
        let mut keys = Vec::new();
        self.walk_in_order(|key, keys: &mut Vec<i32>| keys.push(key), &mut keys);
        keys
    }
}

impl Node {
    fn pre_order<C, F>(&self, visit: &mut F, context: &mut C)
    where
        F: FnMut(i32, &mut C),
    {
        visit(self.key, context);
        if let Some(left) = self.left() {
            left.pre_order(visit, context);
        }
        if let Some(right) = self.right() {
            right.pre_order(visit, context);
        }
    }

    fn in_order<C, F>(&self, visit: &mut F, context: &mut C)
    where
        F: FnMut(i32, &mut C),
    {
        if let Some(left) = self.left() {
            left.in_order(visit, context);
        }
        visit(self.key, context);
        if let Some(right) = self.right() {
            right.in_order(visit, context);
        }
    }

    fn post_order<C, F>(&self, visit: &mut F, context: &mut C)
    where
        F: FnMut(i32, &mut C),
    {
        if let Some(left) = self.left() {
            left.post_order(visit, context);
        }
        if let Some(right) = self.right() {
            right.post_order(visit, context);
        }
        visit(self.key, context);
    }
}
