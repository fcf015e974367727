//! A mutable BST over unique keys that is built balanced and can be rebuilt balanced.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build([1, 6, 2, 5, 2, 4, 3]).unwrap();
//!
//! // Duplicates were dropped while building.
//! assert!(tree.iter().copied().eq(1..=6));
//!
//! // Inserting an existing key does nothing.
//! assert!(tree.insert(9));
//! assert!(!tree.insert(2));
//!
//! // Deleting a missing key does nothing either.
//! assert!(tree.delete(&4));
//! assert!(!tree.delete(&4));
//!
//! assert!(tree.iter().copied().eq([1, 2, 3, 5, 6, 9]));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use tracing::{debug, trace};

use crate::config::{Config, RebalancePolicy};
use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::traverse::{InOrder, LevelOrder, Order, PostOrder, PreOrder};

/// A Binary Search Tree over unique keys. It can be used for inserting, finding, and deleting
/// keys, and for walking them in any of the four classic [`Order`]s.
///
/// Inserts and deletes don't restore balance on their own (unless configured to with
/// [`RebalancePolicy::OnMutation`]). [`Tree::rebalance`] rebuilds the tree from its sorted keys.
pub struct Tree<K> {
    root: Link<K>,
    config: Config,
}

impl<K> Tree<K> {
    /// Builds a balanced tree from an unsorted collection of keys. Duplicate keys are dropped.
    /// Fails with [`Error::EmptyInput`] when there are no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let tree = Tree::build([3, 1, 2, 3]).unwrap();
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.len(), 3);
    ///
    /// assert_eq!(Tree::<i32>::build([]).unwrap_err(), Error::EmptyInput);
    /// ```
    pub fn build(keys: impl IntoIterator<Item = K>) -> Result<Self>
    where
        K: Ord,
    {
        Self::build_with(keys, Config::default())
    }

    /// Like [`Tree::build`] but with the given [`Config`].
    pub fn build_with(keys: impl IntoIterator<Item = K>, config: Config) -> Result<Self>
    where
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        if keys.is_empty() {
            return Err(Error::EmptyInput);
        }
        keys.sort_unstable();
        keys.dedup();

        let len = keys.len();
        let root = Node::from_sorted_iter(&mut keys.into_iter(), len);
        debug!(len, ?config, "built tree");
        Ok(Self { root, config })
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Changes when this tree rebalances. Switching to [`RebalancePolicy::OnMutation`] does not
    /// rebalance right away; the next insert or delete will.
    pub fn set_policy(&mut self, policy: RebalancePolicy) {
        self.config = self.config.rebalance(policy);
    }

    /// The root node, or `None` once every key has been deleted.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether every key has been deleted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// Height of the root node, or `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// The smallest key.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest key.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Finds the live node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]).unwrap();
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Number of edges between the root and `node`; the root has a depth of 0. Returns `None`
    /// when `node` does not belong to this tree, even if this tree holds an equal key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]).unwrap();
    /// let other = Tree::build([1]).unwrap();
    ///
    /// assert_eq!(tree.depth(tree.root().unwrap()), Some(0));
    /// assert_eq!(tree.depth(tree.find(&1).unwrap()), Some(2));
    /// assert_eq!(tree.depth(other.root().unwrap()), None);
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Option<usize>
    where
        K: Ord,
    {
        let mut current = self.root()?;
        let mut depth = 0;
        loop {
            current = match node.value().cmp(current.value()) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return ptr::eq(current, node).then_some(depth),
                Ordering::Greater => current.right()?,
            };
            depth += 1;
        }
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, when the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build([2]).unwrap();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let slot = Self::slot_mut(&mut self.root, &key);
        if slot.is_some() {
            trace!(case = "duplicate", "insert skipped key");
            return false;
        }
        *slot = Some(Node::new_boxed(key));
        trace!(case = "leaf", "inserted key");
        self.after_mutation();
        true
    }

    /// Deletes the node holding `key`. Returns `false`, leaving the tree untouched, when no node
    /// holds the key.
    ///
    /// A node with two children takes over the key of its in-order successor (the smallest key in
    /// its right subtree) and the successor's node is removed instead. The successor's own right
    /// subtree moves up into its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]).unwrap();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert!(tree.iter().copied().eq([1, 3]));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let slot = Self::slot_mut(&mut self.root, key);
        let Some(mut target) = slot.take() else {
            trace!(case = "missing", "delete skipped key");
            return false;
        };

        let (case, replacement) = match (target.left.take(), target.right.take()) {
            (None, None) => ("leaf", None),
            (Some(child), None) | (None, Some(child)) => ("one_child", Some(child)),
            (Some(left), right @ Some(_)) => {
                target.left = Some(left);
                target.right = right;
                if let Some(successor) = Node::pop_min(&mut target.right) {
                    target.value = successor;
                }
                ("two_children", Some(target))
            }
        };
        *slot = replacement;
        trace!(case, "deleted key");
        self.after_mutation();
        true
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one. An empty
    /// tree is balanced.
    pub fn is_balanced(&self) -> bool {
        // Subtree heights (-1 when empty), in post-order so both children are on top when their
        // parent comes up.
        let mut heights: Vec<isize> = Vec::new();
        let mut nodes = PostOrder::new(self.root());
        while let Some(node) = nodes.next_node() {
            let right = if node.right.is_some() { heights.pop() } else { None };
            let left = if node.left.is_some() { heights.pop() } else { None };
            let (left, right) = (left.unwrap_or(-1), right.unwrap_or(-1));
            if left.abs_diff(right) > 1 {
                return false;
            }
            heights.push(left.max(right) + 1);
        }
        true
    }

    /// Rebuilds the tree from its sorted keys the same way [`Tree::build`] does, leaving it
    /// [balanced][Tree::is_balanced] with the same set of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build([0]).unwrap();
    /// for key in 1..8 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), Some(7));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), Some(3));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let old_height = self.height();
        let mut keys = Vec::new();
        Node::drain_in_order(self.root.take(), &mut keys);

        let len = keys.len();
        self.root = Node::from_sorted_iter(&mut keys.into_iter(), len);
        debug!(len, ?old_height, new_height = ?self.height(), "rebalanced tree");
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> InOrder<'_, K> {
        self.in_order()
    }

    /// Iterates over the keys breadth first.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the keys visiting each node before its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Iterates over the keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Iterates over the keys visiting each node after its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Calls `visit` once with every key, in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build([1, 6, 2, 5, 3, 4]).unwrap();
    ///
    /// let mut visited = String::new();
    /// tree.traverse(Order::Post, |key| visited.push_str(&key.to_string()));
    /// assert_eq!(visited, "132564");
    /// ```
    pub fn traverse(&self, order: Order, visit: impl FnMut(&K)) {
        match order {
            Order::Level => self.level_order().for_each(visit),
            Order::Pre => self.pre_order().for_each(visit),
            Order::In => self.in_order().for_each(visit),
            Order::Post => self.post_order().for_each(visit),
        }
    }

    /// Calls `visit` with every key breadth first.
    pub fn level_order_with(&self, visit: impl FnMut(&K)) {
        self.traverse(Order::Level, visit);
    }

    /// Calls `visit` with every key, each node before its subtrees.
    pub fn pre_order_with(&self, visit: impl FnMut(&K)) {
        self.traverse(Order::Pre, visit);
    }

    /// Calls `visit` with every key in ascending order.
    pub fn in_order_with(&self, visit: impl FnMut(&K)) {
        self.traverse(Order::In, visit);
    }

    /// Calls `visit` with every key, each node after its subtrees.
    pub fn post_order_with(&self, visit: impl FnMut(&K)) {
        self.traverse(Order::Post, visit);
    }

    /// Returns the link holding `key`, or the empty link where `key` would be attached.
    fn slot_mut<'a>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
    where
        K: Ord,
    {
        loop {
            let ordering = link.as_deref().map(|node| key.cmp(&node.value));
            link = match (ordering, link) {
                (Some(Ordering::Less), Some(node)) => &mut node.left,
                (Some(Ordering::Greater), Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    fn after_mutation(&mut self) {
        if self.config.policy() == RebalancePolicy::OnMutation && !self.is_balanced() {
            self.rebalance();
        }
    }
}

// Trees can be as deep as they are long before a rebalance, so none of these recurse.

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        // Copies are assembled bottom up; a node's children are the top of `built`.
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        let mut nodes = PostOrder::new(self.root());
        while let Some(node) = nodes.next_node() {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }
        Self {
            root: built.pop(),
            config: self.config,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Keys<'a, K>(&'a Tree<K>);
        impl<K: fmt::Debug> fmt::Debug for Keys<'_, K> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.level_order()).finish()
            }
        }

        f.debug_struct("Tree")
            .field("config", &self.config)
            .field("level_order", &Keys(self))
            .finish()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
