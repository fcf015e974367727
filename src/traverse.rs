//! Lazy traversals over the keys of a [`Tree`][crate::Tree].
//!
//! Each traversal is an iterator borrowing the tree, so it can be restarted by asking the tree
//! for a new one. None of them mutate the tree.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Breadth first: the root, then every node at depth 1 from left to right, and so on.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This yields the keys sorted.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// Breadth first iterator over the keys of a tree.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}

/// Iterator visiting each node before its left and then its right subtree.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so that left comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// Iterator yielding the keys of a tree in ascending order.
#[derive(Debug, Clone)]
pub struct InOrder<'a, K> {
    /// The path to the next node. Every node on it still has to be yielded along with its right
    /// subtree.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// Iterator visiting both subtrees of a node before the node itself.
#[derive(Debug, Clone)]
pub struct PostOrder<'a, K> {
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }

    /// The next node whose subtrees have both been visited.
    pub(crate) fn next_node(&mut self) -> Option<&'a Node<K>> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::value)
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}
