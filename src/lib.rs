//! This crate exposes a Binary Search Tree (BST) over a set of unique ordered keys that can
//! rebuild itself into a balanced shape on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Inserting and deleting do not rebalance the tree
//! by themselves so a long run of sorted inserts degrades the tree into a list. Calling
//! [`Tree::rebalance`] rebuilds the tree from its sorted keys, bringing the height back down to
//! `O(lg N)`. A [`RebalancePolicy`] can make this happen after every mutation instead.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let mut tree = Tree::build([1, 6, 2, 5, 3, 4]).unwrap();
//!
//! let mut visited = Vec::new();
//! tree.traverse(Order::Level, |key| visited.push(*key));
//! assert_eq!(visited, [4, 2, 6, 1, 3, 5]);
//!
//! // Sorted inserts skew the tree...
//! for key in 7..20 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until it is rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert!(tree.iter().copied().eq(1..20));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod config;
mod error;
mod node;
mod render;
mod traverse;
mod tree;

pub use config::{Config, RebalancePolicy};
pub use error::{Error, Result};
pub use node::{height, Node};
pub use traverse::{InOrder, LevelOrder, Order, PostOrder, PreOrder};
pub use tree::Tree;

#[cfg(test)]
mod test;
