//! Model based tests: random operation sequences are applied to a [`Tree`] and a
//! [`BTreeSet`] and the two must always agree.


use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::{Config, Node, RebalancePolicy, Tree};
use quick::Op;

/// Asserts the BST ordering invariant below `node`, returning the smallest and largest key.
fn check_order<K: Ord + Copy + std::fmt::Debug>(node: &Node<K>) -> (K, K) {
    let mut min = *node.value();
    let mut max = *node.value();
    if let Some(left) = node.left() {
        let (left_min, left_max) = check_order(left);
        assert!(left_max < *node.value(), "left subtree overlaps {:?}", node.value());
        min = left_min;
    }
    if let Some(right) = node.right() {
        let (right_min, right_max) = check_order(right);
        assert!(right_min > *node.value(), "right subtree overlaps {:?}", node.value());
        max = right_max;
    }
    (min, max)
}

/// Applies `ops` to both structures, checking them against each other after every step.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Insert(k) => assert_eq!(tree.insert(k), set.insert(k)),
            Op::Delete(k) => assert_eq!(tree.delete(&k), set.remove(&k)),
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
            Op::Iter => assert!(tree.iter().eq(set.iter())),
        }
        if let Some(root) = tree.root() {
            check_order(root);
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(first: i8, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::build([first]).unwrap();
    let mut set = BTreeSet::from([first]);

    do_ops(&ops, &mut tree, &mut set);
    tree.iter().eq(set.iter()) && set.iter().all(|k| tree.contains(k))
}

#[quickcheck]
fn fuzz_on_mutation_policy_stays_balanced(first: i8, ops: Vec<Op<i8>>) -> bool {
    let config = Config::default().rebalance(RebalancePolicy::OnMutation);
    let mut tree = Tree::build_with([first], config).unwrap();
    let mut set = BTreeSet::from([first]);

    for op in &ops {
        do_ops(std::slice::from_ref(op), &mut tree, &mut set);
        if !tree.is_balanced() {
            return false;
        }
    }
    tree.iter().eq(set.iter())
}

#[quickcheck]
fn build_is_balanced_and_ordered(first: i8, rest: Vec<i8>) -> bool {
    let tree = Tree::build(rest.iter().copied().chain([first])).unwrap();
    let set: BTreeSet<_> = rest.into_iter().chain([first]).collect();

    if let Some(root) = tree.root() {
        check_order(root);
    }
    tree.is_balanced() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn depth_agrees_with_level_order(first: i8, rest: Vec<i8>) -> bool {
    let mut tree = Tree::build([first]).unwrap();
    for key in rest {
        tree.insert(key);
    }

    // Walking level by level never decreases the depth.
    let depths: Vec<_> = tree
        .level_order()
        .map(|k| tree.find(k).and_then(|n| tree.depth(n)))
        .collect();
    depths.iter().all(Option::is_some) && depths.windows(2).all(|w| w[0] <= w[1])
}
