use balanced_bst::Tree;

use std::collections::{BTreeSet, HashSet};

/// Builds a tree from `first` followed by `rest` so it is never empty.
fn build(first: i8, rest: &[i8]) -> Tree<i8> {
    Tree::build(std::iter::once(first).chain(rest.iter().copied())).unwrap()
}

#[quickcheck]
fn in_order_is_sorted_and_distinct(first: i8, rest: Vec<i8>) -> bool {
    let tree = build(first, &rest);
    let expected: BTreeSet<_> = std::iter::once(first).chain(rest).collect();

    tree.iter().eq(expected.iter())
}

#[quickcheck]
fn contains(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = Tree::build([first]).unwrap();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(first: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(first, &xs);
    let added: HashSet<_> = std::iter::once(first).chain(xs).collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_missing_then_find(first: i8, rest: Vec<i8>, key: i8) -> bool {
    let mut tree = build(first, &rest);
    let was_present = tree.find(&key).is_some();
    let before: Vec<_> = tree.iter().copied().collect();

    let inserted = tree.insert(key);
    let found = tree.find(&key).map(|n| *n.value()) == Some(key);

    if was_present {
        // Duplicates leave the sequence untouched.
        !inserted && found && tree.iter().copied().eq(before)
    } else {
        inserted && found
    }
}

#[quickcheck]
fn with_deletions(first: i8, xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(first, &xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present: BTreeSet<_> = std::iter::once(first).chain(xs).collect();
    for delete in &deletes {
        still_present.remove(delete);
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.iter().eq(still_present.iter())
}

#[quickcheck]
fn delete_removes_only_that_key(first: i8, rest: Vec<i8>, pick: usize) -> bool {
    let mut tree = build(first, &rest);
    let before: Vec<_> = tree.iter().copied().collect();
    let key = before[pick % before.len()];

    tree.delete(&key);

    let expected = before.iter().copied().filter(|k| *k != key);
    tree.find(&key).is_none() && tree.iter().copied().eq(expected)
}

#[quickcheck]
fn delete_missing_is_noop(first: i8, rest: Vec<i8>, key: i8) -> bool {
    let mut tree = build(first, &rest);
    if tree.find(&key).is_some() {
        return true;
    }
    let before: Vec<_> = tree.level_order().copied().collect();

    !tree.delete(&key) && tree.level_order().copied().eq(before)
}

#[quickcheck]
fn rebalance_restores_balance(first: i8, xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build([first]).unwrap();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }
    let before: Vec<_> = tree.iter().copied().collect();

    tree.rebalance();

    tree.is_balanced() && tree.iter().copied().eq(before)
}

#[quickcheck]
fn leaves_have_zero_height(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = Tree::build([first]).unwrap();
    for x in &xs {
        tree.insert(*x);
    }

    tree.iter()
        .filter_map(|k| tree.find(k))
        .filter(|n| n.is_leaf())
        .all(|n| n.height() == 0)
}
