use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly missing, child of a [`Node`] (or the root of a [`Tree`][crate::Tree]).
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` holds one key of a [`Tree`][crate::Tree] and owns its (up to two) children. Nodes
/// keep no reference to their parent; the tree re-descends from its root when it needs one.
///
/// Nodes are handed out read-only by [`Tree::find`][crate::Tree::find] so callers can ask
/// about the [`height`][Node::height] or [`depth`][crate::Tree::depth] of the live node.
pub struct Node<K> {
    pub(crate) value: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: K) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: K) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The key stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The root of the left subtree, whose keys are all less than [`value`][Node::value].
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose keys are all greater than [`value`][Node::value].
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has a height
    /// of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]).unwrap();
    ///
    /// // 3 is the root with 2 (and 2's child 1) to its left.
    /// assert_eq!(tree.find(&3).unwrap().height(), 2);
    /// assert_eq!(tree.find(&4).unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Descends from this node comparing against `key`.
    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let mut current = self;
        loop {
            current = match key.cmp(&current.value) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right()?,
            };
        }
    }

    /// Removes the smallest key from the subtree hanging off `link` and returns it. The removed
    /// node never has a left child but may have a right one, which takes its place under the
    /// former parent.
    pub(crate) fn pop_min(mut link: &mut Link<K>) -> Option<K> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            link = match link {
                Some(node) => &mut node.left,
                None => return None,
            };
        }
        let node = link.take()?;
        let Node { value, right, .. } = *node;
        *link = right;
        Some(value)
    }

    /// Builds a balanced subtree from the next `len` keys of `keys`, which must be sorted and
    /// free of duplicates. The root of every subtree is the key at index `len / 2`, so sibling
    /// subtree sizes differ by at most one and the recursion is only `lg len` deep.
    pub(crate) fn from_sorted_iter(keys: &mut impl Iterator<Item = K>, len: usize) -> Link<K> {
        if len == 0 {
            return None;
        }
        let mid = len / 2;
        let left = Self::from_sorted_iter(keys, mid);
        let value = keys.next()?;
        let right = Self::from_sorted_iter(keys, len - mid - 1);
        Some(Box::new(Self { value, left, right }))
    }

    /// Moves every key of the subtree into `out`, smallest first.
    pub(crate) fn drain_in_order(link: Link<K>, out: &mut Vec<K>) {
        // Same walk as `InOrder` but taking the nodes apart as they come off the stack.
        let mut stack: Vec<Box<Node<K>>> = Vec::new();
        let mut next = link;
        loop {
            while let Some(mut node) = next {
                next = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                return;
            };
            let Node { value, right, .. } = *node;
            out.push(value);
            next = right;
        }
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    // Only one level deep; a whole subtree can be arbitrarily deep.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Height of a possibly missing node: the number of edges on the longest path down to a leaf, or
/// `-1` when there is no node at all. This lets a leaf be computed as `max(-1, -1) + 1 = 0`.
///
/// # Examples
///
/// ```
/// use balanced_bst::{height, Tree};
///
/// let tree = Tree::build([1, 2, 3]).unwrap();
///
/// assert_eq!(height(tree.find(&2)), 1);
/// assert_eq!(height(tree.find(&1)), 0);
/// assert_eq!(height(tree.find(&42)), -1);
/// ```
pub fn height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, |n| n.height() as isize)
}
