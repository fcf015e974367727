use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

/// Draws the tree on its side: right subtrees above their parent, left subtrees below, one key
/// per line. An empty tree draws nothing.
///
/// # Examples
///
/// ```
/// use balanced_bst::Tree;
///
/// let tree = Tree::build([1, 2, 3]).unwrap();
///
/// assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Step<'_, K>> = self
            .root()
            .map(|root| Step::Expand(root, String::new(), true))
            .into_iter()
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Write(node, prefix, is_left) => {
                    let branch = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{prefix}{branch}{}", node.value())?;
                }
                Step::Expand(node, prefix, is_left) => {
                    // Popped right subtree first, then the node, then the left subtree.
                    if let Some(left) = node.left() {
                        let bar = if is_left { "    " } else { "│   " };
                        stack.push(Step::Expand(left, format!("{prefix}{bar}"), true));
                    }
                    let right = node.right().map(|right| {
                        let bar = if is_left { "│   " } else { "    " };
                        Step::Expand(right, format!("{prefix}{bar}"), false)
                    });
                    stack.push(Step::Write(node, prefix, is_left));
                    stack.extend(right);
                }
            }
        }
        Ok(())
    }
}

/// Pending work while drawing: a subtree still to lay out, or one node's line. Both carry the
/// line prefix and whether the node is a left child.
enum Step<'a, K> {
    Expand(&'a Node<K>, String, bool),
    Write(&'a Node<K>, String, bool),
}
