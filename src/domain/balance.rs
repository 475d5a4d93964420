//! Padding a tree into a fully balanced shape with placeholder nodes.

use tracing::{debug, instrument};

use crate::domain::node::{Node, Tree};

/// Builds a fully balanced copy of `root` with exactly `target_depth` levels.
///
/// Wherever the source has no child, a placeholder subtree fills the gap down to
/// the last level. Values are cloned, the source is left untouched.
/// An empty source stays empty regardless of `target_depth`; nodes deeper than
/// `target_depth` are not copied.
///
/// Non-recursive: an explicit stack of (source node, remaining levels, target slot)
/// mimics the call stack of the recursive formulation.
#[instrument(level = "debug", skip(root))]
pub fn balance<T: Clone>(root: Option<&Node<T>>, target_depth: usize) -> Tree<T> {
    let root = root?;
    let mut balanced: Tree<T> = None;
    let mut created = 0usize;

    {
        let mut stack: Vec<(Option<&Node<T>>, usize, &mut Tree<T>)> =
            vec![(Some(root), target_depth, &mut balanced)];

        while let Some((source, remaining, slot)) = stack.pop() {
            if remaining == 0 {
                continue;
            }
            let node = slot.insert(Box::new(Node {
                value: source.and_then(|n| n.value.clone()),
                left: None,
                right: None,
            }));
            created += 1;

            let Node { left, right, .. } = &mut **node;
            // right first so the left subtree is built first
            stack.push((source.and_then(|n| n.right.as_deref()), remaining - 1, right));
            stack.push((source.and_then(|n| n.left.as_deref()), remaining - 1, left));
        }
    }

    debug!("balanced tree has {} nodes", created);
    balanced
}

/// True if every internal node has two children and every leaf sits on the same level.
pub fn is_balanced<T>(root: Option<&Node<T>>) -> bool {
    let Some(root) = root else {
        return true;
    };
    let target = root.depth();
    let mut stack = vec![(root, 1usize)];
    while let Some((node, level)) = stack.pop() {
        match (node.left.as_deref(), node.right.as_deref()) {
            (None, None) if level == target => {}
            (Some(left), Some(right)) => {
                stack.push((left, level + 1));
                stack.push((right, level + 1));
            }
            _ => return false,
        }
    }
    true
}
