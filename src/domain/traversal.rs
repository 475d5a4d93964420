//! Breadth-first flattening of a tree into its level-order value sequence.

use std::collections::VecDeque;

use crate::domain::node::Node;

/// Returns the values of the tree in level order, placeholders included as `None`.
///
/// A node's children are enqueued only when it has a left child; in a balanced
/// tree a node has either both children or none.
pub fn level_order<T>(root: Option<&Node<T>>) -> Vec<Option<&T>> {
    let mut out = Vec::new();
    let mut queue = VecDeque::new();
    if let Some(node) = root {
        queue.push_back(node);
    }

    while let Some(node) = queue.pop_front() {
        if let Some(left) = node.left.as_deref() {
            queue.push_back(left);
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out.push(node.value.as_ref());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_level_order_then_empty() {
        assert!(level_order::<i32>(None).is_empty());
    }

    #[test]
    fn given_full_tree_when_level_order_then_breadth_first() {
        let root = Node::new(1)
            .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
            .with_right(Node::new(3).with_left(Node::new(6)).with_right(Node::new(7)));
        let values: Vec<i32> = level_order(Some(&root)).into_iter().flatten().copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn given_placeholders_when_level_order_then_none_slots() {
        let root = Node::new("a")
            .with_left(Node::placeholder())
            .with_right(Node::new("b"));
        assert_eq!(level_order(Some(&root)), vec![Some(&"a"), None, Some(&"b")]);
    }
}
