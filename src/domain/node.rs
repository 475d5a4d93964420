//! Binary tree node and depth calculation.

use std::collections::VecDeque;

use tracing::instrument;

/// Owning handle to an optional subtree.
pub type Tree<T> = Option<Box<Node<T>>>;

/// Binary tree node.
///
/// A node without a value is a placeholder: it only exists to complete the
/// balanced shape and renders as a blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: Option<T>,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            left: None,
            right: None,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            value: None,
            left: None,
            right: None,
        }
    }

    /// Builder-style left child attachment.
    pub fn with_left(mut self, child: Node<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Builder-style right child attachment.
    pub fn with_right(mut self, child: Node<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Depth of the subtree rooted at this node (1 for a leaf).
    pub fn depth(&self) -> usize {
        depth(Some(self))
    }
}

/// Frees the subtree with an explicit stack instead of recursing once per level.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            // `node` is a leaf now, dropping it does not recurse
        }
    }
}

/// Calculates the depth of a tree using a breadth-first traversal.
///
/// Each element in the queue is a pair (node, level). An empty tree has depth 0.
#[instrument(level = "trace", skip(root))]
pub fn depth<T>(root: Option<&Node<T>>) -> usize {
    let mut max_depth = 0;
    let mut queue = VecDeque::new();
    if let Some(node) = root {
        queue.push_back((node, 1));
    }

    while let Some((node, level)) = queue.pop_front() {
        max_depth = max_depth.max(level);
        for child in [&node.left, &node.right].into_iter().flatten() {
            queue.push_back((child.as_ref(), level + 1));
        }
    }

    max_depth
}
