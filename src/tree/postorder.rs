use std::iter::FusedIterator;

use super::{Node, Traversal};

/// Left subtree, right subtree, node
///
/// The whole order is computed up front when the iterator is created, which
/// costs `O(n)` time and `O(n)` extra space.
#[derive(Debug, Clone)]
pub struct IterPostorder<'a, E> {
    /// Reverse post-order: the top of the stack is the next node to yield
    stack: Vec<&'a Node<E>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal/
impl<'a, E> IterPostorder<'a, E> {
    pub(super) fn new(root: Option<&'a Node<E>>) -> Self {
        let mut pending: Vec<_> = root.into_iter().collect();
        let mut stack = Vec::new();

        // Popping `pending` visits node, right, left. Reversing that through
        // `stack` gives left, right, node.
        while let Some(node) = pending.pop() {
            stack.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        Self {stack}
    }
}

impl<'a, E> Iterator for IterPostorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(Node::element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<'a, E> Traversal<'a, E> for IterPostorder<'a, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, E> ExactSizeIterator for IterPostorder<'a, E> {}

impl<'a, E> FusedIterator for IterPostorder<'a, E> {}
