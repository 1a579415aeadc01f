use std::iter::FusedIterator;

use super::{Node, Traversal};

/// Node, left subtree, right subtree
#[derive(Debug, Clone)]
pub struct IterPreorder<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> IterPreorder<'a, E> {
    pub(super) fn new(root: Option<&'a Node<E>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, E> Iterator for IterPreorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so that the left subtree is popped first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<'a, E> Traversal<'a, E> for IterPreorder<'a, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, E> FusedIterator for IterPreorder<'a, E> {}
