use std::iter::FusedIterator;

use super::{Node, Traversal};

/// Left subtree, node, right subtree. Yields the elements in ascending order.
#[derive(Debug, Clone)]
pub struct IterInorder<'a, E> {
    /// The next subtree whose left spine has not been pushed yet
    current: Option<&'a Node<E>>,
    stack: Vec<&'a Node<E>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, E> IterInorder<'a, E> {
    pub(super) fn new(root: Option<&'a Node<E>>) -> Self {
        Self {
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<'a, E> Iterator for IterInorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_node) = self.current {
            self.stack.push(current_node);
            self.current = current_node.left();
        }

        let node = self.stack.pop()?;
        self.current = node.right();

        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.stack.len() + self.current.is_some() as usize;
        (pending, None)
    }
}

impl<'a, E> Traversal<'a, E> for IterInorder<'a, E> {
    fn has_next(&self) -> bool {
        self.current.is_some() || !self.stack.is_empty()
    }
}

impl<'a, E> FusedIterator for IterInorder<'a, E> {}
