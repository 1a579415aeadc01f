use std::fmt;

/// A single owned node of the binary search tree
///
/// Each node is owned by exactly one slot: either the root slot of a
/// [`BSTree`](crate::BSTree) or the `left`/`right` slot of its parent.
pub struct Node<E> {
    element: E,
    left: Option<Box<Node<E>>>,
    right: Option<Box<Node<E>>>,
}

/// Shows only this node's element, not its subtrees
impl<E: fmt::Debug> fmt::Debug for Node<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("has_left", &self.has_left())
            .field("has_right", &self.has_right())
            .finish()
    }
}

impl<E> Node<E> {
    pub(crate) fn new(element: E) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    /// Returns the element stored in this node
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Returns the element stored in this node mutably
    ///
    /// The ordering of the element **must not** change. Only auxiliary data
    /// that does not take part in `Ord` may be modified through this
    /// reference.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Consumes the node, returning its element
    pub fn into_element(self) -> E {
        self.element
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Option<Box<Self>>) {
        self.left = new_node;
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Option<Box<Self>>) {
        self.right = new_node;
    }

    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Both child slots at once, for walks that need to hold on to the two
    /// subtrees independently
    pub(crate) fn children_mut(&mut self) -> (&mut Option<Box<Self>>, &mut Option<Box<Self>>) {
        (&mut self.left, &mut self.right)
    }
}
