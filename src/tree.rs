mod codec;
mod node;
mod traversal;
mod preorder;
mod inorder;
mod postorder;

pub use node::*;
pub use traversal::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;

use std::fmt;
use std::cmp::Ordering;
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::iter::FromIterator;

use crate::error::TreeError;

/// An unbalanced binary search tree (BST) with set semantics
///
/// BST properties: For each node with element `e`:
/// - Every element in the left subtree is less than `e`
/// - Every element in the right subtree is greater than `e`
///
/// Elements that compare equal are the same key. Adding an element that is
/// already present does not modify the tree.
///
/// The tree never rebalances itself, so its shape is determined entirely by
/// insertion order. No operation recurses on the depth of the tree, so
/// degenerate (linear) trees are handled without growing the call stack.
///
/// Every traversal borrows the tree, so the tree cannot be modified while a
/// traversal is in progress.
pub struct BSTree<E> {
    root: Option<Box<Node<E>>>,
}

impl<E> Default for BSTree<E> {
    fn default() -> Self {
        Self {
            root: None,
        }
    }
}

impl<E> Drop for BSTree<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E: Clone> Clone for BSTree<E> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();

        // Copy slot by slot so that the clone has exactly the same shape
        let mut stack: Vec<_> = self.root.as_deref().map(|node| (node, &mut copy.root)).into_iter().collect();
        while let Some((source, slot)) = stack.pop() {
            let node = slot.insert(Box::new(Node::new(source.element().clone())));
            let (left, right) = node.children_mut();
            if let Some(child) = source.right() {
                stack.push((child, right));
            }
            if let Some(child) = source.left() {
                stack.push((child, left));
            }
        }

        copy
    }
}

impl<E: fmt::Debug> fmt::Debug for BSTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter_inorder())
            .finish()
    }
}

impl<E: PartialEq> PartialEq for BSTree<E> {
    fn eq(&self, other: &Self) -> bool {
        // Trees with the same elements can be shaped differently depending on insertion order.
        // In-order traversal is always sorted, so comparing it compares the contents.
        self.size() == other.size() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<E: Eq> Eq for BSTree<E> {}

impl<E> BSTree<E> {
    /// Creates an empty `BSTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    /// let tree: BSTree<&str> = BSTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree holding a single element at its root
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    /// let tree = BSTree::with_root("m");
    /// assert_eq!(tree.root().unwrap().element(), &"m");
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn with_root(element: E) -> Self {
        Self {
            root: Some(Box::new(Node::new(element))),
        }
    }

    /// Returns the root node of the tree
    ///
    /// Note that the root is simply the first element that was inserted (or
    /// whatever took its place after a `remove_min`/`remove_max`). For a
    /// guaranteed ordering, use the traversal methods.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BSTree, TreeError};
    ///
    /// let mut tree = BSTree::new();
    /// assert_eq!(tree.root().unwrap_err(), TreeError::EmptyTree);
    /// tree.add(4);
    /// tree.add(2);
    /// assert_eq!(tree.root()?.element(), &4);
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn root(&self) -> Result<&Node<E>, TreeError> {
        self.root.as_deref().ok_or(TreeError::EmptyTree)
    }

    /// Returns the number of levels in the tree
    ///
    /// An empty tree has height 0 and a tree with only a root has height 1.
    /// Computed with a level-by-level sweep, not recursion.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.extend(vec![2, 1, 3]);
    /// assert_eq!(tree.height(), 2);
    /// tree.add(4);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut queue: VecDeque<_> = self.root.as_deref().into_iter().collect();
        let mut height = 0;

        while !queue.is_empty() {
            // Drain exactly one level
            for _ in 0..queue.len() {
                if let Some(node) = queue.pop_front() {
                    queue.extend(node.left());
                    queue.extend(node.right());
                }
            }

            height += 1;
        }

        height
    }

    /// Returns the number of elements in the tree
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert_eq!(tree.size(), 0);
    /// tree.add("cat");
    /// tree.add("dog");
    /// tree.add("cat");
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        let mut queue: VecDeque<_> = self.root.as_deref().into_iter().collect();
        let mut size = 0;

        while let Some(node) = queue.pop_front() {
            size += 1;
            queue.extend(node.left());
            queue.extend(node.right());
        }

        size
    }

    /// Returns true if the tree holds no elements
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::with_root(1);
    /// assert!(!tree.is_empty());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        // Dropping a `Box<Node>` recurses into its children, so detach them first
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_left());
            stack.extend(node.take_right());
        }
    }

    /// Returns the smallest element without removing it
    pub fn first(&self) -> Option<&E> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.element())
    }

    /// Returns the largest element without removing it
    pub fn last(&self) -> Option<&E> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.element())
    }

    /// Detaches and returns the node holding the smallest element, or `None`
    /// if the tree is empty
    ///
    /// The right subtree of the removed node takes its place, so the returned
    /// node never has children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree: BSTree<_> = vec![5, 3, 8, 4].into_iter().collect();
    /// assert_eq!(tree.remove_min().map(|node| node.into_element()), Some(3));
    /// assert_eq!(tree.remove_min().map(|node| node.into_element()), Some(4));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn remove_min(&mut self) -> Option<Node<E>> {
        if !self.root.as_ref()?.has_left() {
            // The root is the minimum
            let mut min = self.root.take()?;
            self.root = min.take_right();
            return Some(*min);
        }

        // Find the parent of the left-most node
        let mut parent = self.root.as_deref_mut()?;
        while parent.left().map_or(false, Node::has_left) {
            parent = parent.left_mut()?;
        }

        // The left-most node has no left child, only its right subtree needs re-linking
        let mut min = parent.take_left()?;
        parent.set_left(min.take_right());
        Some(*min)
    }

    /// Detaches and returns the node holding the largest element, or `None`
    /// if the tree is empty
    ///
    /// The left subtree of the removed node takes its place, so the returned
    /// node never has children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree: BSTree<_> = vec![5, 3, 8, 7].into_iter().collect();
    /// assert_eq!(tree.remove_max().map(|node| node.into_element()), Some(8));
    /// assert_eq!(tree.remove_max().map(|node| node.into_element()), Some(7));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn remove_max(&mut self) -> Option<Node<E>> {
        if !self.root.as_ref()?.has_right() {
            // The root is the maximum
            let mut max = self.root.take()?;
            self.root = max.take_left();
            return Some(*max);
        }

        // Find the parent of the right-most node
        let mut parent = self.root.as_deref_mut()?;
        while parent.right().map_or(false, Node::has_right) {
            parent = parent.right_mut()?;
        }

        // The right-most node has no right child, only its left subtree needs re-linking
        let mut max = parent.take_right()?;
        parent.set_right(max.take_left());
        Some(*max)
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, E> {
        IterPreorder::new(self.root.as_deref())
    }

    /// Performs an in-order traversal of the tree
    ///
    /// Elements are yielded in ascending order.
    pub fn iter_inorder(&self) -> IterInorder<'_, E> {
        IterInorder::new(self.root.as_deref())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, E> {
        IterPostorder::new(self.root.as_deref())
    }
}

impl<E: Ord> BSTree<E> {
    /// Returns `true` if the tree contains an element equal to `entry`
    ///
    /// The entry may be any borrowed form of the element type, but the
    /// ordering on the borrowed form must match the ordering on the element
    /// type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// tree.add(String::from("abc"));
    /// assert!(tree.contains("abc"));
    /// assert!(!tree.contains("def"));
    /// ```
    pub fn contains<Q>(&self, entry: &Q) -> bool
        where E: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(entry).is_some()
    }

    /// Returns the node holding an element equal to `entry`, or `None` if
    /// there is no such element
    ///
    /// Time complexity: `O(height)`
    pub fn search<Q>(&self, entry: &Q) -> Option<&Node<E>>
        where E: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match entry.cmp(node.element().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Returns the node holding an element equal to `entry` mutably, or
    /// `None` if there is no such element
    ///
    /// This is how callers update data carried alongside an element's key.
    /// The key itself must not be changed (see [`Node::element_mut`]).
    ///
    /// Time complexity: `O(height)`
    pub fn search_mut<Q>(&mut self, entry: &Q) -> Option<&mut Node<E>>
        where E: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current.take() {
            match entry.cmp(node.element().borrow()) {
                Ordering::Less => current = node.left_mut(),
                Ordering::Greater => current = node.right_mut(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Adds a new element to the tree
    ///
    /// Returns `true` if the element was inserted. If an equal element is
    /// already present, nothing is inserted, the existing element is kept
    /// as-is and `false` is returned. The tree never merges elements; callers
    /// that want to update an existing element should use
    /// [`search_mut`](Self::search_mut) first.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert!(tree.add(37));
    /// assert!(!tree.add(37));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add(&mut self, new_entry: E) -> bool {
        let mut current = match self.root.as_deref_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Box::new(Node::new(new_entry)));
                return true;
            },
        };

        while let Some(node) = current.take() {
            match new_entry.cmp(node.element()) {
                Ordering::Less => {
                    // Not found, insert where we stopped
                    if !node.has_left() {
                        node.set_left(Some(Box::new(Node::new(new_entry))));
                        return true;
                    }
                    current = node.left_mut();
                },

                Ordering::Greater => {
                    // Not found, insert where we stopped
                    if !node.has_right() {
                        node.set_right(Some(Box::new(Node::new(new_entry))));
                        return true;
                    }
                    current = node.right_mut();
                },

                Ordering::Equal => return false,
            }
        }

        false
    }
}

impl<E: Ord> Extend<E> for BSTree<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E: Ord> FromIterator<E> for BSTree<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
