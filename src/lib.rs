//! An unbalanced binary search tree with set semantics.
//!
//! [`BSTree`] owns its nodes through `Box` links and never rebalances. It
//! supports ordered insertion, lookup (including mutable lookup for updating
//! data carried next to a key), extraction of the minimum and maximum node,
//! and pre-order, in-order and post-order traversals. Every algorithm is
//! iterative, so even a fully degenerate tree never recurses on its depth.
//!
//! Trees can be persisted with the binary [`codec`].

#![allow(clippy::upper_case_acronyms)]

pub mod codec;
pub mod error;
pub mod tree;

pub use error::{CodecError, TreeError};
pub use tree::{BSTree, Node, Traversal};

#[macro_export(local_inner_macros)]
macro_rules! bstree {
    // trailing comma case
    ($($element:expr,)+) => (bstree!($($element),+));

    ( $($element:expr),* ) => {
        {
            let mut _tree = $crate::BSTree::new();
            $(
                let _ = _tree.add($element);
            )*
            _tree
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bstree_macro() {
        let tree = bstree! {
            "m",
            "c",
            "t", // trailing comma
        };

        let items: Vec<_> = tree.iter_preorder().copied().collect();
        assert_eq!(&items, &["m", "c", "t"]);

        // No trailing comma
        let tree = bstree![99];

        let items: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[99]);

        // Duplicates are dropped
        let tree = bstree![1, 1, 2];
        assert_eq!(tree.size(), 2);

        // Zero items
        let tree = bstree!();

        let items: Vec<i32> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[]);
    }
}
