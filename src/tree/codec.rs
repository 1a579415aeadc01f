use std::io::Cursor;

use crate::codec::{Decode, Encode};
use crate::error::CodecError;

use super::{BSTree, Node};

/// Marker written in front of every child slot
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodecMarker {
    Absent,
    Present,
}

impl Encode for CodecMarker {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        match self {
            CodecMarker::Absent => 0u8.encode(bytes),
            CodecMarker::Present => 1u8.encode(bytes),
        }
    }
}

impl Decode for CodecMarker {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        match u8::decode(bytes)? {
            0 => Ok(CodecMarker::Absent),
            1 => Ok(CodecMarker::Present),
            value => Err(CodecError::UnexpectedValue(value)),
        }
    }
}

/// A tree is a marker for the root slot, followed by the element and the
/// left and right subtrees of every present node, in pre-order
impl<E: Encode> Encode for BSTree<E> {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        let mut stack = vec![self.root.as_deref()];

        while let Some(slot) = stack.pop() {
            match slot {
                None => CodecMarker::Absent.encode(bytes)?,
                Some(node) => {
                    CodecMarker::Present.encode(bytes)?;
                    node.element().encode(bytes)?;
                    stack.push(node.right());
                    stack.push(node.left());
                },
            }
        }

        Ok(())
    }
}

impl<E: Decode + Ord> Decode for BSTree<E> {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let mut tree = BSTree::new();
        let mut nodes = 0usize;

        let mut stack = vec![&mut tree.root];
        while let Some(slot) = stack.pop() {
            match CodecMarker::decode(bytes)? {
                CodecMarker::Absent => {},
                CodecMarker::Present => {
                    let node = slot.insert(Box::new(Node::new(E::decode(bytes)?)));
                    nodes += 1;

                    let (left, right) = node.children_mut();
                    stack.push(right);
                    stack.push(left);
                },
            }
        }

        // The shape is taken as-is, so it has to be checked
        let mut previous = None;
        for element in tree.iter_inorder() {
            if previous.map_or(false, |previous| previous >= element) {
                return Err(CodecError::Unordered);
            }
            previous = Some(element);
        }

        log::trace!("decoded tree with {} nodes", nodes);
        Ok(tree)
    }
}
