use std::io;
use std::string::FromUtf8Error;

/// Errors produced by tree operations that have no sensible answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The root was requested from a tree that holds no elements
    #[error("the tree is empty; it has no root node")]
    EmptyTree,
    /// A traversal was advanced after its last element
    #[error("no more elements in the traversal")]
    IterationExhausted,
}

/// Errors triggered while encoding or decoding a tree
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The underlying reader ran out of bytes or failed
    #[error("I/O error while decoding")]
    Io(#[from] io::Error),
    /// A marker byte had a value outside of its defined range
    #[error("unexpected value {0:#04x}")]
    UnexpectedValue(u8),
    #[error("string is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
    /// A length does not fit in the 32-bit length prefix
    #[error("length {0} does not fit in a 32-bit length prefix")]
    LengthOverflow(usize),
    #[error("{0} trailing bytes after the encoded value")]
    TrailingBytes(usize),
    /// A decoded value's fields contradict each other
    #[error("inconsistent value: {0}")]
    Inconsistent(&'static str),
    /// The decoded nodes do not satisfy the binary search tree ordering
    #[error("decoded tree violates the binary search tree ordering")]
    Unordered,
}
