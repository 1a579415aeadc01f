//! A small binary codec for persisting trees.
//!
//! All integers are big-endian. Strings and vectors carry a `u32` length
//! prefix. Trees are stored in pre-order, with a one-byte marker in front of
//! every child slot telling whether a node follows (see
//! [`BSTree`](crate::BSTree)'s [`Encode`] impl).

use std::convert::TryFrom;
use std::io::{self, Cursor, Read};

use crate::error::CodecError;

/// A value that can be written to a byte buffer
pub trait Encode {
    /// Appends the encoding of `self` to `bytes`
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError>;

    /// Returns the encoding of `self` in a freshly allocated buffer
    fn get_encoded(&self) -> Result<Vec<u8>, CodecError> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        Ok(bytes)
    }
}

/// A value that can be read back from a byte buffer
pub trait Decode: Sized {
    /// Reads one value from the current position of `bytes`
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError>;

    /// Decodes a value that must span the whole of `bytes`
    fn get_decoded(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = Cursor::new(bytes);
        let value = Self::decode(&mut cursor)?;

        let remaining = remaining(&cursor);
        if remaining != 0 {
            return Err(CodecError::TrailingBytes(remaining));
        }

        Ok(value)
    }
}

fn remaining(bytes: &Cursor<&[u8]>) -> usize {
    let len = bytes.get_ref().len();
    len.saturating_sub(bytes.position() as usize)
}

/// Reads exactly `len` bytes, refusing up front if fewer are left
///
/// Checking first keeps a corrupt length prefix from triggering a huge
/// allocation.
fn read_exact_vec(bytes: &mut Cursor<&[u8]>, len: usize) -> Result<Vec<u8>, CodecError> {
    if len > remaining(bytes) {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }

    let mut buf = vec![0; len];
    bytes.read_exact(&mut buf)?;
    Ok(buf)
}

fn encode_len(len: usize, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
    let len = u32::try_from(len).map_err(|_| CodecError::LengthOverflow(len))?;
    len.encode(bytes)
}

impl Encode for u8 {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.push(*self);
        Ok(())
    }
}

impl Decode for u8 {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let mut buf = [0; 1];
        bytes.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl Encode for u32 {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }
}

impl Decode for u32 {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let mut buf = [0; 4];
        bytes.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }
}

impl Encode for u64 {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        bytes.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }
}

impl Decode for u64 {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let mut buf = [0; 8];
        bytes.read_exact(&mut buf)?;
        Ok(u64::from_be_bytes(buf))
    }
}

impl Encode for String {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        encode_len(self.len(), bytes)?;
        bytes.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Decode for String {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let len = u32::decode(bytes)? as usize;
        let buf = read_exact_vec(bytes, len)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        encode_len(self.len(), bytes)?;
        for item in self {
            item.encode(bytes)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let len = u32::decode(bytes)? as usize;
        // Every item takes at least one byte
        let mut items = Vec::with_capacity(len.min(remaining(bytes)));
        for _ in 0..len {
            items.push(T::decode(bytes)?);
        }
        Ok(items)
    }
}
