//! Position-advancing view over one message's serialized bytes.

use bytes::{Buf, Bytes};

use crate::{byte_order::ByteOrder, error::FieldError};

/// Sequential reader over an owned byte region.
///
/// A single cursor is threaded by `&mut` through the whole recursive decode of
/// one message, so every field consumes its bytes from the same position.
/// Regions handed out by [`Cursor::take`] share the underlying allocation.
#[derive(Debug, Clone)]
pub struct Cursor {
    buf: Bytes,
    initial_len: usize,
    order: ByteOrder,
}

impl Cursor {
    pub fn new(data: impl Into<Bytes>) -> Self {
        let buf = data.into();
        let initial_len = buf.len();
        Self {
            buf,
            initial_len,
            order: ByteOrder::default(),
        }
    }

    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Change the byte order used for subsequent reads.
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.initial_len - self.buf.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    pub fn read_i32(&mut self) -> Result<i32, FieldError> {
        let available = self.buf.remaining();
        let eof = |_| FieldError::UnexpectedEof {
            needed: 4,
            available,
        };
        match self.order {
            ByteOrder::LittleEndian => self.buf.try_get_i32_le().map_err(eof),
            ByteOrder::BigEndian => self.buf.try_get_i32().map_err(eof),
        }
    }

    pub fn read_u32(&mut self) -> Result<u32, FieldError> {
        self.read_i32().map(|v| v as u32)
    }

    /// Read a 4-byte signed length prefix.
    ///
    /// Negative prefixes are rejected as malformed rather than wrapped.
    pub fn read_length(&mut self) -> Result<usize, FieldError> {
        let raw = self.read_i32()?;
        usize::try_from(raw).map_err(|_| FieldError::InvalidLength(raw))
    }

    /// Split off the next `n` bytes as an owned region.
    ///
    /// On failure the cursor is left where it was.
    pub fn take(&mut self, n: usize) -> Result<Bytes, FieldError> {
        let available = self.buf.remaining();
        if available < n {
            return Err(FieldError::UnexpectedEof {
                needed: n,
                available,
            });
        }
        Ok(self.buf.split_to(n))
    }
}
