// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bounded byte cursor for walking input during decoding.
//!
//! Every read and lookahead is checked against the slice length, so the
//! decoder can never touch memory outside the input. A sequence cut off
//! by the end of the slice surfaces as [`Utf8Error::Truncated`] instead
//! of an out-of-bounds read.

use crate::core::{Result, Utf8Error};

/// Cursor over a byte slice with bounded reads and lookahead.
///
/// The cursor tracks a single position. Decoding peeks at the leading
/// byte and up to three bytes ahead of it, then commits by skipping the
/// whole sequence at once; a failed decode leaves the position untouched
/// so the caller can choose a recovery policy.
///
/// # Example
///
/// ```
/// use utf8codec::decode::ByteCursor;
///
/// let mut cursor = ByteCursor::new(b"ab");
/// assert_eq!(cursor.peek(), Some(b'a'));
/// assert_eq!(cursor.peek_ahead(1), Some(b'b'));
/// assert_eq!(cursor.peek_ahead(2), None);
/// assert_eq!(cursor.position(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    /// The input bytes
    data: &'a [u8],
    /// Current position
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of the input.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Create a cursor at the given starting offset.
    ///
    /// An offset equal to the input length is allowed (an exhausted
    /// cursor); anything past it is rejected.
    pub fn at_offset(data: &'a [u8], offset: usize) -> Result<Self> {
        if offset > data.len() {
            return Err(Utf8Error::offset_out_of_bounds(offset, data.len()));
        }
        Ok(Self { data, offset })
    }

    /// Get the current position in the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Get the remaining bytes available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Check if at end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Peek at the byte under the cursor without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_ahead(0)
    }

    /// Peek `ahead` bytes past the cursor without advancing.
    ///
    /// `peek_ahead(0)` is the byte under the cursor. Returns `None` when
    /// the requested byte lies past the end of the input.
    pub fn peek_ahead(&self, ahead: usize) -> Option<u8> {
        self.data.get(self.offset + ahead).copied()
    }

    /// Read a single byte, advancing the cursor.
    pub fn read_u8(&mut self) -> Result<u8> {
        match self.data.get(self.offset) {
            Some(&value) => {
                self.offset += 1;
                Ok(value)
            }
            None => Err(Utf8Error::truncated(1, 0, self.offset)),
        }
    }

    /// Skip bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(Utf8Error::truncated(count, self.remaining(), self.offset));
        }
        self.offset += count;
        Ok(())
    }
}
