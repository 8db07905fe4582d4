// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! UTF-8 character decoder.
//!
//! Decodes one character per call, classifying the leading byte by its
//! high-bit pattern and validating every continuation byte against the
//! `10xxxxxx` tag. The decoder is stateless and performs no allocation;
//! each call reads at most four bytes.

use tracing::trace;

use crate::core::{ByteClass, DecodedChar, Result, Utf8Error, CONTINUATION_MASK, CONTINUATION_TAG};

use super::cursor::ByteCursor;

/// Validating decoder for single UTF-8 characters.
///
/// Produces a [`DecodedChar`] carrying the packed byte value, the
/// tag-stripped scalar, and the width in bytes. All failure modes report
/// zero consumed bytes: a malformed or truncated sequence never advances
/// the cursor, so callers can stop or resynchronize deliberately.
///
/// Overlong encodings, surrogates, and code points above `U+10FFFF` are
/// not rejected; only the byte-layout tags are validated.
///
/// # Example
///
/// ```
/// use utf8codec::decode::Utf8Decoder;
///
/// let decoder = Utf8Decoder::new();
/// let unit = decoder.decode_at("é".as_bytes(), 0).unwrap();
/// assert_eq!(unit.packed, 0xC3A9);
/// assert_eq!(unit.scalar, 0xE9);
/// assert_eq!(unit.width, 2);
/// ```
pub struct Utf8Decoder {
    _private: (),
}

impl Utf8Decoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decode the character under the cursor.
    ///
    /// On success the cursor advances past the decoded sequence. On
    /// failure the cursor position is untouched, leaving the recovery
    /// choice to the caller.
    pub fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<DecodedChar> {
        let offset = cursor.position();
        let lead = cursor
            .peek()
            .ok_or_else(|| Utf8Error::truncated(1, 0, offset))?;

        let class = ByteClass::of(lead);
        trace!(offset, byte = lead, class = class.as_str(), "classified leading byte");

        let width = match class.width() {
            Some(width) => width,
            None if class.is_continuation() => {
                return Err(Utf8Error::stray_continuation(lead, offset))
            }
            None => return Err(Utf8Error::invalid_lead(lead, offset)),
        };

        if cursor.remaining() < width {
            return Err(Utf8Error::truncated(width, cursor.remaining(), offset));
        }

        let mut packed = u32::from(lead);
        let mut scalar = u32::from(lead & class.payload_mask());
        for index in 1..width {
            let byte = cursor
                .peek_ahead(index)
                .ok_or_else(|| Utf8Error::truncated(width, cursor.remaining(), offset))?;
            if byte & CONTINUATION_MASK != CONTINUATION_TAG {
                return Err(Utf8Error::bad_continuation(lead, byte, index, offset + index));
            }
            packed = (packed << 8) | u32::from(byte);
            scalar = (scalar << 6) | u32::from(byte & !CONTINUATION_MASK);
        }

        // The whole sequence validated; commit in one step
        cursor.skip(width)?;
        trace!(offset, packed, scalar, width, "decoded character");

        Ok(DecodedChar {
            packed,
            scalar,
            width,
        })
    }

    /// Decode one character starting at `offset`.
    ///
    /// # Arguments
    ///
    /// * `data` - The input bytes
    /// * `offset` - Offset of the leading byte to decode at
    pub fn decode_at(&self, data: &[u8], offset: usize) -> Result<DecodedChar> {
        let mut cursor = ByteCursor::at_offset(data, offset)?;
        self.decode(&mut cursor)
    }

    /// Decode one character as a raw `(value, width)` pair.
    ///
    /// This is the bare pair contract: `value` is the packed byte value
    /// and `width` the number of bytes consumed, with `(0, 0)` signaling
    /// failure of any kind. A caller advancing by the returned width and
    /// stopping on zero walks the input safely. Prefer [`decode_at`] when
    /// the failure cause matters.
    ///
    /// [`decode_at`]: Utf8Decoder::decode_at
    pub fn decode_pair(&self, data: &[u8], offset: usize) -> (u32, usize) {
        match self.decode_at(data, offset) {
            Ok(unit) => (unit.packed, unit.width),
            Err(_) => (0, 0),
        }
    }
}

impl Default for Utf8Decoder {
    fn default() -> Self {
        Self::new()
    }
}
