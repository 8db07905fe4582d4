// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout utf8codec.
//!
//! This module provides the foundational types for the library:
//! - [`Utf8Error`] - Decode error taxonomy
//! - [`DecodedChar`] - The decoded unit (packed value, scalar, width)
//! - [`ByteClass`] - Leading-byte classification

pub mod error;
pub mod unit;

pub use error::{Result, Utf8Error};
pub use unit::DecodedChar;

/// Mask selecting the tag bits of a continuation byte.
pub const CONTINUATION_MASK: u8 = 0xC0;

/// Tag bits of a continuation byte (`10xxxxxx`).
pub const CONTINUATION_TAG: u8 = 0x80;

/// Classification of a byte by its high-order bit pattern.
///
/// The pattern of a leading byte declares the total length of the encoded
/// sequence it begins; continuation bytes carry the `10` tag and can never
/// lead, and `0xF8..=0xFF` fit no pattern at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteClass {
    /// `0xxxxxxx` - a complete 1-byte character
    Ascii,
    /// `110xxxxx` - leads a 2-byte sequence
    Lead2,
    /// `1110xxxx` - leads a 3-byte sequence
    Lead3,
    /// `11110xxx` - leads a 4-byte sequence
    Lead4,
    /// `10xxxxxx` - continuation byte, invalid in lead position
    Continuation,
    /// `0xF8..=0xFF` - fits no UTF-8 pattern
    Invalid,
}

impl ByteClass {
    /// Classify a byte by its high-order bits.
    ///
    /// The classification is total: every byte value falls into exactly
    /// one class.
    pub const fn of(byte: u8) -> Self {
        if byte & 0x80 == 0x00 {
            ByteClass::Ascii
        } else if byte & CONTINUATION_MASK == CONTINUATION_TAG {
            ByteClass::Continuation
        } else if byte & 0xE0 == 0xC0 {
            ByteClass::Lead2
        } else if byte & 0xF0 == 0xE0 {
            ByteClass::Lead3
        } else if byte & 0xF8 == 0xF0 {
            ByteClass::Lead4
        } else {
            ByteClass::Invalid
        }
    }

    /// Total sequence width declared by a byte of this class, if it can lead.
    pub const fn width(self) -> Option<usize> {
        match self {
            ByteClass::Ascii => Some(1),
            ByteClass::Lead2 => Some(2),
            ByteClass::Lead3 => Some(3),
            ByteClass::Lead4 => Some(4),
            ByteClass::Continuation | ByteClass::Invalid => None,
        }
    }

    /// Mask selecting the payload bits a byte of this class contributes
    /// to the decoded scalar.
    pub const fn payload_mask(self) -> u8 {
        match self {
            ByteClass::Ascii => 0x7F,
            ByteClass::Lead2 => 0x1F,
            ByteClass::Lead3 => 0x0F,
            ByteClass::Lead4 => 0x07,
            ByteClass::Continuation => 0x3F,
            ByteClass::Invalid => 0x00,
        }
    }

    /// Check if a byte of this class can begin a character.
    pub const fn is_lead(self) -> bool {
        self.width().is_some()
    }

    /// Check if this is the continuation class.
    pub const fn is_continuation(self) -> bool {
        matches!(self, ByteClass::Continuation)
    }

    /// Convert to string representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            ByteClass::Ascii => "ascii",
            ByteClass::Lead2 => "lead-2",
            ByteClass::Lead3 => "lead-3",
            ByteClass::Lead4 => "lead-4",
            ByteClass::Continuation => "continuation",
            ByteClass::Invalid => "invalid",
        }
    }
}
