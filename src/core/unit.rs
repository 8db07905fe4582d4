// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoded unit type.
//!
//! A [`DecodedChar`] is the result of decoding one UTF-8 character. It
//! carries two value forms side by side:
//!
//! - **packed**: the raw encoded bytes concatenated big-endian into one
//!   integer, tag bits included. `世` (`E4 B8 96`) packs to `0xE4B896`.
//! - **scalar**: the code point with the tag bits stripped. The same
//!   sequence yields `0x4E16`.
//!
//! The packed form is the primary contract value; the scalar is the value
//! a text-processing caller usually wants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded UTF-8 character.
///
/// Produced by [`Utf8Decoder`](crate::decode::Utf8Decoder); exists only as
/// a return value owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedChar {
    /// Raw encoded bytes packed big-endian, tag bits included.
    pub packed: u32,
    /// Code point value with the tag bits stripped.
    pub scalar: u32,
    /// Number of bytes the encoding occupies (1 to 4).
    pub width: usize,
}

impl DecodedChar {
    /// Convert the scalar to a `char`.
    ///
    /// Returns `None` when the scalar is a surrogate or lies above
    /// `U+10FFFF`. Such sequences decode without error here because
    /// full Unicode validation is out of scope; the conversion is where
    /// that gap becomes visible.
    pub fn to_char(&self) -> Option<char> {
        char::from_u32(self.scalar)
    }

    /// Check if this unit is a 1-byte (ASCII) character.
    pub fn is_ascii(&self) -> bool {
        self.width == 1
    }

    /// Check if this unit came from a multi-byte sequence.
    pub fn is_multibyte(&self) -> bool {
        self.width > 1
    }
}

impl fmt::Display for DecodedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U+{:04X} ({} bytes, packed 0x{:02x})",
            self.scalar, self.width, self.packed
        )
    }
}
