// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for utf8codec.
//!
//! Provides error types for decode operations:
//! - Malformed leading and continuation bytes
//! - Truncated sequences
//! - Out-of-bounds starting offsets

use std::fmt;

/// Errors that can occur while decoding a UTF-8 sequence.
///
/// Every variant carries the byte offset it was detected at, so callers
/// can report the failure position or resynchronize past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utf8Error {
    /// A continuation byte (`10xxxxxx`) appeared where a leading byte was expected
    StrayContinuation {
        /// The offending byte
        byte: u8,
        /// Offset of the byte in the input
        offset: usize,
    },

    /// A byte that can never begin a UTF-8 sequence (`0xF8..=0xFF`)
    InvalidLeadByte {
        /// The offending byte
        byte: u8,
        /// Offset of the byte in the input
        offset: usize,
    },

    /// A continuation byte failed the `10xxxxxx` tag check
    BadContinuation {
        /// The leading byte of the sequence being decoded
        lead: u8,
        /// The byte that failed the tag check
        byte: u8,
        /// Position of the failed byte within the sequence (1 to 3)
        index: usize,
        /// Offset of the failed byte in the input
        offset: usize,
    },

    /// Input ends before the sequence declared by the leading byte completes
    Truncated {
        /// Bytes the sequence requires in total
        needed: usize,
        /// Bytes actually available from the leading byte onward
        available: usize,
        /// Offset of the leading byte in the input
        offset: usize,
    },

    /// Starting offset lies beyond the end of the input
    OffsetOutOfBounds {
        /// The requested offset
        offset: usize,
        /// Input length in bytes
        len: usize,
    },
}

impl Utf8Error {
    /// Create a stray continuation byte error.
    pub fn stray_continuation(byte: u8, offset: usize) -> Self {
        Utf8Error::StrayContinuation { byte, offset }
    }

    /// Create an invalid leading byte error.
    pub fn invalid_lead(byte: u8, offset: usize) -> Self {
        Utf8Error::InvalidLeadByte { byte, offset }
    }

    /// Create a bad continuation byte error.
    pub fn bad_continuation(lead: u8, byte: u8, index: usize, offset: usize) -> Self {
        Utf8Error::BadContinuation {
            lead,
            byte,
            index,
            offset,
        }
    }

    /// Create a truncated sequence error.
    pub fn truncated(needed: usize, available: usize, offset: usize) -> Self {
        Utf8Error::Truncated {
            needed,
            available,
            offset,
        }
    }

    /// Create an out-of-bounds offset error.
    pub fn offset_out_of_bounds(offset: usize, len: usize) -> Self {
        Utf8Error::OffsetOutOfBounds { offset, len }
    }

    /// Offset in the input where the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            Utf8Error::StrayContinuation { offset, .. }
            | Utf8Error::InvalidLeadByte { offset, .. }
            | Utf8Error::BadContinuation { offset, .. }
            | Utf8Error::Truncated { offset, .. }
            | Utf8Error::OffsetOutOfBounds { offset, .. } => *offset,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Utf8Error::StrayContinuation { byte, offset } => vec![
                ("byte", format!("0x{byte:02x}")),
                ("offset", offset.to_string()),
            ],
            Utf8Error::InvalidLeadByte { byte, offset } => vec![
                ("byte", format!("0x{byte:02x}")),
                ("offset", offset.to_string()),
            ],
            Utf8Error::BadContinuation {
                lead,
                byte,
                index,
                offset,
            } => vec![
                ("lead", format!("0x{lead:02x}")),
                ("byte", format!("0x{byte:02x}")),
                ("index", index.to_string()),
                ("offset", offset.to_string()),
            ],
            Utf8Error::Truncated {
                needed,
                available,
                offset,
            } => vec![
                ("needed", needed.to_string()),
                ("available", available.to_string()),
                ("offset", offset.to_string()),
            ],
            Utf8Error::OffsetOutOfBounds { offset, len } => vec![
                ("offset", offset.to_string()),
                ("len", len.to_string()),
            ],
        }
    }
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Utf8Error::StrayContinuation { byte, offset } => write!(
                f,
                "Stray continuation byte 0x{byte:02x} at offset {offset}: a character cannot begin with the 10xxxxxx pattern"
            ),
            Utf8Error::InvalidLeadByte { byte, offset } => write!(
                f,
                "Invalid leading byte 0x{byte:02x} at offset {offset}: no UTF-8 sequence begins with this byte"
            ),
            Utf8Error::BadContinuation {
                lead,
                byte,
                index,
                offset,
            } => write!(
                f,
                "Invalid continuation byte 0x{byte:02x} at offset {offset} (byte {index} of the sequence led by 0x{lead:02x}): does not match 10xxxxxx"
            ),
            Utf8Error::Truncated {
                needed,
                available,
                offset,
            } => write!(
                f,
                "Truncated sequence at offset {offset}: {needed} bytes needed, but only {available} available"
            ),
            Utf8Error::OffsetOutOfBounds { offset, len } => write!(
                f,
                "Offset {offset} is out of bounds for a {len}-byte input"
            ),
        }
    }
}

impl std::error::Error for Utf8Error {}

/// Result type for utf8codec operations.
pub type Result<T> = std::result::Result<T, Utf8Error>;
