// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Utf8codec
//!
//! Validating UTF-8 character decoder for byte-level inspection.
//!
//! This library decodes one UTF-8 character at a time from a byte slice,
//! reporting three things per character:
//! - **Packed value** - the character's raw bytes concatenated into a `u32`,
//!   tag bits included (`世` = `E4 B8 96` packs to `0xE4B896`)
//! - **Scalar value** - the Unicode code point with the tag bits stripped
//!   (`世` is `U+4E16`)
//! - **Width** - how many bytes the character occupies, 1 through 4
//!
//! Every read is bounds-checked against the slice, and every continuation
//! byte is verified against the `10xxxxxx` tag before a character is
//! accepted. Failures carry the offset and bytes involved.
//!
//! ## Architecture
//!
//! - `core/` - Byte classification, error type, decoded-character type
//! - `decode/` - Bounds-checked cursor, single-character decoder, stream walker
//!
//! ## Example: Decoding One Character
//!
//! ```rust
//! use utf8codec::Utf8Decoder;
//!
//! let decoder = Utf8Decoder::new();
//! let unit = decoder.decode_at("世界".as_bytes(), 0)?;
//! assert_eq!(unit.packed, 0xE4B896);
//! assert_eq!(unit.scalar, 0x4E16);
//! assert_eq!(unit.width, 3);
//! # Ok::<(), utf8codec::Utf8Error>(())
//! ```
//!
//! ## Example: Walking a Slice
//!
//! ```rust
//! use utf8codec::{RecoveryPolicy, Utf8Stream};
//!
//! let data = b"a\x80b";
//! for item in Utf8Stream::with_policy(data, RecoveryPolicy::Resync) {
//!     match item {
//!         Ok(unit) => println!("U+{:04X} ({} bytes)", unit.scalar, unit.width),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{ByteClass, DecodedChar, Result, Utf8Error};

// Decoding machinery
pub mod decode;

// Re-export the main entry points at the crate root
pub use decode::{ByteCursor, RecoveryPolicy, Utf8Decoder, Utf8Stream};
