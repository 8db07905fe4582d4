// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Single-character and stream decoding.
//!
//! This module provides the decoding machinery layered over the core
//! byte classification:
//! - [`cursor`] - Bounds-checked reader over a byte slice
//! - [`decoder`] - Single-character decoder producing packed and scalar values
//! - [`stream`] - Iterator walking a whole slice with a recovery policy

pub mod cursor;
pub mod decoder;
pub mod stream;

pub use cursor::ByteCursor;
pub use decoder::Utf8Decoder;
pub use stream::{ParseRecoveryPolicyError, RecoveryPolicy, Utf8Stream};
