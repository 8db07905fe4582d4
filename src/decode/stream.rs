// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Stream walker over a byte slice.
//!
//! [`Utf8Stream`] repeatedly invokes the decoder, advancing by each
//! decoded width until the slice is exhausted. What happens on a decode
//! failure is the caller's choice, expressed as a [`RecoveryPolicy`]:
//! halt at the first bad byte, or skip one byte at a time until decoding
//! locks back onto a valid leading byte.

use tracing::warn;

use crate::core::{DecodedChar, Result};

use super::cursor::ByteCursor;
use super::decoder::Utf8Decoder;

/// What the stream does after a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecoveryPolicy {
    /// Yield the error once, then end the stream
    Stop,
    /// Yield the error, skip one byte, and try again at the next offset
    Resync,
}

impl RecoveryPolicy {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryPolicy::Stop => "stop",
            RecoveryPolicy::Resync => "resync",
        }
    }
}

/// Error returned when parsing a `RecoveryPolicy` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRecoveryPolicyError {
    _private: (),
}

impl std::fmt::Display for ParseRecoveryPolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid recovery policy, expected 'stop' or 'resync'")
    }
}

impl std::error::Error for ParseRecoveryPolicyError {}

impl std::str::FromStr for RecoveryPolicy {
    type Err = ParseRecoveryPolicyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stop" => Ok(RecoveryPolicy::Stop),
            "resync" => Ok(RecoveryPolicy::Resync),
            _ => Err(ParseRecoveryPolicyError { _private: () }),
        }
    }
}

/// Iterator decoding successive characters from a byte slice.
///
/// Yields `Ok(DecodedChar)` per decoded character and `Err(Utf8Error)`
/// per failure; the recovery policy decides whether a failure ends the
/// stream or costs one skipped byte. Exhaustion of the slice ends the
/// stream — no sentinel byte is interpreted, and `0x00` decodes as an
/// ordinary 1-byte character.
///
/// # Example
///
/// ```
/// use utf8codec::decode::Utf8Stream;
///
/// let packed: Vec<u32> = Utf8Stream::new("H世".as_bytes())
///     .map(|unit| unit.unwrap().packed)
///     .collect();
/// assert_eq!(packed, vec![0x48, 0xE4B896]);
/// ```
pub struct Utf8Stream<'a> {
    cursor: ByteCursor<'a>,
    decoder: Utf8Decoder,
    policy: RecoveryPolicy,
    halted: bool,
}

impl<'a> Utf8Stream<'a> {
    /// Create a stream over `data` that stops at the first failure.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_policy(data, RecoveryPolicy::Stop)
    }

    /// Create a stream over `data` with an explicit recovery policy.
    pub fn with_policy(data: &'a [u8], policy: RecoveryPolicy) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            decoder: Utf8Decoder::new(),
            policy,
            halted: false,
        }
    }

    /// Current byte offset into the input.
    ///
    /// Readable between items: before a call to `next` this is the
    /// offset the next decode will start at.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The recovery policy this stream applies.
    pub fn policy(&self) -> RecoveryPolicy {
        self.policy
    }
}

impl<'a> Iterator for Utf8Stream<'a> {
    type Item = Result<DecodedChar>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.cursor.is_at_end() {
            return None;
        }

        match self.decoder.decode(&mut self.cursor) {
            Ok(unit) => Some(Ok(unit)),
            Err(err) => {
                match self.policy {
                    RecoveryPolicy::Stop => {
                        self.halted = true;
                    }
                    RecoveryPolicy::Resync => {
                        warn!(
                            offset = self.cursor.position(),
                            error = %err,
                            "skipping undecodable byte"
                        );
                        // One byte of progress per failure keeps the
                        // walk terminating on arbitrary garbage
                        if self.cursor.skip(1).is_err() {
                            self.halted = true;
                        }
                    }
                }
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Utf8Error;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("stop".parse::<RecoveryPolicy>(), Ok(RecoveryPolicy::Stop));
        assert_eq!(
            "resync".parse::<RecoveryPolicy>(),
            Ok(RecoveryPolicy::Resync)
        );
        assert_eq!("RESYNC".parse::<RecoveryPolicy>(), Ok(RecoveryPolicy::Resync));
        assert!("skip".parse::<RecoveryPolicy>().is_err());
    }

    #[test]
    fn test_policy_as_str() {
        assert_eq!(RecoveryPolicy::Stop.as_str(), "stop");
        assert_eq!(RecoveryPolicy::Resync.as_str(), "resync");
    }

    #[test]
    fn test_stream_single_ascii() {
        let mut stream = Utf8Stream::new(b"A");
        let unit = stream.next().expect("item").expect("decode");
        assert_eq!(unit.packed, 0x41);
        assert_eq!(unit.width, 1);
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_stream_empty_input() {
        let mut stream = Utf8Stream::new(b"");
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_stream_stop_halts_after_error() {
        let mut stream = Utf8Stream::new(&[0x41, 0x80, 0x42]);
        assert_eq!(stream.next().expect("item").expect("decode").packed, 0x41);
        let err = stream.next().expect("item").unwrap_err();
        assert_eq!(err, Utf8Error::stray_continuation(0x80, 1));
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_stream_resync_recovers() {
        let stream = Utf8Stream::with_policy(&[0x41, 0x80, 0x42], RecoveryPolicy::Resync);
        let items: Vec<_> = stream.collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().expect("decode").packed, 0x41);
        assert!(items[1].is_err());
        assert_eq!(items[2].as_ref().expect("decode").packed, 0x42);
    }

    #[test]
    fn test_stream_resync_one_error_per_garbage_byte() {
        let stream = Utf8Stream::with_policy(&[0x80, 0x81, 0x82, 0x41], RecoveryPolicy::Resync);
        let items: Vec<_> = stream.collect();
        assert_eq!(items.len(), 4);
        assert!(items[0].is_err());
        assert!(items[1].is_err());
        assert!(items[2].is_err());
        assert_eq!(items[3].as_ref().expect("decode").packed, 0x41);
    }

    #[test]
    fn test_stream_truncated_tail_terminates() {
        // Stop: one error, then the end
        let items: Vec<_> = Utf8Stream::new(&[0xE4, 0xB8]).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], Err(Utf8Error::truncated(3, 2, 0)));

        // Resync: each shorter suffix fails in turn, then the end
        let items: Vec<_> =
            Utf8Stream::with_policy(&[0xE4, 0xB8], RecoveryPolicy::Resync).collect();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.is_err()));
    }

    #[test]
    fn test_stream_position() {
        let mut stream = Utf8Stream::new("é世".as_bytes());
        assert_eq!(stream.position(), 0);
        stream.next().expect("item").expect("decode");
        assert_eq!(stream.position(), 2);
        stream.next().expect("item").expect("decode");
        assert_eq!(stream.position(), 5);
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_stream_collect_to_result() {
        let collected: Result<Vec<DecodedChar>> = Utf8Stream::new("ok".as_bytes()).collect();
        let units = collected.expect("all decode");
        assert_eq!(units.len(), 2);

        let collected: Result<Vec<DecodedChar>> = Utf8Stream::new(&[0x6F, 0xFF]).collect();
        assert!(collected.is_err());
    }
}
