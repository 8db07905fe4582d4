// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Stream walker integration tests.
//!
//! Walks whole inputs under both recovery policies and checks the
//! character-by-character results, positions, and termination.

use utf8codec::{DecodedChar, RecoveryPolicy, Utf8Error, Utf8Stream};

fn packed_values(data: &[u8], policy: RecoveryPolicy) -> Vec<Option<u32>> {
    Utf8Stream::with_policy(data, policy)
        .map(|item| item.ok().map(|unit| unit.packed))
        .collect()
}

// ============================================================================
// Clean Input
// ============================================================================

#[test]
fn test_walk_mixed_width_text() {
    let data = "Hello, 世界".as_bytes();
    assert_eq!(data.len(), 13);

    let units: Vec<DecodedChar> = Utf8Stream::new(data)
        .collect::<Result<_, _>>()
        .expect("clean input decodes");

    assert_eq!(units.len(), 9);
    assert_eq!(units[0].packed, u32::from(b'H'));
    assert_eq!(units[7].packed, 0xE4B896);
    assert_eq!(units[7].scalar, 0x4E16);
    assert_eq!(units[8].packed, 0xE7958C);
    assert_eq!(units[8].scalar, 0x754C);

    let total: usize = units.iter().map(|unit| unit.width).sum();
    assert_eq!(total, data.len());
}

#[test]
fn test_walk_reconstructs_the_input_string() {
    let text = "càfé 𐍈 Ωmega";
    let decoded: String = Utf8Stream::new(text.as_bytes())
        .map(|item| item.expect("valid").to_char().expect("scalar in range"))
        .collect();
    assert_eq!(decoded, text);
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(Utf8Stream::new(b"").next().is_none());
    assert!(Utf8Stream::with_policy(b"", RecoveryPolicy::Resync).next().is_none());
}

// ============================================================================
// Recovery Policies
// ============================================================================

#[test]
fn test_stop_policy_ends_at_first_failure() {
    let items = packed_values(&[0x41, 0x80, 0x42], RecoveryPolicy::Stop);
    assert_eq!(items, vec![Some(0x41), None]);
}

#[test]
fn test_resync_policy_recovers_after_failure() {
    let items = packed_values(&[0x41, 0x80, 0x42], RecoveryPolicy::Resync);
    assert_eq!(items, vec![Some(0x41), None, Some(0x42)]);
}

#[test]
fn test_resync_pays_one_error_per_garbage_byte() {
    let items = packed_values(&[0xFF, 0xFE, 0x41], RecoveryPolicy::Resync);
    assert_eq!(items, vec![None, None, Some(0x41)]);
}

#[test]
fn test_resync_skips_into_the_middle_of_a_sequence() {
    // After the stray byte the walker lands on the 世 lead and realigns
    let mut data = vec![0x80];
    data.extend_from_slice("世".as_bytes());
    let items = packed_values(&data, RecoveryPolicy::Resync);
    assert_eq!(items, vec![None, Some(0xE4B896)]);
}

#[test]
fn test_truncated_tail_under_both_policies() {
    // Stop: one error ends the walk
    let items: Vec<_> = Utf8Stream::new(&[0x41, 0xE4, 0xB8]).collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Ok(DecodedChar { packed: 0x41, scalar: 0x41, width: 1 }));
    assert_eq!(items[1], Err(Utf8Error::truncated(3, 2, 1)));

    // Resync: every shorter suffix fails in turn until exhaustion
    let items: Vec<_> =
        Utf8Stream::with_policy(&[0x41, 0xE4, 0xB8], RecoveryPolicy::Resync).collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert_eq!(items[1], Err(Utf8Error::truncated(3, 2, 1)));
    assert_eq!(items[2], Err(Utf8Error::stray_continuation(0xB8, 2)));
}

#[test]
fn test_stream_over_arbitrary_garbage_terminates() {
    let data: Vec<u8> = (0..=255u8).rev().collect();
    let items: Vec<_> = Utf8Stream::with_policy(&data, RecoveryPolicy::Resync).collect();
    // Never more than one item per input byte
    assert!(items.len() <= data.len());
    assert!(!items.is_empty());
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_position_tracks_consumed_bytes() {
    let mut stream = Utf8Stream::new("aé世𐍈".as_bytes());
    let mut positions = vec![stream.position()];
    while let Some(item) = stream.next() {
        item.expect("valid input");
        positions.push(stream.position());
    }
    assert_eq!(positions, vec![0, 1, 3, 6, 10]);
}

#[test]
fn test_position_after_resync_skip() {
    let mut stream = Utf8Stream::with_policy(&[0x80, 0x41], RecoveryPolicy::Resync);
    assert_eq!(stream.position(), 0);
    assert!(stream.next().expect("item").is_err());
    assert_eq!(stream.position(), 1);
    assert!(stream.next().expect("item").is_ok());
    assert_eq!(stream.position(), 2);
}

#[test]
fn test_position_freezes_when_stopped() {
    let mut stream = Utf8Stream::new(&[0x80, 0x41]);
    assert!(stream.next().expect("item").is_err());
    let frozen = stream.position();
    assert!(stream.next().is_none());
    assert_eq!(stream.position(), frozen);
}
