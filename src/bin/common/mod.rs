// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Parse a hex byte string, tolerating whitespace anywhere in it.
///
/// Accepts "e4b896", "e4 b8 96", and "E4 B8 96" alike.
pub fn parse_hex(s: &str) -> CliResult<Vec<u8>> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(compact)?)
}

/// Resolve exactly one input source into bytes.
///
/// Every subcommand accepts positional TEXT, `--hex`, or `--file`;
/// this enforces that precisely one of them was given.
pub fn read_input(text: Option<&str>, hex: Option<&str>, file: Option<&Path>) -> CliResult<Vec<u8>> {
    match (text, hex, file) {
        (Some(text), None, None) => Ok(text.as_bytes().to_vec()),
        (None, Some(hex), None) => parse_hex(hex),
        (None, None, Some(path)) => Ok(std::fs::read(path)?),
        (None, None, None) => Err(anyhow::anyhow!("no input given, pass TEXT, --hex, or --file")),
        _ => Err(anyhow::anyhow!("pass exactly one of TEXT, --hex, or --file")),
    }
}
