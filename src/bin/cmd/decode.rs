// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode command - walk input and print each decoded character.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::common::{read_input, Result};
use utf8codec::core::Result as DecodeResult;
use utf8codec::{DecodedChar, RecoveryPolicy, Utf8Stream};

/// Decode input and print one row per character.
#[derive(Args, Clone, Debug)]
pub struct DecodeCmd {
    /// Literal text to decode
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Hex byte string (e.g. "e4 b8 96")
    #[arg(long, value_name = "BYTES", conflicts_with = "text")]
    hex: Option<String>,

    /// Read input bytes from a file
    #[arg(long, value_name = "PATH", conflicts_with_all = ["text", "hex"])]
    file: Option<PathBuf>,

    /// What to do after a decode failure: stop or resync
    #[arg(long, value_name = "POLICY", default_value = "stop")]
    policy: RecoveryPolicy,

    /// Also print the code point column
    #[arg(long)]
    scalar: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

impl DecodeCmd {
    pub fn run(self) -> Result<()> {
        let data = read_input(self.text.as_deref(), self.hex.as_deref(), self.file.as_deref())?;
        cmd_decode(&data, self.policy, self.scalar, self.json)
    }
}

/// Walk the whole input under the given policy and print the results.
fn cmd_decode(data: &[u8], policy: RecoveryPolicy, show_scalar: bool, json: bool) -> Result<()> {
    let mut stream = Utf8Stream::with_policy(data, policy);
    let mut items: Vec<(usize, DecodeResult<DecodedChar>)> = Vec::new();

    loop {
        let offset = stream.position();
        let Some(item) = stream.next() else { break };
        items.push((offset, item));
    }

    if json {
        return print_json(data, &items);
    }

    if show_scalar {
        println!(
            "{:<8} {:<12} {:<10} {:<7} CHAR",
            "OFFSET", "PACKED", "SCALAR", "WIDTH"
        );
    } else {
        println!("{:<8} {:<12} {:<7} CHAR", "OFFSET", "PACKED", "WIDTH");
    }

    let mut decoded = 0;
    let mut failed = 0;

    for (offset, item) in &items {
        match item {
            Ok(unit) => {
                decoded += 1;
                let packed = format!("0x{:08x}", unit.packed);
                if show_scalar {
                    println!(
                        "{:<8} {:<12} {:<10} {:<7} {}",
                        offset,
                        packed,
                        format!("U+{:04X}", unit.scalar),
                        unit.width,
                        render_char(unit)
                    );
                } else {
                    println!("{:<8} {:<12} {:<7} {}", offset, packed, unit.width, render_char(unit));
                }
            }
            Err(err) => {
                failed += 1;
                println!("{:<8} error: {}", offset, err);
            }
        }
    }

    println!();
    println!("{} characters, {} errors, {} bytes", decoded, failed, data.len());

    Ok(())
}

fn print_json(data: &[u8], items: &[(usize, DecodeResult<DecodedChar>)]) -> Result<()> {
    let mut report = DecodeReport {
        input_bytes: data.len(),
        units: Vec::new(),
        errors: Vec::new(),
    };

    for (offset, item) in items {
        match item {
            Ok(unit) => report.units.push(UnitRow {
                offset: *offset,
                packed: unit.packed,
                scalar: unit.scalar,
                width: unit.width,
                character: unit.to_char(),
            }),
            Err(err) => report.errors.push(ErrorRow {
                offset: *offset,
                message: err.to_string(),
            }),
        }
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn render_char(unit: &DecodedChar) -> String {
    match unit.to_char() {
        Some(c) if c.is_control() => c.escape_default().to_string(),
        Some(c) => c.to_string(),
        None => String::from("-"),
    }
}

// Output types

#[derive(Serialize)]
struct DecodeReport {
    input_bytes: usize,
    units: Vec<UnitRow>,
    errors: Vec<ErrorRow>,
}

#[derive(Serialize)]
struct UnitRow {
    offset: usize,
    packed: u32,
    scalar: u32,
    width: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    character: Option<char>,
}

#[derive(Serialize)]
struct ErrorRow {
    offset: usize,
    message: String,
}
