// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Explain command - classify every input byte.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, Result};
use utf8codec::ByteClass;

/// Classify every byte of the input.
#[derive(Args, Clone, Debug)]
pub struct ExplainCmd {
    /// Literal text to explain
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Hex byte string (e.g. "e4 b8 96")
    #[arg(long, value_name = "BYTES", conflicts_with = "text")]
    hex: Option<String>,

    /// Read input bytes from a file
    #[arg(long, value_name = "PATH", conflicts_with_all = ["text", "hex"])]
    file: Option<PathBuf>,
}

impl ExplainCmd {
    pub fn run(self) -> Result<()> {
        let data = read_input(self.text.as_deref(), self.hex.as_deref(), self.file.as_deref())?;
        cmd_explain(&data)
    }
}

/// Print the byte-by-byte classification table.
fn cmd_explain(data: &[u8]) -> Result<()> {
    if data.len() <= 32 {
        println!("Input: {} bytes ({})", data.len(), hex::encode(data));
    } else {
        println!("Input: {} bytes", data.len());
    }
    println!();
    println!(
        "{:<8} {:<5} {:<10} {:<14} WIDTH",
        "OFFSET", "HEX", "BINARY", "CLASS"
    );

    for (offset, &byte) in data.iter().enumerate() {
        let class = ByteClass::of(byte);
        let width = match class.width() {
            Some(width) => width.to_string(),
            None => String::from("-"),
        };
        println!(
            "{:<8} {:<5} {:<10} {:<14} {}",
            offset,
            format!("{:02x}", byte),
            format!("{:08b}", byte),
            class.as_str(),
            width
        );
    }

    Ok(())
}
