// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Check command - validate input, stopping at the first malformed sequence.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, Result};
use utf8codec::{DecodedChar, Utf8Error, Utf8Stream};

/// Validate input as UTF-8.
#[derive(Args, Clone, Debug)]
pub struct CheckCmd {
    /// Literal text to check
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Hex byte string (e.g. "e4 b8 96")
    #[arg(long, value_name = "BYTES", conflicts_with = "text")]
    hex: Option<String>,

    /// Read input bytes from a file
    #[arg(long, value_name = "PATH", conflicts_with_all = ["text", "hex"])]
    file: Option<PathBuf>,
}

impl CheckCmd {
    pub fn run(self) -> Result<()> {
        let data = read_input(self.text.as_deref(), self.hex.as_deref(), self.file.as_deref())?;
        cmd_check(&data)
    }
}

/// Decode everything; the first failure is the verdict.
fn cmd_check(data: &[u8]) -> Result<()> {
    let decoded: std::result::Result<Vec<DecodedChar>, Utf8Error> =
        Utf8Stream::new(data).collect();

    match decoded {
        Ok(units) => {
            let ascii = units.iter().filter(|unit| unit.is_ascii()).count();
            println!("OK: {} characters in {} bytes", units.len(), data.len());
            println!("  {} ascii, {} multi-byte", ascii, units.len() - ascii);
            Ok(())
        }
        Err(err) => {
            println!("Malformed sequence detected:");
            for (key, value) in err.log_fields() {
                println!("  {key}: {value}");
            }
            Err(err.into())
        }
    }
}
