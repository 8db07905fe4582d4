// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Utf8codec CLI
//!
//! Command-line tool for byte-level UTF-8 inspection.
//!
//! ## Usage
//!
//! ```sh
//! # Decode text and show packed values
//! utf8codec decode "Hello, 世界"
//!
//! # Decode raw bytes given as hex, skipping over garbage
//! utf8codec decode --hex "48 ff e4 b8 96" --policy resync
//!
//! # Validate a file, exit nonzero on the first malformed sequence
//! utf8codec check --file notes.txt
//!
//! # Classify every byte
//! utf8codec explain --hex "e4 b8 96"
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{CheckCmd, DecodeCmd, ExplainCmd};
use common::Result;

/// Utf8codec - UTF-8 byte-level decoder
///
/// Decodes one character at a time, reporting the packed byte value
/// (raw bytes concatenated, tag bits included), the Unicode code point,
/// and the encoding width.
#[derive(Parser, Clone)]
#[command(name = "utf8codec")]
#[command(about = "Byte-level UTF-8 decoder and validator", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode input and print one row per character
    Decode(DecodeCmd),

    /// Validate input, reporting the first malformed sequence
    Check(CheckCmd),

    /// Classify every byte (hex, bit pattern, class, declared width)
    Explain(ExplainCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(cmd) => cmd.run(),
        Commands::Check(cmd) => cmd.run(),
        Commands::Explain(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
