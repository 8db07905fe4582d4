// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod check;
mod decode;
mod explain;

pub use check::CheckCmd;
pub use decode::DecodeCmd;
pub use explain::ExplainCmd;
