// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # lfc-msgs CLI
//!
//! Command-line tool for linear feedback controller messages stored as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Summarize a sensor message
//! lfc-msgs inspect sensor sensor.json
//!
//! # Decode a control message with lenient joint arrays
//! lfc-msgs inspect control control.json --config lfc.toml
//!
//! # Matrix rows to Float64MultiArray and back
//! lfc-msgs pack gain.json --pretty
//! lfc-msgs unpack gain_msg.json
//!
//! # Check that a message survives wire → computation → wire
//! lfc-msgs roundtrip control control.json
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{InspectCmd, PackCmd, RoundtripCmd, UnpackCmd};
use common::Result;

/// lfc-msgs - Linear feedback controller message toolkit
///
/// Convert controller messages between their wire form and dense
/// matrices and vectors.
#[derive(Parser, Clone)]
#[command(name = "lfc-msgs")]
#[command(about = "Linear feedback controller message toolkit", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode a sensor or control message and print a summary
    Inspect(InspectCmd),

    /// Pack JSON matrix rows into a Float64MultiArray
    Pack(PackCmd),

    /// Unpack a Float64MultiArray into JSON matrix rows
    Unpack(UnpackCmd),

    /// Decode and re-encode a message, reporting any change
    Roundtrip(RoundtripCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Pack(cmd) => cmd.run(),
        Commands::Unpack(cmd) => cmd.run(),
        Commands::Roundtrip(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
