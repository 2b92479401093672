// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::{Path, PathBuf};

use lfc_msgs::{ConvertOptions, JsonCodec, MessageValue};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Format a timestamp in nanoseconds to human-readable string.
pub fn format_timestamp(nanos: i64) -> String {
    let secs = nanos.div_euclid(1_000_000_000);
    let subsec = nanos.rem_euclid(1_000_000_000) as u32;
    let datetime = chrono::DateTime::<chrono::Utc>::from_timestamp(secs, subsec);

    match datetime {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S%.9f UTC").to_string(),
        None => format!("{} ns", nanos),
    }
}

/// Format a matrix shape.
pub fn format_shape(rows: usize, cols: usize) -> String {
    format!("{}x{}", rows, cols)
}

/// Read a whole input file as text.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
}

/// Read a JSON wire message, checking every field.
pub fn read_message<T: MessageValue>(path: &Path) -> Result<T> {
    let text = read_input(path)?;
    let decoded = JsonCodec::new().decode_value(&text)?;
    Ok(T::from_message(&decoded)?)
}

/// Load conversion options, falling back to the defaults.
pub fn load_options(config: Option<&PathBuf>) -> Result<ConvertOptions> {
    match config {
        Some(path) => Ok(ConvertOptions::from_toml_file(path)?),
        None => Ok(ConvertOptions::default()),
    }
}
