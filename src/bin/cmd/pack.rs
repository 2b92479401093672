// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pack and unpack commands - convert between JSON rows and `Float64MultiArray`.

use std::path::PathBuf;

use clap::Args;
use nalgebra::DMatrix;

use crate::common::{load_options, read_input, Result};
use lfc_msgs::convert::matrix::{matrix_from_msg_inferred_with, matrix_to_msg};
use lfc_msgs::{Float64MultiArrayMsg, JsonCodec};

/// Pack a matrix given as JSON rows into a `Float64MultiArray`.
#[derive(Args, Clone, Debug)]
pub struct PackCmd {
    /// Input file holding `[[row 0], [row 1], ...]`
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

impl PackCmd {
    pub fn run(self) -> Result<()> {
        let codec = JsonCodec::new();
        let rows: Vec<Vec<f64>> = codec.decode(&read_input(&self.input)?)?;
        let matrix = matrix_from_rows(&rows)?;

        println!("{}", codec.encode(&matrix_to_msg(&matrix), self.pretty)?);
        Ok(())
    }
}

/// Unpack a `Float64MultiArray` into JSON rows.
#[derive(Args, Clone, Debug)]
pub struct UnpackCmd {
    /// Input file holding a `Float64MultiArray`
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Conversion options (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl UnpackCmd {
    pub fn run(self) -> Result<()> {
        let options = load_options(self.config.as_ref())?;
        let codec = JsonCodec::new();
        let msg: Float64MultiArrayMsg = codec.decode(&read_input(&self.input)?)?;
        let matrix = matrix_from_msg_inferred_with(&msg, &options)?;

        let rows: Vec<Vec<f64>> = matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        println!("{}", serde_json::to_string(&rows)?);
        Ok(())
    }
}

/// Build a matrix from rows of equal length.
fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    let cols = rows.first().map_or(0, Vec::len);

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(anyhow::anyhow!(
            "Row {i} has {} entries, expected {cols}",
            row.len()
        ));
    }

    Ok(DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]))
}
