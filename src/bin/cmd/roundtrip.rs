// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Roundtrip command - wire → computation → wire, then compare.

use std::path::PathBuf;

use clap::Args;

use crate::common::{load_options, read_message, Result};
use lfc_msgs::{Control, ControlMsg, MessageKind, MsgConversion, Sensor, SensorMsg};

/// Check that a wire message survives decoding and re-encoding.
#[derive(Args, Clone, Debug)]
pub struct RoundtripCmd {
    /// Message kind (sensor or control)
    #[arg(value_name = "KIND")]
    kind: MessageKind,

    /// Input file (JSON wire message)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Conversion options (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl RoundtripCmd {
    pub fn run(self) -> Result<()> {
        let options = load_options(self.config.as_ref())?;

        let changed = match self.kind {
            MessageKind::Sensor => {
                let msg: SensorMsg = read_message(&self.input)?;
                let back = Sensor::from_msg_with(&msg, &options)?.to_msg();
                sensor_changes(&msg, &back, "")
            }
            MessageKind::Control => {
                let msg: ControlMsg = read_message(&self.input)?;
                let back = Control::from_msg_with(&msg, &options)?.to_msg();
                control_changes(&msg, &back)
            }
        };

        if changed.is_empty() {
            println!("{}: identical", self.input.display());
            return Ok(());
        }

        println!("{}: changed", self.input.display());
        for field in &changed {
            println!("  {field}");
        }
        Err(anyhow::anyhow!("Round trip changed {} field(s)", changed.len()))
    }
}

fn control_changes(before: &ControlMsg, after: &ControlMsg) -> Vec<String> {
    let mut changed = Vec::new();
    if before.feedback_gain != after.feedback_gain {
        changed.push("feedback_gain".to_string());
    }
    if before.feedforward != after.feedforward {
        changed.push("feedforward".to_string());
    }
    changed.extend(sensor_changes(
        &before.initial_state,
        &after.initial_state,
        "initial_state.",
    ));
    changed
}

fn sensor_changes(before: &SensorMsg, after: &SensorMsg, prefix: &str) -> Vec<String> {
    let js_before = &before.joint_state;
    let js_after = &after.joint_state;

    [
        ("base_pose", before.base_pose == after.base_pose),
        ("base_twist", before.base_twist == after.base_twist),
        ("joint_state.header", js_before.header == js_after.header),
        ("joint_state.name", js_before.name == js_after.name),
        ("joint_state.position", js_before.position == js_after.position),
        ("joint_state.velocity", js_before.velocity == js_after.velocity),
        ("joint_state.effort", js_before.effort == js_after.effort),
        ("contacts", before.contacts == after.contacts),
    ]
    .into_iter()
    .filter(|(_, same)| !same)
    .map(|(field, _)| format!("{prefix}{field}"))
    .collect()
}
