// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - decode a wire message and summarize it.

use std::path::PathBuf;

use clap::Args;

use crate::common::{format_shape, format_timestamp, load_options, read_message, Result};
use lfc_msgs::{Control, ControlMsg, MessageKind, MsgConversion, Sensor, SensorMsg};

/// Decode a JSON wire message and print a summary.
#[derive(Args, Clone, Debug)]
pub struct InspectCmd {
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

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        let options = load_options(self.config.as_ref())?;

        println!("=== {} ===", self.input.display());
        println!("Type: {}", self.kind.type_name());

        match self.kind {
            MessageKind::Sensor => {
                let msg: SensorMsg = read_message(&self.input)?;
                let sensor = Sensor::from_msg_with(&msg, &options)?;
                print_sensor(&sensor, "");
            }
            MessageKind::Control => {
                let msg: ControlMsg = read_message(&self.input)?;
                let control = Control::from_msg_with(&msg, &options)?;
                print_control(&control);
            }
        }

        Ok(())
    }
}

fn print_control(control: &Control) {
    let gain = &control.feedback_gain;
    println!("Feedback gain: {}", format_shape(gain.nrows(), gain.ncols()));
    println!("Feedforward: {} entries", control.feedforward.len());
    if !control.is_consistent() {
        println!(
            "  Warning: feedforward has {} entries but gain has {} rows",
            control.feedforward.len(),
            gain.nrows()
        );
    }
    println!();
    println!("Initial state:");
    print_sensor(&control.initial_state, "  ");
}

fn print_sensor(sensor: &Sensor, indent: &str) {
    let js = &sensor.joint_state;

    println!("{indent}Stamp: {}", format_timestamp(js.stamp));
    println!("{indent}Base pose: [{}]", join(sensor.base_pose.iter()));
    println!("{indent}Base twist: [{}]", join(sensor.base_twist.iter()));

    println!("{indent}Joints: {}", js.len());
    for (i, name) in js.name.iter().enumerate() {
        println!(
            "{indent}  {name}: q={} v={} tau={}",
            entry(js.position.as_slice(), i),
            entry(js.velocity.as_slice(), i),
            entry(js.effort.as_slice(), i)
        );
    }

    println!("{indent}Contacts: {}", sensor.contacts.len());
    for contact in &sensor.contacts {
        let state = if contact.active { "active" } else { "inactive" };
        println!(
            "{indent}  {} ({state}): wrench=[{}]",
            contact.name,
            join(contact.wrench.iter())
        );
    }
}

fn join<'a>(values: impl Iterator<Item = &'a f64>) -> String {
    values
        .map(|v| format!("{v:.4}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Arrays may be empty under a lenient joint length policy.
fn entry(values: &[f64], i: usize) -> String {
    values
        .get(i)
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "-".to_string())
}
