// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Control codec.
//!
//! The feedback gain travels with the dense matrix layout and the
//! feedforward as an N×1 matrix. Whether the two agree on N is left to the
//! consumer (see [`Control::is_consistent`]).

use tracing::trace;

use crate::core::Result;
use crate::model::Control;
use crate::msg::ControlMsg;
use crate::options::ConvertOptions;

use super::matrix::{decode_inferred, matrix_to_msg};
use super::sensor::{sensor_from_msg_with, sensor_to_msg};
use super::vector::{decode_column, vector_to_matrix_msg};

pub fn control_from_msg(msg: &ControlMsg) -> Result<Control> {
    control_from_msg_with(msg, &ConvertOptions::default())
}

pub fn control_from_msg_with(msg: &ControlMsg, options: &ConvertOptions) -> Result<Control> {
    let feedback_gain = decode_inferred(&msg.feedback_gain, options, "feedback_gain")?;
    let feedforward = decode_column(&msg.feedforward, options, "feedforward")?;
    let initial_state = sensor_from_msg_with(&msg.initial_state, options)?;

    trace!(
        gain_rows = feedback_gain.nrows(),
        gain_cols = feedback_gain.ncols(),
        feedforward = feedforward.len(),
        joints = initial_state.joint_state.len(),
        contacts = initial_state.contacts.len(),
        "Decoded control"
    );

    Ok(Control {
        feedback_gain,
        feedforward,
        initial_state,
    })
}

pub fn control_to_msg(control: &Control) -> ControlMsg {
    ControlMsg {
        feedback_gain: matrix_to_msg(&control.feedback_gain),
        feedforward: vector_to_matrix_msg(&control.feedforward),
        initial_state: sensor_to_msg(&control.initial_state),
    }
}
