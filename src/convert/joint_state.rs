// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Joint state codec.

use tracing::{debug, warn};

use crate::core::{ConversionError, Result};
use crate::model::JointState;
use crate::msg::{HeaderMsg, JointStateMsg, TimeMsg};
use crate::options::{ConvertOptions, JointLengthPolicy};

use super::vector::{vector_from_msg, vector_to_msg};

/// Decode a joint state with default options (strict length check).
pub fn joint_state_from_msg(msg: &JointStateMsg) -> Result<JointState> {
    joint_state_from_msg_with(msg, &ConvertOptions::default())
}

/// Decode a joint state.
///
/// Names are copied in order; each numeric array is checked against the
/// name count according to `options.joint_lengths`.
pub fn joint_state_from_msg_with(
    msg: &JointStateMsg,
    options: &ConvertOptions,
) -> Result<JointState> {
    check_lengths(msg, options.joint_lengths)?;

    Ok(JointState {
        stamp: msg.header.stamp.as_nanos(),
        name: msg.name.clone(),
        position: vector_from_msg(&msg.position),
        velocity: vector_from_msg(&msg.velocity),
        effort: vector_from_msg(&msg.effort),
    })
}

/// Encode a joint state. `header.frame_id` is left empty.
pub fn joint_state_to_msg(joint_state: &JointState) -> JointStateMsg {
    JointStateMsg {
        header: HeaderMsg {
            stamp: TimeMsg::from_nanos(joint_state.stamp),
            frame_id: String::new(),
        },
        name: joint_state.name.clone(),
        position: vector_to_msg(&joint_state.position),
        velocity: vector_to_msg(&joint_state.velocity),
        effort: vector_to_msg(&joint_state.effort),
    }
}

fn check_lengths(msg: &JointStateMsg, policy: JointLengthPolicy) -> Result<()> {
    let expected = msg.name.len();
    let arrays = [
        ("position", msg.position.len()),
        ("velocity", msg.velocity.len()),
        ("effort", msg.effort.len()),
    ];

    for (field, actual) in arrays {
        if actual == expected {
            continue;
        }
        if !policy.accepts(expected, actual) {
            debug!(field, expected, actual, "Rejected joint state");
            return Err(ConversionError::length_mismatch(field, expected, actual));
        }
        if policy == JointLengthPolicy::Unchecked {
            warn!(
                field,
                expected, actual, "Joint state array length differs from joint count"
            );
        }
    }

    Ok(())
}
