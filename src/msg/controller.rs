// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `linear_feedback_controller_msgs` records.

use serde::{Deserialize, Serialize};

use super::geometry::{PoseMsg, TwistMsg, WrenchMsg};
use super::sensor_msgs::JointStateMsg;
use super::std_msgs::Float64MultiArrayMsg;

/// `linear_feedback_controller_msgs/Contact`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMsg {
    pub active: bool,
    pub name: String,
    pub wrench: WrenchMsg,
    pub pose: PoseMsg,
}

/// `linear_feedback_controller_msgs/Sensor`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorMsg {
    pub base_pose: PoseMsg,
    pub base_twist: TwistMsg,
    pub joint_state: JointStateMsg,
    pub contacts: Vec<ContactMsg>,
}

/// `linear_feedback_controller_msgs/Control`
///
/// `feedforward` travels as an N×1 matrix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlMsg {
    pub feedback_gain: Float64MultiArrayMsg,
    pub feedforward: Float64MultiArrayMsg,
    pub initial_state: SensorMsg,
}
