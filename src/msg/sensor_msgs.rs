// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `sensor_msgs` records.

use serde::{Deserialize, Serialize};

use super::std_msgs::HeaderMsg;

/// `sensor_msgs/JointState`
///
/// `name`, `position`, `velocity` and `effort` are parallel arrays indexed
/// by joint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JointStateMsg {
    pub header: HeaderMsg,
    pub name: Vec<String>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub effort: Vec<f64>,
}
