// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire message records.
//!
//! Flat, serialization-friendly mirrors of the ROS message schemas used by
//! linear feedback controllers. Every record is named `*Msg` to keep it
//! apart from the computation types in [`crate::model`]. Records are
//! default-initialized field by field on deserialization, like ROS messages.
//!
//! - [`geometry`] - `geometry_msgs` (Vector3, Point, Quaternion, Pose, Twist, Wrench)
//! - [`std_msgs`] - `std_msgs` / `builtin_interfaces` (Float64MultiArray, Header, Time)
//! - [`sensor_msgs`] - `sensor_msgs/JointState`
//! - [`controller`] - `linear_feedback_controller_msgs` (Contact, Sensor, Control)
//! - [`value`] - conversions to and from [`DecodedMessage`](crate::DecodedMessage)

pub mod controller;
pub mod geometry;
pub mod sensor_msgs;
pub mod std_msgs;
pub mod value;

pub use controller::{ContactMsg, ControlMsg, SensorMsg};
pub use geometry::{PointMsg, PoseMsg, QuaternionMsg, TwistMsg, Vector3Msg, WrenchMsg};
pub use sensor_msgs::JointStateMsg;
pub use std_msgs::{
    Float64MultiArrayMsg, HeaderMsg, MultiArrayDimensionMsg, MultiArrayLayoutMsg, TimeMsg,
};
pub use value::{Fields, MessageValue};
