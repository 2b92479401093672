// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversions between wire records and [`DecodedMessage`] trees.
//!
//! Field names follow the ROS message definitions, so a message decoded by
//! a schema-driven decoder maps directly onto the typed records. Numeric
//! fields accept any numeric [`CodecValue`] variant that fits. Time stamps
//! accept either [`CodecValue::Timestamp`] or a `{sec, nanosec}` struct and
//! are always written back as `Timestamp`.

use tracing::debug;

use crate::core::{CodecValue, ConversionError, DecodedMessage, Result};

use super::controller::{ContactMsg, ControlMsg, SensorMsg};
use super::geometry::{PointMsg, PoseMsg, QuaternionMsg, TwistMsg, Vector3Msg, WrenchMsg};
use super::sensor_msgs::JointStateMsg;
use super::std_msgs::{
    Float64MultiArrayMsg, HeaderMsg, MultiArrayDimensionMsg, MultiArrayLayoutMsg, TimeMsg,
};

/// A wire record that converts to and from a decoded message.
pub trait MessageValue: Sized {
    /// Build the record from the fields of a decoded message.
    fn from_fields(fields: &Fields<'_>) -> Result<Self>;

    /// Flatten the record into a decoded message.
    fn to_message(&self) -> DecodedMessage;

    /// Build the record from a top-level decoded message.
    fn from_message(message: &DecodedMessage) -> Result<Self> {
        Self::from_fields(&Fields::root(message))
    }

    /// Wrap the record as a nested struct value.
    fn to_value(&self) -> CodecValue {
        CodecValue::Struct(self.to_message())
    }
}

/// Typed, path-tracking view over the fields of a decoded message.
///
/// The path is carried so errors name the full field, e.g.
/// `initial_state.contacts[1].pose.orientation.w`.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a DecodedMessage,
    path: &'a str,
}

impl<'a> Fields<'a> {
    /// View over a top-level message.
    pub fn root(map: &'a DecodedMessage) -> Self {
        Self { map, path: "" }
    }

    fn child_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    /// Raw value of a field.
    pub fn get(&self, name: &str) -> Result<&'a CodecValue> {
        self.map
            .get(name)
            .ok_or_else(|| ConversionError::missing_field(self.child_path(name)))
    }

    pub fn f64(&self, name: &str) -> Result<f64> {
        let value = self.get(name)?;
        value
            .as_f64()
            .ok_or_else(|| mismatch(self.child_path(name), "float64", value))
    }

    pub fn bool(&self, name: &str) -> Result<bool> {
        let value = self.get(name)?;
        value
            .as_bool()
            .ok_or_else(|| mismatch(self.child_path(name), "bool", value))
    }

    pub fn string(&self, name: &str) -> Result<String> {
        let value = self.get(name)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(self.child_path(name), "string", value))
    }

    pub fn u32(&self, name: &str) -> Result<u32> {
        let value = self.get(name)?;
        value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| mismatch(self.child_path(name), "uint32", value))
    }

    pub fn f64_seq(&self, name: &str) -> Result<Vec<f64>> {
        let path = self.child_path(name);
        let items = self.array(name)?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_f64()
                    .ok_or_else(|| mismatch(format!("{path}[{i}]"), "float64", item))
            })
            .collect()
    }

    pub fn string_seq(&self, name: &str) -> Result<Vec<String>> {
        let path = self.child_path(name);
        let items = self.array(name)?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| mismatch(format!("{path}[{i}]"), "string", item))
            })
            .collect()
    }

    /// A `builtin_interfaces/Time` field, as a timestamp or a `{sec, nanosec}` struct.
    pub fn time(&self, name: &str) -> Result<TimeMsg> {
        let value = self.get(name)?;
        if let Some(nanos) = value.as_timestamp_nanos() {
            return Ok(TimeMsg::from_nanos(nanos));
        }
        let path = self.child_path(name);
        let map = value
            .as_struct()
            .ok_or_else(|| mismatch(path.clone(), "timestamp", value))?;
        let fields = Fields { map, path: &path };
        let sec = fields.get("sec")?;
        let sec = sec
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| mismatch(fields.child_path("sec"), "int32", sec))?;
        Ok(TimeMsg {
            sec,
            nanosec: fields.u32("nanosec")?,
        })
    }

    /// A nested message field.
    pub fn nested<T: MessageValue>(&self, name: &str) -> Result<T> {
        let value = self.get(name)?;
        let path = self.child_path(name);
        let map = value
            .as_struct()
            .ok_or_else(|| mismatch(path.clone(), "struct", value))?;
        T::from_fields(&Fields { map, path: &path })
    }

    /// A sequence of nested messages.
    pub fn nested_seq<T: MessageValue>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.child_path(name);
        let items = self.array(name)?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_path = format!("{path}[{i}]");
                let map = item
                    .as_struct()
                    .ok_or_else(|| mismatch(item_path.clone(), "struct", item))?;
                T::from_fields(&Fields {
                    map,
                    path: &item_path,
                })
            })
            .collect()
    }

    fn array(&self, name: &str) -> Result<&'a [CodecValue]> {
        let value = self.get(name)?;
        value
            .as_array()
            .ok_or_else(|| mismatch(self.child_path(name), "array", value))
    }
}

fn mismatch(path: String, expected: &str, actual: &CodecValue) -> ConversionError {
    debug!(
        field = %path,
        expected,
        actual = actual.type_name(),
        "Rejected decoded field"
    );
    ConversionError::type_mismatch(path, expected, actual.type_name())
}

fn message<const N: usize>(entries: [(&str, CodecValue); N]) -> DecodedMessage {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn strings(values: &[String]) -> CodecValue {
    CodecValue::Array(values.iter().cloned().map(CodecValue::String).collect())
}

// =============================================================================
// geometry_msgs
// =============================================================================

impl MessageValue for Vector3Msg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self::new(fields.f64("x")?, fields.f64("y")?, fields.f64("z")?))
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("x", CodecValue::Float64(self.x)),
            ("y", CodecValue::Float64(self.y)),
            ("z", CodecValue::Float64(self.z)),
        ])
    }
}

impl MessageValue for PointMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self::new(fields.f64("x")?, fields.f64("y")?, fields.f64("z")?))
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("x", CodecValue::Float64(self.x)),
            ("y", CodecValue::Float64(self.y)),
            ("z", CodecValue::Float64(self.z)),
        ])
    }
}

impl MessageValue for QuaternionMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self::new(
            fields.f64("x")?,
            fields.f64("y")?,
            fields.f64("z")?,
            fields.f64("w")?,
        ))
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("x", CodecValue::Float64(self.x)),
            ("y", CodecValue::Float64(self.y)),
            ("z", CodecValue::Float64(self.z)),
            ("w", CodecValue::Float64(self.w)),
        ])
    }
}

impl MessageValue for PoseMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            position: fields.nested("position")?,
            orientation: fields.nested("orientation")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("position", self.position.to_value()),
            ("orientation", self.orientation.to_value()),
        ])
    }
}

impl MessageValue for TwistMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            linear: fields.nested("linear")?,
            angular: fields.nested("angular")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("linear", self.linear.to_value()),
            ("angular", self.angular.to_value()),
        ])
    }
}

impl MessageValue for WrenchMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            force: fields.nested("force")?,
            torque: fields.nested("torque")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("force", self.force.to_value()),
            ("torque", self.torque.to_value()),
        ])
    }
}

// =============================================================================
// std_msgs
// =============================================================================

impl MessageValue for MultiArrayDimensionMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            label: fields.string("label")?,
            size: fields.u32("size")?,
            stride: fields.u32("stride")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("label", CodecValue::String(self.label.clone())),
            ("size", CodecValue::UInt32(self.size)),
            ("stride", CodecValue::UInt32(self.stride)),
        ])
    }
}

impl MessageValue for MultiArrayLayoutMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            dim: fields.nested_seq("dim")?,
            data_offset: fields.u32("data_offset")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            (
                "dim",
                CodecValue::Array(self.dim.iter().map(MessageValue::to_value).collect()),
            ),
            ("data_offset", CodecValue::UInt32(self.data_offset)),
        ])
    }
}

impl MessageValue for Float64MultiArrayMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            layout: fields.nested("layout")?,
            data: fields.f64_seq("data")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("layout", self.layout.to_value()),
            ("data", CodecValue::float64_array(&self.data)),
        ])
    }
}

impl MessageValue for HeaderMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            stamp: fields.time("stamp")?,
            frame_id: fields.string("frame_id")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("stamp", CodecValue::Timestamp(self.stamp.as_nanos())),
            ("frame_id", CodecValue::String(self.frame_id.clone())),
        ])
    }
}

// =============================================================================
// sensor_msgs
// =============================================================================

impl MessageValue for JointStateMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        // Headerless joint states are common in hand-written test data.
        let header = match fields.get("header") {
            Ok(_) => fields.nested("header")?,
            Err(_) => HeaderMsg::default(),
        };
        Ok(Self {
            header,
            name: fields.string_seq("name")?,
            position: fields.f64_seq("position")?,
            velocity: fields.f64_seq("velocity")?,
            effort: fields.f64_seq("effort")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("header", self.header.to_value()),
            ("name", strings(&self.name)),
            ("position", CodecValue::float64_array(&self.position)),
            ("velocity", CodecValue::float64_array(&self.velocity)),
            ("effort", CodecValue::float64_array(&self.effort)),
        ])
    }
}

// =============================================================================
// linear_feedback_controller_msgs
// =============================================================================

impl MessageValue for ContactMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            active: fields.bool("active")?,
            name: fields.string("name")?,
            wrench: fields.nested("wrench")?,
            pose: fields.nested("pose")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("active", CodecValue::Bool(self.active)),
            ("name", CodecValue::String(self.name.clone())),
            ("wrench", self.wrench.to_value()),
            ("pose", self.pose.to_value()),
        ])
    }
}

impl MessageValue for SensorMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            base_pose: fields.nested("base_pose")?,
            base_twist: fields.nested("base_twist")?,
            joint_state: fields.nested("joint_state")?,
            contacts: fields.nested_seq("contacts")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("base_pose", self.base_pose.to_value()),
            ("base_twist", self.base_twist.to_value()),
            ("joint_state", self.joint_state.to_value()),
            (
                "contacts",
                CodecValue::Array(self.contacts.iter().map(MessageValue::to_value).collect()),
            ),
        ])
    }
}

impl MessageValue for ControlMsg {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            feedback_gain: fields.nested("feedback_gain")?,
            feedforward: fields.nested("feedforward")?,
            initial_state: fields.nested("initial_state")?,
        })
    }

    fn to_message(&self) -> DecodedMessage {
        message([
            ("feedback_gain", self.feedback_gain.to_value()),
            ("feedforward", self.feedforward.to_value()),
            ("initial_state", self.initial_state.to_value()),
        ])
    }
}
