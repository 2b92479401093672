// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dynamic message values.
//!
//! A decoded ROS message arriving from a generic decoder (CDR, JSON) is a
//! tree of [`CodecValue`]s keyed by field name. The wire records in
//! [`crate::msg`] convert to and from this representation.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Decoded message as field name -> value mapping.
pub type DecodedMessage = HashMap<String, CodecValue>;

/// Value of a single field in a decoded message.
///
/// Covers the primitive kinds that appear in controller messages:
/// `bool`, `int32`/`uint32` sizes and seconds, `float64` payloads,
/// strings, `builtin_interfaces/Time` stamps, sequences and nested messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CodecValue {
    Bool(bool),

    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),

    Float32(f32),
    Float64(f64),

    String(String),

    /// Nanoseconds since Unix epoch
    Timestamp(i64),

    Array(Vec<CodecValue>),

    Struct(DecodedMessage),

    Null,
}

impl CodecValue {
    /// Check if this value is a numeric type (integers or floats).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CodecValue::Int32(_)
                | CodecValue::Int64(_)
                | CodecValue::UInt32(_)
                | CodecValue::UInt64(_)
                | CodecValue::Float32(_)
                | CodecValue::Float64(_)
        )
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CodecValue::Null)
    }

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CodecValue::Int32(v) => Some(*v as f64),
            CodecValue::Int64(v) => Some(*v as f64),
            CodecValue::UInt32(v) => Some(*v as f64),
            CodecValue::UInt64(v) => Some(*v as f64),
            CodecValue::Float32(v) => Some(*v as f64),
            CodecValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for integer types only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CodecValue::Int32(v) => Some(*v as i64),
            CodecValue::Int64(v) => Some(*v),
            CodecValue::UInt32(v) => Some(*v as i64),
            CodecValue::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to convert this value to u64 (negative integers yield `None`).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            CodecValue::UInt32(v) => Some(*v as u64),
            CodecValue::UInt64(v) => Some(*v),
            CodecValue::Int32(v) => u64::try_from(*v).ok(),
            CodecValue::Int64(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get the inner bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CodecValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CodecValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner struct.
    pub fn as_struct(&self) -> Option<&DecodedMessage> {
        match self {
            CodecValue::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[CodecValue]> {
        match self {
            CodecValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get the timestamp value as nanoseconds.
    pub fn as_timestamp_nanos(&self) -> Option<i64> {
        match self {
            CodecValue::Timestamp(nanos) => Some(*nanos),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            CodecValue::Bool(_) => "bool",
            CodecValue::Int32(_) => "int32",
            CodecValue::Int64(_) => "int64",
            CodecValue::UInt32(_) => "uint32",
            CodecValue::UInt64(_) => "uint64",
            CodecValue::Float32(_) => "float32",
            CodecValue::Float64(_) => "float64",
            CodecValue::String(_) => "string",
            CodecValue::Timestamp(_) => "timestamp",
            CodecValue::Array(_) => "array",
            CodecValue::Struct(_) => "struct",
            CodecValue::Null => "null",
        }
    }

    /// Create a timestamp from ROS2 Time (sec: i32, nanosec: u32).
    pub fn from_ros2_time(sec: i32, nanosec: u32) -> Self {
        CodecValue::Timestamp((sec as i64) * 1_000_000_000 + (nanosec as i64))
    }

    /// Wrap a slice of floats as a `float64[]` sequence.
    pub fn float64_array(values: &[f64]) -> Self {
        CodecValue::Array(values.iter().copied().map(CodecValue::Float64).collect())
    }
}

impl fmt::Display for CodecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecValue::Bool(v) => write!(f, "{v}"),
            CodecValue::Int32(v) => write!(f, "{v}"),
            CodecValue::Int64(v) => write!(f, "{v}"),
            CodecValue::UInt32(v) => write!(f, "{v}"),
            CodecValue::UInt64(v) => write!(f, "{v}"),
            CodecValue::Float32(v) => write!(f, "{v}"),
            CodecValue::Float64(v) => write!(f, "{v}"),
            CodecValue::String(v) => write!(f, "\"{v}\""),
            CodecValue::Timestamp(v) => write!(f, "Timestamp({v}ns)"),
            CodecValue::Array(v) => write!(f, "[{} elements]", v.len()),
            CodecValue::Struct(v) => write!(f, "{{{} fields}}", v.len()),
            CodecValue::Null => write!(f, "null"),
        }
    }
}
