// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `std_msgs` and `builtin_interfaces` records.

use serde::{Deserialize, Serialize};

/// Label written to the row dimension of an encoded matrix.
pub const ROWS_LABEL: &str = "rows";

/// Label written to the column dimension of an encoded matrix.
pub const COLS_LABEL: &str = "cols";

/// `std_msgs/MultiArrayDimension`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiArrayDimensionMsg {
    pub label: String,
    pub size: u32,
    pub stride: u32,
}

impl MultiArrayDimensionMsg {
    pub fn new(label: impl Into<String>, size: u32, stride: u32) -> Self {
        Self {
            label: label.into(),
            size,
            stride,
        }
    }
}

/// `std_msgs/MultiArrayLayout`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiArrayLayoutMsg {
    pub dim: Vec<MultiArrayDimensionMsg>,
    pub data_offset: u32,
}

/// `std_msgs/Float64MultiArray`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Float64MultiArrayMsg {
    pub layout: MultiArrayLayoutMsg,
    pub data: Vec<f64>,
}

/// `builtin_interfaces/Time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeMsg {
    pub sec: i32,
    pub nanosec: u32,
}

impl TimeMsg {
    /// Split nanoseconds since epoch into seconds and a non-negative
    /// nanosecond remainder. Seconds saturate at the `i32` range.
    pub fn from_nanos(nanos: i64) -> Self {
        let sec = nanos.div_euclid(1_000_000_000);
        let nanosec = nanos.rem_euclid(1_000_000_000) as u32;
        let sec = sec.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        Self { sec, nanosec }
    }

    /// Nanoseconds since epoch.
    pub fn as_nanos(&self) -> i64 {
        (self.sec as i64) * 1_000_000_000 + (self.nanosec as i64)
    }
}

/// `std_msgs/Header`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderMsg {
    pub stamp: TimeMsg,
    pub frame_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_from_nanos() {
        let t = TimeMsg::from_nanos(1_500_000_000);
        assert_eq!(
            t,
            TimeMsg {
                sec: 1,
                nanosec: 500_000_000
            }
        );
        assert_eq!(t.as_nanos(), 1_500_000_000);
    }

    #[test]
    fn test_time_before_epoch() {
        let t = TimeMsg::from_nanos(-250_000_000);
        assert_eq!(
            t,
            TimeMsg {
                sec: -1,
                nanosec: 750_000_000
            }
        );
        assert_eq!(t.as_nanos(), -250_000_000);
    }

    #[test]
    fn test_layout_deserializes_with_defaults() {
        let msg: Float64MultiArrayMsg = serde_json::from_str(r#"{"data": [1.0]}"#).unwrap();
        assert!(msg.layout.dim.is_empty());
        assert_eq!(msg.layout.data_offset, 0);
        assert_eq!(msg.data, vec![1.0]);
    }
}
