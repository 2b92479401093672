// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout lfc-msgs.
//!
//! This module provides the foundational types for the library:
//! - [`ConversionError`] - Error handling for every conversion
//! - [`CodecValue`] - Dynamic message value representation
//! - [`MessageKind`] - Top-level message identifier

pub mod error;
pub mod value;

pub use error::{ConversionError, Result};
pub use value::{CodecValue, DecodedMessage};

/// Top-level controller message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// `linear_feedback_controller_msgs/msg/Sensor`
    Sensor,
    /// `linear_feedback_controller_msgs/msg/Control`
    Control,
}

/// Error returned when parsing a `MessageKind` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMessageKindError {
    _private: (),
}

impl std::fmt::Display for ParseMessageKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid message kind, expected 'sensor' or 'control'")
    }
}

impl std::error::Error for ParseMessageKindError {}

impl std::str::FromStr for MessageKind {
    type Err = ParseMessageKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sensor" => Ok(MessageKind::Sensor),
            "control" => Ok(MessageKind::Control),
            _ => Err(ParseMessageKindError { _private: () }),
        }
    }
}

impl MessageKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Sensor => "sensor",
            MessageKind::Control => "control",
        }
    }

    /// Fully qualified ROS type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            MessageKind::Sensor => "linear_feedback_controller_msgs/msg/Sensor",
            MessageKind::Control => "linear_feedback_controller_msgs/msg/Control",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kind_parse() {
        assert_eq!("sensor".parse::<MessageKind>(), Ok(MessageKind::Sensor));
        assert_eq!("Control".parse::<MessageKind>(), Ok(MessageKind::Control));
        assert!("joint_state".parse::<MessageKind>().is_err());
    }

    #[test]
    fn test_message_kind_names() {
        assert_eq!(MessageKind::Sensor.as_str(), "sensor");
        assert!(MessageKind::Control.type_name().ends_with("/Control"));
    }
}
