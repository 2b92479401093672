// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for lfc-msgs.
//!
//! Provides error types for message conversions:
//! - Matrix layout and shape validation
//! - Joint state array consistency
//! - Dynamic value bridging
//! - JSON and TOML parsing

use std::fmt;

/// Errors that can occur while converting between wire and computation types.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Matrix layout metadata disagrees with the expected shape
    ShapeMismatch {
        /// What was being decoded (e.g., "feedback_gain")
        context: String,
        /// Layout entry that disagrees (e.g., "dim[1].size")
        descriptor: &'static str,
        /// Value required by the target shape
        expected: u64,
        /// Value found in the message
        actual: u64,
    },

    /// Matrix layout does not describe a 2D matrix
    DimensionCount {
        /// What was being decoded
        context: String,
        /// Required number of dimensions
        expected: usize,
        /// Number of dimensions in the message
        actual: usize,
    },

    /// Data buffer is shorter than its layout requires
    DataTooShort {
        /// What was being decoded
        context: String,
        /// Elements required by offset and shape
        required: u64,
        /// Elements present in the buffer
        available: usize,
    },

    /// Parallel arrays have inconsistent lengths
    LengthMismatch {
        /// Array that disagrees (e.g., "velocity")
        field: String,
        /// Length required (the joint name count)
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// Matrix dimension label is not the conventional one
    LabelMismatch {
        /// Dimension index
        index: usize,
        /// Expected label ("rows" or "cols")
        expected: String,
        /// Label found in the message
        actual: String,
    },

    /// Field missing from a dynamic message
    MissingField {
        /// Field path
        field: String,
    },

    /// Field present in a dynamic message but with the wrong kind of value
    TypeMismatch {
        /// Field path
        field: String,
        /// Expected value kind
        expected: String,
        /// Actual value kind
        actual: String,
    },

    /// Parse error in JSON or TOML input
    ParseError {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },
}

impl ConversionError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(
        context: impl Into<String>,
        descriptor: &'static str,
        expected: u64,
        actual: u64,
    ) -> Self {
        ConversionError::ShapeMismatch {
            context: context.into(),
            descriptor,
            expected,
            actual,
        }
    }

    /// Create a dimension count error.
    pub fn dimension_count(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        ConversionError::DimensionCount {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a data too short error.
    pub fn data_too_short(context: impl Into<String>, required: u64, available: usize) -> Self {
        ConversionError::DataTooShort {
            context: context.into(),
            required,
            available,
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ConversionError::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create a label mismatch error.
    pub fn label_mismatch(
        index: usize,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        ConversionError::LabelMismatch {
            index,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ConversionError::MissingField {
            field: field.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        ConversionError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        ConversionError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports a matrix layout problem.
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            ConversionError::ShapeMismatch { .. }
                | ConversionError::DimensionCount { .. }
                | ConversionError::DataTooShort { .. }
                | ConversionError::LabelMismatch { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ConversionError::ShapeMismatch {
                context,
                descriptor,
                expected,
                actual,
            } => vec![
                ("context", context.clone()),
                ("descriptor", descriptor.to_string()),
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
            ],
            ConversionError::DimensionCount {
                context,
                expected,
                actual,
            } => vec![
                ("context", context.clone()),
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
            ],
            ConversionError::DataTooShort {
                context,
                required,
                available,
            } => vec![
                ("context", context.clone()),
                ("required", required.to_string()),
                ("available", available.to_string()),
            ],
            ConversionError::LengthMismatch {
                field,
                expected,
                actual,
            } => vec![
                ("field", field.clone()),
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
            ],
            ConversionError::LabelMismatch {
                index,
                expected,
                actual,
            } => vec![
                ("index", index.to_string()),
                ("expected", expected.clone()),
                ("actual", actual.clone()),
            ],
            ConversionError::MissingField { field } => vec![("field", field.clone())],
            ConversionError::TypeMismatch {
                field,
                expected,
                actual,
            } => vec![
                ("field", field.clone()),
                ("expected", expected.clone()),
                ("actual", actual.clone()),
            ],
            ConversionError::ParseError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::ShapeMismatch {
                context,
                descriptor,
                expected,
                actual,
            } => write!(
                f,
                "Shape mismatch in {context}: {descriptor} is {actual}, expected {expected}"
            ),
            ConversionError::DimensionCount {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Layout of {context} has {actual} dimensions, expected {expected}"
            ),
            ConversionError::DataTooShort {
                context,
                required,
                available,
            } => write!(
                f,
                "Data of {context} too short: layout requires {required} elements, but only {available} available"
            ),
            ConversionError::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Length mismatch in '{field}': expected {expected} entries, found {actual}"
            ),
            ConversionError::LabelMismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "Dimension {index} is labelled '{actual}', expected '{expected}'"
            ),
            ConversionError::MissingField { field } => {
                write!(f, "Missing field: '{field}'")
            }
            ConversionError::TypeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Type mismatch in '{field}': expected {expected}, found {actual}"
            ),
            ConversionError::ParseError { context, message } => {
                write!(f, "Parse error in {context}: {message}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::parse("json", err.to_string())
    }
}

impl From<toml::de::Error> for ConversionError {
    fn from(err: toml::de::Error) -> Self {
        ConversionError::parse("toml", err.to_string())
    }
}

/// Result type for lfc-msgs operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
