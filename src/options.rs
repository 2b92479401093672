// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion options.
//!
//! Options only affect wire → computation decoding; encoding is total and
//! needs no configuration. Options can be built in code or loaded from TOML:
//!
//! ```toml
//! joint_lengths = "allow_empty"
//! check_labels = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{ConversionError, Result};

/// How joint-state array lengths are checked against the joint name count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointLengthPolicy {
    /// Every array must have exactly one entry per name.
    #[default]
    Strict,
    /// Arrays may also be empty, as `sensor_msgs/JointState` allows.
    AllowEmpty,
    /// No check; inconsistent joint states are passed through.
    Unchecked,
}

impl JointLengthPolicy {
    /// Whether an array of `actual` entries is acceptable for `expected` joints.
    pub fn accepts(self, expected: usize, actual: usize) -> bool {
        match self {
            JointLengthPolicy::Strict => actual == expected,
            JointLengthPolicy::AllowEmpty => actual == expected || actual == 0,
            JointLengthPolicy::Unchecked => true,
        }
    }
}

/// Options for decoding wire messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Joint-state length check
    pub joint_lengths: JointLengthPolicy,

    /// Require matrix dimensions to be labelled "rows" and "cols"
    pub check_labels: bool,
}

impl ConvertOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the joint-state length policy.
    pub fn with_joint_lengths(mut self, policy: JointLengthPolicy) -> Self {
        self.joint_lengths = policy;
        self
    }

    /// Enable or disable matrix label checking.
    pub fn with_check_labels(mut self, check: bool) -> Self {
        self.check_labels = check;
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConversionError::parse(format!("toml file {}", path.display()), e.to_string())
        })?;
        Self::from_toml_str(&contents)
    }
}
