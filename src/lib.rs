// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # lfc-msgs
//!
//! Message conversion layer for a linear feedback controller.
//!
//! The controller exchanges two top-level messages over ROS 2 middleware:
//! a [`SensorMsg`] (robot state) and a [`ControlMsg`] (feedback gain,
//! feedforward term and the state the command was computed at). This crate
//! converts those wire records to dense `nalgebra` types and back:
//!
//! - **Wire records** in [`msg`], mirroring the ROS interface definitions
//! - **Computation types** in [`model`]
//! - **Codecs** in [`convert`], one module per message family
//! - **Options** in [`options`], loadable from TOML
//! - **JSON** in [`encoding`], for tooling and test fixtures
//!
//! ## Example: Decoding a control message
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lfc_msgs::{Control, MsgConversion, Sensor};
//! use nalgebra::{DMatrix, DVector};
//!
//! let control = Control {
//!     feedback_gain: DMatrix::from_element(2, 3, 0.5),
//!     feedforward: DVector::from_vec(vec![1.0, -1.0]),
//!     initial_state: Sensor::default(),
//! };
//!
//! let msg = control.to_msg();
//! let back = Control::from_msg(&msg)?;
//! assert_eq!(back, control);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use core::{CodecValue, ConversionError, DecodedMessage, MessageKind, Result};

// Wire and computation representations
pub mod model;
pub mod msg;

pub use model::{Contact, Control, JointState, Sensor, Vector7};
pub use msg::{
    ContactMsg, ControlMsg, Float64MultiArrayMsg, JointStateMsg, MessageValue, SensorMsg,
};

// Conversions
pub mod convert;
pub mod options;

pub use convert::MsgConversion;
pub use options::{ConvertOptions, JointLengthPolicy};

// JSON
pub mod encoding;

pub use encoding::JsonCodec;
