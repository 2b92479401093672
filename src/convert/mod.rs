// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire ↔ computation conversions.
//!
//! Codecs are layered leaf-first:
//!
//! - [`vector`] - `float64[]` ↔ `DVector`, and N×1 matrices ↔ `DVector`
//! - [`matrix`] - `Float64MultiArray` ↔ `DMatrix` (row-major, explicit strides)
//! - [`spatial`] - wrench, twist and pose ↔ fixed-size vectors
//! - [`joint_state`] - `JointState`, built on [`vector`]
//! - [`contact`] - `Contact`, built on [`spatial`]
//! - [`sensor`] - `Sensor`, composing the three above
//! - [`control`] - `Control`, composing [`matrix`], [`vector`] and [`sensor`]
//!
//! Every function is pure and returns a fresh value. Encoding
//! (computation → wire) is total. Decoding fails only on inconsistent
//! matrix layouts or joint-state arrays.
//!
//! ## Example
//!
//! ```
//! use lfc_msgs::convert::matrix::{matrix_from_msg, matrix_to_msg};
//! use nalgebra::DMatrix;
//!
//! let m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let msg = matrix_to_msg(&m);
//! assert_eq!(msg.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(matrix_from_msg(&msg, 2, 3).unwrap(), m);
//! ```

pub mod contact;
pub mod control;
pub mod joint_state;
pub mod matrix;
pub mod sensor;
pub mod spatial;
pub mod vector;

use nalgebra::DMatrix;

use crate::core::Result;
use crate::model::{Contact, Control, JointState, Sensor};
use crate::msg::{ContactMsg, ControlMsg, Float64MultiArrayMsg, JointStateMsg, SensorMsg};
use crate::options::ConvertOptions;

/// A computation type paired with its wire record.
pub trait MsgConversion: Sized {
    /// Wire record type.
    type Msg;

    /// Decode a wire record with explicit options.
    fn from_msg_with(msg: &Self::Msg, options: &ConvertOptions) -> Result<Self>;

    /// Decode a wire record with default options.
    fn from_msg(msg: &Self::Msg) -> Result<Self> {
        Self::from_msg_with(msg, &ConvertOptions::default())
    }

    /// Encode into a fresh wire record.
    fn to_msg(&self) -> Self::Msg;
}

impl MsgConversion for DMatrix<f64> {
    type Msg = Float64MultiArrayMsg;

    fn from_msg_with(msg: &Self::Msg, options: &ConvertOptions) -> Result<Self> {
        matrix::matrix_from_msg_inferred_with(msg, options)
    }

    fn to_msg(&self) -> Self::Msg {
        matrix::matrix_to_msg(self)
    }
}

impl MsgConversion for JointState {
    type Msg = JointStateMsg;

    fn from_msg_with(msg: &Self::Msg, options: &ConvertOptions) -> Result<Self> {
        joint_state::joint_state_from_msg_with(msg, options)
    }

    fn to_msg(&self) -> Self::Msg {
        joint_state::joint_state_to_msg(self)
    }
}

impl MsgConversion for Contact {
    type Msg = ContactMsg;

    fn from_msg_with(msg: &Self::Msg, _options: &ConvertOptions) -> Result<Self> {
        Ok(contact::contact_from_msg(msg))
    }

    fn to_msg(&self) -> Self::Msg {
        contact::contact_to_msg(self)
    }
}

impl MsgConversion for Sensor {
    type Msg = SensorMsg;

    fn from_msg_with(msg: &Self::Msg, options: &ConvertOptions) -> Result<Self> {
        sensor::sensor_from_msg_with(msg, options)
    }

    fn to_msg(&self) -> Self::Msg {
        sensor::sensor_to_msg(self)
    }
}

impl MsgConversion for Control {
    type Msg = ControlMsg;

    fn from_msg_with(msg: &Self::Msg, options: &ConvertOptions) -> Result<Self> {
        control::control_from_msg_with(msg, options)
    }

    fn to_msg(&self) -> Self::Msg {
        control::control_to_msg(self)
    }
}
