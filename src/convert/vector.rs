// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Vector codec.
//!
//! Plain `float64[]` sequences map one-to-one onto `DVector`. A vector can
//! also travel as an N×1 `Float64MultiArray`, which is how controllers ship
//! their feedforward term.

use nalgebra::{DMatrix, DVector};

use crate::core::{ConversionError, Result};
use crate::msg::Float64MultiArrayMsg;
use crate::options::ConvertOptions;

use super::matrix::{check_layout, layout_shape, matrix_to_msg};

/// Decode a flat sequence, preserving length and order.
pub fn vector_from_msg(data: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(data)
}

/// Encode a vector as a flat sequence, preserving length and order.
pub fn vector_to_msg(v: &DVector<f64>) -> Vec<f64> {
    v.iter().copied().collect()
}

/// Encode a vector as an N×1 matrix message.
pub fn vector_to_matrix_msg(v: &DVector<f64>) -> Float64MultiArrayMsg {
    matrix_to_msg(&DMatrix::from_column_slice(v.len(), 1, v.as_slice()))
}

/// Decode an N×1 matrix message into a vector.
pub fn vector_from_matrix_msg(msg: &Float64MultiArrayMsg) -> Result<DVector<f64>> {
    vector_from_matrix_msg_with(msg, &ConvertOptions::default())
}

/// Decode an N×1 matrix message into a vector with explicit options.
///
/// The row count is taken from `dim[0].size`; `dim[1].size` must be 1.
pub fn vector_from_matrix_msg_with(
    msg: &Float64MultiArrayMsg,
    options: &ConvertOptions,
) -> Result<DVector<f64>> {
    decode_column(msg, options, "vector")
}

pub(crate) fn decode_column(
    msg: &Float64MultiArrayMsg,
    options: &ConvertOptions,
    context: &str,
) -> Result<DVector<f64>> {
    let (rows, cols) = layout_shape(&msg.layout, context)?;
    if cols != 1 {
        return Err(ConversionError::shape_mismatch(
            context,
            "dim[1].size",
            1,
            cols as u64,
        ));
    }
    check_layout(msg, rows, 1, options, context)?;

    // An empty column reads nothing, so its offset is never dereferenced.
    let offset = msg.layout.data_offset as usize;
    Ok(DVector::from_fn(rows, |i, _| msg.data[offset + i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_round_trip() {
        let data = vec![0.5, -1.25, 3.0];
        let v = vector_from_msg(&data);
        assert_eq!(v.len(), 3);
        assert_eq!(v[1], -1.25);
        assert_eq!(vector_to_msg(&v), data);
    }

    #[test]
    fn test_empty_vector() {
        let v = vector_from_msg(&[]);
        assert!(v.is_empty());
        assert!(vector_to_msg(&v).is_empty());
    }

    #[test]
    fn test_column_matrix_layout() {
        let msg = vector_to_matrix_msg(&DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]));
        assert_eq!(msg.layout.dim[0].size, 4);
        assert_eq!(msg.layout.dim[0].stride, 4);
        assert_eq!(msg.layout.dim[1].size, 1);
        assert_eq!(msg.layout.dim[1].stride, 1);
        assert_eq!(msg.data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_column_matrix_round_trip() {
        let v = DVector::from_vec(vec![9.0, 8.0]);
        let back = vector_from_matrix_msg(&vector_to_matrix_msg(&v)).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_column_matrix_with_offset() {
        let mut msg = vector_to_matrix_msg(&DVector::from_vec(vec![1.0, 2.0]));
        msg.layout.data_offset = 1;
        msg.data.insert(0, 42.0);
        let v = vector_from_matrix_msg(&msg).unwrap();
        assert_eq!(v, DVector::from_vec(vec![1.0, 2.0]));
    }

    #[test]
    fn test_empty_column_with_offset_past_data() {
        let mut msg = vector_to_matrix_msg(&DVector::zeros(0));
        msg.layout.data_offset = 5;
        assert!(msg.data.is_empty());

        let v = vector_from_matrix_msg(&msg).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_wide_matrix_is_not_a_vector() {
        let msg = matrix_to_msg(&DMatrix::zeros(2, 3));
        let err = vector_from_matrix_msg(&msg).unwrap_err();
        assert_eq!(
            err,
            ConversionError::shape_mismatch("vector", "dim[1].size", 1, 3)
        );
    }
}
