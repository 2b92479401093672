// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Matrix codec.
//!
//! A dense matrix travels as a `Float64MultiArray` with a fixed layout:
//!
//! | entry    | label    | size | stride      |
//! |----------|----------|------|-------------|
//! | `dim[0]` | `"rows"` | rows | rows × cols |
//! | `dim[1]` | `"cols"` | cols | cols        |
//!
//! `data_offset` is written as 0 and elements are stored row-major: element
//! (i, j) lives at `data[data_offset + dim[1].stride * i + j]`. Decoding
//! honours a non-zero `data_offset` but otherwise accepts only this dense
//! layout.

use nalgebra::DMatrix;
use tracing::debug;

use crate::core::{ConversionError, Result};
use crate::msg::std_msgs::{COLS_LABEL, ROWS_LABEL};
use crate::msg::{Float64MultiArrayMsg, MultiArrayDimensionMsg, MultiArrayLayoutMsg};
use crate::options::ConvertOptions;

/// Encode a matrix with the dense row-major layout.
pub fn matrix_to_msg(m: &DMatrix<f64>) -> Float64MultiArrayMsg {
    let rows = m.nrows();
    let cols = m.ncols();

    let layout = MultiArrayLayoutMsg {
        dim: vec![
            MultiArrayDimensionMsg::new(ROWS_LABEL, wire_len(rows), wire_len(rows * cols)),
            MultiArrayDimensionMsg::new(COLS_LABEL, wire_len(cols), wire_len(cols)),
        ],
        data_offset: 0,
    };

    let row_stride = cols;
    let mut data = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            data[row_stride * i + j] = m[(i, j)];
        }
    }

    Float64MultiArrayMsg { layout, data }
}

/// Decode a matrix whose shape is known in advance.
///
/// The layout must describe exactly a `rows` × `cols` dense matrix.
pub fn matrix_from_msg(
    msg: &Float64MultiArrayMsg,
    rows: usize,
    cols: usize,
) -> Result<DMatrix<f64>> {
    matrix_from_msg_with(msg, rows, cols, &ConvertOptions::default())
}

/// Decode a matrix whose shape is known in advance, with explicit options.
pub fn matrix_from_msg_with(
    msg: &Float64MultiArrayMsg,
    rows: usize,
    cols: usize,
    options: &ConvertOptions,
) -> Result<DMatrix<f64>> {
    decode(msg, rows, cols, options, "matrix")
}

/// Decode a matrix, taking its shape from `dim[0].size` and `dim[1].size`.
pub fn matrix_from_msg_inferred(msg: &Float64MultiArrayMsg) -> Result<DMatrix<f64>> {
    matrix_from_msg_inferred_with(msg, &ConvertOptions::default())
}

/// Decode a matrix with inferred shape and explicit options.
pub fn matrix_from_msg_inferred_with(
    msg: &Float64MultiArrayMsg,
    options: &ConvertOptions,
) -> Result<DMatrix<f64>> {
    decode_inferred(msg, options, "matrix")
}

pub(crate) fn decode_inferred(
    msg: &Float64MultiArrayMsg,
    options: &ConvertOptions,
    context: &str,
) -> Result<DMatrix<f64>> {
    let (rows, cols) = layout_shape(&msg.layout, context)?;
    decode(msg, rows, cols, options, context)
}

fn decode(
    msg: &Float64MultiArrayMsg,
    rows: usize,
    cols: usize,
    options: &ConvertOptions,
    context: &str,
) -> Result<DMatrix<f64>> {
    check_layout(msg, rows, cols, options, context)?;

    let offset = msg.layout.data_offset as usize;
    let row_stride = msg.layout.dim[1].stride as usize;
    Ok(DMatrix::from_fn(rows, cols, |i, j| {
        msg.data[offset + row_stride * i + j]
    }))
}

/// Shape `(rows, cols)` declared by a 2D layout.
pub fn layout_shape(layout: &MultiArrayLayoutMsg, context: &str) -> Result<(usize, usize)> {
    if layout.dim.len() != 2 {
        return Err(rejected(ConversionError::dimension_count(
            context,
            2,
            layout.dim.len(),
        )));
    }
    Ok((layout.dim[0].size as usize, layout.dim[1].size as usize))
}

/// Verify that a message holds exactly a dense `rows` × `cols` matrix.
///
/// On success, every index `data_offset + dim[1].stride * i + j` with
/// `i < rows` and `j < cols` is in bounds.
pub(crate) fn check_layout(
    msg: &Float64MultiArrayMsg,
    rows: usize,
    cols: usize,
    options: &ConvertOptions,
    context: &str,
) -> Result<()> {
    let dim = &msg.layout.dim;
    if dim.len() != 2 {
        return Err(rejected(ConversionError::dimension_count(
            context,
            2,
            dim.len(),
        )));
    }

    if options.check_labels {
        for (index, expected) in [ROWS_LABEL, COLS_LABEL].into_iter().enumerate() {
            if dim[index].label != expected {
                return Err(rejected(ConversionError::label_mismatch(
                    index,
                    expected,
                    dim[index].label.as_str(),
                )));
            }
        }
    }

    let rows = rows as u64;
    let cols = cols as u64;
    let checks = [
        ("dim[0].stride", rows.saturating_mul(cols), dim[0].stride),
        ("dim[0].size", rows, dim[0].size),
        ("dim[1].stride", cols, dim[1].stride),
        ("dim[1].size", cols, dim[1].size),
    ];
    for (descriptor, expected, actual) in checks {
        if actual as u64 != expected {
            return Err(rejected(ConversionError::shape_mismatch(
                context,
                descriptor,
                expected,
                actual as u64,
            )));
        }
    }

    let elements = rows.saturating_mul(cols);
    let required = if elements == 0 {
        0
    } else {
        (msg.layout.data_offset as u64).saturating_add(elements)
    };
    if (msg.data.len() as u64) < required {
        return Err(rejected(ConversionError::data_too_short(
            context,
            required,
            msg.data.len(),
        )));
    }

    Ok(())
}

fn rejected(err: ConversionError) -> ConversionError {
    debug!(fields = ?err.log_fields(), "Rejected matrix layout");
    err
}

/// Sizes and strides are `uint32` on the wire.
fn wire_len(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DMatrix<f64> {
        DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    }

    #[test]
    fn test_encode_layout() {
        let msg = matrix_to_msg(&sample());

        assert_eq!(msg.layout.data_offset, 0);
        assert_eq!(
            msg.layout.dim,
            vec![
                MultiArrayDimensionMsg::new("rows", 2, 6),
                MultiArrayDimensionMsg::new("cols", 3, 3),
            ]
        );
        assert_eq!(msg.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_decode_with_target_shape() {
        let msg = matrix_to_msg(&sample());
        assert_eq!(matrix_from_msg(&msg, 2, 3).unwrap(), sample());
    }

    #[test]
    fn test_decode_inferred() {
        let msg = matrix_to_msg(&sample());
        assert_eq!(matrix_from_msg_inferred(&msg).unwrap(), sample());
    }

    #[test]
    fn test_column_count_mismatch() {
        let mut msg = matrix_to_msg(&sample());
        msg.layout.dim[1].size = 4;

        let err = matrix_from_msg(&msg, 2, 3).unwrap_err();
        assert_eq!(
            err,
            ConversionError::shape_mismatch("matrix", "dim[1].size", 3, 4)
        );
    }

    #[test]
    fn test_transposed_target_rejected() {
        let msg = matrix_to_msg(&sample());

        let err = matrix_from_msg(&msg, 3, 2).unwrap_err();
        assert_eq!(
            err,
            ConversionError::shape_mismatch("matrix", "dim[0].size", 3, 2)
        );
    }

    #[test]
    fn test_inconsistent_stride_rejected_when_inferred() {
        let mut msg = matrix_to_msg(&sample());
        msg.layout.dim[0].stride = 5;

        let err = matrix_from_msg_inferred(&msg).unwrap_err();
        assert_eq!(
            err,
            ConversionError::shape_mismatch("matrix", "dim[0].stride", 6, 5)
        );
    }

    #[test]
    fn test_one_dimensional_layout_rejected() {
        let mut msg = matrix_to_msg(&sample());
        msg.layout.dim.pop();

        let err = matrix_from_msg_inferred(&msg).unwrap_err();
        assert_eq!(err, ConversionError::dimension_count("matrix", 2, 1));
    }

    #[test]
    fn test_short_data_rejected() {
        let mut msg = matrix_to_msg(&sample());
        msg.data.truncate(5);

        let err = matrix_from_msg(&msg, 2, 3).unwrap_err();
        assert_eq!(err, ConversionError::data_too_short("matrix", 6, 5));
    }

    #[test]
    fn test_data_offset_honoured() {
        let mut msg = matrix_to_msg(&sample());
        msg.layout.data_offset = 2;
        msg.data.splice(0..0, [-1.0, -1.0]);

        assert_eq!(matrix_from_msg(&msg, 2, 3).unwrap(), sample());

        msg.data.pop();
        assert!(matrix_from_msg(&msg, 2, 3).is_err());
    }

    #[test]
    fn test_empty_matrices() {
        for (rows, cols) in [(0, 0), (0, 4), (3, 0)] {
            let m = DMatrix::<f64>::zeros(rows, cols);
            let msg = matrix_to_msg(&m);
            assert!(msg.data.is_empty());
            assert_eq!(msg.layout.dim[0].stride, 0);
            assert_eq!(matrix_from_msg(&msg, rows, cols).unwrap(), m);
            assert_eq!(matrix_from_msg_inferred(&msg).unwrap().shape(), (rows, cols));
        }
    }

    #[test]
    fn test_labels_ignored_by_default() {
        let mut msg = matrix_to_msg(&sample());
        msg.layout.dim[0].label = String::new();
        msg.layout.dim[1].label = "width".to_string();

        assert!(matrix_from_msg(&msg, 2, 3).is_ok());

        let options = ConvertOptions::new().with_check_labels(true);
        let err = matrix_from_msg_with(&msg, 2, 3, &options).unwrap_err();
        assert_eq!(err, ConversionError::label_mismatch(0, "rows", ""));
    }
}
