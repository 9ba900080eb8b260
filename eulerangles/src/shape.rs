//! Shape-checked conversion from loosely shaped input.
//!
//! Angle batches are `[n, 3]` and matrix batches `[n, 3, 3]`. Input read from
//! text or JSON arrives as nested or flat vectors; these helpers reject
//! anything of the wrong shape with a `ShapeError` instead of truncating.

use nalgebra::Matrix3;

use crate::errors::{EulerError, Result};

/// Angle triples from rows that must each hold exactly three values.
pub fn angles_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<[f64; 3]>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.as_ref() {
            [a, b, c] => Ok([*a, *b, *c]),
            other => Err(EulerError::ShapeError(format!(
                "euler angle row {} has {} values, expected 3",
                i,
                other.len()
            ))),
        })
        .collect()
}

/// Angle triples from a flat `[a, b, c, a, b, c, ...]` buffer.
pub fn angles_from_flat(values: &[f64]) -> Result<Vec<[f64; 3]>> {
    if values.len() % 3 != 0 {
        return Err(EulerError::ShapeError(format!(
            "{} values cannot be split into euler angle triples",
            values.len()
        )));
    }
    Ok(values.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

/// Rotation matrices from `[n][3][3]` nested rows.
pub fn matrices_from_rows<M, R>(matrices: &[M]) -> Result<Vec<Matrix3<f64>>>
where
    M: AsRef<[R]>,
    R: AsRef<[f64]>,
{
    matrices
        .iter()
        .enumerate()
        .map(|(i, matrix)| {
            let rows = matrix.as_ref();
            if rows.len() != 3 {
                return Err(EulerError::ShapeError(format!(
                    "matrix {} has {} rows, expected 3",
                    i,
                    rows.len()
                )));
            }
            let mut values = [0.0; 9];
            for (r, row) in rows.iter().enumerate() {
                let row = row.as_ref();
                if row.len() != 3 {
                    return Err(EulerError::ShapeError(format!(
                        "matrix {} row {} has {} values, expected 3",
                        i,
                        r,
                        row.len()
                    )));
                }
                values[r * 3..r * 3 + 3].copy_from_slice(row);
            }
            Ok(Matrix3::from_row_slice(&values))
        })
        .collect()
}

/// Rotation matrices from a flat row-major buffer of `9 * n` values.
pub fn matrices_from_flat(values: &[f64]) -> Result<Vec<Matrix3<f64>>> {
    if values.len() % 9 != 0 {
        return Err(EulerError::ShapeError(format!(
            "{} values cannot be split into 3x3 matrices",
            values.len()
        )));
    }
    Ok(values.chunks_exact(9).map(Matrix3::from_row_slice).collect())
}
