use nalgebra::Matrix3;

/// Invert a batch of rotation matrices.
///
/// Rotation matrices are orthonormal, so the inverse is the transpose.
pub fn invert_rotation_matrices(rotation_matrices: &[Matrix3<f64>]) -> Vec<Matrix3<f64>> {
    rotation_matrices.iter().map(|m| m.transpose()).collect()
}

/// Check that `m` is a proper rotation: `M * Mt == I` and `det(M) == 1` within `tolerance`.
pub fn is_rotation_matrix(m: &Matrix3<f64>, tolerance: f64) -> bool {
    let orthonormal = (m * m.transpose() - Matrix3::identity()).amax() < tolerance;
    orthonormal && (m.determinant() - 1.0).abs() < tolerance
}

/// Row-major nested arrays, for printing or serialising a matrix without nalgebra types.
pub fn matrix_to_rows(m: &Matrix3<f64>) -> [[f64; 3]; 3] {
    [
        [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
        [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
        [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::Axis;
    use crate::rotations::rotation_about;

    #[test]
    fn test_inverse_is_transpose() {
        let r = rotation_about(Axis::Z, 30.0) * rotation_about(Axis::X, 60.0);
        let inv = invert_rotation_matrices(&[r]);
        assert!((inv[0] * r - Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_check() {
        let r = rotation_about(Axis::Y, 123.0);
        assert!(is_rotation_matrix(&r, 1e-9));

        let reflection = Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        assert!(!is_rotation_matrix(&reflection, 1e-9), "det -1 is not a rotation");

        let scaled = r * 2.0;
        assert!(!is_rotation_matrix(&scaled, 1e-9));
    }

    #[test]
    fn test_matrix_to_rows() {
        let rows = matrix_to_rows(&rotation_about(Axis::Z, 90.0));
        assert!((rows[0][1] + 1.0).abs() < 1e-12);
        assert!((rows[1][0] - 1.0).abs() < 1e-12);
    }
}
