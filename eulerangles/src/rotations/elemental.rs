use nalgebra::Matrix3;

use crate::axes::Axis;
use crate::errors::Result;

/// Rotation matrix for a counterclockwise rotation of `theta` degrees about `axis`,
/// looking from the positive axis towards the origin.
///
/// ```text
/// Rx = [[1, 0,  0],    Ry = [[ c, 0, s],    Rz = [[c, -s, 0],
///       [0, c, -s],          [ 0, 1, 0],          [s,  c, 0],
///       [0, s,  c]]          [-s, 0, c]]          [0,  0, 1]]
/// ```
pub fn rotation_about(axis: Axis, theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.to_radians().sin_cos();
    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        ),
        Axis::Z => Matrix3::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        ),
    }
}

/// One elemental rotation matrix per angle, all about the same axis.
pub fn elemental_rotations(angles: &[f64], axis: Axis) -> Vec<Matrix3<f64>> {
    angles.iter().map(|&theta| rotation_about(axis, theta)).collect()
}

/// Elemental rotation matrices for a batch of angles in degrees.
///
/// `axis` is parsed case- and whitespace-insensitively; anything other than
/// `x`, `y` or `z` fails with [`EulerError::InvalidAxis`](crate::EulerError::InvalidAxis).
/// The output always has one matrix per input angle, including for a single angle.
pub fn elemental_rotation(angles: &[f64], axis: &str) -> Result<Vec<Matrix3<f64>>> {
    let axis: Axis = axis.parse()?;
    Ok(elemental_rotations(angles, axis))
}

/// Single-angle convenience wrapper around [`elemental_rotation`].
pub fn elemental_rotation_one(theta: f64, axis: &str) -> Result<Matrix3<f64>> {
    let axis: Axis = axis.parse()?;
    Ok(rotation_about(axis, theta))
}
