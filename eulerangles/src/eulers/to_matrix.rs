use nalgebra::Matrix3;
use tracing::debug;

use crate::axes::AxisSequence;
use crate::errors::Result;
use crate::rotations::{compose_triplet, rotation_about, CompositionMode};

/// Rotation matrices for a batch of Euler angles (degrees) with an already
/// validated axis sequence.
///
/// Left handed angles are negated before use, since the elemental matrices are
/// defined for counterclockwise positive rotations.
pub fn angles_to_matrices(
    euler_angles: &[[f64; 3]],
    axes: AxisSequence,
    mode: CompositionMode,
    right_handed: bool,
) -> Vec<Matrix3<f64>> {
    debug!(
        count = euler_angles.len(),
        axes = %axes,
        mode = %mode,
        right_handed,
        "composing rotation matrices"
    );

    let sign = if right_handed { 1.0 } else { -1.0 };
    let [a1, a2, a3] = axes.axes();

    euler_angles
        .iter()
        .map(|angles| {
            compose_triplet(
                &rotation_about(a1, sign * angles[0]),
                &rotation_about(a2, sign * angles[1]),
                &rotation_about(a3, sign * angles[2]),
                mode,
            )
        })
        .collect()
}

/// Convert Euler angles in degrees into rotation matrices.
///
/// * `axes` - one of the twelve valid sequences, e.g. `"zyz"`, `"ZXZ"`, `"xyz"`
/// * `intrinsic` - `true` for rotations about the moving body axes, `false` for fixed axes
/// * `right_handed` - `false` when positive angles are clockwise looking against the axis
///
/// The axis sequence is validated before any work is done.
///
/// ```rust
/// use eulerangles::euler2matrix;
///
/// let matrices = euler2matrix(&[[30.0, 60.0, 75.0]], "zxz", false, true).unwrap();
/// assert!((matrices[0][(2, 2)] - 0.5).abs() < 1e-12);
/// ```
pub fn euler2matrix(
    euler_angles: &[[f64; 3]],
    axes: &str,
    intrinsic: bool,
    right_handed: bool,
) -> Result<Vec<Matrix3<f64>>> {
    let axes: AxisSequence = axes.parse()?;
    Ok(angles_to_matrices(
        euler_angles,
        axes,
        CompositionMode::from_intrinsic(intrinsic),
        right_handed,
    ))
}

/// [`euler2matrix`] for a single angle triple.
pub fn euler2matrix_one(
    euler_angles: [f64; 3],
    axes: &str,
    intrinsic: bool,
    right_handed: bool,
) -> Result<Matrix3<f64>> {
    let axes: AxisSequence = axes.parse()?;
    let mode = CompositionMode::from_intrinsic(intrinsic);
    let sign = if right_handed { 1.0 } else { -1.0 };
    let [a1, a2, a3] = axes.axes();
    Ok(compose_triplet(
        &rotation_about(a1, sign * euler_angles[0]),
        &rotation_about(a2, sign * euler_angles[1]),
        &rotation_about(a3, sign * euler_angles[2]),
        mode,
    ))
}
