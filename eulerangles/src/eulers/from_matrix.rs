use nalgebra::Matrix3;
use tracing::{debug, trace};

use super::{proper, tait_bryan, Solver};
use crate::axes::AxisSequence;
use crate::config::DecompositionConfig;
use crate::errors::Result;
use crate::rotations::CompositionMode;

/// Closed-form extrinsic solver for one axis sequence.
fn extrinsic_solver(axes: AxisSequence) -> Solver {
    match axes {
        AxisSequence::Xyx => proper::xyx,
        AxisSequence::Xzx => proper::xzx,
        AxisSequence::Yxy => proper::yxy,
        AxisSequence::Yzy => proper::yzy,
        AxisSequence::Zxz => proper::zxz,
        AxisSequence::Zyz => proper::zyz,
        AxisSequence::Xyz => tait_bryan::xyz,
        AxisSequence::Xzy => tait_bryan::xzy,
        AxisSequence::Yxz => tait_bryan::yxz,
        AxisSequence::Yzx => tait_bryan::yzx,
        AxisSequence::Zxy => tait_bryan::zxy,
        AxisSequence::Zyx => tait_bryan::zyx,
    }
}

/// Euler angles (degrees) for a batch of rotation matrices with an already
/// validated axis sequence and config.
///
/// An intrinsic `a-b-c` rotation is the extrinsic `c-b-a` rotation with the
/// angles reversed, so only extrinsic solvers exist. Gimbal locked matrices
/// get their last extrinsic angle set to zero, which is the first angle of
/// an intrinsic triple.
pub fn matrices_to_angles(
    rotation_matrices: &[Matrix3<f64>],
    axes: AxisSequence,
    mode: CompositionMode,
    right_handed: bool,
    config: &DecompositionConfig,
) -> Vec<[f64; 3]> {
    let solver = match mode {
        CompositionMode::Extrinsic => extrinsic_solver(axes),
        CompositionMode::Intrinsic => extrinsic_solver(axes.reversed()),
    };
    let sign = if right_handed { 1.0 } else { -1.0 };

    let mut gimbal_locked = 0usize;
    let angles: Vec<[f64; 3]> = rotation_matrices
        .iter()
        .map(|matrix| {
            let solution = solver(matrix, config.gimbal_tolerance);
            if solution.gimbal_locked {
                gimbal_locked += 1;
                trace!(matrix = %matrix, "gimbal locked");
            }

            let [k1, k2, k3] = solution.radians;
            let [a, b, c] = match mode {
                CompositionMode::Extrinsic => [k1, k2, k3],
                CompositionMode::Intrinsic => [k3, k2, k1],
            };
            [
                sign * a.to_degrees(),
                sign * b.to_degrees(),
                sign * c.to_degrees(),
            ]
        })
        .collect();

    debug!(
        count = rotation_matrices.len(),
        gimbal_locked,
        axes = %axes,
        mode = %mode,
        right_handed,
        "decomposed rotation matrices"
    );
    angles
}

/// Convert rotation matrices into Euler angles in degrees.
///
/// For a non-degenerate matrix the result satisfies
/// `euler2matrix(matrix2euler(R)) == R` up to floating point error. Angles
/// come back in the principal ranges of `atan2` and `acos`/`asin`, so they may
/// differ from the angles that produced `R` while describing the same rotation.
///
/// ```rust
/// use eulerangles::{euler2matrix, matrix2euler};
///
/// let matrices = euler2matrix(&[[30.0, 60.0, 75.0]], "zxz", false, true).unwrap();
/// let angles = matrix2euler(&matrices, "zxz", false, true).unwrap();
/// assert!((angles[0][0] - 30.0).abs() < 1e-9);
/// assert!((angles[0][1] - 60.0).abs() < 1e-9);
/// assert!((angles[0][2] - 75.0).abs() < 1e-9);
/// ```
pub fn matrix2euler(
    rotation_matrices: &[Matrix3<f64>],
    axes: &str,
    intrinsic: bool,
    right_handed: bool,
) -> Result<Vec<[f64; 3]>> {
    decompose_with_config(
        rotation_matrices,
        axes,
        intrinsic,
        right_handed,
        &DecompositionConfig::default(),
    )
}

/// [`matrix2euler`] with an explicit gimbal lock tolerance.
pub fn decompose_with_config(
    rotation_matrices: &[Matrix3<f64>],
    axes: &str,
    intrinsic: bool,
    right_handed: bool,
    config: &DecompositionConfig,
) -> Result<Vec<[f64; 3]>> {
    let axes: AxisSequence = axes.parse()?;
    config.validate()?;
    Ok(matrices_to_angles(
        rotation_matrices,
        axes,
        CompositionMode::from_intrinsic(intrinsic),
        right_handed,
        config,
    ))
}

/// [`matrix2euler`] for a single matrix.
pub fn matrix2euler_one(
    rotation_matrix: &Matrix3<f64>,
    axes: &str,
    intrinsic: bool,
    right_handed: bool,
) -> Result<[f64; 3]> {
    let axes: AxisSequence = axes.parse()?;
    let config = DecompositionConfig::default();
    let angles = matrices_to_angles(
        std::slice::from_ref(rotation_matrix),
        axes,
        CompositionMode::from_intrinsic(intrinsic),
        right_handed,
        &config,
    );
    Ok(angles[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EulerError;
    use crate::eulers::euler2matrix;

    const TOL: f64 = 1e-9;

    fn assert_angles_close(actual: [f64; 3], expected: [f64; 3], context: &str) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < TOL,
                "{}: expected {:?}, got {:?}",
                context,
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_each_sequence_recovers_generic_angles() {
        // Inside the principal ranges of every solver.
        let proper_angles = [[30.0, 60.0, 75.0], [-120.0, 135.0, 10.0]];
        let tait_bryan_angles = [[30.0, 40.0, 75.0], [-120.0, -35.0, 170.0]];

        for axes in AxisSequence::all() {
            let angles = if axes.is_proper_euler() {
                proper_angles
            } else {
                tait_bryan_angles
            };
            let seq = axes.to_string();
            for intrinsic in [true, false] {
                let matrices = euler2matrix(&angles, &seq, intrinsic, true).unwrap();
                let recovered = matrix2euler(&matrices, &seq, intrinsic, true).unwrap();
                for (got, want) in recovered.iter().zip(angles.iter()) {
                    assert_angles_close(*got, *want, &format!("{} intrinsic={}", seq, intrinsic));
                }
            }
        }
    }

    #[test]
    fn test_left_handed_negates_angles() {
        // Middle angle negative so the negated triple is in the right handed principal range.
        let angles = [[30.0, -60.0, 75.0]];
        for intrinsic in [true, false] {
            let left = euler2matrix(&angles, "zyz", intrinsic, false).unwrap();
            let right = euler2matrix(&[[-30.0, 60.0, -75.0]], "zyz", intrinsic, true).unwrap();
            assert!((left[0] - right[0]).amax() < 1e-15);

            let recovered = matrix2euler(&left, "zyz", intrinsic, false).unwrap();
            assert_angles_close(recovered[0], angles[0], "left handed zyz");
        }
    }

    #[test]
    fn test_solver_dispatch_is_sequence_specific() {
        // zxz angles decoded with the zyz solver must not come back unchanged.
        let matrices = euler2matrix(&[[30.0, 60.0, 75.0]], "zxz", false, true).unwrap();
        let as_zyz = matrix2euler(&matrices, "zyz", false, true).unwrap();
        assert!((as_zyz[0][0] - 30.0).abs() > 1.0);
        assert!((as_zyz[0][1] - 60.0).abs() < TOL);
    }

    #[test]
    fn test_gimbal_lock_zero_middle_angle() {
        let matrices = euler2matrix(&[[40.0, 0.0, 25.0]], "zxz", false, true).unwrap();
        let angles = matrix2euler(&matrices, "zxz", false, true).unwrap();
        assert_angles_close(angles[0], [65.0, 0.0, 0.0], "zxz middle 0");
    }

    #[test]
    fn test_gimbal_lock_half_turn_middle_angle() {
        let matrices = euler2matrix(&[[40.0, 180.0, 25.0]], "zxz", false, true).unwrap();
        let angles = matrix2euler(&matrices, "zxz", false, true).unwrap();
        assert_angles_close(angles[0], [15.0, 180.0, 0.0], "zxz middle 180");
    }

    #[test]
    fn test_gimbal_lock_tait_bryan() {
        let matrices = euler2matrix(&[[20.0, 90.0, 10.0]], "xyz", false, true).unwrap();
        let angles = matrix2euler(&matrices, "xyz", false, true).unwrap();
        assert_eq!(angles[0][2], 0.0);
        assert!((angles[0][1] - 90.0).abs() < 1e-6);

        let back = euler2matrix(&angles, "xyz", false, true).unwrap();
        assert!((back[0] - matrices[0]).amax() < 1e-6);
    }

    #[test]
    fn test_tolerance_widens_gimbal_region() {
        // sin(0.1 deg) ~ 1.7e-3 sits between the two tolerances.
        let matrices = euler2matrix(&[[40.0, 0.1, 25.0]], "zyz", true, true).unwrap();

        let loose = DecompositionConfig::new(1e-2);
        let locked = decompose_with_config(&matrices, "zyz", true, true, &loose).unwrap();
        assert_eq!(locked[0][0], 0.0);
        assert!((locked[0][2] - 65.0).abs() < 1e-3);

        let exact = matrix2euler(&matrices, "zyz", true, true).unwrap();
        assert_angles_close(exact[0], [40.0, 0.1, 25.0], "default tolerance");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = DecompositionConfig::new(f64::NAN);
        let err = decompose_with_config(&[Matrix3::identity()], "zyz", true, true, &bad).unwrap_err();
        assert!(matches!(err, EulerError::Config(_)));
    }

    #[test]
    fn test_invalid_sequence() {
        let err = matrix2euler(&[Matrix3::identity()], "xyy", true, true).unwrap_err();
        assert_eq!(err, EulerError::InvalidAxisSequence("xyy".to_string()));
    }

    #[test]
    fn test_identity_decomposes_to_zero() {
        for axes in AxisSequence::all() {
            let angles = matrix2euler_one(&Matrix3::identity(), &axes.to_string(), true, true).unwrap();
            for angle in angles {
                assert!(angle.abs() < TOL, "{} gave {:?}", axes, angles);
            }
        }
    }
}
