//! Converting Euler angles from one convention to another.
//!
//! Every conversion goes through rotation matrices: compose with the source
//! convention, transpose if the two conventions rotate different things
//! (reference vs particle), decompose with the target convention.

use nalgebra::Matrix3;
use tracing::debug;

use crate::axes::AxisSequence;
use crate::config::DecompositionConfig;
use crate::conventions::{ConventionDescriptor, ConventionRegistry, Software};
use crate::errors::Result;
use crate::eulers::{angles_to_matrices, matrices_to_angles};
use crate::rotations::{invert_rotation_matrices, CompositionMode};

/// A convention given either by registry name or in full.
#[derive(Debug, Clone, PartialEq)]
pub enum Convention {
    Named(String),
    Descriptor(ConventionDescriptor),
}

impl Convention {
    /// Look up named conventions in `registry`, descriptors pass through.
    pub fn resolve<'a>(&'a self, registry: &'a ConventionRegistry) -> Result<&'a ConventionDescriptor> {
        match self {
            Convention::Named(name) => registry.get(name),
            Convention::Descriptor(descriptor) => Ok(descriptor),
        }
    }
}

impl From<&str> for Convention {
    fn from(name: &str) -> Self {
        Convention::Named(name.to_string())
    }
}

impl From<String> for Convention {
    fn from(name: String) -> Self {
        Convention::Named(name)
    }
}

impl From<ConventionDescriptor> for Convention {
    fn from(descriptor: ConventionDescriptor) -> Self {
        Convention::Descriptor(descriptor)
    }
}

impl From<&ConventionDescriptor> for Convention {
    fn from(descriptor: &ConventionDescriptor) -> Self {
        Convention::Descriptor(descriptor.clone())
    }
}

impl From<Software> for Convention {
    fn from(software: Software) -> Self {
        Convention::Descriptor(software.descriptor())
    }
}

/// Convert Euler angles between two fully specified conventions.
///
/// Angles are composed with the source parameters, the matrices are
/// transposed when `invert_matrix` is set, then decomposed with the target
/// parameters. Both axis sequences are validated before any work is done.
#[allow(clippy::too_many_arguments)]
pub fn euler2euler(
    euler_angles: &[[f64; 3]],
    source_axes: &str,
    source_intrinsic: bool,
    source_right_handed: bool,
    target_axes: &str,
    target_intrinsic: bool,
    target_right_handed: bool,
    invert_matrix: bool,
) -> Result<Vec<[f64; 3]>> {
    let source_axes: AxisSequence = source_axes.parse()?;
    let target_axes: AxisSequence = target_axes.parse()?;

    let matrices = angles_to_matrices(
        euler_angles,
        source_axes,
        CompositionMode::from_intrinsic(source_intrinsic),
        source_right_handed,
    );
    let matrices = if invert_matrix {
        invert_rotation_matrices(&matrices)
    } else {
        matrices
    };

    Ok(matrices_to_angles(
        &matrices,
        target_axes,
        CompositionMode::from_intrinsic(target_intrinsic),
        target_right_handed,
        &DecompositionConfig::default(),
    ))
}

/// Matrices for `euler_angles` in `source`, re-expressed in the frame of `target`.
fn source_matrices(
    euler_angles: &[[f64; 3]],
    source: &ConventionDescriptor,
    target: &ConventionDescriptor,
) -> Vec<Matrix3<f64>> {
    let matrices = source.compose(euler_angles);
    let invert = source.needs_inversion(target);
    debug!(
        source = %source.name,
        target = %target.name,
        count = euler_angles.len(),
        invert,
        "converting euler angles"
    );
    if invert {
        invert_rotation_matrices(&matrices)
    } else {
        matrices
    }
}

/// Convert Euler angles from `source` to `target`, looking names up in
/// `registry`.
pub fn convert_eulers_with(
    euler_angles: &[[f64; 3]],
    source: impl Into<Convention>,
    target: impl Into<Convention>,
    registry: &ConventionRegistry,
) -> Result<Vec<[f64; 3]>> {
    let source = source.into();
    let target = target.into();
    let source = source.resolve(registry)?;
    let target = target.resolve(registry)?;

    let matrices = source_matrices(euler_angles, source, target);
    Ok(target.decompose(&matrices))
}

/// Convert Euler angles from `source` to `target` with the built-in
/// conventions.
///
/// ```rust
/// use eulerangles::convert_eulers;
///
/// let relion = convert_eulers(&[[-47.273, 1.1777, -132.3]], "dynamo", "relion").unwrap();
/// assert!((relion[0][0] - 137.7).abs() < 1e-4);
/// assert!((relion[0][1] - 1.1777).abs() < 1e-4);
/// assert!((relion[0][2] - 42.727).abs() < 1e-4);
/// ```
pub fn convert_eulers(
    euler_angles: &[[f64; 3]],
    source: impl Into<Convention>,
    target: impl Into<Convention>,
) -> Result<Vec<[f64; 3]>> {
    convert_eulers_with(euler_angles, source, target, &ConventionRegistry::builtin())
}

/// [`convert_eulers`] for a single angle triple.
pub fn convert_one(
    euler_angles: [f64; 3],
    source: impl Into<Convention>,
    target: impl Into<Convention>,
) -> Result<[f64; 3]> {
    let converted = convert_eulers(&[euler_angles], source, target)?;
    Ok(converted[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::ReferenceFrame;
    use crate::errors::EulerError;

    const DYNAMO: [f64; 3] = [-47.2730, 1.1777, -132.3000];
    const RELION: [f64; 3] = [137.7000, 1.1777, 42.7270];

    fn assert_close(actual: [f64; 3], expected: [f64; 3], tolerance: f64) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < tolerance,
                "expected {:?}, got {:?}",
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_dynamo_to_relion_by_name() {
        let relion = convert_one(DYNAMO, "dynamo", "relion").unwrap();
        assert_close(relion, RELION, 1e-5);

        let dynamo = convert_one(RELION, "relion", "dynamo").unwrap();
        assert_close(dynamo, DYNAMO, 1e-5);
    }

    #[test]
    fn test_euler2euler_flat_arguments() {
        let relion = euler2euler(&[DYNAMO], "zxz", false, true, "zyz", true, true, false).unwrap();
        assert_close(relion[0], RELION, 1e-5);
    }

    #[test]
    fn test_descriptors_and_names_mix() {
        let relion = convert_eulers(&[DYNAMO], ConventionDescriptor::dynamo(), "warp").unwrap();
        assert_close(relion[0], RELION, 1e-5);

        let relion = convert_eulers(&[DYNAMO], Software::Dynamo, Software::M).unwrap();
        assert_close(relion[0], RELION, 1e-5);
    }

    #[test]
    fn test_reference_frame_mismatch_inverts() {
        let mut particle = ConventionDescriptor::relion();
        particle.reference_frame = ReferenceFrame::RotateParticle;

        let angles = [[10.0, 20.0, 30.0]];
        let converted = convert_eulers(&angles, "relion", particle).unwrap();
        let inverted = euler2euler(&angles, "zyz", true, true, "zyz", true, true, true).unwrap();
        assert_close(converted[0], inverted[0], 1e-9);

        // Rz(-30) Ry(-20) Rz(-10) == Rz(150) Ry(20) Rz(170)
        assert_close(converted[0], [150.0, 20.0, 170.0], 1e-9);
    }

    #[test]
    fn test_unknown_convention() {
        let err = convert_eulers(&[[0.0; 3]], "relion", "frealign").unwrap_err();
        assert_eq!(err, EulerError::UnknownConvention("frealign".to_string()));

        let err = convert_eulers(&[[0.0; 3]], "cistem", "relion").unwrap_err();
        assert_eq!(err, EulerError::UnknownConvention("cistem".to_string()));
    }

    #[test]
    fn test_invalid_axes_in_flat_form() {
        let err = euler2euler(&[[0.0; 3]], "zyz", true, true, "zz", true, true, false).unwrap_err();
        assert!(matches!(err, EulerError::InvalidAxisSequence(_)));
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = ConventionRegistry::builtin();
        registry.register(ConventionDescriptor::new(
            "relion_copy",
            AxisSequence::Zyz,
            true,
            true,
            ReferenceFrame::RotateReference,
        ));
        let same = convert_eulers_with(&[RELION], "relion", "relion_copy", &registry).unwrap();
        assert_close(same[0], RELION, 1e-9);
    }
}
