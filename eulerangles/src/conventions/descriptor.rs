use std::fmt;
use std::str::FromStr;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::axes::AxisSequence;
use crate::config::DecompositionConfig;
use crate::errors::{EulerError, Result};
use crate::eulers::{angles_to_matrices, matrices_to_angles};
use crate::rotations::CompositionMode;

/// Whether Euler angles rotate the reference (passive) or the particle (active).
///
/// Two conventions that disagree here describe inverse rotations, so
/// converting between them transposes the rotation matrix.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum ReferenceFrame {
    #[default]
    RotateReference,
    RotateParticle,
}

impl ReferenceFrame {
    pub fn is_passive(self) -> bool {
        self == ReferenceFrame::RotateReference
    }
}

impl FromStr for ReferenceFrame {
    type Err = EulerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().replace('_', " ").to_lowercase().as_str() {
            "rotate reference" | "rr" | "rotref" | "passive" => Ok(ReferenceFrame::RotateReference),
            "rotate particle" | "rp" | "rotpart" | "active" => Ok(ReferenceFrame::RotateParticle),
            _ => Err(EulerError::InvalidReferenceFrame(s.to_string())),
        }
    }
}

impl TryFrom<String> for ReferenceFrame {
    type Error = EulerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ReferenceFrame> for String {
    fn from(value: ReferenceFrame) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceFrame::RotateReference => write!(f, "rotate reference"),
            ReferenceFrame::RotateParticle => write!(f, "rotate particle"),
        }
    }
}

/// Software packages with a built-in convention.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Software {
    /// RELION
    Relion,
    /// Dynamo
    Dynamo,
    /// Warp
    Warp,
    /// M, Warp's multi-particle refinement companion
    M,
}

impl Software {
    pub fn all() -> Vec<Software> {
        vec![Software::Relion, Software::Dynamo, Software::Warp, Software::M]
    }

    /// Registry key, always lowercase.
    pub fn name(&self) -> &'static str {
        match self {
            Software::Relion => "relion",
            Software::Dynamo => "dynamo",
            Software::Warp => "warp",
            Software::M => "m",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Software::Relion => "RELION",
            Software::Dynamo => "Dynamo",
            Software::Warp => "Warp",
            Software::M => "M",
        }
    }

    pub fn descriptor(&self) -> ConventionDescriptor {
        ConventionDescriptor::from_software(*self)
    }
}

impl fmt::Display for Software {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Software {
    type Err = EulerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "relion" => Ok(Software::Relion),
            "dynamo" => Ok(Software::Dynamo),
            "warp" => Ok(Software::Warp),
            "m" => Ok(Software::M),
            _ => Err(EulerError::UnknownConvention(s.to_string())),
        }
    }
}

/// Everything needed to interpret a set of Euler angles.
///
/// Descriptors are plain values filled in at construction. JSON field names
/// follow the struct, with `right_handed_rotation` accepted for
/// `right_handed` and `reference_frame` defaulting to rotate reference:
///
/// ```json
/// { "name": "relion", "axes": "zyz", "intrinsic": true, "right_handed": true }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConventionDescriptor {
    pub name: String,
    pub axes: AxisSequence,
    pub intrinsic: bool,
    #[serde(alias = "right_handed_rotation")]
    pub right_handed: bool,
    #[serde(default)]
    pub reference_frame: ReferenceFrame,
}

impl ConventionDescriptor {
    pub fn new(
        name: impl Into<String>,
        axes: AxisSequence,
        intrinsic: bool,
        right_handed: bool,
        reference_frame: ReferenceFrame,
    ) -> Self {
        Self {
            name: name.into(),
            axes,
            intrinsic,
            right_handed,
            reference_frame,
        }
    }

    /// Build a descriptor from textual fields, validating the axes and frame.
    pub fn parse(
        name: &str,
        axes: &str,
        intrinsic: bool,
        right_handed: bool,
        reference_frame: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            name,
            axes.parse()?,
            intrinsic,
            right_handed,
            reference_frame.parse()?,
        ))
    }

    /// RELION: ZYZ, intrinsic, right handed, rotate reference.
    pub fn relion() -> Self {
        Self::new(
            Software::Relion.name(),
            AxisSequence::Zyz,
            true,
            true,
            ReferenceFrame::RotateReference,
        )
    }

    /// Dynamo: ZXZ, extrinsic, right handed, rotate reference.
    pub fn dynamo() -> Self {
        Self::new(
            Software::Dynamo.name(),
            AxisSequence::Zxz,
            false,
            true,
            ReferenceFrame::RotateReference,
        )
    }

    /// Warp uses the RELION convention.
    pub fn warp() -> Self {
        Self {
            name: Software::Warp.name().to_string(),
            ..Self::relion()
        }
    }

    /// M shares Warp's convention.
    pub fn m() -> Self {
        Self {
            name: Software::M.name().to_string(),
            ..Self::warp()
        }
    }

    pub fn from_software(software: Software) -> Self {
        match software {
            Software::Relion => Self::relion(),
            Software::Dynamo => Self::dynamo(),
            Software::Warp => Self::warp(),
            Software::M => Self::m(),
        }
    }

    pub fn mode(&self) -> CompositionMode {
        CompositionMode::from_intrinsic(self.intrinsic)
    }

    /// Rotation matrices described by angles in this convention.
    pub fn compose(&self, euler_angles: &[[f64; 3]]) -> Vec<Matrix3<f64>> {
        angles_to_matrices(euler_angles, self.axes, self.mode(), self.right_handed)
    }

    /// Angles in this convention for the given rotation matrices.
    pub fn decompose(&self, rotation_matrices: &[Matrix3<f64>]) -> Vec<[f64; 3]> {
        self.decompose_with(rotation_matrices, &DecompositionConfig::default())
    }

    pub fn decompose_with(
        &self,
        rotation_matrices: &[Matrix3<f64>],
        config: &DecompositionConfig,
    ) -> Vec<[f64; 3]> {
        matrices_to_angles(rotation_matrices, self.axes, self.mode(), self.right_handed, config)
    }

    /// `true` when converting between the two needs a transposed matrix.
    pub fn needs_inversion(&self, other: &ConventionDescriptor) -> bool {
        self.reference_frame != other.reference_frame
    }
}

impl fmt::Display for ConventionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}, {})",
            self.name,
            self.axes,
            self.mode(),
            if self.right_handed { "right handed" } else { "left handed" },
            self.reference_frame
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_frame_aliases() {
        for s in ["rotate reference", "Rotate_Reference", "rr", " rotref ", "passive"] {
            assert_eq!(s.parse::<ReferenceFrame>().unwrap(), ReferenceFrame::RotateReference, "{}", s);
        }
        for s in ["rotate particle", "ROTATE_PARTICLE", "rp", "rotpart", "active"] {
            assert_eq!(s.parse::<ReferenceFrame>().unwrap(), ReferenceFrame::RotateParticle, "{}", s);
        }
        assert_eq!(
            "rotate both".parse::<ReferenceFrame>(),
            Err(EulerError::InvalidReferenceFrame("rotate both".to_string()))
        );
    }

    #[test]
    fn test_presets() {
        let relion = ConventionDescriptor::relion();
        assert_eq!(relion.axes, AxisSequence::Zyz);
        assert!(relion.intrinsic);
        assert!(relion.right_handed);
        assert_eq!(relion.reference_frame, ReferenceFrame::RotateReference);

        let dynamo = ConventionDescriptor::dynamo();
        assert_eq!(dynamo.axes, AxisSequence::Zxz);
        assert!(!dynamo.intrinsic);
        assert_eq!(dynamo.mode(), CompositionMode::Extrinsic);

        assert_eq!(ConventionDescriptor::warp().name, "warp");
        assert_eq!(ConventionDescriptor::m().name, "m");
        assert_eq!(ConventionDescriptor::m().axes, AxisSequence::Zyz);
        assert!(!relion.needs_inversion(&dynamo));
    }

    #[test]
    fn test_from_software_matches_names() {
        for software in Software::all() {
            let descriptor = software.descriptor();
            assert_eq!(descriptor.name, software.name());
            assert_eq!(software.name().parse::<Software>().unwrap(), software);
        }
        assert!(matches!("chimera".parse::<Software>(), Err(EulerError::UnknownConvention(_))));
    }

    #[test]
    fn test_parse_validates_fields() {
        let descriptor = ConventionDescriptor::parse("custom", "XYZ", false, false, "rp").unwrap();
        assert_eq!(descriptor.axes, AxisSequence::Xyz);
        assert_eq!(descriptor.reference_frame, ReferenceFrame::RotateParticle);

        assert!(matches!(
            ConventionDescriptor::parse("bad", "xxz", true, true, "rr"),
            Err(EulerError::InvalidAxisSequence(_))
        ));
        assert!(matches!(
            ConventionDescriptor::parse("bad", "zyz", true, true, "sideways"),
            Err(EulerError::InvalidReferenceFrame(_))
        ));
    }

    #[test]
    fn test_descriptor_json() {
        let json = r#"{"name": "legacy", "axes": "ZXZ", "intrinsic": false, "right_handed_rotation": true}"#;
        let descriptor: ConventionDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.axes, AxisSequence::Zxz);
        assert!(descriptor.right_handed);
        assert_eq!(descriptor.reference_frame, ReferenceFrame::RotateReference);

        let written = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(written["axes"], "zxz");
        assert_eq!(written["reference_frame"], "rotate reference");
        assert_eq!(written["right_handed"], true);
    }

    #[test]
    fn test_descriptor_round_trips_angles() {
        let dynamo = ConventionDescriptor::dynamo();
        let matrices = dynamo.compose(&[[30.0, 60.0, 75.0]]);
        let angles = dynamo.decompose(&matrices);
        for (got, want) in angles[0].iter().zip([30.0, 60.0, 75.0]) {
            assert!((got - want).abs() < 1e-9);
        }
    }
}
