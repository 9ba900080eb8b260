use std::fmt;
use std::str::FromStr;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::errors::{EulerError, Result};

/// How three elemental rotations are chained together.
///
/// * `Intrinsic` - each rotation is about the axes of the already rotated body,
///   `R = R1(a) * R2(b) * R3(c)`
/// * `Extrinsic` - each rotation is about the fixed world axes,
///   `R = R3(c) * R2(b) * R1(a)`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CompositionMode {
    Intrinsic,
    Extrinsic,
}

impl CompositionMode {
    pub fn from_intrinsic(intrinsic: bool) -> Self {
        if intrinsic {
            CompositionMode::Intrinsic
        } else {
            CompositionMode::Extrinsic
        }
    }

    /// Build a mode from two independent flags. Exactly one must be set.
    pub fn from_flags(intrinsic: bool, extrinsic: bool) -> Result<Self> {
        match (intrinsic, extrinsic) {
            (true, false) => Ok(CompositionMode::Intrinsic),
            (false, true) => Ok(CompositionMode::Extrinsic),
            (true, true) => Err(EulerError::InvalidCompositionMode(
                "rotations cannot be both intrinsic and extrinsic".to_string(),
            )),
            (false, false) => Err(EulerError::InvalidCompositionMode(
                "rotations must be either intrinsic or extrinsic".to_string(),
            )),
        }
    }

    pub fn is_intrinsic(self) -> bool {
        self == CompositionMode::Intrinsic
    }
}

impl FromStr for CompositionMode {
    type Err = EulerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "intrinsic" => Ok(CompositionMode::Intrinsic),
            "extrinsic" => Ok(CompositionMode::Extrinsic),
            _ => Err(EulerError::InvalidCompositionMode(format!(
                "mode must be 'intrinsic' or 'extrinsic', got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionMode::Intrinsic => write!(f, "intrinsic"),
            CompositionMode::Extrinsic => write!(f, "extrinsic"),
        }
    }
}

/// Parse `"intrinsic"` or `"extrinsic"`, anything else is an `InvalidCompositionMode`.
pub fn parse_mode(mode: &str) -> Result<CompositionMode> {
    mode.parse()
}

/// Chain one matrix from each of the three axis positions.
pub(crate) fn compose_triplet(
    m1: &Matrix3<f64>,
    m2: &Matrix3<f64>,
    m3: &Matrix3<f64>,
    mode: CompositionMode,
) -> Matrix3<f64> {
    match mode {
        CompositionMode::Intrinsic => m1 * m2 * m3,
        CompositionMode::Extrinsic => m3 * m2 * m1,
    }
}

/// Compose three batches of elemental rotation matrices element by element.
///
/// `elemental_rotations[i]` holds the matrices for the i-th axis of the sequence.
/// All three batches must have the same length.
pub fn compose_rotation_matrices(
    elemental_rotations: [&[Matrix3<f64>]; 3],
    mode: CompositionMode,
) -> Result<Vec<Matrix3<f64>>> {
    let [first, second, third] = elemental_rotations;
    if first.len() != second.len() || second.len() != third.len() {
        return Err(EulerError::ShapeError(format!(
            "elemental rotation batches differ in length: {}, {}, {}",
            first.len(),
            second.len(),
            third.len()
        )));
    }

    Ok(first
        .iter()
        .zip(second)
        .zip(third)
        .map(|((m1, m2), m3)| compose_triplet(m1, m2, m3, mode))
        .collect())
}

/// Same as [`compose_rotation_matrices`] with the mode given as text.
pub fn compose_rotation_matrices_str(
    elemental_rotations: [&[Matrix3<f64>]; 3],
    mode: &str,
) -> Result<Vec<Matrix3<f64>>> {
    compose_rotation_matrices(elemental_rotations, parse_mode(mode)?)
}
