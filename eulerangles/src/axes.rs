//! Coordinate axes and validated Euler axis sequences.
//!
//! An Euler axis sequence is three elemental rotation axes with no two
//! consecutive axes equal. There are exactly twelve of them:
//!
//! - six *proper* Euler sequences, whose first and last axes match (`zxz`, `zyz`, ...)
//! - six *Tait-Bryan* sequences, which use all three axes (`xyz`, `zyx`, ...)
//!
//! [`AxisSequence`] can only hold one of those twelve values, so code that
//! receives one never has to re-validate it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EulerError, Result};

/// A coordinate axis of a right handed coordinate system.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Row/column index of this axis in a 3x3 matrix.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    fn from_char(c: char) -> Option<Axis> {
        match c.to_ascii_lowercase() {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }
}

impl FromStr for Axis {
    type Err = EulerError;

    /// Parses `"x"`, `" Y "`, `"z"` etc. Surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::from_char(c).ok_or_else(|| EulerError::InvalidAxis(s.to_string())),
            _ => Err(EulerError::InvalidAxis(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the twelve valid Euler axis sequences.
///
/// Variants are named after their axes in application order, `Zxz` is
/// a rotation about z, then x, then z again.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum AxisSequence {
    Xyx,
    Xzx,
    Yxy,
    Yzy,
    Zxz,
    Zyz,
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl AxisSequence {
    /// Build a sequence from three axes, rejecting adjacent repeats.
    pub fn new(first: Axis, second: Axis, third: Axis) -> Result<Self> {
        use Axis::*;
        let sequence = match (first, second, third) {
            (X, Y, X) => AxisSequence::Xyx,
            (X, Z, X) => AxisSequence::Xzx,
            (Y, X, Y) => AxisSequence::Yxy,
            (Y, Z, Y) => AxisSequence::Yzy,
            (Z, X, Z) => AxisSequence::Zxz,
            (Z, Y, Z) => AxisSequence::Zyz,
            (X, Y, Z) => AxisSequence::Xyz,
            (X, Z, Y) => AxisSequence::Xzy,
            (Y, X, Z) => AxisSequence::Yxz,
            (Y, Z, X) => AxisSequence::Yzx,
            (Z, X, Y) => AxisSequence::Zxy,
            (Z, Y, X) => AxisSequence::Zyx,
            _ => {
                return Err(EulerError::InvalidAxisSequence(format!("{}{}{}", first, second, third)))
            }
        };
        Ok(sequence)
    }

    /// All twelve valid sequences, proper Euler sequences first.
    pub fn all() -> [AxisSequence; 12] {
        [
            AxisSequence::Xyx,
            AxisSequence::Xzx,
            AxisSequence::Yxy,
            AxisSequence::Yzy,
            AxisSequence::Zxz,
            AxisSequence::Zyz,
            AxisSequence::Xyz,
            AxisSequence::Xzy,
            AxisSequence::Yxz,
            AxisSequence::Yzx,
            AxisSequence::Zxy,
            AxisSequence::Zyx,
        ]
    }

    pub fn axes(&self) -> [Axis; 3] {
        use Axis::*;
        match self {
            AxisSequence::Xyx => [X, Y, X],
            AxisSequence::Xzx => [X, Z, X],
            AxisSequence::Yxy => [Y, X, Y],
            AxisSequence::Yzy => [Y, Z, Y],
            AxisSequence::Zxz => [Z, X, Z],
            AxisSequence::Zyz => [Z, Y, Z],
            AxisSequence::Xyz => [X, Y, Z],
            AxisSequence::Xzy => [X, Z, Y],
            AxisSequence::Yxz => [Y, X, Z],
            AxisSequence::Yzx => [Y, Z, X],
            AxisSequence::Zxy => [Z, X, Y],
            AxisSequence::Zyx => [Z, Y, X],
        }
    }

    pub fn first(&self) -> Axis {
        self.axes()[0]
    }

    pub fn second(&self) -> Axis {
        self.axes()[1]
    }

    pub fn third(&self) -> Axis {
        self.axes()[2]
    }

    /// The same axes in reverse order. Reversal keeps neighbours adjacent, so
    /// the result is always valid.
    pub fn reversed(&self) -> AxisSequence {
        match self {
            AxisSequence::Xyz => AxisSequence::Zyx,
            AxisSequence::Xzy => AxisSequence::Yzx,
            AxisSequence::Yxz => AxisSequence::Zxy,
            AxisSequence::Yzx => AxisSequence::Xzy,
            AxisSequence::Zxy => AxisSequence::Yxz,
            AxisSequence::Zyx => AxisSequence::Xyz,
            proper => *proper,
        }
    }

    /// `true` for sequences whose first and last axes match (`zxz`, `yzy`, ...).
    pub fn is_proper_euler(&self) -> bool {
        let [first, _, third] = self.axes();
        first == third
    }

    /// `true` for sequences using all three axes (`xyz`, `zyx`, ...).
    pub fn is_tait_bryan(&self) -> bool {
        !self.is_proper_euler()
    }
}

impl FromStr for AxisSequence {
    type Err = EulerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || EulerError::InvalidAxisSequence(s.to_string());
        let axes: Vec<Axis> = s
            .trim()
            .chars()
            .map(Axis::from_char)
            .collect::<Option<Vec<Axis>>>()
            .ok_or_else(invalid)?;

        match axes.as_slice() {
            [a, b, c] => AxisSequence::new(*a, *b, *c).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for AxisSequence {
    type Error = EulerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<&str> for AxisSequence {
    type Error = EulerError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl From<AxisSequence> for String {
    fn from(value: AxisSequence) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AxisSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = self.axes();
        write!(f, "{}{}{}", first, second, third)
    }
}
