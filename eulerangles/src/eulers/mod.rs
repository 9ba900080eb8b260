//! Euler angles to rotation matrices and back.
//!
//! Composition is generic over the axis sequence. Decomposition is not: each
//! of the twelve sequences has its own closed-form extrinsic solver in
//! `proper` or `tait_bryan`, and the intrinsic and left-handed cases are
//! derived from those.

mod from_matrix;
mod proper;
mod tait_bryan;
mod to_matrix;

pub use from_matrix::*;
pub use to_matrix::*;

/// Radians recovered by one extrinsic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Solution {
    pub radians: [f64; 3],
    pub gimbal_locked: bool,
}

pub(crate) type Solver = fn(&nalgebra::Matrix3<f64>, f64) -> Solution;

/// Clamp a matrix element into the domain of `asin`/`acos`.
pub(crate) fn unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Shared tail of every extrinsic solver.
///
/// `first` and `third` are the `(y, x)` element pairs fed to `atan2` for the
/// outer angles. Their common scale factor is the coupling term, so the length
/// of `first` decides whether the matrix is gimbal locked. In that case the
/// whole rotation is attributed to the first angle using `locked_first` and
/// the third angle is fixed at zero.
pub(crate) fn solve(
    middle: f64,
    first: (f64, f64),
    third: (f64, f64),
    locked_first: (f64, f64),
    tolerance: f64,
) -> Solution {
    if first.0.hypot(first.1) < tolerance {
        return Solution {
            radians: [locked_first.0.atan2(locked_first.1), middle, 0.0],
            gimbal_locked: true,
        };
    }

    Solution {
        radians: [first.0.atan2(first.1), middle, third.0.atan2(third.1)],
        gimbal_locked: false,
    }
}
