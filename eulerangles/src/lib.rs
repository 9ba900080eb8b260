//! Euler angle conventions for cryo-EM software, and the rotation matrix math
//! underneath them.
//!
//! Angles are in degrees at every public boundary. Rotation matrices are
//! `nalgebra::Matrix3<f64>`; a batch of angles is `[[f64; 3]]` and a batch of
//! matrices is `[Matrix3<f64>]`.
//!
//! ```rust
//! use eulerangles::{compose, convert, decompose};
//!
//! let matrices = compose(&[[30.0, 60.0, 75.0]], "zxz", false, true).unwrap();
//! let angles = decompose(&matrices, "zxz", false, true).unwrap();
//! assert!((angles[0][1] - 60.0).abs() < 1e-9);
//!
//! let relion = convert(&[[-47.273, 1.1777, -132.3]], "dynamo", "relion").unwrap();
//! assert!((relion[0][0] - 137.7).abs() < 1e-4);
//! ```

pub mod axes;
pub mod config;
pub mod conventions;
pub mod convert;
pub mod errors;
pub mod eulers;
pub mod rotations;
pub mod shape;

pub use axes::{Axis, AxisSequence};
pub use config::DecompositionConfig;
pub use conventions::{ConventionDescriptor, ConventionRegistry, ReferenceFrame, Software};
pub use convert::{convert_eulers, convert_eulers_with, convert_one, euler2euler, Convention};
pub use errors::*;
pub use eulers::{
    angles_to_matrices, decompose_with_config, euler2matrix, euler2matrix_one, matrices_to_angles,
    matrix2euler, matrix2euler_one,
};
pub use rotations::{
    compose_rotation_matrices, compose_rotation_matrices_str, elemental_rotation,
    elemental_rotation_one, elemental_rotations, invert_rotation_matrices, is_rotation_matrix,
    matrix_to_rows, parse_mode, rotation_about, CompositionMode,
};
pub use shape::{angles_from_flat, angles_from_rows, matrices_from_flat, matrices_from_rows};

pub use convert::convert_eulers as convert;
pub use eulers::euler2matrix as compose;
pub use eulers::euler2matrix_one as compose_one;
pub use eulers::matrix2euler as decompose;
pub use eulers::matrix2euler_one as decompose_one;
