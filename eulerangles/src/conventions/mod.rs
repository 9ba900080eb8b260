//! Euler angle conventions of cryo-EM software packages.

mod descriptor;
mod registry;

pub use descriptor::*;
pub use registry::*;
