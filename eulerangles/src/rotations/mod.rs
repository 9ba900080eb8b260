//! Elemental rotation matrices and their composition.

mod composition;
mod elemental;
mod utils;

pub use composition::*;
pub use elemental::*;
pub use utils::*;
