mod euler_error;
pub use euler_error::*;
