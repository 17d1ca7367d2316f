mod float;
mod float_compare;

pub use float::*;
pub use float_compare::*;
