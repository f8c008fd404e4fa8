//! IEEE 754 single-precision decomposition — decimal text to sign,
//! exponent, and fraction fields.

pub mod decomposer;
pub mod types;

pub use decomposer::FloatDecomposer;
pub use types::{FloatClass, FloatDecomposition};
