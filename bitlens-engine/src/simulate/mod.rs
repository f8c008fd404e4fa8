//! Operation simulation — step-by-step bit-level traces of arithmetic,
//! bitwise, and shift operations over 32-bit two's-complement words.

pub mod simulator;
pub mod types;

pub use simulator::OperationSimulator;
pub use types::{Operation, OperationTrace, TraceStep};
