//! bitlens-engine: numeric transformation engine for 32-bit machine words.
//!
//! Three stateless components, each a pure projection from decimal text to
//! a structured, serializable result record:
//! - Radix: binary/octal/hex and two's-complement views of an integer
//! - Float: IEEE 754 single-precision field decomposition
//! - Simulate: step-by-step bit-level traces of arithmetic and bitwise
//!   operations
//!
//! The render module turns result records into display formats for the
//! caller (the UI layer lives outside this crate). The boundary functions
//! at the bottom of this file absorb parse failures into `None`, so a
//! caller never has to handle an error: bad input simply means nothing to
//! display.

pub mod float;
pub mod radix;
pub mod render;
pub mod simulate;

// Re-exports for convenience
pub use float::{FloatClass, FloatDecomposer, FloatDecomposition};
pub use radix::{RadixConverter, RadixView};
pub use render::{
    available_formats, create_renderer, group_bits, ConsoleRenderer, JsonRenderer, Renderer,
};
pub use simulate::{Operation, OperationSimulator, OperationTrace, TraceStep};

/// Project decimal integer text into its radix views.
///
/// Returns `None` when the text does not denote an in-range decimal
/// integer.
pub fn convert_radix(text: &str) -> Option<RadixView> {
    RadixConverter::new().convert(text).ok()
}

/// Decompose decimal number text into its IEEE 754 single-precision
/// fields.
///
/// Returns `None` when the text does not parse as a number.
pub fn decompose_float(text: &str) -> Option<FloatDecomposition> {
    FloatDecomposer::new().decompose(text).ok()
}

/// Simulate an operation over one or two textual decimal operands.
///
/// `selector` is one of `add`, `subtract`, `and`, `or`, `xor`, `not`,
/// `shift_left`, `shift_right`. Returns `None` for an unknown selector or
/// when a required operand does not parse.
pub fn simulate_operation(
    selector: &str,
    text1: &str,
    text2: Option<&str>,
) -> Option<OperationTrace> {
    let operation = Operation::parse(selector)?;
    OperationSimulator::new()
        .simulate(operation, text1, text2)
        .ok()
}
