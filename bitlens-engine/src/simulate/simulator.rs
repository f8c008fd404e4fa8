//! Bit-level operation simulation.

use bitlens_core::{ParseError, Word32};
use tracing::debug;

use crate::radix::converter::parse_i32;

use super::types::{Operation, OperationTrace, TraceStep};

/// Placeholder character for bits a partial result has not computed yet.
const PLACEHOLDER: char = '.';

/// Shift traces saturate here: one more single-bit shift past 32
/// positions is a fixed point of the word (all zeros after a left shift,
/// all sign bits after an arithmetic right shift), so the final word is
/// unaffected by the cap.
const MAX_SHIFT_STEPS: usize = Word32::BITS;

/// Simulates operations over 32-bit two's-complement words, producing an
/// ordered step trace and the declared integer result.
pub struct OperationSimulator;

impl OperationSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Simulate `operation` over the textual operands.
    ///
    /// `text2` is required for every operation except `not`, which
    /// ignores it entirely. Declared results use natural integer
    /// arithmetic; the traced bit strings wrap at the fixed width, and
    /// both agree at every step.
    pub fn simulate(
        &self,
        operation: Operation,
        text1: &str,
        text2: Option<&str>,
    ) -> Result<OperationTrace, ParseError> {
        let a = Word32::from_i32(parse_i32(text1)?);

        let trace = match operation {
            Operation::Add => {
                let b = second_word(operation, text2)?;
                simulate_add(a, b)
            }
            Operation::Subtract => {
                let b = second_word(operation, text2)?;
                simulate_subtract(a, b)
            }
            Operation::And => {
                let b = second_word(operation, text2)?;
                bitwise_trace(operation, a, Some(b), a.and(b))
            }
            Operation::Or => {
                let b = second_word(operation, text2)?;
                bitwise_trace(operation, a, Some(b), a.or(b))
            }
            Operation::Xor => {
                let b = second_word(operation, text2)?;
                bitwise_trace(operation, a, Some(b), a.xor(b))
            }
            Operation::Not => bitwise_trace(operation, a, None, a.not()),
            Operation::ShiftLeft | Operation::ShiftRight => {
                let amount = second_i32(operation, text2)?;
                shift_trace(operation, a, amount)
            }
        };

        debug!(
            operation = operation.name(),
            result = trace.result,
            steps = trace.steps.len(),
            "simulated operation"
        );

        Ok(trace)
    }
}

impl Default for OperationSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the required second operand of a binary operation.
fn second_i32(operation: Operation, text2: Option<&str>) -> Result<i32, ParseError> {
    let text = text2.ok_or_else(|| ParseError::MissingOperand {
        operation: operation.name().to_string(),
    })?;
    parse_i32(text)
}

fn second_word(operation: Operation, text2: Option<&str>) -> Result<Word32, ParseError> {
    second_i32(operation, text2).map(Word32::from_i32)
}

/// A run of placeholder characters for not-yet-computed high bits.
fn placeholder_run(len: usize) -> String {
    String::from(PLACEHOLDER).repeat(len)
}

/// Bit-serial addition: one step per bit position from 31 (least
/// significant) to 0 (most significant), carrying across the pass.
///
/// `base_index` offsets the step ordinals so subtraction can splice the
/// addition pass after its rewrite step.
fn ripple_add_steps(a: Word32, b: Word32, base_index: usize) -> Vec<TraceStep> {
    let operands = vec![a.bit_string(), b.bit_string()];
    let mut steps = Vec::with_capacity(Word32::BITS + 1);

    // Opening snapshot: both operands, nothing computed yet.
    steps.push(
        TraceStep::new(base_index, "+")
            .with_operands(operands.clone())
            .with_result(placeholder_run(Word32::BITS)),
    );

    let mut carry = 0u8;
    let mut computed = String::new();
    for pos in (0..Word32::BITS).rev() {
        let sum = a.bit(pos) + b.bit(pos) + carry;
        carry = u8::from(sum >= 2);
        computed.insert(0, char::from(b'0' + (sum % 2)));

        let mut result = placeholder_run(pos);
        result.push_str(&computed);

        steps.push(
            TraceStep::new(base_index + Word32::BITS - pos, "+")
                .with_operands(operands.clone())
                .with_carry(carry)
                .with_position(pos)
                .with_result(result),
        );
    }

    steps
}

fn simulate_add(a: Word32, b: Word32) -> OperationTrace {
    // Natural arithmetic for the declared result; the trace wraps.
    let result = a.to_i32() as i64 + b.to_i32() as i64;
    OperationTrace {
        operation: Operation::Add,
        steps: ripple_add_steps(a, b, 0),
        result,
        result_bits: Word32::from_i64(result).bit_string(),
    }
}

/// Subtraction reduces to addition of the two's-complement negation of
/// the second operand: a rewrite step, then the full addition pass.
fn simulate_subtract(a: Word32, b: Word32) -> OperationTrace {
    let result = a.to_i32() as i64 - b.to_i32() as i64;
    let neg_b = b.negate();

    let mut steps = vec![TraceStep::new(0, "-")
        .with_operands(vec![a.bit_string(), b.bit_string()])
        .with_result(placeholder_run(Word32::BITS))];
    steps.extend(ripple_add_steps(a, neg_b, 1));

    OperationTrace {
        operation: Operation::Subtract,
        steps,
        result,
        result_bits: Word32::from_i64(result).bit_string(),
    }
}

/// Single-step trace for the bitwise operations (`and`/`or`/`xor`/`not`).
fn bitwise_trace(
    operation: Operation,
    a: Word32,
    b: Option<Word32>,
    result_word: Word32,
) -> OperationTrace {
    let mut operands = vec![a.bit_string()];
    if let Some(b) = b {
        operands.push(b.bit_string());
    }

    OperationTrace {
        operation,
        steps: vec![TraceStep::new(0, operation.symbol())
            .with_operands(operands)
            .with_result(result_word.bit_string())],
        result: result_word.to_i32() as i64,
        result_bits: result_word.bit_string(),
    }
}

/// Iterative shift trace: one step per single-position shift.
///
/// Left shifts drop the most significant bit and append a zero; right
/// shifts are arithmetic (the sign bit is replicated). The declared
/// result is the signed decode of the final word, so the value and the
/// bit strings agree at every step. Negative amounts shift zero times.
fn shift_trace(operation: Operation, a: Word32, amount: i32) -> OperationTrace {
    let left = operation == Operation::ShiftLeft;
    let count = usize::try_from(amount).unwrap_or(0).min(MAX_SHIFT_STEPS);

    let mut steps = vec![TraceStep::new(0, operation.symbol())
        .with_operands(vec![a.bit_string()])
        .with_result(a.bit_string())];

    let mut word = a;
    for shift in 1..=count {
        let before = word;
        word = if left { word.shl1() } else { word.sar1() };
        steps.push(
            TraceStep::new(shift, operation.symbol())
                .with_operands(vec![before.bit_string()])
                .with_position(shift)
                .with_result(word.bit_string()),
        );
    }

    OperationTrace {
        operation,
        steps,
        result: word.to_i32() as i64,
        result_bits: word.bit_string(),
    }
}
