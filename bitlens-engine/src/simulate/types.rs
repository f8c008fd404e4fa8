//! Types for operation simulation.

use serde::{Deserialize, Serialize};

/// The closed set of simulated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    And,
    Or,
    Xor,
    Not,
    ShiftLeft,
    ShiftRight,
}

impl Operation {
    /// All operations, in selector order.
    pub const ALL: &'static [Operation] = &[
        Self::Add,
        Self::Subtract,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::ShiftLeft,
        Self::ShiftRight,
    ];

    /// Resolve a selector string from the closed set.
    pub fn parse(selector: &str) -> Option<Operation> {
        match selector {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "xor" => Some(Self::Xor),
            "not" => Some(Self::Not),
            "shift_left" => Some(Self::ShiftLeft),
            "shift_right" => Some(Self::ShiftRight),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::ShiftLeft => "shift_left",
            Self::ShiftRight => "shift_right",
        }
    }

    /// Display symbol used in trace steps.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        }
    }

    /// Whether the operation takes a single operand.
    pub fn is_unary(&self) -> bool {
        matches!(self, Self::Not)
    }
}

/// One structured snapshot in an operation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Step ordinal within the trace.
    pub index: usize,

    /// Operand bit strings as they stand at this step.
    pub operands: Vec<String>,

    /// Display symbol of the operator applied.
    pub operator: String,

    /// Running carry after this step (addition passes only).
    pub carry: Option<u8>,

    /// Bit position computed (addition) or shift count applied (shifts).
    pub position: Option<usize>,

    /// Partial or final result bits. High bits that have not been computed
    /// yet render as a placeholder character, never as zero.
    pub result: String,
}

impl TraceStep {
    /// Create a new trace step.
    pub fn new(index: usize, operator: &str) -> Self {
        Self {
            index,
            operands: Vec::new(),
            operator: operator.to_string(),
            carry: None,
            position: None,
            result: String::new(),
        }
    }

    /// Set the operand snapshots.
    pub fn with_operands(mut self, operands: Vec<String>) -> Self {
        self.operands = operands;
        self
    }

    /// Set the running carry.
    pub fn with_carry(mut self, carry: u8) -> Self {
        self.carry = Some(carry);
        self
    }

    /// Set the bit position or shift count.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the partial or final result bits.
    pub fn with_result(mut self, result: String) -> Self {
        self.result = result;
        self
    }
}

/// Ordered record of an operation's bit-level execution.
///
/// Invariant: the final step's `result` equals `result_bits`, the
/// two's-complement encoding of the declared integer result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationTrace {
    /// The simulated operation.
    pub operation: Operation,

    /// Ordered steps; the last step carries the final bit string.
    pub steps: Vec<TraceStep>,

    /// Declared integer result under natural (unbounded) arithmetic.
    pub result: i64,

    /// Two's-complement encoding of the declared result; results outside
    /// the signed 32-bit range wrap per the fixed width.
    pub result_bits: String,
}

impl OperationTrace {
    /// The final step of the trace.
    pub fn final_step(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::parse(op.name()), Some(*op));
        }
        assert_eq!(Operation::parse("divide"), None);
    }

    #[test]
    fn only_not_is_unary() {
        for op in Operation::ALL {
            assert_eq!(op.is_unary(), *op == Operation::Not);
        }
    }

    #[test]
    fn serde_uses_snake_case_selectors() {
        let json = serde_json::to_string(&Operation::ShiftRight).unwrap();
        assert_eq!(json, "\"shift_right\"");
    }
}
