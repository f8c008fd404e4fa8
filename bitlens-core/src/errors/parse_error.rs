//! Input parse errors.

use super::error_code::{self, BitlensErrorCode};

/// Errors produced while interpreting user-supplied numeric text.
///
/// Engine boundary functions absorb these into "no result"; the inner
/// APIs surface them so callers and tests can observe the exact kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("not a decimal integer: {input:?}")]
    InvalidInteger { input: String },

    #[error("not a decimal number: {input:?}")]
    InvalidFloat { input: String },

    #[error("integer {input:?} does not fit a signed 32-bit word")]
    IntegerOutOfRange { input: String },

    #[error("operation {operation} requires a second operand")]
    MissingOperand { operation: String },

    #[error("unknown operation selector: {selector:?}")]
    UnknownOperation { selector: String },

    #[error("not a 32-bit binary string: {input:?}")]
    InvalidBitString { input: String },
}

impl BitlensErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
