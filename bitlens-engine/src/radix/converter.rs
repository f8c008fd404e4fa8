//! Decimal integer parsing and radix projection.

use std::num::IntErrorKind;

use bitlens_core::{ParseError, Word32};
use tracing::debug;

use super::types::RadixView;

/// Converts decimal integer text into its radix projections.
pub struct RadixConverter;

impl RadixConverter {
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` and project it into binary, octal, hexadecimal, and
    /// two's-complement forms.
    pub fn convert(&self, text: &str) -> Result<RadixView, ParseError> {
        let decimal = parse_i32(text)?;
        // Magnitude through i64 so i32::MIN does not overflow on abs.
        let magnitude = (decimal as i64).unsigned_abs();
        let sign = if decimal < 0 { "-" } else { "" };

        debug!(input = %text.trim(), decimal, "radix conversion");

        Ok(RadixView {
            decimal,
            binary: format!("{}{:032b}", sign, magnitude),
            octal: format!("{}{:o}", sign, magnitude),
            hex: format!("{}{:X}", sign, magnitude),
            twos_complement: Word32::from_i32(decimal).bit_string(),
        })
    }
}

impl Default for RadixConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Strict decimal integer parse: surrounding whitespace and an optional
/// sign are accepted, nothing else. Values outside the signed 32-bit
/// range are rejected rather than wrapped.
pub(crate) fn parse_i32(text: &str) -> Result<i32, ParseError> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseError::IntegerOutOfRange {
                    input: trimmed.to_string(),
                }
            }
            _ => ParseError::InvalidInteger {
                input: trimmed.to_string(),
            },
        }
    })?;

    i32::try_from(value).map_err(|_| ParseError::IntegerOutOfRange {
        input: trimmed.to_string(),
    })
}
