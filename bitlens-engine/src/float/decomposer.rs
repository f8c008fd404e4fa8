//! Decimal text to IEEE 754 fields.

use bitlens_core::ParseError;
use tracing::debug;

use super::types::{FloatDecomposition, EXPONENT_BIAS, EXPONENT_BITS, FRACTION_BITS};

/// Decomposes decimal number text into IEEE 754 single-precision fields.
pub struct FloatDecomposer;

impl FloatDecomposer {
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` as a number, round it to binary32 (round-to-nearest,
    /// ties to even — the standard library conversion), and split the
    /// encoding into sign, exponent, and fraction.
    ///
    /// Denormals, infinities, and NaN go through the same extraction; the
    /// caller can use [`FloatDecomposition::class`] to tell them apart.
    pub fn decompose(&self, text: &str) -> Result<FloatDecomposition, ParseError> {
        let trimmed = text.trim();
        let value: f32 = trimmed.parse().map_err(|_| ParseError::InvalidFloat {
            input: trimmed.to_string(),
        })?;

        let bits = value.to_bits();
        let sign = bits >> (EXPONENT_BITS + FRACTION_BITS);
        let biased_exponent = (bits >> FRACTION_BITS) & ((1 << EXPONENT_BITS) - 1);
        let fraction = bits & ((1 << FRACTION_BITS) - 1);

        debug!(input = %trimmed, bits, "float decomposition");

        Ok(FloatDecomposition {
            value,
            bits,
            sign,
            biased_exponent,
            unbiased_exponent: biased_exponent as i32 - EXPONENT_BIAS,
            fraction,
            sign_bit: format!("{:b}", sign),
            exponent_bits: format!("{:08b}", biased_exponent),
            fraction_bits: format!("{:023b}", fraction),
        })
    }
}

impl Default for FloatDecomposer {
    fn default() -> Self {
        Self::new()
    }
}
