//! Types for IEEE 754 single-precision decomposition.

use serde::{Deserialize, Serialize};

/// Width of the exponent field in bits.
pub const EXPONENT_BITS: u32 = 8;

/// Width of the fraction field in bits.
pub const FRACTION_BITS: u32 = 23;

/// The single-precision exponent bias.
pub const EXPONENT_BIAS: i32 = 127;

/// Classification of a decomposed value by its exponent and fraction
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatClass {
    /// All-zero exponent and fraction.
    Zero,
    /// All-zero exponent, nonzero fraction — no implicit leading 1.
    Subnormal,
    /// Exponent between the two reserved patterns.
    Normal,
    /// All-one exponent, zero fraction.
    Infinite,
    /// All-one exponent, nonzero fraction.
    NaN,
}

impl FloatClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Subnormal => "subnormal",
            Self::Normal => "normal",
            Self::Infinite => "infinite",
            Self::NaN => "nan",
        }
    }

    /// Whether the normalized formula with an implicit leading 1 applies.
    pub fn has_implicit_one(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Decomposition of a 32-bit IEEE 754 encoding into its three fields.
///
/// Invariant: `sign_bit`, `exponent_bits`, and `fraction_bits` concatenate
/// to exactly the 32-bit binary of `bits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatDecomposition {
    /// The input after rounding to the nearest representable binary32
    /// value.
    pub value: f32,
    /// The full 32-bit encoding.
    pub bits: u32,
    /// Sign bit (0 positive, 1 negative).
    pub sign: u32,
    /// Biased exponent field (0-255).
    pub biased_exponent: u32,
    /// Exponent with the bias of 127 removed.
    pub unbiased_exponent: i32,
    /// 23-bit fraction field.
    pub fraction: u32,
    /// Sign bit as a 1-character bit string.
    pub sign_bit: String,
    /// Exponent field as an 8-character zero-padded bit string.
    pub exponent_bits: String,
    /// Fraction field as a 23-character zero-padded bit string.
    pub fraction_bits: String,
}

impl FloatDecomposition {
    /// Concatenation of the three field strings — always the 32-bit
    /// encoding of `value`.
    pub fn encoding(&self) -> String {
        format!(
            "{}{}{}",
            self.sign_bit, self.exponent_bits, self.fraction_bits
        )
    }

    /// Classify the value from its fields: all-zero exponent means
    /// zero/subnormal, all-one means infinity/NaN.
    pub fn class(&self) -> FloatClass {
        let exponent_max = (1 << EXPONENT_BITS) - 1;
        match (self.biased_exponent, self.fraction) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (e, 0) if e == exponent_max => FloatClass::Infinite,
            (e, _) if e == exponent_max => FloatClass::NaN,
            _ => FloatClass::Normal,
        }
    }
}
