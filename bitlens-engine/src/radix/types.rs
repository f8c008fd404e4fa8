//! Types for radix conversion.

use serde::{Deserialize, Serialize};

/// Projection of a signed 32-bit integer into its textual radix forms.
///
/// Recomputed from scratch on every conversion; carries no identity
/// beyond value equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadixView {
    /// The parsed decimal value.
    pub decimal: i32,
    /// 32-bit zero-padded binary magnitude; negative values carry a `-`
    /// prefix ahead of the padded field.
    pub binary: String,
    /// Octal magnitude, unpadded; `-` prefix for negative values.
    pub octal: String,
    /// Uppercase hexadecimal magnitude, unpadded, no `0x` prefix (the
    /// prefix is presentation and belongs to the render layer).
    pub hex: String,
    /// The 32-bit two's-complement bit string of the value.
    pub twos_complement: String,
}
