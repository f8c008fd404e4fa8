//! Stable, machine-readable error codes.

/// Code for input parse failures.
pub const PARSE_ERROR: &str = "BL1001";

/// Code for configuration failures.
pub const CONFIG_ERROR: &str = "BL1002";

/// Maps every bitlens error to a stable code, independent of the display
/// message, so downstream consumers can match on errors without string
/// comparison.
pub trait BitlensErrorCode {
    fn error_code(&self) -> &'static str;
}
