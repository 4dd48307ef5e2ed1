//! Errors for fallible conversions into and out of `MpInt`.
//!
//! Arithmetic preconditions (division by zero, negative gcd operands, ...)
//! are programmer errors and panic instead; only conversions whose success
//! depends on the value are reported through these types.

use thiserror::Error;

/// A narrowing conversion out of `MpInt` found a value that does not fit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("integer {value} does not fit in {target}")]
pub struct TryFromMpIntError {
    /// Name of the primitive type the conversion targeted.
    pub target: &'static str,
    /// Decimal rendering of the rejected value.
    pub value: String,
}

/// Parsing an `MpInt` from a decimal string failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseMpIntError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
}
