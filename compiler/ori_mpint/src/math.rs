//! Rounding division, Euclidean remainder and gcd on `i64`.
//!
//! These are the fast-path formulas behind [`crate::floor_div`] and friends.
//! They must agree exactly with the large-integer implementations, so callers
//! route the single overflowing input (`i64::MIN / -1`) elsewhere before
//! reaching them.

use num_integer::Integer;

/// Quotient rounded toward negative infinity.
///
/// `rhs` must be non-zero and the pair must not be `(i64::MIN, -1)`.
#[inline]
pub(crate) fn floor_div(lhs: i64, rhs: i64) -> i64 {
    let quotient = lhs / rhs;
    let remainder = lhs % rhs;
    if remainder != 0 && (remainder < 0) != (rhs < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Quotient rounded toward positive infinity.
///
/// `rhs` must be non-zero and the pair must not be `(i64::MIN, -1)`.
#[inline]
pub(crate) fn ceil_div(lhs: i64, rhs: i64) -> i64 {
    let quotient = lhs / rhs;
    let remainder = lhs % rhs;
    if remainder != 0 && (remainder < 0) == (rhs < 0) {
        quotient + 1
    } else {
        quotient
    }
}

/// Euclidean remainder, always in `[0, rhs)`. Requires `rhs >= 1`.
#[inline]
pub(crate) fn modulo(lhs: i64, rhs: i64) -> i64 {
    assert!(rhs >= 1, "modulo requires a positive divisor, got {rhs}");
    let remainder = lhs % rhs;
    if remainder < 0 {
        remainder + rhs
    } else {
        remainder
    }
}

/// Greatest common divisor of two non-negative values; `gcd(0, 0) == 0`.
#[inline]
pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    assert!(a >= 0 && b >= 0, "gcd operands must be non-negative, got {a} and {b}");
    a.gcd(&b)
}
