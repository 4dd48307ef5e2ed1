//! Overflow-checked 64-bit arithmetic for the small-integer fast path.
//!
//! Every function returns the two's-complement truncated result together with
//! a flag that is `true` when the exact result does not fit in an `i64`. The
//! truncated result is always produced, overflow or not.
//!
//! The default functions lower to the native `overflowing_*` intrinsics. The
//! [`portable`] module computes the same pair by sign inspection in the
//! unsigned domain; the two must agree bit-for-bit on every input.

/// Checked addition: `(x + y truncated, overflowed)`.
#[inline]
pub const fn add_overflow(x: i64, y: i64) -> (i64, bool) {
    x.overflowing_add(y)
}

/// Checked subtraction: `(x - y truncated, overflowed)`.
#[inline]
pub const fn sub_overflow(x: i64, y: i64) -> (i64, bool) {
    x.overflowing_sub(y)
}

/// Checked multiplication: `(x * y truncated, overflowed)`.
#[inline]
pub const fn mul_overflow(x: i64, y: i64) -> (i64, bool) {
    x.overflowing_mul(y)
}

/// Returns `true` if truncating division `x / y` overflows.
///
/// Only `i64::MIN / -1` does: its exact quotient `2^63` has no `i64`
/// counterpart. The same pair is the only overflowing remainder.
#[inline]
pub const fn div_would_overflow(x: i64, y: i64) -> bool {
    x == i64::MIN && y == -1
}

/// Sign-rule implementations that do not rely on compiler intrinsics.
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    reason = "two's-complement reinterpretation is the point of these functions"
)]
pub mod portable {
    /// Portable counterpart of [`super::add_overflow`].
    pub const fn add_overflow(x: i64, y: i64) -> (i64, bool) {
        let result = (x as u64).wrapping_add(y as u64) as i64;

        // positive + positive must stay positive
        if x > 0 && y > 0 {
            return (result, result <= 0);
        }
        // negative + negative must stay negative
        if x < 0 && y < 0 {
            return (result, result >= 0);
        }
        (result, false)
    }

    /// Portable counterpart of [`super::sub_overflow`].
    pub const fn sub_overflow(x: i64, y: i64) -> (i64, bool) {
        let result = (x as u64).wrapping_sub(y as u64) as i64;

        if x <= 0 && y > 0 {
            return (result, result >= 0);
        }
        if x >= 0 && y < 0 {
            return (result, result <= 0);
        }
        (result, false)
    }

    /// Portable counterpart of [`super::mul_overflow`].
    ///
    /// Works on magnitudes: the product of `|x|` and `|y|` may reach
    /// `i64::MAX + 1` when the result is negative, but only `i64::MAX` when it
    /// is positive.
    pub const fn mul_overflow(x: i64, y: i64) -> (i64, bool) {
        let ux = x.unsigned_abs();
        let uy = y.unsigned_abs();
        let magnitude = ux.wrapping_mul(uy);

        let negative = (x < 0) ^ (y < 0);
        let result = if negative {
            0u64.wrapping_sub(magnitude) as i64
        } else {
            magnitude as i64
        };

        if ux == 0 || uy == 0 {
            return (result, false);
        }

        let limit = if negative {
            i64::MAX as u64 + 1
        } else {
            i64::MAX as u64
        };
        (result, ux > limit / uy)
    }
}
