//! Rounding division, Euclidean remainder, gcd and lcm on `MpInt`.
//!
//! Each function dispatches like the operators: the `i64` formulas from
//! [`crate::math`] when both operands are small, the exact large-integer
//! versions otherwise. Both paths produce identical values for every input.

use crate::large::LargeInt;
use crate::math;
use crate::overflow::div_would_overflow;
use crate::MpInt;

/// Absolute value.
#[inline]
pub fn abs(x: &MpInt) -> MpInt {
    if x.is_negative() {
        -x
    } else {
        x.clone()
    }
}

/// Quotient rounded toward negative infinity.
///
/// # Panics
///
/// Panics if `rhs` is zero.
#[inline]
pub fn floor_div(lhs: &MpInt, rhs: &MpInt) -> MpInt {
    if let (Some(x), Some(y)) = (lhs.small_value(), rhs.small_value()) {
        if div_would_overflow(x, y) {
            return -lhs;
        }
        return MpInt::new(math::floor_div(x, y));
    }
    MpInt::promote("floor_div", lhs, rhs, LargeInt::floor_div)
}

/// Quotient rounded toward positive infinity.
///
/// # Panics
///
/// Panics if `rhs` is zero.
#[inline]
pub fn ceil_div(lhs: &MpInt, rhs: &MpInt) -> MpInt {
    if let (Some(x), Some(y)) = (lhs.small_value(), rhs.small_value()) {
        if div_would_overflow(x, y) {
            return -lhs;
        }
        return MpInt::new(math::ceil_div(x, y));
    }
    MpInt::promote("ceil_div", lhs, rhs, LargeInt::ceil_div)
}

/// Euclidean remainder, always in `[0, rhs)`.
///
/// # Panics
///
/// Panics unless `rhs >= 1`.
#[inline]
pub fn modulo(lhs: &MpInt, rhs: &MpInt) -> MpInt {
    if let (Some(x), Some(y)) = (lhs.small_value(), rhs.small_value()) {
        return MpInt::new(math::modulo(x, y));
    }
    MpInt::promote("modulo", lhs, rhs, LargeInt::modulo)
}

/// Greatest common divisor; `gcd(0, 0) == 0`.
///
/// # Panics
///
/// Panics if either operand is negative.
#[inline]
pub fn gcd(a: &MpInt, b: &MpInt) -> MpInt {
    if let (Some(x), Some(y)) = (a.small_value(), b.small_value()) {
        return MpInt::new(math::gcd(x, y));
    }
    MpInt::promote("gcd", a, b, LargeInt::gcd)
}

/// Least common multiple of the absolute values; zero if either is zero.
pub fn lcm(a: &MpInt, b: &MpInt) -> MpInt {
    if a.small_value().is_some() && b.small_value().is_some() {
        if a.is_zero() || b.is_zero() {
            return MpInt::ZERO;
        }
        let x = abs(a);
        let y = abs(b);
        let divisor = gcd(&x, &y);
        return (&x * &y).div_by_positive(&divisor);
    }
    MpInt::promote("lcm", a, b, LargeInt::lcm)
}

/// Greatest common divisor of the absolute values of a sequence.
///
/// An empty sequence yields zero, the identity of gcd. Stops early once the
/// running gcd reaches one.
#[tracing::instrument(level = "trace", skip_all)]
pub fn gcd_range<'a, I>(values: I) -> MpInt
where
    I: IntoIterator<Item = &'a MpInt>,
{
    let mut result = MpInt::ZERO;
    for value in values {
        result = gcd(&result, &abs(value));
        if result == 1 {
            break;
        }
    }
    result
}

impl MpInt {
    /// Absolute value. See [`abs`].
    #[inline]
    pub fn abs(&self) -> Self {
        abs(self)
    }

    /// See [`floor_div`].
    #[inline]
    pub fn floor_div(&self, rhs: &Self) -> Self {
        floor_div(self, rhs)
    }

    /// See [`ceil_div`].
    #[inline]
    pub fn ceil_div(&self, rhs: &Self) -> Self {
        ceil_div(self, rhs)
    }

    /// See [`modulo`].
    #[inline]
    pub fn modulo(&self, rhs: &Self) -> Self {
        modulo(self, rhs)
    }

    /// See [`gcd`].
    #[inline]
    pub fn gcd(&self, rhs: &Self) -> Self {
        gcd(self, rhs)
    }

    /// See [`lcm`].
    #[inline]
    pub fn lcm(&self, rhs: &Self) -> Self {
        lcm(self, rhs)
    }

    /// Truncating division, or `None` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        (!rhs.is_zero()).then(|| self / rhs)
    }

    /// Truncating remainder, or `None` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        (!rhs.is_zero()).then(|| self % rhs)
    }

    /// Floor division, or `None` if `rhs` is zero.
    pub fn checked_floor_div(&self, rhs: &Self) -> Option<Self> {
        (!rhs.is_zero()).then(|| floor_div(self, rhs))
    }

    /// Ceiling division, or `None` if `rhs` is zero.
    pub fn checked_ceil_div(&self, rhs: &Self) -> Option<Self> {
        (!rhs.is_zero()).then(|| ceil_div(self, rhs))
    }

    /// Euclidean remainder, or `None` unless `rhs >= 1`.
    pub fn checked_modulo(&self, rhs: &Self) -> Option<Self> {
        rhs.is_positive().then(|| modulo(self, rhs))
    }
}
