//! Unbounded-precision slow path.
//!
//! `LargeInt` wraps a `num_bigint::BigInt` and exposes the exact operations
//! `MpInt` falls back to once a value leaves the 64-bit range. It is never
//! handed out to callers directly.
//!
//! Ownership of the digit buffer is exclusive: `Clone` deep-copies and `Drop`
//! releases, so there is no manual lifetime management anywhere in the crate.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hasher;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use rustc_hash::FxHasher;

/// An arbitrary-precision signed integer.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct LargeInt(BigInt);

impl LargeInt {
    /// Borrow the backing big integer.
    #[inline]
    pub(crate) fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Unwrap into the backing big integer.
    #[inline]
    pub(crate) fn into_bigint(self) -> BigInt {
        self.0
    }

    pub(crate) fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Narrow to `i64`, or `None` if the value is out of range.
    pub(crate) fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    /// Three-way comparison against a machine integer, without allocating.
    pub(crate) fn cmp_i64(&self, other: i64) -> Ordering {
        match self.0.to_i64() {
            Some(value) => value.cmp(&other),
            // out of range: beyond every i64 in the direction of the sign
            None if self.0.is_negative() => Ordering::Less,
            None => Ordering::Greater,
        }
    }

    pub(crate) fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Quotient rounded toward negative infinity. Panics if `rhs` is zero.
    pub(crate) fn floor_div(&self, rhs: &Self) -> Self {
        if *rhs == -1 {
            return -self;
        }
        Self(self.0.div_floor(&rhs.0))
    }

    /// Quotient rounded toward positive infinity. Panics if `rhs` is zero.
    pub(crate) fn ceil_div(&self, rhs: &Self) -> Self {
        if *rhs == -1 {
            return -self;
        }
        // ceil(a / b) == -floor(-a / b)
        let negated = -&self.0;
        Self(-negated.div_floor(&rhs.0))
    }

    /// Euclidean remainder in `[0, rhs)`. Requires `rhs >= 1`.
    pub(crate) fn modulo(&self, rhs: &Self) -> Self {
        assert!(*rhs >= 1, "modulo requires a positive divisor, got {rhs}");
        let remainder = &self.0 % &rhs.0;
        if remainder.is_negative() {
            Self(remainder + &rhs.0)
        } else {
            Self(remainder)
        }
    }

    /// Greatest common divisor of two non-negative values.
    pub(crate) fn gcd(&self, rhs: &Self) -> Self {
        assert!(
            !self.is_negative() && !rhs.is_negative(),
            "gcd operands must be non-negative, got {self} and {rhs}"
        );
        Self(self.0.gcd(&rhs.0))
    }

    /// Least common multiple of the absolute values; zero if either is zero.
    pub(crate) fn lcm(&self, rhs: &Self) -> Self {
        if self.0.is_zero() || rhs.0.is_zero() {
            return Self::default();
        }
        let x = self.abs();
        let y = rhs.abs();
        let divisor = x.gcd(&y);
        &(&x * &y) / &divisor
    }

    /// Hash of the magnitude digits, with the lowest bit flipped for negative
    /// values so that `x` and `-x` land apart.
    pub(crate) fn hash_value(&self) -> u64 {
        let mut hasher = FxHasher::default();
        for digit in self.0.iter_u64_digits() {
            hasher.write_u64(digit);
        }
        let hash = hasher.finish();
        if self.0.sign() == Sign::Minus {
            hash ^ 1
        } else {
            hash
        }
    }
}

impl From<i64> for LargeInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<BigInt> for LargeInt {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

// Arithmetic

macro_rules! impl_large_binary {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl $trait<&LargeInt> for &LargeInt {
                type Output = LargeInt;

                #[inline]
                fn $method(self, rhs: &LargeInt) -> LargeInt {
                    LargeInt($trait::$method(&self.0, &rhs.0))
                }
            }

            impl $trait<i64> for &LargeInt {
                type Output = LargeInt;

                #[inline]
                fn $method(self, rhs: i64) -> LargeInt {
                    LargeInt($trait::$method(&self.0, BigInt::from(rhs)))
                }
            }
        )*
    };
}

// `Div` and `Rem` truncate toward zero; the rounding variants live above.
impl_large_binary!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl Neg for &LargeInt {
    type Output = LargeInt;

    #[inline]
    fn neg(self) -> LargeInt {
        LargeInt(-&self.0)
    }
}

// Comparisons against machine integers

impl PartialEq<i64> for LargeInt {
    fn eq(&self, other: &i64) -> bool {
        self.cmp_i64(*other) == Ordering::Equal
    }
}

impl PartialOrd<i64> for LargeInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp_i64(*other))
    }
}

// Formatting

impl fmt::Display for LargeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for LargeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
