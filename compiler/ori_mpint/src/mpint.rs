//! The `MpInt` value type.
//!
//! An `MpInt` holds either an inline `i64` (small) or an owned [`LargeInt`]
//! (large). Operations take the small path whenever both operands are small
//! and the checked result fits; everything else is recomputed exactly on the
//! large representation.
//!
//! # No implicit demotion
//!
//! A large result stays large even if its value would fit in 64 bits again.
//! Demotion happens only when the value is replaced wholesale, for example by
//! assigning a small `MpInt` or converting from an `i64`. This keeps the hot
//! path free of a renormalization check on every result.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rustc_hash::FxHasher;
use tracing::trace;

use crate::error::{ParseMpIntError, TryFromMpIntError};
use crate::large::LargeInt;

mod ops;

/// A signed integer of unbounded range with a 64-bit fast path.
///
/// Arithmetic never overflows: a result that leaves the `i64` range is
/// transparently promoted to an arbitrary-precision representation.
///
/// Precondition violations (division by zero, a negative `gcd` operand, a
/// non-positive `modulo` divisor, narrowing a value that does not fit with
/// [`MpInt::to_i64`]) panic.
#[derive(Clone)]
pub struct MpInt(Repr);

#[derive(Clone)]
enum Repr {
    Small(i64),
    Large(LargeInt),
}

impl MpInt {
    /// The value zero.
    pub const ZERO: Self = Self(Repr::Small(0));

    /// The value one.
    pub const ONE: Self = Self(Repr::Small(1));

    /// Create a small `MpInt`.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(Repr::Small(value))
    }

    #[inline]
    pub(crate) fn large(value: LargeInt) -> Self {
        Self(Repr::Large(value))
    }

    /// Returns `true` if the value is held in the arbitrary-precision
    /// representation, regardless of its magnitude.
    #[inline]
    pub fn is_large(&self) -> bool {
        matches!(self.0, Repr::Large(_))
    }

    /// The inline value, if this is held in the small representation.
    #[inline]
    pub(crate) fn small_value(&self) -> Option<i64> {
        match self.0 {
            Repr::Small(value) => Some(value),
            Repr::Large(_) => None,
        }
    }

    /// View as a large integer, promoting a small value into a temporary.
    fn to_large(&self) -> Cow<'_, LargeInt> {
        match &self.0 {
            Repr::Small(value) => Cow::Owned(LargeInt::from(*value)),
            Repr::Large(large) => Cow::Borrowed(large),
        }
    }

    /// Recompute a binary operation on the large representation.
    #[cold]
    #[inline(never)]
    pub(crate) fn promote(
        op: &'static str,
        lhs: &Self,
        rhs: &Self,
        f: impl FnOnce(&LargeInt, &LargeInt) -> LargeInt,
    ) -> Self {
        trace!(op, lhs_large = lhs.is_large(), rhs_large = rhs.is_large(), "large-integer path");
        Self::large(f(&lhs.to_large(), &rhs.to_large()))
    }

    /// Recompute a unary operation on the large representation.
    #[cold]
    #[inline(never)]
    pub(crate) fn promote_unary(
        op: &'static str,
        operand: &Self,
        f: impl FnOnce(&LargeInt) -> LargeInt,
    ) -> Self {
        trace!(op, large = operand.is_large(), "large-integer path");
        Self::large(f(&operand.to_large()))
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == 0
    }

    /// Returns `true` if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match &self.0 {
            Repr::Small(value) => *value < 0,
            Repr::Large(large) => large.is_negative(),
        }
    }

    /// Returns `true` if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        *self > 0
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i64 {
        match self.cmp_i64(0) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Narrow to `i64`.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit. The value is never truncated; use
    /// `i64::try_from(&value)` when the range is not known in advance.
    #[inline]
    pub fn to_i64(&self) -> i64 {
        match &self.0 {
            Repr::Small(value) => *value,
            Repr::Large(large) => match large.to_i64() {
                Some(value) => value,
                None => panic!("integer {large} does not fit in i64"),
            },
        }
    }

    /// Exact value as a `num_bigint::BigInt`.
    pub fn to_bigint(&self) -> BigInt {
        match &self.0 {
            Repr::Small(value) => BigInt::from(*value),
            Repr::Large(large) => large.as_bigint().clone(),
        }
    }

    /// Machine-word hash consistent with the [`Hash`] impl.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Pre-increment: add one in place.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Pre-decrement: subtract one in place.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Truncating division by a divisor known to be positive.
    ///
    /// Skips the `i64::MIN / -1` check of the general division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is not strictly positive.
    #[inline]
    pub fn div_by_positive(&self, rhs: &Self) -> Self {
        assert!(rhs.is_positive(), "div_by_positive requires a positive divisor, got {rhs}");
        if let (Repr::Small(x), Repr::Small(y)) = (&self.0, &rhs.0) {
            return Self::new(x / y);
        }
        Self::promote("div_by_positive", self, rhs, |a, b| a / b)
    }

    /// In-place form of [`MpInt::div_by_positive`].
    #[inline]
    pub fn div_by_positive_in_place(&mut self, rhs: &Self) -> &mut Self {
        assert!(rhs.is_positive(), "div_by_positive requires a positive divisor, got {rhs}");
        *self = match (self.small_value(), rhs.small_value()) {
            (Some(x), Some(y)) => Self::new(x / y),
            _ => Self::promote("div_by_positive", self, rhs, |a, b| a / b),
        };
        self
    }

    /// Print the value to standard error for debugging.
    pub fn dump(&self) {
        eprintln!("{self}");
    }

    fn cmp_i64(&self, other: i64) -> Ordering {
        match &self.0 {
            Repr::Small(value) => value.cmp(&other),
            Repr::Large(large) => large.cmp_i64(other),
        }
    }
}

impl Default for MpInt {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// Conversions

macro_rules! impl_from_small {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MpInt {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(i64::from(value))
                }
            }
        )*
    };
}

impl_from_small!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MpInt {
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(small) => Self::new(small),
                        Err(_) => Self::large(LargeInt::from(BigInt::from(value))),
                    }
                }
            }
        )*
    };
}

impl_from_wide!(u64, i128, u128);

/// Explicit conversion from a big integer always yields the large
/// representation.
impl From<BigInt> for MpInt {
    fn from(value: BigInt) -> Self {
        Self::large(LargeInt::from(value))
    }
}

impl From<MpInt> for BigInt {
    fn from(value: MpInt) -> Self {
        match value.0 {
            Repr::Small(small) => BigInt::from(small),
            Repr::Large(large) => large.into_bigint(),
        }
    }
}

macro_rules! impl_try_into_primitive {
    ($($t:ty => $to:ident),*) => {
        $(
            impl TryFrom<&MpInt> for $t {
                type Error = TryFromMpIntError;

                fn try_from(value: &MpInt) -> Result<Self, Self::Error> {
                    let converted = match &value.0 {
                        Repr::Small(small) => <$t>::try_from(*small).ok(),
                        Repr::Large(large) => large.as_bigint().$to(),
                    };
                    converted.ok_or_else(|| TryFromMpIntError {
                        target: stringify!($t),
                        value: value.to_string(),
                    })
                }
            }

            impl TryFrom<MpInt> for $t {
                type Error = TryFromMpIntError;

                #[inline]
                fn try_from(value: MpInt) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_try_into_primitive!(i64 => to_i64, i32 => to_i32, u64 => to_u64, usize => to_usize);

impl FromStr for MpInt {
    type Err = ParseMpIntError;

    /// Parse an optionally signed decimal integer.
    ///
    /// Values that fit in `i64` come back small.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if s.is_empty() {
            return Err(ParseMpIntError::Empty);
        }
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMpIntError::InvalidDigit);
        }
        if let Ok(small) = s.parse::<i64>() {
            return Ok(Self::new(small));
        }
        BigInt::from_str(s)
            .map(Self::from)
            .map_err(|_| ParseMpIntError::InvalidDigit)
    }
}

// Comparisons

impl PartialEq for MpInt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Small(x), Repr::Small(y)) => x == y,
            _ => *self.to_large() == *other.to_large(),
        }
    }
}

impl Eq for MpInt {}

impl Ord for MpInt {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Small(x), Repr::Small(y)) => x.cmp(y),
            _ => self.to_large().cmp(&other.to_large()),
        }
    }
}

impl PartialOrd for MpInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for MpInt {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.cmp_i64(*other) == Ordering::Equal
    }
}

impl PartialOrd<i64> for MpInt {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp_i64(*other))
    }
}

impl PartialEq<MpInt> for i64 {
    #[inline]
    fn eq(&self, other: &MpInt) -> bool {
        other.cmp_i64(*self) == Ordering::Equal
    }
}

impl PartialOrd<MpInt> for i64 {
    #[inline]
    fn partial_cmp(&self, other: &MpInt) -> Option<Ordering> {
        Some(other.cmp_i64(*self).reverse())
    }
}

// Hashing

/// Values that fit in `i64` hash as that `i64` whichever representation
/// holds them, so equal values always hash equally.
impl Hash for MpInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Repr::Small(value) => value.hash(state),
            Repr::Large(large) => match large.to_i64() {
                Some(value) => value.hash(state),
                None => state.write_u64(large.hash_value()),
            },
        }
    }
}

// Formatting

impl fmt::Display for MpInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Small(value) => fmt::Display::fmt(value, f),
            Repr::Large(large) => fmt::Display::fmt(large, f),
        }
    }
}

impl fmt::Debug for MpInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Folding

impl Sum for MpInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |mut acc, value| {
            acc += &value;
            acc
        })
    }
}

impl<'a> Sum<&'a MpInt> for MpInt {
    fn sum<I: Iterator<Item = &'a MpInt>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |mut acc, value| {
            acc += value;
            acc
        })
    }
}

impl Product for MpInt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |mut acc, value| {
            acc *= &value;
            acc
        })
    }
}

impl<'a> Product<&'a MpInt> for MpInt {
    fn product<I: Iterator<Item = &'a MpInt>>(iter: I) -> Self {
        iter.fold(Self::ONE, |mut acc, value| {
            acc *= value;
            acc
        })
    }
}

#[cfg(test)]
mod tests;
