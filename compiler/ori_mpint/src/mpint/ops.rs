//! Arithmetic operators for `MpInt`.
//!
//! Each operation has one canonical implementation on `&MpInt op &MpInt`.
//! Owned operands, `i64` operands on either side, and the compound
//! assignment forms all delegate to it.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use super::MpInt;
use crate::overflow::{add_overflow, div_would_overflow, mul_overflow, sub_overflow};

/// Add, subtract and multiply: try the checked 64-bit operation, promote on
/// overflow or when either operand is already large.
macro_rules! impl_checked_binop {
    ($($Trait:ident :: $method:ident => $checked:ident),* $(,)?) => {
        $(
            impl $Trait<&MpInt> for &MpInt {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: &MpInt) -> MpInt {
                    if let (Some(x), Some(y)) = (self.small_value(), rhs.small_value()) {
                        let (result, overflowed) = $checked(x, y);
                        if !overflowed {
                            return MpInt::new(result);
                        }
                    }
                    MpInt::promote(stringify!($method), self, rhs, |a, b| $Trait::$method(a, b))
                }
            }
        )*
    };
}

impl_checked_binop!(Add::add => add_overflow, Sub::sub => sub_overflow, Mul::mul => mul_overflow);

/// Truncating division.
///
/// The only overflowing 64-bit division is `i64::MIN / -1`, which is
/// answered by negation and therefore comes back large.
impl Div<&MpInt> for &MpInt {
    type Output = MpInt;

    #[inline]
    fn div(self, rhs: &MpInt) -> MpInt {
        if let (Some(x), Some(y)) = (self.small_value(), rhs.small_value()) {
            if div_would_overflow(x, y) {
                return -self;
            }
            return MpInt::new(x / y);
        }
        MpInt::promote("div", self, rhs, |a, b| a / b)
    }
}

/// Truncating remainder; the sign follows the dividend.
///
/// Never overflows: `i64::MIN % -1` is zero.
impl Rem<&MpInt> for &MpInt {
    type Output = MpInt;

    #[inline]
    fn rem(self, rhs: &MpInt) -> MpInt {
        if let (Some(x), Some(y)) = (self.small_value(), rhs.small_value()) {
            return MpInt::new(x.wrapping_rem(y));
        }
        MpInt::promote("rem", self, rhs, |a, b| a % b)
    }
}

impl Neg for &MpInt {
    type Output = MpInt;

    #[inline]
    fn neg(self) -> MpInt {
        if let Some(negated) = self.small_value().and_then(i64::checked_neg) {
            return MpInt::new(negated);
        }
        MpInt::promote_unary("neg", self, |a| -a)
    }
}

impl Neg for MpInt {
    type Output = MpInt;

    #[inline]
    fn neg(self) -> MpInt {
        -&self
    }
}

/// Owned, mixed-`i64` and compound-assignment forms.
macro_rules! forward_binop {
    ($($Trait:ident :: $method:ident, $Assign:ident :: $assign:ident);* $(;)?) => {
        $(
            impl $Trait<MpInt> for MpInt {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: MpInt) -> MpInt {
                    $Trait::$method(&self, &rhs)
                }
            }

            impl $Trait<&MpInt> for MpInt {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: &MpInt) -> MpInt {
                    $Trait::$method(&self, rhs)
                }
            }

            impl $Trait<MpInt> for &MpInt {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: MpInt) -> MpInt {
                    $Trait::$method(self, &rhs)
                }
            }

            impl $Trait<i64> for MpInt {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: i64) -> MpInt {
                    $Trait::$method(&self, &MpInt::new(rhs))
                }
            }

            impl $Trait<i64> for &MpInt {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: i64) -> MpInt {
                    $Trait::$method(self, &MpInt::new(rhs))
                }
            }

            impl $Trait<MpInt> for i64 {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: MpInt) -> MpInt {
                    $Trait::$method(&MpInt::new(self), &rhs)
                }
            }

            impl $Trait<&MpInt> for i64 {
                type Output = MpInt;

                #[inline]
                fn $method(self, rhs: &MpInt) -> MpInt {
                    $Trait::$method(&MpInt::new(self), rhs)
                }
            }

            // Assigning drops the previous value, releasing a large
            // representation before the new one takes its place.
            impl $Assign<&MpInt> for MpInt {
                #[inline]
                fn $assign(&mut self, rhs: &MpInt) {
                    *self = $Trait::$method(&*self, rhs);
                }
            }

            impl $Assign<MpInt> for MpInt {
                #[inline]
                fn $assign(&mut self, rhs: MpInt) {
                    $Assign::$assign(self, &rhs);
                }
            }

            impl $Assign<i64> for MpInt {
                #[inline]
                fn $assign(&mut self, rhs: i64) {
                    $Assign::$assign(self, &MpInt::new(rhs));
                }
            }
        )*
    };
}

forward_binop! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
}
