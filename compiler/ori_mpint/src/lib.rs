//! Ori `MpInt` - multi-precision integers with a 64-bit fast path.
//!
//! `MpInt` behaves like an integer of unbounded range but runs at native
//! speed while values fit in an `i64`. It backs integer reasoning that must
//! never overflow silently (constant folding, linear/affine analyses) without
//! paying arbitrary-precision cost for ordinary values.
//!
//! # Representation
//!
//! - **Small**: an inline `i64`. Used for every value built from a machine
//!   integer and for every result that fits.
//! - **Large**: an owned `num_bigint::BigInt`. Used once an operation
//!   overflows, or when converting from a `BigInt` explicitly.
//!
//! Promotion is transparent and one-way: a large value is never demoted
//! implicitly. Overflow is therefore never observable as an error.
//!
//! # Semantics
//!
//! - `/` and `%` truncate toward zero, like `i64`.
//! - [`floor_div`] and [`ceil_div`] round toward negative and positive
//!   infinity; [`modulo`] is the Euclidean remainder for positive divisors.
//! - [`gcd`] takes non-negative operands; [`gcd_range`] folds over absolute
//!   values and returns zero for an empty sequence.
//!
//! Precondition violations panic; see [`MpInt`].
//!
//! # Features
//!
//! - `serde`: serialize as a decimal string.

mod error;
mod functions;
mod large;
mod math;
mod mpint;
pub mod overflow;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{ParseMpIntError, TryFromMpIntError};
pub use functions::{abs, ceil_div, floor_div, gcd, gcd_range, lcm, modulo};
pub use mpint::MpInt;
