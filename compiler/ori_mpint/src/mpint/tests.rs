#![allow(clippy::unwrap_used, reason = "tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;

fn big(s: &str) -> MpInt {
    s.parse().unwrap()
}

fn std_hash(value: &MpInt) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// A large `MpInt` whose value fits in `i64`.
fn large_but_small_valued(value: i64) -> MpInt {
    let offset = MpInt::new(i64::MAX) + 1;
    let result = &(&offset + value) - &offset;
    assert!(result.is_large());
    result
}

// =========================================================================
// Construction and narrowing
// =========================================================================

#[test]
fn default_is_small_zero() {
    let zero = MpInt::default();
    assert!(!zero.is_large());
    assert!(zero.is_zero());
    assert_eq!(zero.to_i64(), 0);
}

#[test]
fn roundtrip_through_i64() {
    for value in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
        let converted = MpInt::from(value);
        assert!(!converted.is_large());
        assert_eq!(converted.to_i64(), value);
        assert_eq!(i64::try_from(&converted), Ok(value));
    }
}

#[test]
fn from_wide_integers_picks_representation() {
    assert!(!MpInt::from(u64::try_from(i64::MAX).unwrap()).is_large());
    assert!(MpInt::from(u64::MAX).is_large());
    assert_eq!(MpInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert!(!MpInt::from(-5_i128).is_large());
    assert!(MpInt::from(i128::MIN).is_large());
}

#[test]
fn from_bigint_is_large() {
    let value = MpInt::from(BigInt::from(7));
    assert!(value.is_large());
    assert_eq!(value, 7);
    assert_eq!(value.to_i64(), 7);
}

#[test]
#[should_panic(expected = "does not fit in i64")]
fn narrowing_out_of_range_panics() {
    let _ = (MpInt::new(i64::MAX) + 1).to_i64();
}

#[test]
fn try_from_reports_target_and_value() {
    let value = MpInt::new(i64::MAX) + 1;
    let err = i64::try_from(&value).unwrap_err();
    assert_eq!(err.target, "i64");
    assert_eq!(err.value, "9223372036854775808");
    assert_eq!(err.to_string(), "integer 9223372036854775808 does not fit in i64");

    assert_eq!(u64::try_from(&value), Ok(1 << 63));
    assert!(i32::try_from(MpInt::new(1 << 40)).is_err());
    assert!(usize::try_from(MpInt::new(-1)).is_err());
}

#[test]
fn bigint_roundtrip() {
    let value = big("-123456789012345678901234567890");
    assert_eq!(MpInt::from(value.to_bigint()), value);
    assert_eq!(BigInt::from(value.clone()), value.to_bigint());
    assert_eq!(BigInt::from(MpInt::new(-3)), BigInt::from(-3));
}

// =========================================================================
// Parsing and formatting
// =========================================================================

#[test]
fn parse_small_and_large() {
    let small = big("-9223372036854775808");
    assert!(!small.is_large());
    assert_eq!(small, i64::MIN);

    let large = big("-9223372036854775809");
    assert!(large.is_large());
    assert_eq!(large.to_string(), "-9223372036854775809");

    assert_eq!(big("+17"), 17);
    assert_eq!(big("0007"), 7);
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<MpInt>(), Err(ParseMpIntError::Empty));
    assert_eq!("-".parse::<MpInt>(), Err(ParseMpIntError::InvalidDigit));
    assert_eq!("1_000".parse::<MpInt>(), Err(ParseMpIntError::InvalidDigit));
    assert_eq!("--1".parse::<MpInt>(), Err(ParseMpIntError::InvalidDigit));
    assert_eq!(" 1".parse::<MpInt>(), Err(ParseMpIntError::InvalidDigit));
    assert_eq!("12a".parse::<MpInt>(), Err(ParseMpIntError::InvalidDigit));
}

#[test]
fn display_is_canonical_decimal() {
    assert_eq!(MpInt::ZERO.to_string(), "0");
    assert_eq!(MpInt::new(-42).to_string(), "-42");
    assert_eq!((MpInt::new(i64::MIN) - 1).to_string(), "-9223372036854775809");
    assert_eq!(large_but_small_valued(0).to_string(), "0");
    assert_eq!(format!("{:?}", MpInt::new(5)), "5");
    assert_eq!(format!("{:>5}", MpInt::new(42)), "   42");
}

// =========================================================================
// Arithmetic and promotion
// =========================================================================

#[test]
fn small_arithmetic_stays_small() {
    let a = MpInt::new(40);
    let b = MpInt::new(2);
    for result in [&a + &b, &a - &b, &a * &b, &a / &b, &a % &b] {
        assert!(!result.is_large());
    }
    assert_eq!(&a + &b, 42);
    assert_eq!(&a - &b, 38);
    assert_eq!(&a * &b, 80);
    assert_eq!(&a / &b, 20);
    assert_eq!(&a % &b, 0);
}

#[test]
fn overflow_promotes_to_exact_value() {
    let max = MpInt::new(i64::MAX);
    let min = MpInt::new(i64::MIN);

    let sum = &max + &max;
    assert!(sum.is_large());
    assert_eq!(sum, big("18446744073709551614"));

    let difference = &min - &max;
    assert!(difference.is_large());
    assert_eq!(difference, big("-18446744073709551615"));

    let product = &min * &min;
    assert!(product.is_large());
    assert_eq!(product, big("85070591730234615865843651857942052864"));
}

#[test]
fn no_implicit_demotion() {
    let mut value = MpInt::new(i64::MAX) + 1;
    assert!(value.is_large());

    value -= 1;
    assert_eq!(value, i64::MAX);
    assert!(value.is_large());

    value -= i64::MAX;
    assert!(value.is_zero());
    assert!(value.is_large());

    value = MpInt::new(3);
    assert!(!value.is_large());
}

#[test]
fn negation_of_min_is_exact() {
    let min = MpInt::new(i64::MIN);
    let negated = -&min;
    assert!(negated.is_large());
    assert_eq!(negated, big("9223372036854775808"));
    assert_eq!(-negated, min);
    assert_eq!(-MpInt::new(5), -5);
}

#[test]
fn min_divided_by_minus_one_is_its_negation() {
    let min = MpInt::new(i64::MIN);
    let quotient = &min / -1;
    assert!(quotient.is_large());
    assert_eq!(quotient, -&min);
}

#[test]
fn remainder_truncates() {
    assert_eq!(MpInt::new(-7) % 2, -1);
    assert_eq!(MpInt::new(7) % -2, 1);
    assert_eq!(MpInt::new(i64::MIN) % -1, 0);
    assert_eq!(big("-100000000000000000000") % 7, -2);
}

#[test]
fn mixed_representation_arithmetic() {
    let huge = big("100000000000000000000");
    assert_eq!(&huge + 1, big("100000000000000000001"));
    assert_eq!(1 - &huge, big("-99999999999999999999"));
    assert_eq!(&huge / 1_000_000_000_000_i64, 100_000_000);
    assert!((&huge / 1_000_000_000_000_i64).is_large());
    assert_eq!(2 * huge.clone(), big("200000000000000000000"));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn small_division_by_zero_panics() {
    let _ = MpInt::new(1) / 0;
}

#[test]
#[should_panic]
fn large_division_by_zero_panics() {
    let _ = big("100000000000000000000") / 0;
}

#[test]
fn compound_assignment() {
    let mut value = MpInt::new(10);
    value += 5;
    value -= &MpInt::new(3);
    value *= MpInt::new(4);
    value /= 6;
    value %= 5;
    assert_eq!(value, 3);
    assert!(!value.is_large());

    value *= i64::MAX;
    assert!(value.is_large());
    value /= i64::MAX;
    assert_eq!(value, 3);
}

#[test]
fn increment_and_decrement() {
    let mut value = MpInt::new(i64::MAX - 1);
    value.increment();
    assert!(!value.is_large());
    value.increment().increment();
    assert!(value.is_large());
    assert_eq!(value, big("9223372036854775809"));
    value.decrement().decrement();
    assert_eq!(value, i64::MAX);
}

#[test]
fn div_by_positive() {
    assert_eq!(MpInt::new(-7).div_by_positive(&MpInt::new(2)), -3);
    assert_eq!(big("-100000000000000000000").div_by_positive(&MpInt::new(10)), big("-10000000000000000000"));

    let mut value = MpInt::new(i64::MIN);
    value.div_by_positive_in_place(&MpInt::new(2));
    assert_eq!(value, i64::MIN / 2);
    assert!(!value.is_large());
}

#[test]
#[should_panic(expected = "div_by_positive requires a positive divisor")]
fn div_by_positive_rejects_negative() {
    let _ = MpInt::new(10).div_by_positive(&MpInt::new(-1));
}

#[test]
#[should_panic(expected = "div_by_positive requires a positive divisor")]
fn div_by_positive_in_place_rejects_zero() {
    let mut value = MpInt::new(10);
    value.div_by_positive_in_place(&MpInt::ZERO);
}

#[test]
fn assignment_replaces_large_value() {
    let mut value = big("123456789012345678901234567890");
    let replacement = MpInt::new(9);
    value.clone_from(&replacement);
    assert!(!value.is_large());
    assert_eq!(value, 9);

    let source = big("-123456789012345678901234567890");
    let mut copy = source.clone();
    copy += 1;
    assert_eq!(source, big("-123456789012345678901234567890"));
    assert_eq!(copy, big("-123456789012345678901234567889"));
}

// =========================================================================
// Comparison
// =========================================================================

#[test]
fn comparisons_across_representations() {
    let large_five = large_but_small_valued(5);
    let small_five = MpInt::new(5);
    assert_eq!(large_five, small_five);
    assert!(large_five <= small_five && large_five >= small_five);
    assert!(large_but_small_valued(-1) < MpInt::ZERO);
    assert!(big("100000000000000000000") > MpInt::new(i64::MAX));
    assert!(big("-100000000000000000000") < MpInt::new(i64::MIN));
}

#[test]
fn comparisons_against_i64() {
    let value = MpInt::new(5);
    assert!(value == 5 && 5 == value);
    assert!(value > 4 && 4 < value);
    assert!(big("100000000000000000000") > i64::MAX);
    assert!(i64::MIN > big("-100000000000000000000"));
    assert!(large_but_small_valued(7) == 7);
}

#[test]
fn sign_queries() {
    assert_eq!(MpInt::new(-3).signum(), -1);
    assert_eq!(MpInt::ZERO.signum(), 0);
    assert_eq!(big("100000000000000000000").signum(), 1);
    assert!(big("-100000000000000000000").is_negative());
    assert!(!large_but_small_valued(0).is_negative());
    assert!(!large_but_small_valued(0).is_positive());
}

// =========================================================================
// Hashing
// =========================================================================

#[test]
fn equal_values_hash_equally_across_representations() {
    for value in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
        let small = MpInt::new(value);
        let large = MpInt::from(BigInt::from(value));
        assert!(large.is_large());
        assert_eq!(std_hash(&small), std_hash(&large));
        assert_eq!(small.hash_value(), large.hash_value());
    }
}

#[test]
fn hash_distinguishes_sign_of_large_values() {
    let positive = big("100000000000000000000");
    let negative = -&positive;
    assert_ne!(positive.hash_value(), negative.hash_value());
    assert_eq!(positive.hash_value(), big("100000000000000000000").hash_value());
}

#[test]
fn usable_as_hash_set_key() {
    let mut set = HashSet::new();
    set.insert(MpInt::new(5));
    set.insert(large_but_small_valued(5));
    set.insert(big("100000000000000000000"));
    set.insert(big("100000000000000000000"));
    assert_eq!(set.len(), 2);
}

// =========================================================================
// Folding and threading
// =========================================================================

#[test]
fn sum_and_product() {
    let values = [MpInt::new(i64::MAX), MpInt::new(i64::MAX), MpInt::new(2)];
    let sum: MpInt = values.iter().sum();
    assert_eq!(sum, big("18446744073709551616"));
    let product: MpInt = values.into_iter().product();
    assert_eq!(product, big("170141183460469231694793815568465002498"));
    assert_eq!(std::iter::empty::<MpInt>().sum::<MpInt>(), 0);
    assert_eq!(std::iter::empty::<MpInt>().product::<MpInt>(), 1);
}

#[test]
fn send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MpInt>();

    let shared = big("100000000000000000000");
    let handles: Vec<_> = (0..4_i64)
        .map(|i| {
            let mut local = shared.clone();
            std::thread::spawn(move || {
                local += i;
                local
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = &shared + i64::try_from(i).unwrap();
        assert_eq!(handle.join().unwrap(), expected);
    }
}
