//! Tests for numeric promotion and comparison.

use super::*;
use std::str::FromStr;

// ============================================================================
// Promotion
// ============================================================================

mod promotion {
    use super::*;

    #[test]
    fn test_floating_wins() {
        assert_eq!(
            promote(Number::from(Decimal::from(2)), Number::from(1.5f32)),
            Promoted::Float(2.0, 1.5)
        );
    }

    #[test]
    fn test_decimal_beats_integral() {
        assert_eq!(
            promote(Number::from(7u64), Number::from(Decimal::from(7))),
            Promoted::Decimal(Decimal::from(7), Decimal::from(7))
        );
    }

    #[test]
    fn test_integral_priority() {
        assert_eq!(promote(Number::from(1u64), Number::from(2u8)), Promoted::U64(1, 2));
        assert_eq!(promote(Number::from(1i64), Number::from(2u32)), Promoted::I64(1, 2));
        assert_eq!(promote(Number::from(1u32), Number::from(2i16)), Promoted::U32(1, 2));
        assert_eq!(promote(Number::from(1i8), Number::from(2u16)), Promoted::I32(1, 2));
    }

    #[test]
    fn test_out_of_range_widens() {
        assert_eq!(
            promote(Number::from(u64::MAX), Number::from(-1i64)),
            Promoted::Wide(u64::MAX as i128, -1)
        );
        assert_eq!(
            promote(Number::from(3u32), Number::from(-3i32)),
            Promoted::Wide(3, -3)
        );
    }
}

// ============================================================================
// Equality
// ============================================================================

mod equality {
    use super::*;

    #[test]
    fn test_exact_across_kinds() {
        assert!(are_equal(Number::from(5i32), Number::from(5.0f64), None));
        assert!(are_equal(Number::from(5u8), Number::from(5i64), None));
        assert!(!are_equal(Number::from(5u64), Number::from(-5i64), None));
    }

    #[test]
    fn test_tolerance_boundary() {
        let tol = Some(Number::from(2i32));
        assert!(are_equal(Number::from(10i32), Number::from(12i32), tol));
        assert!(!are_equal(Number::from(10i32), Number::from(13i32), tol));
    }

    #[test]
    fn test_zero_or_negative_tolerance_is_exact() {
        assert!(!are_equal(Number::from(1.0), Number::from(1.1), Some(Number::from(0.0))));
        assert!(!are_equal(Number::from(1.0), Number::from(1.1), Some(Number::from(-5.0))));
    }

    #[test]
    fn test_decimal_tolerance() {
        let a = Decimal::from_str("1.005").unwrap();
        let b = Decimal::from_str("1.000").unwrap();
        let tol = Some(Number::from(Decimal::from_str("0.01").unwrap()));
        assert!(are_equal(Number::from(a), Number::from(b), tol));
        assert!(!are_equal(Number::from(a), Number::from(b), None));
    }

    #[test]
    fn test_nan_and_infinity() {
        let tol = Some(Number::from(1000.0));
        assert!(are_equal(Number::from(f64::NAN), Number::from(f32::NAN), None));
        assert!(!are_equal(Number::from(f64::NAN), Number::from(1.0), tol));
        assert!(are_equal(Number::from(f64::INFINITY), Number::from(f64::INFINITY), tol));
        assert!(!are_equal(Number::from(f64::INFINITY), Number::from(1.0e300), tol));
    }

    #[test]
    fn test_oversized_tolerance_saturates() {
        let huge = Some(Number::from(10_000_000_000i64));
        assert!(are_equal(Number::from(1i32), Number::from(5i32), huge));
        assert!(are_equal(Number::from(1u32), Number::from(5u32), Some(Number::from(1e12))));
        assert!(are_equal(Number::from(1i64), Number::from(5i64), Some(Number::from(1e30))));
        assert!(are_equal(Number::from(1u64), Number::from(5u64), Some(Number::from(1e30))));
        assert!(are_equal(
            Number::from(u64::MAX),
            Number::from(-1i64),
            Some(Number::from(1e40))
        ));
    }

    #[test]
    fn test_oversized_decimal_tolerance_saturates() {
        let huge = Some(Number::from(1e30));
        assert!(are_equal(Number::from(Decimal::ONE), Number::from(Decimal::TWO), huge));
        assert!(are_equal(
            Number::from(Decimal::MAX),
            Number::from(Decimal::MIN),
            huge
        ));
    }

    #[test]
    fn test_fractional_tolerance_on_integers() {
        assert!(!are_equal(Number::from(10i64), Number::from(11i64), Some(Number::from(0.5))));
        assert!(are_equal(Number::from(10i64), Number::from(11i64), Some(Number::from(1.5))));
    }

    #[test]
    fn test_wide_tolerance() {
        let tol = Some(Number::from(10u64));
        assert!(are_equal(Number::from(5u64), Number::from(-5i64), tol));
    }
}

// ============================================================================
// Ordering
// ============================================================================

mod ordering {
    use super::*;

    #[test]
    fn test_mixed_numeric_ordering() {
        assert_eq!(compare_numbers(Number::from(3u64), Number::from(-1i32)), Ordering::Greater);
        assert_eq!(compare_numbers(Number::from(2i16), Number::from(2.5f32)), Ordering::Less);
        assert_eq!(compare_numbers(Number::from(4u8), Number::from(4i64)), Ordering::Equal);
    }

    #[test]
    fn test_nan_orders_lowest() {
        assert_eq!(compare_numbers(Number::from(f64::NAN), Number::from(-1.0)), Ordering::Less);
        assert_eq!(compare_numbers(Number::from(f64::NAN), Number::from(f64::NAN)), Ordering::Equal);
    }

    #[test]
    fn test_compare_values() {
        assert_eq!(compare(&Value::from('a'), &Value::from('b')).unwrap(), Ordering::Less);
        assert_eq!(compare(&Value::from(true), &Value::from(false)).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_compare_null_is_error() {
        let err = compare(&Value::from(1), &Value::Null).unwrap_err();
        assert!(matches!(err, AffirmError::InvalidArgument(_)));
    }

    #[test]
    fn test_compare_incomparable_is_error() {
        assert!(compare(&Value::from("1"), &Value::from(1)).is_err());
        assert!(compare(&Value::from(vec![1]), &Value::from(vec![1])).is_err());
    }
}
