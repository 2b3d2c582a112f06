//! Tests for comparison and range constraints.

use super::*;
use crate::constraint::ConstraintExt;
use crate::test_utils::{check, description_of, message_of};

// ============================================================================
// Comparison
// ============================================================================

mod comparison {
    use super::*;

    #[test]
    fn test_greater_or_equal_passes_on_equal() {
        let mut constraint = ComparisonConstraint::greater_than_or_equal_to(5);
        assert!(check(&mut constraint, 5));
    }

    #[test]
    fn test_greater_or_equal_failure_message() {
        let mut constraint = ComparisonConstraint::greater_than_or_equal_to(5);
        assert!(!check(&mut constraint, 4));
        assert_eq!(
            message_of(&constraint),
            "  Expected: greater than or equal to 5\n  But was:  4\n"
        );
    }

    #[test]
    fn test_permitted_orderings() {
        let cases = [
            (ComparisonConstraint::greater_than(5), [false, false, true]),
            (ComparisonConstraint::greater_than_or_equal_to(5), [false, true, true]),
            (ComparisonConstraint::less_than(5), [true, false, false]),
            (ComparisonConstraint::less_than_or_equal_to(5), [true, true, false]),
        ];
        for (mut constraint, expected) in cases {
            let results = [4, 5, 6].map(|v| check(&mut constraint, v));
            assert_eq!(results, expected, "{}", description_of(&constraint));
        }
    }

    #[test]
    fn test_mixed_numeric_kinds() {
        let mut constraint = ComparisonConstraint::less_than(2.5f32);
        assert!(check(&mut constraint, 2u64));
        assert!(!check(&mut constraint, 3i8));
    }

    #[test]
    fn test_strings_order_natively() {
        let mut constraint = ComparisonConstraint::greater_than("apple");
        assert!(check(&mut constraint, "banana"));
        assert_eq!(description_of(&constraint), "greater than \"apple\"");
    }

    #[test]
    fn test_null_is_misuse() {
        let mut constraint = ComparisonConstraint::greater_than(1);
        let err = constraint.matches(&Value::Null).unwrap_err();
        assert!(matches!(err, AffirmError::InvalidArgument(_)));
    }

    #[test]
    fn test_custom_comparer() {
        let mut constraint = ComparisonConstraint::greater_than("zz").using_fn(|x, y| {
            let len = |v: &Value| v.as_str().map_or(0, str::len);
            len(x).cmp(&len(y))
        });
        assert!(check(&mut constraint, "abc"));
        assert!(!check(&mut constraint, "ab"));
    }
}

// ============================================================================
// Range
// ============================================================================

mod range {
    use super::*;

    #[test]
    fn test_inclusive_bounds() {
        let mut constraint = RangeConstraint::new(1, 3);
        assert!(check(&mut constraint, 1));
        assert!(check(&mut constraint, 3));
        assert!(!check(&mut constraint, 4));
        assert_eq!(
            message_of(&constraint),
            "  Expected: between 1 and 3\n  But was:  4\n"
        );
    }

    #[test]
    fn test_exclusive_bounds_are_independent() {
        let mut low = RangeConstraint::new(1, 3).exclusive_low();
        assert!(!check(&mut low, 1));
        assert!(check(&mut low, 3));
        assert_eq!(description_of(&low), "between 1 and 3, excluding low");

        let mut both = RangeConstraint::new(1, 3).exclusive();
        assert!(!check(&mut both, 3));
        assert!(check(&mut both, 2));
    }

    #[test]
    fn test_actual_of_other_type_does_not_match() {
        let mut constraint = RangeConstraint::new(1, 10);
        assert!(!check(&mut constraint, 5u8));
        assert!(!check(&mut constraint, 5.0));
        assert!(!check(&mut constraint, Value::Null));
    }

    #[test]
    fn test_mismatched_bounds_are_misuse() {
        let mut constraint = RangeConstraint::new(1, 10i64);
        assert!(matches!(
            constraint.matches(&Value::from(5)),
            Err(AffirmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_strings() {
        let mut constraint = RangeConstraint::new("b", "d");
        assert!(check(&mut constraint, "c"));
        assert!(!check(&mut constraint, "e"));
    }
}
