//! Tests for prefix constraints.

use super::*;
use crate::comparison::ComparisonConstraint;
use crate::constraint::ConstraintExt;
use crate::strings::SubstringConstraint;
use crate::test_utils::{check, description_of, message_of};
use affirm_core::AffirmError;

// ============================================================================
// Not
// ============================================================================

mod not {
    use super::*;

    #[test]
    fn test_negation_law() {
        let samples = [
            Value::from(5),
            Value::from(6),
            Value::from("5"),
            Value::Null,
            Value::from(vec![5]),
        ];
        for sample in samples {
            let mut base = EqualConstraint::new(5);
            let mut negated = NotConstraint::new(EqualConstraint::new(5));
            assert_eq!(
                negated.matches(&sample).unwrap(),
                !base.matches(&sample).unwrap(),
                "{:?}",
                sample
            );
        }
    }

    #[test]
    fn test_message() {
        let mut constraint = NotConstraint::new(EqualConstraint::new(5));
        assert!(!check(&mut constraint, 5));
        assert_eq!(message_of(&constraint), "  Expected: not 5\n  But was:  5\n");
    }

    #[test]
    fn test_missing_base_means_null() {
        let mut constraint = NotConstraint::from_optional(None);
        assert!(check(&mut constraint, 0));
        assert!(!check(&mut constraint, Value::Null));
        assert_eq!(description_of(&constraint), "not null");
    }

    #[test]
    fn test_modifiers_reach_base() {
        let mut constraint = NotConstraint::new(EqualConstraint::new("abc")).ignore_case();
        assert!(!check(&mut constraint, "ABC"));
        assert!(check(&mut constraint, "abd"));
    }

    #[test]
    fn test_misuse_propagates() {
        let mut constraint = NotConstraint::new(ComparisonConstraint::greater_than(1));
        assert!(matches!(
            constraint.matches(&Value::Null),
            Err(AffirmError::InvalidArgument(_))
        ));
    }
}

// ============================================================================
// Item prefixes
// ============================================================================

mod items {
    use super::*;

    #[test]
    fn test_all_items() {
        let mut constraint = AllItemsConstraint::new(ComparisonConstraint::greater_than(0));
        assert!(check(&mut constraint, vec![1, 2, 3]));
        assert!(check(&mut constraint, Vec::<i32>::new()));
        assert!(!check(&mut constraint, vec![1, -1]));
        assert_eq!(
            message_of(&constraint),
            "  Expected: all items greater than 0\n  But was:  < 1, -1 >\n"
        );
    }

    #[test]
    fn test_all_items_ignoring_case() {
        let mut constraint = AllItemsConstraint::new(SubstringConstraint::new("x")).ignore_case();
        assert!(check(&mut constraint, vec!["aXb", "x"]));
        assert_eq!(
            description_of(&constraint),
            "all items String containing \"x\", ignoring case"
        );
    }

    #[test]
    fn test_some_item() {
        let mut constraint = SomeItemsConstraint::new(EqualConstraint::new(2));
        assert!(check(&mut constraint, vec![1, 2]));
        assert!(!check(&mut constraint, vec![1, 3]));
        assert!(!check(&mut constraint, Vec::<i32>::new()));
        assert_eq!(description_of(&constraint), "some item 2");
    }

    #[test]
    fn test_no_item() {
        let mut constraint = NoItemConstraint::new(EqualConstraint::new(2));
        assert!(check(&mut constraint, vec![1, 3]));
        assert!(!check(&mut constraint, vec![2]));
        assert_eq!(description_of(&constraint), "no item 2");
    }

    #[test]
    fn test_tolerance_reaches_items() {
        let mut constraint = AllItemsConstraint::new(EqualConstraint::new(1.0)).within(0.5);
        assert!(check(&mut constraint, vec![0.75, 1.25]));
        assert!(!check(&mut constraint, vec![0.75, 1.75]));
    }

    #[test]
    fn test_nested_prefixes() {
        let mut constraint = NotConstraint::new(SomeItemsConstraint::new(
            ComparisonConstraint::less_than(0),
        ));
        assert!(check(&mut constraint, vec![0, 1]));
        assert_eq!(description_of(&constraint), "not some item less than 0");
    }

    #[test]
    fn test_requires_collection() {
        let mut constraint = NoItemConstraint::new(EqualConstraint::new(2));
        assert!(matches!(
            constraint.matches(&Value::from("2")),
            Err(AffirmError::InvalidArgument(_))
        ));
    }
}
