//! Tests for collection constraints and the tally.

use super::*;
use crate::constraint::{ConstraintExt, Modifiers};
use crate::test_utils::{check, description_of, message_of};
use affirm_test::people::Person;

fn values(items: &[i32]) -> Vec<Value> {
    items.iter().copied().map(Value::from).collect()
}

// ============================================================================
// Tally
// ============================================================================

mod tally {
    use super::*;

    #[test]
    fn test_counts_and_removal() {
        let modifiers = Modifiers::default();
        let items = values(&[3, 1, 3, 3]);
        let mut tally = CollectionTally::new(EqualityComparer::new(&modifiers), &items).unwrap();

        assert_eq!(tally.count(&Value::from(3)).unwrap(), 3);
        assert_eq!(tally.count(&Value::from(7)).unwrap(), 0);
        assert_eq!(tally.distinct(), 2);
        assert!(!tally.all_unique());

        assert!(tally.try_remove_all(&values(&[3, 3, 3, 1])).unwrap());
        assert!(tally.is_empty());
        assert!(!tally.try_remove(&Value::from(3)).unwrap());
    }

    #[test]
    fn test_null_is_its_own_key() {
        let modifiers = Modifiers::default();
        let items = vec![Value::Null, Value::from(0), Value::Null];
        let mut tally = CollectionTally::new(EqualityComparer::new(&modifiers), &items).unwrap();

        assert_eq!(tally.count(&Value::Null).unwrap(), 2);
        assert_eq!(tally.count(&Value::from(0)).unwrap(), 1);
        assert!(tally.try_remove(&Value::Null).unwrap());
        assert!(tally.try_remove(&Value::Null).unwrap());
        assert!(!tally.try_remove(&Value::Null).unwrap());
    }

    #[test]
    fn test_keys_honor_modifiers() {
        let modifiers = Modifiers {
            ignore_case: true,
            ..Modifiers::default()
        };
        let items = vec![Value::from("a"), Value::from("A")];
        let tally = CollectionTally::new(EqualityComparer::new(&modifiers), &items).unwrap();
        assert_eq!(tally.count(&Value::from("a")).unwrap(), 2);
    }

    #[test]
    fn test_numeric_keys_are_promoted() {
        let modifiers = Modifiers::default();
        let items = vec![Value::from(1), Value::from(1.0), Value::from(1u8)];
        let tally = CollectionTally::new(EqualityComparer::new(&modifiers), &items).unwrap();
        assert_eq!(tally.distinct(), 1);
    }
}

// ============================================================================
// Contains
// ============================================================================

mod contains {
    use super::*;

    #[test]
    fn test_value_equality_not_identity() {
        let ann = Value::object(Person::new("Ann", 31));
        let mut constraint = CollectionContainsConstraint::new(ann);
        assert!(check(
            &mut constraint,
            vec![
                Value::object(Person::new("Bob", 40)),
                Value::object(Person::new("Ann", 31)),
            ]
        ));
    }

    #[test]
    fn test_failure_message() {
        let mut constraint = CollectionContainsConstraint::new(4);
        assert!(!check(&mut constraint, vec![1, 2, 3]));
        assert_eq!(
            message_of(&constraint),
            "  Expected: collection containing 4\n  But was:  < 1, 2, 3 >\n"
        );
    }

    #[test]
    fn test_ignore_case() {
        let mut constraint = CollectionContainsConstraint::new("B").ignore_case();
        assert!(check(&mut constraint, vec!["a", "b"]));
    }

    #[test]
    fn test_non_collection_is_misuse() {
        let mut constraint = CollectionContainsConstraint::new(1);
        let err = constraint.matches(&Value::from(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: The actual value must be a collection"
        );
    }
}

// ============================================================================
// Uniqueness
// ============================================================================

mod unique {
    use super::*;

    #[test]
    fn test_unique_items() {
        let mut constraint = UniqueItemsConstraint::new();
        assert!(check(&mut constraint, vec![1, 2, 3]));
        assert!(check(&mut constraint, Vec::<i32>::new()));
        assert!(!check(&mut constraint, vec![1, 2, 1]));
        assert_eq!(description_of(&constraint), "all items unique");
    }

    #[test]
    fn test_repeated_null() {
        let mut constraint = UniqueItemsConstraint::new();
        assert!(check(&mut constraint, vec![Value::Null, Value::from(1)]));
        assert!(!check(&mut constraint, vec![Value::Null, Value::Null]));
    }

    #[test]
    fn test_case_insensitive_duplicates() {
        let mut constraint = UniqueItemsConstraint::new().ignore_case();
        assert!(!check(&mut constraint, vec!["x", "X"]));
    }
}

// ============================================================================
// Equivalence and subsets
// ============================================================================

mod equivalence {
    use super::*;

    #[test]
    fn test_permutations_are_equivalent() {
        let mut constraint = CollectionEquivalentConstraint::new(vec![1, 2, 2, 3]);
        for permutation in [[2, 1, 3, 2], [3, 2, 2, 1], [1, 2, 2, 3], [2, 2, 3, 1]] {
            assert!(check(&mut constraint, permutation.to_vec()));
        }
    }

    #[test]
    fn test_multiplicity_matters() {
        let mut constraint = CollectionEquivalentConstraint::new(vec![1, 2, 2, 3]);
        assert!(!check(&mut constraint, vec![1, 2, 3, 3]));
        assert!(!check(&mut constraint, vec![1, 2, 3]));
        assert_eq!(
            message_of(&constraint),
            "  Expected: equivalent to < 1, 2, 2, 3 >\n  But was:  < 1, 2, 3 >\n"
        );
    }

    #[test]
    fn test_array_and_list_are_comparable() {
        let mut constraint = CollectionEquivalentConstraint::new([3, 1, 2]);
        assert!(check(&mut constraint, vec![1, 2, 3]));
    }

    #[test]
    fn test_expected_must_be_collection() {
        let mut constraint = CollectionEquivalentConstraint::new(5);
        let err = constraint.matches(&Value::from(vec![5])).unwrap_err();
        assert!(err.to_string().contains("expected value must be a collection"));
    }

    #[test]
    fn test_subset() {
        let mut constraint = CollectionSubsetConstraint::new(vec![1, 2, 2, 3]);
        assert!(check(&mut constraint, vec![2, 2]));
        assert!(check(&mut constraint, Vec::<i32>::new()));
        assert!(!check(&mut constraint, vec![2, 2, 2]));
        assert!(!check(&mut constraint, vec![4]));
        assert_eq!(description_of(&constraint), "subset of < 1, 2, 2, 3 >");
    }
}
