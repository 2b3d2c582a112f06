//! Tests for the constraint capability and modifiers.

use super::*;
use crate::equality::EqualConstraint;
use crate::test_utils::{check, message_of};

#[test]
fn test_state_starts_unset() {
    let state = ConstraintState::new();
    assert!(state.actual().is_none());
    assert_eq!(Actual::default(), Actual::Unset);
}

#[test]
fn test_merge_ors_flags_and_overrides_values() {
    let mut inner = Modifiers {
        ignore_case: false,
        as_collection: true,
        tolerance: Some(Number::from(1)),
        comparer: None,
    };
    let outer = Modifiers {
        ignore_case: true,
        tolerance: Some(Number::from(5)),
        ..Modifiers::default()
    };
    inner.merge(&outer);
    assert!(inner.ignore_case);
    assert!(inner.as_collection);
    assert_eq!(inner.tolerance, Some(Number::from(5)));
    assert!(inner.comparer.is_none());

    inner.merge(&Modifiers::default());
    assert_eq!(inner.tolerance, Some(Number::from(5)));
}

#[test]
fn test_modifiers_compare_prefers_comparer() {
    let reversed = Modifiers {
        comparer: Some(Arc::new(FnComparer::new(|x: &Value, y: &Value| {
            numerics::compare(y, x).unwrap_or(Ordering::Equal)
        }))),
        ..Modifiers::default()
    };
    assert_eq!(
        reversed.compare(&Value::from(1), &Value::from(2)).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        Modifiers::default()
            .compare(&Value::from(1), &Value::from(2))
            .unwrap(),
        Ordering::Less
    );
}

#[test]
fn test_builder_methods_set_modifiers() {
    let constraint = EqualConstraint::new(1)
        .ignore_case()
        .as_collection()
        .within(0.5)
        .using_fn(|_, _| Ordering::Equal);
    let modifiers = constraint.state().modifiers();
    assert!(modifiers.ignore_case);
    assert!(modifiers.as_collection);
    assert_eq!(modifiers.tolerance, Some(Number::from(0.5)));
    assert!(modifiers.comparer.is_some());
}

#[test]
fn test_boxed_constraint_delegates() {
    let mut boxed: BoxedConstraint = EqualConstraint::new("a").boxed();
    boxed.apply_modifiers(&Modifiers {
        ignore_case: true,
        ..Modifiers::default()
    });
    assert!(check(&mut boxed, "A"));
    assert!(!check(&mut boxed, "b"));
    assert!(message_of(&boxed).contains("Strings differ at index 0."));
    assert_eq!(boxed.state().actual(), Some(&Value::from("b")));
}

#[test]
fn test_default_message_before_matching() {
    let boxed: BoxedConstraint = Box::new(crate::empty::EmptyConstraint::new());
    assert_eq!(
        message_of(&boxed),
        "  Expected: <empty>\n  But was:  <UNSET>\n"
    );
}
