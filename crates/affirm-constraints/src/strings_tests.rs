//! Tests for string constraints.

use super::*;
use crate::constraint::ConstraintExt;
use crate::test_utils::{check, description_of, message_of};

#[test]
fn test_substring() {
    let mut constraint = SubstringConstraint::new("ell");
    assert!(check(&mut constraint, "Hello"));
    assert!(!check(&mut constraint, "HELLO"));
    assert_eq!(
        message_of(&constraint),
        "  Expected: String containing \"ell\"\n  But was:  \"HELLO\"\n"
    );
}

#[test]
fn test_substring_ignoring_case() {
    let mut constraint = SubstringConstraint::new("ell").ignore_case();
    assert!(check(&mut constraint, "HELLO"));
    assert_eq!(
        description_of(&constraint),
        "String containing \"ell\", ignoring case"
    );
}

#[test]
fn test_starts_and_ends_with() {
    let mut starts = StartsWithConstraint::new("ab");
    assert!(check(&mut starts, "abc"));
    assert!(!check(&mut starts, "cab"));
    assert_eq!(description_of(&starts), "String starting with \"ab\"");

    let mut ends = EndsWithConstraint::new("BC").ignore_case();
    assert!(check(&mut ends, "abc"));
    assert_eq!(description_of(&ends), "String ending with \"BC\", ignoring case");
}

#[test]
fn test_non_string_actual_does_not_match() {
    let mut constraint = SubstringConstraint::new("1");
    assert!(!check(&mut constraint, 1));
    assert!(!check(&mut constraint, Value::Null));
}

#[test]
fn test_regex() {
    let mut constraint = RegexConstraint::new(r"^\d{3}-\d{4}$");
    assert!(check(&mut constraint, "555-1234"));
    assert!(!check(&mut constraint, "5551234"));
    assert_eq!(
        description_of(&constraint),
        "String matching \"^\\d{3}-\\d{4}$\""
    );
}

#[test]
fn test_regex_ignoring_case() {
    let mut constraint = RegexConstraint::new("^abc").ignore_case();
    assert!(check(&mut constraint, "ABCdef"));
}

#[test]
fn test_invalid_regex_is_misuse() {
    let mut constraint = RegexConstraint::new("(unclosed");
    assert!(matches!(
        constraint.matches(&Value::from("x")),
        Err(AffirmError::InvalidArgument(_))
    ));
}
