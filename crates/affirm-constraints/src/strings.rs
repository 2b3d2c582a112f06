//! Constraints on string contents.

use affirm_core::{AffirmError, Result, Value};
use regex::RegexBuilder;

use crate::constraint::{Constraint, ConstraintState};
use crate::writer::MessageWriter;

macro_rules! string_constraint {
    ($(#[$meta:meta])* $name:ident, $predicate:literal, $test:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            expected: String,
            state: ConstraintState,
        }

        impl $name {
            pub fn new(expected: impl Into<String>) -> Self {
                Self {
                    expected: expected.into(),
                    state: ConstraintState::new(),
                }
            }

            pub fn expected(&self) -> &str {
                &self.expected
            }
        }

        impl Constraint for $name {
            fn matches(&mut self, actual: &Value) -> Result<bool> {
                self.state.record(actual);
                let Some(actual) = actual.as_str() else {
                    return Ok(false);
                };
                let test: fn(&str, &str) -> bool = $test;
                if self.state.modifiers().ignore_case {
                    Ok(test(&actual.to_lowercase(), &self.expected.to_lowercase()))
                } else {
                    Ok(test(actual, &self.expected))
                }
            }

            fn write_description_to(&self, writer: &mut dyn MessageWriter) {
                writer.write_predicate($predicate);
                writer.write_expected_value(&Value::from(self.expected.as_str()));
                if self.state.modifiers().ignore_case {
                    writer.write_modifier("ignoring case");
                }
            }

            fn state(&self) -> &ConstraintState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut ConstraintState {
                &mut self.state
            }
        }
    };
}

string_constraint!(
    /// Succeeds when the actual string contains the expected text.
    SubstringConstraint,
    "String containing",
    |actual, expected| actual.contains(expected)
);

string_constraint!(
    /// Succeeds when the actual string starts with the expected text.
    StartsWithConstraint,
    "String starting with",
    |actual, expected| actual.starts_with(expected)
);

string_constraint!(
    /// Succeeds when the actual string ends with the expected text.
    EndsWithConstraint,
    "String ending with",
    |actual, expected| actual.ends_with(expected)
);

/// Succeeds when the actual string matches a regular expression.
///
/// The pattern is compiled on each `matches` so that `ignore_case` set
/// afterwards is honored.
#[derive(Debug, Clone)]
pub struct RegexConstraint {
    pattern: String,
    state: ConstraintState,
}

impl RegexConstraint {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            state: ConstraintState::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Constraint for RegexConstraint {
    /// # Errors
    ///
    /// Returns [`AffirmError::InvalidArgument`] if the pattern does not
    /// compile.
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        let regex = RegexBuilder::new(&self.pattern)
            .case_insensitive(self.state.modifiers().ignore_case)
            .build()
            .map_err(|e| AffirmError::invalid_argument(format!("invalid pattern: {}", e)))?;
        Ok(actual.as_str().is_some_and(|s| regex.is_match(s)))
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("String matching");
        writer.write_expected_value(&Value::from(self.pattern.as_str()));
        if self.state.modifiers().ignore_case {
            writer.write_modifier("ignoring case");
        }
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}

#[cfg(test)]
#[path = "strings_tests.rs"]
mod tests;
