//! Projection onto a named property of the actual value.

use affirm_core::{AffirmError, PropertyAccessor, Result, Value};
use tracing::trace;

use crate::constraint::{BoxedConstraint, Constraint, ConstraintState, Modifiers};
use crate::writer::MessageWriter;

/// Looks up a property on the actual value and optionally tests it.
///
/// Without a base constraint the property's presence is enough. An absent
/// property fails the match; a `null` actual is a misuse error.
///
/// # Example
///
/// ```
/// use affirm_constraints::{has, is, Constraint};
/// use affirm_core::Value;
///
/// let mut length = has::property_with("Length", is::equal_to(5));
/// assert!(length.matches(&Value::from("hello")).unwrap());
///
/// let mut missing = has::property("Radius");
/// assert!(!missing.matches(&Value::from("hello")).unwrap());
/// ```
pub struct PropertyConstraint {
    name: String,
    base: Option<BoxedConstraint>,
    property_value: Option<Value>,
    state: ConstraintState,
}

impl PropertyConstraint {
    /// Checks only that the property exists.
    pub fn exists(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            property_value: None,
            state: ConstraintState::new(),
        }
    }

    /// Tests the property's value with `base`.
    pub fn new(name: impl Into<String>, base: impl Constraint + 'static) -> Self {
        Self {
            base: Some(Box::new(base)),
            ..Self::exists(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Constraint for PropertyConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        if actual.is_null() {
            return Err(AffirmError::invalid_argument(format!(
                "cannot read property \"{}\" of null",
                self.name
            )));
        }

        self.property_value = actual.try_get(&self.name);
        let Some(value) = &self.property_value else {
            trace!(property = %self.name, "property not found");
            return Ok(false);
        };
        match self.base.as_mut() {
            None => Ok(true),
            Some(base) => {
                base.apply_modifiers(self.state.modifiers());
                base.matches(value)
            }
        }
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        let label = format!("Property \"{}\"", self.name);
        match &self.base {
            Some(base) => {
                writer.write_predicate(&label);
                base.write_description_to(writer);
            }
            None => writer.write(&label),
        }
    }

    fn write_actual_value_to(&self, writer: &mut dyn MessageWriter) {
        match (&self.property_value, &self.base) {
            (Some(value), Some(_)) => writer.write_actual_value(value),
            _ => match self.state.actual() {
                Some(actual) => writer.write_actual_value(actual),
                None => writer.write_unset(),
            },
        }
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }

    fn apply_modifiers(&mut self, outer: &Modifiers) {
        self.state.modifiers_mut().merge(outer);
        if let Some(base) = self.base.as_mut() {
            base.apply_modifiers(self.state.modifiers());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::ComparisonConstraint;
    use crate::constraint::ConstraintExt;
    use crate::equality::EqualConstraint;
    use crate::test_utils::{check, description_of, message_of};
    use affirm_test::people::Person;

    #[test]
    fn test_presence() {
        let mut constraint = PropertyConstraint::exists("Name");
        assert!(check(&mut constraint, Value::object(Person::new("Ann", 31))));
        assert!(!check(&mut constraint, 5));
        assert_eq!(description_of(&constraint), "Property \"Name\"");
    }

    #[test]
    fn test_value_tested_by_base() {
        let mut constraint =
            PropertyConstraint::new("Age", ComparisonConstraint::greater_than(40));
        assert!(!check(&mut constraint, Value::object(Person::new("Ann", 31))));
        assert_eq!(
            message_of(&constraint),
            "  Expected: Property \"Age\" greater than 40\n  But was:  31\n"
        );
    }

    #[test]
    fn test_builtin_properties() {
        let mut constraint = PropertyConstraint::new("Count", EqualConstraint::new(3));
        assert!(check(&mut constraint, vec![1, 2, 3]));
    }

    #[test]
    fn test_absent_property_fails_quietly() {
        let mut constraint = PropertyConstraint::new("Salary", EqualConstraint::new(1));
        assert!(!check(&mut constraint, Value::object(Person::new("Ann", 31))));
        assert!(message_of(&constraint).contains("But was:  <Person"));
    }

    #[test]
    fn test_null_actual_is_misuse() {
        let mut constraint = PropertyConstraint::exists("Name");
        assert!(matches!(
            constraint.matches(&Value::Null),
            Err(AffirmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_modifiers_reach_base() {
        let mut constraint =
            PropertyConstraint::new("Name", EqualConstraint::new("ann")).ignore_case();
        assert!(check(&mut constraint, Value::object(Person::new("Ann", 31))));
    }
}
