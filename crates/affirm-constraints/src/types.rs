//! Constraints on the runtime type of the actual value.
//!
//! On failure these show the actual value's type rather than the value.

use affirm_core::{Result, StaticType, Value, ValueType};

use crate::constraint::{Constraint, ConstraintState};
use crate::writer::MessageWriter;

macro_rules! type_constraint {
    ($(#[$meta:meta])* $name:ident, $predicate:expr, $test:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            expected: ValueType,
            state: ConstraintState,
        }

        impl $name {
            pub fn new(expected: ValueType) -> Self {
                Self {
                    expected,
                    state: ConstraintState::new(),
                }
            }

            /// Uses the type a Rust type converts to.
            pub fn of<T: StaticType>() -> Self {
                Self::new(ValueType::of::<T>())
            }

            pub fn expected(&self) -> &ValueType {
                &self.expected
            }
        }

        impl Constraint for $name {
            fn matches(&mut self, actual: &Value) -> Result<bool> {
                self.state.record(actual);
                let test: fn(&ValueType, &ValueType) -> bool = $test;
                Ok(actual
                    .value_type()
                    .is_some_and(|actual| test(&self.expected, &actual)))
            }

            fn write_description_to(&self, writer: &mut dyn MessageWriter) {
                let predicate: Option<&str> = $predicate;
                if let Some(predicate) = predicate {
                    writer.write_predicate(predicate);
                }
                writer.write_type(Some(&self.expected));
            }

            fn write_actual_value_to(&self, writer: &mut dyn MessageWriter) {
                match self.state.actual() {
                    Some(actual) => writer.write_type(actual.value_type().as_ref()),
                    None => writer.write_unset(),
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

type_constraint!(
    /// Succeeds when the actual value has exactly the expected type.
    ExactTypeConstraint,
    None,
    |expected, actual| expected == actual
);

type_constraint!(
    /// Succeeds when the actual value is an instance of the expected type
    /// or one of its subtypes.
    InstanceOfTypeConstraint,
    Some("instance of"),
    |expected, actual| expected.is_assignable_from(actual)
);

type_constraint!(
    /// Succeeds when a value of the expected type could be assigned to the
    /// actual value's type.
    AssignableFromConstraint,
    Some("assignable from"),
    |expected, actual| actual.is_assignable_from(expected)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check, message_of};
    use affirm_test::shapes::{circle_type, shape_type, Circle};

    #[test]
    fn test_exact_type() {
        let mut constraint = ExactTypeConstraint::of::<i32>();
        assert!(check(&mut constraint, 5));
        assert!(!check(&mut constraint, 5i64));
        assert_eq!(message_of(&constraint), "  Expected: <i32>\n  But was:  <i64>\n");
    }

    #[test]
    fn test_null_has_no_type() {
        let mut constraint = InstanceOfTypeConstraint::new(ValueType::OBJECT);
        assert!(!check(&mut constraint, Value::Null));
        assert_eq!(
            message_of(&constraint),
            "  Expected: instance of <object>\n  But was:  null\n"
        );
    }

    #[test]
    fn test_instance_of_follows_supertypes() {
        let circle = Value::object(Circle::new(2.0));

        let mut shape = InstanceOfTypeConstraint::new(shape_type());
        assert!(check(&mut shape, circle.clone()));

        let mut exact = ExactTypeConstraint::new(shape_type());
        assert!(!check(&mut exact, circle.clone()));

        let mut collection = InstanceOfTypeConstraint::new(ValueType::COLLECTION);
        assert!(check(&mut collection, vec![1, 2]));
        assert!(!check(&mut collection, circle));
    }

    #[test]
    fn test_assignable_from() {
        let mut constraint = AssignableFromConstraint::new(circle_type());
        assert!(check(&mut constraint, Value::object(Circle::new(1.0))));
        assert!(!check(&mut constraint, 3));
        assert_eq!(
            message_of(&constraint),
            "  Expected: assignable from <Circle>\n  But was:  <i32>\n"
        );
    }
}
