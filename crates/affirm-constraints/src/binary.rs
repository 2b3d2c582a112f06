//! Boolean composition of two constraints.

use affirm_core::{Result, Value};

use crate::constraint::{Constraint, ConstraintState, Modifiers};
use crate::writer::MessageWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Succeeds when both constraints succeed, testing left to right.
///
/// # Example
///
/// ```
/// use affirm_constraints::{is, Constraint, ConstraintExt};
/// use affirm_core::Value;
///
/// let mut in_band = is::greater_than(0).and(is::less_than(10));
/// assert!(in_band.matches(&Value::from(5)).unwrap());
/// assert!(!in_band.matches(&Value::from(10)).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct AndConstraint<L, R> {
    left: L,
    right: R,
    failed: Option<Side>,
    state: ConstraintState,
}

impl<L, R> AndConstraint<L, R> {
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            failed: None,
            state: ConstraintState::new(),
        }
    }
}

impl<L: Constraint, R: Constraint> Constraint for AndConstraint<L, R> {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        self.left.apply_modifiers(self.state.modifiers());
        self.right.apply_modifiers(self.state.modifiers());

        self.failed = if !self.left.matches(actual)? {
            Some(Side::Left)
        } else if !self.right.matches(actual)? {
            Some(Side::Right)
        } else {
            None
        };
        Ok(self.failed.is_none())
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        self.left.write_description_to(writer);
        writer.write_connector("and");
        self.right.write_description_to(writer);
    }

    fn write_actual_value_to(&self, writer: &mut dyn MessageWriter) {
        match self.failed {
            Some(Side::Left) => self.left.write_actual_value_to(writer),
            Some(Side::Right) => self.right.write_actual_value_to(writer),
            None => match self.state.actual() {
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
        self.left.apply_modifiers(self.state.modifiers());
        self.right.apply_modifiers(self.state.modifiers());
    }
}

/// Succeeds when either constraint succeeds, testing left to right.
#[derive(Debug, Clone)]
pub struct OrConstraint<L, R> {
    left: L,
    right: R,
    state: ConstraintState,
}

impl<L, R> OrConstraint<L, R> {
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            state: ConstraintState::new(),
        }
    }
}

impl<L: Constraint, R: Constraint> Constraint for OrConstraint<L, R> {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        self.left.apply_modifiers(self.state.modifiers());
        self.right.apply_modifiers(self.state.modifiers());
        Ok(self.left.matches(actual)? || self.right.matches(actual)?)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        self.left.write_description_to(writer);
        writer.write_connector("or");
        self.right.write_description_to(writer);
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }

    fn apply_modifiers(&mut self, outer: &Modifiers) {
        self.state.modifiers_mut().merge(outer);
        self.left.apply_modifiers(self.state.modifiers());
        self.right.apply_modifiers(self.state.modifiers());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::ComparisonConstraint;
    use crate::constraint::ConstraintExt;
    use crate::equality::EqualConstraint;
    use crate::test_utils::{check, description_of, message_of};
    use affirm_core::AffirmError;

    #[test]
    fn test_and() {
        let mut constraint = ComparisonConstraint::greater_than(0)
            .and(ComparisonConstraint::less_than(10));
        assert!(check(&mut constraint, 5));
        assert!(!check(&mut constraint, 10));
        assert_eq!(
            message_of(&constraint),
            "  Expected: greater than 0 and less than 10\n  But was:  10\n"
        );
    }

    #[test]
    fn test_and_short_circuits() {
        // the right side would reject null as misuse
        let mut constraint =
            EqualConstraint::new(1).and(ComparisonConstraint::greater_than(0));
        assert!(!check(&mut constraint, Value::Null));
    }

    #[test]
    fn test_or() {
        let mut constraint = EqualConstraint::new(1).or(EqualConstraint::new(2));
        assert!(check(&mut constraint, 1));
        assert!(check(&mut constraint, 2));
        assert!(!check(&mut constraint, 3));
        assert_eq!(description_of(&constraint), "1 or 2");
    }

    #[test]
    fn test_or_short_circuits() {
        let mut constraint = EqualConstraint::new(Value::Null)
            .or(ComparisonConstraint::greater_than(0));
        assert!(check(&mut constraint, Value::Null));

        let mut reversed = ComparisonConstraint::greater_than(0)
            .or(EqualConstraint::new(Value::Null));
        assert!(matches!(
            reversed.matches(&Value::Null),
            Err(AffirmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_modifiers_reach_both_sides() {
        let mut constraint = EqualConstraint::new("a")
            .or(EqualConstraint::new("b"))
            .ignore_case();
        assert!(check(&mut constraint, "B"));
    }

    #[test]
    fn test_composition_nests() {
        let mut constraint = EqualConstraint::new(1)
            .or(EqualConstraint::new(2))
            .and(ComparisonConstraint::less_than(2));
        assert!(check(&mut constraint, 1));
        assert!(!check(&mut constraint, 2));
        assert_eq!(description_of(&constraint), "1 or 2 and less than 2");
    }
}
