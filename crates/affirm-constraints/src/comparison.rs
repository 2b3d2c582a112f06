//! Ordering constraints: comparisons against one value and ranges.

use std::cmp::Ordering;

use affirm_core::{AffirmError, Result, Value};

use crate::constraint::{Constraint, ConstraintState};
use crate::writer::MessageWriter;

/// Compares the actual value against an expected one.
///
/// Numbers of different kinds are promoted before comparing; strings,
/// chars, bools and date/times use their natural order. A custom
/// comparer replaces both.
#[derive(Debug, Clone)]
pub struct ComparisonConstraint {
    expected: Value,
    less: bool,
    equal: bool,
    greater: bool,
    predicate: &'static str,
    state: ConstraintState,
}

impl ComparisonConstraint {
    fn new(
        expected: impl Into<Value>,
        less: bool,
        equal: bool,
        greater: bool,
        predicate: &'static str,
    ) -> Self {
        Self {
            expected: expected.into(),
            less,
            equal,
            greater,
            predicate,
            state: ConstraintState::new(),
        }
    }

    pub fn greater_than(expected: impl Into<Value>) -> Self {
        Self::new(expected, false, false, true, "greater than")
    }

    pub fn greater_than_or_equal_to(expected: impl Into<Value>) -> Self {
        Self::new(expected, false, true, true, "greater than or equal to")
    }

    pub fn less_than(expected: impl Into<Value>) -> Self {
        Self::new(expected, true, false, false, "less than")
    }

    pub fn less_than_or_equal_to(expected: impl Into<Value>) -> Self {
        Self::new(expected, true, true, false, "less than or equal to")
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Constraint for ComparisonConstraint {
    /// # Errors
    ///
    /// Returns [`AffirmError::InvalidArgument`] if either side is null or
    /// the two values cannot be ordered.
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        let ordering = self.state.modifiers().compare(actual, &self.expected)?;
        Ok(match ordering {
            Ordering::Less => self.less,
            Ordering::Equal => self.equal,
            Ordering::Greater => self.greater,
        })
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate(self.predicate);
        writer.write_expected_value(&self.expected);
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}

/// Succeeds when the actual value lies between two bounds.
///
/// Both bounds are inclusive unless made exclusive. The bounds must share
/// one runtime type; an actual value of any other type does not match.
///
/// # Example
///
/// ```
/// use affirm_constraints::{Constraint, RangeConstraint};
/// use affirm_core::Value;
///
/// let mut range = RangeConstraint::new(1, 10).exclusive_high();
/// assert!(range.matches(&Value::from(1)).unwrap());
/// assert!(!range.matches(&Value::from(10)).unwrap());
/// assert!(!range.matches(&Value::from(5i64)).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RangeConstraint {
    low: Value,
    high: Value,
    low_inclusive: bool,
    high_inclusive: bool,
    state: ConstraintState,
}

impl RangeConstraint {
    pub fn new(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
            low_inclusive: true,
            high_inclusive: true,
            state: ConstraintState::new(),
        }
    }

    pub fn exclusive_low(mut self) -> Self {
        self.low_inclusive = false;
        self
    }

    pub fn exclusive_high(mut self) -> Self {
        self.high_inclusive = false;
        self
    }

    /// Excludes both bounds.
    pub fn exclusive(self) -> Self {
        self.exclusive_low().exclusive_high()
    }
}

impl Constraint for RangeConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);

        let bound_type = self.low.value_type();
        if bound_type.is_none() || bound_type != self.high.value_type() {
            return Err(AffirmError::invalid_argument(format!(
                "range bounds must share one type, got {} and {}",
                self.low.type_description(),
                self.high.type_description()
            )));
        }
        if actual.value_type() != bound_type {
            return Ok(false);
        }

        let modifiers = self.state.modifiers();
        let above_low = match modifiers.compare(actual, &self.low)? {
            Ordering::Greater => true,
            Ordering::Equal => self.low_inclusive,
            Ordering::Less => false,
        };
        let below_high = match modifiers.compare(actual, &self.high)? {
            Ordering::Less => true,
            Ordering::Equal => self.high_inclusive,
            Ordering::Greater => false,
        };
        Ok(above_low && below_high)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("between");
        writer.write_expected_value(&self.low);
        writer.write_connector("and");
        writer.write_expected_value(&self.high);
        match (self.low_inclusive, self.high_inclusive) {
            (true, true) => {}
            (false, false) => writer.write_modifier("exclusive"),
            (false, true) => writer.write_modifier("excluding low"),
            (true, false) => writer.write_modifier("excluding high"),
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
#[path = "comparison_tests.rs"]
mod tests;
