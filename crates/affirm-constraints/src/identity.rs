//! Reference identity.

use affirm_core::{Result, Value};

use crate::constraint::{Constraint, ConstraintState};
use crate::writer::MessageWriter;

/// Succeeds when the actual value is the very same object as the expected.
///
/// Objects and streams compare by handle; `null` is the same as `null`.
/// Plain values have no identity and never match.
#[derive(Debug, Clone)]
pub struct SameAsConstraint {
    expected: Value,
    state: ConstraintState,
}

impl SameAsConstraint {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            state: ConstraintState::new(),
        }
    }
}

impl Constraint for SameAsConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        Ok(match (&self.expected, actual) {
            (Value::Null, Value::Null) => true,
            (Value::Object(e), Value::Object(a)) => e.ptr_eq(a),
            (Value::Stream(e), Value::Stream(a)) => e.ptr_eq(a),
            _ => false,
        })
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("same as");
        writer.write_expected_value(&self.expected);
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}
