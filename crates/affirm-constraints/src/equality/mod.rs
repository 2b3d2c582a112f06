//! Equality testing and structural diffs.
//!
//! [`EqualityComparer`] decides equality and records a [`FailurePath`];
//! [`EqualConstraint`] keeps the path of its last `matches` call and turns
//! it into a message that drills down to the first mismatch.

mod comparer;
mod diff;

pub use comparer::{EqualityComparer, FailurePath};

use affirm_core::{Result, Value};
use tracing::debug;

use crate::constraint::{write_default_message, Constraint, ConstraintState};
use crate::writer::MessageWriter;

use self::diff::DiffRenderer;

/// Succeeds when the actual value equals the expected one.
///
/// Honors every modifier: tolerance for numbers, case for strings and
/// chars, as-collection for arrays, and a custom comparer.
///
/// # Example
///
/// ```
/// use affirm_constraints::{Constraint, EqualConstraint, TextMessageWriter};
/// use affirm_core::Value;
///
/// let mut constraint = EqualConstraint::new(vec![1, 2, 3, 4, 5]);
/// assert!(!constraint.matches(&Value::from(vec![1, 2, 3])).unwrap());
/// assert_eq!(constraint.failure_path(), &[3]);
///
/// let mut writer = TextMessageWriter::new();
/// constraint.write_message_to(&mut writer);
/// assert!(writer.as_str().contains("Missing:  < 4, 5 >"));
/// ```
#[derive(Debug, Clone)]
pub struct EqualConstraint {
    expected: Value,
    failure_path: FailurePath,
    state: ConstraintState,
}

impl EqualConstraint {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            failure_path: FailurePath::new(),
            state: ConstraintState::new(),
        }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Location of the mismatch found by the last `matches` call.
    pub fn failure_path(&self) -> &[u64] {
        &self.failure_path
    }
}

impl Constraint for EqualConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        self.failure_path.clear();

        let mut path = FailurePath::new();
        let comparer = EqualityComparer::new(self.state.modifiers());
        let equal = comparer.objects_equal(&self.expected, actual, &mut path)?;
        if !equal {
            debug!(path = ?path.as_slice(), "values differ");
        }
        self.failure_path = path;
        Ok(equal)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        let modifiers = self.state.modifiers();
        writer.write_expected_value(&self.expected);
        if let Some(tolerance) = modifiers.tolerance {
            writer.write_connector("+/-");
            writer.write_expected_value(&Value::from(tolerance));
        }
        if modifiers.ignore_case {
            writer.write_modifier("ignoring case");
        }
        if modifiers.as_collection {
            writer.write_modifier("as collection");
        }
    }

    fn write_message_to(&self, writer: &mut dyn MessageWriter) {
        match self.state.actual() {
            Some(actual) => DiffRenderer::new(&self.failure_path, self.state.modifiers())
                .display_differences(writer, &self.expected, actual, 0),
            None => write_default_message(self, writer),
        }
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}
