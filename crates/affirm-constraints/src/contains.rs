//! Containment that adapts to the actual value.

use affirm_core::{AffirmError, Result, Value};
use tracing::debug;

use crate::collection::CollectionContainsConstraint;
use crate::constraint::{BoxedConstraint, Constraint, ConstraintState, Modifiers};
use crate::strings::SubstringConstraint;
use crate::writer::MessageWriter;

/// Substring test for string actuals, element test for anything else.
///
/// The choice is made on the first `matches` call and kept afterwards.
///
/// # Example
///
/// ```
/// use affirm_constraints::{contains, Constraint};
/// use affirm_core::Value;
///
/// let mut in_text = contains("ell");
/// assert!(in_text.matches(&Value::from("hello")).unwrap());
///
/// let mut in_list = contains(2);
/// assert!(in_list.matches(&Value::from(vec![1, 2, 3])).unwrap());
/// ```
pub struct ContainsConstraint {
    expected: Value,
    resolved: Option<BoxedConstraint>,
    state: ConstraintState,
}

impl ContainsConstraint {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            resolved: None,
            state: ConstraintState::new(),
        }
    }

    fn resolve(&self, actual: &Value) -> Result<BoxedConstraint> {
        if actual.as_str().is_none() {
            debug!("contains resolved to collection containment");
            return Ok(Box::new(CollectionContainsConstraint::new(self.expected.clone())));
        }
        let expected = self.expected.as_str().ok_or_else(|| {
            AffirmError::invalid_argument(format!(
                "cannot look for {} inside a string",
                self.expected.type_description()
            ))
        })?;
        debug!("contains resolved to substring");
        Ok(Box::new(SubstringConstraint::new(expected)))
    }
}

impl Constraint for ContainsConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        if self.resolved.is_none() {
            self.resolved = Some(self.resolve(actual)?);
        }
        match self.resolved.as_mut() {
            Some(inner) => {
                inner.apply_modifiers(self.state.modifiers());
                inner.matches(actual)
            }
            None => Ok(false),
        }
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        match &self.resolved {
            Some(inner) => inner.write_description_to(writer),
            None => {
                writer.write_predicate("containing");
                writer.write_expected_value(&self.expected);
            }
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
        if let Some(inner) = self.resolved.as_mut() {
            inner.apply_modifiers(self.state.modifiers());
        }
    }
}
