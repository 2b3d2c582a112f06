//! Constraints over the elements of lists and arrays.
//!
//! Elements are compared with the equality engine, so the constraint's
//! modifiers apply to every element comparison. Passing a value that is
//! not a collection is a misuse error rather than a failed match.

mod tally;

pub use tally::CollectionTally;

use affirm_core::{AffirmError, Result, Value};

use crate::constraint::{Constraint, ConstraintState};
use crate::equality::EqualityComparer;
use crate::writer::MessageWriter;

/// Returns the elements of `value` or a misuse error naming `role`.
pub(crate) fn items_of<'v>(value: &'v Value, role: &str) -> Result<&'v [Value]> {
    value.collection_items().ok_or_else(|| {
        AffirmError::invalid_argument(format!("The {} value must be a collection", role))
    })
}

/// Succeeds when some element of the actual collection equals the
/// expected value.
#[derive(Debug, Clone)]
pub struct CollectionContainsConstraint {
    expected: Value,
    state: ConstraintState,
}

impl CollectionContainsConstraint {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            state: ConstraintState::new(),
        }
    }
}

impl Constraint for CollectionContainsConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        let comparer = EqualityComparer::new(self.state.modifiers());
        for item in items_of(actual, "actual")? {
            if comparer.are_equal(&self.expected, item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("collection containing");
        writer.write_expected_value(&self.expected);
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}

/// Succeeds when no element of the actual collection occurs twice.
#[derive(Debug, Clone, Default)]
pub struct UniqueItemsConstraint {
    state: ConstraintState,
}

impl UniqueItemsConstraint {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Constraint for UniqueItemsConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        let comparer = EqualityComparer::new(self.state.modifiers());
        let tally = CollectionTally::new(comparer, items_of(actual, "actual")?)?;
        Ok(tally.all_unique())
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write("all items unique");
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}

/// Succeeds when the actual collection holds the same elements as the
/// expected one with the same multiplicities, in any order.
#[derive(Debug, Clone)]
pub struct CollectionEquivalentConstraint {
    expected: Value,
    state: ConstraintState,
}

impl CollectionEquivalentConstraint {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            state: ConstraintState::new(),
        }
    }
}

impl Constraint for CollectionEquivalentConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        let expected = items_of(&self.expected, "expected")?;
        let actual = items_of(actual, "actual")?;
        if expected.len() != actual.len() {
            return Ok(false);
        }

        let comparer = EqualityComparer::new(self.state.modifiers());
        let mut tally = CollectionTally::new(comparer, expected)?;
        Ok(tally.try_remove_all(actual)? && tally.is_empty())
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("equivalent to");
        writer.write_expected_value(&self.expected);
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}

/// Succeeds when every element of the actual collection can be drawn from
/// the expected collection, respecting multiplicity.
#[derive(Debug, Clone)]
pub struct CollectionSubsetConstraint {
    expected: Value,
    state: ConstraintState,
}

impl CollectionSubsetConstraint {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            state: ConstraintState::new(),
        }
    }
}

impl Constraint for CollectionSubsetConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        let expected = items_of(&self.expected, "expected")?;
        let actual = items_of(actual, "actual")?;

        let comparer = EqualityComparer::new(self.state.modifiers());
        let mut tally = CollectionTally::new(comparer, expected)?;
        tally.try_remove_all(actual)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("subset of");
        writer.write_expected_value(&self.expected);
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests;
