//! Constraints that wrap a base constraint.
//!
//! Each wrapper merges its own modifiers into the base right before
//! delegating, so `all(equal_to("x")).ignore_case()` ignores case for
//! every element.

use affirm_core::{Result, Value};

use crate::collection::items_of;
use crate::constraint::{BoxedConstraint, Constraint, ConstraintState, Modifiers};
use crate::equality::EqualConstraint;
use crate::writer::MessageWriter;

macro_rules! prefix_constraint_impl {
    () => {
        fn state(&self) -> &ConstraintState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut ConstraintState {
            &mut self.state
        }

        fn apply_modifiers(&mut self, outer: &Modifiers) {
            self.state.modifiers_mut().merge(outer);
            self.base.apply_modifiers(self.state.modifiers());
        }
    };
}

/// Inverts its base constraint.
///
/// # Example
///
/// ```
/// use affirm_constraints::{is, Constraint};
/// use affirm_core::Value;
///
/// let mut not_five = is::not(is::equal_to(5));
/// assert!(not_five.matches(&Value::from(4)).unwrap());
/// assert!(!not_five.matches(&Value::from(5)).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct NotConstraint<C> {
    base: C,
    state: ConstraintState,
}

impl<C: Constraint> NotConstraint<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            state: ConstraintState::new(),
        }
    }

    pub fn base(&self) -> &C {
        &self.base
    }
}

impl NotConstraint<BoxedConstraint> {
    /// Negates `base`, treating a missing base as "equal to null".
    pub fn from_optional(base: Option<BoxedConstraint>) -> Self {
        Self::new(base.unwrap_or_else(|| Box::new(EqualConstraint::new(Value::Null))))
    }
}

impl<C: Constraint> Constraint for NotConstraint<C> {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        self.base.apply_modifiers(self.state.modifiers());
        Ok(!self.base.matches(actual)?)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("not");
        self.base.write_description_to(writer);
    }

    fn write_actual_value_to(&self, writer: &mut dyn MessageWriter) {
        self.base.write_actual_value_to(writer);
    }

    prefix_constraint_impl!();
}

/// Succeeds when every element of the actual collection satisfies the base.
#[derive(Debug, Clone)]
pub struct AllItemsConstraint<C> {
    base: C,
    state: ConstraintState,
}

impl<C: Constraint> AllItemsConstraint<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            state: ConstraintState::new(),
        }
    }
}

impl<C: Constraint> Constraint for AllItemsConstraint<C> {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        self.base.apply_modifiers(self.state.modifiers());
        for item in items_of(actual, "actual")? {
            if !self.base.matches(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("all items");
        self.base.write_description_to(writer);
    }

    prefix_constraint_impl!();
}

/// Succeeds when at least one element satisfies the base.
#[derive(Debug, Clone)]
pub struct SomeItemsConstraint<C> {
    base: C,
    state: ConstraintState,
}

impl<C: Constraint> SomeItemsConstraint<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            state: ConstraintState::new(),
        }
    }
}

impl<C: Constraint> Constraint for SomeItemsConstraint<C> {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        self.base.apply_modifiers(self.state.modifiers());
        for item in items_of(actual, "actual")? {
            if self.base.matches(item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("some item");
        self.base.write_description_to(writer);
    }

    prefix_constraint_impl!();
}

/// Succeeds when no element satisfies the base.
#[derive(Debug, Clone)]
pub struct NoItemConstraint<C> {
    base: C,
    state: ConstraintState,
}

impl<C: Constraint> NoItemConstraint<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            state: ConstraintState::new(),
        }
    }
}

impl<C: Constraint> Constraint for NoItemConstraint<C> {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        self.base.apply_modifiers(self.state.modifiers());
        for item in items_of(actual, "actual")? {
            if self.base.matches(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write_predicate("no item");
        self.base.write_description_to(writer);
    }

    prefix_constraint_impl!();
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
