//! Emptiness of strings and collections.

use affirm_core::{Result, Value};

use crate::constraint::{Constraint, ConstraintState};
use crate::writer::MessageWriter;

/// Succeeds for an empty string or a collection with no elements.
///
/// Any other value, including `null`, is not empty.
#[derive(Debug, Clone, Default)]
pub struct EmptyConstraint {
    state: ConstraintState,
}

impl EmptyConstraint {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Constraint for EmptyConstraint {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        self.state.record(actual);
        Ok(match actual {
            Value::Str(s) => s.is_empty(),
            other => other.collection_items().is_some_and(<[Value]>::is_empty),
        })
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        writer.write("<empty>");
    }

    fn state(&self) -> &ConstraintState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check, message_of};

    #[test]
    fn test_empty_values() {
        let mut constraint = EmptyConstraint::new();
        assert!(check(&mut constraint, ""));
        assert!(check(&mut constraint, Vec::<i32>::new()));
        assert!(check(&mut constraint, Value::array(Vec::<i32>::new())));
    }

    #[test]
    fn test_non_empty_values() {
        let mut constraint = EmptyConstraint::new();
        assert!(!check(&mut constraint, "x"));
        assert!(!check(&mut constraint, Value::Null));
        assert!(!check(&mut constraint, 0));
        assert!(!check(&mut constraint, vec![1]));
        assert_eq!(
            message_of(&constraint),
            "  Expected: <empty>\n  But was:  < 1 >\n"
        );
    }
}
