//! A failed assertion on its way through the handler chain.

use affirm_core::Value;

/// Everything a handler needs to report one failed assertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    message: String,
    expected: String,
    actual: Value,
}

impl Failure {
    pub fn new(message: impl Into<String>, expected: impl Into<String>, actual: Value) -> Self {
        Self {
            message: message.into(),
            expected: expected.into(),
            actual,
        }
    }

    /// The complete rendered message, including any user message line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The constraint's description of what was expected.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The value that failed the constraint.
    pub fn actual(&self) -> &Value {
        &self.actual
    }
}
