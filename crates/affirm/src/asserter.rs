//! Running constraints against values.

use affirm_config::{AffirmConfig, ConfigError, MessageConfig};
use affirm_constraints::{Constraint, TextMessageWriter};
use affirm_core::{Result, Value};
use tracing::{debug, trace};

use crate::failure::Failure;
use crate::handler::{CollectHandler, HandlerChain};

/// Evaluates constraints and routes failures through a handler chain.
///
/// # Example
///
/// ```
/// use affirm::{is, Asserter};
///
/// let asserter = Asserter::default();
/// assert!(asserter.that(5, is::greater_than(3)).is_ok());
///
/// let err = asserter.that(4, is::greater_than_or_equal_to(5)).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "  Expected: greater than or equal to 5\n  But was:  4\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Asserter {
    messages: MessageConfig,
    chain: HandlerChain,
}

impl Asserter {
    pub fn new(messages: MessageConfig, chain: HandlerChain) -> Self {
        Self { messages, chain }
    }

    /// Builds an asserter from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails
    /// [`AffirmConfig::validate`].
    pub fn from_config(config: &AffirmConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.messages.clone(),
            HandlerChain::from_config(&config.failure),
        ))
    }

    /// Tests `actual` against `constraint`.
    ///
    /// # Errors
    ///
    /// Returns whatever the handler chain returns for a failure, usually
    /// [`AffirmError::AssertionFailed`](affirm_core::AffirmError). Misuse
    /// and I/O errors from the constraint bypass the chain.
    pub fn that<C: Constraint>(&self, actual: impl Into<Value>, constraint: C) -> Result<()> {
        self.that_with_message(actual, constraint, "")
    }

    /// Like [`that`](Self::that), with a message shown above the diagnostics.
    pub fn that_with_message<C: Constraint>(
        &self,
        actual: impl Into<Value>,
        mut constraint: C,
        message: &str,
    ) -> Result<()> {
        let actual = actual.into();
        if constraint.matches(&actual)? {
            trace!(actual = %actual.type_description(), "Assertion passed");
            return Ok(());
        }

        let mut writer =
            TextMessageWriter::with_config(self.messages.clone()).with_user_message(message);
        constraint.write_message_to(&mut writer);

        let mut description = TextMessageWriter::with_config(self.messages.clone());
        constraint.write_description_to(&mut description);

        debug!(handlers = self.chain.len(), "Assertion failed, running handlers");
        let failure = Failure::new(writer.into_string(), description.into_string(), actual);
        self.chain.handle(&failure)
    }

    /// Failures recorded by a collecting handler, if the chain has one.
    pub fn collected(&self) -> Option<&CollectHandler> {
        self.chain.collected()
    }

    /// Raises once for every failure collected so far.
    ///
    /// # Errors
    ///
    /// Returns [`AffirmError::AssertionFailed`](affirm_core::AffirmError)
    /// if a collecting handler recorded anything.
    pub fn verify(&self) -> Result<()> {
        match self.chain.collected() {
            Some(collector) => collector.verify(),
            None => Ok(()),
        }
    }

    pub fn messages(&self) -> &MessageConfig {
        &self.messages
    }
}

#[cfg(test)]
#[path = "asserter_tests.rs"]
mod tests;
