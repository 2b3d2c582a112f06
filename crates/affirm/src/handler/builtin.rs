use std::sync::{Arc, Mutex, PoisonError};

use affirm_config::LogLevel;
use affirm_core::{AffirmError, Result};
use tracing::{debug, error, info, warn};

use super::{FailureHandler, Next};
use crate::failure::Failure;

/// Fails the assertion with the rendered message.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaiseHandler;

impl FailureHandler for RaiseHandler {
    fn handle(&self, failure: &Failure, _next: Next<'_>) -> Result<()> {
        Err(AffirmError::AssertionFailed(failure.message().to_string()))
    }
}

/// Emits a tracing event for the failure, then delegates.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandler {
    level: LogLevel,
}

impl LogHandler {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl FailureHandler for LogHandler {
    fn handle(&self, failure: &Failure, next: Next<'_>) -> Result<()> {
        let message = failure.message();
        let expected = failure.expected();
        match self.level {
            LogLevel::Error => error!(failure = message, expected, "Assertion failed"),
            LogLevel::Warn => warn!(failure = message, expected, "Assertion failed"),
            LogLevel::Info => info!(failure = message, expected, "Assertion failed"),
            LogLevel::Debug => debug!(failure = message, expected, "Assertion failed"),
        }
        next.run(failure)
    }
}

/// Records failures and lets the test continue.
///
/// Clones share one record, so a handle kept outside the chain sees
/// everything the chain collected.
#[derive(Debug, Clone, Default)]
pub struct CollectHandler {
    failures: Arc<Mutex<Vec<String>>>,
}

impl CollectHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages collected so far, oldest first.
    pub fn failures(&self) -> Vec<String> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns every collected message.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.failures.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Raises once for everything collected, then starts over.
    ///
    /// # Errors
    ///
    /// Returns [`AffirmError::AssertionFailed`] joining every collected
    /// message if any were recorded.
    pub fn verify(&self) -> Result<()> {
        let failures = self.take();
        if failures.is_empty() {
            return Ok(());
        }
        let mut message = format!("{} assertion(s) failed:\n", failures.len());
        for (index, failure) in failures.iter().enumerate() {
            message.push_str(&format!("{})\n{}", index + 1, failure));
        }
        Err(AffirmError::AssertionFailed(message))
    }
}

impl FailureHandler for CollectHandler {
    fn handle(&self, failure: &Failure, _next: Next<'_>) -> Result<()> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure.message().to_string());
        Ok(())
    }
}
