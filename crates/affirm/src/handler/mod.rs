//! Failure handler chain.
//!
//! A failed assertion is passed along an ordered list of handlers. Each
//! handler decides whether to stop the failure, raise it, or hand it to
//! the rest of the chain through [`Next`]. A chain that runs out of
//! handlers raises.

mod builtin;

use affirm_config::{FailureConfig, HandlerKind};
use affirm_core::{AffirmError, Result};

use crate::failure::Failure;

pub use builtin::{CollectHandler, LogHandler, RaiseHandler};

/// Reacts to a failed assertion.
///
/// # Example
///
/// ```
/// use affirm::{Failure, FailureHandler, HandlerChain, Next, RaiseHandler};
/// use affirm_core::{Result, Value};
///
/// struct Tag;
///
/// impl FailureHandler for Tag {
///     fn handle(&self, failure: &Failure, next: Next<'_>) -> Result<()> {
///         let tagged = Failure::new(
///             format!("[smoke] {}", failure.message()),
///             failure.expected(),
///             failure.actual().clone(),
///         );
///         next.run(&tagged)
///     }
/// }
///
/// let chain = HandlerChain::new().with(Tag).with(RaiseHandler);
/// let err = chain
///     .handle(&Failure::new("boom", "5", Value::from(4)))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "[smoke] boom");
/// ```
pub trait FailureHandler: Send + Sync {
    /// Handles `failure`, optionally delegating to the rest of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`AffirmError::AssertionFailed`] to fail the assertion.
    fn handle(&self, failure: &Failure, next: Next<'_>) -> Result<()>;
}

/// The handlers after the current one.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    rest: &'a [Box<dyn FailureHandler>],
}

impl<'a> Next<'a> {
    /// Passes `failure` to the next handler, raising if there is none.
    pub fn run(self, failure: &Failure) -> Result<()> {
        match self.rest.split_first() {
            Some((handler, rest)) => handler.handle(failure, Next { rest }),
            None => Err(AffirmError::AssertionFailed(failure.message().to_string())),
        }
    }

    /// Number of handlers still to run.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}

/// An ordered list of failure handlers.
pub struct HandlerChain {
    handlers: Vec<Box<dyn FailureHandler>>,
    collector: Option<CollectHandler>,
}

impl HandlerChain {
    /// Creates an empty chain, which raises every failure.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            collector: None,
        }
    }

    /// Builds the chain described by the `[failure]` configuration.
    pub fn from_config(config: &FailureConfig) -> Self {
        config
            .handlers
            .iter()
            .fold(Self::new(), |chain, kind| match kind {
                HandlerKind::Log => chain.with(LogHandler::new(config.log_level)),
                HandlerKind::Collect => chain.with_collector(CollectHandler::new()),
                HandlerKind::Raise => chain.with(RaiseHandler),
            })
    }

    /// Appends a handler.
    pub fn with(mut self, handler: impl FailureHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Appends a collecting handler whose failures stay readable
    /// through [`collected`](Self::collected).
    pub fn with_collector(mut self, collector: CollectHandler) -> Self {
        self.handlers.push(Box::new(collector.clone()));
        self.collector = Some(collector);
        self
    }

    /// Runs `failure` through the chain.
    pub fn handle(&self, failure: &Failure) -> Result<()> {
        Next {
            rest: &self.handlers,
        }
        .run(failure)
    }

    /// The collecting handler, if the chain has one.
    pub fn collected(&self) -> Option<&CollectHandler> {
        self.collector.as_ref()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerChain {
    /// A chain with a single [`RaiseHandler`].
    fn default() -> Self {
        Self::new().with(RaiseHandler)
    }
}

impl std::fmt::Debug for HandlerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.handlers.len())
            .field("collector", &self.collector.is_some())
            .finish()
    }
}
