//! affirm - Constraint-Based Assertions in Rust
//!
//! Build a constraint, test a value against it, and get a structured
//! diagnostic when it fails.
//!
//! # Example
//!
//! ```rust
//! use affirm::prelude::*;
//!
//! assert_that!(vec![3, 1, 2], is::equivalent_to(vec![1, 2, 3]));
//! assert_that!("Hello World", text::contains("world").ignore_case());
//!
//! let err = Asserter::default()
//!     .that("three", is::equal_to("ten"))
//!     .unwrap_err();
//! assert!(err.to_string().starts_with("  Expected string length 3 but was 5."));
//! ```

// Value model
pub use affirm_core::{
    AffirmError, Array, ByteStream, Number, Object, ObjectRef, PropertyAccessor, Result,
    StaticType, Value, ValueType,
};

// Configuration
pub use affirm_config::{AffirmConfig, ConfigError, HandlerKind, LogLevel, MessageConfig};

// Constraints and builders
pub use affirm_constraints::{
    contains, has, is, text, BoxedConstraint, Constraint, ConstraintExt, FnComparer,
    MessageWriter, Modifiers, TextMessageWriter, ValueComparer,
};

/// Every built-in constraint type.
pub mod constraints {
    pub use affirm_constraints::{
        AllItemsConstraint, AndConstraint, AssignableFromConstraint, CollectionContainsConstraint,
        CollectionEquivalentConstraint, CollectionSubsetConstraint, ComparisonConstraint,
        ContainsConstraint, EmptyConstraint, EndsWithConstraint, EqualConstraint,
        ExactTypeConstraint, InstanceOfTypeConstraint, NoItemConstraint, NotConstraint,
        OrConstraint, PropertyConstraint, RangeConstraint, RegexConstraint, SameAsConstraint,
        SomeItemsConstraint, StartsWithConstraint, SubstringConstraint, UniqueItemsConstraint,
    };
}

mod asserter;
mod failure;
mod handler;

pub use asserter::Asserter;
pub use failure::Failure;
pub use handler::{CollectHandler, FailureHandler, HandlerChain, LogHandler, Next, RaiseHandler};

#[cfg(feature = "console")]
pub mod console;

/// Asserts that a value satisfies a constraint, panicking with the
/// rendered diagnostics otherwise.
///
/// An optional format string adds a message above the diagnostics.
///
/// ```should_panic
/// use affirm::{assert_that, is};
///
/// assert_that!(4, is::greater_than(5), "attempt {}", 3);
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $constraint:expr $(,)?) => {
        if let ::std::result::Result::Err(error) =
            $crate::Asserter::default().that($actual, $constraint)
        {
            ::std::panic!("\n{}", error);
        }
    };
    ($actual:expr, $constraint:expr, $($arg:tt)+) => {
        if let ::std::result::Result::Err(error) = $crate::Asserter::default()
            .that_with_message($actual, $constraint, &::std::format!($($arg)+))
        {
            ::std::panic!("\n{}", error);
        }
    };
}

pub mod prelude {
    pub use super::{assert_that, contains, has, is, text};
    pub use super::{Asserter, Constraint, ConstraintExt, Value};
}
