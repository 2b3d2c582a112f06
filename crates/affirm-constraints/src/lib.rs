//! Composable constraints with structural failure diagnostics.
//!
//! This crate provides the matching engine behind affirm:
//! - The [`Constraint`] capability with [`Modifiers`] and boolean composition
//! - Leaf constraints: equality, ordering, ranges, types, strings, identity,
//!   emptiness and collection membership, uniqueness, equivalence, subsets
//! - Prefix constraints that negate, quantify over items or project a property
//! - The equality diff engine, which locates the first mismatch inside nested
//!   collections, arrays and streams and renders it
//! - [`MessageWriter`] and the plain-text [`TextMessageWriter`]
//!
//! # Example
//!
//! ```
//! use affirm_constraints::{is, Constraint, TextMessageWriter};
//! use affirm_core::Value;
//!
//! let expected = Value::from([Value::from([1, 2, 3]), Value::from([4, 5, 6, 7])]);
//! let actual = Value::from([Value::from([1, 2, 3]), Value::from([4, 5, 0, 7])]);
//!
//! let mut constraint = is::equal_to(expected);
//! assert!(!constraint.matches(&actual).unwrap());
//!
//! let mut writer = TextMessageWriter::new();
//! constraint.write_message_to(&mut writer);
//! assert!(writer.as_str().contains("Values differ at index [1]"));
//! assert!(writer.as_str().ends_with("  Expected: 6\n  But was:  0\n"));
//! ```

pub mod binary;
pub mod collection;
pub mod comparison;
pub mod constraint;
pub mod contains;
pub mod empty;
pub mod equality;
pub mod identity;
pub mod prefix;
pub mod property;
pub mod strings;
pub mod syntax;
pub mod types;
pub mod writer;

#[cfg(test)]
mod test_utils;

// ============================================================================
// Constraint capability
// ============================================================================

pub use constraint::{
    Actual, BoxedConstraint, Constraint, ConstraintExt, ConstraintState, FnComparer, Modifiers,
    ValueComparer,
};

// ============================================================================
// Constraints
// ============================================================================

pub use binary::{AndConstraint, OrConstraint};
pub use collection::{
    CollectionContainsConstraint, CollectionEquivalentConstraint, CollectionSubsetConstraint,
    CollectionTally, UniqueItemsConstraint,
};
pub use comparison::{ComparisonConstraint, RangeConstraint};
pub use contains::ContainsConstraint;
pub use empty::EmptyConstraint;
pub use equality::{EqualConstraint, EqualityComparer, FailurePath};
pub use identity::SameAsConstraint;
pub use prefix::{AllItemsConstraint, NoItemConstraint, NotConstraint, SomeItemsConstraint};
pub use property::PropertyConstraint;
pub use strings::{EndsWithConstraint, RegexConstraint, StartsWithConstraint, SubstringConstraint};
pub use types::{AssignableFromConstraint, ExactTypeConstraint, InstanceOfTypeConstraint};

// ============================================================================
// Builders and rendering
// ============================================================================

pub use syntax::{contains, has, is, text};
pub use writer::{MessageWriter, TextMessageWriter};
