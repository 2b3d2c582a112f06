//! affirm Core - value model and numeric comparison
//!
//! This crate provides the fundamental abstractions for affirm:
//! - The dynamically typed [`Value`] every assertion tests
//! - Runtime type descriptors used by type constraints
//! - Property access for host objects
//! - Type-aware numeric promotion, ordering and tolerant equality
//! - Error types shared by every affirm crate

pub mod error;
pub mod numerics;
pub mod value;

pub use error::{AffirmError, Result};
pub use numerics::{Number, NumericClass};
pub use value::{
    Array, ByteStream, Object, ObjectRef, PropertyAccessor, ReadSeek, StaticType, Value, ValueType,
};
