//! Shared test fixtures for affirm crates.
//!
//! This crate provides host object types for testing property access,
//! type hierarchies and object equality.
//! It does NOT depend on `affirm-constraints` to avoid circular dependencies.
//!
//! - [`people`] - A record type with value equality and properties
//! - [`shapes`] - A small type hierarchy rooted at `Shape`
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! affirm-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use affirm_core::Value;
//! use affirm_test::people::Person;
//! use affirm_test::shapes::Circle;
//!
//! let ann = Value::object(Person::new("Ann", 31));
//! let circle = Value::object(Circle::new(1.0));
//! assert_ne!(ann, circle);
//! ```

pub mod people;
pub mod shapes;

pub use people::Person;
pub use shapes::{Circle, Square};
