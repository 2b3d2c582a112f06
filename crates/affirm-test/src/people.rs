//! Person fixture.
//!
//! Two people are equal when name and age match, so collections of them
//! exercise value equality rather than identity.
//!
//! # Example
//!
//! ```
//! use affirm_core::{PropertyAccessor, Value};
//! use affirm_test::people::Person;
//!
//! let ann = Person::new("Ann", 31);
//! assert_eq!(ann.try_get("Age"), Some(Value::from(31u32)));
//! assert_eq!(Value::object(ann), Value::object(Person::new("Ann", 31)));
//! ```

use std::any::Any;

use affirm_core::{Object, PropertyAccessor, Value, ValueType};

/// A person with a name and an age.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Creates a person.
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

/// The runtime type of [`Person`].
pub fn person_type() -> ValueType {
    ValueType::named("Person", Vec::<String>::new())
}

impl PropertyAccessor for Person {
    fn try_get(&self, name: &str) -> Option<Value> {
        match name {
            "Name" => Some(Value::from(self.name.as_str())),
            "Age" => Some(Value::from(self.age)),
            _ => None,
        }
    }
}

impl Object for Person {
    fn value_type(&self) -> ValueType {
        person_type()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &dyn Object) -> bool {
        other
            .as_any()
            .downcast_ref::<Person>()
            .is_some_and(|other| self == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_fields() {
        let ann = Value::object(Person::new("Ann", 31));
        assert_eq!(ann, Value::object(Person::new("Ann", 31)));
        assert_ne!(ann, Value::object(Person::new("Ann", 32)));
    }

    #[test]
    fn test_unknown_property() {
        assert_eq!(Person::new("Bob", 40).try_get("Salary"), None);
    }
}
