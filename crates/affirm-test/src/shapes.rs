//! Shape fixtures: `Circle` and `Square`, both deriving from `Shape`.
//!
//! `Shape` itself has no concrete host type; it only appears as a
//! supertype name, which is enough for instance-of tests.

use std::any::Any;
use std::f64::consts::PI;

use affirm_core::{Object, PropertyAccessor, Value, ValueType};

/// The abstract `Shape` type.
pub fn shape_type() -> ValueType {
    ValueType::named("Shape", Vec::<String>::new())
}

/// The runtime type of [`Circle`].
pub fn circle_type() -> ValueType {
    ValueType::named("Circle", ["Shape"])
}

/// The runtime type of [`Square`].
pub fn square_type() -> ValueType {
    ValueType::named("Square", ["Shape"])
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl PropertyAccessor for Circle {
    fn try_get(&self, name: &str) -> Option<Value> {
        match name {
            "Radius" => Some(Value::from(self.radius)),
            "Area" => Some(Value::from(PI * self.radius * self.radius)),
            _ => None,
        }
    }
}

impl Object for Circle {
    fn value_type(&self) -> ValueType {
        circle_type()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &dyn Object) -> bool {
        other
            .as_any()
            .downcast_ref::<Circle>()
            .is_some_and(|other| self == other)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl PropertyAccessor for Square {
    fn try_get(&self, name: &str) -> Option<Value> {
        match name {
            "Side" => Some(Value::from(self.side)),
            "Area" => Some(Value::from(self.side * self.side)),
            _ => None,
        }
    }
}

// Squares compare by identity only.
impl Object for Square {
    fn value_type(&self) -> ValueType {
        square_type()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
