//! Host objects and property access.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::{Value, ValueType};

/// Named property lookup.
///
/// Property constraints use this capability instead of runtime reflection.
/// Visibility is not restricted: an implementation may expose any state it
/// chooses under any name.
pub trait PropertyAccessor {
    /// Returns the property's value, or `None` if there is no such property.
    fn try_get(&self, name: &str) -> Option<Value>;
}

/// A host type that can be carried inside a [`Value`].
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use affirm_core::{Object, PropertyAccessor, Value, ValueType};
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
///
/// impl PropertyAccessor for Point {
///     fn try_get(&self, name: &str) -> Option<Value> {
///         match name {
///             "x" => Some(Value::from(self.x)),
///             "y" => Some(Value::from(self.y)),
///             _ => None,
///         }
///     }
/// }
///
/// impl Object for Point {
///     fn value_type(&self) -> ValueType {
///         ValueType::named("Point", Vec::<String>::new())
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let point = Value::object(Point { x: 1, y: 2 });
/// assert_eq!(point.try_get("y"), Some(Value::from(2)));
/// assert_eq!(point.try_get("z"), None);
/// ```
pub trait Object: PropertyAccessor + fmt::Debug + Send + Sync + 'static {
    /// The runtime type of this object.
    fn value_type(&self) -> ValueType;

    fn as_any(&self) -> &dyn Any;

    /// Value equality with another object.
    ///
    /// Identical handles are always equal; this is consulted otherwise.
    fn equals(&self, _other: &dyn Object) -> bool {
        false
    }
}

/// A shared handle to a host object.
#[derive(Clone)]
pub struct ObjectRef(Arc<dyn Object>);

impl ObjectRef {
    pub fn new<T: Object>(object: T) -> Self {
        ObjectRef(Arc::new(object))
    }

    /// Returns true if both handles point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn get(&self) -> &dyn Object {
        &*self.0
    }

    /// Downcasts to a concrete host type.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl<T: Object> From<Arc<T>> for ObjectRef {
    fn from(object: Arc<T>) -> Self {
        ObjectRef(object)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.equals(other.get())
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
