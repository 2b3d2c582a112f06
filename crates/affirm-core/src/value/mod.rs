//! The dynamically typed value model.
//!
//! Every assertion tests a [`Value`]. Rust values convert into it with
//! `From`, so call sites rarely name the variants directly:
//!
//! ```
//! use affirm_core::{Value, ValueType};
//!
//! assert_eq!(Value::from(3).value_type(), Some(ValueType::I32));
//! assert_eq!(Value::from("hi").as_str(), Some("hi"));
//! assert_eq!(Value::from(vec![1, 2]).collection_items().map(<[Value]>::len), Some(2));
//! assert!(Value::from(None::<i32>).is_null());
//! ```

mod array;
mod object;
mod stream;
mod value_type;


use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::numerics::Number;

pub use array::Array;
pub use object::{Object, ObjectRef, PropertyAccessor};
pub use stream::{ByteStream, ReadSeek};
pub use value_type::{StaticType, ValueType};

/// A value under test.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Str(String),
    DateTime(NaiveDateTime),
    /// A generic collection, compared in iteration order.
    List(Vec<Value>),
    /// An array of any rank.
    Array(Array),
    Stream(ByteStream),
    Object(ObjectRef),
}

impl Value {
    /// Creates a list from any iterator of convertible items.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a rank-1 array from any iterator of convertible items.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(Array::new(items.into_iter().map(Into::into).collect()))
    }

    /// Wraps a host object.
    pub fn object<T: Object>(object: T) -> Self {
        Value::Object(ObjectRef::new(object))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the numeric view of this value, if it is numeric.
    pub fn as_number(&self) -> Option<Number> {
        Some(match self {
            Value::I8(v) => Number::I8(*v),
            Value::I16(v) => Number::I16(*v),
            Value::I32(v) => Number::I32(*v),
            Value::I64(v) => Number::I64(*v),
            Value::U8(v) => Number::U8(*v),
            Value::U16(v) => Number::U16(*v),
            Value::U32(v) => Number::U32(*v),
            Value::U64(v) => Number::U64(*v),
            Value::F32(v) => Number::F32(*v),
            Value::F64(v) => Number::F64(*v),
            Value::Decimal(v) => Number::Decimal(*v),
            _ => return None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_stream(&self) -> Option<&ByteStream> {
        match self {
            Value::Stream(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the items of a list or array (row-major for arrays).
    ///
    /// Strings and streams are not collections.
    pub fn collection_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            Value::Array(array) => Some(array.items()),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        self.collection_items().is_some()
    }

    /// Returns the runtime type, or `None` for null.
    pub fn value_type(&self) -> Option<ValueType> {
        Some(match self {
            Value::Null => return None,
            Value::Bool(_) => ValueType::BOOL,
            Value::Char(_) => ValueType::CHAR,
            Value::I8(_) => ValueType::I8,
            Value::I16(_) => ValueType::I16,
            Value::I32(_) => ValueType::I32,
            Value::I64(_) => ValueType::I64,
            Value::U8(_) => ValueType::U8,
            Value::U16(_) => ValueType::U16,
            Value::U32(_) => ValueType::U32,
            Value::U64(_) => ValueType::U64,
            Value::F32(_) => ValueType::F32,
            Value::F64(_) => ValueType::F64,
            Value::Decimal(_) => ValueType::DECIMAL,
            Value::Str(_) => ValueType::STRING,
            Value::DateTime(_) => ValueType::DATE_TIME,
            Value::List(items) => ValueType::list(array::infer_element_type(items)),
            Value::Array(array) => array.value_type(),
            Value::Stream(_) => ValueType::BYTE_STREAM,
            Value::Object(object) => object.get().value_type(),
        })
    }

    /// Type name for messages; `null` for null.
    pub fn type_description(&self) -> String {
        self.value_type()
            .map_or_else(|| "null".to_string(), |t| t.to_string())
    }
}

/// Built-in properties: `Length` of strings and arrays, `Count` of lists,
/// `Rank` of arrays. Objects answer for themselves.
impl PropertyAccessor for Value {
    fn try_get(&self, name: &str) -> Option<Value> {
        match (self, name) {
            (Value::Object(object), _) => object.get().try_get(name),
            (Value::Str(s), "Length") => Some(Value::from(s.chars().count())),
            (Value::List(items), "Count") => Some(Value::from(items.len())),
            (Value::Array(array), "Length") => Some(Value::from(array.len())),
            (Value::Array(array), "Rank") => Some(Value::from(array.rank())),
            (Value::Stream(stream), "Length") => Some(Value::U64(stream.len())),
            _ => None,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    String => Str,
    NaiveDateTime => DateTime,
    Array => Array,
    ByteStream => Stream,
    ObjectRef => Object,
);

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::U64(value as u64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::I64(value as i64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::I8(v) => Value::I8(v),
            Number::I16(v) => Value::I16(v),
            Number::I32(v) => Value::I32(v),
            Number::I64(v) => Value::I64(v),
            Number::U8(v) => Value::U8(v),
            Number::U16(v) => Value::U16(v),
            Number::U32(v) => Value::U32(v),
            Number::U64(v) => Value::U64(v),
            Number::F32(v) => Value::F32(v),
            Number::F64(v) => Value::F64(v),
            Number::Decimal(v) => Value::Decimal(v),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

/// Fixed-size Rust arrays become rank-1 arrays; nesting them yields a
/// jagged array.
impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::array(items)
    }
}

impl<T: Object> From<std::sync::Arc<T>> for Value {
    fn from(object: std::sync::Arc<T>) -> Self {
        Value::Object(ObjectRef::from(object))
    }
}
