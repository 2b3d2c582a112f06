//! Runtime type descriptors for values.

use std::fmt;

/// The runtime type of a [`Value`](crate::Value).
///
/// Type constraints compare these descriptors: exact equality for
/// "is exactly of type", and [`is_assignable_from`](Self::is_assignable_from)
/// for the is-a tests.
///
/// # Examples
///
/// ```
/// use affirm_core::ValueType;
///
/// let shape = ValueType::named("Shape", Vec::<String>::new());
/// let circle = ValueType::named("Circle", ["Shape"]);
///
/// assert!(shape.is_assignable_from(&circle));
/// assert!(!circle.is_assignable_from(&shape));
/// assert!(ValueType::OBJECT.is_assignable_from(&circle));
/// assert_eq!(ValueType::array(ValueType::I32, 2).to_string(), "i32[,]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A built-in scalar type, identified by name.
    Primitive(&'static str),
    /// An N-dimensional array.
    Array { element: Box<ValueType>, rank: usize },
    /// A generic collection.
    List { element: Box<ValueType> },
    /// A host object type together with every type it derives from.
    Named { name: String, supertypes: Vec<String> },
}

impl ValueType {
    /// The root of the type hierarchy; every type is assignable to it.
    pub const OBJECT: ValueType = ValueType::Primitive("object");
    /// Pseudo-supertype of every array and list.
    pub const COLLECTION: ValueType = ValueType::Primitive("Collection");

    pub const BOOL: ValueType = ValueType::Primitive("bool");
    pub const CHAR: ValueType = ValueType::Primitive("char");
    pub const I8: ValueType = ValueType::Primitive("i8");
    pub const I16: ValueType = ValueType::Primitive("i16");
    pub const I32: ValueType = ValueType::Primitive("i32");
    pub const I64: ValueType = ValueType::Primitive("i64");
    pub const U8: ValueType = ValueType::Primitive("u8");
    pub const U16: ValueType = ValueType::Primitive("u16");
    pub const U32: ValueType = ValueType::Primitive("u32");
    pub const U64: ValueType = ValueType::Primitive("u64");
    pub const F32: ValueType = ValueType::Primitive("f32");
    pub const F64: ValueType = ValueType::Primitive("f64");
    pub const DECIMAL: ValueType = ValueType::Primitive("decimal");
    pub const STRING: ValueType = ValueType::Primitive("String");
    pub const DATE_TIME: ValueType = ValueType::Primitive("DateTime");
    pub const BYTE_STREAM: ValueType = ValueType::Primitive("ByteStream");

    /// Creates an array type of the given element type and rank.
    pub fn array(element: ValueType, rank: usize) -> Self {
        ValueType::Array {
            element: Box::new(element),
            rank,
        }
    }

    /// Creates a list type of the given element type.
    pub fn list(element: ValueType) -> Self {
        ValueType::List {
            element: Box::new(element),
        }
    }

    /// Creates a host object type.
    pub fn named<I, S>(name: impl Into<String>, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueType::Named {
            name: name.into(),
            supertypes: supertypes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the type for a Rust type that has a value representation.
    pub fn of<T: StaticType>() -> Self {
        T::value_type()
    }

    /// Returns true for array and list types.
    pub fn is_collection(&self) -> bool {
        matches!(self, ValueType::Array { .. } | ValueType::List { .. })
    }

    /// Returns true if a value of type `other` is also of type `self`.
    pub fn is_assignable_from(&self, other: &ValueType) -> bool {
        if self == other || *self == ValueType::OBJECT {
            return true;
        }
        if *self == ValueType::COLLECTION {
            return other.is_collection();
        }
        match (self, other) {
            (ValueType::Named { name, .. }, ValueType::Named { supertypes, .. }) => {
                supertypes.iter().any(|s| s == name)
            }
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Primitive(name) => f.write_str(name),
            ValueType::Array { element, rank } => {
                write!(f, "{}[{}]", element, ",".repeat(rank.saturating_sub(1)))
            }
            ValueType::List { element } => write!(f, "List<{}>", element),
            ValueType::Named { name, .. } => f.write_str(name),
        }
    }
}

/// Rust types with a fixed [`ValueType`].
pub trait StaticType {
    fn value_type() -> ValueType;
}

macro_rules! impl_static_type {
    ($($ty:ty => $konst:ident),* $(,)?) => {
        $(
            impl StaticType for $ty {
                fn value_type() -> ValueType {
                    ValueType::$konst
                }
            }
        )*
    };
}

impl_static_type!(
    bool => BOOL,
    char => CHAR,
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
    rust_decimal::Decimal => DECIMAL,
    String => STRING,
    &str => STRING,
    chrono::NaiveDateTime => DATE_TIME,
);

impl<T: StaticType> StaticType for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::list(T::value_type())
    }
}
