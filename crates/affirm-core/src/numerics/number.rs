//! Number - the numeric subset of [`Value`](crate::Value)

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Classification used to pick a promotion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericClass {
    /// Binary floating point (`f32`, `f64`).
    Floating,
    /// Fixed-point decimal.
    Decimal,
    /// Any integral width, signed or unsigned.
    Integral,
}

/// A numeric value of a concrete kind.
///
/// Numbers keep their original kind so that comparisons can promote
/// both operands to the narrowest representation that holds them.
///
/// # Examples
///
/// ```
/// use affirm_core::numerics::{Number, NumericClass};
///
/// assert_eq!(Number::from(3u8).class(), NumericClass::Integral);
/// assert_eq!(Number::from(0.5f32).class(), NumericClass::Floating);
/// assert!(Number::from(2i64).is_positive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
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
}

macro_rules! dispatch {
    ($self:expr, $n:ident => $body:expr) => {
        match $self {
            Number::I8($n) => $body,
            Number::I16($n) => $body,
            Number::I32($n) => $body,
            Number::I64($n) => $body,
            Number::U8($n) => $body,
            Number::U16($n) => $body,
            Number::U32($n) => $body,
            Number::U64($n) => $body,
            Number::F32($n) => $body,
            Number::F64($n) => $body,
            Number::Decimal($n) => $body,
        }
    };
}

impl Number {
    /// Returns the numeric classification of this number.
    pub fn class(&self) -> NumericClass {
        match self {
            Number::F32(_) | Number::F64(_) => NumericClass::Floating,
            Number::Decimal(_) => NumericClass::Decimal,
            _ => NumericClass::Integral,
        }
    }

    /// Returns true for values strictly greater than zero.
    ///
    /// NaN is not positive.
    pub fn is_positive(&self) -> bool {
        match self {
            Number::F32(v) => *v > 0.0,
            Number::F64(v) => *v > 0.0,
            Number::Decimal(v) => v.is_sign_positive() && !v.is_zero(),
            other => other.to_i128().is_some_and(|v| v > 0),
        }
    }

    pub(crate) fn is_u64(&self) -> bool {
        matches!(self, Number::U64(_))
    }

    pub(crate) fn is_i64(&self) -> bool {
        matches!(self, Number::I64(_))
    }

    pub(crate) fn is_u32(&self) -> bool {
        matches!(self, Number::U32(_))
    }

    /// Converts to a decimal, if representable.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Number::I8(v) => Some(Decimal::from(*v)),
            Number::I16(v) => Some(Decimal::from(*v)),
            Number::I32(v) => Some(Decimal::from(*v)),
            Number::I64(v) => Some(Decimal::from(*v)),
            Number::U8(v) => Some(Decimal::from(*v)),
            Number::U16(v) => Some(Decimal::from(*v)),
            Number::U32(v) => Some(Decimal::from(*v)),
            Number::U64(v) => Some(Decimal::from(*v)),
            Number::F32(v) => Decimal::from_f32(*v),
            Number::F64(v) => Decimal::from_f64(*v),
            Number::Decimal(v) => Some(*v),
        }
    }
}

impl ToPrimitive for Number {
    fn to_i64(&self) -> Option<i64> {
        dispatch!(self, n => n.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        dispatch!(self, n => n.to_u64())
    }

    // The default implementations route through i64/u64 and lose the
    // upper half of u64 and the fraction of floats.
    fn to_i128(&self) -> Option<i128> {
        dispatch!(self, n => n.to_i128())
    }

    fn to_u128(&self) -> Option<u128> {
        dispatch!(self, n => n.to_u128())
    }

    fn to_f64(&self) -> Option<f64> {
        dispatch!(self, n => n.to_f64())
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
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
);

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::U64(value as u64)
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::I64(value as i64)
    }
}
