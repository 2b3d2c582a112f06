//! Numeric comparison across mixed numeric kinds.
//!
//! Both operands are classified, promoted to a common representation and
//! then compared. The promotion table is:
//!
//! | either operand | promoted to |
//! |---|---|
//! | floating | `f64` |
//! | decimal | `Decimal` |
//! | `u64` | `u64` |
//! | `i64` | `i64` |
//! | `u32` | `u32` |
//! | otherwise | `i32` |
//!
//! Integral values that do not fit the chosen representation (a negative
//! value against a `u64`) are widened to `i128` instead.

mod number;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{AffirmError, Result};
use crate::value::Value;

pub use number::{Number, NumericClass};

/// Two numbers promoted to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promoted {
    Float(f64, f64),
    Decimal(Decimal, Decimal),
    U64(u64, u64),
    I64(i64, i64),
    U32(u32, u32),
    I32(i32, i32),
    Wide(i128, i128),
}

/// Promotes two numbers to their common representation.
///
/// # Examples
///
/// ```
/// use affirm_core::numerics::{promote, Number, Promoted};
///
/// assert_eq!(promote(Number::from(1u8), Number::from(2i16)), Promoted::I32(1, 2));
/// assert_eq!(promote(Number::from(1u64), Number::from(2i32)), Promoted::U64(1, 2));
/// assert_eq!(promote(Number::from(1u64), Number::from(-2i32)), Promoted::Wide(1, -2));
/// assert_eq!(promote(Number::from(1i32), Number::from(0.5f32)), Promoted::Float(1.0, 0.5));
/// ```
pub fn promote(x: Number, y: Number) -> Promoted {
    use NumericClass::{Decimal as Dec, Floating};

    match (x.class(), y.class()) {
        (Floating, _) | (_, Floating) => Promoted::Float(as_f64(&x), as_f64(&y)),
        (Dec, _) | (_, Dec) => match (x.to_decimal(), y.to_decimal()) {
            (Some(a), Some(b)) => Promoted::Decimal(a, b),
            _ => Promoted::Float(as_f64(&x), as_f64(&y)),
        },
        _ => promote_integral(x, y),
    }
}

fn promote_integral(x: Number, y: Number) -> Promoted {
    let converted = if x.is_u64() || y.is_u64() {
        x.to_u64().zip(y.to_u64()).map(|(a, b)| Promoted::U64(a, b))
    } else if x.is_i64() || y.is_i64() {
        x.to_i64().zip(y.to_i64()).map(|(a, b)| Promoted::I64(a, b))
    } else if x.is_u32() || y.is_u32() {
        x.to_u32().zip(y.to_u32()).map(|(a, b)| Promoted::U32(a, b))
    } else {
        x.to_i32().zip(y.to_i32()).map(|(a, b)| Promoted::I32(a, b))
    };

    converted.unwrap_or_else(|| {
        Promoted::Wide(
            x.to_i128().unwrap_or_default(),
            y.to_i128().unwrap_or_default(),
        )
    })
}

fn as_f64(n: &Number) -> f64 {
    n.to_f64().unwrap_or(f64::NAN)
}

/// Tests two numbers for equality, optionally within a tolerance.
///
/// A missing, zero or negative tolerance means exact equality of the
/// promoted values. Two NaNs are equal. When either operand is NaN or
/// infinite the tolerance is ignored.
///
/// # Examples
///
/// ```
/// use affirm_core::numerics::{are_equal, Number};
///
/// assert!(are_equal(Number::from(5i32), Number::from(5u64), None));
/// assert!(are_equal(Number::from(1.0f64), Number::from(1.05f64), Some(Number::from(0.1))));
/// assert!(!are_equal(Number::from(1.0f64), Number::from(1.2f64), Some(Number::from(0.1))));
/// assert!(are_equal(Number::from(f64::NAN), Number::from(f64::NAN), None));
/// ```
pub fn are_equal(expected: Number, actual: Number, tolerance: Option<Number>) -> bool {
    let tolerance = tolerance.filter(Number::is_positive);

    match promote(expected, actual) {
        Promoted::Float(e, a) => {
            if e.is_nan() && a.is_nan() {
                return true;
            }
            if !e.is_finite() || !a.is_finite() {
                return e == a;
            }
            match tolerance.and_then(|t| t.to_f64()) {
                Some(t) => (e - a).abs() <= t,
                None => e == a,
            }
        }
        Promoted::Decimal(e, a) => match saturate(tolerance, Number::to_decimal, Decimal::MAX) {
            Some(t) => match e.checked_sub(a) {
                Some(d) => d.abs() <= t,
                None => t == Decimal::MAX,
            },
            None => e == a,
        },
        Promoted::U64(e, a) => within(e.abs_diff(a), saturate(tolerance, Number::to_u64, u64::MAX)),
        Promoted::I64(e, a) => within(e.abs_diff(a), saturate(tolerance, Number::to_u64, u64::MAX)),
        Promoted::U32(e, a) => within(e.abs_diff(a), saturate(tolerance, Number::to_u32, u32::MAX)),
        Promoted::I32(e, a) => within(e.abs_diff(a), saturate(tolerance, Number::to_u32, u32::MAX)),
        Promoted::Wide(e, a) => {
            within(e.abs_diff(a), saturate(tolerance, Number::to_u128, u128::MAX))
        }
    }
}

// A positive tolerance too large for the promoted representation becomes
// its maximum.
fn saturate<T>(
    tolerance: Option<Number>,
    convert: impl FnOnce(&Number) -> Option<T>,
    max: T,
) -> Option<T> {
    tolerance.map(|t| convert(&t).unwrap_or(max))
}

fn within<T: PartialOrd + Default>(diff: T, tolerance: Option<T>) -> bool {
    match tolerance {
        Some(t) => diff <= t,
        None => diff == T::default(),
    }
}

/// Three-way comparison of two numbers on their promoted representation.
///
/// NaN orders below every other value and equal to itself.
pub fn compare_numbers(x: Number, y: Number) -> Ordering {
    match promote(x, y) {
        Promoted::Float(a, b) => compare_floats(a, b),
        Promoted::Decimal(a, b) => a.cmp(&b),
        Promoted::U64(a, b) => a.cmp(&b),
        Promoted::I64(a, b) => a.cmp(&b),
        Promoted::U32(a, b) => a.cmp(&b),
        Promoted::I32(a, b) => a.cmp(&b),
        Promoted::Wide(a, b) => a.cmp(&b),
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        })
}

/// Three-way comparison of two values.
///
/// Numbers are promoted first; strings, characters, booleans and
/// date/times use their native ordering.
///
/// # Errors
///
/// Returns [`AffirmError::InvalidArgument`] if either side is null or the
/// two values are not comparable.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use affirm_core::{numerics, Value};
///
/// assert_eq!(numerics::compare(&Value::from(5u8), &Value::from(4.5)).unwrap(), Ordering::Greater);
/// assert_eq!(numerics::compare(&Value::from("a"), &Value::from("b")).unwrap(), Ordering::Less);
/// assert!(numerics::compare(&Value::Null, &Value::from(1)).is_err());
/// ```
pub fn compare(x: &Value, y: &Value) -> Result<Ordering> {
    if x.is_null() || y.is_null() {
        return Err(AffirmError::invalid_argument("cannot compare a null value"));
    }

    if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
        return Ok(compare_numbers(a, b));
    }

    match (x, y) {
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        (Value::DateTime(a), Value::DateTime(b)) => Ok(a.cmp(b)),
        _ => Err(AffirmError::invalid_argument(format!(
            "cannot compare {} with {}",
            x.type_description(),
            y.type_description()
        ))),
    }
}

/// Returns true if the value is of a numeric kind.
pub fn is_numeric(value: &Value) -> bool {
    value.as_number().is_some()
}
