//! Display formatting for values in failure messages.

use affirm_core::{Array, Value, ValueType};

use super::text::escape_control_chars;

const F64_DIGITS: usize = 17;
const F32_DIGITS: usize = 9;

/// Formats a value the way it appears after `Expected:` or `But was:`.
///
/// Collections show at most `collection_limit` items.
pub fn format_value(value: &Value, collection_limit: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Char(c) => format!("'{}'", escape_control_chars(&c.to_string())),
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) if v.is_finite() => format!("{}f", format_f32(*v)),
        Value::F32(v) => format_f32(*v),
        Value::F64(v) if v.is_finite() => format!("{}d", format_f64(*v)),
        Value::F64(v) => format_f64(*v),
        Value::Decimal(d) => format!("{}m", d.normalize()),
        Value::Str(s) if s.is_empty() => "<empty string>".to_string(),
        Value::Str(s) => format!("\"{}\"", escape_control_chars(s)),
        Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        Value::List(items) => format_elements(items, 0, collection_limit, collection_limit),
        Value::Array(array) => {
            format_elements(array.items(), 0, collection_limit, collection_limit)
        }
        Value::Stream(stream) => format!("<ByteStream of {} bytes>", stream.len()),
        Value::Object(object) => format!("<{:?}>", object),
    }
}

/// Formats up to `max` items starting at `start` as `< a, b >`.
///
/// Appends `...` when items remain past the shown ones.
pub fn format_elements(
    items: &[Value],
    start: usize,
    max: usize,
    collection_limit: usize,
) -> String {
    if items.is_empty() {
        return "<empty>".to_string();
    }

    let shown: Vec<String> = items
        .iter()
        .skip(start)
        .take(max)
        .map(|item| format_value(item, collection_limit))
        .collect();

    let mut out = format!("< {}", shown.join(", "));
    if start + max < items.len() {
        out.push_str("...");
    }
    out.push_str(" >");
    out
}

/// Formats an `f64` with the shortest round-trip digits.
///
/// ```
/// use affirm_constraints::writer::format::format_f64;
///
/// assert_eq!(format_f64(1.5), "1.5");
/// assert_eq!(format_f64(1.0e20), "1E+20");
/// assert_eq!(format_f64(0.0001), "0.0001");
/// ```
pub fn format_f64(v: f64) -> String {
    if let Some(special) = non_finite(v.is_nan(), v.is_infinite(), v.is_sign_negative()) {
        return special;
    }
    let mut sci = format!("{:e}", v);
    if significant_digits(&sci) > F64_DIGITS {
        sci = format!("{:.*e}", F64_DIGITS - 1, v);
    }
    layout_general(&sci, F64_DIGITS)
}

/// Formats an `f32` with the shortest round-trip digits.
pub fn format_f32(v: f32) -> String {
    if let Some(special) = non_finite(v.is_nan(), v.is_infinite(), v.is_sign_negative()) {
        return special;
    }
    let mut sci = format!("{:e}", v);
    if significant_digits(&sci) > F32_DIGITS {
        sci = format!("{:.*e}", F32_DIGITS - 1, v);
    }
    layout_general(&sci, F32_DIGITS)
}

fn non_finite(nan: bool, infinite: bool, negative: bool) -> Option<String> {
    if nan {
        Some("NaN".to_string())
    } else if infinite && negative {
        Some("-Infinity".to_string())
    } else if infinite {
        Some("Infinity".to_string())
    } else {
        None
    }
}

fn significant_digits(sci: &str) -> usize {
    sci.split('e')
        .next()
        .map_or(0, |m| m.chars().filter(char::is_ascii_digit).count())
}

// Lays out `d.ddde±x` positionally when -5 <= x < max_digits, otherwise
// as `d.dddE+xx`.
fn layout_general(sci: &str, max_digits: usize) -> String {
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let negative = mantissa.starts_with('-');

    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if (-5..max_digits as i32).contains(&exponent) {
        let point = exponent + 1;
        let n = digits.len() as i32;
        if point <= 0 {
            out.push_str("0.");
            out.push_str(&"0".repeat((-point) as usize));
            out.push_str(&digits);
        } else if point >= n {
            out.push_str(&digits);
            out.push_str(&"0".repeat((point - n) as usize));
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            out.push_str(whole);
            out.push('.');
            out.push_str(fraction);
        }
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        out.push_str(&format!("E{}{:02}", sign, exponent.unsigned_abs()));
    }
    out
}

/// Describes a value's type and shape for collection diff headers.
///
/// Arrays show their dimensions (`<i32[2,3]>`, jagged `<i32[3][]>`);
/// lists add their element count.
pub fn type_representation(value: &Value) -> String {
    match value {
        Value::Array(array) => array_representation(array),
        Value::List(items) => {
            format!("<{}> with {} elements", value.type_description(), items.len())
        }
        other => format!("<{}>", other.type_description()),
    }
}

fn array_representation(array: &Array) -> String {
    let mut element = array.element_type();
    let mut nesting = 0;
    while let ValueType::Array { element: inner, .. } = element {
        element = inner;
        nesting += 1;
    }
    let dims: Vec<String> = array.shape().iter().map(ToString::to_string).collect();
    format!("<{}[{}]{}>", element, dims.join(","), "[]".repeat(nesting))
}
