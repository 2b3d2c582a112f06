//! Character-level helpers for string comparison and display.

/// Compares two strings ordinally or ignoring case.
pub fn strings_equal(expected: &str, actual: &str, ignore_case: bool) -> bool {
    if ignore_case {
        expected
            .chars()
            .flat_map(char::to_lowercase)
            .eq(actual.chars().flat_map(char::to_lowercase))
    } else {
        expected == actual
    }
}

/// Compares two chars ordinally or ignoring case.
pub fn chars_equal(expected: char, actual: char, ignore_case: bool) -> bool {
    expected == actual || (ignore_case && expected.to_lowercase().eq(actual.to_lowercase()))
}

/// Returns the char index of the first difference at or after `start`.
///
/// When one string is a prefix of the other the mismatch is at the end of
/// the shorter one. Returns `None` when the strings are equal.
///
/// ```
/// use affirm_constraints::writer::text::find_mismatch_position;
///
/// assert_eq!(find_mismatch_position("three", "ten", 0, false), Some(1));
/// assert_eq!(find_mismatch_position("abc", "abcd", 0, false), Some(3));
/// assert_eq!(find_mismatch_position("abc", "ABC", 0, true), None);
/// ```
pub fn find_mismatch_position(
    expected: &str,
    actual: &str,
    start: usize,
    ignore_case: bool,
) -> Option<usize> {
    let mut expected_chars = expected.chars().skip(start);
    let mut actual_chars = actual.chars().skip(start);
    let mut index = start;
    loop {
        match (expected_chars.next(), actual_chars.next()) {
            (Some(e), Some(a)) if chars_equal(e, a, ignore_case) => index += 1,
            (None, None) => return None,
            _ => return Some(index),
        }
    }
}

/// Replaces control characters with their escaped form.
pub fn escape_control_chars(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\0' => escaped.push_str("\\0"),
            '\u{7}' => escaped.push_str("\\a"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{b}' => escaped.push_str("\\v"),
            '\u{85}' | '\u{2028}' | '\u{2029}' => {
                escaped.push_str(&format!("\\x{:04X}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Cuts `s` to at most `max_len` chars starting at `clip_start`, marking
/// removed text at either end with `...`.
pub fn clip_string(s: &str, max_len: usize, clip_start: usize) -> String {
    let len = s.chars().count();
    let mut clipped = String::new();
    let mut clip_len = max_len;

    if clip_start > 0 {
        clip_len = clip_len.saturating_sub(ELLIPSIS.len());
        clipped.push_str(ELLIPSIS);
    }

    if len.saturating_sub(clip_start) > clip_len {
        clip_len = clip_len.saturating_sub(ELLIPSIS.len());
        clipped.extend(s.chars().skip(clip_start).take(clip_len));
        clipped.push_str(ELLIPSIS);
    } else if clip_start > 0 {
        clipped.extend(s.chars().skip(clip_start));
    } else {
        clipped.push_str(s);
    }

    clipped
}

/// Clips both strings to `max_display` chars so that `mismatch` stays
/// visible, using the same window for both.
pub fn clip_expected_and_actual(
    expected: &str,
    actual: &str,
    max_display: usize,
    mismatch: usize,
) -> (String, String) {
    let max_len = expected.chars().count().max(actual.chars().count());
    if max_len <= max_display {
        return (expected.to_string(), actual.to_string());
    }

    let clip_len = max_display.saturating_sub(ELLIPSIS.len());
    let mut clip_start = max_len - clip_len;
    if clip_start > mismatch {
        clip_start = mismatch.saturating_sub(clip_len / 2);
    }

    (
        clip_string(expected, max_display, clip_start),
        clip_string(actual, max_display, clip_start),
    )
}

pub const ELLIPSIS: &str = "...";
