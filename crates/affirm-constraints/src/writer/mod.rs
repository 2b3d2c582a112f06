//! Rendering of constraint descriptions and failure messages.
//!
//! Constraints never format text themselves; they call into a
//! [`MessageWriter`], which owns the layout rules (prefixes, indentation,
//! clipping) and the per-type value formatting.

pub mod format;
pub mod text;

use std::fmt;

use affirm_config::{MessageConfig, PREFIX_WIDTH};
use affirm_core::{Value, ValueType};

use self::format::{format_elements, format_value};
use self::text::{clip_expected_and_actual, escape_control_chars, find_mismatch_position};

/// Prefix of the line carrying the expected side.
pub const EXPECTED_PREFIX: &str = "  Expected: ";

/// Prefix of the line carrying the actual side.
pub const ACTUAL_PREFIX: &str = "  But was:  ";

/// Sink for constraint descriptions and failure diagnostics.
pub trait MessageWriter {
    /// Appends raw text.
    fn write(&mut self, text: &str);

    /// Ends the current line.
    fn write_line(&mut self);

    /// Writes a full line indented by `level + 1` steps.
    fn write_message_line(&mut self, level: usize, message: &str);

    fn write_expected_label(&mut self) {
        self.write(EXPECTED_PREFIX);
    }

    fn write_actual_label(&mut self) {
        self.write(ACTUAL_PREFIX);
    }

    /// Writes a phrase followed by a single space.
    fn write_predicate(&mut self, predicate: &str) {
        self.write(predicate);
        self.write(" ");
    }

    /// Writes a token surrounded by single spaces.
    fn write_connector(&mut self, connector: &str) {
        self.write(" ");
        self.write(connector);
        self.write(" ");
    }

    /// Writes `, modifier`.
    fn write_modifier(&mut self, modifier: &str) {
        self.write(", ");
        self.write(modifier);
    }

    fn write_expected_value(&mut self, value: &Value) {
        self.write_value(value);
    }

    fn write_actual_value(&mut self, value: &Value) {
        self.write_value(value);
    }

    /// Writes a formatted value.
    fn write_value(&mut self, value: &Value);

    /// Writes a type name as `<name>`, or `null` for an untyped value.
    fn write_type(&mut self, value_type: Option<&ValueType>) {
        match value_type {
            Some(value_type) => self.write(&format!("<{}>", value_type)),
            None => self.write("null"),
        }
    }

    /// Writes the placeholder for an actual value that was never recorded.
    fn write_unset(&mut self) {
        self.write("<UNSET>");
    }

    /// Writes up to `max` items from `start` as `< a, b... >`.
    fn write_collection_elements(&mut self, items: &[Value], start: usize, max: usize);

    /// Writes expected and actual scalars on their prefixed lines.
    fn display_value_differences(
        &mut self,
        expected: &Value,
        actual: &Value,
        tolerance: Option<&Value>,
    ) {
        self.write_expected_label();
        self.write_expected_value(expected);
        if let Some(tolerance) = tolerance {
            self.write_connector("+/-");
            self.write_expected_value(tolerance);
        }
        self.write_line();
        self.write_actual_label();
        self.write_actual_value(actual);
        self.write_line();
    }

    /// Writes a caret-marked diff of two strings.
    fn display_string_differences(
        &mut self,
        expected: &str,
        actual: &str,
        mismatch: usize,
        ignore_case: bool,
    );

    /// Rendering limits in effect.
    fn config(&self) -> &MessageConfig;
}

/// A [`MessageWriter`] that accumulates plain text.
#[derive(Debug, Clone, Default)]
pub struct TextMessageWriter {
    buffer: String,
    config: MessageConfig,
}

impl TextMessageWriter {
    /// Creates a writer with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MessageConfig) -> Self {
        Self {
            buffer: String::new(),
            config,
        }
    }

    /// Starts the message with a user-supplied line.
    pub fn with_user_message(mut self, message: &str) -> Self {
        if !message.is_empty() {
            self.write_message_line(0, message);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Display for TextMessageWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl MessageWriter for TextMessageWriter {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_line(&mut self) {
        self.buffer.push('\n');
    }

    fn write_message_line(&mut self, level: usize, message: &str) {
        for _ in 0..=level {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(message);
        self.buffer.push('\n');
    }

    fn write_value(&mut self, value: &Value) {
        let formatted = format_value(value, self.config.collection_display_limit);
        self.buffer.push_str(&formatted);
    }

    fn write_collection_elements(&mut self, items: &[Value], start: usize, max: usize) {
        let formatted = format_elements(items, start, max, self.config.collection_display_limit);
        self.buffer.push_str(&formatted);
    }

    fn display_string_differences(
        &mut self,
        expected: &str,
        actual: &str,
        mismatch: usize,
        ignore_case: bool,
    ) {
        let expected_len = expected.chars().count();
        let actual_len = actual.chars().count();
        let summary = if expected_len == actual_len {
            format!(
                "String lengths are both {}. Strings differ at index {}.",
                expected_len, mismatch
            )
        } else {
            format!(
                "Expected string length {} but was {}. Strings differ at index {}.",
                expected_len, actual_len, mismatch
            )
        };
        self.write_message_line(0, &summary);

        let (expected, actual) = if self.config.clip_strings {
            let max_display = self.config.max_line_length.saturating_sub(PREFIX_WIDTH + 2);
            clip_expected_and_actual(expected, actual, max_display, mismatch)
        } else {
            (expected.to_string(), actual.to_string())
        };
        let expected = escape_control_chars(&expected);
        let actual = escape_control_chars(&actual);
        let caret = find_mismatch_position(&expected, &actual, 0, ignore_case).unwrap_or(0);

        self.write_expected_label();
        self.write(&format!("\"{}\"", expected));
        self.write_line();
        self.write_actual_label();
        self.write(&format!("\"{}\"", actual));
        self.write_line();
        self.write(&format!("  {}^", "-".repeat(PREFIX_WIDTH + caret - 1)));
        self.write_line();
    }

    fn config(&self) -> &MessageConfig {
        &self.config
    }
}
