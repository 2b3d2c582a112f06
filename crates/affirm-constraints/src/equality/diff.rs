//! Rendering of the differences located by [`EqualityComparer`].
//!
//! [`EqualityComparer`]: super::EqualityComparer

use affirm_core::{ByteStream, Value};

use crate::constraint::Modifiers;
use crate::writer::format::type_representation;
use crate::writer::text::find_mismatch_position;
use crate::writer::MessageWriter;

/// Walks a failure path, describing each level it passes through.
pub(crate) struct DiffRenderer<'a> {
    path: &'a [u64],
    modifiers: &'a Modifiers,
}

impl<'a> DiffRenderer<'a> {
    pub(crate) fn new(path: &'a [u64], modifiers: &'a Modifiers) -> Self {
        Self { path, modifiers }
    }

    pub(crate) fn display_differences(
        &self,
        writer: &mut dyn MessageWriter,
        expected: &Value,
        actual: &Value,
        depth: usize,
    ) {
        if let (Value::Str(e), Value::Str(a)) = (expected, actual) {
            let mismatch = find_mismatch_position(e, a, 0, self.modifiers.ignore_case);
            if let Some(mismatch) = mismatch {
                writer.display_string_differences(e, a, mismatch, self.modifiers.ignore_case);
                return;
            }
        }

        if let (Some(e), Some(a)) = (expected.collection_items(), actual.collection_items()) {
            self.display_collection_differences(writer, expected, actual, e, a, depth);
            return;
        }

        if let (Value::Stream(e), Value::Stream(a)) = (expected, actual) {
            self.display_stream_differences(writer, e, a, depth);
            return;
        }

        let tolerance = self.modifiers.tolerance.map(Value::from);
        writer.display_value_differences(expected, actual, tolerance.as_ref());
    }

    fn display_collection_differences(
        &self,
        writer: &mut dyn MessageWriter,
        expected: &Value,
        actual: &Value,
        expected_items: &[Value],
        actual_items: &[Value],
        depth: usize,
    ) {
        self.display_types_and_sizes(writer, expected, actual, depth);

        let Some(&failure_point) = self.path.get(depth) else {
            return;
        };
        let failure_point = failure_point as usize;
        self.display_failure_point(writer, expected, actual, failure_point, depth);

        if failure_point < expected_items.len() && failure_point < actual_items.len() {
            self.display_differences(
                writer,
                &expected_items[failure_point],
                &actual_items[failure_point],
                depth + 1,
            );
            return;
        }

        let preview = writer.config().excess_preview_limit;
        // Excess previews sit at the label column like leaf values.
        if expected_items.len() < actual_items.len() {
            writer.write("  Extra:    ");
            writer.write_collection_elements(actual_items, failure_point, preview);
        } else {
            writer.write("  Missing:  ");
            writer.write_collection_elements(expected_items, failure_point, preview);
        }
        writer.write_line();
    }

    fn display_types_and_sizes(
        &self,
        writer: &mut dyn MessageWriter,
        expected: &Value,
        actual: &Value,
        depth: usize,
    ) {
        let expected_type = type_representation(expected);
        let actual_type = type_representation(actual);
        let header = if expected_type == actual_type {
            format!("Expected and actual are both {}", expected_type)
        } else {
            format!("Expected is {}, actual is {}", expected_type, actual_type)
        };
        writer.write_message_line(depth, &header);
    }

    fn display_failure_point(
        &self,
        writer: &mut dyn MessageWriter,
        expected: &Value,
        actual: &Value,
        failure_point: usize,
        depth: usize,
    ) {
        let expected_array = expected.as_array();
        let actual_array = actual.as_array();
        let expected_rank = expected_array.map_or(1, |a| a.rank());
        let actual_rank = actual_array.map_or(1, |a| a.rank());

        let mut use_one_index = expected_rank == actual_rank;
        if let (Some(e), Some(a)) = (expected_array, actual_array) {
            if (1..expected_rank).any(|dim| e.length(dim) != a.length(dim)) {
                use_one_index = false;
            }
        }

        let expected_indices = format_indices(&indices_of(expected, failure_point));
        let line = if use_one_index {
            format!("Values differ at index {}", expected_indices)
        } else {
            let actual_indices = format_indices(&indices_of(actual, failure_point));
            format!(
                "Values differ at expected index {}, actual index {}",
                expected_indices, actual_indices
            )
        };
        writer.write_message_line(depth, &line);
    }

    fn display_stream_differences(
        &self,
        writer: &mut dyn MessageWriter,
        expected: &ByteStream,
        actual: &ByteStream,
        depth: usize,
    ) {
        let line = if expected.len() == actual.len() {
            let offset = self.path.get(depth).copied().unwrap_or(0);
            format!(
                "Stream lengths are both {}. Streams differ at offset {}.",
                expected.len(),
                offset
            )
        } else {
            format!(
                "Expected Stream length {} but was {}.",
                expected.len(),
                actual.len()
            )
        };
        writer.write_message_line(depth, &line);
    }
}

fn indices_of(value: &Value, flat: usize) -> Vec<usize> {
    value
        .as_array()
        .map_or_else(|| vec![flat], |array| array.indices_of(flat))
}

fn format_indices(indices: &[usize]) -> String {
    let parts: Vec<String> = indices.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(","))
}
