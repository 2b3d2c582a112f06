//! Test utilities for affirm-constraints.

use affirm_core::Value;

use crate::constraint::Constraint;
use crate::writer::{MessageWriter, TextMessageWriter};

/// Runs `matches`, panicking on misuse errors.
pub fn check<C: Constraint + ?Sized>(constraint: &mut C, actual: impl Into<Value>) -> bool {
    constraint
        .matches(&actual.into())
        .expect("constraint should not report misuse")
}

/// Renders the full failure message.
pub fn message_of<C: Constraint + ?Sized>(constraint: &C) -> String {
    let mut writer = TextMessageWriter::new();
    constraint.write_message_to(&mut writer);
    writer.into_string()
}

/// Renders the expected-side description only.
pub fn description_of<C: Constraint + ?Sized>(constraint: &C) -> String {
    let mut writer = TextMessageWriter::new();
    constraint.write_description_to(&mut writer);
    writer.into_string()
}

/// Renders the value shown on the `But was:` line.
pub fn actual_of<C: Constraint + ?Sized>(constraint: &C) -> String {
    let mut writer = TextMessageWriter::new();
    constraint.write_actual_value_to(&mut writer);
    writer.write_line();
    writer.into_string().trim_end().to_string()
}
