//! Flattening: field values to a single prompt string.

use super::template::{SECTION_LABELS, slots};
use super::values::FieldValues;

/// Flatten the current field values into one prompt string.
///
/// Empty and whitespace-only slots are skipped together with their
/// surrounding punctuation. The exact joining rules are load-bearing:
/// [`parse`](super::parser::parse) recovers fields from this output.
///
/// - `role` emits `You are {role}.`
/// - `task` emits `Help me with {task}.`, space-joined to any prior text
/// - each labeled section emits `\n\n{Label}: {value}`, including the
///   leading blank line even when it opens the output
///
/// An entirely blank field set yields the empty string.
pub fn build(values: &FieldValues) -> String {
    let mut out = String::new();

    let role = values.get(slots::ROLE).trim();
    if !role.is_empty() {
        out.push_str("You are ");
        out.push_str(role);
        out.push('.');
    }

    let task = values.get(slots::TASK).trim();
    if !task.is_empty() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str("Help me with ");
        out.push_str(task);
        out.push('.');
    }

    for (id, label) in SECTION_LABELS {
        let value = values.get(id).trim();
        if !value.is_empty() {
            out.push_str("\n\n");
            out.push_str(label);
            out.push_str(": ");
            out.push_str(value);
        }
    }

    out
}
