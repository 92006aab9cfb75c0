//! Best-effort recovery of field values from previously flattened text.
//!
//! Each field has its own extraction rule; rules are independent, so a
//! missing `role` never blocks recovering `task`. Nothing here fails: a
//! field that cannot be matched is simply omitted from the result.

use std::sync::LazyLock;

use regex::Regex;

use super::template::{SECTION_LABELS, slots};
use super::values::FieldValues;

static ROLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"You are (.+?)\.").expect("valid role pattern"));

static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Help me with (.+?)\.").expect("valid task pattern"));

/// One compiled section rule per labeled slot.
///
/// A section value runs from `{Label}: ` to the next blank-line-plus-
/// capitalized-label boundary, or to end of text. The boundary shape means a
/// value that itself contains `\n\nSomething like: this` truncates early;
/// that is an accepted limitation of the heuristic, not a defect.
static SECTION_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SECTION_LABELS
        .iter()
        .map(|&(id, label)| {
            let pattern = format!(
                r"(?s){}: (.+?)(?:\n\n[A-Z][a-z]+(?: [a-z]+)*:|\z)",
                regex::escape(label)
            );
            (id, Regex::new(&pattern).expect("valid section pattern"))
        })
        .collect()
});

/// Recover a partial field mapping from flattened prompt text.
///
/// Best-effort inverse of [`build`](super::builder::build): exact for text
/// the builder produced from well-behaved values, lossy otherwise. Never
/// fails; unrecoverable fields are left out of the returned mapping.
pub fn parse(text: &str) -> FieldValues {
    let mut recovered = FieldValues::new();

    if let Some(role) = extract_sentence(&ROLE_RE, text) {
        recovered.set(slots::ROLE, role);
    }
    if let Some(task) = extract_sentence(&TASK_RE, text) {
        recovered.set(slots::TASK, task);
    }
    for (id, pattern) in SECTION_RES.iter() {
        if let Some(value) = extract_section(pattern, text) {
            recovered.set(id, value);
        }
    }

    recovered
}

/// Shortest run after the sentence prefix, bounded by the next period.
fn extract_sentence(pattern: &Regex, text: &str) -> Option<String> {
    capture_trimmed(pattern, text)
}

/// Longest run after the label, bounded by the next section header or end.
fn extract_section(pattern: &Regex, text: &str) -> Option<String> {
    capture_trimmed(pattern, text)
}

fn capture_trimmed(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|matched| matched.as_str().trim().to_string())
}
