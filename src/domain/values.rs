//! Current slot contents and their lifecycle operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::template::Template;

/// Mapping from slot id to user-entered text. An absent slot reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    entries: BTreeMap<String, String>,
}

impl FieldValues {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value for one slot. Content is unconstrained.
    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        self.entries.insert(id.to_string(), value.into());
    }

    /// Current value for a slot, or `""` when absent.
    pub fn get(&self, id: &str) -> &str {
        self.entries.get(id).map(String::as_str).unwrap_or("")
    }

    /// Whether the slot id is present in the mapping at all.
    ///
    /// Distinguishes "recovered as empty" from "not recovered" in partial
    /// mappings produced by the parser.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Clear the mapping back to empty.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Replace the whole mapping from a recovered partial mapping.
    ///
    /// Every slot id the template knows becomes the recovered value or `""`;
    /// slots missing from `recovered` never keep a stale prior value.
    pub fn replace_all(&mut self, template: &Template, recovered: &FieldValues) {
        self.entries.clear();
        for id in template.slot_ids() {
            self.entries.insert(id.to_string(), recovered.get(id).to_string());
        }
    }

    /// True when every stored value trims to the empty string.
    pub fn is_blank(&self) -> bool {
        self.entries.values().all(|value| value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::slots;

    #[test]
    fn absent_slot_reads_as_empty() {
        let values = FieldValues::new();
        assert_eq!(values.get(slots::ROLE), "");
        assert!(!values.contains(slots::ROLE));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut values = FieldValues::new();
        values.set(slots::TASK, "plan a voyage");
        assert_eq!(values.get(slots::TASK), "plan a voyage");
    }

    #[test]
    fn reset_clears_everything() {
        let mut values = FieldValues::new();
        values.set(slots::ROLE, "a pirate");
        values.reset();
        assert!(values.is_blank());
        assert!(!values.contains(slots::ROLE));
    }

    #[test]
    fn replace_all_overwrites_unrecovered_slots_with_empty() {
        let template = Template::reference();

        let mut values = FieldValues::new();
        values.set(slots::TONE, "stern");
        values.set(slots::ROLE, "a pirate");

        let mut recovered = FieldValues::new();
        recovered.set(slots::ROLE, "a navigator");

        values.replace_all(&template, &recovered);

        assert_eq!(values.get(slots::ROLE), "a navigator");
        assert_eq!(values.get(slots::TONE), "");
        for id in template.slot_ids() {
            assert!(values.contains(id));
        }
    }

    #[test]
    fn whitespace_only_values_count_as_blank() {
        let mut values = FieldValues::new();
        values.set(slots::CONTEXT, "   ");
        values.set(slots::TONE, "\n\t");
        assert!(values.is_blank());
    }

    #[test]
    fn serializes_as_a_plain_map() {
        let mut values = FieldValues::new();
        values.set(slots::ROLE, "a pirate");
        let json = serde_json::to_string(&values).expect("should serialize");
        assert_eq!(json, r#"{"role":"a pirate"}"#);

        let back: FieldValues = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, values);
    }
}
