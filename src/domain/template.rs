//! The fixed prompt template: ordered static spans and named slots.

/// Slot identifiers of the built-in template, in flattening order.
pub mod slots {
    pub const ROLE: &str = "role";
    pub const TASK: &str = "task";
    pub const CONTEXT: &str = "context";
    pub const REQUIREMENTS: &str = "requirements";
    pub const FORMAT: &str = "format";
    pub const TONE: &str = "tone";
}

/// Labeled sections in emission order: slot id paired with the label text
/// the builder emits and the parser matches.
pub(crate) const SECTION_LABELS: [(&str, &str); 4] = [
    (slots::CONTEXT, "Context"),
    (slots::REQUIREMENTS, "Requirements"),
    (slots::FORMAT, "Output format"),
    (slots::TONE, "Tone"),
];

/// One element of the template: literal text or a user-editable slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text emitted verbatim.
    Static { text: &'static str },
    /// Named slot. `placeholder` is a display hint for the UI collaborator
    /// and never appears in flattened output.
    Slot { id: &'static str, placeholder: &'static str },
}

/// Ordered template definition.
///
/// Slot order defines both the flattening order and the focus-traversal
/// order handed to the UI collaborator. Fixed at startup, immutable after.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// The built-in prompt template.
    pub fn reference() -> Self {
        use Segment::{Slot, Static};

        Self {
            segments: vec![
                Static { text: "You are " },
                Slot { id: slots::ROLE, placeholder: "a helpful writing coach" },
                Static { text: ". Help me with " },
                Slot { id: slots::TASK, placeholder: "drafting a short announcement" },
                Static { text: ".\n\nContext: " },
                Slot { id: slots::CONTEXT, placeholder: "any background the reader needs" },
                Static { text: "\n\nRequirements: " },
                Slot { id: slots::REQUIREMENTS, placeholder: "constraints the answer must honor" },
                Static { text: "\n\nOutput format: " },
                Slot { id: slots::FORMAT, placeholder: "bullet list, table, or plain prose" },
                Static { text: "\n\nTone: " },
                Slot { id: slots::TONE, placeholder: "friendly but direct" },
            ],
        }
    }

    /// All segments in template order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Slot ids in template order (the UI focus-traversal order).
    pub fn slot_ids(&self) -> Vec<&'static str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Slot { id, .. } => Some(*id),
                Segment::Static { .. } => None,
            })
            .collect()
    }
}
