use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{AppError, FieldValues, HistoryEntry, HistoryLog, Template, build, parse};
use crate::ports::{ClipboardWriter, HISTORY_KEY, StateStore, VALUES_KEY};

/// One prompt-composition session: the template, the current field values,
/// the history log, and the two injected collaborators.
///
/// All mutations run to completion before the next call; a session used from
/// multiple threads must be serialized externally.
pub struct PromptSession<C: ClipboardWriter, S: StateStore> {
    template: Template,
    values: FieldValues,
    history: HistoryLog,
    clipboard: C,
    store: S,
}

impl<C: ClipboardWriter, S: StateStore> PromptSession<C, S> {
    /// Open a session, hydrating field values and history from the store.
    ///
    /// Missing or corrupt blobs decode to empty defaults; loading never
    /// fails.
    pub fn load(clipboard: C, store: S) -> Self {
        let values = store
            .load(VALUES_KEY)
            .and_then(|blob| decode(VALUES_KEY, &blob))
            .unwrap_or_default();
        let history = store
            .load(HISTORY_KEY)
            .and_then(|blob| decode(HISTORY_KEY, &blob))
            .unwrap_or_default();

        Self { template: Template::reference(), values, history, clipboard, store }
    }

    /// The template driving this session.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Slot ids in template order, for the UI focus-traversal collaborator.
    pub fn slot_ids(&self) -> Vec<&'static str> {
        self.template.slot_ids()
    }

    /// Current field values.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Replace the value of one slot and persist the mapping.
    pub fn set_field(&mut self, id: &str, value: impl Into<String>) {
        self.values.set(id, value);
        self.persist_values();
    }

    /// Clear every slot and persist the empty mapping.
    pub fn reset_fields(&mut self) {
        self.values.reset();
        self.persist_values();
    }

    /// Flatten the current values without side effects.
    pub fn preview(&self) -> String {
        build(&self.values)
    }

    /// Flatten the current values, hand the text to the clipboard, and on
    /// success record it in history.
    ///
    /// Clipboard failure propagates and leaves history untouched. Blank
    /// output is still written to the clipboard but never recorded.
    pub fn copy_to_clipboard(&mut self) -> Result<String, AppError> {
        let text = build(&self.values);
        self.clipboard.write_text(&text)?;

        if self.history.record(&text, Utc::now()) {
            debug!(chars = text.len(), "recorded generated prompt in history");
            self.persist_history();
        }
        Ok(text)
    }

    /// Re-derive field values from previously generated text.
    ///
    /// Every template slot takes the recovered value or empty; no prior
    /// value survives an unrecovered slot.
    pub fn recall(&mut self, text: &str) {
        let recovered = parse(text);
        self.values.replace_all(&self.template, &recovered);
        debug!("recalled field values from history text");
        self.persist_values();
    }

    fn persist_values(&mut self) {
        if let Some(blob) = encode(VALUES_KEY, &self.values) {
            self.save_blob(VALUES_KEY, &blob);
        }
    }

    fn persist_history(&mut self) {
        if let Some(blob) = encode(HISTORY_KEY, &self.history) {
            self.save_blob(HISTORY_KEY, &blob);
        }
    }

    /// Write failures are logged, not raised: the in-memory state stays
    /// authoritative for the rest of the session.
    fn save_blob(&mut self, key: &str, blob: &str) {
        if let Err(err) = self.store.save(key, blob) {
            warn!(key, error = %err, "failed to persist state");
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, blob: &str) -> Option<T> {
    match serde_json::from_str(blob) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "discarding corrupt persisted state");
            None
        }
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(blob) => Some(blob),
        Err(err) => {
            warn!(key, error = %err, "failed to serialize state");
            None
        }
    }
}
