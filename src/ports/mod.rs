mod clipboard_writer;
mod state_store;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use state_store::{HISTORY_KEY, StateStore, VALUES_KEY};
