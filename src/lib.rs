//! promptpad: bidirectional prompt template engine with clipboard transport
//! and a bounded history of generated prompts.
//!
//! The core is three pure pieces — a fixed [`Template`], a
//! [`build`](domain::build) function flattening field values into one prompt
//! string, and a best-effort [`parse`](domain::parse) recovering field values
//! from previously built text — plus a bounded, deduplicated [`HistoryLog`].
//! External concerns (clipboard, persistence) sit behind [`ports`] with
//! shipped adapters in [`services`]; a host UI drives everything through
//! [`PromptSession`].

pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::PromptSession;
pub use config::Config;
pub use domain::{
    AppError, FieldValues, HISTORY_CAP, HistoryEntry, HistoryLog, Segment, Template, build, parse,
    slots,
};
pub use ports::{ClipboardWriter, HISTORY_KEY, NoopClipboard, StateStore, VALUES_KEY};
pub use services::{ArboardClipboard, FilesystemStateStore};

/// Open a session backed by the system clipboard and the default on-disk
/// state store ($HOME/.config/promptpad).
pub fn open_default_session()
-> Result<PromptSession<ArboardClipboard, FilesystemStateStore>, AppError> {
    let clipboard = ArboardClipboard::new()?;
    let store = FilesystemStateStore::new_default()?;
    Ok(PromptSession::load(clipboard, store))
}
