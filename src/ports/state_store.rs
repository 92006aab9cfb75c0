use crate::domain::AppError;

/// Port for the opaque key-value persistence collaborator.
///
/// Two keys are in use, [`VALUES_KEY`] and [`HISTORY_KEY`], each holding one
/// serialized blob. Loading never fails: missing or unreadable data reads as
/// `None` and the caller substitutes its default.
pub trait StateStore {
    /// Read the blob stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Replace the blob stored under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Key for the serialized field-value mapping.
pub const VALUES_KEY: &str = "values";

/// Key for the serialized history entry list.
pub const HISTORY_KEY: &str = "history";
