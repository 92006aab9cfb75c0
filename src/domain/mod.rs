pub mod builder;
pub mod error;
pub mod history;
pub mod parser;
pub mod template;
pub mod values;

pub use builder::build;
pub use error::AppError;
pub use history::{HISTORY_CAP, HistoryEntry, HistoryLog};
pub use parser::parse;
pub use template::{Segment, Template, slots};
pub use values::FieldValues;
