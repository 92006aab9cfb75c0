mod session;

pub use session::PromptSession;
