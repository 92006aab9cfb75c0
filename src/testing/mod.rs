mod memory_state_store;
mod mock_clipboard;

pub use memory_state_store::MemoryStateStore;
pub use mock_clipboard::MockClipboard;
