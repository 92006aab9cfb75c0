mod clipboard_arboard;
mod state_store_filesystem;

pub use clipboard_arboard::ArboardClipboard;
pub use state_store_filesystem::FilesystemStateStore;
