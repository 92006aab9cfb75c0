use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing.
#[derive(Default)]
pub struct MockClipboard {
    written: Option<String>,
    should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&mut self, fail: bool) {
        self.should_fail = fail;
    }

    /// The last text written, if any.
    pub fn written_text(&self) -> Option<String> {
        self.written.clone()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::Clipboard("mock clipboard error".to_string()));
        }
        self.written = Some(text.to_string());
        Ok(())
    }
}
