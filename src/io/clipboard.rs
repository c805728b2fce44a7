//! Clipboard sink receiving exported text

use crate::io::error::{Result, TilerError};

/// Destination for exported resource text
///
/// Implementations wrap the platform clipboard (or any other text sink) and
/// report a rejected write as [`TilerError::ClipboardUnavailable`].
pub trait ClipboardSink {
    /// Replace the sink contents with `text`
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::ClipboardUnavailable`] if the write was rejected
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// In-memory sink for headless use
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
    unavailable: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty sink that accepts writes
    pub const fn new() -> Self {
        Self {
            contents: None,
            writes: 0,
            unavailable: None,
        }
    }

    /// Create a sink that rejects every write with `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Last accepted text
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of accepted writes
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if let Some(reason) = &self.unavailable {
            return Err(TilerError::ClipboardUnavailable {
                reason: reason.clone(),
            });
        }

        self.contents = Some(text.to_owned());
        self.writes += 1;
        Ok(())
    }
}
