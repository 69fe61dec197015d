//! Thin wrapper around the system clipboard.

use tracing::debug;

pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self, arboard::Error> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }

    /// Returns the clipboard's text content, or `None` when it is empty or
    /// holds no text.
    pub fn read(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(err) => {
                debug!(%err, "clipboard read failed");
                None
            }
        }
    }

    pub fn write(&mut self, text: String) -> Result<(), arboard::Error> {
        self.inner.set_text(text)
    }
}
