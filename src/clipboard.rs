use arboard::Clipboard;

use crate::error::{Clip2KmlError, Result};

pub trait ClipboardSource {
    fn read(&mut self) -> Result<String>;
}

/// The system clipboard.
///
/// A fresh handle is opened per read; on Linux this needs a running X11 or
/// Wayland session.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read(&mut self) -> Result<String> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| Clip2KmlError::clipboard(format!("failed to access system clipboard: {e}")))?;
        clipboard
            .get_text()
            .map_err(|e| Clip2KmlError::clipboard(format!("failed to read clipboard text: {e}")))
    }
}
