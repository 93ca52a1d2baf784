//! Best-effort clipboard output.
//!
//! Copying the result is a convenience: every failure is reported back as a
//! [`ClipboardOutcome`] and never aborts the session.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard disabled")]
    Disabled,
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Destination for the computed multiplier.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// What happened when the result was offered to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    Disabled,
    Unavailable,
}

impl ClipboardOutcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ClipboardOutcome::Copied => "Result copied to clipboard!",
            ClipboardOutcome::Disabled => "Clipboard disabled, skipping clipboard copy.",
            ClipboardOutcome::Unavailable => "Clipboard unavailable, skipping clipboard copy.",
        }
    }
}

/// Copy `text`, folding any error into an outcome.
pub fn offer(sink: &mut dyn ClipboardSink, text: &str) -> ClipboardOutcome {
    match sink.copy_text(text) {
        Ok(()) => {
            debug!(text, "Copied result to clipboard");
            ClipboardOutcome::Copied
        }
        Err(ClipboardError::Disabled) => ClipboardOutcome::Disabled,
        Err(err) => {
            debug!(error = %err, "Clipboard copy failed");
            ClipboardOutcome::Unavailable
        }
    }
}

/// The desktop clipboard.
///
/// The `arboard` handle is opened on first use and held until the sink is
/// dropped. On X11 and Wayland the copied text is only served while the
/// handle is alive, so the sink must outlive the exit pause.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => arboard::Clipboard::new()?,
        };
        self.handle.insert(handle).set_text(text)?;
        Ok(())
    }
}

/// Sink used when clipboard output is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Disabled)
    }
}
