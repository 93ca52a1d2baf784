//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io::Cursor;

use sensecalc::{ClipboardError, ClipboardSink, Mode, Report, Session, SessionError};

/// Clipboard that records everything copied to it.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
}

impl ClipboardSink for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.push(text.to_owned());
        Ok(())
    }
}

/// Clipboard that fails the way a headless machine does.
#[derive(Debug, Default)]
pub struct HeadlessClipboard;

impl ClipboardSink for HeadlessClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            arboard::Error::ClipboardNotSupported,
        ))
    }
}

/// Outcome of driving a session from canned answers.
pub struct Transcript {
    pub result: Result<Report, SessionError>,
    pub output: String,
}

/// Run a session in `mode`, answering prompts with `answers` (one per line).
pub fn run_session(mode: Mode, answers: &[&str], clipboard: &mut dyn ClipboardSink) -> Transcript {
    let mut input = answers.join("\n");
    input.push('\n');

    let mut session = Session::new(Cursor::new(input), Vec::new());
    let result = session.run(mode, clipboard);
    let output = String::from_utf8(session.into_output()).expect("session output is utf-8");
    Transcript { result, output }
}
