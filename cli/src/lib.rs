//! Interactive Raw Accel multiplier calculator.
//!
//! The calculation itself lives in [`sensecalc_types`]; this crate asks the
//! questions, reports the result, and offers it to the clipboard.

pub mod clipboard;
pub mod session;
pub mod settings;

pub use clipboard::{ClipboardError, ClipboardOutcome, ClipboardSink, NoClipboard, SystemClipboard};
pub use session::{Report, Session, SessionError};
pub use settings::{Mode, Settings};
