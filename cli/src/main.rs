//! sensecalc CLI - binary entry point.
//!
//! ```text
//! main() -> Settings::from_env() -> Session::run(mode) -> Report | SessionError
//!                                                              |
//!                                                              v
//!                                              "Press Enter to exit..." pause
//! ```
//!
//! Logs go to stderr so they never interleave with the prompt stream on
//! stdout. The filter comes from `SENSECALC_LOG` and defaults to `warn`.

use std::io::{self, stdin, stdout};
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sensecalc::settings::LOG_VAR;
use sensecalc::{ClipboardSink, NoClipboard, Session, Settings, SystemClipboard};

const EXIT_PROMPT: &str = "Press Enter to exit...";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_VAR)
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let settings = Settings::from_env();
    tracing::debug!(?settings, "Resolved settings");

    // Kept alive until exit: the copied text is served from this process on
    // X11 and Wayland.
    let mut clipboard: Box<dyn ClipboardSink> = if settings.clipboard {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(NoClipboard)
    };

    let mut session = Session::new(stdin().lock(), stdout());
    let exit = match session.run(settings.mode, clipboard.as_mut()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Session failed");
            session.say(&err.user_message())?;
            ExitCode::FAILURE
        }
    };

    if settings.pause {
        session.pause(EXIT_PROMPT)?;
    }

    Ok(exit)
}
