//! Runtime settings resolved from the environment.
//!
//! There is no config file. Each knob is a `SENSECALC_*` variable; unknown
//! values are logged and fall back to the default.

use std::env;

pub const MODE_VAR: &str = "SENSECALC_MODE";
pub const CLIPBOARD_VAR: &str = "SENSECALC_CLIPBOARD";
pub const PAUSE_VAR: &str = "SENSECALC_PAUSE";
pub const LOG_VAR: &str = "SENSECALC_LOG";

/// Which questions the session asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Mouse DPI, multiplier and desired DPI only.
    Basic,
    /// Also asks for the game's DPI limit and sensitivity range.
    #[default]
    GameLimits,
}

impl Mode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "basic" | "simple" => Some(Mode::Basic),
            "limits" | "game-limits" | "game_limits" => Some(Mode::GameLimits),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub clipboard: bool,
    pub pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            clipboard: true,
            pause: true,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mode = match lookup(MODE_VAR) {
            Some(raw) => Mode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(var = MODE_VAR, value = %raw, "Unknown mode, using default");
                defaults.mode
            }),
            None => defaults.mode,
        };

        Self {
            mode,
            clipboard: flag(&lookup, CLIPBOARD_VAR, defaults.clipboard),
            pause: flag(&lookup, PAUSE_VAR, defaults.pause),
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: bool) -> bool {
    let Some(raw) = lookup(var) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => true,
        "0" | "false" | "off" | "no" => false,
        _ => {
            tracing::warn!(var, value = %raw, "Unrecognized boolean, using default");
            default
        }
    }
}
