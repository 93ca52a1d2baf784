//! Parsing of free-text numeric answers.
//!
//! Every answer is trimmed before parsing. Optional answers treat blank input
//! as "skip". Non-finite values (`inf`, `NaN`) are rejected so that nothing
//! downstream has to reason about them.

use std::fmt;

use thiserror::Error;

/// The input a raw answer belongs to. Carried in errors so callers can say
/// which answer was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MouseDpi,
    Multiplier,
    DesiredDpi,
    DpiLimit,
    LowestSensitivity,
    HighestSensitivity,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::MouseDpi => "mouse DPI",
            Field::Multiplier => "Raw Accel multiplier",
            Field::DesiredDpi => "desired DPI",
            Field::DpiLimit => "game DPI limit",
            Field::LowestSensitivity => "lowest game sensitivity",
            Field::HighestSensitivity => "highest game sensitivity",
        }
    }

    /// Optional answers may be left blank to skip them.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(
            self,
            Field::DpiLimit | Field::LowestSensitivity | Field::HighestSensitivity
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field}: {raw:?} is not a valid number")]
    InvalidNumber { field: Field, raw: String },
}

impl InputError {
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            InputError::InvalidNumber { field, .. } => *field,
        }
    }
}

/// Parse a required numeric answer.
pub fn parse_number(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumber {
            field,
            raw: trimmed.to_owned(),
        }),
    }
}

/// Parse an optional numeric answer. Blank input means the answer was skipped.
pub fn parse_optional(field: Field, raw: &str) -> Result<Option<f64>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_number(field, raw).map(Some)
}
