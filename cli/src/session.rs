//! Interactive question-and-answer session.
//!
//! ```text
//! Session::run(mode) -> ask each Field -> parse -> calculate -> Report
//!                                                                 |
//!                                     warnings, result line, clipboard line
//! ```
//!
//! The session is generic over its reader and writer so the whole exchange
//! can be driven from memory.

use std::io::{self, BufRead, Write};

use sensecalc_types::{
    Adjustment, CalcError, CalcInput, DisplayNumber, Divisor, Field, GameLimits, InputError,
    calculate, parse_number, parse_optional,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clipboard::{ClipboardOutcome, ClipboardSink, offer};
use crate::settings::Mode;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("input ended before the {0} was entered")]
    UnexpectedEof(Field),
    #[error("no {0} was asked for")]
    MissingAnswer(Field),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SessionError {
    /// The line shown to the user when the session fails.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Input(_) => "Error: Please enter valid numbers".to_owned(),
            SessionError::Calc(CalcError::DivisionByZero(Divisor::MouseDpi)) => {
                "Error: Mouse DPI cannot be zero".to_owned()
            }
            SessionError::Calc(CalcError::DivisionByZero(divisor)) => {
                format!("Error: Cannot divide by zero, the {divisor} is zero")
            }
            SessionError::UnexpectedEof(_)
            | SessionError::MissingAnswer(_)
            | SessionError::Io(_) => format!("Error: {self}"),
        }
    }
}

#[must_use]
pub const fn prompt(field: Field) -> &'static str {
    match field {
        Field::MouseDpi => "Enter your mouse DPI: ",
        Field::Multiplier => "Enter your Raw Accel multiplier: ",
        Field::DesiredDpi => "Enter your desired DPI: ",
        Field::DpiLimit => "Enter the game's DPI limit (or press Enter to skip): ",
        Field::LowestSensitivity => "Enter the lowest game sensitivity (or press Enter to skip): ",
        Field::HighestSensitivity => {
            "Enter the highest game sensitivity (or press Enter to skip): "
        }
    }
}

/// Fields asked for in `mode`, in order.
#[must_use]
pub const fn fields(mode: Mode) -> &'static [Field] {
    match mode {
        Mode::Basic => &[Field::MouseDpi, Field::Multiplier, Field::DesiredDpi],
        Mode::GameLimits => &[
            Field::MouseDpi,
            Field::Multiplier,
            Field::DesiredDpi,
            Field::DpiLimit,
            Field::LowestSensitivity,
            Field::HighestSensitivity,
        ],
    }
}

/// Result of a completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub adjustment: Adjustment,
    pub clipboard: ClipboardOutcome,
}

impl Report {
    /// The text written after the last prompt, one entry per line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .adjustment
            .advisories
            .iter()
            .map(|advisory| format!("Warning: {advisory}"))
            .collect();
        lines.push(format!(
            "Modified Raw Accel multiplier: {}",
            DisplayNumber(self.adjustment.multiplier)
        ));
        lines.push(self.clipboard.message().to_owned());
        lines
    }
}

/// Parsed answers, keyed by field. Skipped or unasked fields stay `None`.
#[derive(Debug, Default)]
struct Answers {
    mouse_dpi: Option<f64>,
    multiplier: Option<f64>,
    desired_dpi: Option<f64>,
    dpi_limit: Option<f64>,
    lowest_sensitivity: Option<f64>,
    highest_sensitivity: Option<f64>,
}

impl Answers {
    fn slot(&mut self, field: Field) -> &mut Option<f64> {
        match field {
            Field::MouseDpi => &mut self.mouse_dpi,
            Field::Multiplier => &mut self.multiplier,
            Field::DesiredDpi => &mut self.desired_dpi,
            Field::DpiLimit => &mut self.dpi_limit,
            Field::LowestSensitivity => &mut self.lowest_sensitivity,
            Field::HighestSensitivity => &mut self.highest_sensitivity,
        }
    }

    fn record(&mut self, field: Field, value: Option<f64>) {
        *self.slot(field) = value;
    }

    fn required(&mut self, field: Field) -> Result<f64, SessionError> {
        self.slot(field).ok_or(SessionError::MissingAnswer(field))
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(
        &mut self,
        mode: Mode,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<Report, SessionError> {
        let calc_input = self.read_input(mode)?;
        let adjustment = calculate(&calc_input)?;
        for advisory in &adjustment.advisories {
            debug!(?advisory, "Clamp applied");
        }
        info!(
            multiplier = adjustment.multiplier,
            clamped = adjustment.was_clamped(),
            "Computed adjusted multiplier"
        );

        let copied = DisplayNumber(adjustment.multiplier).to_string();
        let report = Report {
            clipboard: offer(clipboard, &copied),
            adjustment,
        };
        for line in report.lines() {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        Ok(report)
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Show `text` and wait for the user to press Enter. End of input counts
    /// as Enter.
    pub fn pause(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_input(&mut self, mode: Mode) -> Result<CalcInput, SessionError> {
        let mut answers = Answers::default();
        for &field in fields(mode) {
            let raw = self.ask(field)?;
            let parsed = if field.is_optional() {
                parse_optional(field, &raw)
            } else {
                parse_number(field, &raw).map(Some)
            };
            let value = parsed.inspect_err(|err| {
                debug!(field = %err.field(), "Rejected answer");
            })?;
            answers.record(field, value);
        }

        let input = CalcInput::new(
            answers.required(Field::MouseDpi)?,
            answers.required(Field::Multiplier)?,
            answers.required(Field::DesiredDpi)?,
        );

        let lowest = answers.lowest_sensitivity;
        let highest = answers.highest_sensitivity;
        if GameLimits::has_lone_sensitivity_bound(lowest, highest) {
            warn!(
                ?lowest,
                ?highest,
                "Only one sensitivity bound given, sensitivity limits ignored"
            );
        }

        Ok(input.with_limits(GameLimits::from_raw(
            answers.dpi_limit,
            lowest,
            highest,
        )))
    }

    fn ask(&mut self, field: Field) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt(field))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::UnexpectedEof(field));
        }
        Ok(line)
    }
}
