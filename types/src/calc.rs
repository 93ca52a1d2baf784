//! Raw Accel multiplier adjustment.
//!
//! The multiplier is scaled so that `mouse_dpi * multiplier` reaches the
//! desired effective DPI, then clamped in two stages:
//!
//! 1. **DPI limit**: if the effective DPI exceeds the game's ceiling, the
//!    desired DPI is pulled down to the ceiling.
//! 2. **Sensitivity range**: the in-game sensitivity needed to reach the
//!    desired DPI (`desired / effective`) must fall within the game's range;
//!    otherwise the multiplier is recomputed for the nearest allowed
//!    sensitivity.
//!
//! The result is rounded to [`MULTIPLIER_DECIMALS`] places. Every clamp that
//! fires is reported as an [`Advisory`] rather than printed, leaving
//! presentation to the caller.

use std::fmt;

use thiserror::Error;

use crate::limits::GameLimits;
use crate::number::{DisplayNumber, round_to};

/// Decimal places kept in the adjusted multiplier.
pub const MULTIPLIER_DECIMALS: usize = 4;

/// The quantity that was zero when the calculator tried to divide by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divisor {
    MouseDpi,
    EffectiveDpi,
    LowestSensitivity,
    HighestSensitivity,
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Divisor::MouseDpi => "mouse DPI",
            Divisor::EffectiveDpi => "effective DPI",
            Divisor::LowestSensitivity => "lowest game sensitivity",
            Divisor::HighestSensitivity => "highest game sensitivity",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero: {0} is zero")]
    DivisionByZero(Divisor),
}

fn divide(numerator: f64, denominator: f64, divisor: Divisor) -> Result<f64, CalcError> {
    if denominator == 0.0 {
        return Err(CalcError::DivisionByZero(divisor));
    }
    Ok(numerator / denominator)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcInput {
    pub mouse_dpi: f64,
    pub multiplier: f64,
    pub desired_dpi: f64,
    pub limits: GameLimits,
}

impl CalcInput {
    #[must_use]
    pub const fn new(mouse_dpi: f64, multiplier: f64, desired_dpi: f64) -> Self {
        Self {
            mouse_dpi,
            multiplier,
            desired_dpi,
            limits: GameLimits::none(),
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: GameLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// A clamp applied while computing the multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    DpiLimitExceeded { desired_dpi: f64, dpi_limit: f64 },
    SensitivityBelowMinimum { required: f64, lowest: f64 },
    SensitivityAboveMaximum { required: f64, highest: f64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Advisory::DpiLimitExceeded {
                desired_dpi,
                dpi_limit,
            } => write!(
                f,
                "Desired DPI ({}) exceeds game limit ({}). Adjusted multiplier to fit limit.",
                DisplayNumber(desired_dpi),
                DisplayNumber(dpi_limit)
            ),
            Advisory::SensitivityBelowMinimum { required, lowest } => write!(
                f,
                "Desired sensitivity ({required:.4}) is below game minimum ({}). Using lowest sensitivity.",
                DisplayNumber(lowest)
            ),
            Advisory::SensitivityAboveMaximum { required, highest } => write!(
                f,
                "Desired sensitivity ({required:.4}) exceeds game maximum ({}). Using highest sensitivity.",
                DisplayNumber(highest)
            ),
        }
    }
}

/// The adjusted multiplier and the clamps that shaped it, in the order they
/// fired.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub multiplier: f64,
    pub advisories: Vec<Advisory>,
}

impl Adjustment {
    #[must_use]
    pub fn was_clamped(&self) -> bool {
        !self.advisories.is_empty()
    }
}

/// Compute the adjusted multiplier, honoring any game limits in `input`.
///
/// Bounds are applied as given. The only failure is a division by zero,
/// which a zero mouse DPI, a zero effective DPI or a zero sensitivity bound
/// can each cause.
pub fn calculate(input: &CalcInput) -> Result<Adjustment, CalcError> {
    let dpi = input.mouse_dpi;
    let multiplier = input.multiplier;
    let desired = input.desired_dpi;
    let mut advisories = Vec::new();

    let mut adjusted = divide(desired, dpi, Divisor::MouseDpi)? * multiplier;

    if let Some(limit) = input.limits.dpi_limit {
        let limit = limit.get();
        if dpi * adjusted > limit {
            adjusted = divide(limit, dpi, Divisor::MouseDpi)? * multiplier;
            advisories.push(Advisory::DpiLimitExceeded {
                desired_dpi: desired,
                dpi_limit: limit,
            });
        }
    }

    if let Some(range) = input.limits.sensitivity {
        let required = divide(desired, dpi * adjusted, Divisor::EffectiveDpi)?;

        if required < range.lowest() {
            adjusted = divide(
                desired,
                dpi * range.lowest(),
                Divisor::LowestSensitivity,
            )? * multiplier;
            advisories.push(Advisory::SensitivityBelowMinimum {
                required,
                lowest: range.lowest(),
            });
        } else if required > range.highest() {
            adjusted = divide(
                desired,
                dpi * range.highest(),
                Divisor::HighestSensitivity,
            )? * multiplier;
            advisories.push(Advisory::SensitivityAboveMaximum {
                required,
                highest: range.highest(),
            });
        }
    }

    Ok(Adjustment {
        multiplier: round_to(adjusted, MULTIPLIER_DECIMALS),
        advisories,
    })
}

/// The no-limits variant: `round((desired / mouse_dpi) * multiplier, 4)`.
pub fn calculate_basic(mouse_dpi: f64, multiplier: f64, desired_dpi: f64) -> Result<f64, CalcError> {
    calculate(&CalcInput::new(mouse_dpi, multiplier, desired_dpi)).map(|adj| adj.multiplier)
}
