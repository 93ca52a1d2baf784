//! Numeric helpers shared by the calculator and its callers.

use std::fmt;

/// Round `value` to `places` decimal places.
///
/// Rounds the exact binary value, not `value * 10^places`: `2.00005` is
/// stored as `2.0000499999...` and rounds down to `2.0`, while `0.12345` is
/// stored as `0.1234500000...04` and rounds up to `0.1235`.
#[must_use]
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Formats an `f64` the way it reads back when typed: integral values keep a
/// trailing `.0` (`2.0`, `800.0`), everything else uses the shortest
/// representation that round-trips (`1.25`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayNumber(pub f64);

// Past 2^53 every f64 is integral and `{:.1}` would print long digit runs.
const INTEGRAL_DISPLAY_MAX: f64 = 9_007_199_254_740_992.0;

impl fmt::Display for DisplayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGRAL_DISPLAY_MAX {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}
