//! Game-imposed bounds.
//!
//! Bounds are taken as given. An inverted range or a zero limit is not an
//! input error: the calculator applies them as written and only fails when a
//! clamp would divide by zero.

/// Maximum effective DPI a game accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpiLimit(f64);

impl DpiLimit {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// In-game sensitivity bounds. The floor is checked before the ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRange {
    lowest: f64,
    highest: f64,
}

impl SensitivityRange {
    #[must_use]
    pub const fn new(lowest: f64, highest: f64) -> Self {
        Self { lowest, highest }
    }

    #[must_use]
    pub const fn lowest(self) -> f64 {
        self.lowest
    }

    #[must_use]
    pub const fn highest(self) -> f64 {
        self.highest
    }
}

/// Optional bounds applied after the base multiplier calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameLimits {
    pub dpi_limit: Option<DpiLimit>,
    pub sensitivity: Option<SensitivityRange>,
}

impl GameLimits {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            dpi_limit: None,
            sensitivity: None,
        }
    }

    /// Build limits from optional answers.
    ///
    /// The sensitivity range only applies when both ends are given; a lone
    /// bound is dropped (see [`GameLimits::has_lone_sensitivity_bound`]).
    #[must_use]
    pub fn from_raw(
        dpi_limit: Option<f64>,
        lowest_sensitivity: Option<f64>,
        highest_sensitivity: Option<f64>,
    ) -> Self {
        let sensitivity = match (lowest_sensitivity, highest_sensitivity) {
            (Some(lowest), Some(highest)) => Some(SensitivityRange::new(lowest, highest)),
            _ => None,
        };
        Self {
            dpi_limit: dpi_limit.map(DpiLimit::new),
            sensitivity,
        }
    }

    /// True when exactly one sensitivity bound was given, which
    /// [`GameLimits::from_raw`] ignores.
    #[must_use]
    pub const fn has_lone_sensitivity_bound(
        lowest_sensitivity: Option<f64>,
        highest_sensitivity: Option<f64>,
    ) -> bool {
        lowest_sensitivity.is_some() != highest_sensitivity.is_some()
    }
}
