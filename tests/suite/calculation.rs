//! Calculator properties across a spread of realistic inputs.

use sensecalc_types::{
    Advisory, CalcError, CalcInput, Divisor, DpiLimit, GameLimits, SensitivityRange, calculate,
    calculate_basic,
};

const MOUSE_DPIS: [f64; 5] = [400.0, 800.0, 1200.0, 1600.0, 3200.0];
const DESIRED_DPIS: [f64; 6] = [200.0, 450.0, 800.0, 1000.0, 1600.0, 6400.0];

// Rounding to 4 places moves the multiplier by at most 0.00005.
const MULTIPLIER_SLACK: f64 = 0.000_05;

fn with_dpi_limit(limit: f64) -> GameLimits {
    GameLimits {
        dpi_limit: Some(DpiLimit::new(limit)),
        sensitivity: None,
    }
}

fn with_sensitivity(lowest: f64, highest: f64) -> GameLimits {
    GameLimits {
        dpi_limit: None,
        sensitivity: Some(SensitivityRange::new(lowest, highest)),
    }
}

// (mouse DPI, multiplier, desired DPI, expected), expected values taken from
// Python's `round((desired / dpi) * multiplier, 4)`.
const ROUNDED_RATIOS: [(f64, f64, f64, f64); 13] = [
    (800.0, 1.0, 1600.0, 2.0),
    (800.0, 1.0, 1600.04, 2.0),
    (400.0, 1.2, 1000.0, 3.0),
    (1600.0, 0.5, 800.0, 0.25),
    (3.0, 1.0, 1.0, 0.3333),
    (3.0, 1.0, 2.0, 0.6667),
    (1200.0, 0.7, 1000.0, 0.5833),
    (1000.0, 0.12345, 1000.0, 0.1235),
    (800.0, 0.35, 1234.0, 0.5399),
    (3200.0, 1.1, 450.0, 0.1547),
    (1600.0, 1.7, 6400.0, 6.8),
    (400.0, 0.25, 200.0, 0.125),
    (700.0, 1.0, 1000.07, 1.4287),
];

#[test]
fn unbounded_result_is_rounded_ratio() {
    for (dpi, multiplier, desired, expected) in ROUNDED_RATIOS {
        assert_eq!(
            calculate_basic(dpi, multiplier, desired).unwrap(),
            expected,
            "dpi={dpi} multiplier={multiplier} desired={desired}"
        );
    }
}

#[test]
fn reference_values() {
    assert_eq!(calculate_basic(800.0, 1.0, 1600.0).unwrap(), 2.0);

    let clamped = calculate(&CalcInput::new(800.0, 1.0, 1600.0).with_limits(with_dpi_limit(1000.0)))
        .unwrap();
    assert_eq!(clamped.multiplier, 1.25);
    assert_eq!(800.0 * clamped.multiplier, 1000.0);
}

#[test]
fn zero_mouse_dpi_is_rejected_in_every_mode() {
    let zero_dpi = Err(CalcError::DivisionByZero(Divisor::MouseDpi));
    assert_eq!(calculate_basic(0.0, 1.0, 800.0), zero_dpi);
    let bounded = CalcInput {
        mouse_dpi: 0.0,
        multiplier: 1.0,
        desired_dpi: 800.0,
        limits: GameLimits::from_raw(Some(1000.0), Some(0.5), Some(2.0)),
    };
    assert_eq!(calculate(&bounded).map(|adj| adj.multiplier), zero_dpi);
}

#[test]
fn effective_dpi_never_exceeds_limit() {
    for dpi in MOUSE_DPIS {
        for desired in DESIRED_DPIS {
            for limit in [500.0, 900.0, 3000.0] {
                let input = CalcInput::new(dpi, 1.0, desired).with_limits(with_dpi_limit(limit));
                let adj = calculate(&input).unwrap();
                assert!(
                    dpi * adj.multiplier <= limit + dpi * MULTIPLIER_SLACK + 1e-9,
                    "dpi={dpi} desired={desired} limit={limit} -> {}",
                    adj.multiplier
                );
                assert_eq!(adj.was_clamped(), desired > limit);
            }
        }
    }
}

#[test]
fn required_sensitivity_lands_in_range() {
    let ranges = [(0.5, 1.5), (1.0, 1.0), (0.1, 10.0), (2.0, 4.0)];
    for dpi in MOUSE_DPIS {
        for desired in DESIRED_DPIS {
            for (lowest, highest) in ranges {
                let input =
                    CalcInput::new(dpi, 1.0, desired).with_limits(with_sensitivity(lowest, highest));
                let adj = calculate(&input).unwrap();

                // Bounds on the multiplier translate to bounds on the sensitivity.
                let low_multiplier = desired / (dpi * highest);
                let high_multiplier = desired / (dpi * lowest);
                assert!(
                    adj.multiplier >= low_multiplier - MULTIPLIER_SLACK
                        && adj.multiplier <= high_multiplier + MULTIPLIER_SLACK,
                    "dpi={dpi} desired={desired} range=[{lowest}, {highest}] -> {}",
                    adj.multiplier
                );
            }
        }
    }
}

#[test]
fn dpi_clamp_runs_before_sensitivity_clamp() {
    let limits = GameLimits::from_raw(Some(1000.0), Some(0.5), Some(1.5));
    let adj = calculate(&CalcInput::new(800.0, 1.0, 1600.0).with_limits(limits)).unwrap();

    assert_eq!(adj.multiplier, 1.3333);
    assert_eq!(
        adj.advisories,
        vec![
            Advisory::DpiLimitExceeded {
                desired_dpi: 1600.0,
                dpi_limit: 1000.0,
            },
            Advisory::SensitivityAboveMaximum {
                required: 1.6,
                highest: 1.5,
            },
        ]
    );
}

#[test]
fn lone_sensitivity_bound_has_no_effect() {
    let limits = GameLimits::from_raw(None, Some(5.0), None);
    let adj = calculate(&CalcInput::new(800.0, 1.0, 1600.0).with_limits(limits)).unwrap();
    assert_eq!(adj.multiplier, 2.0);
    assert!(adj.advisories.is_empty());
}

#[test]
fn unusual_bounds_compute_instead_of_failing() {
    let inverted = GameLimits::from_raw(None, Some(3.0), Some(2.0));
    let adj = calculate(&CalcInput::new(800.0, 1.0, 1600.0).with_limits(inverted)).unwrap();
    assert_eq!(adj.multiplier, 0.6667);

    let zero_limit = GameLimits::from_raw(Some(0.0), None, None);
    let adj = calculate(&CalcInput::new(800.0, 1.0, 1600.0).with_limits(zero_limit)).unwrap();
    assert_eq!(adj.multiplier, 0.0);
}

#[test]
fn zero_limit_with_sensitivity_range_divides_by_zero() {
    let limits = GameLimits::from_raw(Some(0.0), Some(0.5), Some(1.5));
    assert_eq!(
        calculate(&CalcInput::new(800.0, 1.0, 1600.0).with_limits(limits)),
        Err(CalcError::DivisionByZero(Divisor::EffectiveDpi))
    );
}
