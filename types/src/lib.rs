//! Core domain types for sensecalc.
//!
//! This crate contains the multiplier calculator and the typed inputs it
//! operates on, with no IO and minimal dependencies. Parsing of raw answers
//! lives here too so that every caller rejects bad input the same way.

mod calc;
mod input;
mod limits;
mod number;

pub use calc::{
    Adjustment, Advisory, CalcError, CalcInput, Divisor, MULTIPLIER_DECIMALS, calculate,
    calculate_basic,
};
pub use input::{Field, InputError, parse_number, parse_optional};
pub use limits::{DpiLimit, GameLimits, SensitivityRange};
pub use number::{DisplayNumber, round_to};
