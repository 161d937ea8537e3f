//! Unit conversions, rounding, and shared input validation.

use crate::{Error, Result};

/// Kilograms per pound
pub const LB_TO_KG: f64 = 0.453592;

/// Meters per inch
pub const IN_TO_M: f64 = 0.0254;

/// Convert pounds to kilograms
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * LB_TO_KG
}

/// Convert inches to meters
pub fn in_to_m(inches: f64) -> f64 {
    inches * IN_TO_M
}

/// Convert centimeters to meters
pub fn cm_to_m(cm: f64) -> f64 {
    cm / 100.0
}

/// Round to 1 decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validate that a named input is finite and strictly positive.
///
/// Every numeric calculator input must pass this check before any
/// computation happens. The message names the field so it can be shown
/// to the user as-is.
pub fn require_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "{} must be a positive number",
            name
        )));
    }
    Ok(value)
}
