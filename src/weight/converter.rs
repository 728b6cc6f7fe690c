//! Unit conversion functions
//!
//! Converts between item units and the gram basis used for aggregation.

use super::units::{grams_per_unit, WeightUnit};

/// Convert a weight in the given unit to grams
///
/// Unrecognized units are treated as grams already.
pub fn to_grams(weight: f64, unit: &str) -> f64 {
    match grams_per_unit(unit) {
        Some(factor) => weight * factor,
        None => {
            tracing::warn!("Unrecognized weight unit '{}', treating {} as grams", unit, weight);
            weight
        }
    }
}

/// Convert a gram amount into the given unit
///
/// Unrecognized units get the gram amount back unchanged.
pub fn from_grams(grams: f64, unit: &str) -> f64 {
    match grams_per_unit(unit) {
        Some(factor) => grams / factor,
        None => {
            tracing::warn!("Unrecognized weight unit '{}', reporting {} g unchanged", unit, grams);
            grams
        }
    }
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a weight between two units, rounded for display
pub fn convert_weight(value: f64, from: &str, to: &str) -> f64 {
    round2(from_grams(to_grams(value, from), to))
}

/// Format a weight for display, e.g. "1.2 kg"
///
/// At most two decimals are shown and trailing zeros are dropped.
pub fn format_weight(value: f64, unit: WeightUnit) -> String {
    let fixed = format!("{:.2}", round2(value));
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let number = if trimmed == "-0" { "0" } else { trimmed };
    format!("{} {}", number, unit)
}
