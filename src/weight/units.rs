//! Weight units and conversion constants
//!
//! All aggregation happens in grams. These are the only conversion factors in
//! the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Display unit for weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    G,
    Oz,
    Kg,
    Lb,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 4] = [WeightUnit::G, WeightUnit::Oz, WeightUnit::Kg, WeightUnit::Lb];

    /// Parse a unit string, accepting common long forms. Case and surrounding
    /// whitespace are ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(WeightUnit::G),
            "oz" | "ounce" | "ounces" => Some(WeightUnit::Oz),
            "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Lb),
            _ => None,
        }
    }

    /// Parse a unit string, treating anything unrecognized as grams
    pub fn parse_or_grams(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Grams in one of this unit
    pub fn grams(&self) -> f64 {
        match self {
            WeightUnit::G => 1.0,
            WeightUnit::Oz => G_PER_OZ,
            WeightUnit::Kg => G_PER_KG,
            WeightUnit::Lb => G_PER_LB,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::G => "g",
            WeightUnit::Oz => "oz",
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get the conversion factor to grams for a unit string
///
/// Returns None for anything outside g/oz/kg/lb and their aliases.
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    WeightUnit::parse(unit).map(|u| u.grams())
}
