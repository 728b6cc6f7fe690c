//! Category summary model

use serde::{Deserialize, Serialize};

use crate::weight::to_grams;

/// A weight value with its unit tag, as the caller wrote it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: String,
}

impl Weight {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }

    /// Value in grams; an unrecognized unit is read as grams
    pub fn grams(&self) -> f64 {
        to_grams(self.value, &self.unit)
    }
}

/// Aggregate for one gear category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    /// Number of item lines, not the sum of quantities
    pub items: usize,
    /// Original weight of the last item seen in this category, unconverted
    pub weight: Weight,
    /// Share of the total weight, rounded to a whole percent in 0..=100
    pub percentage: u32,
}
