//! Gear item model
//!
//! One line of a pack's gear list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::weight::to_grams;

/// Category name used when an item has none
pub const DEFAULT_CATEGORY: &str = "Other";

fn default_quantity() -> u32 {
    1
}

fn default_unit() -> String {
    "g".to_string()
}

/// A gear item as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: f64,
    /// Stored as given; anything other than g/oz/kg/lb is read as grams
    #[serde(default = "default_unit")]
    pub weight_unit: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub consumable: bool,
    #[serde(default)]
    pub worn: bool,
    /// Fields this crate does not interpret, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Item with no name, category or extra fields
    pub fn new(weight: f64, weight_unit: &str, quantity: u32) -> Self {
        Self {
            name: None,
            weight,
            weight_unit: weight_unit.to_string(),
            quantity,
            category: None,
            consumable: false,
            worn: false,
            extra: Map::new(),
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn consumable(mut self) -> Self {
        self.consumable = true;
        self
    }

    pub fn worn(mut self) -> Self {
        self.worn = true;
        self
    }

    /// Gram weight of the whole line (weight x quantity)
    pub fn total_grams(&self) -> f64 {
        to_grams(self.weight, &self.weight_unit) * f64::from(self.quantity)
    }

    /// Counts toward base weight: carried from the start and not worn
    pub fn is_base(&self) -> bool {
        !self.consumable && !self.worn
    }

    /// Trimmed category, or "Other" when missing or blank
    pub fn category_name(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }
}
