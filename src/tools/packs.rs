//! Pack weight tools
//!
//! Decode caller payloads, run the aggregator and shape the responses.

use serde::Serialize;
use serde_json::Value;

use crate::models::{CategorySummary, Item, Pack, PackId, WeighedPack, Weight, WeightBreakdown};
use crate::weight::{self, format_weight, WeightUnit};

/// Response for compute_pack_weights
#[derive(Debug, Serialize)]
pub struct PackWeightsResponse {
    pub unit: WeightUnit,
    pub pack: WeighedPack,
}

/// Response for compute_packs_weights
#[derive(Debug, Serialize)]
pub struct PacksWeightsResponse {
    pub unit: WeightUnit,
    pub packs: Vec<WeighedPack>,
    pub total: usize,
}

/// Response for summarize_categories
#[derive(Debug, Serialize)]
pub struct CategorySummariesResponse {
    pub categories: Vec<CategorySummary>,
    /// Denominator used for the percentages, in grams
    pub total_weight_grams: f64,
    pub count: usize,
}

/// Human readable totals
#[derive(Debug, Serialize)]
pub struct WeightDisplay {
    pub base: String,
    pub worn: String,
    pub consumable: String,
    pub total: String,
}

/// Response for pack_breakdown
#[derive(Debug, Serialize)]
pub struct PackBreakdownResponse {
    pub pack_id: PackId,
    pub breakdown: WeightBreakdown,
    pub display: WeightDisplay,
    pub categories: Vec<CategorySummary>,
}

/// Response for convert_weight
#[derive(Debug, Serialize)]
pub struct ConvertWeightResponse {
    pub value: f64,
    pub from: WeightUnit,
    pub to: WeightUnit,
    pub result: f64,
    pub display: String,
}

/// Pick the display unit for a request
///
/// An unrecognized unit falls back to grams rather than failing the request.
pub fn resolve_unit(requested: Option<&str>, default_unit: WeightUnit) -> WeightUnit {
    match requested.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => WeightUnit::parse(raw).unwrap_or_else(|| {
            tracing::warn!("Unknown display unit '{}', using grams", raw);
            WeightUnit::G
        }),
        None => default_unit,
    }
}

fn decode_pack(value: Value) -> Result<Pack, String> {
    serde_json::from_value(value).map_err(|e| format!("Invalid pack: {}", e))
}

fn decode_items(value: Value) -> Result<Vec<Item>, String> {
    serde_json::from_value(value).map_err(|e| format!("Invalid items: {}", e))
}

/// Annotate one pack with base and total weight
pub fn compute_pack_weights(pack: Value, unit: WeightUnit) -> Result<PackWeightsResponse, String> {
    let pack = decode_pack(pack)?;
    let pack = weight::compute_pack_weights(&pack, unit)
        .map_err(|e| format!("Failed to compute pack weights: {}", e))?;

    Ok(PackWeightsResponse { unit, pack })
}

/// Annotate a list of packs, keeping their order
pub fn compute_packs_weights(packs: Value, unit: WeightUnit) -> Result<PacksWeightsResponse, String> {
    let packs: Vec<Pack> =
        serde_json::from_value(packs).map_err(|e| format!("Invalid packs: {}", e))?;
    let packs = weight::compute_packs_weights(&packs, unit)
        .map_err(|e| format!("Failed to compute pack weights: {}", e))?;

    tracing::info!("Computed weights for {} packs in {}", packs.len(), unit);

    Ok(PacksWeightsResponse {
        unit,
        total: packs.len(),
        packs,
    })
}

/// Summarize items per category
///
/// With no explicit total the items' own combined weight is the denominator.
pub fn summarize_categories(
    items: Value,
    total: Option<Weight>,
) -> Result<CategorySummariesResponse, String> {
    let items = decode_items(items)?;

    let total = total.unwrap_or_else(|| Weight::new(items.iter().map(Item::total_grams).sum(), "g"));
    let categories = weight::category_summaries_in(&items, &total);

    Ok(CategorySummariesResponse {
        count: categories.len(),
        categories,
        total_weight_grams: total.grams(),
    })
}

/// Build the category denominator from request fields
///
/// A unit without a value is ignored with a warning; the items' own weight is
/// used instead.
pub fn total_from_params(total_weight: Option<f64>, total_unit: Option<&str>) -> Option<Weight> {
    match (total_weight, total_unit) {
        (Some(value), unit) => Some(Weight::new(value, unit.unwrap_or("g"))),
        (None, Some(unit)) => {
            tracing::warn!("total_unit '{}' given without total_weight, ignoring it", unit);
            None
        }
        (None, None) => None,
    }
}

/// Full weight breakdown of a pack with its category table
pub fn pack_breakdown(pack: Value, unit: WeightUnit) -> Result<PackBreakdownResponse, String> {
    let pack = decode_pack(pack)?;
    let breakdown = weight::compute_weight_breakdown(&pack, unit)
        .map_err(|e| format!("Failed to compute breakdown: {}", e))?;

    // compute_weight_breakdown already rejected a pack without items
    let items = pack.items.as_deref().unwrap_or_default();
    let categories = weight::pack_category_summaries(items);

    let display = WeightDisplay {
        base: format_weight(breakdown.base_weight, unit),
        worn: format_weight(breakdown.worn_weight, unit),
        consumable: format_weight(breakdown.consumable_weight, unit),
        total: format_weight(breakdown.total_weight, unit),
    };

    Ok(PackBreakdownResponse {
        pack_id: pack.id,
        breakdown,
        display,
        categories,
    })
}

/// Convert a single weight between units
pub fn convert_weight(value: f64, from: &str, to: &str) -> ConvertWeightResponse {
    let from = resolve_unit(Some(from), WeightUnit::G);
    let to = resolve_unit(Some(to), WeightUnit::G);
    let result = weight::convert_weight(value, from.as_str(), to.as_str());

    ConvertWeightResponse {
        value,
        from,
        to,
        result,
        display: format_weight(result, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trail_pack() -> Value {
        json!({
            "id": 12,
            "name": "JMT section",
            "items": [
                { "name": "Tent", "weight": 1.2, "weightUnit": "kg", "quantity": 1, "category": "Shelter" },
                { "name": "Stakes", "weight": 10, "weightUnit": "g", "quantity": 8, "category": "Shelter" },
                { "name": "Dinner", "weight": 150, "weightUnit": "g", "quantity": 4, "category": "Food", "consumable": true },
                { "name": "Boots", "weight": 900, "weightUnit": "g", "quantity": 1, "category": "Clothing", "worn": true }
            ]
        })
    }

    #[test]
    fn test_resolve_unit() {
        assert_eq!(resolve_unit(None, WeightUnit::Oz), WeightUnit::Oz);
        assert_eq!(resolve_unit(Some(""), WeightUnit::Oz), WeightUnit::Oz);
        assert_eq!(resolve_unit(Some("kg"), WeightUnit::Oz), WeightUnit::Kg);
        assert_eq!(resolve_unit(Some("bushel"), WeightUnit::Oz), WeightUnit::G);
    }

    #[test]
    fn test_compute_pack_weights_keeps_pack_fields() {
        let response = compute_pack_weights(trail_pack(), WeightUnit::G).unwrap();
        assert_eq!(response.pack.base_weight, 1280.0);
        assert_eq!(response.pack.total_weight, 2780.0);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["unit"], json!("g"));
        assert_eq!(value["pack"]["name"], json!("JMT section"));
        assert_eq!(value["pack"]["baseWeight"], json!(1280.0));
    }

    #[test]
    fn test_compute_pack_weights_missing_items() {
        let err = compute_pack_weights(json!({ "id": 4 }), WeightUnit::G).unwrap_err();
        assert!(err.contains("Pack 4 is missing its items"));
    }

    #[test]
    fn test_compute_pack_weights_rejects_garbage() {
        let err = compute_pack_weights(json!("not a pack"), WeightUnit::G).unwrap_err();
        assert!(err.starts_with("Invalid pack"));
    }

    #[test]
    fn test_compute_packs_weights() {
        let packs = json!([trail_pack(), { "id": "empty", "items": [] }]);
        let response = compute_packs_weights(packs, WeightUnit::Kg).unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.packs[0].total_weight, 2.78);
        assert_eq!(response.packs[1].total_weight, 0.0);
    }

    #[test]
    fn test_summarize_categories_derived_total() {
        let items = trail_pack()["items"].clone();
        let response = summarize_categories(items, None).unwrap();
        assert_eq!(response.count, 3);
        assert_eq!(response.total_weight_grams, 2780.0);
        let shelter = &response.categories[0];
        assert_eq!(shelter.name, "Shelter");
        assert_eq!(shelter.items, 2);
        assert_eq!(shelter.weight, Weight::new(10.0, "g"));
        assert_eq!(shelter.percentage, 46);
    }

    #[test]
    fn test_summarize_categories_tagged_total() {
        let items = json!([{ "weight": 250, "weightUnit": "g", "category": "Water" }]);
        let response = summarize_categories(items, Some(Weight::new(1.0, "kg"))).unwrap();
        assert_eq!(response.total_weight_grams, 1000.0);
        assert_eq!(response.categories[0].percentage, 25);
    }

    #[test]
    fn test_summarize_categories_small_total_caps_percentage() {
        let items = json!([{ "weight": 1, "weightUnit": "kg", "category": "Shelter" }]);
        let response = summarize_categories(items, Some(Weight::new(1.0, "g"))).unwrap();
        assert_eq!(response.categories[0].percentage, 100);
    }

    #[test]
    fn test_total_from_params() {
        assert_eq!(total_from_params(Some(2.0), Some("kg")), Some(Weight::new(2.0, "kg")));
        assert_eq!(total_from_params(Some(500.0), None), Some(Weight::new(500.0, "g")));
        assert_eq!(total_from_params(None, Some("kg")), None);
        assert_eq!(total_from_params(None, None), None);
    }

    #[test]
    fn test_pack_breakdown() {
        let response = pack_breakdown(trail_pack(), WeightUnit::Kg).unwrap();
        assert_eq!(response.pack_id, PackId::Number(12));
        assert_eq!(response.breakdown.base_weight, 1.28);
        assert_eq!(response.breakdown.worn_weight, 0.9);
        assert_eq!(response.breakdown.consumable_weight, 0.6);
        assert_eq!(response.breakdown.item_count, 14);
        assert_eq!(response.display.total, "2.78 kg");
        assert_eq!(response.categories.len(), 3);
    }

    #[test]
    fn test_convert_weight() {
        let response = convert_weight(1200.0, "g", "kg");
        assert_eq!(response.result, 1.2);
        assert_eq!(response.display, "1.2 kg");
        assert_eq!(convert_weight(5.0, "bogus", "g").result, 5.0);
    }
}
