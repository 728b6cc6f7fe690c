//! Pack weight aggregation
//!
//! Sums item weights in grams and reports them in a display unit.

use thiserror::Error;

use super::converter::round2;
use super::units::WeightUnit;
use crate::models::{Item, Pack, PackId, WeighedPack, WeightBreakdown};

/// Aggregation error types
#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("Pack {pack_id} is missing its items")]
    MissingItems { pack_id: PackId },
}

/// Result type for aggregation
pub type WeightResult<T> = Result<T, WeightError>;

/// Running gram totals for one pack
#[derive(Debug, Default, Clone, Copy)]
struct GramTotals {
    base: f64,
    worn: f64,
    consumable: f64,
    total: f64,
    count: u64,
}

impl GramTotals {
    fn add(&mut self, item: &Item) {
        let grams = item.total_grams();
        self.total += grams;
        if item.is_base() {
            self.base += grams;
        } else if item.worn {
            self.worn += grams;
        } else {
            self.consumable += grams;
        }
        self.count += u64::from(item.quantity);
    }
}

fn items_of(pack: &Pack) -> WeightResult<&[Item]> {
    pack.items.as_deref().ok_or_else(|| WeightError::MissingItems {
        pack_id: pack.id.clone(),
    })
}

fn gram_totals(pack: &Pack) -> WeightResult<GramTotals> {
    let mut totals = GramTotals::default();
    for item in items_of(pack)? {
        totals.add(item);
    }
    Ok(totals)
}

fn display(grams: f64, unit: WeightUnit) -> f64 {
    round2(grams / unit.grams())
}

/// Annotate a pack with its base and total weight in `unit`
///
/// Base weight excludes consumable and worn items. Any `baseWeight` or
/// `totalWeight` already present on the input pack is replaced.
pub fn compute_pack_weights(pack: &Pack, unit: WeightUnit) -> WeightResult<WeighedPack> {
    let totals = gram_totals(pack)?;

    let mut pack = pack.clone();
    pack.extra.remove("baseWeight");
    pack.extra.remove("totalWeight");

    tracing::debug!(
        pack_id = %pack.id,
        base_grams = totals.base,
        total_grams = totals.total,
        "computed pack weights"
    );

    Ok(WeighedPack {
        pack,
        base_weight: display(totals.base, unit),
        total_weight: display(totals.total, unit),
    })
}

/// Annotate each pack independently, keeping input order
///
/// Fails on the first pack that has no items.
pub fn compute_packs_weights(packs: &[Pack], unit: WeightUnit) -> WeightResult<Vec<WeighedPack>> {
    packs
        .iter()
        .map(|pack| compute_pack_weights(pack, unit))
        .collect()
}

/// Split a pack's weight into base, worn and consumable parts
///
/// An item flagged both worn and consumable counts as worn.
pub fn compute_weight_breakdown(pack: &Pack, unit: WeightUnit) -> WeightResult<WeightBreakdown> {
    let totals = gram_totals(pack)?;
    Ok(WeightBreakdown {
        unit,
        base_weight: display(totals.base, unit),
        worn_weight: display(totals.worn, unit),
        consumable_weight: display(totals.consumable, unit),
        total_weight: display(totals.total, unit),
        item_count: totals.count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_pack() -> Pack {
        Pack::new(
            1,
            vec![
                Item::new(100.0, "g", 2),
                Item::new(1.0, "kg", 1).consumable(),
            ],
        )
    }

    #[test]
    fn test_base_excludes_consumables() {
        let weighed = compute_pack_weights(&sample_pack(), WeightUnit::G).unwrap();
        assert_eq!(weighed.total_weight, 1200.0);
        assert_eq!(weighed.base_weight, 200.0);
    }

    #[test]
    fn test_display_in_kg() {
        let weighed = compute_pack_weights(&sample_pack(), WeightUnit::Kg).unwrap();
        assert_eq!(weighed.total_weight, 1.2);
        assert_eq!(weighed.base_weight, 0.2);
    }

    #[test]
    fn test_worn_items_excluded_from_base() {
        let pack = Pack::new("dayhike", vec![Item::new(500.0, "g", 1).worn(), Item::new(300.0, "g", 1)]);
        let weighed = compute_pack_weights(&pack, WeightUnit::G).unwrap();
        assert_eq!(weighed.base_weight, 300.0);
        assert_eq!(weighed.total_weight, 800.0);
    }

    #[test]
    fn test_empty_pack_is_zero() {
        let weighed = compute_pack_weights(&Pack::new(9, vec![]), WeightUnit::Lb).unwrap();
        assert_eq!(weighed.base_weight, 0.0);
        assert_eq!(weighed.total_weight, 0.0);
    }

    #[test]
    fn test_missing_items_names_pack() {
        let err = compute_pack_weights(&Pack::without_items(42), WeightUnit::G).unwrap_err();
        assert_eq!(err, WeightError::MissingItems { pack_id: PackId::Number(42) });
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_unknown_item_unit_counts_as_grams() {
        let pack = Pack::new(1, vec![Item::new(50.0, "stone", 2)]);
        let weighed = compute_pack_weights(&pack, WeightUnit::G).unwrap();
        assert_eq!(weighed.total_weight, 100.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let pack = Pack::new(1, vec![Item::new(2.0, "oz", 1)]);
        let weighed = compute_pack_weights(&pack, WeightUnit::G).unwrap();
        assert_eq!(weighed.total_weight, 56.7);
    }

    #[test]
    fn test_idempotent() {
        let pack = sample_pack();
        let first = compute_pack_weights(&pack, WeightUnit::Oz).unwrap();
        let second = compute_pack_weights(&pack, WeightUnit::Oz).unwrap();
        assert_eq!(first.base_weight, second.base_weight);
        assert_eq!(first.total_weight, second.total_weight);
    }

    #[test]
    fn test_reannotating_replaces_previous_weights() {
        let pack: Pack = serde_json::from_value(json!({
            "id": 5,
            "items": [{ "weight": 10, "weightUnit": "g", "quantity": 1 }],
            "baseWeight": 999,
            "totalWeight": 999
        }))
        .unwrap();
        let value = serde_json::to_value(compute_pack_weights(&pack, WeightUnit::G).unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("baseWeight"), Some(&json!(10.0)));
        assert_eq!(object.get("totalWeight"), Some(&json!(10.0)));
    }

    #[test]
    fn test_packs_preserve_order_and_length() {
        let packs = vec![
            Pack::new(3, vec![Item::new(1.0, "kg", 1)]),
            Pack::new(1, vec![]),
            Pack::new(2, vec![Item::new(1.0, "lb", 1)]),
        ];
        let weighed = compute_packs_weights(&packs, WeightUnit::G).unwrap();
        assert_eq!(weighed.len(), 3);
        let ids: Vec<_> = weighed.iter().map(|w| w.pack.id.clone()).collect();
        assert_eq!(ids, vec![PackId::Number(3), PackId::Number(1), PackId::Number(2)]);
        assert_eq!(weighed[0].total_weight, 1000.0);
        assert_eq!(weighed[2].total_weight, 453.59);
    }

    #[test]
    fn test_packs_fail_on_missing_items() {
        let packs = vec![Pack::new(1, vec![]), Pack::without_items("broken")];
        let err = compute_packs_weights(&packs, WeightUnit::G).unwrap_err();
        assert_eq!(err, WeightError::MissingItems { pack_id: PackId::from("broken") });
    }

    #[test]
    fn test_base_weight_follows_item_rule() {
        let items = vec![
            Item::new(250.0, "g", 2),
            Item::new(3.0, "oz", 1).worn(),
            Item::new(0.4, "kg", 1).consumable(),
            Item::new(80.0, "g", 1).worn().consumable(),
        ];
        let expected: f64 = items.iter().filter(|i| i.is_base()).map(Item::total_grams).sum();
        let b = compute_weight_breakdown(&Pack::new(1, items), WeightUnit::G).unwrap();
        assert_eq!(b.base_weight, round2(expected));
        assert_eq!(b.base_weight, 500.0);
    }

    #[test]
    fn test_breakdown() {
        let pack = Pack::new(
            1,
            vec![
                Item::new(200.0, "g", 2),
                Item::new(400.0, "g", 1).worn(),
                Item::new(1.0, "kg", 1).consumable(),
                Item::new(100.0, "g", 1).worn().consumable(),
            ],
        );
        let b = compute_weight_breakdown(&pack, WeightUnit::G).unwrap();
        assert_eq!(b.base_weight, 400.0);
        assert_eq!(b.worn_weight, 500.0);
        assert_eq!(b.consumable_weight, 1000.0);
        assert_eq!(b.total_weight, 1900.0);
        assert_eq!(b.item_count, 5);
        assert_eq!(b.unit, WeightUnit::G);
    }
}
