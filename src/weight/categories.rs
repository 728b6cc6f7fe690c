//! Category summaries
//!
//! Groups items by category and reports each group's share of the pack.

use std::collections::HashMap;

use crate::models::{CategorySummary, Item, Weight};

struct CategoryAccumulator {
    name: String,
    grams: f64,
    items: usize,
    last_weight: Weight,
}

/// Summarize items per category against a gram denominator
///
/// `total_weight_grams` must be in grams. Percentages are 0 when it is not
/// positive. Categories are returned in the order they are first seen.
pub fn compute_category_summaries(items: &[Item], total_weight_grams: f64) -> Vec<CategorySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CategoryAccumulator> = Vec::new();

    for item in items {
        let name = item.category_name();
        let weight = Weight::new(item.weight, &item.weight_unit);
        let slot = match index.get(name) {
            Some(&slot) => slot,
            None => {
                groups.push(CategoryAccumulator {
                    name: name.to_string(),
                    grams: 0.0,
                    items: 0,
                    last_weight: weight.clone(),
                });
                index.insert(name, groups.len() - 1);
                groups.len() - 1
            }
        };

        let group = &mut groups[slot];
        group.grams += item.total_grams();
        group.items += 1;
        group.last_weight = weight;
    }

    groups
        .into_iter()
        .map(|group| CategorySummary {
            percentage: percentage_of(group.grams, total_weight_grams),
            name: group.name,
            items: group.items,
            weight: group.last_weight,
        })
        .collect()
}

/// Summarize against a total given with its unit tag
pub fn category_summaries_in(items: &[Item], total: &Weight) -> Vec<CategorySummary> {
    compute_category_summaries(items, total.grams())
}

/// Summarize against the items' own combined weight
pub fn pack_category_summaries(items: &[Item]) -> Vec<CategorySummary> {
    let total: f64 = items.iter().map(Item::total_grams).sum();
    compute_category_summaries(items, total)
}

fn percentage_of(part: f64, total: f64) -> u32 {
    if total > 0.0 {
        // a total smaller than the part still caps at 100
        (100.0 * part / total).round().clamp(0.0, 100.0) as u32
    } else {
        0
    }
}
