//! Weight calculation module
//!
//! Unit conversion, pack totals and category summaries. Everything here is
//! pure and safe to call from concurrent handlers.

pub mod aggregator;
pub mod categories;
pub mod converter;
pub mod units;

pub use aggregator::{
    compute_pack_weights, compute_packs_weights, compute_weight_breakdown, WeightError,
    WeightResult,
};
pub use categories::{category_summaries_in, compute_category_summaries, pack_category_summaries};
pub use converter::{convert_weight, format_weight, from_grams, round2, to_grams};
pub use units::{grams_per_unit, WeightUnit, G_PER_KG, G_PER_LB, G_PER_OZ};
