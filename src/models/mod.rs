//! Data models
//!
//! Serde shapes for packs, items and derived summaries.

mod category;
mod item;
mod pack;

pub use category::{CategorySummary, Weight};
pub use item::{Item, DEFAULT_CATEGORY};
pub use pack::{Pack, PackId, WeighedPack, WeightBreakdown};
