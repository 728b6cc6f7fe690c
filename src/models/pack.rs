//! Pack model
//!
//! A pack and its weight-annotated form.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Item;
use crate::weight::WeightUnit;

/// Pack identifier as stored upstream (numeric row id or uuid/slug)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackId::Number(n) => write!(f, "{}", n),
            PackId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PackId {
    fn from(n: i64) -> Self {
        PackId::Number(n)
    }
}

impl From<&str> for PackId {
    fn from(s: &str) -> Self {
        PackId::Text(s.to_string())
    }
}

/// A pack with its gear list
///
/// `items` is optional on the wire so that a pack loaded without its items
/// can be reported as such instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    pub id: PackId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pack {
    pub fn new(id: impl Into<PackId>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            items: Some(items),
            extra: Map::new(),
        }
    }

    /// Pack whose items were never loaded
    pub fn without_items(id: impl Into<PackId>) -> Self {
        Self {
            id: id.into(),
            items: None,
            extra: Map::new(),
        }
    }
}

/// A pack extended with its computed weights
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeighedPack {
    #[serde(flatten)]
    pub pack: Pack,
    pub base_weight: f64,
    pub total_weight: f64,
}

/// Per-pack weight split in a display unit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightBreakdown {
    pub unit: WeightUnit,
    pub base_weight: f64,
    pub worn_weight: f64,
    pub consumable_weight: f64,
    pub total_weight: f64,
    /// Sum of item quantities
    pub item_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pack_id_forms() {
        let numeric: Pack = serde_json::from_value(json!({ "id": 7, "items": [] })).unwrap();
        assert_eq!(numeric.id, PackId::Number(7));
        let text: Pack = serde_json::from_value(json!({ "id": "pct-2026", "items": [] })).unwrap();
        assert_eq!(text.id.to_string(), "pct-2026");
    }

    #[test]
    fn test_items_missing_or_null() {
        let missing: Pack = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(missing.items.is_none());
        let null: Pack = serde_json::from_value(json!({ "id": 1, "items": null })).unwrap();
        assert!(null.items.is_none());
    }

    #[test]
    fn test_weighed_pack_serializes_flat() {
        let mut pack = Pack::new(3, vec![]);
        pack.extra.insert("name".into(), json!("Overnighter"));
        let weighed = WeighedPack { pack, base_weight: 1.5, total_weight: 2.25 };
        let value = serde_json::to_value(&weighed).unwrap();
        assert_eq!(
            value,
            json!({ "id": 3, "items": [], "name": "Overnighter", "baseWeight": 1.5, "totalWeight": 2.25 })
        );
    }
}
