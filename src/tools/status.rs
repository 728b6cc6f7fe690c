//! GearPack Status Tool
//!
//! Runtime status and usage guide for the GearPack server.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::weight::{WeightUnit, G_PER_LB, G_PER_OZ};

/// Packing tool instructions for AI assistants
pub const PACKING_INSTRUCTIONS: &str = r#"
# GearPack Instructions

GearPack computes pack weights from gear lists you send it. It stores nothing:
send the full pack (or item list) with every call.

## Item shape

| Field      | Type    | Notes                                             |
|------------|---------|---------------------------------------------------|
| weight     | number  | weight of ONE unit of the item                    |
| weightUnit | string  | g, oz, kg or lb (anything else is read as grams)  |
| quantity   | integer | defaults to 1                                     |
| category   | string  | blank or missing becomes "Other"                  |
| consumable | bool    | food, fuel, water; excluded from base weight      |
| worn       | bool    | clothing/shoes on your body; excluded from base   |

A pack is `{ "id": ..., "items": [ ... ] }`. Extra fields are echoed back.
A pack without `items` is an error; an empty list is fine and weighs 0.

## Weights

- **Base weight**: everything that is neither consumable nor worn.
- **Total weight**: every item, times its quantity.
- Results are rounded to 2 decimals in the requested unit
  (`preferred_unit`, else the server default).

## Tools

1. `compute_pack_weights` - one pack, adds baseWeight/totalWeight
2. `compute_packs_weights` - many packs, same order as given
3. `pack_breakdown` - base/worn/consumable/total plus category table
4. `summarize_categories` - category table for a flat item list. If you pass
   `total_weight`, ALSO pass `total_unit`; percentages are computed in grams.
5. `convert_weight` - convert one value between units

## Category table

Each row has the category name, the number of item lines (not quantities),
the weight of the last item listed in that category as entered, and its
whole-number percentage of the total.
"#;

/// Runtime status of the GearPack service
#[derive(Debug, Clone, Serialize)]
pub struct GearPackStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub display_unit: WeightUnit,
    pub grams_per_oz: f64,
    pub grams_per_lb: f64,
    pub packs_computed: u64,

    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    display_unit: WeightUnit,
    packs_computed: u64,
}

impl StatusTracker {
    pub fn new(display_unit: WeightUnit) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            display_unit,
            packs_computed: 0,
        }
    }

    /// Count packs weighed since startup
    pub fn record_packs(&mut self, count: usize) {
        self.packs_computed += count as u64;
    }

    pub fn get_status(&self) -> GearPackStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        GearPackStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            display_unit: self.display_unit,
            grams_per_oz: G_PER_OZ,
            grams_per_lb: G_PER_LB,
            packs_computed: self.packs_computed,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
