//! Runtime configuration
//!
//! Read once from the environment at startup.

use crate::weight::WeightUnit;

/// Environment variable naming the default display unit
pub const DISPLAY_UNIT_VAR: &str = "GEARPACK_DISPLAY_UNIT";

/// Default log directive when RUST_LOG is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "gearpack=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Unit used when a request does not name one
    pub display_unit: WeightUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_unit: WeightUnit::G,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let display_unit = match lookup(DISPLAY_UNIT_VAR) {
            Some(raw) => WeightUnit::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("{}='{}' is not a weight unit, using grams", DISPLAY_UNIT_VAR, raw);
                WeightUnit::G
            }),
            None => WeightUnit::G,
        };

        Self { display_unit }
    }
}
