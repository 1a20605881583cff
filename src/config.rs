//! Game tuning
//!
//! The knobs the original kept retuning, pulled out as data. The host can
//! ship overrides as JSON; everything else about the game is fixed layout.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Tunable parameters for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Inclusive bounds for the number of swaps in a plan
    pub swap_count: RangeInclusive<u32>,
    /// Per-tick interpolation step, in layout units
    pub swap_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swap_count: 3..=6,
            swap_speed: 5.0,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
