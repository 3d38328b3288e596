//! Bracket generation settings.

use serde::{Deserialize, Serialize};

/// How first-round opponents are chosen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Top half meets bottom half strictly by seed (best vs worst).
    #[default]
    Seeded,
    /// Best remaining seed meets the worst remaining seed it has not already played
    /// in the group stage.
    AvoidRematches,
}

/// Settings for bracket generation. Missing fields take their defaults.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketConfig {
    #[serde(default)]
    pub placement: Placement,
    /// Map score awarded to a roster that advances on a bye (opponent gets 0).
    #[serde(default = "default_bye_score")]
    pub bye_score: u32,
}

fn default_bye_score() -> u32 {
    3
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            bye_score: default_bye_score(),
        }
    }
}

impl BracketConfig {
    pub fn with_placement(placement: Placement) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }
}
