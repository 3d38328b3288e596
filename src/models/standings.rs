//! Standings table rows.

use crate::models::roster::RosterId;
use serde::{Deserialize, Serialize};

/// Public score of a roster in the standings table.
///
/// Counters are wider than per-match scores so that many large results still add up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableScore {
    pub map_wins: u64,
    pub map_losses: u64,
    pub map_draws: u64,
    pub matches_played: u64,
}

impl TableScore {
    /// Map wins minus map losses.
    pub fn map_differential(&self) -> i128 {
        i128::from(self.map_wins) - i128::from(self.map_losses)
    }
}

/// One row of a standings table, in seed order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub roster_id: RosterId,
    pub score: TableScore,
}
