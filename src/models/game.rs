//! Match, Side, and the bracket-augmented BracketMatch.

use crate::models::roster::RosterId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One of the two sides of a match. "A" is the display convention for left/top.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Whether a match has a result that counts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    #[default]
    Scheduled,
    Played,
}

/// A contest between at most two rosters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// None until an opponent is assigned (e.g. later bracket rounds).
    pub roster_a_id: Option<RosterId>,
    pub roster_b_id: Option<RosterId>,
    #[serde(default)]
    pub score_a: u32,
    #[serde(default)]
    pub score_b: u32,
    /// Drawn maps; added to both sides' tallies, never decides the match.
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub state: MatchState,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
}

impl Default for Match {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            roster_a_id: None,
            roster_b_id: None,
            score_a: 0,
            score_b: 0,
            draws: 0,
            state: MatchState::Scheduled,
            scheduled_at: None,
            played_at: None,
        }
    }
}

impl Match {
    /// A not-yet-played match between two rosters.
    pub fn scheduled(roster_a: RosterId, roster_b: RosterId) -> Self {
        Self {
            roster_a_id: Some(roster_a),
            roster_b_id: Some(roster_b),
            ..Self::default()
        }
    }

    /// A played match with the given map scores.
    pub fn played(roster_a: RosterId, roster_b: RosterId, score_a: u32, score_b: u32) -> Self {
        Self {
            score_a,
            score_b,
            state: MatchState::Played,
            ..Self::scheduled(roster_a, roster_b)
        }
    }

    /// Builder-style: set the number of drawn maps.
    pub fn with_draws(mut self, draws: u32) -> Self {
        self.draws = draws;
        self
    }

    pub fn is_decided(&self) -> bool {
        self.state == MatchState::Played
    }

    /// Winning side, if played and not level.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_decided() {
            return None;
        }
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn roster(&self, side: Side) -> Option<RosterId> {
        match side {
            Side::A => self.roster_a_id,
            Side::B => self.roster_b_id,
        }
    }

    pub fn set_roster(&mut self, side: Side, roster: Option<RosterId>) {
        match side {
            Side::A => self.roster_a_id = roster,
            Side::B => self.roster_b_id = roster,
        }
    }

    pub fn involves(&self, roster: RosterId) -> bool {
        self.roster_a_id == Some(roster) || self.roster_b_id == Some(roster)
    }

    /// True if this match is between `a` and `b`, in either order.
    pub fn is_between(&self, a: RosterId, b: RosterId) -> bool {
        self.involves(a) && self.involves(b)
    }
}

/// A match placed in a bracket tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    #[serde(flatten)]
    pub game: Match,
    /// Creation order: the final is 0, earlier rounds count upward from there.
    pub order: u32,
    /// Match the winner advances into; None only for the final.
    pub next_match_id: Option<MatchId>,
}

impl BracketMatch {
    /// Empty bracket slot with no rosters assigned yet.
    pub fn new(order: u32, next_match_id: Option<MatchId>) -> Self {
        Self {
            game: Match::default(),
            order,
            next_match_id,
        }
    }

    pub fn id(&self) -> MatchId {
        self.game.id
    }

    pub fn is_final(&self) -> bool {
        self.next_match_id.is_none()
    }
}
