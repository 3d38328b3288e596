//! Bracket and LeagueError.

use crate::models::game::{BracketMatch, MatchId, MatchState, Side};
use crate::models::roster::RosterId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Errors that can occur while seeding or maintaining a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// The same roster id was supplied twice.
    DuplicateRoster(RosterId),
    /// No match with this id in the bracket.
    MatchNotFound(MatchId),
    /// Match does not have two rosters yet, so it cannot take a result.
    MissingOpponent(MatchId),
    /// Level score; a bracket match must have a winner.
    UndecidedResult(MatchId),
    /// No match without a `next_match_id`.
    NoFinal,
    /// More than one match without a `next_match_id`.
    MultipleFinals,
    /// Match cannot be reached from the final by following parent links.
    DisconnectedMatch(MatchId),
    /// Parent match fed by more than two matches.
    NotATree(MatchId),
    /// The next match already has a result, so the roster advancing into it cannot change.
    ParentAlreadyPlayed(MatchId),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::DuplicateRoster(id) => write!(f, "Roster {} appears more than once", id),
            LeagueError::MatchNotFound(id) => write!(f, "Match {} not found in bracket", id),
            LeagueError::MissingOpponent(id) => write!(f, "Match {} does not have two rosters", id),
            LeagueError::UndecidedResult(id) => {
                write!(f, "Match {} needs a winner, scores cannot be level", id)
            }
            LeagueError::NoFinal => write!(f, "Bracket has no final match"),
            LeagueError::MultipleFinals => write!(f, "Bracket has more than one final match"),
            LeagueError::DisconnectedMatch(id) => {
                write!(f, "Match {} is not connected to the final", id)
            }
            LeagueError::NotATree(id) => write!(f, "Match {} is fed by more than two matches", id),
            LeagueError::ParentAlreadyPlayed(id) => {
                write!(f, "Match {} already has a result, earlier winners are locked", id)
            }
        }
    }
}

impl std::error::Error for LeagueError {}

/// A single-elimination bracket: rounds ordered first round -> final.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub rounds: Vec<Vec<BracketMatch>>,
    /// Rosters that could not be given a slot (rematch avoidance ran out of opponents).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unplaced: Vec<RosterId>,
}

/// Side of the parent that `child` feeds: the lower-order sibling feeds side A.
pub(crate) fn feeding_side(round: &[BracketMatch], child: &BracketMatch) -> Side {
    let has_earlier_sibling = round.iter().any(|m| {
        m.next_match_id.is_some() && m.next_match_id == child.next_match_id && m.order < child.order
    });
    if has_earlier_sibling {
        Side::B
    } else {
        Side::A
    }
}

impl Bracket {
    /// Rebuild the round structure from a flat list of stored bracket matches.
    ///
    /// Starts from the one match without a parent and walks down the `next_match_id`
    /// links; each round is ordered by `order`. An empty list gives an empty bracket.
    pub fn from_matches(matches: Vec<BracketMatch>) -> Result<Self, LeagueError> {
        if matches.is_empty() {
            return Ok(Self::default());
        }

        let mut finals = matches.iter().filter(|m| m.is_final());
        let final_id = match (finals.next(), finals.next()) {
            (Some(m), None) => m.id(),
            (None, _) => return Err(LeagueError::NoFinal),
            (Some(_), Some(_)) => return Err(LeagueError::MultipleFinals),
        };

        let (mut round, mut remaining): (Vec<_>, Vec<_>) =
            matches.into_iter().partition(|m| m.id() == final_id);
        let mut rounds: Vec<Vec<BracketMatch>> = Vec::new();

        loop {
            round.sort_by_key(|m| m.order);
            let ids: HashSet<MatchId> = round.iter().map(|m| m.id()).collect();
            rounds.push(round);

            let (children, rest): (Vec<_>, Vec<_>) = remaining
                .into_iter()
                .partition(|m| m.next_match_id.is_some_and(|id| ids.contains(&id)));
            remaining = rest;
            if children.is_empty() {
                break;
            }

            let mut fed: HashMap<MatchId, usize> = HashMap::new();
            for child in &children {
                if let Some(parent) = child.next_match_id {
                    let count = fed.entry(parent).or_insert(0);
                    *count += 1;
                    if *count > 2 {
                        return Err(LeagueError::NotATree(parent));
                    }
                }
            }
            round = children;
        }

        if let Some(stray) = remaining.first() {
            return Err(LeagueError::DisconnectedMatch(stray.id()));
        }

        rounds.reverse();
        Ok(Self {
            rounds,
            unplaced: Vec::new(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn first_round(&self) -> &[BracketMatch] {
        self.rounds.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.rounds.last().and_then(|round| round.first())
    }

    /// All matches, first round first.
    pub fn matches(&self) -> impl Iterator<Item = &BracketMatch> {
        self.rounds.iter().flatten()
    }

    pub fn get(&self, id: MatchId) -> Option<&BracketMatch> {
        self.matches().find(|m| m.id() == id)
    }

    /// Flatten into a list suitable for bulk insertion.
    pub fn into_matches(self) -> Vec<BracketMatch> {
        self.rounds.into_iter().flatten().collect()
    }

    /// First-round matches settled as byes (decided, with the roster moved on).
    pub fn bye_count(&self) -> usize {
        self.first_round()
            .iter()
            .filter(|m| {
                m.game.is_decided() && m.game.roster_a_id.is_none() && m.game.roster_b_id.is_none()
            })
            .count()
    }

    /// Winner of the final, once it has been played.
    pub fn champion(&self) -> Option<RosterId> {
        let final_match = self.final_match()?;
        final_match
            .game
            .winner()
            .and_then(|side| final_match.game.roster(side))
    }

    fn position(&self, id: MatchId) -> Option<(usize, usize)> {
        self.rounds.iter().enumerate().find_map(|(r, round)| {
            round
                .iter()
                .position(|m| m.id() == id)
                .map(|i| (r, i))
        })
    }

    /// Record a result for a bracket match and advance the winner into its parent.
    ///
    /// Recording again overwrites the previous result and the parent slot it filled,
    /// unless that would swap the roster of a parent that has already been played.
    /// Returns the winning roster.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        score_a: u32,
        score_b: u32,
    ) -> Result<RosterId, LeagueError> {
        let (round_idx, idx) = self
            .position(match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;

        let (a, b) = {
            let game = &self.rounds[round_idx][idx].game;
            match (game.roster_a_id, game.roster_b_id) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(LeagueError::MissingOpponent(match_id)),
            }
        };
        if score_a == score_b {
            return Err(LeagueError::UndecidedResult(match_id));
        }
        let winner = if score_a > score_b { a } else { b };

        // Locate the parent slot before touching anything.
        let parent_slot = match self.rounds[round_idx][idx].next_match_id {
            Some(parent_id) => {
                let parent_idx = self
                    .rounds
                    .get(round_idx + 1)
                    .and_then(|round| round.iter().position(|m| m.id() == parent_id))
                    .ok_or(LeagueError::DisconnectedMatch(match_id))?;
                let side = feeding_side(&self.rounds[round_idx], &self.rounds[round_idx][idx]);
                let parent = &self.rounds[round_idx + 1][parent_idx].game;
                if parent.is_decided() && parent.roster(side) != Some(winner) {
                    return Err(LeagueError::ParentAlreadyPlayed(parent_id));
                }
                Some((parent_idx, side))
            }
            None => None,
        };

        let game = &mut self.rounds[round_idx][idx].game;
        game.score_a = score_a;
        game.score_b = score_b;
        game.state = MatchState::Played;

        if let Some((parent_idx, side)) = parent_slot {
            self.rounds[round_idx + 1][parent_idx]
                .game
                .set_roster(side, Some(winner));
            log::debug!("Advanced roster {} from match {} on side {:?}", winner, match_id, side);
        }

        Ok(winner)
    }
}
