//! Data structures for the league: rosters, matches, groups, standings, brackets.

mod bracket;
mod config;
mod game;
mod group;
mod roster;
mod standings;

pub(crate) use bracket::feeding_side;
pub use bracket::{Bracket, LeagueError};
pub use config::{BracketConfig, Placement};
pub use game::{BracketMatch, Match, MatchId, MatchState, Side};
pub use group::{Group, GroupId};
pub use roster::{Roster, RosterId};
pub use standings::{StandingsRow, TableScore};
