//! League playoffs: standings with head-to-head tiebreakers and single-elimination
//! bracket seeding.

pub mod logic;
pub mod models;

pub use logic::{
    aggregate_groups, bracket_layout, compute_standings, generate_bracket,
    generate_division_bracket, group_standings, placement_order, round_count, seed_lookup,
    seed_rosters,
};
pub use models::{
    Bracket, BracketConfig, BracketMatch, Group, GroupId, LeagueError, Match, MatchId, MatchState,
    Placement, Roster, RosterId, Side, StandingsRow, TableScore,
};
