//! Divisions made of several groups: pooled rosters and matches.

use crate::logic::bracket::generate_bracket;
use crate::logic::standings::compute_standings;
use crate::models::{Bracket, BracketConfig, Group, LeagueError, Match, Roster, StandingsRow};

/// Merge all groups' rosters and matches into one division-wide pool.
pub fn aggregate_groups(groups: &[Group]) -> (Vec<Roster>, Vec<Match>) {
    let rosters = groups.iter().flat_map(|g| g.rosters.iter().cloned()).collect();
    let matches = groups.iter().flat_map(|g| g.matches.iter().cloned()).collect();
    (rosters, matches)
}

/// Standings table for a single group.
pub fn group_standings(group: &Group) -> Result<Vec<StandingsRow>, LeagueError> {
    compute_standings(&group.rosters, &group.matches)
}

/// Playoff bracket for a division, seeded across all of its groups.
pub fn generate_division_bracket(
    groups: &[Group],
    config: &BracketConfig,
) -> Result<Bracket, LeagueError> {
    let (rosters, matches) = aggregate_groups(groups);
    generate_bracket(&rosters, &matches, config)
}
