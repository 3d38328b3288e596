//! Standings: map tallies, primary ordering, and the head-to-head tiebreak pass.

use crate::models::{LeagueError, Match, Roster, RosterId, StandingsRow, TableScore};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Running score for one roster plus the opponent sets used only for tiebreaking.
struct Tally {
    roster_id: RosterId,
    withdrawn: bool,
    score: TableScore,
    won_against: HashSet<RosterId>,
    lost_against: HashSet<RosterId>,
}

impl Tally {
    fn new(roster: &Roster) -> Self {
        Self {
            roster_id: roster.id,
            withdrawn: roster.withdrawn,
            score: TableScore::default(),
            won_against: HashSet::new(),
            lost_against: HashSet::new(),
        }
    }

    fn add_maps(&mut self, won: u32, lost: u32, drawn: u32) {
        let score = &mut self.score;
        score.map_wins = score.map_wins.saturating_add(u64::from(won));
        score.map_losses = score.map_losses.saturating_add(u64::from(lost));
        score.map_draws = score.map_draws.saturating_add(u64::from(drawn));
        score.matches_played = score.matches_played.saturating_add(1);
    }
}

/// Compute the standings table, best seed first.
///
/// 1. Tally every played match whose rosters are both in `rosters`; others are skipped.
/// 2. Sort: withdrawn last, then most map wins, fewest map losses, most opponents beaten.
///    The sort is stable, so full ties keep input order.
/// 3. One forward pass over adjacent pairs still tied, settled head-to-head.
///
/// Errors only if a roster id appears twice.
pub fn compute_standings(
    rosters: &[Roster],
    matches: &[Match],
) -> Result<Vec<StandingsRow>, LeagueError> {
    let mut index: HashMap<RosterId, usize> = HashMap::with_capacity(rosters.len());
    let mut tallies: Vec<Tally> = Vec::with_capacity(rosters.len());
    for roster in rosters {
        if index.insert(roster.id, tallies.len()).is_some() {
            return Err(LeagueError::DuplicateRoster(roster.id));
        }
        tallies.push(Tally::new(roster));
    }

    for m in matches {
        apply_match(&mut tallies, &index, m);
    }

    tallies.sort_by(compare_seed);
    break_ties(&mut tallies);

    Ok(tallies
        .into_iter()
        .map(|t| StandingsRow {
            roster_id: t.roster_id,
            score: t.score,
        })
        .collect())
}

fn apply_match(tallies: &mut [Tally], index: &HashMap<RosterId, usize>, m: &Match) {
    if !m.is_decided() {
        return;
    }
    let (Some(a_id), Some(b_id)) = (m.roster_a_id, m.roster_b_id) else {
        return;
    };
    let (Some(&a), Some(&b)) = (index.get(&a_id), index.get(&b_id)) else {
        log::warn!("Skipping match {}: roster not found in this pool", m.id);
        return;
    };
    if a == b {
        log::warn!("Skipping match {}: roster {} is on both sides", m.id, a_id);
        return;
    }

    match m.score_a.cmp(&m.score_b) {
        Ordering::Greater => {
            tallies[a].won_against.insert(b_id);
            tallies[b].lost_against.insert(a_id);
        }
        Ordering::Less => {
            tallies[b].won_against.insert(a_id);
            tallies[a].lost_against.insert(b_id);
        }
        Ordering::Equal => {}
    }

    tallies[a].add_maps(m.score_a, m.score_b, m.draws);
    tallies[b].add_maps(m.score_b, m.score_a, m.draws);
}

/// Less means `a` is seeded higher than `b`.
fn compare_seed(a: &Tally, b: &Tally) -> Ordering {
    a.withdrawn
        .cmp(&b.withdrawn)
        .then_with(|| b.score.map_wins.cmp(&a.score.map_wins))
        .then_with(|| a.score.map_losses.cmp(&b.score.map_losses))
        .then_with(|| b.won_against.len().cmp(&a.won_against.len()))
}

/// Index of the highest-seeded opponent beaten and of the lowest-seeded opponent lost to.
fn best_win_and_worst_loss(tally: &Tally, sorted: &[Tally]) -> (Option<usize>, Option<usize>) {
    let best_win = sorted
        .iter()
        .position(|t| tally.won_against.contains(&t.roster_id));
    let worst_loss = sorted
        .iter()
        .rposition(|t| tally.lost_against.contains(&t.roster_id));
    (best_win, worst_loss)
}

/// Greater means the upper roster of a tied pair should drop below the lower one.
fn head_to_head(
    upper: (Option<usize>, Option<usize>),
    lower: (Option<usize>, Option<usize>),
) -> Ordering {
    let by_best_win = match (upper.0, lower.0) {
        (Some(u), Some(l)) => u.cmp(&l),
        _ => Ordering::Equal,
    };
    let by_worst_loss = match (upper.1, lower.1) {
        (Some(u), Some(l)) => l.cmp(&u),
        _ => Ordering::Equal,
    };
    by_best_win.then(by_worst_loss)
}

/// Single pass, top to bottom; earlier pairs are not revisited after a swap.
fn break_ties(sorted: &mut [Tally]) {
    for i in 0..sorted.len().saturating_sub(1) {
        if compare_seed(&sorted[i], &sorted[i + 1]) != Ordering::Equal {
            continue;
        }
        let upper = best_win_and_worst_loss(&sorted[i], sorted);
        let lower = best_win_and_worst_loss(&sorted[i + 1], sorted);
        if head_to_head(upper, lower) == Ordering::Greater {
            log::debug!(
                "Tiebreak: {} moves above {} on head-to-head",
                sorted[i + 1].roster_id,
                sorted[i].roster_id
            );
            sorted.swap(i, i + 1);
        }
    }
}

/// Rosters reordered by seed (a new list; the input is untouched).
pub fn seed_rosters(rosters: &[Roster], matches: &[Match]) -> Result<Vec<Roster>, LeagueError> {
    let standings = compute_standings(rosters, matches)?;
    let by_id: HashMap<RosterId, &Roster> = rosters.iter().map(|r| (r.id, r)).collect();
    Ok(standings
        .iter()
        .filter_map(|row| by_id.get(&row.roster_id).map(|r| (*r).clone()))
        .collect())
}

/// Roster id -> seed (0 = best) for a standings table.
pub fn seed_lookup(standings: &[StandingsRow]) -> HashMap<RosterId, usize> {
    standings
        .iter()
        .enumerate()
        .map(|(seed, row)| (row.roster_id, seed))
        .collect()
}
