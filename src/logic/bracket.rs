//! Playoff bracket generation: tree construction, seeding, byes, rematch avoidance.

use crate::logic::seeding::{placement_order, round_count};
use crate::logic::standings::seed_rosters;
use crate::models::{
    feeding_side, Bracket, BracketConfig, BracketMatch, LeagueError, Match, MatchId, MatchState,
    Placement, Roster, RosterId,
};
use std::collections::VecDeque;

/// Generate a single-elimination bracket for `rosters`, seeded by their group-stage record.
///
/// 1. `rounds = ceil(log2(n))`; the first round has `2^rounds` roster slots and
///    `2^rounds - n` of them are byes.
/// 2. Build the tree from the final outward, numbering `order` as matches are created.
/// 3. Seed the rosters from `group_matches` and place them in standard seeding order.
///    The top seeds take the byes, which are decided immediately and advanced.
/// 4. Return rounds ordered first round -> final.
///
/// Fewer than two rosters give an empty bracket.
pub fn generate_bracket(
    rosters: &[Roster],
    group_matches: &[Match],
    config: &BracketConfig,
) -> Result<Bracket, LeagueError> {
    if rosters.len() < 2 {
        log::debug!("Not generating a bracket for {} roster(s)", rosters.len());
        return Ok(Bracket::default());
    }

    let rounds = round_count(rosters.len());
    let byes = (1usize << rounds) - rosters.len();

    let seeded = seed_rosters(rosters, group_matches)?;
    let mut tree = build_tree(rounds);
    let slot_order = placement_order(rounds - 1);

    let unplaced = match config.placement {
        Placement::Seeded => {
            place_seeded(&mut tree, &seeded, &slot_order, byes, config.bye_score);
            Vec::new()
        }
        Placement::AvoidRematches => place_avoiding_rematches(
            &mut tree,
            &seeded,
            group_matches,
            &slot_order,
            byes,
            config.bye_score,
        ),
    };

    tree.reverse();
    log::info!(
        "Generated bracket: {} rosters, {} rounds, {} byes ({:?})",
        rosters.len(),
        rounds,
        byes,
        config.placement
    );

    Ok(Bracket {
        rounds: tree,
        unplaced,
    })
}

/// Empty match tree, final first. Each match gets two children in the next round.
fn build_tree(rounds: u32) -> Vec<Vec<BracketMatch>> {
    let mut order = 0;
    let mut tree = vec![vec![BracketMatch::new(order, None)]];
    order += 1;

    for _ in 1..rounds {
        let parents: Vec<MatchId> = tree
            .last()
            .map(|round| round.iter().map(BracketMatch::id).collect())
            .unwrap_or_default();
        let mut round = Vec::with_capacity(parents.len() * 2);
        for parent in parents {
            for _ in 0..2 {
                round.push(BracketMatch::new(order, Some(parent)));
                order += 1;
            }
        }
        tree.push(round);
    }
    tree
}

/// Top half (one roster per first-round match) against the bottom half, best vs worst.
fn place_seeded(
    tree: &mut [Vec<BracketMatch>],
    seeded: &[Roster],
    slot_order: &[usize],
    byes: usize,
    bye_score: u32,
) {
    let (top, bottom) = seeded.split_at(slot_order.len().min(seeded.len()));
    let mut bottom: Vec<RosterId> = bottom.iter().map(|r| r.id).collect();

    for ((seed, &slot), roster) in slot_order.iter().enumerate().zip(top) {
        if seed < byes {
            award_bye(tree, slot, roster.id, bye_score);
        } else {
            fill_slot(tree, slot, roster.id, bottom.pop());
        }
    }
}

/// Best remaining seed against the worst remaining seed it has not met in the group stage.
/// Returns the rosters left without a slot.
fn place_avoiding_rematches(
    tree: &mut [Vec<BracketMatch>],
    seeded: &[Roster],
    group_matches: &[Match],
    slot_order: &[usize],
    byes: usize,
    bye_score: u32,
) -> Vec<RosterId> {
    let mut pool: VecDeque<RosterId> = seeded.iter().map(|r| r.id).collect();

    for (seed, &slot) in slot_order.iter().enumerate() {
        let Some(roster_a) = pool.pop_front() else {
            break;
        };
        if seed < byes {
            award_bye(tree, slot, roster_a, bye_score);
            continue;
        }

        let compatible = pool
            .iter()
            .rposition(|&candidate| !have_met(group_matches, roster_a, candidate));
        let roster_b = compatible.and_then(|i| pool.remove(i));
        if roster_b.is_none() {
            log::warn!(
                "No opponent left for roster {} that it has not already played; slot {} needs manual resolution",
                roster_a,
                slot
            );
        }
        fill_slot(tree, slot, roster_a, roster_b);
    }

    let unplaced: Vec<RosterId> = pool.into_iter().collect();
    if !unplaced.is_empty() {
        log::warn!("{} roster(s) could not be placed in the bracket", unplaced.len());
    }
    unplaced
}

fn have_met(group_matches: &[Match], a: RosterId, b: RosterId) -> bool {
    group_matches.iter().any(|m| m.is_between(a, b))
}

/// Put rosters into a first-round match. The tree is still final-first here.
fn fill_slot(tree: &mut [Vec<BracketMatch>], slot: usize, a: RosterId, b: Option<RosterId>) {
    if let Some(m) = tree.last_mut().and_then(|round| round.get_mut(slot)) {
        m.game.roster_a_id = Some(a);
        m.game.roster_b_id = b;
    }
}

/// Decide a first-round match as a bye and move `roster` into the parent; the bye match
/// itself is left without rosters.
fn award_bye(tree: &mut [Vec<BracketMatch>], slot: usize, roster: RosterId, bye_score: u32) {
    let Some((first_round, later_rounds)) = tree.split_last_mut() else {
        return;
    };
    let Some(bye) = first_round.get(slot) else {
        return;
    };
    let side = feeding_side(first_round, bye);
    let parent_id = bye.next_match_id;

    let bye = &mut first_round[slot];
    bye.game.roster_a_id = None;
    bye.game.roster_b_id = None;
    bye.game.score_a = bye_score;
    bye.game.score_b = 0;
    bye.game.state = MatchState::Played;

    let parent = later_rounds
        .last_mut()
        .and_then(|round| round.iter_mut().find(|m| Some(m.id()) == parent_id));
    if let Some(parent) = parent {
        parent.game.set_roster(side, Some(roster));
    }
    log::debug!("Roster {} advances on a bye ({:?} side of next match)", roster, side);
}
