//! Standard single-elimination seeding order, on plain integers.

/// Number of rounds needed for `rosters` entrants: `ceil(log2(rosters))`, 0 below two.
pub fn round_count(rosters: usize) -> u32 {
    if rosters < 2 {
        return 0;
    }
    rosters.next_power_of_two().trailing_zeros()
}

/// Bracket layout after `expansions` doubling steps: entry `i` is the seed in slot `i`.
///
/// Starts from `[0]`; each step replaces every `x` with `x, (2L - 1) - x` where `L` is
/// the current length. Slots `2k` and `2k + 1` meet each other first, and seeds 0 and 1
/// land in opposite halves, recursively.
pub fn bracket_layout(expansions: u32) -> Vec<usize> {
    let mut layout = Vec::with_capacity(1 << expansions);
    layout.push(0);
    for _ in 0..expansions {
        let mirror = layout.len() * 2 - 1;
        layout = layout.iter().flat_map(|&x| [x, mirror - x]).collect();
    }
    layout
}

/// Inverse of [`bracket_layout`]: entry `s` is the slot that seed `s` occupies.
pub fn placement_order(expansions: u32) -> Vec<usize> {
    let layout = bracket_layout(expansions);
    let mut order = vec![0; layout.len()];
    for (slot, &seed) in layout.iter().enumerate() {
        order[seed] = slot;
    }
    order
}
