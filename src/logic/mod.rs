//! League business logic: standings, seeding order, brackets, divisions.

mod bracket;
mod division;
mod seeding;
mod standings;

pub use bracket::generate_bracket;
pub use division::{aggregate_groups, generate_division_bracket, group_standings};
pub use seeding::{bracket_layout, placement_order, round_count};
pub use standings::{compute_standings, seed_lookup, seed_rosters};
