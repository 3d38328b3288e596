//! Group: a round-robin pool of rosters inside a division.

use crate::models::game::Match;
use crate::models::roster::Roster;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub rosters: Vec<Roster>,
    /// Group-stage matches (played or scheduled).
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rosters: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Create a group with initial rosters and no matches.
    pub fn with_rosters(name: impl Into<String>, rosters: Vec<Roster>) -> Self {
        Self {
            rosters,
            ..Self::new(name)
        }
    }
}
