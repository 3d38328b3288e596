//! Roster: one team entry competing in a group or division.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a roster (used in matches and lookups).
pub type RosterId = Uuid;

/// A team entry. Only `id` and `withdrawn` are read by standings and seeding.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub id: RosterId,
    pub name: String,
    /// Withdrawn rosters are placed at the bottom of the table regardless of record.
    #[serde(default)]
    pub withdrawn: bool,
}

impl Roster {
    /// Create a new roster with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            withdrawn: false,
        }
    }

    /// Mark the roster as withdrawn from the competition.
    pub fn withdraw(&mut self) {
        self.withdrawn = true;
    }
}
