//! Player data structure.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Stable identifier for a player (the game service's numeric profile id).
pub type PlayerId = u64;

/// A player on a team roster.
///
/// Equality and ordering use `id` first and the team name second, so sorting
/// a mixed set of players is deterministic. The display name plays no part.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Name of the team this player is rostered on.
    pub team: String,
}

impl Player {
    pub fn new(name: impl Into<String>, id: PlayerId, team: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            team: team.into(),
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.team == other.team
    }
}

impl Eq for Player {}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.team.cmp(&other.team))
    }
}
