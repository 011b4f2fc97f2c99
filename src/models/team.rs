//! Team and its ordered roster.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Smallest roster the generator accepts.
pub const MIN_ROSTER_SIZE: usize = 3;
/// Largest roster the generator accepts.
pub const MAX_ROSTER_SIZE: usize = 6;

/// A competing team. Roster order matters: it drives cyclic expansion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub roster: Vec<Player>,
}

impl Team {
    /// Create a team with an empty roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Vec::new(),
        }
    }

    /// Create a team from `(display name, id)` entries, in roster order.
    pub fn with_players<I, S>(name: impl Into<String>, players: I) -> Self
    where
        I: IntoIterator<Item = (S, PlayerId)>,
        S: Into<String>,
    {
        let mut team = Self::new(name);
        for (player_name, id) in players {
            team.add_player(player_name, id);
        }
        team
    }

    /// Append a player to the end of the roster.
    pub fn add_player(&mut self, name: impl Into<String>, id: PlayerId) {
        let player = Player::new(name, id, self.name.clone());
        self.roster.push(player);
    }

    pub fn size(&self) -> usize {
        self.roster.len()
    }

    /// True if the roster size is within the supported 3..=6 range.
    pub fn has_supported_size(&self) -> bool {
        (MIN_ROSTER_SIZE..=MAX_ROSTER_SIZE).contains(&self.size())
    }

    /// Starting score for the round: 0 for a full roster, one point down per
    /// missing player (a 3-player team starts at -3).
    pub fn handicap(&self) -> i32 {
        self.size() as i32 - MAX_ROSTER_SIZE as i32
    }
}
