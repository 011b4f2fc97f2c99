//! What a team puts into one slot of a candidate sequence.

use crate::models::{Player, PlayerId};
use std::hash::Hash;

/// One team's entry in a slot: a single player (singles) or a teammate pair (doubles).
pub trait Slot: Clone {
    /// Identity used when counting repeated opponents.
    type Key: Copy + Eq + Hash + Ord + std::fmt::Debug;

    fn key(&self) -> Self::Key;

    /// Players this slot contributes to the game.
    fn members(&self) -> Vec<Player>;
}

impl Slot for Player {
    type Key = PlayerId;

    fn key(&self) -> PlayerId {
        self.id
    }

    fn members(&self) -> Vec<Player> {
        vec![self.clone()]
    }
}
