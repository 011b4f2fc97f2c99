//! Turn accepted slot-aligned sequences into a Matchup.

use crate::logic::slot::Slot;
use crate::models::{Game, Matchup, Team};

/// One game per slot: slot `i` of `seq_a` against slot `i` of `seq_b`.
///
/// Players inside each game are put in canonical order (team A then team B,
/// each side sorted by id). Extra slots on the longer side are dropped.
pub fn assemble_matchup<T: Slot>(team_a: &Team, team_b: &Team, seq_a: &[T], seq_b: &[T]) -> Matchup {
    let games = seq_a
        .iter()
        .zip(seq_b)
        .map(|(a, b)| Game::new(a.members(), b.members()))
        .collect();
    Matchup::new(team_a.clone(), team_b.clone(), games)
}
