//! Fairness check on a slot-aligned pair of candidate sequences.

use crate::logic::pairs::TeammatePair;
use crate::logic::slot::Slot;
use crate::models::{Player, Team, MIN_ROSTER_SIZE};
use std::collections::HashMap;

/// How often one slot may meet the same opponent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FairnessRule {
    /// Limit for the most-met opponent.
    pub most_met: usize,
    /// Limit for every other opponent.
    pub others: usize,
}

impl FairnessRule {
    /// Singles: nobody meets an opponent twice, except when both rosters are
    /// minimal, where one opponent (and only one) may be met twice.
    pub fn singles(minimum_teams: bool) -> Self {
        Self {
            most_met: if minimum_teams { 2 } else { 1 },
            others: 1,
        }
    }

    /// Doubles: no pair meets the same opposing pair twice.
    pub fn doubles() -> Self {
        Self {
            most_met: 1,
            others: 1,
        }
    }

    fn allows(&self, counts: &[usize]) -> bool {
        counts.iter().enumerate().all(|(rank, &times)| {
            let limit = if rank == 0 { self.most_met } else { self.others };
            times <= limit
        })
    }
}

/// True if both rosters have exactly the minimum size.
pub fn is_minimum_teams(team_a: &Team, team_b: &Team) -> bool {
    team_a.size() == MIN_ROSTER_SIZE && team_b.size() == MIN_ROSTER_SIZE
}

/// For every slot identity on either side, how often it met each opponent,
/// sorted descending by times met.
pub fn opponent_tallies<T: Slot>(team_a: &[T], team_b: &[T]) -> Vec<Vec<usize>> {
    let mut seen_a: HashMap<T::Key, HashMap<T::Key, usize>> = HashMap::new();
    let mut seen_b: HashMap<T::Key, HashMap<T::Key, usize>> = HashMap::new();
    for (a, b) in team_a.iter().zip(team_b) {
        *seen_a.entry(a.key()).or_default().entry(b.key()).or_insert(0) += 1;
        *seen_b.entry(b.key()).or_default().entry(a.key()).or_insert(0) += 1;
    }

    seen_a
        .into_values()
        .chain(seen_b.into_values())
        .map(|opponents| {
            let mut counts: Vec<usize> = opponents.into_values().collect();
            counts.sort_by(|x, y| y.cmp(x));
            counts
        })
        .collect()
}

/// Check an arrangement against `rule`. Sequences of different length never pass.
pub fn is_fair<T: Slot>(team_a: &[T], team_b: &[T], rule: FairnessRule) -> bool {
    if team_a.len() != team_b.len() {
        return false;
    }
    opponent_tallies(team_a, team_b)
        .iter()
        .all(|counts| rule.allows(counts))
}

/// Singles arrangement check.
pub fn is_valid_singles(team_a: &[Player], team_b: &[Player], minimum_teams: bool) -> bool {
    is_fair(team_a, team_b, FairnessRule::singles(minimum_teams))
}

/// Doubles arrangement check.
pub fn is_valid_doubles(team_a: &[TeammatePair], team_b: &[TeammatePair]) -> bool {
    is_fair(team_a, team_b, FairnessRule::doubles())
}
