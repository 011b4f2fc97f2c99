//! Doubles: choose the teammate pairs a roster fields across its slate.

use crate::logic::slot::Slot;
use crate::models::{MatchupError, Player, PlayerId, Team, DOUBLES_SLATE_LEN};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Two teammates playing together. Kept in generation order, but treated as
/// unordered when counting opponents.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeammatePair {
    pub first: Player,
    pub second: Player,
}

impl TeammatePair {
    pub fn new(first: Player, second: Player) -> Self {
        Self { first, second }
    }
}

impl Slot for TeammatePair {
    type Key = (PlayerId, PlayerId);

    fn key(&self) -> (PlayerId, PlayerId) {
        let (a, b) = (self.first.id, self.second.id);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    fn members(&self) -> Vec<Player> {
        vec![self.first.clone(), self.second.clone()]
    }
}

/// How a roster of a given size fills the doubles slate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PairPlan {
    /// 3 players: all six ordered pairs, so each partnership plays twice.
    AllPermutations,
    /// Greedy pick under a per-player game cap, then up to `extra_pairings`
    /// pairs that may take their players one game past the cap.
    Capped { cap: usize, extra_pairings: usize },
}

fn pair_plan(roster_size: usize) -> Option<PairPlan> {
    match roster_size {
        3 => Some(PairPlan::AllPermutations),
        4 => Some(PairPlan::Capped {
            cap: 3,
            extra_pairings: 0,
        }),
        // 5 players x 2 games leaves two seats of the 12 open: one extra pairing fills them.
        5 => Some(PairPlan::Capped {
            cap: 2,
            extra_pairings: 1,
        }),
        6 => Some(PairPlan::Capped {
            cap: 2,
            extra_pairings: 0,
        }),
        _ => None,
    }
}

/// All ordered 2-permutations of the roster, in roster order.
pub fn ordered_pairs(roster: &[Player]) -> Vec<TeammatePair> {
    let mut pairs = Vec::with_capacity(roster.len() * roster.len().saturating_sub(1));
    for (i, first) in roster.iter().enumerate() {
        for (j, second) in roster.iter().enumerate() {
            if i != j {
                pairs.push(TeammatePair::new(first.clone(), second.clone()));
            }
        }
    }
    pairs
}

/// Pick the six teammate pairs `team` fields in a doubles matchup.
///
/// Returns `QuotaUnsatisfied` rather than a short list if the quota cannot fill the slate.
pub fn generate_pairs(team: &Team) -> Result<Vec<TeammatePair>, MatchupError> {
    let plan = pair_plan(team.size()).ok_or_else(|| MatchupError::UnsupportedRosterSize {
        team: team.name.clone(),
        size: team.size(),
    })?;
    match plan {
        PairPlan::AllPermutations => check_filled(team, ordered_pairs(&team.roster)),
        PairPlan::Capped {
            cap,
            extra_pairings,
        } => generate_pairs_with_quota(team, cap, extra_pairings),
    }
}

/// Greedy pick over the ordered pairs with an explicit per-player `cap`,
/// plus up to `extra_pairings` pairs that may go one game past it.
///
/// The roster size is not checked here; an infeasible quota yields `QuotaUnsatisfied`.
pub fn generate_pairs_with_quota(
    team: &Team,
    cap: usize,
    extra_pairings: usize,
) -> Result<Vec<TeammatePair>, MatchupError> {
    let candidates = ordered_pairs(&team.roster);
    let selected = select_under_quota(&candidates, cap, extra_pairings, DOUBLES_SLATE_LEN);
    check_filled(team, selected)
}

fn check_filled(team: &Team, selected: Vec<TeammatePair>) -> Result<Vec<TeammatePair>, MatchupError> {
    if selected.len() != DOUBLES_SLATE_LEN {
        log::warn!(
            "{}: quota yields {} of {} teammate pairs",
            team.name,
            selected.len(),
            DOUBLES_SLATE_LEN
        );
        return Err(MatchupError::QuotaUnsatisfied {
            team: team.name.clone(),
            selected: selected.len(),
            required: DOUBLES_SLATE_LEN,
        });
    }
    Ok(selected)
}

fn select_under_quota(
    candidates: &[TeammatePair],
    cap: usize,
    extra_pairings: usize,
    required: usize,
) -> Vec<TeammatePair> {
    let mut games: HashMap<PlayerId, usize> = HashMap::new();
    let mut selected: Vec<TeammatePair> = Vec::with_capacity(required);

    for pair in candidates {
        if selected.len() == required {
            return selected;
        }
        let first = games.get(&pair.first.id).copied().unwrap_or(0);
        let second = games.get(&pair.second.id).copied().unwrap_or(0);
        if first < cap && second < cap {
            *games.entry(pair.first.id).or_insert(0) += 1;
            *games.entry(pair.second.id).or_insert(0) += 1;
            selected.push(pair.clone());
        }
    }

    // Extra pairings: a partnership not used yet, nobody past cap + 1.
    let mut extras_left = extra_pairings;
    for pair in candidates {
        if selected.len() == required || extras_left == 0 {
            break;
        }
        if selected.iter().any(|s| s.key() == pair.key()) {
            continue;
        }
        let first = games.get(&pair.first.id).copied().unwrap_or(0);
        let second = games.get(&pair.second.id).copied().unwrap_or(0);
        if first <= cap && second <= cap {
            *games.entry(pair.first.id).or_insert(0) += 1;
            *games.entry(pair.second.id).or_insert(0) += 1;
            selected.push(pair.clone());
            extras_left -= 1;
        }
    }

    selected
}
