//! Matchup generation: roster expansion, teammate pairs, fairness check, sampling, assembly.

mod assemble;
mod expand;
mod generate;
mod pairs;
mod sample;
mod slot;
mod validate;

pub use assemble::assemble_matchup;
pub use expand::expand_roster;
pub use generate::{generate_matchup, generate_round};
pub use pairs::{generate_pairs, generate_pairs_with_quota, ordered_pairs, TeammatePair};
pub use sample::{sample_pairings, sample_pairings_with_limit, Sampled, MAX_ATTEMPTS};
pub use slot::Slot;
pub use validate::{
    is_fair, is_minimum_teams, is_valid_doubles, is_valid_singles, opponent_tallies, FairnessRule,
};
