//! Rejection sampling: shuffle both candidate sequences until the arrangement is fair.

use rand::seq::SliceRandom;
use rand::Rng;

/// Hard cap on shuffles per matchup.
pub const MAX_ATTEMPTS: usize = 1000;

/// Result of sampling. When `accepted` is false the sequences are the last
/// shuffle tried and `attempts` equals the cap.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sampled<T> {
    pub team_a: Vec<T>,
    pub team_b: Vec<T>,
    pub attempts: usize,
    pub accepted: bool,
}

/// Shuffle both sequences independently until `is_valid` accepts them, up to [`MAX_ATTEMPTS`].
pub fn sample_pairings<T, R, F>(team_a: Vec<T>, team_b: Vec<T>, rng: &mut R, is_valid: F) -> Sampled<T>
where
    R: Rng + ?Sized,
    F: FnMut(&[T], &[T]) -> bool,
{
    sample_pairings_with_limit(team_a, team_b, rng, MAX_ATTEMPTS, is_valid)
}

/// Same as [`sample_pairings`] with a custom cap (at least one shuffle is always made).
pub fn sample_pairings_with_limit<T, R, F>(
    mut team_a: Vec<T>,
    mut team_b: Vec<T>,
    rng: &mut R,
    max_attempts: usize,
    mut is_valid: F,
) -> Sampled<T>
where
    R: Rng + ?Sized,
    F: FnMut(&[T], &[T]) -> bool,
{
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;
    loop {
        attempts += 1;
        team_a.shuffle(rng);
        team_b.shuffle(rng);
        let accepted = is_valid(&team_a, &team_b);
        if accepted || attempts >= max_attempts {
            return Sampled {
                team_a,
                team_b,
                attempts,
                accepted,
            };
        }
    }
}
