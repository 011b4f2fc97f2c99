//! Matchup generation for one pair of teams, and for a whole round.

use crate::logic::assemble::assemble_matchup;
use crate::logic::expand::expand_roster;
use crate::logic::pairs::generate_pairs;
use crate::logic::sample::{sample_pairings, Sampled};
use crate::logic::slot::Slot;
use crate::logic::validate::{is_minimum_teams, is_valid_doubles, is_valid_singles};
use crate::models::{GameFormat, GeneratedMatchup, MatchupError, Player, Round, Team};
use rand::Rng;

/// Generate the slate for `team_a` vs `team_b`.
///
/// 1. Check both rosters have 3 to 6 players.
/// 2. Build each side's candidate sequence: cyclic expansion to 12 players
///    (singles) or 6 teammate pairs (doubles).
/// 3. Shuffle both until the arrangement is fair, up to the attempt cap.
/// 4. Zip the sequences into games.
///
/// Hitting the attempt cap is not an error: the last shuffle is returned with
/// `accepted == false` and a warning is logged.
pub fn generate_matchup<R: Rng + ?Sized>(
    team_a: &Team,
    team_b: &Team,
    format: GameFormat,
    rng: &mut R,
) -> Result<GeneratedMatchup, MatchupError> {
    for team in [team_a, team_b] {
        if !team.has_supported_size() {
            return Err(MatchupError::UnsupportedRosterSize {
                team: team.name.clone(),
                size: team.size(),
            });
        }
    }

    let generated = match format {
        GameFormat::Singles => {
            let seq_a = expand_roster(&team_a.roster, format.slate_len());
            let seq_b = expand_roster(&team_b.roster, format.slate_len());
            let minimum_teams = is_minimum_teams(team_a, team_b);
            let sampled = sample_pairings(seq_a, seq_b, rng, |a, b| {
                is_valid_singles(a, b, minimum_teams)
            });
            finish(team_a, team_b, sampled)
        }
        GameFormat::Doubles => {
            let seq_a = generate_pairs(team_a)?;
            let seq_b = generate_pairs(team_b)?;
            let sampled = sample_pairings(seq_a, seq_b, rng, is_valid_doubles);
            finish(team_a, team_b, sampled)
        }
    };

    if generated.accepted {
        log::info!(
            "{} vs. {} ({} attempts)",
            team_a.name,
            team_b.name,
            generated.attempts
        );
    } else {
        log::warn!(
            "Reached {} attempts without a fair slate for {} vs. {}; keeping the last shuffle",
            generated.attempts,
            team_a.name,
            team_b.name
        );
    }
    for game in &generated.matchup.games {
        log::debug!("\t{} vs. {}", names(game.side_a()), names(game.side_b()));
    }

    Ok(generated)
}

/// Generate matchups for consecutive teams: (0, 1), (2, 3), ...
///
/// A matchup that cannot be built is recorded in `failures` and the round
/// continues. A trailing team without an opponent is recorded as `UnpairedTeam`.
pub fn generate_round<R: Rng + ?Sized>(teams: &[Team], format: GameFormat, rng: &mut R) -> Round {
    let mut round = Round::new(format);
    log::info!("Generating {} matchups for {} teams", format, teams.len());

    for chunk in teams.chunks(2) {
        let result = match chunk {
            [team_a, team_b] => generate_matchup(team_a, team_b, format, rng),
            [lone] => Err(MatchupError::UnpairedTeam {
                team: lone.name.clone(),
            }),
            _ => continue,
        };
        match result {
            Ok(generated) => round.matchups.push(generated),
            Err(e) => {
                log::error!("Skipping matchup: {}", e);
                round.failures.push(e);
            }
        }
    }

    let exhausted = round.exhausted().count();
    if exhausted > 0 {
        log::warn!("{} matchup(s) need a manual check (attempt cap reached)", exhausted);
    }
    round
}

fn finish<T: Slot>(team_a: &Team, team_b: &Team, sampled: Sampled<T>) -> GeneratedMatchup {
    GeneratedMatchup {
        matchup: assemble_matchup(team_a, team_b, &sampled.team_a, &sampled.team_b),
        attempts: sampled.attempts,
        accepted: sampled.accepted,
    }
}

fn names(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(" & ")
}
