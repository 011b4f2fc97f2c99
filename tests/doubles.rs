//! Integration tests for 2v2 matchups: teammate pair quotas, fairness check, assembly.

use nations_cup_matchups::logic::{generate_pairs_with_quota, ordered_pairs};
use nations_cup_matchups::{
    generate_matchup, generate_pairs, generate_round, is_valid_doubles, GameFormat, MatchupError,
    PlayerId, Slot, Team, TeammatePair,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn team(name: &str, first_id: PlayerId, size: usize) -> Team {
    Team::with_players(
        name,
        (0..size as u64).map(|i| (format!("{name}{i}"), first_id + i)),
    )
}

fn games_per_player(pairs: &[TeammatePair]) -> HashMap<PlayerId, usize> {
    let mut games = HashMap::new();
    for pair in pairs {
        *games.entry(pair.first.id).or_insert(0) += 1;
        *games.entry(pair.second.id).or_insert(0) += 1;
    }
    games
}

fn partnerships(pairs: &[TeammatePair]) -> HashMap<(PlayerId, PlayerId), usize> {
    let mut seen = HashMap::new();
    for pair in pairs {
        *seen.entry(pair.key()).or_insert(0) += 1;
    }
    seen
}

#[test]
fn ordered_pairs_are_all_two_permutations() {
    let t = team("T", 1, 4);
    let pairs = ordered_pairs(&t.roster);
    assert_eq!(pairs.len(), 12);
    assert_eq!((pairs[0].first.id, pairs[0].second.id), (1, 2));
    assert_eq!((pairs[3].first.id, pairs[3].second.id), (2, 1));
}

#[test]
fn three_player_roster_repeats_every_partnership_twice() {
    let pairs = generate_pairs(&team("T", 1, 3)).unwrap();
    assert_eq!(pairs.len(), 6);
    let seen = partnerships(&pairs);
    assert_eq!(seen.len(), 3);
    assert!(seen.values().all(|&n| n == 2));
    assert!(games_per_player(&pairs).values().all(|&n| n == 4));
}

#[test]
fn four_player_roster_respects_quota() {
    let pairs = generate_pairs(&team("T", 1, 4)).unwrap();
    assert_eq!(pairs.len(), 6);
    let games = games_per_player(&pairs);
    assert_eq!(games.len(), 4);
    assert!(games.values().all(|&n| (2..=3).contains(&n)));
    // Every partnership once.
    assert_eq!(partnerships(&pairs).len(), 6);
}

#[test]
fn five_player_roster_uses_one_extra_pairing() {
    let pairs = generate_pairs(&team("T", 1, 5)).unwrap();
    assert_eq!(pairs.len(), 6);
    let games = games_per_player(&pairs);
    assert_eq!(games.len(), 5);
    assert_eq!(games.values().filter(|&&n| n == 3).count(), 2);
    assert_eq!(games.values().filter(|&&n| n == 2).count(), 3);
}

#[test]
fn six_player_roster_gives_everyone_two_games() {
    let pairs = generate_pairs(&team("T", 1, 6)).unwrap();
    assert_eq!(pairs.len(), 6);
    let games = games_per_player(&pairs);
    assert_eq!(games.len(), 6);
    assert!(games.values().all(|&n| n == 2));
}

#[test]
fn unsupported_sizes_are_construction_errors() {
    assert_eq!(
        generate_pairs(&team("Duo", 1, 2)),
        Err(MatchupError::UnsupportedRosterSize {
            team: "Duo".to_string(),
            size: 2
        })
    );
    assert!(generate_pairs(&team("Crowd", 1, 7)).is_err());
}

#[test]
fn infeasible_quota_is_an_error_not_a_short_list() {
    // Cap 1 on four players: a0+a1, then a2+a3, and every other pair is blocked.
    let four = team("Quad", 1, 4);
    assert_eq!(
        generate_pairs_with_quota(&four, 1, 0),
        Err(MatchupError::QuotaUnsatisfied {
            team: "Quad".to_string(),
            selected: 2,
            required: 6,
        })
    );

    // Five players capped at 2 without the extra pairing fill only 10 of 12 seats.
    let five = team("Five", 1, 5);
    assert!(matches!(
        generate_pairs_with_quota(&five, 2, 0),
        Err(MatchupError::QuotaUnsatisfied { selected: 5, .. })
    ));

    // The table's own quotas go through the same path.
    assert_eq!(generate_pairs_with_quota(&four, 3, 0), generate_pairs(&four));
    assert_eq!(generate_pairs_with_quota(&five, 2, 1), generate_pairs(&five));
}

#[test]
fn validator_rejects_repeated_opposing_pair() {
    // Unshuffled 3v3: {1,2} meets {11,12} in slots 0 and 2.
    let a = generate_pairs(&team("A", 1, 3)).unwrap();
    let b = generate_pairs(&team("B", 11, 3)).unwrap();
    assert!(!is_valid_doubles(&a, &b));
}

#[test]
fn validator_accepts_distinct_pairings() {
    let a = generate_pairs(&team("A", 1, 4)).unwrap();
    let b = generate_pairs(&team("B", 11, 4)).unwrap();
    assert!(is_valid_doubles(&a, &b));
}

#[test]
fn doubles_matchup_has_six_games_of_four_players() {
    let (a, b) = (team("A", 1, 5), team("B", 11, 3));
    let mut rng = StdRng::seed_from_u64(5);
    let generated = generate_matchup(&a, &b, GameFormat::Doubles, &mut rng).unwrap();
    assert!(generated.accepted);

    let m = &generated.matchup;
    assert_eq!(m.games.len(), 6);
    for g in &m.games {
        assert_eq!(g.players.len(), 4);
        assert!(g.side_a().iter().all(|p| p.team == "A"));
        assert!(g.side_b().iter().all(|p| p.team == "B"));
        let ids = g.player_ids();
        assert!(ids[0] < ids[1], "side A sorted");
        assert!(ids[2] < ids[3], "side B sorted");
    }
}

#[test]
fn doubles_round_reports_each_matchup() {
    let teams = vec![team("A", 1, 6), team("B", 11, 6), team("C", 21, 4), team("D", 31, 3)];
    let mut rng = StdRng::seed_from_u64(8);
    let round = generate_round(&teams, GameFormat::Doubles, &mut rng);
    assert!(round.failures.is_empty());
    assert_eq!(round.matchups.len(), 2);
    assert!(round.matchups.iter().all(|m| m.accepted && m.matchup.games.len() == 6));
}
