//! Property tests over every supported roster size combination.

use nations_cup_matchups::logic::{is_fair, opponent_tallies, FairnessRule};
use nations_cup_matchups::{
    expand_roster, generate_matchup, generate_pairs, GameFormat, PlayerId, Team, MAX_ATTEMPTS,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn team(name: &str, first_id: PlayerId, size: usize) -> Team {
    Team::with_players(
        name,
        (0..size as u64).map(|i| (format!("{name}{i}"), first_id + i)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn expansion_is_cyclic(size in 1usize..=8, len in 0usize..=24) {
        let roster: Vec<u32> = (0..size as u32).collect();
        let expanded = expand_roster(&roster, len);
        prop_assert_eq!(expanded.len(), len);
        for (i, slot) in expanded.iter().enumerate() {
            prop_assert_eq!(*slot, roster[i % size]);
        }
    }

    #[test]
    fn singles_sampler_terminates_fairly(a in 3usize..=6, b in 3usize..=6, seed in any::<u64>()) {
        let (ta, tb) = (team("A", 1, a), team("B", 101, b));
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = generate_matchup(&ta, &tb, GameFormat::Singles, &mut rng).unwrap();

        prop_assert!(generated.attempts >= 1 && generated.attempts <= MAX_ATTEMPTS);
        if !generated.accepted {
            prop_assert_eq!(generated.attempts, MAX_ATTEMPTS);
        }
        prop_assert!(generated.accepted);
        prop_assert_eq!(generated.matchup.games.len(), 12);

        let side_a: Vec<_> = generated.matchup.games.iter().map(|g| g.players[0].clone()).collect();
        let side_b: Vec<_> = generated.matchup.games.iter().map(|g| g.players[1].clone()).collect();
        let rule = FairnessRule::singles(a == 3 && b == 3);
        prop_assert!(is_fair(&side_a, &side_b, rule));
        for counts in opponent_tallies(&side_a, &side_b) {
            prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]), "tallies sorted descending");
        }
    }

    #[test]
    fn doubles_sampler_terminates_fairly(a in 3usize..=6, b in 3usize..=6, seed in any::<u64>()) {
        let (ta, tb) = (team("A", 1, a), team("B", 101, b));
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = generate_matchup(&ta, &tb, GameFormat::Doubles, &mut rng).unwrap();

        prop_assert!(generated.accepted);
        prop_assert!(generated.attempts <= MAX_ATTEMPTS);
        prop_assert_eq!(generated.matchup.games.len(), 6);

        // No pair of teammates meets the same opposing pair twice.
        let mut seen: HashMap<Vec<PlayerId>, usize> = HashMap::new();
        for g in &generated.matchup.games {
            *seen.entry(g.player_ids()).or_insert(0) += 1;
        }
        prop_assert!(seen.values().all(|&n| n == 1));
    }

    #[test]
    fn doubles_pairs_fill_twelve_seats(size in 3usize..=6) {
        let t = team("T", 1, size);
        let pairs = generate_pairs(&t).unwrap();
        prop_assert_eq!(pairs.len(), 6);

        let mut games: HashMap<PlayerId, usize> = HashMap::new();
        for pair in &pairs {
            prop_assert_ne!(pair.first.id, pair.second.id);
            *games.entry(pair.first.id).or_insert(0) += 1;
            *games.entry(pair.second.id).or_insert(0) += 1;
        }
        prop_assert_eq!(games.len(), size);
        prop_assert_eq!(games.values().sum::<usize>(), 12);
        let (low, high) = match size {
            3 => (4, 4),
            4 => (3, 3),
            5 => (2, 3),
            _ => (2, 2),
        };
        prop_assert!(games.values().all(|&n| n >= low && n <= high));
    }
}
