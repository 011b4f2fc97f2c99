//! Attaching game links and outcomes by player ids, as the game-creation service does.

use nations_cup_matchups::{
    generate_matchup, generate_round, CorrelationError, GameFormat, GameOutcome, Matchup, PlayerId,
    Team,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn team(name: &str, first_id: PlayerId, size: usize) -> Team {
    Team::with_players(
        name,
        (0..size as u64).map(|i| (format!("{name}{i}"), first_id + i)),
    )
}

fn three_v_three() -> Matchup {
    let mut rng = StdRng::seed_from_u64(21);
    generate_matchup(&team("A", 1, 3), &team("B", 11, 3), GameFormat::Singles, &mut rng)
        .unwrap()
        .matchup
}

#[test]
fn link_is_attached_to_matching_game() {
    let mut m = three_v_three();
    let ids = m.games[4].player_ids();
    m.attach_link(&ids, "https://example.test/game/1").unwrap();

    let linked: Vec<_> = m.games_by_ids(&ids).filter(|g| g.has_link()).collect();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].link, "https://example.test/game/1");
    assert_eq!(m.games.iter().filter(|g| g.has_link()).count(), 1);
}

#[test]
fn duplicate_games_receive_links_in_order() {
    let mut m = three_v_three();
    // 3v3 singles: every player meets exactly one opponent twice.
    let ids = m
        .games
        .iter()
        .map(|g| g.player_ids())
        .find(|ids| m.games_by_ids(ids).count() == 2)
        .unwrap();

    m.attach_link(&ids, "first").unwrap();
    m.attach_link(&ids, "second").unwrap();
    assert_eq!(
        m.attach_link(&ids, "third"),
        Err(CorrelationError::AlreadyLinked(ids.clone()))
    );

    let links: Vec<&str> = m.games_by_ids(&ids).map(|g| g.link.as_str()).collect();
    assert_eq!(links, vec!["first", "second"]);
}

#[test]
fn unknown_ids_are_reported() {
    let mut m = three_v_three();
    assert_eq!(
        m.attach_link(&[999, 1000], "x"),
        Err(CorrelationError::GameNotFound(vec![999, 1000]))
    );
    // Ids must be in canonical order (team A first).
    let ids = m.games[0].player_ids();
    let reversed: Vec<PlayerId> = ids.iter().rev().copied().collect();
    assert!(m.attach_link(&reversed, "x").is_err());
}

#[test]
fn outcome_can_be_narrowed_by_link() {
    let mut m = three_v_three();
    let ids = m.games[0].player_ids();
    m.attach_link(&ids, "L1").unwrap();
    m.set_outcome(&ids, Some("L1"), GameOutcome::InProgress).unwrap();
    let game = m.games_by_ids(&ids).find(|g| g.link == "L1").unwrap();
    assert_eq!(game.outcome, GameOutcome::InProgress);

    assert_eq!(
        m.set_outcome(&ids, Some("missing"), GameOutcome::Finished),
        Err(CorrelationError::GameNotFound(ids.clone()))
    );
}

#[test]
fn round_searches_every_matchup() {
    let teams = vec![team("A", 1, 4), team("B", 11, 4), team("C", 21, 5), team("D", 31, 6)];
    let mut rng = StdRng::seed_from_u64(4);
    let mut round = generate_round(&teams, GameFormat::Singles, &mut rng);
    let ids = round.matchups[1].matchup.games[0].player_ids();

    round.attach_link(&ids, "L").unwrap();
    round.set_outcome(&ids, None, GameOutcome::Finished).unwrap();
    let game = &round.matchups[1].matchup.games[0];
    assert_eq!(game.link, "L");
    assert_eq!(game.outcome, GameOutcome::Finished);

    assert_eq!(
        round.attach_link(&ids, "again"),
        Err(CorrelationError::AlreadyLinked(ids.clone()))
    );
    assert_eq!(
        round.set_outcome(&[5, 6], None, GameOutcome::Finished),
        Err(CorrelationError::GameNotFound(vec![5, 6]))
    );
}
