//! Matchup between two teams, and correlation of games by player ids.

use crate::models::game::{Game, GameOutcome};
use crate::models::player::PlayerId;
use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Errors when attaching service data (link, outcome) to a generated game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CorrelationError {
    /// No game has exactly these player ids.
    GameNotFound(Vec<PlayerId>),
    /// Every game with these player ids already has a link.
    AlreadyLinked(Vec<PlayerId>),
}

impl std::fmt::Display for CorrelationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationError::GameNotFound(ids) => write!(f, "No game for player ids {:?}", ids),
            CorrelationError::AlreadyLinked(ids) => {
                write!(f, "All games for player ids {:?} already have a link", ids)
            }
        }
    }
}

impl std::error::Error for CorrelationError {}

/// Two competing teams and their slate of games.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub team_a: Team,
    pub team_b: Team,
    pub games: Vec<Game>,
}

impl Matchup {
    pub fn new(team_a: Team, team_b: Team, games: Vec<Game>) -> Self {
        Self {
            team_a,
            team_b,
            games,
        }
    }

    /// Games whose canonical id tuple equals `ids`.
    pub fn games_by_ids<'a>(&'a self, ids: &'a [PlayerId]) -> impl Iterator<Item = &'a Game> + 'a {
        self.games.iter().filter(move |g| g.player_ids() == ids)
    }

    /// Number of games a player takes part in.
    pub fn games_played(&self, id: PlayerId) -> usize {
        self.games.iter().filter(|g| g.involves(id)).count()
    }

    /// Set the link on the first game with these ids that has no link yet.
    ///
    /// 3v3 singles may contain two games with the same ids, so links are handed
    /// out in slate order.
    pub fn attach_link(&mut self, ids: &[PlayerId], link: impl Into<String>) -> Result<(), CorrelationError> {
        let mut seen = false;
        for game in self.games.iter_mut().filter(|g| g.player_ids() == ids) {
            seen = true;
            if !game.has_link() {
                game.link = link.into();
                return Ok(());
            }
        }
        if seen {
            Err(CorrelationError::AlreadyLinked(ids.to_vec()))
        } else {
            Err(CorrelationError::GameNotFound(ids.to_vec()))
        }
    }

    /// Set the outcome on the game with these ids (and, when given, this link).
    pub fn set_outcome(
        &mut self,
        ids: &[PlayerId],
        link: Option<&str>,
        outcome: GameOutcome,
    ) -> Result<(), CorrelationError> {
        let game = self
            .games
            .iter_mut()
            .filter(|g| g.player_ids() == ids)
            .find(|g| link.map_or(true, |l| g.link == l))
            .ok_or_else(|| CorrelationError::GameNotFound(ids.to_vec()))?;
        game.outcome = outcome;
        Ok(())
    }
}
