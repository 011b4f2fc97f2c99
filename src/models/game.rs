//! Game, GameFormat and GameOutcome for 1v1 / 2v2 games.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Number of games in a singles slate.
pub const SINGLES_SLATE_LEN: usize = 12;
/// Number of games in a doubles slate.
pub const DOUBLES_SLATE_LEN: usize = 6;

/// 1v1 or 2v2.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameFormat {
    #[default]
    Singles,
    Doubles,
}

impl GameFormat {
    /// Games per matchup.
    pub fn slate_len(self) -> usize {
        match self {
            GameFormat::Singles => SINGLES_SLATE_LEN,
            GameFormat::Doubles => DOUBLES_SLATE_LEN,
        }
    }
}

impl std::fmt::Display for GameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameFormat::Singles => write!(f, "singles"),
            GameFormat::Doubles => write!(f, "doubles"),
        }
    }
}

/// State of a game as reported by the game service. `Undefined` until created.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WaitingForPlayers,
    DistributingTerritories,
    InProgress,
    Finished,
    #[default]
    Undefined,
}

/// A single game: one player per side (singles) or two per side (doubles).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Team A's players first, then team B's; each side sorted by player order.
    pub players: Vec<Player>,
    /// Empty until the game service creates the game.
    pub link: String,
    pub outcome: GameOutcome,
}

impl Game {
    /// Build a game from each side's players, putting them in canonical order.
    pub fn new(mut side_a: Vec<Player>, mut side_b: Vec<Player>) -> Self {
        side_a.sort();
        side_b.sort();
        side_a.append(&mut side_b);
        Self {
            players: side_a,
            link: String::new(),
            outcome: GameOutcome::Undefined,
        }
    }

    /// Player ids in canonical order; this is the key downstream services correlate on.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// Team A's players (the first half).
    pub fn side_a(&self) -> &[Player] {
        &self.players[..self.players.len() / 2]
    }

    /// Team B's players (the second half).
    pub fn side_b(&self) -> &[Player] {
        &self.players[self.players.len() / 2..]
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}
