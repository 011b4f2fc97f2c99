//! Data structures for matchup generation: players, teams, games, matchups, rounds.

mod game;
mod matchup;
mod player;
mod round;
mod team;

pub use game::{Game, GameFormat, GameOutcome, DOUBLES_SLATE_LEN, SINGLES_SLATE_LEN};
pub use matchup::{CorrelationError, Matchup};
pub use player::{Player, PlayerId};
pub use round::{GeneratedMatchup, MatchupError, Round, RoundId};
pub use team::{Team, MAX_ROSTER_SIZE, MIN_ROSTER_SIZE};
