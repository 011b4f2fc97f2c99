//! Round: every matchup generated from one roster list, plus generation errors.

use crate::models::game::{GameFormat, GameOutcome};
use crate::models::matchup::{CorrelationError, Matchup};
use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a generated round.
pub type RoundId = Uuid;

/// Errors that make a single matchup impossible to build.
///
/// Sampling exhaustion is not one of them: see [`GeneratedMatchup::accepted`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchupError {
    /// Roster is outside the supported 3..=6 range.
    UnsupportedRosterSize { team: String, size: usize },
    /// The doubles quota could not produce a full set of teammate pairs.
    QuotaUnsatisfied {
        team: String,
        selected: usize,
        required: usize,
    },
    /// Odd number of teams: the last one has no opponent.
    UnpairedTeam { team: String },
}

impl std::fmt::Display for MatchupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchupError::UnsupportedRosterSize { team, size } => {
                write!(f, "Team {} has {} players (need 3 to 6)", team, size)
            }
            MatchupError::QuotaUnsatisfied {
                team,
                selected,
                required,
            } => write!(
                f,
                "Team {} yields only {} of {} teammate pairs under its quota",
                team, selected, required
            ),
            MatchupError::UnpairedTeam { team } => write!(f, "Team {} has no opponent", team),
        }
    }
}

impl std::error::Error for MatchupError {}

/// A matchup plus how the sampler arrived at it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMatchup {
    pub matchup: Matchup,
    /// Shuffles tried, including the accepted one.
    pub attempts: usize,
    /// False when the attempt cap was hit; the games are then the last (unchecked) shuffle.
    pub accepted: bool,
}

/// All matchups generated for one roster list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub format: GameFormat,
    /// Round label shown to players and used for score sheets, e.g. "R3".
    #[serde(default)]
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub matchups: Vec<GeneratedMatchup>,
    /// Matchups that could not be built. The rest of the round is still usable.
    pub failures: Vec<MatchupError>,
}

impl Round {
    pub fn new(format: GameFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            format,
            label: None,
            created_at: Utc::now(),
            matchups: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Matchups in slate order, without sampler details (what result sinks consume).
    pub fn matchups(&self) -> Vec<Matchup> {
        self.matchups.iter().map(|m| m.matchup.clone()).collect()
    }

    /// Matchups that hit the attempt cap and need a human look.
    pub fn exhausted(&self) -> impl Iterator<Item = &GeneratedMatchup> {
        self.matchups.iter().filter(|m| !m.accepted)
    }

    /// Attach a game link to the first unlinked game with these ids, in any matchup.
    pub fn attach_link(&mut self, ids: &[PlayerId], link: &str) -> Result<(), CorrelationError> {
        let mut already_linked = false;
        for generated in &mut self.matchups {
            match generated.matchup.attach_link(ids, link) {
                Ok(()) => return Ok(()),
                Err(CorrelationError::AlreadyLinked(_)) => already_linked = true,
                Err(CorrelationError::GameNotFound(_)) => {}
            }
        }
        if already_linked {
            Err(CorrelationError::AlreadyLinked(ids.to_vec()))
        } else {
            Err(CorrelationError::GameNotFound(ids.to_vec()))
        }
    }

    /// Record a game outcome, optionally narrowed to a specific link.
    pub fn set_outcome(
        &mut self,
        ids: &[PlayerId],
        link: Option<&str>,
        outcome: GameOutcome,
    ) -> Result<(), CorrelationError> {
        for generated in &mut self.matchups {
            if generated.matchup.set_outcome(ids, link, outcome).is_ok() {
                return Ok(());
            }
        }
        Err(CorrelationError::GameNotFound(ids.to_vec()))
    }
}
