//! Result sink: where generated matchups are written for display and game creation.

use crate::models::{GameOutcome, Matchup, Player};
use std::io::Write;

/// Errors while writing results.
#[derive(Debug)]
pub enum SinkError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::Io(e) => write!(f, "Could not write matchups: {}", e),
            SinkError::Csv(e) => write!(f, "Could not encode matchups: {}", e),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::Csv(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        SinkError::Io(e)
    }
}

impl From<csv::Error> for SinkError {
    fn from(e: csv::Error) -> Self {
        SinkError::Csv(e)
    }
}

/// Anything that accepts a round's matchups.
pub trait ResultSink {
    fn write_matchups(&mut self, matchups: &[Matchup]) -> Result<(), SinkError>;
}

/// Collects matchups in memory.
impl ResultSink for Vec<Matchup> {
    fn write_matchups(&mut self, matchups: &[Matchup]) -> Result<(), SinkError> {
        self.extend_from_slice(matchups);
        Ok(())
    }
}

const HEADER: [&str; 11] = [
    "matchup",
    "team_a",
    "team_a_handicap",
    "team_b",
    "team_b_handicap",
    "team_a_players",
    "team_a_ids",
    "team_b_players",
    "team_b_ids",
    "link",
    "outcome",
];

/// One CSV row per game, in slate order. Each row carries both teams' starting
/// handicap (see [`Team::handicap`](crate::models::Team::handicap)) so score
/// sheets can be seeded from the export.
pub struct CsvResultSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvResultSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}

impl<W: Write> ResultSink for CsvResultSink<W> {
    fn write_matchups(&mut self, matchups: &[Matchup]) -> Result<(), SinkError> {
        self.writer.write_record(HEADER)?;
        let mut rows = 0;
        for (index, matchup) in matchups.iter().enumerate() {
            let number = (index + 1).to_string();
            let handicap_a = matchup.team_a.handicap().to_string();
            let handicap_b = matchup.team_b.handicap().to_string();
            for game in &matchup.games {
                let (a, b) = (game.side_a(), game.side_b());
                let (a_names, a_ids) = (names(a), ids(a));
                let (b_names, b_ids) = (names(b), ids(b));
                self.writer.write_record([
                    number.as_str(),
                    matchup.team_a.name.as_str(),
                    handicap_a.as_str(),
                    matchup.team_b.name.as_str(),
                    handicap_b.as_str(),
                    a_names.as_str(),
                    a_ids.as_str(),
                    b_names.as_str(),
                    b_ids.as_str(),
                    game.link.as_str(),
                    outcome_label(game.outcome),
                ])?;
                rows += 1;
            }
        }
        self.writer.flush()?;
        log::info!("Wrote {} game row(s) for {} matchup(s)", rows, matchups.len());
        Ok(())
    }
}

fn names(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(" & ")
}

fn ids(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn outcome_label(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::WaitingForPlayers => "WaitingForPlayers",
        GameOutcome::DistributingTerritories => "DistributingTerritories",
        GameOutcome::InProgress => "Playing",
        GameOutcome::Finished => "Finished",
        GameOutcome::Undefined => "",
    }
}
