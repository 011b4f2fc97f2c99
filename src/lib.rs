//! Nations' Cup matchup generator: library with models, generation logic and roster/result I/O.

pub mod io;
pub mod logic;
pub mod models;

pub use io::{CsvResultSink, CsvRosterSource, ResultSink, RosterError, RosterSource, SinkError};
pub use logic::{
    assemble_matchup, expand_roster, generate_matchup, generate_pairs, generate_round,
    is_valid_doubles, is_valid_singles, sample_pairings, Sampled, Slot, TeammatePair, MAX_ATTEMPTS,
};
pub use models::{
    CorrelationError, Game, GameFormat, GameOutcome, GeneratedMatchup, Matchup, MatchupError,
    Player, PlayerId, Round, RoundId, Team,
};
