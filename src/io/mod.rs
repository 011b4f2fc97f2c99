//! Collaborators around the generator: where rosters come from and where results go.

mod result_sink;
mod roster_source;

pub use result_sink::{CsvResultSink, ResultSink, SinkError};
pub use roster_source::{parse_player_id, CsvRosterSource, RosterError, RosterSource};
