//! Roster source: teams read from blank-row-delimited CSV blocks.
//!
//! ```text
//! Canada
//! Alice,https://www.warzone.com/Profile?p=1234567
//! Bob,7654321
//!
//! USA
//! ...
//! ```

use crate::models::{PlayerId, Team};
use regex::Regex;
use std::io::Read;
use std::sync::OnceLock;

/// Errors while reading rosters.
#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A player row has no id column.
    MissingPlayerId { team: String, player: String },
    /// The id column is neither a number nor a profile URL with `p=<digits>`.
    InvalidPlayerId {
        team: String,
        player: String,
        value: String,
    },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(e) => write!(f, "Could not read rosters: {}", e),
            RosterError::Csv(e) => write!(f, "Malformed roster CSV: {}", e),
            RosterError::MissingPlayerId { team, player } => {
                write!(f, "Player {} on {} has no id", player, team)
            }
            RosterError::InvalidPlayerId {
                team,
                player,
                value,
            } => write!(f, "Player {} on {} has an invalid id '{}'", player, team, value),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(e) => Some(e),
            RosterError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::Io(e)
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}

/// Anything that yields the ordered team list for a round.
pub trait RosterSource {
    fn teams(&mut self) -> Result<Vec<Team>, RosterError>;
}

/// Teams already in memory (e.g. from a JSON request body).
impl RosterSource for Vec<Team> {
    fn teams(&mut self) -> Result<Vec<Team>, RosterError> {
        Ok(self.clone())
    }
}

/// Reads team blocks from CSV. A block is a team-name row followed by
/// `name, id` rows; blocks are separated by blank rows.
pub struct CsvRosterSource<R> {
    reader: R,
}

impl<R: Read> CsvRosterSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> RosterSource for CsvRosterSource<R> {
    fn teams(&mut self) -> Result<Vec<Team>, RosterError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;

        let mut teams = Vec::new();
        for block in blocks(&text) {
            if let Some(team) = parse_block(&block)? {
                teams.push(team);
            }
        }
        log::info!("Read {} team(s) from roster CSV", teams.len());
        Ok(teams)
    }
}

/// Split on rows that are empty or hold only empty cells.
fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    for row in rows(text) {
        if is_blank_row(row) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(row);
            current.push('\n');
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// CSV rows of `text`. Line breaks inside a quoted field stay in that field.
fn rows(text: &str) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '\n' if !quoted => {
                rows.push(text[start..i].trim_end_matches('\r'));
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < text.len() {
        rows.push(text[start..].trim_end_matches('\r'));
    }
    rows
}

fn is_blank_row(line: &str) -> bool {
    line.chars().all(|c| c == ',' || c == '"' || c.is_whitespace())
}

fn parse_block(block: &str) -> Result<Option<Team>, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(block.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Ok(None),
    };
    let mut team = Team::new(header.get(0).unwrap_or_default().trim());

    for record in records {
        let record = record?;
        let name = record.get(0).unwrap_or_default().trim().to_string();
        let raw_id = record.get(1).map(str::trim).unwrap_or_default();
        if raw_id.is_empty() {
            return Err(RosterError::MissingPlayerId {
                team: team.name.clone(),
                player: name,
            });
        }
        let id = parse_player_id(raw_id).ok_or_else(|| RosterError::InvalidPlayerId {
            team: team.name.clone(),
            player: name.clone(),
            value: raw_id.to_string(),
        })?;
        team.add_player(name, id);
    }
    Ok(Some(team))
}

/// A bare numeric id, or the `p=` query value of a profile URL.
///
/// `p=` must start a query parameter (`?p=` or `&p=`), so `?up=5` is not an id.
pub fn parse_player_id(raw: &str) -> Option<PlayerId> {
    static PROFILE_ID: OnceLock<Regex> = OnceLock::new();
    let raw = raw.trim();
    if let Ok(id) = raw.parse() {
        return Some(id);
    }
    let re = PROFILE_ID.get_or_init(|| Regex::new(r"[?&]p=(\d+)").expect("profile id pattern"));
    re.captures(raw)?.get(1)?.as_str().parse().ok()
}
