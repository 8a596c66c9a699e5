//! Parsing of JSON session files.
//!
//! A session file is a JSON array of records:
//!
//! ```json
//! [
//!   { "word": "bellum", "definition": "war", "example": "bellum gerere" },
//!   { "word": "amor", "definition": "love" }
//! ]
//! ```
//!
//! Records missing a `word` or `definition`, or carrying a blank one, are rejected
//! with the session name and record index so the data can be fixed at the source.

use serde::Deserialize;

use crate::storage::{Entry, Session, SessionNumber};
use crate::{LexiconError, Result};

#[derive(Debug, Deserialize)]
struct EntryRecord {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    example: Option<String>,
}

/// Parses the records of one session file into entries, in file order.
pub fn parse_entries(json: &str, source_name: &str) -> Result<Vec<Entry>> {
    let records: Vec<EntryRecord> = serde_json::from_str(json)?;
    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let word = record.word.ok_or_else(|| {
            LexiconError::invalid_data_format(format!("{}: record {} has no word", source_name, index))
        })?;
        let definition = record.definition.ok_or_else(|| {
            LexiconError::invalid_data_format(format!("{}: record {} ('{}') has no definition", source_name, index, word))
        })?;
        let entry = Entry::new(word, definition, record.example).map_err(|e| {
            LexiconError::invalid_data_format(format!("{}: record {}: {}", source_name, index, e))
        })?;
        entries.push(entry);
    }
    log::debug!("Parsed {} entries from {}", entries.len(), source_name);
    Ok(entries)
}

/// Parses a whole session file into a [`Session`] with the given number and name.
pub fn parse_session(number: SessionNumber, name: &str, json: &str) -> Result<Session> {
    let entries = parse_entries(json, name)?;
    Session::new(number, name, entries)
}
