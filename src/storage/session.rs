//! Sessions: numbered, disjoint partitions of the lexicon.

use serde::Serialize;

use super::entry::Entry;
use crate::{LexiconError, Result};

/// Positive identifier of a session.
pub type SessionNumber = u32;

/// A numbered group of entries as declared by its source, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    number: SessionNumber,
    name: String,
    entries: Vec<Entry>,
}

impl Session {
    /// Creates a session. The number must be positive.
    pub fn new<S: Into<String>>(number: SessionNumber, name: S, entries: Vec<Entry>) -> Result<Self> {
        if number == 0 {
            return Err(LexiconError::invalid_parameter("Session number must be positive"));
        }
        Ok(Self {
            number,
            name: name.into(),
            entries,
        })
    }

    /// Creates a session with the conventional `session<N>` name.
    pub fn numbered(number: SessionNumber, entries: Vec<Entry>) -> Result<Self> {
        Self::new(number, default_session_name(number), entries)
    }

    pub fn number(&self) -> SessionNumber {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// The conventional name of a session source, e.g. `session3`.
pub fn default_session_name(number: SessionNumber) -> String {
    format!("session{}", number)
}

/// Summary of a session as listed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub number: SessionNumber,
    pub name: String,
    pub entry_count: usize,
}
