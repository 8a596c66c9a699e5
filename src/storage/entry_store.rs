//! Memoized, collation-sorted views over the session data.
//!
//! The [`EntryStore`] owns the validated sessions and two memo slots:
//!
//! - the combined collection of every entry, sorted by headword
//! - the mapping from session number to that session's sorted entries
//!
//! Both slots start empty and are filled on first access. They stay filled until
//! [`EntryStore::clear_cache`] is called; the next access then re-sorts from the
//! source sessions. Sorting uses the store's [`UCollator`] and is stable, so entries
//! with equal headwords keep their concatenation order.
//!
//! # Examples
//!
//! ```
//! use verborum::{Entry, EntryStore, Session};
//! use verborum::utils::UCollator;
//!
//! # fn main() -> verborum::Result<()> {
//! let sessions = vec![
//!     Session::numbered(1, vec![Entry::new("amor", "love", None::<&str>)?])?,
//!     Session::numbered(2, vec![Entry::new("bellum", "war", Some("bellum gerere"))?])?,
//! ];
//! let store = EntryStore::new(sessions, UCollator::try_from("en")?)?;
//!
//! assert_eq!(store.total_entry_count(), 2);
//! assert_eq!(store.all_entries()[0].word(), "amor");
//! assert!(store.session_entries(7).is_empty());
//! # Ok(())
//! # }
//! ```

use indexmap::IndexMap;
use log::{debug, info};
use once_cell::unsync::OnceCell;

use super::entry::Entry;
use super::session::{Session, SessionInfo, SessionNumber};
use crate::utils::icu_wrapper::UCollator;
use crate::{LexiconError, Result};

/// Per-session sorted entries, in session declaration order.
pub type SessionEntries = IndexMap<SessionNumber, Vec<Entry>>;

/// Owner of the lexicon and its two memoized views.
#[derive(Debug)]
pub struct EntryStore {
    sessions: IndexMap<SessionNumber, Session>,
    collator: UCollator,
    all_entries: OnceCell<Vec<Entry>>,
    session_data: OnceCell<SessionEntries>,
}

impl EntryStore {
    /// Creates a store over the given sessions.
    ///
    /// Sessions keep the order they are given in. Nothing is sorted until the first
    /// access.
    ///
    /// # Errors
    ///
    /// Returns an error if `sessions` is empty or two sessions share a number.
    pub fn new(sessions: Vec<Session>, collator: UCollator) -> Result<Self> {
        if sessions.is_empty() {
            log::error!("No sessions supplied to the entry store");
            return Err(LexiconError::invalid_data_format("No sessions to load"));
        }
        let mut by_number = IndexMap::with_capacity(sessions.len());
        for session in sessions {
            let number = session.number();
            if by_number.contains_key(&number) {
                log::error!("Session {} declared more than once", number);
                return Err(LexiconError::duplicate_session(number));
            }
            by_number.insert(number, session);
        }
        info!("Entry store created with {} sessions, collation locale '{}'", by_number.len(), collator.locale());
        Ok(Self {
            sessions: by_number,
            collator,
            all_entries: OnceCell::new(),
            session_data: OnceCell::new(),
        })
    }

    /// Combined view: every session's entries concatenated in declaration order, then
    /// sorted by headword.
    pub fn load_all_entries(&self) -> &[Entry] {
        self.all_entries.get_or_init(|| {
            let mut entries: Vec<Entry> = self
                .sessions
                .values()
                .flat_map(|session| session.entries().iter().cloned())
                .collect();
            self.sort_by_word(&mut entries);
            info!("Loaded {} entries from {} sessions", entries.len(), self.sessions.len());
            entries
        })
    }

    /// Per-session view: a sorted copy of each session's entries.
    pub fn load_session_data(&self) -> &SessionEntries {
        self.session_data.get_or_init(|| {
            let mut data = SessionEntries::with_capacity(self.sessions.len());
            for (number, session) in &self.sessions {
                let mut entries = session.entries().to_vec();
                self.sort_by_word(&mut entries);
                debug!("Session {} ({}) sorted: {} entries", number, session.name(), entries.len());
                data.insert(*number, entries);
            }
            data
        })
    }

    pub fn all_entries(&self) -> &[Entry] {
        self.load_all_entries()
    }

    /// Sorted entries of one session, or an empty slice if there is no such session.
    pub fn session_entries(&self, number: SessionNumber) -> &[Entry] {
        self.load_session_data()
            .get(&number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sessions with their entry counts, in declaration order.
    pub fn available_sessions(&self) -> Vec<SessionInfo> {
        self.load_session_data()
            .iter()
            .map(|(number, entries)| SessionInfo {
                number: *number,
                name: self
                    .sessions
                    .get(number)
                    .map(|session| session.name().to_string())
                    .unwrap_or_default(),
                entry_count: entries.len(),
            })
            .collect()
    }

    pub fn total_entry_count(&self) -> usize {
        self.load_all_entries().len()
    }

    /// Drops both memoized views. The next access re-sorts from the source sessions.
    pub fn clear_cache(&mut self) {
        self.all_entries.take();
        self.session_data.take();
        info!("Dictionary cache cleared");
    }

    /// Fills both memo slots now instead of on first access.
    pub fn preload(&self) {
        self.load_all_entries();
        self.load_session_data();
    }

    pub fn has_cached_entries(&self) -> bool {
        self.all_entries.get().is_some()
    }

    pub fn has_cached_sessions(&self) -> bool {
        self.session_data.get().is_some()
    }

    /// The source sessions, unsorted, in declaration order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }

    pub fn collator(&self) -> &UCollator {
        &self.collator
    }

    fn sort_by_word(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| self.collator.compare(a.word(), b.word()));
    }
}
