//! Browsing state for a dictionary front end.
//!
//! [`DictionaryBrowser`] holds what a search screen holds: the query text and the
//! selected session, if any. From those it decides which store or engine operation
//! produces the visible results:
//!
//! | selection | query  | results                                 |
//! |-----------|--------|-----------------------------------------|
//! | none      | blank  | [`EntryStore::all_entries`]             |
//! | none      | text   | [`QueryEngine::search_dictionary`]      |
//! | session   | blank  | [`EntryStore::session_entries`]         |
//! | session   | text   | [`QueryEngine::search_session`]         |

use serde::Serialize;

use crate::search::{HighlightedEntry, QueryEngine, highlight_entry};
use crate::storage::{Entry, EntryStore, SessionNumber};

/// A session filter button: "All Sessions (N)" or "Session N (C)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionLabel {
    /// `None` for the all-sessions button.
    pub session: Option<SessionNumber>,
    pub label: String,
    pub selected: bool,
}

/// Search screen state over an owned [`EntryStore`].
///
/// Starts with an empty query and no session selected, which shows the whole lexicon.
#[derive(Debug)]
pub struct DictionaryBrowser {
    store: EntryStore,
    query: String,
    selected_session: Option<SessionNumber>,
}

impl DictionaryBrowser {
    pub fn new(store: EntryStore) -> Self {
        Self {
            store,
            query: String::new(),
            selected_session: None,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_session(&self) -> Option<SessionNumber> {
        self.selected_session
    }

    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.query = query.into();
    }

    /// Selects a session, or clears the selection if it is already selected.
    ///
    /// Returns the new selection.
    pub fn toggle_session(&mut self, number: SessionNumber) -> Option<SessionNumber> {
        self.selected_session = if self.selected_session == Some(number) {
            None
        } else {
            Some(number)
        };
        log::debug!("Session selection is now {:?}", self.selected_session);
        self.selected_session
    }

    pub fn select_all_sessions(&mut self) {
        self.selected_session = None;
    }

    /// The entries to display for the current query and selection.
    pub fn results(&self) -> Vec<&Entry> {
        let engine = QueryEngine::new(&self.store);
        let blank = self.query.trim().is_empty();
        match (self.selected_session, blank) {
            (None, true) => self.store.all_entries().iter().collect(),
            (None, false) => engine.search_dictionary(&self.query),
            (Some(number), true) => self.store.session_entries(number).iter().collect(),
            (Some(number), false) => engine.search_session(number, &self.query),
        }
    }

    /// The results with every field highlighted against the current query.
    pub fn highlighted_results(&self) -> Vec<HighlightedEntry<'_>> {
        self.results()
            .into_iter()
            .map(|entry| highlight_entry(entry, &self.query))
            .collect()
    }

    /// "1 entry found" / "N entries found".
    pub fn summary(&self) -> String {
        let count = self.results().len();
        format!("{} {} found", count, if count == 1 { "entry" } else { "entries" })
    }

    /// The message to show instead of an empty result list.
    pub fn empty_message(&self) -> Option<String> {
        if self.results().is_empty() {
            Some(format!("No entries found for \"{}\"", self.query))
        } else {
            None
        }
    }

    /// Labels for the all-sessions button followed by one per session.
    pub fn session_labels(&self) -> Vec<SessionLabel> {
        let mut labels = vec![SessionLabel {
            session: None,
            label: format!("All Sessions ({})", self.store.total_entry_count()),
            selected: self.selected_session.is_none(),
        }];
        labels.extend(self.store.available_sessions().into_iter().map(|info| SessionLabel {
            session: Some(info.number),
            label: format!("Session {} ({})", info.number, info.entry_count),
            selected: self.selected_session == Some(info.number),
        }));
        labels
    }

    /// Drops the store's memoized views so the next access re-sorts from source.
    pub fn reload(&mut self) {
        self.store.clear_cache();
    }
}
