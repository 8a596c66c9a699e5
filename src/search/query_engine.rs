//! Case-insensitive substring search over the entry store.
//!
//! A query matches an entry when, after trimming and lowercasing, it is a substring
//! of the lowercased headword, definition or example. There is no ranking: results
//! keep the alphabetical order of the collection they were drawn from.
//!
//! The two entry points treat an empty query differently. A global search with an
//! empty query returns nothing, because the caller shows [`EntryStore::all_entries`]
//! in that case itself. A session search with an empty query returns the whole
//! session.
//!
//! # Examples
//!
//! ```
//! use verborum::search::QueryEngine;
//! use verborum::{Entry, EntryStore, Session};
//! use verborum::utils::UCollator;
//!
//! # fn main() -> verborum::Result<()> {
//! let store = EntryStore::new(
//!     vec![
//!         Session::numbered(1, vec![Entry::new("amor", "love", None::<&str>)?])?,
//!         Session::numbered(2, vec![Entry::new("bellum", "war", Some("bellum gerere"))?])?,
//!     ],
//!     UCollator::try_from("en")?,
//! )?;
//! let engine = QueryEngine::new(&store);
//!
//! assert_eq!(engine.search_dictionary("BEL")[0].word(), "bellum");
//! assert!(engine.search_dictionary("  ").is_empty());
//! assert_eq!(engine.search_session(2, "gerere").len(), 1);
//! assert_eq!(engine.search_session(1, "").len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::storage::{Entry, EntryStore, SessionNumber};

/// Trims and lowercases a query, or returns `None` if nothing is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Tests a normalized query against the headword, definition and example of an entry.
pub fn entry_matches(entry: &Entry, folded_query: &str) -> bool {
    entry.word().to_lowercase().contains(folded_query)
        || entry.definition().to_lowercase().contains(folded_query)
        || entry
            .example()
            .is_some_and(|example| example.to_lowercase().contains(folded_query))
}

/// Keeps the entries matching a normalized query, in their original order.
pub fn filter_entries<'a>(entries: &'a [Entry], folded_query: &str) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| entry_matches(entry, folded_query))
        .collect()
}

/// Stateless search over an [`EntryStore`].
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a EntryStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a EntryStore) -> Self {
        Self { store }
    }

    /// Searches every session. A blank query yields no results.
    pub fn search_dictionary(&self, query: &str) -> Vec<&'a Entry> {
        match normalize_query(query) {
            Some(folded) => {
                let results = filter_entries(self.store.load_all_entries(), &folded);
                log::debug!("Query '{}' matched {} entries", folded, results.len());
                results
            }
            None => Vec::new(),
        }
    }

    /// Searches one session. A blank query yields the whole session; an unknown session
    /// yields nothing.
    pub fn search_session(&self, number: SessionNumber, query: &str) -> Vec<&'a Entry> {
        let entries = self.store.session_entries(number);
        match normalize_query(query) {
            Some(folded) => {
                let results = filter_entries(entries, &folded);
                log::debug!("Query '{}' matched {} entries in session {}", folded, results.len(), number);
                results
            }
            None => entries.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{amor_bellum_store, latin_store, words};

    #[test]
    fn test_amor_bellum_scenario() {
        let store = amor_bellum_store();
        let engine = QueryEngine::new(&store);
        assert_eq!(words(engine.search_dictionary("bel")), vec!["bellum"]);
        assert!(engine.search_session(1, "war").is_empty());
        assert_eq!(words(engine.search_session(2, "gerere")), vec!["bellum"]);
    }

    #[test]
    fn test_empty_query_asymmetry() {
        let store = latin_store();
        let engine = QueryEngine::new(&store);
        assert!(engine.search_dictionary("").is_empty());
        assert!(engine.search_dictionary(" \t\n").is_empty());

        let session: Vec<&Entry> = store.session_entries(1).iter().collect();
        assert_eq!(engine.search_session(1, ""), session);
        assert_eq!(engine.search_session(1, "   "), session);
    }

    #[test]
    fn test_query_is_trimmed_and_case_folded() {
        let store = latin_store();
        let engine = QueryEngine::new(&store);
        assert_eq!(words(engine.search_dictionary("  FLAMEN ")), vec!["Flamen"]);
        assert_eq!(words(engine.search_dictionary("Peregrinum")), vec!["hostis"]);
    }

    #[test]
    fn test_matches_each_field() {
        let store = latin_store();
        let engine = QueryEngine::new(&store);
        // headword
        assert_eq!(words(engine.search_dictionary("bident")), vec!["Bidental"]);
        // definition
        assert_eq!(words(engine.search_dictionary("lightning")), vec!["Bidental"]);
        // example
        assert_eq!(words(engine.search_dictionary("murum")), vec!["Pomerium"]);
    }

    #[test]
    fn test_results_keep_alphabetical_order() {
        let store = latin_store();
        let engine = QueryEngine::new(&store);
        assert_eq!(words(engine.search_dictionary("priest")), vec!["augur", "Flamen"]);
        assert_eq!(words(engine.search_dictionary("place")), vec!["Bidental", "Comitium"]);
    }

    #[test]
    fn test_session_search_is_scoped() {
        let store = latin_store();
        let engine = QueryEngine::new(&store);
        assert_eq!(words(engine.search_session(2, "priest")), vec!["Flamen"]);
        assert!(engine.search_session(3, "priest").is_empty());
        assert!(engine.search_session(42, "").is_empty());
        assert!(engine.search_session(42, "priest").is_empty());
    }

    #[test]
    fn test_no_match() {
        let store = latin_store();
        let engine = QueryEngine::new(&store);
        assert!(engine.search_dictionary("xyzzy").is_empty());
    }

    /// Every substring of every field finds its entry, and a found entry always
    /// contains the query in one of its fields.
    #[test]
    fn test_search_agrees_with_field_containment() {
        let store = latin_store();
        let engine = QueryEngine::new(&store);
        for entry in store.all_entries() {
            let word = entry.word();
            for (start, _) in word.char_indices() {
                let query = word[start..].to_uppercase();
                let results = engine.search_dictionary(&query);
                assert!(results.contains(&entry), "'{}' should find {}", query, word);
                let folded = query.trim().to_lowercase();
                for found in results {
                    let fields = [
                        Some(found.word()),
                        Some(found.definition()),
                        found.example(),
                    ];
                    assert!(fields.iter().flatten().any(|field| field.to_lowercase().contains(&folded)));
                }
            }
        }
    }
}
