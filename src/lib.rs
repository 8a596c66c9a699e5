//! # verborum - searchable lexicon of *De verborum significatione*
//!
//! This crate loads a fixed lexicon of Latin headwords, grouped into numbered
//! sessions, and provides the search layer a dictionary viewer needs.
//!
//! ## Features
//!
//! - **Entry store**: Lazily built, memoized views of all entries and of each session,
//!   sorted by headword with locale-aware collation
//! - **Substring search**: Case-insensitive matching across headword, definition and
//!   example, globally or within one session
//! - **Highlighting**: Split result text into match/non-match fragments for rendering
//! - **Session loaders**: Compiled-in lexicon or a directory of `session<N>.json` files
//! - **Browser state**: The query/session-selection state machine of a search screen
//!
//! ## Quick Start
//!
//! ```
//! use verborum::{DictionaryConfig, QueryEngine};
//! use verborum::search::highlight;
//!
//! # fn main() -> verborum::Result<()> {
//! let store = DictionaryConfig::default().open()?;
//! let engine = QueryEngine::new(&store);
//!
//! for entry in engine.search_dictionary("flamen") {
//!     let fragments = highlight(entry.word(), "flamen");
//!     println!("{}: {}", fragments[0].text, entry.definition());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `icu` (default): Use ICU4X for Unicode collation (pure Rust implementation)
//! - `rust-icu`: Use rust_icu for Unicode collation (requires system ICU library)
//!
//! ## Error Handling
//!
//! Loading can fail and returns [`Result<T>`] with a [`LexiconError`]. Once an
//! [`EntryStore`] is built, none of its accessors or searches fail: an unknown session
//! or a blank query simply yields fewer (or no) results.

pub mod config;
pub mod error;
pub mod loader;
pub mod search;
pub mod storage;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use config::DictionaryConfig;
pub use search::QueryEngine;
pub use storage::{Entry, EntryStore, Session, SessionInfo, SessionNumber};
pub use view::DictionaryBrowser;

// Re-export error types for convenience
pub use error::{LexiconError, Result, snafu};
