// Entry storage
//
// This module holds the lexicon data model (entries and sessions) and the entry
// store that memoizes the sorted combined and per-session views.

pub mod entry;
pub mod session;
pub mod entry_store;

pub use entry::Entry;
pub use session::{Session, SessionInfo, SessionNumber, default_session_name};
pub use entry_store::{EntryStore, SessionEntries};
