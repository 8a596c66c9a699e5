// Query engine
//
// Substring search over the entry store and match highlighting for rendering.

pub mod query_engine;
pub mod highlight;

pub use query_engine::{QueryEngine, entry_matches, filter_entries, normalize_query};
pub use highlight::{HighlightFragment, HighlightedEntry, highlight, highlight_entry, to_html, to_marked_text};
