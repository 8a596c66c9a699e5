// View state
//
// The browsing state machine a front end drives: query text, session selection,
// result lists and their labels.

pub mod browser;

pub use browser::{DictionaryBrowser, SessionLabel};
