//! Session loaders
//!
//! Loaders produce the validated sessions an [`EntryStore`](crate::storage::EntryStore)
//! is built from: the compiled-in lexicon, or a directory of `session<N>.json` files.

pub mod session_loader;
pub mod json_loader;
pub mod embedded;
pub mod data_dir_loader;

pub use session_loader::SessionLoader;
pub use json_loader::{parse_entries, parse_session};
pub use embedded::EmbeddedLoader;
pub use data_dir_loader::DataDirLoader;
