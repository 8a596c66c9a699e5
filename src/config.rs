//! Dictionary configuration.
//!
//! ```no_run
//! use verborum::DictionaryConfig;
//!
//! # fn main() -> verborum::Result<()> {
//! let config = DictionaryConfig::from_file("verborum.json")?;
//! let store = config.open()?;
//! println!("{} entries", store.total_entry_count());
//! # Ok(())
//! # }
//! ```
//!
//! A configuration file looks like:
//!
//! ```json
//! { "sorting_locale": "en-u-ks-level2", "sessions_dir": "data/sessions", "eager_load": true }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loader::{DataDirLoader, EmbeddedLoader, SessionLoader};
use crate::storage::EntryStore;
use crate::utils::icu_wrapper::UCollator;
use crate::utils::io_utils::string_from_file;
use crate::Result;

/// Settings for building an [`EntryStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// BCP-47 locale used to sort headwords; empty selects the root collation.
    pub sorting_locale: String,
    /// Directory of `session<N>.json` files; the compiled-in lexicon when absent.
    pub sessions_dir: Option<PathBuf>,
    /// Sort both views when the store is opened rather than on first access.
    pub eager_load: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            sorting_locale: "en".to_string(),
            sessions_dir: None,
            eager_load: false,
        }
    }
}

impl DictionaryConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = string_from_file(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the configured sessions and builds the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the sessions cannot be loaded or validated, or the sorting
    /// locale cannot be turned into a collator.
    pub fn open(&self) -> Result<EntryStore> {
        let sessions = match &self.sessions_dir {
            Some(dir) => DataDirLoader::new(dir).load_sessions()?,
            None => EmbeddedLoader.load_sessions()?,
        };
        let collator = UCollator::try_from(&self.sorting_locale)?;
        let store = EntryStore::new(sessions, collator)?;
        if self.eager_load {
            store.preload();
        }
        Ok(store)
    }
}
