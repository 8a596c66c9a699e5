//! Session loading abstraction.
//!
//! A [`SessionLoader`] turns some source of lexicon data into validated
//! [`Session`]s with explicit numbers. The entry store never derives session
//! numbers itself; whatever naming convention a source uses is resolved here,
//! once, at load time.

use crate::storage::Session;
use crate::Result;

/// Common interface for producing sessions from a data source.
///
/// # Examples
///
/// ```
/// use verborum::loader::SessionLoader;
/// use verborum::{Entry, Result, Session};
///
/// struct SingleSession;
///
/// impl SessionLoader for SingleSession {
///     fn load_sessions(&mut self) -> Result<Vec<Session>> {
///         let entry = Entry::new("amor", "love", None::<&str>)?;
///         Ok(vec![Session::numbered(1, vec![entry])?])
///     }
/// }
///
/// assert_eq!(SingleSession.load_sessions().unwrap().len(), 1);
/// ```
pub trait SessionLoader {
    /// Loads every session this source provides, in the order they should be listed.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or holds malformed entries.
    fn load_sessions(&mut self) -> Result<Vec<Session>>;
}
