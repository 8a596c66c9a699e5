//! The compiled-in lexicon of *De verborum significatione*.

use super::json_loader::parse_session;
use super::session_loader::SessionLoader;
use crate::storage::{Session, SessionNumber};
use crate::Result;

/// Declared sessions: number, source name, JSON text.
const EMBEDDED_SESSIONS: &[(SessionNumber, &str, &str)] = &[
    (1, "session1", include_str!("../../data/sessions/session1.json")),
    (2, "session2", include_str!("../../data/sessions/session2.json")),
    (3, "session3", include_str!("../../data/sessions/session3.json")),
];

/// Loads the sessions bundled with the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedLoader;

impl SessionLoader for EmbeddedLoader {
    fn load_sessions(&mut self) -> Result<Vec<Session>> {
        EMBEDDED_SESSIONS
            .iter()
            .map(|(number, name, json)| parse_session(*number, name, json))
            .collect()
    }
}
