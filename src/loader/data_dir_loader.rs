use std::path::{Path, PathBuf};

use regex::Regex;

use super::json_loader::parse_session;
use super::session_loader::SessionLoader;
use crate::storage::{Session, SessionNumber};
use crate::utils::io_utils::{scan_dir, string_from_file};
use crate::{LexiconError, Result};

const SESSION_FILE_PATTERN: &str = r"^session(\d+)\.json$";

/// DataDirLoader loads every `session<N>.json` file found directly inside a directory.
///
/// The number in the file name becomes the session number; sessions are listed in
/// ascending number order. Other files are ignored.
pub struct DataDirLoader {
    source_dir: PathBuf,
}

impl DataDirLoader {
    pub fn new<P: AsRef<Path>>(source_dir: P) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
        }
    }

    /// Finds the session files and their declared numbers, sorted by number.
    fn session_files(&self) -> Result<Vec<(SessionNumber, String, PathBuf)>> {
        let pattern = Regex::new(SESSION_FILE_PATTERN)?;
        let files = scan_dir(&self.source_dir, &pattern, false)?;
        log::debug!("Found {} session files in {}", files.len(), self.source_dir.display());

        let mut sessions = Vec::with_capacity(files.len());
        for path in files {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| LexiconError::invalid_path(path.display().to_string()))?;
            let captures = pattern
                .captures(file_name)
                .ok_or_else(|| LexiconError::invalid_data_format(format!("Not a session file: {}", file_name)))?;
            let number: SessionNumber = captures[1].parse()?;
            let name = file_name.trim_end_matches(".json").to_string();
            sessions.push((number, name, path));
        }
        sessions.sort_by_key(|(number, _, _)| *number);
        if let Some(pair) = sessions.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            log::error!("{} and {} declare the same session number", pair[0].1, pair[1].1);
            return Err(LexiconError::duplicate_session(pair[0].0));
        }
        Ok(sessions)
    }
}

impl SessionLoader for DataDirLoader {
    fn load_sessions(&mut self) -> Result<Vec<Session>> {
        let files = self.session_files()?;
        if files.is_empty() {
            log::error!("No session files in {}", self.source_dir.display());
            return Err(LexiconError::invalid_data_format(format!(
                "No session<N>.json files found in {}",
                self.source_dir.display()
            )));
        }
        let mut sessions = Vec::with_capacity(files.len());
        for (number, name, path) in files {
            let json = string_from_file(&path)?;
            sessions.push(parse_session(number, &name, &json)?);
            log::info!("Loaded session {} from {}", number, path.display());
        }
        Ok(sessions)
    }
}
