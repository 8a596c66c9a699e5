//! I/O helpers for reading session sources from disk.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::{LexiconError, Result};

/// Scan a directory for files whose names match the given regex pattern.
///
/// # Arguments
/// * `target_dir` - The directory to scan
/// * `pattern` - A regex pattern to match file names against
/// * `recursive` - Whether to scan subdirectories recursively
///
/// # Returns
/// The matching file paths, in the order the walker visits them.
pub fn scan_dir<P: AsRef<Path>>(target_dir: P, pattern: &Regex, recursive: bool) -> Result<Vec<PathBuf>> {
    let target_dir = target_dir.as_ref();
    if !target_dir.is_dir() {
        return Err(LexiconError::invalid_path(target_dir.display().to_string()));
    }
    let walker = if recursive {
        WalkDir::new(target_dir).follow_links(true)
    } else {
        WalkDir::new(target_dir).follow_links(true).max_depth(1)
    };

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| LexiconError::invalid_data_format(format!("Walk directory error: {}", e)))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_str().ok_or_else(||
            LexiconError::invalid_data_format(format!("Invalid file name encoding: {}", entry.path().display()))
        )?;
        if pattern.is_match(file_name) {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// Reads a whole UTF-8 text file, stripping a leading byte order mark.
pub fn string_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_dir_filters_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("session1.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("session9.json"), "[]").unwrap();

        let pattern = Regex::new(r"^session\d+\.json$").unwrap();
        let flat = scan_dir(dir.path(), &pattern, false).expect("scan");
        assert_eq!(flat, vec![dir.path().join("session1.json")]);

        let mut deep = scan_dir(dir.path(), &pattern, true).expect("scan");
        deep.sort();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_scan_dir_rejects_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pattern = Regex::new(".*").unwrap();
        assert!(scan_dir(dir.path().join("absent"), &pattern, false).is_err());
    }

    #[test]
    fn test_string_from_file_strips_bom() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bom.json");
        fs::write(&path, "\u{FEFF}[]").unwrap();
        assert_eq!(string_from_file(&path).unwrap(), "[]");
    }
}
