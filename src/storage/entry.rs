//! The dictionary entry: a headword, its definition and an optional usage example.

use serde::Serialize;

use crate::{LexiconError, Result};

/// One lexicon record.
///
/// `word` and `definition` are guaranteed non-blank. An example that is absent and an
/// example that is an empty string are indistinguishable through [`Entry::example`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    word: String,
    definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<String>,
}

impl Entry {
    /// Creates an entry, rejecting a blank headword or definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use verborum::Entry;
    ///
    /// let entry = Entry::new("bellum", "war", Some("bellum gerere")).unwrap();
    /// assert_eq!(entry.example(), Some("bellum gerere"));
    /// assert!(Entry::new("", "war", None::<String>).is_err());
    /// ```
    pub fn new<W, D, E>(word: W, definition: D, example: Option<E>) -> Result<Self>
    where
        W: Into<String>,
        D: Into<String>,
        E: Into<String>,
    {
        let word = word.into();
        let definition = definition.into();
        if word.trim().is_empty() {
            return Err(LexiconError::invalid_data_format("Entry word must not be empty"));
        }
        if definition.trim().is_empty() {
            return Err(LexiconError::invalid_data_format(format!("Entry '{}' has an empty definition", word)));
        }
        Ok(Self {
            word,
            definition,
            example: example.map(Into::into),
        })
    }

    /// The headword.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The usage example, or `None` when it is absent or empty.
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref().filter(|example| !example.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_example_reads_as_none() {
        let entry = Entry::new("fas", "divine law", Some("")).unwrap();
        assert_eq!(entry.example(), None);
        let entry = Entry::new("fas", "divine law", None::<&str>).unwrap();
        assert_eq!(entry.example(), None);
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(Entry::new("   ", "divine law", None::<&str>).is_err());
        assert!(Entry::new("fas", "\t", None::<&str>).is_err());
    }

    #[test]
    fn test_serialization_omits_missing_example() {
        let entry = Entry::new("amor", "love", None::<&str>).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"word":"amor","definition":"love"}"#);
    }
}
