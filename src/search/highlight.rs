//! Match highlighting for rendered result text.
//!
//! [`highlight`] splits a field into fragments marking every non-overlapping,
//! case-insensitive occurrence of the query. The query is matched literally; it is
//! never interpreted as a pattern. Fragments borrow from the input text, so match
//! fragments keep the casing of the text, not of the query, and concatenating all
//! fragments gives back the input.
//!
//! # Examples
//!
//! ```
//! use verborum::search::highlight::{highlight, to_html};
//!
//! let fragments = highlight("Bellum gerere", "bell");
//! assert_eq!(fragments[0].text, "Bell");
//! assert!(fragments[0].is_match);
//! assert_eq!(fragments[1].text, "um gerere");
//! assert_eq!(to_html(&fragments), "<mark>Bell</mark>um gerere");
//! ```

use serde::Serialize;

use crate::storage::Entry;
use crate::utils::html_escape_text;

/// A piece of field text, tagged as matching the query or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightFragment<'t> {
    pub text: &'t str,
    pub is_match: bool,
}

impl<'t> HighlightFragment<'t> {
    fn plain(text: &'t str) -> Self {
        Self { text, is_match: false }
    }

    fn matched(text: &'t str) -> Self {
        Self { text, is_match: true }
    }
}

/// Splits `text` around case-insensitive occurrences of `query`.
///
/// A blank query produces a single non-match fragment holding all of `text`.
/// Otherwise no fragment is empty, and an empty `text` produces no fragments.
pub fn highlight<'t>(text: &'t str, query: &str) -> Vec<HighlightFragment<'t>> {
    if query.trim().is_empty() {
        return vec![HighlightFragment::plain(text)];
    }
    let folded_query: Vec<char> = query.chars().flat_map(fold_char).collect();

    let mut fragments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        match match_len_at(&text[pos..], &folded_query) {
            Some(len) => {
                if plain_start < pos {
                    fragments.push(HighlightFragment::plain(&text[plain_start..pos]));
                }
                fragments.push(HighlightFragment::matched(&text[pos..pos + len]));
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if plain_start < text.len() {
        fragments.push(HighlightFragment::plain(&text[plain_start..]));
    }
    fragments
}

/// Lowercases one character, folding final sigma into medial sigma.
///
/// `str::to_lowercase` picks `ς` or `σ` for `Σ` by position in the word, which a
/// per-character scan cannot see; folding both to `σ` keeps every search hit
/// highlightable.
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|lower| if lower == 'ς' { 'σ' } else { lower })
}

/// Byte length of the prefix of `haystack` whose lowercase form equals `folded_query`.
///
/// Matches end on a character boundary of `haystack`; a character whose lowercase
/// expansion only partly overlaps the query does not match.
fn match_len_at(haystack: &str, folded_query: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in haystack.char_indices() {
        for lower in fold_char(ch) {
            if folded_query.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == folded_query.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

/// Renders fragments as HTML, wrapping matches in `<mark>`.
pub fn to_html(fragments: &[HighlightFragment]) -> String {
    let mut html = String::new();
    for fragment in fragments {
        if fragment.is_match {
            html.push_str("<mark>");
            html_escape_text(fragment.text, &mut html);
            html.push_str("</mark>");
        } else {
            html_escape_text(fragment.text, &mut html);
        }
    }
    html
}

/// Renders fragments as plain text, wrapping matches in the given delimiters.
pub fn to_marked_text(fragments: &[HighlightFragment], open: &str, close: &str) -> String {
    let mut marked = String::new();
    for fragment in fragments {
        if fragment.is_match {
            marked.push_str(open);
            marked.push_str(fragment.text);
            marked.push_str(close);
        } else {
            marked.push_str(fragment.text);
        }
    }
    marked
}

/// Highlighted fields of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedEntry<'t> {
    pub word: Vec<HighlightFragment<'t>>,
    pub definition: Vec<HighlightFragment<'t>>,
    pub example: Option<Vec<HighlightFragment<'t>>>,
}

/// Highlights the headword, definition and (if present) example of an entry.
pub fn highlight_entry<'t>(entry: &'t Entry, query: &str) -> HighlightedEntry<'t> {
    HighlightedEntry {
        word: highlight(entry.word(), query),
        definition: highlight(entry.definition(), query),
        example: entry.example().map(|example| highlight(example, query)),
    }
}
