//! Snippet extraction and term highlighting.
//!
//! A snippet is a window of a document's content centered on the first
//! query term occurrence, with every term occurrence wrapped in `<mark>`.
//! All window arithmetic is in characters, never bytes, so multi-byte
//! content can't split a code point.

use crate::core::types::SearchDocument;
use regex::{Regex, RegexBuilder};

/// Characters of context kept before the first match
pub const CONTEXT_BEFORE: usize = 50;

/// Default window length after the first match
pub const DEFAULT_SNIPPET_LENGTH: usize = 200;

const ELLIPSIS: &str = "...";

/// Build the highlighted snippet for `doc`.
///
/// Falls back to the stored excerpt (unhighlighted) when no term occurs
/// in the content, which happens for title-only matches.
pub fn generate_snippet(doc: &SearchDocument, terms: &[String], max_length: usize) -> String {
    if doc.content.is_empty() {
        return doc.excerpt.clone();
    }

    let first_match = terms.iter().filter_map(|t| doc.content.find(t.as_str())).min();
    let Some(byte_pos) = first_match else {
        return doc.excerpt.clone();
    };

    let match_pos = doc.content[..byte_pos].chars().count();
    let total = doc.content.chars().count();
    let start = match_pos.saturating_sub(CONTEXT_BEFORE);
    let end = total.min(match_pos + max_length);

    // Lowercasing can change the character count for a handful of code
    // points; the original-case text is only usable when it lines up.
    let display = if doc.raw_content.chars().count() == total {
        doc.raw_content.as_str()
    } else {
        doc.content.as_str()
    };

    let mut snippet = highlight(char_slice(display, start, end), terms);

    if start > 0 {
        snippet.insert_str(0, ELLIPSIS);
    }
    if end < total {
        snippet.push_str(ELLIPSIS);
    }

    snippet
}

/// Wrap every case-insensitive occurrence of any term in `<mark>` tags.
///
/// Terms are matched in a single pass, longest first, so a term that is
/// a substring of another never nests tags.
pub fn highlight(text: &str, terms: &[String]) -> String {
    match term_pattern(terms) {
        Some(re) => re.replace_all(text, "<mark>$0</mark>").into_owned(),
        None => text.to_string(),
    }
}

fn term_pattern(terms: &[String]) -> Option<Regex> {
    let mut unique: Vec<&str> = terms
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    if unique.is_empty() {
        return None;
    }
    unique.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    unique.dedup();

    let alternation = unique
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&alternation).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!("Skipping highlighting, pattern rejected: {}", e);
            None
        }
    }
}

/// Slice `s` by character positions `[start, end)`.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    let from = byte_at(start);
    let to = byte_at(end).max(from);
    &s[from..to]
}
