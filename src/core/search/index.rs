//! In-memory keyword index over site content.
//!
//! Scoring is a plain weighted substring count:
//!
//! | signal                              | weight           |
//! |-------------------------------------|------------------|
//! | term contained in title             | 10 per term      |
//! | term occurrence in content          | 2 per occurrence |
//! | whole query contained in title      | 20               |
//! | whole query contained in content    | 10               |
//!
//! Repeated query terms are scored once per occurrence in the query.

use crate::core::search::snippet::{generate_snippet, DEFAULT_SNIPPET_LENGTH};
use crate::core::types::{SearchDocument, SearchResult};

pub const TITLE_TERM_WEIGHT: u32 = 10;
pub const CONTENT_TERM_WEIGHT: u32 = 2;
pub const TITLE_PHRASE_BONUS: u32 = 20;
pub const CONTENT_PHRASE_BONUS: u32 = 10;

/// Simple in-memory search index
#[derive(Debug, Clone)]
pub struct SearchIndex {
    documents: Vec<SearchDocument>,
    snippet_length: usize,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::with_snippet_length(DEFAULT_SNIPPET_LENGTH)
    }

    pub fn with_snippet_length(snippet_length: usize) -> Self {
        Self {
            documents: Vec::new(),
            snippet_length,
        }
    }

    /// Add a document to the index.
    ///
    /// Inputs are accepted as-is; an empty title and content produce a
    /// document that never matches a non-empty query.
    pub fn add_document(
        &mut self,
        title: &str,
        content: &str,
        url: &str,
        doc_type: &str,
        excerpt: Option<&str>,
    ) {
        self.push(SearchDocument::new(
            title,
            content,
            url,
            doc_type,
            excerpt.map(str::to_string),
        ));
    }

    /// Add an already normalized document
    pub fn push(&mut self, document: SearchDocument) {
        self.documents.push(document);
    }

    pub fn documents(&self) -> &[SearchDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Search the index for documents matching `query`.
    ///
    /// `doc_types` restricts scoring to documents of the given types; `None`
    /// or an empty slice searches everything. Results are sorted by score
    /// descending; equal scores keep insertion order.
    pub fn search<S: AsRef<str>>(&self, query: &str, doc_types: Option<&[S]>) -> Vec<SearchResult> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }
        let terms = tokenize(&query_lower);
        let filter = doc_types.filter(|types| !types.is_empty());

        let mut results: Vec<SearchResult> = self
            .documents
            .iter()
            .filter(|doc| {
                filter.map_or(true, |types| {
                    types.iter().any(|t| t.as_ref() == doc.doc_type)
                })
            })
            .filter_map(|doc| self.score(doc, &query_lower, &terms))
            .collect();

        // Stable: ties stay in insertion order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }

    fn score(&self, doc: &SearchDocument, query_lower: &str, terms: &[String]) -> Option<SearchResult> {
        let title_lower = doc.title.to_lowercase();
        let mut score = 0u32;
        let mut title_matches = 0usize;
        let mut content_matches = 0usize;

        for term in terms {
            if title_lower.contains(term.as_str()) {
                title_matches += 1;
                score += TITLE_TERM_WEIGHT;
            }
        }

        for term in terms {
            let count = doc.content.matches(term.as_str()).count();
            content_matches += count;
            score += CONTENT_TERM_WEIGHT * count as u32;
        }

        if title_lower.contains(query_lower) {
            score += TITLE_PHRASE_BONUS;
        }
        if doc.content.contains(query_lower) {
            score += CONTENT_PHRASE_BONUS;
        }

        if score == 0 {
            return None;
        }

        Some(SearchResult {
            title: doc.title.clone(),
            url: doc.url.clone(),
            doc_type: doc.doc_type.clone(),
            excerpt: generate_snippet(doc, terms, self.snippet_length),
            score,
            title_matches,
            content_matches,
        })
    }
}

/// Split a lowercased query into terms on runs of whitespace.
///
/// No stemming, stopword removal or deduplication.
pub fn tokenize(query_lower: &str) -> Vec<String> {
    query_lower.split_whitespace().map(str::to_string).collect()
}
