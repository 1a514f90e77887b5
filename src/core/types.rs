//! Core data types for the Ishtar site search service.
//!
//! This module defines the data structures shared by the search index,
//! the content providers and the adapters: documents, results,
//! and response payloads.

use crate::core::error::IshtarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length (in characters) of a derived fallback excerpt
pub const EXCERPT_CHARS: usize = 200;

/// Kind of site content a document was built from
///
/// The index stores the type as a plain string; this enum names the
/// tags the site's own content sources produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Blog,
    Page,
    Faq,
    Resource,
    CaseStudy,
}

impl DocType {
    /// All known document types, in index build order
    pub const ALL: [DocType; 5] = [
        DocType::Blog,
        DocType::Page,
        DocType::Faq,
        DocType::CaseStudy,
        DocType::Resource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Blog => "blog",
            DocType::Page => "page",
            DocType::Faq => "faq",
            DocType::Resource => "resource",
            DocType::CaseStudy => "case_study",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = IshtarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| IshtarError::InvalidQuery(format!("Unknown document type: {s}")))
    }
}

/// A document as handed over by a content source, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    pub url: String,
    pub doc_type: String,
    pub excerpt: Option<String>,
}

impl NewDocument {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        doc_type: DocType,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            doc_type: doc_type.as_str().to_string(),
            excerpt: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

/// One normalized unit of indexed site content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Display title (case preserved)
    pub title: String,

    /// Lowercased text used for matching
    pub content: String,

    /// Original-case text, used to render snippets
    pub raw_content: String,

    /// Relative link target
    pub url: String,

    /// Free-form type tag
    pub doc_type: String,

    /// Fallback summary shown when no term occurs in the content
    pub excerpt: String,
}

impl SearchDocument {
    /// Normalize a document for the index.
    ///
    /// A missing (or empty) excerpt is derived from the first
    /// [`EXCERPT_CHARS`] characters of the content, with `...` appended
    /// when the content was longer.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        doc_type: impl Into<String>,
        excerpt: Option<String>,
    ) -> Self {
        let raw_content = content.into();
        let excerpt = match excerpt {
            Some(e) if !e.is_empty() => e,
            _ => derive_excerpt(&raw_content),
        };

        Self {
            title: title.into(),
            content: raw_content.to_lowercase(),
            raw_content,
            url: url.into(),
            doc_type: doc_type.into(),
            excerpt,
        }
    }
}

impl From<NewDocument> for SearchDocument {
    fn from(doc: NewDocument) -> Self {
        SearchDocument::new(doc.title, doc.content, doc.url, doc.doc_type, doc.excerpt)
    }
}

fn derive_excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// A scored match returned by a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Highlighted snippet (or the stored excerpt)
    pub excerpt: String,

    /// Relevance score (higher = more relevant, relative only)
    pub score: u32,

    /// Query terms found in the title
    pub title_matches: usize,

    /// Total term occurrences found in the content
    pub content_matches: usize,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Search results
    pub results: Vec<SearchResult>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
