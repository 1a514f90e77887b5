//! Keyword search over the site's own content.
//!
//! - **index**: document store and scoring
//! - **snippet**: snippet window and `<mark>` highlighting
//! - **builder**: per-source index construction with a build report
//! - **service**: lazily built, application-scoped index
//!
//! Adapters normally reach the index through
//! [`Services`](crate::core::services::Services). The free functions
//! below serve callers without a service container, backed by one
//! process-wide service over the default content sources.

mod builder;
mod index;
mod service;
mod snippet;

pub use builder::{build_index, BuildReport, SourceOutcome, SourceReport};
pub use index::{
    tokenize, SearchIndex, CONTENT_PHRASE_BONUS, CONTENT_TERM_WEIGHT, TITLE_PHRASE_BONUS,
    TITLE_TERM_WEIGHT,
};
pub use service::SearchService;
pub use snippet::{generate_snippet, highlight, CONTEXT_BEFORE, DEFAULT_SNIPPET_LENGTH};

use crate::core::config::SearchConfig;
use crate::core::content::default_sources;
use crate::core::types::SearchResult;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<SearchService> =
    Lazy::new(|| SearchService::new(default_sources(), &SearchConfig::default()));

/// The process-wide index over the site's content, built on first call
pub fn get_search_index() -> &'static SearchIndex {
    GLOBAL.index()
}

/// Results returned by [`search`] when no limit is given
pub const DEFAULT_LIMIT: usize = 20;

/// Search the process-wide index, keeping the first `limit` results
/// (default [`DEFAULT_LIMIT`])
pub fn search<S: AsRef<str>>(
    query: &str,
    doc_types: Option<&[S]>,
    limit: Option<usize>,
) -> Vec<SearchResult> {
    GLOBAL.search(query, doc_types, limit.unwrap_or(DEFAULT_LIMIT))
}
