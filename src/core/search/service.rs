//! Application-scoped search service.
//!
//! Owns the site's search index. The index is built on first use (or
//! eagerly through [`SearchService::warm`]) and lives for the lifetime of
//! the service; it is never rebuilt. Concurrent first callers block on
//! the same initialization instead of building twice.

use crate::core::config::SearchConfig;
use crate::core::content::ContentSource;
use crate::core::search::builder::{build_index, BuildReport};
use crate::core::search::index::SearchIndex;
use crate::core::types::{SearchResponse, SearchResult};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Instant;

struct Built {
    index: SearchIndex,
    report: BuildReport,
}

/// Site search service
pub struct SearchService {
    sources: Vec<Arc<dyn ContentSource>>,
    default_limit: usize,
    max_limit: usize,
    snippet_length: usize,
    built: OnceCell<Built>,
}

impl SearchService {
    /// Create a new search service over `sources`
    pub fn new(sources: Vec<Arc<dyn ContentSource>>, config: &SearchConfig) -> Self {
        Self {
            sources,
            default_limit: config.default_limit,
            max_limit: config.max_limit,
            snippet_length: config.snippet_length,
            built: OnceCell::new(),
        }
    }

    fn built(&self) -> &Built {
        self.built.get_or_init(|| {
            let (index, report) = build_index(&self.sources, self.snippet_length);
            Built { index, report }
        })
    }

    /// The index, built on first access
    pub fn index(&self) -> &SearchIndex {
        &self.built().index
    }

    /// Build the index now and return the build report
    pub fn warm(&self) -> &BuildReport {
        &self.built().report
    }

    /// Whether the index has been built yet
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    /// Resolve a requested limit against the configured default and cap
    pub fn effective_limit(&self, limit: Option<usize>) -> usize {
        limit.unwrap_or(self.default_limit).min(self.max_limit)
    }

    /// Search all content, then keep the first `limit` results.
    ///
    /// Every document in scope is scored before truncation, so the result
    /// is always a prefix of the full ranking.
    pub fn search<S: AsRef<str>>(
        &self,
        query: &str,
        doc_types: Option<&[S]>,
        limit: usize,
    ) -> Vec<SearchResult> {
        let mut results = self.index().search(query, doc_types);
        results.truncate(limit);
        results
    }

    /// Search with an adapter-supplied limit (defaulted and capped) and
    /// wrap the results with timing
    pub fn search_response<S: AsRef<str>>(
        &self,
        query: &str,
        doc_types: Option<&[S]>,
        limit: Option<usize>,
    ) -> SearchResponse {
        let start = Instant::now();
        let results = self.search(query, doc_types, self.effective_limit(limit));
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            query = %query,
            results = results.len(),
            duration_ms = duration_ms,
            "Search executed"
        );

        SearchResponse {
            query: query.to_string(),
            count: results.len(),
            results,
            duration_ms,
        }
    }
}
