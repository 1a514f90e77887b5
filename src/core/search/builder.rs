//! Index construction from content sources.
//!
//! Each source contributes independently: a source that fails is logged
//! and recorded in the [`BuildReport`], and the remaining sources are
//! still indexed.

use crate::core::content::ContentSource;
use crate::core::search::index::SearchIndex;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Outcome of indexing one content source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceOutcome {
    Indexed { documents: usize },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    #[serde(flatten)]
    pub outcome: SourceOutcome,
}

/// Summary of an index build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub built_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// Total documents in the index
    pub documents: usize,
    pub sources: Vec<SourceReport>,
}

impl BuildReport {
    /// Number of sources that contributed documents
    pub fn succeeded(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.outcome, SourceOutcome::Indexed { .. }))
            .count()
    }

    /// Sources that failed to load
    pub fn failed(&self) -> Vec<&SourceReport> {
        self.sources
            .iter()
            .filter(|s| matches!(s.outcome, SourceOutcome::Failed { .. }))
            .collect()
    }

    /// True when every source was indexed
    pub fn is_complete(&self) -> bool {
        self.succeeded() == self.sources.len()
    }
}

/// Build a fresh index from `sources`, in order
pub fn build_index(
    sources: &[Arc<dyn ContentSource>],
    snippet_length: usize,
) -> (SearchIndex, BuildReport) {
    let start = Instant::now();
    let mut index = SearchIndex::with_snippet_length(snippet_length);
    let mut reports = Vec::with_capacity(sources.len());

    for source in sources {
        let outcome = match source.documents() {
            Ok(docs) => {
                let count = docs.len();
                for doc in docs {
                    index.push(doc.into());
                }
                tracing::debug!("Indexed source '{}' ({} documents)", source.name(), count);
                SourceOutcome::Indexed { documents: count }
            }
            Err(e) => {
                tracing::warn!("Skipping source '{}': {}", source.name(), e);
                SourceOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        reports.push(SourceReport {
            source: source.name().to_string(),
            outcome,
        });
    }

    let report = BuildReport {
        built_at: Utc::now(),
        duration_ms: start.elapsed().as_millis() as u64,
        documents: index.len(),
        sources: reports,
    };

    tracing::info!(
        documents = report.documents,
        sources_ok = report.succeeded(),
        sources_total = report.sources.len(),
        duration_ms = report.duration_ms,
        "Search index built"
    );

    (index, report)
}
