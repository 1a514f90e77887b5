//! HTTP request handlers for the Ishtar API
//!
//! Implements handlers for the REST endpoints: health, search and
//! index status.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::core::error::IshtarError;
use crate::core::search::BuildReport;
use crate::core::services::Services;
use crate::core::types::{DocType, HealthResponse, SearchResponse};

/// Query string of the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,

    /// Restrict results to one document type
    #[serde(rename = "type")]
    pub doc_type: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search handler
///
/// Runs a keyword search over the site's content. A missing or blank
/// query yields an empty result list. An unknown `type` is ignored
/// and the search covers every type. Without `limit`, up to
/// `max_limit` results are returned.
///
/// # Errors
///
/// - `InvalidQuery`: Query exceeds the configured maximum length
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, IshtarError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();

    let max_len = services.config.search.max_query_length;
    if query.chars().count() > max_len {
        return Err(IshtarError::InvalidQuery(format!(
            "Query exceeds {max_len} characters"
        )));
    }

    let doc_types: Option<Vec<DocType>> = params.doc_type.as_deref().and_then(|t| {
        match t.parse::<DocType>() {
            Ok(doc_type) => Some(vec![doc_type]),
            Err(_) => {
                tracing::debug!("Ignoring unknown document type filter '{}'", t);
                None
            }
        }
    });
    // The site's search page shows up to the cap when no limit is asked for
    let limit = params.limit.unwrap_or(services.config.search.max_limit);

    let type_names: Option<Vec<&str>> = doc_types
        .as_ref()
        .map(|types| types.iter().map(DocType::as_str).collect());

    let response =
        services
            .search
            .search_response(query, type_names.as_deref(), Some(limit));

    Ok(Json(response))
}

/// Index status handler
///
/// Returns the index build report, building the index first if no
/// search has done so yet.
pub async fn index_status_handler(State(services): State<Arc<Services>>) -> Json<BuildReport> {
    Json(services.search.warm().clone())
}
