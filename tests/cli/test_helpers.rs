//! CLI test helpers
//!
//! Provides Arc<Services> wrappers matching CLI execute() signatures.

use crate::common::{create_services_with_sources, create_test_services, FailingSource};
use ishtar::core::content::{default_sources, ContentSource};
use ishtar::core::services::Services;
use std::sync::Arc;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(create_test_services())
}

/// Site content plus one source that fails to load
pub fn create_degraded_services() -> Arc<Services> {
    let mut sources: Vec<Arc<dyn ContentSource>> = default_sources();
    sources.push(Arc::new(FailingSource("webinars")));
    Arc::new(create_services_with_sources(sources))
}
