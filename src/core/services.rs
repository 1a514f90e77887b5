//! Unified service container for Ishtar
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::content::{default_sources, ContentSource};
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Site search over all content sources
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration over the site's content
    pub fn new(config: Config) -> Self {
        Self::with_sources(config, default_sources())
    }

    /// Create services over explicit content sources
    pub fn with_sources(config: Config, sources: Vec<Arc<dyn ContentSource>>) -> Self {
        let search = Arc::new(SearchService::new(sources, &config.search));

        Self {
            search,
            config: Arc::new(config),
        }
    }
}
