//! Site content providers
//!
//! Every section of the site that takes part in search is exposed as a
//! [`ContentSource`]. A source turns its records into [`NewDocument`]s;
//! the index builder feeds them to the search index one source at a
//! time, so a failing source only removes its own documents.

pub mod blog;
pub mod case_studies;
pub mod pages;
pub mod resources;

use crate::core::error::Result;
use crate::core::types::NewDocument;
use std::sync::Arc;

pub use blog::{blog_post_by_slug, blog_posts, BlogPost, BlogSource};
pub use case_studies::{
    case_studies, case_studies_in_industry, case_study_by_slug, CaseStudy, CaseStudySource,
};
pub use pages::{faq_entries, static_pages, FaqEntry, FaqSource, PageSource, StaticPage};
pub use resources::{
    resource_categories, resources, resources_in_category, Resource, ResourceSource,
};

/// A provider of searchable documents
pub trait ContentSource: Send + Sync {
    /// Short name used in logs and build reports
    fn name(&self) -> &str;

    /// Produce this source's documents
    fn documents(&self) -> Result<Vec<NewDocument>>;
}

/// The site's content sources, in index build order
pub fn default_sources() -> Vec<Arc<dyn ContentSource>> {
    vec![
        Arc::new(BlogSource),
        Arc::new(PageSource),
        Arc::new(FaqSource),
        Arc::new(CaseStudySource),
        Arc::new(ResourceSource),
    ]
}
