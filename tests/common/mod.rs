// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries but are used in others
#[allow(unused_imports)]
pub use fixtures::{FailingSource, StaticSource};
#[allow(unused_imports)]
pub use helpers::{create_services_with_sources, create_test_services, index_with, rag_guide};
