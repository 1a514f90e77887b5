// Test content sources

use ishtar::core::content::ContentSource;
use ishtar::core::error::{IshtarError, Result};
use ishtar::core::types::NewDocument;

/// Content source serving a fixed list of documents
#[allow(dead_code)]
pub struct StaticSource {
    name: String,
    documents: Vec<NewDocument>,
}

#[allow(dead_code)]
impl StaticSource {
    pub fn new(name: &str, documents: Vec<NewDocument>) -> Self {
        Self {
            name: name.to_string(),
            documents,
        }
    }
}

impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn documents(&self) -> Result<Vec<NewDocument>> {
        Ok(self.documents.clone())
    }
}

/// Content source that always fails to load
#[allow(dead_code)]
pub struct FailingSource(pub &'static str);

impl ContentSource for FailingSource {
    fn name(&self) -> &str {
        self.0
    }

    fn documents(&self) -> Result<Vec<NewDocument>> {
        Err(IshtarError::unavailable(self.0, "backing store offline"))
    }
}
