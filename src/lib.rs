//! Ishtar - site search for the Ishtar AI website
//!
//! Keyword search over the website's own content (blog posts, pages,
//! FAQ entries, case studies, resources), served over HTTP and from
//! the command line.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - content (site content sources)
//!   - search (index, scoring, snippets, build report)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output
//!
//! # Key Features
//!
//! - Weighted title/content term scoring with exact-phrase bonuses
//! - Highlighted, UTF-8 safe snippets
//! - Index built once, lazily, with a per-source build report
//! - A failing content source degrades coverage instead of failing search

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{IshtarError, Result};
pub use core::services::Services;
pub use core::types::*;
