//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Documents, results, response payloads
//! - **xdg**: XDG directory handling
//! - **content**: The site's content sources
//! - **search**: Keyword index, scoring and snippets
//! - **services**: Unified service container

pub mod config;
pub mod content;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IshtarError, Result};
pub use services::Services;
