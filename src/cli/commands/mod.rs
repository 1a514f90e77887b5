//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod content;
pub mod search;
pub mod status;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use content::ContentArgs;
pub use search::SearchArgs;
pub use status::StatusArgs;
