//! CLI adapter for Ishtar
//!
//! Provides command-line access to the site search and its content.
//! This module is parallel to `http/` - both depend on `core/` but not
//! on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Ishtar - site search for the Ishtar AI website
///
/// Search blog posts, pages, FAQ entries, case studies and resources
/// exactly as the website's search page does.
#[derive(Parser, Debug)]
#[command(name = "ishtar")]
#[command(author = "Ishtar AI")]
#[command(version)]
#[command(about = "Ishtar AI site search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the site's content
    Search(commands::SearchArgs),

    /// Build the search index and report per-source results
    #[command(name = "index-status")]
    IndexStatus(commands::StatusArgs),

    /// List site content by kind
    #[command(name = "list-content")]
    ListContent(commands::ContentArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  ishtar completions bash > ~/.local/share/bash-completion/completions/ishtar
    ///   zsh:   ishtar completions zsh > ~/.zfunc/_ishtar
    ///   fish:  ishtar completions fish > ~/.config/fish/completions/ishtar.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::IndexStatus(args) => {
            commands::status::execute(args, &services, cli.format).await
        }
        Commands::ListContent(args) => commands::content::execute(args, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
