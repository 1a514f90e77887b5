//! Ishtar CLI - Command-line interface for the site search
//!
//! Runs the same search the website's search page uses, without a
//! server.
//!
//! # Examples
//!
//! ```bash
//! # Search everything
//! ishtar search "rag copilots"
//!
//! # Only FAQ entries, top 5
//! ishtar search "implementation" --type faq --limit 5
//!
//! # Check that every content source made it into the index
//! ishtar index-status --strict
//!
//! # Show configuration
//! ishtar show-config
//! ```

use clap::Parser;
use ishtar::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
