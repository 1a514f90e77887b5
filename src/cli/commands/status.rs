//! Index status command - build the index and show what went into it

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::SourceOutcome;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the index-status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Exit with an error when any content source failed
    #[arg(long)]
    pub strict: bool,
}

/// Execute the index-status command
pub async fn execute(
    args: StatusArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = services.search.warm();

    match format {
        OutputFormat::Human => {
            output::print_header("Search index");
            println!(
                "  Documents: {}",
                colors::number(&report.documents.to_string())
            );
            println!(
                "  Built: {} (in {})",
                output::format_relative_time(&report.built_at),
                output::format_duration(report.duration_ms as f64 / 1000.0)
            );
            println!(
                "  Sources: {}/{}",
                colors::number(&report.succeeded().to_string()),
                report.sources.len()
            );

            for source in &report.sources {
                match &source.outcome {
                    SourceOutcome::Indexed { documents } => println!(
                        "    {} {} {}",
                        colors::success("ok"),
                        colors::label(&source.source),
                        colors::dim(&format!("({documents} documents)"))
                    ),
                    SourceOutcome::Failed { error } => {
                        output::print_warning(&format!("{}: {}", source.source, error))
                    }
                }
            }

            if report.is_complete() {
                output::print_success("All content sources indexed");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }

    if args.strict && !report.is_complete() {
        return Err(format!(
            "{} of {} content sources failed",
            report.failed().len(),
            report.sources.len()
        )
        .into());
    }

    Ok(())
}
