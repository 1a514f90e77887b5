//! Search command - search the site's content

use crate::cli::output::{colors, render_marks};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::DocType;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (whitespace-separated terms)
    pub query: String,

    /// Restrict to document types (repeatable)
    #[arg(long = "type", short = 't', value_parser = parse_doc_type)]
    pub types: Vec<DocType>,

    /// Maximum number of results (default from config)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show result URLs (no snippets)
    #[arg(long)]
    pub urls_only: bool,
}

fn parse_doc_type(s: &str) -> Result<DocType, String> {
    s.parse().map_err(|e: crate::core::error::IshtarError| e.to_string())
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub title: String,
    pub url: String,
    /// Absolute link on the public site
    pub link: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Run the search and shape the results for output
pub fn search_output(args: &SearchArgs, services: &Services) -> SearchResponseOutput {
    let site = &services.config.site;
    let type_names: Vec<&str> = args.types.iter().map(DocType::as_str).collect();
    let response = services
        .search
        .search_response(&args.query, Some(&type_names[..]), args.limit);

    SearchResponseOutput {
        query: args.query.clone(),
        total_results: response.count,
        results: response
            .results
            .into_iter()
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                link: site.absolute_url(&r.url),
                title: r.title,
                url: r.url,
                doc_type: r.doc_type,
                score: r.score,
                excerpt: if args.urls_only { None } else { Some(r.excerpt) },
            })
            .collect(),
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = search_output(&args, services);
    let site_name = &services.config.site.name;

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No results found on {} for '{}'",
                    site_name,
                    colors::label(&args.query)
                );
            } else {
                println!(
                    "Found {} result(s) on {} for '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    site_name,
                    colors::label(&args.query)
                );

                for result in &output.results {
                    if args.urls_only {
                        println!("{}", colors::url(&result.link));
                        continue;
                    }
                    println!(
                        "[{}] {} {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::label(&result.title),
                        colors::doc_type(&result.doc_type),
                        colors::dim(&format!("(score: {})", result.score))
                    );
                    println!("    {}", colors::url(&result.link));
                    if let Some(excerpt) = &result.excerpt {
                        println!("    {}", render_marks(excerpt));
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
