//! List-content command - browse the site's content sources

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::content;
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Content kinds that can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentKind {
    Blog,
    Pages,
    Faq,
    CaseStudies,
    Resources,
}

/// Arguments for the list-content command
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Kind of content to list
    #[arg(value_enum)]
    pub kind: ContentKind,

    /// Blog post slug, case study slug or industry, or resource category
    /// ("All" for everything)
    #[arg(long, short = 'f', default_value = "All")]
    pub filter: String,
}

/// One listed content item
#[derive(Debug, Serialize)]
pub struct ContentItem {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Collect the items for `args`
pub fn list_items(args: &ContentArgs) -> Vec<ContentItem> {
    match args.kind {
        ContentKind::Blog => blog_matching(&args.filter)
            .into_iter()
            .map(|p| ContentItem {
                title: p.title.to_string(),
                url: p.url(),
                detail: Some(p.date.to_string()),
            })
            .collect(),
        ContentKind::Pages => content::static_pages()
            .into_iter()
            .map(|p| ContentItem {
                title: p.title.to_string(),
                url: p.url.to_string(),
                detail: None,
            })
            .collect(),
        ContentKind::Faq => content::faq_entries()
            .into_iter()
            .map(|f| ContentItem {
                title: f.question.to_string(),
                url: f.url.to_string(),
                detail: Some(f.answer.to_string()),
            })
            .collect(),
        ContentKind::CaseStudies => case_studies_matching(&args.filter)
            .into_iter()
            .map(|c| ContentItem {
                title: c.title.to_string(),
                url: c.url(),
                detail: Some(c.industry.to_string()),
            })
            .collect(),
        ContentKind::Resources => content::resources_in_category(&args.filter)
            .into_iter()
            .map(|r| ContentItem {
                title: r.title.to_string(),
                url: r.url(),
                detail: Some(format!(
                    "{}{}",
                    r.category,
                    if r.gated { ", email required" } else { "" }
                )),
            })
            .collect(),
    }
}

fn blog_matching(filter: &str) -> Vec<content::BlogPost> {
    if filter == "All" {
        return content::blog_posts();
    }
    content::blog_post_by_slug(filter).into_iter().collect()
}

/// A case study slug selects that study; anything else is an industry
fn case_studies_matching(filter: &str) -> Vec<content::CaseStudy> {
    match content::case_study_by_slug(filter) {
        Some(study) => vec![study],
        None => content::case_studies_in_industry(filter),
    }
}

/// Execute the list-content command
pub async fn execute(
    args: ContentArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = list_items(&args);

    match format {
        OutputFormat::Human => {
            if items.is_empty() {
                println!("No content matches '{}'", colors::label(&args.filter));
            }
            for item in &items {
                match &item.detail {
                    Some(detail) => println!(
                        "{} {} {}",
                        colors::label(&item.title),
                        colors::url(&item.url),
                        colors::dim(&format!("({detail})"))
                    ),
                    None => println!("{} {}", colors::label(&item.title), colors::url(&item.url)),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}
