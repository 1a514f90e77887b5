//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long, short = 'p')]
    pub paths: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: crate::core::config::Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = args.paths.then(|| {
        crate::core::xdg::XdgDirs::new()
            .config_file()
            .to_string_lossy()
            .into_owned()
    });

    let response = ConfigResponse {
        config_file,
        config: services.config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("Configuration:");
            if let Some(path) = &response.config_file {
                println!("  config_file: {path}");
            }
            println!("  server:");
            println!("    host: {}", config.server.host);
            println!("    port: {}", config.server.port);
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!("    max_limit: {}", config.search.max_limit);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("    snippet_length: {}", config.search.snippet_length);
            println!("  site:");
            println!("    name: {}", config.site.name);
            println!("    base_url: {}", config.site.base_url);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
