//! Configuration management for the Ishtar site search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{IshtarError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Number of results returned when no limit is given
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum query string length (characters)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Snippet window length after the first match (characters)
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
}

/// Site identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Public base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl SiteConfig {
    /// Join a site-relative path such as `/blog/slug` onto the base URL
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    50
}

fn default_max_query_length() -> usize {
    500
}

fn default_snippet_length() -> usize {
    200
}

fn default_site_name() -> String {
    "Ishtar AI".to_string()
}

fn default_base_url() -> String {
    "https://ishtar-ai.com".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_query_length: default_max_query_length(),
            snippet_length: default_snippet_length(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IshtarError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. ISHTAR_CONFIG env var
    /// 2. XDG config file (~/.config/ishtar/config.toml)
    /// 3. ./ishtar.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("ISHTAR_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("ishtar.toml").exists() {
                Self::from_file("ishtar.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("ISHTAR_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("ISHTAR_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Search configuration
        if let Ok(limit) = env::var("ISHTAR_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max_limit) = env::var("ISHTAR_MAX_LIMIT") {
            if let Ok(l) = max_limit.parse() {
                self.search.max_limit = l;
            }
        }
        if let Ok(max_query_len) = env::var("ISHTAR_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        if let Ok(snippet_len) = env::var("ISHTAR_SNIPPET_LENGTH") {
            if let Ok(len) = snippet_len.parse() {
                self.search.snippet_length = len;
            }
        }

        // Site configuration
        if let Ok(base_url) = env::var("ISHTAR_BASE_URL") {
            self.site.base_url = base_url.trim_end_matches('/').to_string();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(IshtarError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(IshtarError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(IshtarError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(IshtarError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.snippet_length == 0 {
            return Err(IshtarError::ConfigError(
                "Snippet length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Snippet length: {} chars", self.search.snippet_length);
        tracing::info!("  Site: {} ({})", self.site.name, self.site.base_url);
    }
}
