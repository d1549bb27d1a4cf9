//! Configuration management for the search index builder.
//!
//! This module handles loading and validating configuration from environment
//! variables (optionally seeded from a `.env` file). Site metadata is resolved
//! here once, at startup, and handed to consumers explicitly.

use crate::error::{ConfigError, ConfigResult};
use crate::search::FailurePolicy;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

/// Version reported when the version file cannot be read.
pub const VERSION_UNAVAILABLE: &str = "unavailable";

pub const DEFAULT_SITE_TITLE: &str = "Aaron Brazier";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Senior Data Scientist specializing in machine learning, oil & gas analytics, and homelab infrastructure. Portfolio, blog, and project showcase.";
pub const PRODUCTION_SITE_URL: &str = "https://aaronbrazier.com";
pub const DEVELOPMENT_SITE_URL: &str = "http://localhost:8080";

/// Site-wide metadata published next to the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub version: String,
}

impl SiteMetadata {
    /// Read the site version from a file, falling back to
    /// [`VERSION_UNAVAILABLE`] if it is missing, unreadable or blank.
    pub fn read_version(path: &Path) -> String {
        match std::fs::read_to_string(path) {
            Ok(contents) if !contents.trim().is_empty() => contents.trim().to_string(),
            Ok(_) => {
                tracing::warn!(path = %path.display(), "Version file is empty");
                VERSION_UNAVAILABLE.to_string()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Version file unreadable");
                VERSION_UNAVAILABLE.to_string()
            }
        }
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        SiteMetadata {
            title: DEFAULT_SITE_TITLE.to_string(),
            description: DEFAULT_SITE_DESCRIPTION.to_string(),
            url: DEVELOPMENT_SITE_URL.to_string(),
            version: VERSION_UNAVAILABLE.to_string(),
        }
    }
}

/// Configuration for the search index builder.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the content store (default: "src/content")
    pub content_dir: PathBuf,

    /// Directory receiving search-index.json and site.json (default: "dist")
    pub output_dir: PathBuf,

    /// Behavior on content load failures (default: all-or-nothing)
    pub failure_policy: FailurePolicy,

    /// Pretty-print JSON output (default: false)
    pub pretty_output: bool,

    /// Site metadata, resolved once at startup
    pub site: SiteMetadata,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTENT_DIR`: content store root (default: "src/content")
    /// - `OUTPUT_DIR`: build output directory (default: "dist")
    /// - `SEARCH_INDEX_FAILURE_POLICY`: "all-or-nothing" or "partial"
    /// - `SEARCH_INDEX_PRETTY`: pretty-print JSON (default: false)
    /// - `SITE_TITLE`, `SITE_DESCRIPTION`: site metadata
    /// - `SITE_URL`: public site URL; defaults by `NODE_ENV`
    /// - `SITE_VERSION_FILE`: file holding the site version (default: "VERSION")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; a missing file is not an error
        let _ = dotenvy::dotenv();

        let content_dir = PathBuf::from(Self::env_or("CONTENT_DIR", "src/content"));
        let output_dir = PathBuf::from(Self::env_or("OUTPUT_DIR", "dist"));

        let failure_policy = match env::var("SEARCH_INDEX_FAILURE_POLICY") {
            Ok(val) => val
                .parse::<FailurePolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "SEARCH_INDEX_FAILURE_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => FailurePolicy::default(),
        };

        let pretty_output = Self::parse_env_bool("SEARCH_INDEX_PRETTY", false)?;

        let site_url = Self::resolve_site_url()?;
        let version_file = PathBuf::from(Self::env_or("SITE_VERSION_FILE", "VERSION"));

        let site = SiteMetadata {
            title: Self::env_or("SITE_TITLE", DEFAULT_SITE_TITLE),
            description: Self::env_or("SITE_DESCRIPTION", DEFAULT_SITE_DESCRIPTION),
            url: site_url,
            version: SiteMetadata::read_version(&version_file),
        };

        let log_level = Self::env_or("LOG_LEVEL", "info");

        Ok(Config {
            content_dir,
            output_dir,
            failure_policy,
            pretty_output,
            site,
            log_level,
        })
    }

    /// `SITE_URL` if set, otherwise the production or development URL
    /// depending on `NODE_ENV`.
    fn resolve_site_url() -> ConfigResult<String> {
        let url = match env::var("SITE_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => match env::var("NODE_ENV").as_deref() {
                Ok("production") => PRODUCTION_SITE_URL.to_string(),
                _ => DEVELOPMENT_SITE_URL.to_string(),
            },
        };

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SITE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        Ok(url)
    }

    fn env_or(var_name: &str, default: &str) -> String {
        env::var(var_name).unwrap_or_else(|_| default.to_string())
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a boolean, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: PathBuf::from("src/content"),
            output_dir: PathBuf::from("dist"),
            failure_policy: FailurePolicy::default(),
            pretty_output: false,
            site: SiteMetadata::default(),
            log_level: "info".to_string(),
        }
    }
}
