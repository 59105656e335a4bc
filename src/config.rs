//! Command line and environment configuration.
//!
//! Everything the catalog client needs is resolved here once, at startup, and
//! handed to the client and the app explicitly.
use std::path::PathBuf;

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_LANGUAGE: &str = "id-ID";

#[derive(Debug, Parser)]
#[command(name = "tmdb_tui", version, about = "Browse TMDB movie listings in the terminal")]
pub struct Cli {
    /// TMDB v3 API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Catalog API base URL
    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Base URL poster paths are appended to
    #[arg(long, env = "TMDB_IMAGE_BASE_URL", default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_base_url: String,

    /// Language tag sent with every listing request
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Where to write logs (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub struct Config {
    pub api_key: SecretString,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let api_key = cli
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key: SecretString::from(api_key.to_string()),
            base_url: cli.base_url.trim_end_matches('/').to_string(),
            image_base_url: cli.image_base_url.clone(),
            language: cli.language.clone(),
        })
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("language", &self.language)
            .finish()
    }
}

/// Default log location: `{cache_dir}/tmdb_tui/tmdb_tui.log`.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("tmdb_tui").join("tmdb_tui.log"))
}
