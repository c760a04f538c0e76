//! Run configuration, assembled once from the environment and the command line.

use std::path::PathBuf;
use std::time::Duration;

use fluxpub_export::DataUrlPolicy;
use fluxpub_source::SourceConfig;
use url::Url;

use crate::cli::Cli;

pub const URL_VAR: &str = "MINIFLUX_URL";
pub const API_KEY_VAR: &str = "MINIFLUX_API_KEY";
pub const OUTPUT_DIR_VAR: &str = "FLUXPUB_OUTPUT_DIR";

pub const DEFAULT_OUTPUT_DIR: &str = "epubs";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} environment variable is not set")]
    MissingVar { name: &'static str },

    #[error("Invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Whether entries become one book each or share a single book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    PerEntry,
    Combined,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub output_dir: PathBuf,
    pub limit: Option<usize>,
    pub mode: OutputMode,
    pub data_urls: DataUrlPolicy,
    pub fetch_timeout: Option<Duration>,
    pub dry_run: bool,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env(cli: &Cli) -> Result<Self> {
        Self::from_env_and_args(|name| std::env::var(name).ok(), cli)
    }

    /// Build the configuration with `env` looking up environment variables.
    ///
    /// Command line flags take precedence over `FLUXPUB_OUTPUT_DIR`.
    pub fn from_env_and_args<F>(env: F, cli: &Cli) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = required(&env, URL_VAR)?;
        if let Err(error) = Url::parse(&base_url) {
            return Err(ConfigError::Invalid {
                name: URL_VAR,
                message: error.to_string(),
            });
        }
        let api_key = required(&env, API_KEY_VAR)?;

        if cli.limit == Some(0) {
            return Err(ConfigError::Invalid {
                name: "--limit",
                message: "must be at least 1".to_string(),
            });
        }
        if cli.timeout == Some(0) {
            return Err(ConfigError::Invalid {
                name: "--timeout",
                message: "must be at least 1 second".to_string(),
            });
        }

        let output_dir = cli
            .output_dir
            .clone()
            .or_else(|| optional(&env, OUTPUT_DIR_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let mode = if cli.combined {
            OutputMode::Combined
        } else {
            OutputMode::PerEntry
        };

        let data_urls = if cli.drop_data_urls {
            DataUrlPolicy::Drop
        } else {
            DataUrlPolicy::Keep
        };

        Ok(Self {
            source: SourceConfig::new(base_url, api_key),
            output_dir,
            limit: cli.limit,
            mode,
            data_urls,
            fetch_timeout: cli.timeout.map(Duration::from_secs),
            dry_run: cli.dry_run,
        })
    }
}

fn optional<F>(env: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required<F>(env: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    optional(env, name).ok_or(ConfigError::MissingVar { name })
}
