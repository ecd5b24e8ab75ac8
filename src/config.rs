//! Run configuration: optional YAML file merged under command-line flags.
//!
//! ```yaml
//! manifest: links.txt
//! output_dir: out
//! positive_lexicon: lexicons/positive-words.txt
//! negative_lexicon: lexicons/negative-words.txt
//! fetch_failure: skip      # or `halt` (default)
//! verify_lexicons: true
//! user_agent: "news_lexicon/0.1"
//! ```

use crate::cli::Cli;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const DEFAULT_USER_AGENT: &str = concat!("news_lexicon/", env!("CARGO_PKG_VERSION"));

/// What to do when an article cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchFailurePolicy {
    /// Abort the run, reporting the failing URL.
    #[default]
    Halt,
    /// Log the failure and continue with the next manifest line.
    Skip,
}

/// Contents of the YAML config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub manifest: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub positive_lexicon: Option<PathBuf>,
    pub negative_lexicon: Option<PathBuf>,
    pub fetch_failure: Option<FetchFailurePolicy>,
    pub verify_lexicons: Option<bool>,
    pub user_agent: Option<String>,
}

impl AppConfig {
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// Read and parse a config file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let config = AppConfig::parse(&text, path)?;
    info!("Loaded configuration");
    Ok(config)
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub manifest: PathBuf,
    pub output_dir: PathBuf,
    pub positive_lexicon: PathBuf,
    pub negative_lexicon: PathBuf,
    pub fetch_failure: FetchFailurePolicy,
    pub verify_lexicons: bool,
    pub user_agent: String,
}

impl Settings {
    /// Merge command-line values over the config file.
    pub fn resolve(cli: &Cli, file: AppConfig) -> Result<Self, ConfigError> {
        let fetch_failure = if cli.skip_failed_fetches {
            FetchFailurePolicy::Skip
        } else {
            file.fetch_failure.unwrap_or_default()
        };
        let verify_lexicons = !cli.no_verify_lexicons && file.verify_lexicons.unwrap_or(true);

        Ok(Self {
            manifest: cli
                .manifest
                .clone()
                .or(file.manifest)
                .ok_or(ConfigError::Missing("manifest"))?,
            output_dir: cli
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            positive_lexicon: cli
                .positive_lexicon
                .clone()
                .or(file.positive_lexicon)
                .ok_or(ConfigError::Missing("positive_lexicon"))?,
            negative_lexicon: cli
                .negative_lexicon
                .clone()
                .or(file.negative_lexicon)
                .ok_or(ConfigError::Missing("negative_lexicon"))?,
            fetch_failure,
            verify_lexicons,
            user_agent: file
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}
