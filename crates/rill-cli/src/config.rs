//! Configuration loading from file and environment variables.

use std::path::{Path, PathBuf};

use rill_stream::OverflowPolicy;
use rill_types::{Catalog, TypesError, DEFAULT_ACTIONS, DEFAULT_ACTORS};
use serde::Deserialize;
use thiserror::Error;

/// Config file consulted when neither `--config` nor `RILL_CONFIG_PATH` is set.
pub const DEFAULT_CONFIG_PATH: &str = "rill.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// What to stream and how much of it.
    #[serde(default)]
    pub stream: StreamConfig,

    /// Actor and action rosters for generated events.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Stream sizes and numeric policies.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// Number of game events to generate and analyze.
    #[serde(default = "default_event_count")]
    pub event_count: u64,

    /// Number of leading events echoed before the analytics summary.
    #[serde(default = "default_preview_events")]
    pub preview_events: u64,

    /// Length of the growth sequence prefix to show.
    #[serde(default = "default_fibonacci_terms")]
    pub fibonacci_terms: usize,

    /// Length of the prime sequence prefix to show.
    #[serde(default = "default_prime_terms")]
    pub prime_terms: usize,

    /// Overflow behavior of the growth sequence.
    #[serde(default)]
    pub overflow: OverflowPolicy,

    /// Optional upper bound on records the analyzer will accept.
    #[serde(default)]
    pub record_ceiling: Option<u64>,
}

/// Actor and action rosters, validated into a [`Catalog`] at run time.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Player names, in emission order.
    #[serde(default = "default_actors")]
    pub actors: Vec<String>,

    /// Action names, in emission order.
    #[serde(default = "default_actions")]
    pub actions: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "rill_stream=trace,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_event_count() -> u64 {
    1000
}

fn default_preview_events() -> u64 {
    3
}

fn default_fibonacci_terms() -> usize {
    10
}

fn default_prime_terms() -> usize {
    5
}

fn default_actors() -> Vec<String> {
    DEFAULT_ACTORS.iter().map(|s| s.to_string()).collect()
}

fn default_actions() -> Vec<String> {
    DEFAULT_ACTIONS.iter().map(|s| s.to_string()).collect()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            event_count: default_event_count(),
            preview_events: default_preview_events(),
            fibonacci_terms: default_fibonacci_terms(),
            prime_terms: default_prime_terms(),
            overflow: OverflowPolicy::default(),
            record_ceiling: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            actors: default_actors(),
            actions: default_actions(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl CatalogConfig {
    /// Validates the rosters into a [`Catalog`].
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::EmptyCatalog`] if either roster is empty.
    pub fn build(&self) -> Result<Catalog, TypesError> {
        Catalog::new(self.actors.iter().cloned(), self.actions.iter().cloned())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    CliArg,
    /// Read from `RILL_CONFIG_PATH`.
    EnvVar,
    /// Fell back to [`DEFAULT_CONFIG_PATH`].
    Default,
}

impl ConfigSource {
    /// Returns the label used in startup logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CliArg => "cli-arg",
            Self::EnvVar => "env-var",
            Self::Default => "default",
        }
    }
}

/// Picks the config path: explicit argument, then `RILL_CONFIG_PATH`, then
/// [`DEFAULT_CONFIG_PATH`].
pub fn resolve_config_path(
    cli_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> (PathBuf, ConfigSource) {
    if let Some(path) = cli_path.filter(|p| !p.as_os_str().is_empty()) {
        return (path.to_path_buf(), ConfigSource::CliArg);
    }

    if let Some(path) = env("RILL_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (PathBuf::from(path), ConfigSource::EnvVar);
        }
    }

    (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default)
}

/// Configuration plus whether it came from a file on disk.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Effective configuration after environment overrides.
    pub config: Config,
    /// `false` when the file was missing and defaults were used.
    pub from_file: bool,
}

/// Loads configuration from a TOML file, falling back to defaults when the
/// file does not exist, then applies process environment overrides.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let file = read_config_file(path)?;
    let from_file = file.is_some();
    let mut config = file.unwrap_or_default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(LoadedConfig { config, from_file })
}

/// Reads and parses `path`. Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn read_config_file(path: &Path) -> Result<Option<Config>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(toml::from_str(&contents)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::FileRead(e)),
    }
}

/// Applies environment variable overrides read through `env`.
///
/// - `RILL_EVENT_COUNT` overrides `stream.event_count`
/// - `RILL_LOG_LEVEL` overrides `logging.level`
/// - `RILL_LOG_JSON` overrides `logging.json` (set to "true" or "1" to enable)
///
/// Unparseable numeric values are ignored.
pub fn apply_env_overrides(config: &mut Config, env: impl Fn(&str) -> Option<String>) {
    if let Some(count) = env("RILL_EVENT_COUNT") {
        if let Ok(parsed) = count.trim().parse() {
            config.stream.event_count = parsed;
        }
    }
    if let Some(level) = env("RILL_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env("RILL_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
}
