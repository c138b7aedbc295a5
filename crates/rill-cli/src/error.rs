//! Error types for the command-line front end.

use crate::config::ConfigError;

/// Errors that can end a `rill` run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured catalog could not be built.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] rill_types::TypesError),

    #[error("stream error: {0}")]
    Stream(#[from] rill_stream::StreamError),

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
