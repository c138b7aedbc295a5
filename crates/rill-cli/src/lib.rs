//! Command-line front end for the Rill streaming core.
//!
//! Builds a finite event source from configuration, streams it through the
//! analyzer, collects short prefixes of the unbounded numeric sequences and
//! renders everything as text or JSON. All stream logic lives in
//! `rill-stream`; this crate only wires configuration to it and formats the
//! results.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use cli::Cli;
pub use config::{
    load_config, resolve_config_path, Config, ConfigError, ConfigSource, LoadedConfig,
};
pub use error::CliError;
pub use report::{build_report, join_values, render_json, render_text, Report};

/// Output format for [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One pretty-printed JSON document.
    Json,
}

/// Runs the full demonstration against `config` and writes the report.
///
/// # Errors
///
/// Returns `CliError` if the catalog is invalid, the analyzer rejects the
/// stream, or the report cannot be written.
pub fn run(
    config: &Config,
    format: OutputFormat,
    out: &mut impl std::io::Write,
) -> Result<(), CliError> {
    let catalog = config.catalog.build()?;
    let report = build_report(&config.stream, catalog)?;

    match format {
        OutputFormat::Text => render_text(&report, out)?,
        OutputFormat::Json => render_json(&report, out)?,
    }

    Ok(())
}
