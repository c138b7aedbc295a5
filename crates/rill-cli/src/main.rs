//! `rill` binary: streams synthetic game events and prints analytics.
//!
//! Logs go to stderr through `tracing`; the report goes to stdout.

use std::process::ExitCode;

use clap::Parser;
use rill_cli::config::LoggingConfig;
use rill_cli::{load_config, resolve_config_path, run, Cli, OutputFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("warn"));

    if logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config_path, config_source) =
        resolve_config_path(cli.config.as_deref(), |key| std::env::var(key).ok());

    let loaded = match load_config(&config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut config = loaded.config;
    cli.apply(&mut config);

    init_tracing(&config.logging);

    tracing::info!(
        source = config_source.as_str(),
        path = %config_path.display(),
        "resolved configuration path"
    );
    if !loaded.from_file {
        tracing::info!(path = %config_path.display(), "config file not found, using defaults");
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = std::io::stdout();
    if let Err(e) = run(&config, format, &mut stdout.lock()) {
        tracing::error!(error = %e, "rill run failed");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
