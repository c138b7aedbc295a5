//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rill_stream::OverflowPolicy;

use crate::config::Config;

/// CLI wrapper for [`OverflowPolicy`] (needed for clap `ValueEnum`).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliOverflow {
    Saturate,
    Wrap,
}

impl From<CliOverflow> for OverflowPolicy {
    fn from(cli: CliOverflow) -> Self {
        match cli {
            CliOverflow::Saturate => OverflowPolicy::Saturate,
            CliOverflow::Wrap => OverflowPolicy::Wrap,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "rill")]
#[command(about = "Stream synthetic game events and lazy numeric sequences in constant memory")]
pub struct Cli {
    /// Path to a TOML config file (defaults to $RILL_CONFIG_PATH, then rill.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of game events to stream
    #[arg(short, long)]
    pub events: Option<u64>,

    /// Number of leading events to print
    #[arg(long)]
    pub preview: Option<u64>,

    /// Number of growth sequence terms to show
    #[arg(long)]
    pub fibonacci: Option<usize>,

    /// Number of primes to show
    #[arg(long)]
    pub primes: Option<usize>,

    /// Growth sequence behavior past u64::MAX
    #[arg(long, value_enum)]
    pub overflow: Option<CliOverflow>,

    /// Emit a JSON document instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Overlays explicitly passed flags onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(events) = self.events {
            config.stream.event_count = events;
        }
        if let Some(preview) = self.preview {
            config.stream.preview_events = preview;
        }
        if let Some(terms) = self.fibonacci {
            config.stream.fibonacci_terms = terms;
        }
        if let Some(terms) = self.primes {
            config.stream.prime_terms = terms;
        }
        if let Some(policy) = self.overflow {
            config.stream.overflow = policy.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "rill",
            "--events",
            "42",
            "--primes",
            "7",
            "--overflow",
            "wrap",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.stream.event_count, 42);
        assert_eq!(config.stream.prime_terms, 7);
        assert_eq!(config.stream.fibonacci_terms, 10);
        assert_eq!(config.stream.overflow, OverflowPolicy::Wrap);
    }

    #[test]
    fn negative_event_count_is_rejected() {
        let result = Cli::try_parse_from(["rill", "--events", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["rill"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.stream.event_count, 1000);
        assert!(!cli.json);
        assert!(cli.config.is_none());
    }
}
