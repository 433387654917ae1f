//! Command-line interface (CLI) argument parsing module.
//!
//! This module provides CLI argument parsing using `clap`. Options left
//! unset fall back to the settings file and then to built-in defaults,
//! see [`crate::config::RunConfig`].

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI argument parser using clap derive macro.
///
/// # Example
///
/// ```ignore
/// let cli = Cli::parse();
/// let file = ConfigLoader::load_settings(cli.config.as_deref())?;
/// let run = RunConfig::resolve(&cli, file)?;
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "dnslatency",
    version,
    about = "Measure DNS response times of a nameserver",
    long_about = "Queries a set of domains against one nameserver several times each and \
                  reports min/max/mean/median latency per domain, fastest first."
)]
pub struct Cli {
    /// DNS server to test (IP, IP:port or [IPv6]:port)
    #[arg(short = 's', long = "dns-server", env = "DNSLATENCY_SERVER")]
    pub dns_server: String,

    /// File containing domains to test (one per line)
    #[arg(short = 'f', long = "domains-file")]
    pub domains_file: Option<PathBuf>,

    /// Number of queries per domain [default: 3]
    #[arg(short = 'n', long = "queries")]
    pub queries: Option<usize>,

    /// Number of domains tested concurrently [default: 5]
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,

    /// Per-try query timeout in seconds [default: 5]
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Maximum time for one resolution attempt in seconds [default: 5]
    #[arg(long)]
    pub lifetime: Option<f64>,

    /// Record type to query (A, AAAA, MX, ...) [default: A]
    #[arg(short = 'r', long = "record-type")]
    pub record_type: Option<String>,

    /// Output format (table, json, csv, tsv) [default: table]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Settings file (JSON) [default: $CONFIG_DIR/dnslatency/config.json]
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format (default, human-readable)
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated)
    Tsv,
}

impl OutputFormat {
    /// Get all available output format names.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        &["table", "json", "csv", "tsv"]
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!(
                "Unknown format: {}. Valid options are: {:?}",
                s,
                Self::names()
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("tsv".parse::<OutputFormat>(), Ok(OutputFormat::Tsv));
        assert!("invalid".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        for name in OutputFormat::names() {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.to_string(), *name);
        }
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "dnslatency",
            "--dns-server",
            "9.9.9.9",
            "-n",
            "7",
            "-t",
            "2",
            "--timeout",
            "1.5",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.dns_server, "9.9.9.9");
        assert_eq!(cli.queries, Some(7));
        assert_eq!(cli.threads, Some(2));
        assert_eq!(cli.timeout, Some(1.5));
        assert_eq!(cli.lifetime, None);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(cli.domains_file.is_none());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["dnslatency", "-s", "1.1.1.1", "-v", "-q"]).is_err());
    }
}
