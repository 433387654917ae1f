//! Run settings.
//!
//! Values come from three layers, later ones winning: built-in defaults,
//! the JSON settings file, and the command line.

use crate::cli::{Cli, OutputFormat};
use crate::config::domains::default_domains;
use crate::config::loader::ConfigLoader;
use crate::dns::types::{parse_nameserver, parse_record_type, QuerySettings};
use crate::dns::DEFAULT_WORKERS;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default number of queries per domain.
pub const DEFAULT_QUERIES: usize = 3;

/// Default per-try timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Default lifetime of one resolution attempt in seconds.
pub const DEFAULT_LIFETIME_SECS: f64 = 5.0;

/// Default record type.
pub const DEFAULT_RECORD_TYPE: &str = "A";

/// Optional settings read from `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub queries: Option<usize>,
    pub threads: Option<usize>,
    pub timeout_secs: Option<f64>,
    pub lifetime_secs: Option<f64>,
    pub record_type: Option<String>,
    pub domains_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub settings: QuerySettings,
    pub workers: usize,
    pub domains: Vec<String>,
    pub format: OutputFormat,
}

impl RunConfig {
    /// Merge command-line arguments over file settings and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the nameserver or record type cannot be parsed,
    /// a numeric setting is out of range, or the domain file cannot be read.
    pub fn resolve(cli: &Cli, file: FileSettings) -> Result<Self> {
        let nameserver = parse_nameserver(&cli.dns_server)?;

        let record_type = parse_record_type(
            cli.record_type
                .as_deref()
                .or(file.record_type.as_deref())
                .unwrap_or(DEFAULT_RECORD_TYPE),
        )?;

        let queries = cli.queries.or(file.queries).unwrap_or(DEFAULT_QUERIES);
        let workers = cli.threads.or(file.threads).unwrap_or(DEFAULT_WORKERS);
        if workers == 0 {
            return Err(Error::config("thread count must be at least 1"));
        }

        let timeout = seconds(
            "timeout",
            cli.timeout.or(file.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS),
        )?;
        let lifetime = seconds(
            "lifetime",
            cli.lifetime.or(file.lifetime_secs).unwrap_or(DEFAULT_LIFETIME_SECS),
        )?;

        let settings = QuerySettings::new(nameserver, record_type, queries, timeout, lifetime)?;

        let domains = match cli.domains_file.as_ref().or(file.domains_file.as_ref()) {
            Some(path) => ConfigLoader::load_domains_from_file(path)?,
            None => default_domains(),
        };
        if domains.is_empty() {
            return Err(Error::config("domain list is empty"));
        }

        Ok(Self {
            settings,
            workers,
            domains,
            format: cli.format.or(file.format).unwrap_or_default(),
        })
    }
}

/// Convert a positive, finite number of seconds into a `Duration`.
fn seconds(name: &str, secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(Error::config(format!(
            "{name} must be a positive number of seconds, got {secs}"
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| Error::config(format!("invalid {name} '{secs}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use trust_dns_resolver::proto::rr::RecordType;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["dnslatency"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::resolve(&cli(&["--dns-server", "1.1.1.1"]), FileSettings::default())
            .unwrap();

        assert_eq!(config.settings.nameserver, "1.1.1.1:53".parse().unwrap());
        assert_eq!(config.settings.record_type, RecordType::A);
        assert_eq!(config.settings.query_count, 3);
        assert_eq!(config.settings.timeout, Duration::from_secs(5));
        assert_eq!(config.settings.lifetime, Duration::from_secs(5));
        assert_eq!(config.workers, 5);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.domains, default_domains());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileSettings {
            queries: Some(10),
            threads: Some(8),
            timeout_secs: Some(2.0),
            record_type: Some("MX".into()),
            format: Some(OutputFormat::Csv),
            ..FileSettings::default()
        };
        let config = RunConfig::resolve(
            &cli(&["-s", "8.8.8.8", "--queries", "4", "--record-type", "aaaa"]),
            file,
        )
        .unwrap();

        assert_eq!(config.settings.query_count, 4);
        assert_eq!(config.settings.record_type, RecordType::AAAA);
        assert_eq!(config.workers, 8);
        assert_eq!(config.settings.timeout, Duration::from_secs(2));
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_domains_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a.example\n\nb.example").unwrap();
        let path = file.path().to_str().unwrap();

        let config =
            RunConfig::resolve(&cli(&["-s", "8.8.8.8", "-f", path]), FileSettings::default())
                .unwrap();
        assert_eq!(config.domains, vec!["a.example", "b.example"]);
    }

    #[test]
    fn test_empty_domains_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let result = RunConfig::resolve(&cli(&["-s", "8.8.8.8", "-f", path]), FileSettings::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_values() {
        let bad = [
            vec!["-s", "not-an-ip"],
            vec!["-s", "8.8.8.8", "--queries", "0"],
            vec!["-s", "8.8.8.8", "--threads", "0"],
            vec!["-s", "8.8.8.8", "--timeout", "0"],
            vec!["-s", "8.8.8.8", "--lifetime=-1"],
            vec!["-s", "8.8.8.8", "--record-type", "BOGUS"],
        ];
        for args in bad {
            assert!(
                RunConfig::resolve(&cli(&args), FileSettings::default()).is_err(),
                "{args:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_unknown_file_keys_rejected() {
        let parsed: std::result::Result<FileSettings, _> =
            serde_json::from_str(r#"{"nameservers": ["1.1.1.1"]}"#);
        assert!(parsed.is_err());
    }
}
