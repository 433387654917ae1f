//! DNS types and data structures.
//!
//! This module provides the core types used to describe a latency run:
//! the shared query settings, the per-domain query configuration, the
//! outcome of a single attempt and the per-domain result.

use crate::dns::stats::LatencyStats;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use trust_dns_resolver::proto::rr::RecordType;

/// Default DNS port used when a nameserver is given without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Settings shared by every domain in a run.
///
/// Everything a [`QueryConfig`] carries except the target domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    /// Nameserver under test
    pub nameserver: SocketAddr,
    /// Record type requested on every query
    pub record_type: RecordType,
    /// Number of sequential queries per domain
    pub query_count: usize,
    /// Per-try timeout handed to the resolver library
    pub timeout: Duration,
    /// Upper bound on a whole resolution attempt
    pub lifetime: Duration,
}

impl QuerySettings {
    /// Create validated settings.
    ///
    /// # Errors
    ///
    /// Returns a config error if `query_count` is zero or either duration
    /// is zero.
    pub fn new(
        nameserver: SocketAddr,
        record_type: RecordType,
        query_count: usize,
        timeout: Duration,
        lifetime: Duration,
    ) -> Result<Self> {
        if query_count == 0 {
            return Err(Error::config("query count must be at least 1"));
        }
        if timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }
        if lifetime.is_zero() {
            return Err(Error::config("lifetime must be greater than zero"));
        }

        Ok(Self {
            nameserver,
            record_type,
            query_count,
            timeout,
            lifetime,
        })
    }

    /// Build the query configuration for one domain.
    #[must_use]
    pub fn for_domain(&self, domain: impl Into<String>) -> QueryConfig {
        QueryConfig {
            domain: domain.into(),
            nameserver: self.nameserver,
            record_type: self.record_type,
            query_count: self.query_count,
            timeout: self.timeout,
            lifetime: self.lifetime,
        }
    }
}

/// Everything needed to sample one domain against one nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Domain to resolve
    pub domain: String,
    /// Nameserver under test
    pub nameserver: SocketAddr,
    /// Record type requested
    pub record_type: RecordType,
    /// Number of sequential queries
    pub query_count: usize,
    /// Per-try timeout
    pub timeout: Duration,
    /// Upper bound on one resolution attempt
    pub lifetime: Duration,
}

/// Outcome of a single query attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    /// The query succeeded after the given number of milliseconds.
    Success(f64),
    /// The query failed; the reason is informational only.
    Failure(String),
}

impl SampleOutcome {
    /// Create a failed outcome.
    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure(reason.into())
    }

    /// Elapsed milliseconds if the attempt succeeded.
    #[must_use]
    pub fn elapsed_ms(&self) -> Option<f64> {
        match self {
            Self::Success(ms) => Some(*ms),
            Self::Failure(_) => None,
        }
    }
}

/// Latency statistics for one domain.
///
/// Only exists when at least one query for the domain succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainResult {
    /// Domain name that was queried
    pub domain: String,
    /// Fastest successful query in milliseconds
    pub min_ms: f64,
    /// Slowest successful query in milliseconds
    pub max_ms: f64,
    /// Arithmetic mean of successful queries in milliseconds
    pub avg_ms: f64,
    /// Median of successful queries in milliseconds
    pub median_ms: f64,
    /// Number of failed queries
    pub error_count: usize,
    /// Number of successful queries the statistics are based on
    pub sample_count: usize,
}

impl DomainResult {
    /// Build a result from successful samples and a failure count.
    ///
    /// Returns `None` if `samples` is empty.
    #[must_use]
    pub fn from_samples(domain: &str, samples: &[f64], error_count: usize) -> Option<Self> {
        let stats = LatencyStats::from_samples(samples)?;
        Some(Self {
            domain: domain.to_string(),
            min_ms: stats.min,
            max_ms: stats.max,
            avg_ms: stats.mean,
            median_ms: stats.median,
            error_count,
            sample_count: samples.len(),
        })
    }
}

/// Parse a nameserver address.
///
/// Accepts `1.1.1.1`, `1.1.1.1:5353`, `2606:4700::1111` and
/// `[2606:4700::1111]:53`. Port 53 is used when none is given.
///
/// # Errors
///
/// Returns a parse error if the input is not an IP address with an
/// optional port.
pub fn parse_nameserver(input: &str) -> Result<SocketAddr> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::parse("empty nameserver address"));
    }

    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }

    trimmed
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|e| Error::parse(format!("invalid nameserver address '{trimmed}': {e}")))
}

/// Parse a record type name such as `A`, `aaaa` or `MX`.
///
/// # Errors
///
/// Returns a parse error for names the resolver library does not know.
pub fn parse_record_type(input: &str) -> Result<RecordType> {
    let upper = input.trim().to_ascii_uppercase();
    match upper.parse::<RecordType>() {
        Ok(RecordType::Unknown(_)) | Err(_) => {
            Err(Error::parse(format!("unknown record type: {input}")))
        }
        Ok(record_type) => Ok(record_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> QuerySettings {
        QuerySettings::new(
            "8.8.8.8:53".parse().unwrap(),
            RecordType::A,
            3,
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_nameserver_ipv4() {
        let addr = parse_nameserver("1.1.1.1").unwrap();
        assert_eq!(addr.port(), 53);
        assert_eq!(addr.ip().to_string(), "1.1.1.1");

        let addr = parse_nameserver(" 8.8.8.8:5353 ").unwrap();
        assert_eq!(addr.port(), 5353);
    }

    #[test]
    fn test_parse_nameserver_ipv6() {
        let addr = parse_nameserver("2606:4700::1111").unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 53);

        let addr = parse_nameserver("[2606:4700::1111]:5300").unwrap();
        assert_eq!(addr.port(), 5300);
    }

    #[test]
    fn test_parse_nameserver_invalid() {
        assert!(parse_nameserver("").is_err());
        assert!(parse_nameserver("dns.google").is_err());
        assert!(parse_nameserver("1.1.1.1:abc").is_err());
    }

    #[test]
    fn test_parse_record_type() {
        assert_eq!(parse_record_type("A").unwrap(), RecordType::A);
        assert_eq!(parse_record_type("aaaa").unwrap(), RecordType::AAAA);
        assert_eq!(parse_record_type("MX").unwrap(), RecordType::MX);
        assert!(parse_record_type("NOPE").is_err());
    }

    #[test]
    fn test_settings_validation() {
        let ns = "8.8.8.8:53".parse().unwrap();
        let secs = Duration::from_secs(1);
        assert!(QuerySettings::new(ns, RecordType::A, 0, secs, secs).is_err());
        assert!(QuerySettings::new(ns, RecordType::A, 1, Duration::ZERO, secs).is_err());
        assert!(QuerySettings::new(ns, RecordType::A, 1, secs, Duration::ZERO).is_err());
        assert!(QuerySettings::new(ns, RecordType::A, 1, secs, secs).is_ok());
    }

    #[test]
    fn test_for_domain() {
        let config = settings().for_domain("example.com");
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.query_count, 3);
        assert_eq!(config.record_type, RecordType::A);
        assert_eq!(config.nameserver.port(), 53);
    }

    #[test]
    fn test_domain_result_from_samples() {
        assert!(DomainResult::from_samples("a.com", &[], 5).is_none());

        let result = DomainResult::from_samples("a.com", &[40.0, 20.0], 1).unwrap();
        assert_eq!(result.domain, "a.com");
        assert_eq!(result.min_ms, 20.0);
        assert_eq!(result.max_ms, 40.0);
        assert_eq!(result.median_ms, 30.0);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.sample_count, 2);
    }

    #[test]
    fn test_sample_outcome() {
        assert_eq!(SampleOutcome::Success(12.5).elapsed_ms(), Some(12.5));
        assert_eq!(SampleOutcome::failure("timeout").elapsed_ms(), None);
    }
}
