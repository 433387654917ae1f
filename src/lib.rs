//! dnslatency - DNS response time measurement for a single nameserver.
//!
//! This crate provides both a library API and a CLI tool for:
//! - Querying a list of domains several times each against one nameserver
//! - Computing min/max/mean/median latency and error counts per domain
//! - Reporting domains fastest first as a table, JSON, CSV or TSV
//!
//! # Library Usage
//!
//! ```ignore
//! use dnslatency::{Dispatcher, QuerySettings, Report, ResolverClient};
//!
//! let dispatcher = Dispatcher::new(Arc::new(ResolverClient::new()), 5);
//! let results = dispatcher.run(&domains, &settings).await;
//! let report = Report::build(results)?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Test the built-in domain list against Cloudflare
//! dnslatency --dns-server 1.1.1.1
//!
//! # Custom domain list, 5 queries each, 10 domains at a time
//! dnslatency -s 8.8.8.8 -f domains.txt -n 5 -t 10
//!
//! # AAAA records, JSON output
//! dnslatency -s 9.9.9.9 -r AAAA --format json
//! ```

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::{ConfigLoader, FileSettings, RunConfig};
pub use dns::types::{DomainResult, QueryConfig, QuerySettings, SampleOutcome};
pub use dns::{sample_domain, Dispatcher, QueryClient, ResolverClient};
pub use error::{Error, Result};
pub use report::{Report, RunInfo};
