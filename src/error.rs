//! Error types module.
//!
//! This module defines the error types used throughout dnslatency.
//! It uses `thiserror` for structured error handling and provides
//! a custom `Result` type alias for convenience.

use thiserror::Error;

/// A specialized `Result` type for dnslatency operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for dnslatency.
///
/// Per-query resolution failures never surface here; they are counted by
/// the sampler. These variants cover setup problems and the run-level
/// outcome where nothing could be measured.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (domain list and settings files, terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (settings file, JSON report output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// DNS resolver construction error
    #[error("DNS resolver error: {0}")]
    Resolver(#[from] trust_dns_resolver::error::ResolveError),

    /// Configuration error (invalid settings, missing files)
    #[error("Config error: {0}")]
    Config(String),

    /// Parse error (nameserver address, record type, output format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Every domain failed all of its queries.
    #[error("no domains returned any successful response")]
    NoSuccessfulResponses,
}

impl Error {
    /// Create a new configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new parse error with a message.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
