//! Single-query resolver client.
//!
//! This module wraps one DNS lookup against an explicit nameserver and
//! reports how long it took. Every failure mode of the resolver library
//! collapses into [`SampleOutcome::Failure`].

use crate::dns::types::{QueryConfig, SampleOutcome};
use crate::error::Result;
use async_trait::async_trait;
use std::time::Instant;
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// Performs one resolution attempt for a [`QueryConfig`].
///
/// Implementations must query only `config.nameserver` and must not
/// cache answers between calls.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Resolve `config.domain` once and report the elapsed time.
    async fn query(&self, config: &QueryConfig) -> SampleOutcome;
}

/// [`QueryClient`] backed by `trust-dns-resolver`.
///
/// A fresh resolver is built for every attempt, so no answer cache or
/// connection is shared between attempts.
///
/// # Example
///
/// ```ignore
/// let client = ResolverClient::new();
/// let outcome = client.query(&settings.for_domain("example.com")).await;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverClient;

impl ResolverClient {
    /// Create a new `ResolverClient`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build a resolver that talks to `config.nameserver` only.
    fn build_resolver(config: &QueryConfig) -> Result<TokioAsyncResolver> {
        let resolver_config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(
                &[config.nameserver.ip()],
                config.nameserver.port(),
                true,
            ),
        );

        let mut opts = ResolverOpts::default();
        opts.timeout = config.timeout;
        opts.use_hosts_file = false;

        Ok(TokioAsyncResolver::tokio(resolver_config, opts)?)
    }
}

#[async_trait]
impl QueryClient for ResolverClient {
    async fn query(&self, config: &QueryConfig) -> SampleOutcome {
        let resolver = match Self::build_resolver(config) {
            Ok(resolver) => resolver,
            Err(e) => {
                tracing::debug!("Resolver setup failed for {}: {e}", config.nameserver);
                return SampleOutcome::failure(e.to_string());
            }
        };

        // Fully qualified, so no search domains are tried
        let name = if config.domain.ends_with('.') {
            config.domain.clone()
        } else {
            format!("{}.", config.domain)
        };

        let start = Instant::now();
        let result = tokio::time::timeout(
            config.lifetime,
            resolver.lookup(name.as_str(), config.record_type),
        )
        .await;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(Ok(_lookup)) => SampleOutcome::Success(elapsed),
            Ok(Err(e)) => {
                tracing::debug!(
                    "{} {} via {} failed: {e}",
                    config.domain,
                    config.record_type,
                    config.nameserver
                );
                SampleOutcome::failure(e.to_string())
            }
            Err(_) => {
                tracing::debug!(
                    "{} {} via {} exceeded lifetime of {:?}",
                    config.domain,
                    config.record_type,
                    config.nameserver,
                    config.lifetime
                );
                SampleOutcome::failure("lifetime exceeded")
            }
        }
    }
}
