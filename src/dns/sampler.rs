//! Per-domain latency sampling.
//!
//! Runs a fixed number of sequential queries for one domain and turns the
//! successful timings into a [`DomainResult`].

use crate::dns::resolver::QueryClient;
use crate::dns::types::{DomainResult, QueryConfig, SampleOutcome};

/// Sample one domain `config.query_count` times, one query after another.
///
/// Returns `None` when every query failed.
pub async fn sample_domain(client: &dyn QueryClient, config: &QueryConfig) -> Option<DomainResult> {
    let mut samples = Vec::with_capacity(config.query_count);
    let mut errors = 0;

    for _ in 0..config.query_count {
        match client.query(config).await {
            SampleOutcome::Success(ms) => samples.push(ms),
            SampleOutcome::Failure(_) => errors += 1,
        }
    }

    let result = DomainResult::from_samples(&config.domain, &samples, errors);
    if result.is_none() {
        tracing::debug!(
            "{} excluded: all {} queries failed",
            config.domain,
            config.query_count
        );
    }
    result
}
