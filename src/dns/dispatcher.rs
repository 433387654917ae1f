//! Concurrent fan-out of per-domain sampling.
//!
//! One tokio task is spawned per domain; a semaphore keeps at most
//! `workers` of them sampling at any time. The dispatcher waits for all of
//! them before returning.

use crate::dns::resolver::QueryClient;
use crate::dns::sampler::sample_domain;
use crate::dns::types::{DomainResult, QuerySettings};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Default number of domains sampled concurrently.
pub const DEFAULT_WORKERS: usize = 5;

/// Runs the per-domain sampler for many domains with bounded concurrency.
///
/// # Example
///
/// ```ignore
/// let dispatcher = Dispatcher::new(Arc::new(ResolverClient::new()), 5);
/// let results = dispatcher.run(&domains, &settings).await;
/// ```
pub struct Dispatcher {
    client: Arc<dyn QueryClient>,
    workers: usize,
}

impl Dispatcher {
    /// Create a dispatcher. A worker count of zero is treated as one.
    #[must_use]
    pub fn new(client: Arc<dyn QueryClient>, workers: usize) -> Self {
        Self {
            client,
            workers: workers.max(1),
        }
    }

    /// Number of domains sampled concurrently.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Sample every domain and collect the ones with at least one success.
    ///
    /// The order of the returned results is unspecified.
    pub async fn run(&self, domains: &[String], settings: &QuerySettings) -> Vec<DomainResult> {
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut handles = Vec::with_capacity(domains.len());

        for domain in domains {
            let sem = Arc::clone(&semaphore);
            let client = Arc::clone(&self.client);
            let config = settings.for_domain(domain.as_str());

            handles.push(tokio::spawn(async move {
                // The semaphore is never closed
                let _permit = sem.acquire_owned().await.ok()?;
                sample_domain(client.as_ref(), &config).await
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for joined in join_all(handles).await {
            match joined {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {}
                Err(e) => tracing::warn!("Sampling task failed: {e}"),
            }
        }

        tracing::debug!(
            "{} of {} domains returned at least one response",
            results.len(),
            domains.len()
        );
        results
    }
}
