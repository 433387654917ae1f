//! DNS module.
//!
//! This module provides the measurement side of dnslatency:
//! - Single-query resolver client
//! - Per-domain sampling and statistics
//! - Bounded concurrent dispatch over many domains
//! - Core data types

pub mod dispatcher;
pub mod resolver;
pub mod sampler;
pub mod stats;
pub mod types;

pub use dispatcher::{Dispatcher, DEFAULT_WORKERS};
pub use resolver::{QueryClient, ResolverClient};
pub use sampler::sample_domain;
pub use types::*;
