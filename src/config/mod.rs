//! Configuration module.
//!
//! This module provides the built-in domain list, loading of domain
//! lists and settings files, and merging of all settings sources.

pub mod domains;
pub mod loader;
pub mod settings;

pub use domains::{default_domains, DEFAULT_DOMAINS};
pub use loader::ConfigLoader;
pub use settings::{FileSettings, RunConfig};
