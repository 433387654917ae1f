//! Configuration loader.
//!
//! This module provides functionality to load domain lists from plain
//! text files and optional settings from a JSON file.

use crate::config::settings::FileSettings;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the settings file inside the config directory.
const SETTINGS_FILE: &str = "config.json";

/// Loads domain lists and settings files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a newline-delimited domain list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let domains = ConfigLoader::load_domains_from_file("domains.txt")?;
    /// ```
    pub fn load_domains_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read domain file '{}': {e}",
                path.display()
            ))
        })?;
        let domains = Self::parse_domains(&content);
        tracing::debug!("Loaded {} domains from {}", domains.len(), path.display());
        Ok(domains)
    }

    /// Split text into domains, one per line.
    ///
    /// Lines are trimmed and blank lines skipped. Nothing else is filtered.
    #[must_use]
    pub fn parse_domains(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Load settings from an explicit path or the default location.
    ///
    /// An explicit path must exist. The default
    /// `$CONFIG_DIR/dnslatency/config.json` is optional and yields empty
    /// settings when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if an explicit path does not exist.
    pub fn load_settings(path: Option<&Path>) -> Result<FileSettings> {
        match path {
            Some(path) => Self::load_settings_from_file(path),
            None => {
                let default_path = Self::config_dir().join(SETTINGS_FILE);
                if default_path.is_file() {
                    Self::load_settings_from_file(&default_path)
                } else {
                    Ok(FileSettings::default())
                }
            }
        }
    }

    /// Parse a JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load_settings_from_file<P: AsRef<Path>>(path: P) -> Result<FileSettings> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read settings file '{}': {e}",
                path.display()
            ))
        })?;
        let settings: FileSettings = serde_json::from_str(&content)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Get the config directory path.
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dnslatency")
    }
}
