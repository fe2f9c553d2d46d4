//! Configuration loading and management.
//!
//! Provides [`RecognizeConfig`], loadable from TOML or JSON files or
//! discovered in the directory hierarchy. A config file is never required;
//! `RecognizeConfig::default()` targets the production endpoint with the
//! documented request defaults.

use crate::error::{RecognizeError, Result};
use crate::types::RecognizeOptions;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Client configuration.
///
/// # Example
///
/// ```rust
/// use recognize::RecognizeConfig;
///
/// // Defaults: production endpoint, 120 s timeout
/// let config = RecognizeConfig::default();
///
/// // Load from a TOML file
/// // let config = RecognizeConfig::from_toml_file("recognize.toml")?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizeConfig {
    /// Recognition endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default request options, overridable per call
    #[serde(default)]
    pub options: RecognizeOptions,
}

fn default_endpoint() -> String {
    crate::client::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for RecognizeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            options: RecognizeOptions::default(),
        }
    }
}

impl RecognizeConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `RecognizeError::Validation` if the file doesn't exist or is
    /// invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RecognizeError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| RecognizeError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RecognizeError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| RecognizeError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Discover configuration in parent directories.
    ///
    /// Searches for `recognize.toml` in the current directory and its
    /// parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file exists in the hierarchy
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(RecognizeError::Io)?;

        loop {
            let candidate = current.join("recognize.toml");
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}
