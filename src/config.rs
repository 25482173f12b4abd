// ⚙️ Endpoint Configuration - Where the records come from
//
// Resolution order: explicit CLI argument, then the SLA_ENDPOINT_URL
// environment variable, then a JSON config file. The core pipeline never
// touches this - it only sees the fetched payload.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable consulted when no URL argument is given.
pub const ENDPOINT_ENV: &str = "SLA_ENDPOINT_URL";

/// Default config file looked up next to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sla-report.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub endpoint_url: String,
}

impl EndpointConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        EndpointConfig {
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Resolve the endpoint URL from argument, environment, or file.
    pub fn resolve(cli_url: Option<&str>, config_path: &Path) -> Result<Self> {
        if let Some(url) = cli_url {
            debug!(url, "endpoint from CLI argument");
            return Ok(EndpointConfig::new(url));
        }

        if let Ok(url) = env::var(ENDPOINT_ENV) {
            if !url.is_empty() {
                debug!(url = %url, "endpoint from {}", ENDPOINT_ENV);
                return Ok(EndpointConfig::new(url));
            }
        }

        if config_path.exists() {
            return Self::load(config_path);
        }

        bail!(
            "No endpoint configured. Pass a URL argument, set {}, or create {}",
            ENDPOINT_ENV,
            config_path.display()
        )
    }

    /// Load from a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: EndpointConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(url = %config.endpoint_url, "endpoint from config file");
        Ok(config)
    }

    /// Persist to a JSON config file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_argument_wins() {
        let config =
            EndpointConfig::resolve(Some("https://example.test/api"), Path::new("/nonexistent"))
                .unwrap();
        assert_eq!(config.endpoint_url, "https://example.test/api");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let config = EndpointConfig::new("https://example.test/po");
        config.save(&path).unwrap();

        let loaded = EndpointConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_resolve_falls_back_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        EndpointConfig::new("https://example.test/file").save(&path).unwrap();

        let config = EndpointConfig::resolve(None, &path).unwrap();
        assert_eq!(config.endpoint_url, "https://example.test/file");
    }

    #[test]
    fn test_resolve_errors_when_nothing_configured() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = EndpointConfig::resolve(None, &path).unwrap_err();
        assert!(err.to_string().contains("No endpoint configured"));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "not json").unwrap();

        let err = EndpointConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
