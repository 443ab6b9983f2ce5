//! Environment-driven application configuration.

use crate::catalog::CatalogConfig;
use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;

/// Top-level server configuration, read from the environment with sensible
/// defaults.
///
/// Recognized variables:
/// - `PORT` - listening port (default 8080)
/// - `CATALOG_BASE_URL` - override for the Planifium catalog base URL
/// - `CATALOG_TIMEOUT_SECS` - per-request catalog timeout in seconds
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let mut catalog = CatalogConfig::default();
        if let Ok(base_url) = env::var("CATALOG_BASE_URL") {
            catalog.base_url = base_url;
        }
        if let Some(secs) = env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
        {
            catalog.request_timeout = Duration::from_secs(secs);
        }

        Self {
            bind_addr: format!("0.0.0.0:{}", port),
            catalog,
        }
    }
}
