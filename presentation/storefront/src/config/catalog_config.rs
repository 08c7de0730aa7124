use std::time::Duration;

use catalog::client::{DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT};

/// Remote catalog access
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub url: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_URL: Product list endpoint (default: "https://fakestoreapi.com/products/")
    /// - CATALOG_TIMEOUT_SECS: Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let url = var("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let timeout = match var("CATALOG_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid CATALOG_TIMEOUT_SECS");
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Self { url, timeout }
    }
}
