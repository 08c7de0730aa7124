use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP client configuration for the catalog endpoint.
pub struct CatalogClient {
    pub client: Client,
    pub endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }
}
