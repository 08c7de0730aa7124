use std::sync::Mutex;

use async_trait::async_trait;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::services::CatalogFetcher;
use business::domain::product::model::Product;

use crate::client::CatalogClient;
use crate::dto::CatalogProductDto;

/// Fetches the catalog over HTTP and keeps the first successful response for
/// the rest of the session. Failures are not cached and never retried here.
pub struct CatalogFetcherHttp {
    client: CatalogClient,
    cache: Mutex<Option<Vec<Product>>>,
}

impl CatalogFetcherHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            cache: Mutex::new(None),
        }
    }

    fn map_request_error(err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout
        } else if err.is_decode() {
            CatalogError::Parse
        } else {
            CatalogError::Network
        }
    }
}

#[async_trait]
impl CatalogFetcher for CatalogFetcherHttp {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        // Check cache
        if let Ok(cache) = self.cache.lock()
            && let Some(products) = cache.as_ref()
        {
            return Ok(products.clone());
        }

        let response = self
            .client
            .client
            .get(&self.client.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, endpoint = %self.client.endpoint, "Catalog request failed");
                Self::map_request_error(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, endpoint = %self.client.endpoint, "Catalog responded with an error status");
            return Err(CatalogError::Network);
        }

        let body = response.bytes().await.map_err(Self::map_request_error)?;
        let entries: Vec<CatalogProductDto> = serde_json::from_slice(&body).map_err(|err| {
            tracing::warn!(error = %err, "Catalog body is not a product array");
            CatalogError::Parse
        })?;
        let products: Vec<Product> = entries.into_iter().map(Product::from).collect();

        // Cache result
        if let Ok(mut cache) = self.cache.lock() {
            *cache = Some(products.clone());
        }

        tracing::debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::ProductId;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn catalog_body() -> serde_json::Value {
        serde_json::json!([
            {
                "id": 1,
                "title": "Fjallraven Backpack",
                "price": 109.95,
                "description": "Your perfect pack for everyday use",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/1.jpg"
            },
            {
                "id": 2,
                "title": "Mens Casual T-Shirt",
                "price": 22.3,
                "description": "Slim-fitting style",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/2.jpg"
            }
        ])
    }

    fn fetcher_for(server: &MockServer, timeout: Duration) -> CatalogFetcherHttp {
        CatalogFetcherHttp::new(CatalogClient::new(server.url("/products/"), timeout).unwrap())
    }

    #[tokio::test]
    async fn should_fetch_products_in_catalog_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(catalog_body());
            })
            .await;

        let products = fetcher_for(&server, Duration::from_secs(5))
            .fetch_all()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::from(1));
        assert_eq!(products[1].title, "Mens Casual T-Shirt");
    }

    #[tokio::test]
    async fn should_serve_repeated_fetches_from_session_cache() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/");
                then.status(200).json_body(catalog_body());
            })
            .await;

        let fetcher = fetcher_for(&server, Duration::from_secs(5));
        let first = fetcher.fetch_all().await.unwrap();
        let second = fetcher.fetch_all().await.unwrap();

        mock.assert_hits_async(1).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_report_network_error_on_server_failure_without_caching_it() {
        let server = MockServer::start_async().await;
        let mut failing = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/");
                then.status(500);
            })
            .await;

        let fetcher = fetcher_for(&server, Duration::from_secs(5));
        assert_eq!(fetcher.fetch_all().await, Err(CatalogError::Network));

        failing.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/");
                then.status(200).json_body(catalog_body());
            })
            .await;

        assert_eq!(fetcher.fetch_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_report_parse_error_on_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let result = fetcher_for(&server, Duration::from_secs(5)).fetch_all().await;

        assert_eq!(result, Err(CatalogError::Parse));
    }

    #[tokio::test]
    async fn should_report_timeout_when_catalog_is_slow() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/");
                then.status(200)
                    .json_body(catalog_body())
                    .delay(Duration::from_millis(500));
            })
            .await;

        let result = fetcher_for(&server, Duration::from_millis(50))
            .fetch_all()
            .await;

        assert_eq!(result, Err(CatalogError::Timeout));
    }

    #[tokio::test]
    async fn should_report_network_error_when_unreachable() {
        let client =
            CatalogClient::new("http://127.0.0.1:9/products/".to_string(), Duration::from_secs(2))
                .unwrap();
        let fetcher = CatalogFetcherHttp::new(client);

        assert_eq!(fetcher.fetch_all().await, Err(CatalogError::Network));
    }
}
