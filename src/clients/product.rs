//! HTTP client for the remote product service.
//!
//! Reading a product and writing its price back are two independent calls.
//! Nothing ties them together: a successful read followed by a failed write
//! leaves the product untouched, and a successful write is never undone.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::product::Product;

/// Result type returned by product service calls.
pub type ProductClientResult<T> = Result<T, ProductClientError>;

/// Errors raised while talking to the product service.
#[derive(Debug, Error)]
pub enum ProductClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    /// The configured base URL cannot carry path segments.
    #[error("invalid product service URL `{0}`")]
    InvalidUrl(String),
    /// The request never produced a response (connection, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("product service responded with HTTP {0}")]
    Status(u16),
    /// The response body was not valid JSON.
    #[error("invalid product payload: {0}")]
    Decode(String),
}

/// Operations the discount service needs from the product service.
#[async_trait]
pub trait ProductClient {
    /// Fetch a product. `Ok(None)` means the service has no usable payload
    /// for `product_id`. The id is owned by the product service and is
    /// forwarded as an opaque path segment.
    async fn get_product(&self, product_id: &str) -> ProductClientResult<Option<Product>>;

    /// Overwrite the price of `product_id`.
    async fn update_product_price(&self, product_id: &str, price: f64) -> ProductClientResult<()>;
}

#[derive(Serialize)]
struct PriceUpdateRequest {
    #[serde(rename = "precio")]
    price: f64,
}

#[derive(Clone)]
/// `reqwest` implementation of [`ProductClient`].
pub struct HttpProductClient {
    client: Client, // reqwest::Client is an Arc internally
    base_url: Url,
}

impl HttpProductClient {
    /// Create a client for the product service rooted at `base_url`.
    ///
    /// Every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> ProductClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProductClientError::Build(e.to_string()))?;

        let invalid = || ProductClientError::InvalidUrl(base_url.to_string());
        let mut url = Url::parse(base_url).map_err(|_| invalid())?;
        url.path_segments_mut().map_err(|_| invalid())?.pop_if_empty();

        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, segments: &[&str]) -> ProductClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProductClientError::InvalidUrl(self.base_url.to_string()))?
            .extend(segments);
        Ok(url)
    }

    fn product_url(&self, product_id: &str) -> ProductClientResult<Url> {
        self.endpoint(&[product_id])
    }

    fn price_update_url(&self, product_id: &str) -> ProductClientResult<Url> {
        self.endpoint(&["update", product_id])
    }
}

#[async_trait]
impl ProductClient for HttpProductClient {
    async fn get_product(&self, product_id: &str) -> ProductClientResult<Option<Product>> {
        let response = self
            .client
            .get(self.product_url(product_id)?)
            .send()
            .await
            .map_err(|e| ProductClientError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ProductClientError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProductClientError::Network(e.to_string()))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value =
            serde_json::from_slice(&body).map_err(|e| ProductClientError::Decode(e.to_string()))?;

        Ok(Product::from_value(value))
    }

    async fn update_product_price(
        &self,
        product_id: &str,
        price: f64,
    ) -> ProductClientResult<()> {
        let response = self
            .client
            .patch(self.price_update_url(product_id)?)
            .json(&PriceUpdateRequest { price })
            .send()
            .await
            .map_err(|e| ProductClientError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProductClientError::Status(response.status().as_u16()));
        }

        log::debug!("Updated price of product {product_id} to {price}");
        Ok(())
    }
}
