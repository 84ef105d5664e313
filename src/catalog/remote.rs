//! RemoteCatalog - HTTP client for the upstream product API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{Catalog, CatalogError};
use crate::product::{Product, ProductId};

const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Catalog backed by the remote product API.
///
/// Thin fetch wrapper over `GET /products`, `GET /products/{id}` and
/// `GET /products/categories`. Response caching is left to the deployment;
/// the contract is read-only, so any layer may cache in front of this.
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl Default for RemoteCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteCatalog {
    /// Client for the default upstream product API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a different host serving the same API shape.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        RemoteCatalog {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| CatalogError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| CatalogError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl Catalog for RemoteCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        match self.get_json(&format!("/products/{}", id)).await {
            Err(CatalogError::Status { status: 404 }) => Err(CatalogError::NotFound(id.clone())),
            // The upstream answers unknown ids with an empty 200 body, which
            // fails decoding; report that as not-found too.
            Err(CatalogError::Malformed(_)) => Err(CatalogError::NotFound(id.clone())),
            other => other,
        }
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("/products/categories").await
    }
}
