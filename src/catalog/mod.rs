//! Catalog - read-only gateway to the product source.
//!
//! The catalog is an external collaborator: it supplies product listings, a
//! product-by-id lookup, and the distinct category names, and nothing else.
//! The cart never calls it; browsing surfaces fetch products here and hand
//! copies to the cart. Failures surface to the caller, which renders its own
//! error state; nothing is retried automatically. Implementations are free
//! to cache - the contract is read-only and eventually fresh.

mod in_memory;
#[cfg(feature = "remote-catalog")]
mod remote;

use std::fmt;

use async_trait::async_trait;

use crate::product::{Product, ProductId};

/// Error type for catalog reads.
#[derive(Debug)]
pub enum CatalogError {
    /// The product source could not be reached.
    Unavailable(String),
    /// The product source answered with a non-success status.
    Status { status: u16 },
    /// The response body could not be decoded into product data.
    Malformed(String),
    /// No product exists for the given id.
    NotFound(ProductId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unavailable(msg) => write!(f, "catalog unavailable: {}", msg),
            CatalogError::Status { status } => {
                write!(f, "catalog request failed with status {}", status)
            }
            CatalogError::Malformed(msg) => write!(f, "catalog response malformed: {}", msg),
            CatalogError::NotFound(id) => write!(f, "product not found: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only product source consumed by the storefront surfaces.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List the full (already paginated/flat) product collection.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch one product by id.
    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError>;

    /// List the distinct category names.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError>;
}

pub use in_memory::InMemoryCatalog;
#[cfg(feature = "remote-catalog")]
pub use remote::RemoteCatalog;
