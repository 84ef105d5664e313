//! InMemoryCatalog - fixed product list for tests, demos, and offline use.

use async_trait::async_trait;

use super::{Catalog, CatalogError};
use crate::product::{Product, ProductId};

/// Catalog serving a fixed product collection from memory.
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        InMemoryCatalog { products }
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.id == *id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}
