use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use rust_decimal::Decimal;

/// Canonical product identity key.
///
/// Upstream catalogs are loose about id types (numeric ids in API payloads,
/// string ids in hand-edited snapshots), so ids are normalized to a single
/// comparable string key at the deserialization boundary: `1` and `"1"`
/// produce the same `ProductId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ProductId;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a product id (string or integer)")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ProductId, E> {
                Ok(ProductId(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<ProductId, E> {
                Ok(ProductId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<ProductId, E> {
                Ok(ProductId(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Rating summary attached to a catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Immutable catalog value object. The field shape matches the upstream
/// product API payload, so `serde_json` decodes API responses directly.
/// The cart only ever holds copies; it never mutates a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}
