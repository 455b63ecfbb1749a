//! Product catalog and the stock-checking sale validator
//!
//! The catalog owns the product records a sale is validated against. It is
//! the default [`SaleValidator`] implementation: entry bodies are checked
//! structurally, then each referenced product is checked for existence and
//! stock coverage.

use crate::core::sale::SaleEntry;
use crate::core::validation::{SaleValidator, ValidationIssue};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A product available for sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Units currently in stock
    pub stock: u32,
}

impl Product {
    /// Create a product with a fresh id
    pub fn new(name: impl Into<String>, stock: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stock,
        }
    }
}

/// In-memory product catalog
#[derive(Clone)]
pub struct ProductCatalog {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn add(&self, product: Product) {
        self.products.write().unwrap().insert(product.id, product);
    }

    pub fn get(&self, id: &Uuid) -> Option<Product> {
        self.products.read().unwrap().get(id).cloned()
    }

    pub fn list(&self) -> Vec<Product> {
        self.products.read().unwrap().values().cloned().collect()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one raw entry, distinguishing structural from selection problems
fn parse_entry(raw: &Value) -> Result<SaleEntry, ValidationIssue> {
    let (Some(product_id), Some(quantity)) = (raw.get("product_id"), raw.get("quantity")) else {
        return Err(ValidationIssue::MalformedEntries(
            "Each sale entry needs a product id and a quantity".to_string(),
        ));
    };

    let product_id = product_id
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or(ValidationIssue::InvalidSelection)?;

    let quantity = quantity
        .as_u64()
        .filter(|q| *q >= 1)
        .and_then(|q| u32::try_from(q).ok())
        .ok_or(ValidationIssue::InvalidSelection)?;

    Ok(SaleEntry {
        product_id,
        quantity,
    })
}

#[async_trait]
impl SaleValidator for ProductCatalog {
    fn verify_entries(&self, body: &Value) -> Result<Vec<SaleEntry>, ValidationIssue> {
        let raw_entries = body.as_array().ok_or_else(|| {
            ValidationIssue::MalformedEntries("Sale entries must be a list".to_string())
        })?;

        raw_entries.iter().map(parse_entry).collect()
    }

    async fn verify_product(&self, body: &Value) -> Option<ValidationIssue> {
        // Structural problems are verify_entries territory; here only
        // well-formed entries are checked against the catalog.
        let raw_entries = body.as_array()?;

        for raw in raw_entries {
            let Ok(entry) = parse_entry(raw) else {
                continue;
            };

            let Some(product) = self.get(&entry.product_id) else {
                return Some(ValidationIssue::InvalidSelection);
            };

            if entry.quantity > product.stock {
                return Some(ValidationIssue::StockProblem(
                    "Such amount is not permitted to sell".to_string(),
                ));
            }
        }

        None
    }
}
