//! In-memory implementation of SaleRepository for testing and development

use crate::core::repository::SaleRepository;
use crate::core::sale::{Sale, SaleEntry};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory sale repository
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Ids that do not parse as UUIDs are reported absent rather than as errors.
#[derive(Clone)]
pub struct InMemorySaleRepository {
    sales: Arc<RwLock<HashMap<Uuid, Sale>>>,
}

impl InMemorySaleRepository {
    /// Create a new in-memory sale repository
    pub fn new() -> Self {
        Self {
            sales: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySaleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SaleRepository for InMemorySaleRepository {
    async fn create(&self, entries: Vec<SaleEntry>) -> Result<Sale> {
        let mut sales = self
            .sales
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let sale = Sale::new(entries);
        sales.insert(sale.id, sale.clone());

        Ok(sale)
    }

    async fn get(&self, id: &str) -> Result<Option<Sale>> {
        let sales = self
            .sales
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        Ok(sales.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Sale>> {
        let sales = self
            .sales
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(sales.values().cloned().collect())
    }

    async fn update(&self, id: &str, entries: Vec<SaleEntry>) -> Result<Sale> {
        let mut sales = self
            .sales
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = Uuid::parse_str(id).map_err(|_| anyhow!("Sale not found"))?;
        let sale = sales.get_mut(&id).ok_or_else(|| anyhow!("Sale not found"))?;

        sale.entries = entries;
        sale.touch();

        Ok(sale.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut sales = self
            .sales
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if let Ok(id) = Uuid::parse_str(id) {
            sales.remove(&id);
        }

        Ok(())
    }
}
