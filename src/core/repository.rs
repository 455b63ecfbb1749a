//! Repository trait for sale persistence

use crate::core::sale::{Sale, SaleEntry};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence collaborator for sales
///
/// Implementations provide CRUD operations for sale records. The handler
/// layer is agnostic to the underlying storage mechanism and passes sale
/// identifiers through as opaque strings; interpretation (including whether
/// a malformed id is an error or simply absent) belongs to the repository.
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Persist a new sale built from the given entries
    async fn create(&self, entries: Vec<SaleEntry>) -> Result<Sale>;

    /// Get a sale by id, `None` when absent
    async fn get(&self, id: &str) -> Result<Option<Sale>>;

    /// List all sales
    async fn list(&self) -> Result<Vec<Sale>>;

    /// Replace the entries of an existing sale
    ///
    /// Errors when no sale with the given id exists.
    async fn update(&self, id: &str, entries: Vec<SaleEntry>) -> Result<Sale>;

    /// Delete a sale
    async fn delete(&self, id: &str) -> Result<()>;
}
