//! Sale model: a transaction record composed of product/quantity entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single product-id + quantity pair within a sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleEntry {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// A transaction record
///
/// Ids are assigned by the repository on creation; timestamps are managed
/// automatically (`new` stamps both, `touch` bumps `updated_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub entries: Vec<SaleEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sale {
    /// Create a new sale with a fresh id and current timestamps
    pub fn new(entries: Vec<SaleEntry>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            entries,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the `updated_at` timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
