//! Business-rule validation for sale requests
//!
//! The validator is a collaborator of the handler layer: it receives the raw
//! request body and either yields the parsed entry collection or a
//! [`ValidationIssue`] describing why the sale cannot proceed. Issues are a
//! discriminated kind rather than bare message strings, so the handlers
//! classify failures by matching on the variant instead of comparing error
//! text.

use crate::core::sale::SaleEntry;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Why a sale request was rejected by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A product id does not exist or a quantity is out of range
    InvalidSelection,

    /// The request body is not a well-formed collection of sale entries
    MalformedEntries(String),

    /// Stock cannot cover the requested quantity
    StockProblem(String),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::InvalidSelection => {
                write!(f, "Wrong product ID or invalid quantity")
            }
            ValidationIssue::MalformedEntries(message) => write!(f, "{}", message),
            ValidationIssue::StockProblem(message) => write!(f, "{}", message),
        }
    }
}

/// Business-rule collaborator for sale requests
///
/// Both checks take the raw body so that a create request can run them
/// unconditionally, independent of one another, before either outcome is
/// inspected.
#[async_trait]
pub trait SaleValidator: Send + Sync {
    /// Structural check of the request body
    ///
    /// Success yields the parsed entry collection, so callers never
    /// re-inspect the raw JSON.
    fn verify_entries(&self, body: &Value) -> Result<Vec<SaleEntry>, ValidationIssue>;

    /// Product and stock availability check
    ///
    /// `None` means every referenced product exists and stock covers the
    /// requested quantities. Bodies that fail the structural check are not
    /// reported here; `verify_entries` owns those.
    async fn verify_product(&self, body: &Value) -> Option<ValidationIssue>;
}
