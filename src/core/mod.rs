//! Core module containing fundamental types and traits for the sale API

pub mod error;
pub mod repository;
pub mod sale;
pub mod validation;

pub use error::ApiError;
pub use repository::SaleRepository;
pub use sale::{Sale, SaleEntry};
pub use validation::{SaleValidator, ValidationIssue};
