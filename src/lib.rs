//! # Storefront
//!
//! Sales API for a small inventory/retail system.
//!
//! The crate is a thin orchestration layer: each HTTP request invokes one or
//! two collaborators and maps the outcome to an HTTP status and JSON body.
//! Persistence lives behind the [`core::SaleRepository`] trait and business
//! validation behind [`core::SaleValidator`]; the in-memory repository and
//! the product catalog are the default implementations of both.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! let catalog = ProductCatalog::new();
//! catalog.add(Product::new("Shield", 10));
//!
//! let state = AppState {
//!     repository: Arc::new(InMemorySaleRepository::new()),
//!     validator: Arc::new(catalog),
//!     statuses: StatusMap::default(),
//! };
//!
//! let app = build_sale_routes(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::ApiError,
        repository::SaleRepository,
        sale::{Sale, SaleEntry},
        validation::{SaleValidator, ValidationIssue},
    };

    // === Catalog ===
    pub use crate::catalog::{Product, ProductCatalog};

    // === Storage ===
    pub use crate::storage::InMemorySaleRepository;

    // === Config ===
    pub use crate::config::{ApiConfig, StatusMap};

    // === Server ===
    pub use crate::server::{AppState, build_sale_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
