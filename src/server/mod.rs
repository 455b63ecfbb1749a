//! Server module for the sale HTTP surface

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_sale_routes;
