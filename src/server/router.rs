//! Router builder for the sale API

use crate::server::handlers::{
    AppState, create_sale, delete_sale, get_sale, list_sales, update_sale,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Build the sale routes
///
/// - GET    /sales       - List all sales
/// - POST   /sales       - Create a sale from an entry collection
/// - GET    /sales/{id}  - Get a sale
/// - PUT    /sales/{id}  - Replace a sale's entries
/// - DELETE /sales/{id}  - Delete a sale
pub fn build_sale_routes(state: AppState) -> Router {
    Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route(
            "/sales/{id}",
            get(get_sale).put(update_sale).delete(delete_sale),
        )
        .with_state(state)
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
}

/// Build health check routes
fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "storefront"
    }))
}
