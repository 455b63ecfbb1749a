//! HTTP-level tests for the sale API
//!
//! These tests validate the full request/response mapping contract through
//! real round-trips: JSON → HTTP request → handler → collaborators → HTTP
//! response → JSON.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use storefront::catalog::{Product, ProductCatalog};
use storefront::config::StatusMap;
use storefront::server::{AppState, build_sale_routes};
use storefront::storage::InMemorySaleRepository;
use uuid::Uuid;

/// Build a test server with a seeded catalog; returns the seeded products
fn make_server() -> (TestServer, Vec<Product>) {
    let catalog = ProductCatalog::new();
    let products = vec![
        Product::new("Martian fabric", 10),
        Product::new("Traction beam", 2),
    ];
    for product in &products {
        catalog.add(product.clone());
    }

    let state = AppState {
        repository: Arc::new(InMemorySaleRepository::new()),
        validator: Arc::new(catalog),
        statuses: StatusMap::default(),
    };

    let server = TestServer::new(build_sale_routes(state));
    (server, products)
}

fn entries_for(product: &Product, quantity: u32) -> Value {
    json!([{ "product_id": product.id, "quantity": quantity }])
}

// ==============================================================
// Create
// ==============================================================

#[tokio::test]
async fn test_create_returns_sale_with_id() {
    let (server, products) = make_server();

    let response = server
        .post("/sales")
        .json(&entries_for(&products[0], 3))
        .await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(body["id"].as_str().is_some());
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
    assert_eq!(body["entries"][0]["product_id"], products[0].id.to_string());
    assert_eq!(body["entries"][0]["quantity"], 3);
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let (server, products) = make_server();

    let created: Value = server
        .post("/sales")
        .json(&entries_for(&products[0], 2))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/sales/{}", id)).await;

    response.assert_status(StatusCode::OK);
    let fetched: Value = response.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_with_zero_quantity_is_invalid_data() {
    let (server, products) = make_server();

    let response = server
        .post("/sales")
        .json(&entries_for(&products[0], 0))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "invalid_data");
    assert_eq!(
        body["err"]["message"],
        "Wrong product ID or invalid quantity"
    );
}

#[tokio::test]
async fn test_create_with_unknown_product_is_invalid_data() {
    let (server, _) = make_server();

    let response = server
        .post("/sales")
        .json(&json!([{ "product_id": Uuid::new_v4(), "quantity": 1 }]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "invalid_data");
    assert_eq!(
        body["err"]["message"],
        "Wrong product ID or invalid quantity"
    );
}

#[tokio::test]
async fn test_create_with_missing_field_is_stock_problem() {
    let (server, products) = make_server();

    // Entry-format errors other than a bad selection surface under the
    // stock_problem code.
    let response = server
        .post("/sales")
        .json(&json!([{ "product_id": products[0].id }]))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "stock_problem");
    assert_eq!(
        body["err"]["message"],
        "Each sale entry needs a product id and a quantity"
    );
}

#[tokio::test]
async fn test_create_with_overdrawn_stock_is_stock_problem() {
    let (server, products) = make_server();

    // products[1] has 2 units in stock
    let response = server
        .post("/sales")
        .json(&entries_for(&products[1], 3))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "stock_problem");
    assert_eq!(body["err"]["message"], "Such amount is not permitted to sell");
}

#[tokio::test]
async fn test_create_reports_entry_failure_before_stock_failure() {
    let (server, products) = make_server();

    // First entry fails the format check, second overdraws stock; the
    // format failure wins.
    let body = json!([
        { "product_id": products[0].id, "quantity": 0 },
        { "product_id": products[1].id, "quantity": 999 },
    ]);
    let response = server.post("/sales").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "invalid_data");
}

#[tokio::test]
async fn test_create_with_non_list_body_is_stock_problem() {
    let (server, _) = make_server();

    let response = server.post("/sales").json(&json!({"quantity": 1})).await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "stock_problem");
    assert_eq!(body["err"]["message"], "Sale entries must be a list");
}

// ==============================================================
// Get
// ==============================================================

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let (server, _) = make_server();

    let response = server.get(&format!("/sales/{}", Uuid::new_v4())).await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "not_found");
    assert_eq!(body["err"]["message"], "Sale not found");
}

#[tokio::test]
async fn test_get_garbage_id_is_not_found() {
    let (server, _) = make_server();

    let response = server.get("/sales/not-a-uuid").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "not_found");
}

// ==============================================================
// List
// ==============================================================

#[tokio::test]
async fn test_list_with_no_sales_is_empty() {
    let (server, _) = make_server();

    let response = server.get("/sales").await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["sales"], json!([]));
}

#[tokio::test]
async fn test_list_contains_created_sales() {
    let (server, products) = make_server();

    for quantity in [1, 2, 3] {
        server
            .post("/sales")
            .json(&entries_for(&products[0], quantity))
            .await
            .assert_status(StatusCode::OK);
    }

    let body: Value = server.get("/sales").await.json();
    assert_eq!(body["sales"].as_array().unwrap().len(), 3);
}

// ==============================================================
// Update
// ==============================================================

#[tokio::test]
async fn test_update_replaces_entries() {
    let (server, products) = make_server();

    let created: Value = server
        .post("/sales")
        .json(&entries_for(&products[0], 1))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/sales/{}", id))
        .json(&entries_for(&products[1], 2))
        .await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["entries"][0]["product_id"], products[1].id.to_string());
    assert_eq!(body["entries"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_update_with_bad_entries_is_invalid_data_and_leaves_sale_alone() {
    let (server, products) = make_server();

    let created: Value = server
        .post("/sales")
        .json(&entries_for(&products[0], 1))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/sales/{}", id))
        .json(&json!([{ "product_id": products[0].id, "quantity": 0 }]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "invalid_data");

    // The repository was never invoked
    let fetched: Value = server.get(&format!("/sales/{}", id)).await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_unknown_id_is_invalid_data() {
    let (server, products) = make_server();

    let response = server
        .put(&format!("/sales/{}", Uuid::new_v4()))
        .json(&entries_for(&products[0], 1))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "invalid_data");
    assert_eq!(body["err"]["message"], "Sale not found");
}

// ==============================================================
// Delete
// ==============================================================

#[tokio::test]
async fn test_delete_returns_pre_delete_snapshot() {
    let (server, products) = make_server();

    let created: Value = server
        .post("/sales")
        .json(&entries_for(&products[0], 4))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server.delete(&format!("/sales/{}", id)).await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, created);

    // The sale is gone afterwards
    server
        .get(&format!("/sales/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let listed: Value = server.get("/sales").await.json();
    assert_eq!(listed["sales"], json!([]));
}

#[tokio::test]
async fn test_delete_unknown_id_is_invalid_data() {
    let (server, _) = make_server();

    let response = server.delete(&format!("/sales/{}", Uuid::new_v4())).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["err"]["code"], "invalid_data");
    assert_eq!(body["err"]["message"], "Wrong sale ID format");
}

#[tokio::test]
async fn test_delete_garbage_id_is_invalid_data() {
    let (server, _) = make_server();

    let response = server.delete("/sales/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["err"]["message"], "Wrong sale ID format");
}

// ==============================================================
// Repository failures
// ==============================================================

mod repository_failures {
    use super::*;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use storefront::core::repository::SaleRepository;
    use storefront::core::sale::{Sale, SaleEntry};

    /// Repository whose every operation fails
    struct BrokenRepository;

    #[async_trait]
    impl SaleRepository for BrokenRepository {
        async fn create(&self, _entries: Vec<SaleEntry>) -> Result<Sale> {
            Err(anyhow!("storage unavailable"))
        }

        async fn get(&self, _id: &str) -> Result<Option<Sale>> {
            Err(anyhow!("storage unavailable"))
        }

        async fn list(&self) -> Result<Vec<Sale>> {
            Err(anyhow!("storage unavailable"))
        }

        async fn update(&self, _id: &str, _entries: Vec<SaleEntry>) -> Result<Sale> {
            Err(anyhow!("storage unavailable"))
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            Err(anyhow!("storage unavailable"))
        }
    }

    fn make_broken_server() -> (TestServer, Product) {
        let catalog = ProductCatalog::new();
        let product = Product::new("Martian fabric", 10);
        catalog.add(product.clone());

        let state = AppState {
            repository: Arc::new(BrokenRepository),
            validator: Arc::new(catalog),
            statuses: StatusMap::default(),
        };

        let server = TestServer::new(build_sale_routes(state));
        (server, product)
    }

    #[tokio::test]
    async fn test_list_failure_is_internal_error_without_code() {
        let (server, _) = make_broken_server();

        let response = server.get("/sales").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["message"], "storage unavailable");
        assert!(body.get("err").is_none());
    }

    #[tokio::test]
    async fn test_get_failure_is_conflated_with_not_found() {
        let (server, _) = make_broken_server();

        let response = server.get(&format!("/sales/{}", Uuid::new_v4())).await;

        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["err"]["code"], "not_found");
        assert_eq!(body["err"]["message"], "storage unavailable");
    }

    #[tokio::test]
    async fn test_create_failure_is_stock_problem() {
        let (server, product) = make_broken_server();

        let response = server
            .post("/sales")
            .json(&entries_for(&product, 1))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["err"]["code"], "stock_problem");
        assert_eq!(body["err"]["message"], "storage unavailable");
    }

    #[tokio::test]
    async fn test_delete_failure_is_invalid_data() {
        let (server, _) = make_broken_server();

        let response = server.delete(&format!("/sales/{}", Uuid::new_v4())).await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["err"]["code"], "invalid_data");
        assert_eq!(body["err"]["message"], "storage unavailable");
    }
}

// ==============================================================
// Health
// ==============================================================

#[tokio::test]
async fn test_health_check() {
    let (server, _) = make_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
