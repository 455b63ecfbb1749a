//! Storefront server binary
//!
//! Boots the sale API against the in-memory repository and a seeded product
//! catalog. Configuration is read from the YAML file named by
//! `STOREFRONT_CONFIG` when set, otherwise defaults apply.

use anyhow::Result;
use std::sync::Arc;
use storefront::catalog::{Product, ProductCatalog};
use storefront::config::ApiConfig;
use storefront::server::{AppState, build_sale_routes};
use storefront::storage::InMemorySaleRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("STOREFRONT_CONFIG") {
        Ok(path) => ApiConfig::from_yaml_file(&path)?,
        Err(_) => ApiConfig::default(),
    };

    let catalog = ProductCatalog::new();
    seed_catalog(&catalog);

    let state = AppState {
        repository: Arc::new(InMemorySaleRepository::new()),
        validator: Arc::new(catalog),
        statuses: config.statuses.clone(),
    };

    let app = build_sale_routes(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Populate the catalog with demo products
fn seed_catalog(catalog: &ProductCatalog) {
    for (name, stock) in [
        ("Martian fabric", 10),
        ("Traction beam", 20),
        ("Heat sword", 30),
    ] {
        let product = Product::new(name, stock);
        tracing::info!(product = name, stock, id = %product.id, "seeded product");
        catalog.add(product);
    }
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
