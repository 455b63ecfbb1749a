//! HTTP handlers for sale operations
//!
//! Each handler is a single-pass orchestration: invoke the repository and/or
//! validator, interpret the outcome, emit one HTTP response. No state is
//! held across requests.
//!
//! The response contract is fixed for existing clients: get-by-id reports
//! every failure as not_found, and delete reports a missing sale as
//! invalid_data with the message "Wrong sale ID format".

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::config::StatusMap;
use crate::core::error::ApiError;
use crate::core::repository::SaleRepository;
use crate::core::sale::Sale;
use crate::core::validation::{SaleValidator, ValidationIssue};

/// Application state shared across sale handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn SaleRepository>,
    pub validator: Arc<dyn SaleValidator>,
    pub statuses: StatusMap,
}

/// Response for the list endpoint
#[derive(Debug, Serialize)]
pub struct ListSalesResponse {
    pub sales: Vec<Sale>,
}

/// Classify a rejected create request
///
/// An invalid product/quantity selection reports as invalid_data; every
/// other issue, malformed entries included, lands under stock_problem.
fn create_rejection(issue: ValidationIssue) -> ApiError {
    match issue {
        ValidationIssue::InvalidSelection => ApiError::invalid_data(issue.to_string()),
        other => ApiError::stock_problem(other.to_string()),
    }
}

/// List all sales
///
/// GET /sales
pub async fn list_sales(State(state): State<AppState>) -> Response {
    match state.repository.list().await {
        Ok(sales) => (
            state.statuses.success(),
            Json(ListSalesResponse { sales }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to list sales");
            ApiError::internal(e.to_string()).respond(&state.statuses)
        }
    }
}

/// Get a sale by id
///
/// GET /sales/{id}
pub async fn get_sale(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.repository.get(&id).await {
        Ok(Some(sale)) => (state.statuses.success(), Json(sale)).into_response(),
        Ok(None) => ApiError::not_found("Sale not found").respond(&state.statuses),
        Err(e) => {
            tracing::warn!(error = %e, sale_id = %id, "failed to fetch sale");
            ApiError::not_found(e.to_string()).respond(&state.statuses)
        }
    }
}

/// Create a sale from an entry collection
///
/// POST /sales
///
/// Both validations run before either result is inspected; when both fail,
/// the entry-format failure is the one reported.
pub async fn create_sale(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let entry_check = state.validator.verify_entries(&body);
    let product_check = state.validator.verify_product(&body).await;

    let entries = match entry_check {
        Ok(entries) => entries,
        Err(issue) => return create_rejection(issue).respond(&state.statuses),
    };

    if let Some(issue) = product_check {
        return create_rejection(issue).respond(&state.statuses);
    }

    match state.repository.create(entries).await {
        Ok(sale) => (state.statuses.success(), Json(sale)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to persist sale");
            ApiError::stock_problem(e.to_string()).respond(&state.statuses)
        }
    }
}

/// Replace the entries of a sale
///
/// PUT /sales/{id}
///
/// Only the entry-format check runs here; existence is delegated entirely to
/// the repository.
pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let entries = match state.validator.verify_entries(&body) {
        Ok(entries) => entries,
        Err(issue) => return ApiError::invalid_data(issue.to_string()).respond(&state.statuses),
    };

    match state.repository.update(&id, entries).await {
        Ok(sale) => (state.statuses.success(), Json(sale)).into_response(),
        Err(e) => ApiError::invalid_data(e.to_string()).respond(&state.statuses),
    }
}

/// Delete a sale
///
/// DELETE /sales/{id}
///
/// The sale is fetched first; the success body is that pre-deletion
/// snapshot.
pub async fn delete_sale(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.repository.get(&id).await {
        Ok(Some(sale)) => match state.repository.delete(&id).await {
            Ok(()) => (state.statuses.success(), Json(sale)).into_response(),
            Err(e) => {
                tracing::warn!(error = %e, sale_id = %id, "failed to delete sale");
                ApiError::invalid_data(e.to_string()).respond(&state.statuses)
            }
        },
        Ok(None) => ApiError::invalid_data("Wrong sale ID format").respond(&state.statuses),
        Err(e) => ApiError::invalid_data(e.to_string()).respond(&state.statuses),
    }
}
