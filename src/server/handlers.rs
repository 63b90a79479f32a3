//! HTTP handlers for order operations
//!
//! Every handler returns HTTP 200; the logical outcome travels in the
//! `success` field of the body. Failures short-circuit through
//! [`OrderError`]'s `IntoResponse`, which renders the
//! `{success: false, error}` body under the same status.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::{Order, OrderError, OrderPayload};
use crate::storage::{OrderStore, UpsertOutcome};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
}

/// Response for the create-order endpoint
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub message: String,
    pub order: Order,
}

/// Response for the update-order endpoint
#[derive(Debug, Serialize)]
pub struct UpdateOrderResponse {
    pub success: bool,
    pub order: Order,
}

/// Response for the delete endpoint
#[derive(Debug, Serialize)]
pub struct DeleteOrderResponse {
    pub success: bool,
    /// Wire name kept from the original contract
    #[serde(rename = "deletedorder")]
    pub deleted_order: Order,
}

/// List all orders
///
/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, OrderError> {
    let orders = state.store.list().await?;

    tracing::debug!(count = orders.len(), "listing orders");

    Ok(Json(orders))
}

/// Create an order, or update the existing one with the same email
///
/// POST /api/create-order
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CreateOrderResponse>, OrderError> {
    let payload = OrderPayload::from_value(body)?;

    let (order, outcome) = state.store.upsert_by_email(payload).await?;

    let message = match outcome {
        UpsertOutcome::Created => "Order created successfully",
        UpsertOutcome::Updated => "Order updated successfully",
    };
    tracing::info!(id = order.id, email = %order.email, ?outcome, "upserted order");

    Ok(Json(CreateOrderResponse {
        success: true,
        message: message.to_string(),
        order,
    }))
}

/// Replace the order matching the payload's email
///
/// PUT /api/update-order
///
/// Unlike create-order this stores the payload as given, including its id.
pub async fn update_order(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<UpdateOrderResponse>, OrderError> {
    let payload = OrderPayload::from_value(body)?;

    let order = state.store.replace_by_email(payload).await?;

    tracing::info!(id = order.id, email = %order.email, "replaced order");

    Ok(Json(UpdateOrderResponse {
        success: true,
        order,
    }))
}

/// Fetch a single order by email
///
/// GET /api/order/{email}
pub async fn get_order(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Order>, OrderError> {
    let order = state
        .store
        .find_by_email(&email)
        .await?
        .ok_or(OrderError::NotFoundByEmail { email })?;

    Ok(Json(order))
}

/// Delete an order by id or by email
///
/// DELETE /api/order/{key}
///
/// The two delete behaviors share one path, dispatched on the key's
/// content: a key that parses as an integer deletes by order id, anything
/// else deletes by email. Real emails always carry non-numeric characters,
/// so the two key spaces never collide.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteOrderResponse>, OrderError> {
    let deleted = match key.parse::<u64>() {
        Ok(id) => state.store.delete_by_id(id).await?,
        Err(_) => state.store.delete_by_email(&key).await?,
    };

    tracing::info!(id = deleted.id, email = %deleted.email, "deleted order");

    Ok(Json(DeleteOrderResponse {
        success: true,
        deleted_order: deleted,
    }))
}

/// Liveness probe
///
/// GET /health
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
