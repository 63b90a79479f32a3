//! Router construction for the order API
//!
//! Routes:
//! - GET    /api/orders             - List all orders
//! - POST   /api/create-order       - Create or update an order by email
//! - PUT    /api/update-order       - Replace an order by email
//! - GET    /api/order/{key}        - Fetch an order by email
//! - DELETE /api/order/{key}        - Delete by id (numeric key) or email
//! - GET    /health                 - Liveness probe

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::{
    AppState, create_order, delete_order, get_order, health, list_orders, update_order,
};

/// Build the API router with CORS and request tracing layers
///
/// The API is consumed from browsers on other origins, so CORS stays
/// permissive, matching the deployment this replaces.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/orders", get(list_orders))
        .route("/api/create-order", post(create_order))
        .route("/api/update-order", put(update_order))
        .route("/api/order/{key}", get(get_order).delete(delete_order))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
