//! # Orderdesk
//!
//! A minimal order-management HTTP API: clients create, read, update, and
//! delete order records held in process memory.
//!
//! ## Semantics
//!
//! - **Email-keyed upsert**: the create endpoint replaces an existing order
//!   with the same email in place, keeping its id; otherwise it appends
//!   under the next sequential id.
//! - **Explicit replace**: the update endpoint swaps the full order for the
//!   payload as given, including the payload's own id.
//! - **Unified delete**: one DELETE route serves both key spaces - a
//!   numeric key deletes by id, anything else deletes by email.
//! - **HTTP 200 everywhere**: logical failure is reported through
//!   `success: false` in the body, never through the status code. Existing
//!   clients depend on this.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orderdesk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = InMemoryOrderStore::new();
//!     let config = ServerConfig::default();
//!     orderdesk::server::serve(&config, Arc::new(store)).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{Dish, Drink, FailureBody, Order, OrderError, OrderPayload, OrderResult};

    // === Storage ===
    pub use crate::storage::{InMemoryOrderStore, OrderStore, UpsertOutcome};

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
