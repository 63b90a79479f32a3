//! Order storage
//!
//! The store is constructed once at process start and injected into the
//! handler layer behind [`OrderStore`], keeping handlers testable against
//! isolated instances.

pub mod in_memory;

pub use in_memory::InMemoryOrderStore;

use crate::core::{Order, OrderPayload, OrderResult};
use async_trait::async_trait;

/// Outcome discriminator for the email-keyed upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new order was appended
    Created,
    /// An existing order with the same email was replaced in place
    Updated,
}

/// Storage abstraction for the order collection
///
/// The collection is a single ordered sequence: iteration order equals
/// insertion order, except that in-place replacement keeps the original
/// position. At most one order per distinct email is retained, enforced by
/// [`upsert_by_email`](OrderStore::upsert_by_email) replacing rather than
/// rejecting.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// List all orders in insertion order
    async fn list(&self) -> OrderResult<Vec<Order>>;

    /// Find the first order with the given email
    async fn find_by_email(&self, email: &str) -> OrderResult<Option<Order>>;

    /// Find the first order with the given id
    async fn find_by_id(&self, id: u64) -> OrderResult<Option<Order>>;

    /// Create an order, or update the existing one with the same email
    ///
    /// An existing order keeps its id; only its fields are replaced. A new
    /// order is appended under the next sequential id.
    async fn upsert_by_email(
        &self,
        payload: OrderPayload,
    ) -> OrderResult<(Order, UpsertOutcome)>;

    /// Replace the order matching the payload's email with the payload
    ///
    /// Unlike the upsert, this stores the payload as given, including
    /// whatever id it carries. Fails with `EmailNotFound` when no order has
    /// that email, except that an empty email skips the existence check
    /// entirely (a pass-through kept for compatibility with the original
    /// contract).
    async fn replace_by_email(&self, payload: OrderPayload) -> OrderResult<Order>;

    /// Remove and return the order with the given id
    async fn delete_by_id(&self, id: u64) -> OrderResult<Order>;

    /// Remove and return the order with the given email
    async fn delete_by_email(&self, email: &str) -> OrderResult<Order>;
}
