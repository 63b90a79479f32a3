//! In-memory implementation of OrderStore
//!
//! The whole collection sits behind one `RwLock`; every operation takes the
//! lock for its full duration. The original service this replaces ran
//! single-threaded with no protection, so the lock is the hardening that
//! makes the store safe under a multi-threaded runtime.

use crate::core::{Order, OrderError, OrderPayload, OrderResult};
use crate::storage::{OrderStore, UpsertOutcome};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

struct StoreInner {
    orders: Vec<Order>,
    next_id: u64,
}

/// In-memory order store
///
/// Cheap to clone; clones share the same underlying collection.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryOrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    /// Create a store pre-populated with seed orders
    ///
    /// The id counter starts above the highest seeded id, so store-assigned
    /// ids never collide with seed data.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let next_id = orders.iter().map(|o| o.id).max().map_or(1, |max| max + 1);
        Self {
            inner: Arc::new(RwLock::new(StoreInner { orders, next_id })),
        }
    }

    fn read(&self) -> OrderResult<std::sync::RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|e| OrderError::Internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> OrderResult<std::sync::RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|e| OrderError::Internal(format!("Failed to acquire write lock: {}", e)))
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list(&self) -> OrderResult<Vec<Order>> {
        let inner = self.read()?;

        Ok(inner.orders.clone())
    }

    async fn find_by_email(&self, email: &str) -> OrderResult<Option<Order>> {
        let inner = self.read()?;

        Ok(inner.orders.iter().find(|o| o.email == email).cloned())
    }

    async fn find_by_id(&self, id: u64) -> OrderResult<Option<Order>> {
        let inner = self.read()?;

        Ok(inner.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn upsert_by_email(
        &self,
        payload: OrderPayload,
    ) -> OrderResult<(Order, UpsertOutcome)> {
        let mut inner = self.write()?;

        if let Some(existing) = inner.orders.iter_mut().find(|o| o.email == payload.email) {
            // Replace the fields but keep the original id; the upsert path
            // never overwrites an assigned id.
            let id = existing.id;
            *existing = payload.into_order(id);
            return Ok((existing.clone(), UpsertOutcome::Updated));
        }

        let id = inner.next_id;
        let order = payload.into_order(id);
        inner.orders.push(order.clone());
        inner.next_id += 1;

        Ok((order, UpsertOutcome::Created))
    }

    async fn replace_by_email(&self, payload: OrderPayload) -> OrderResult<Order> {
        let mut inner = self.write()?;

        // An empty email skips the existence check. The contract this store
        // reproduces let a falsy email fall through here, so the request
        // succeeds without matching (or changing) anything.
        let email = payload.email.clone();
        if !email.is_empty() && !inner.orders.iter().any(|o| o.email == email) {
            return Err(OrderError::EmailNotFound);
        }

        let id = payload.id.unwrap_or(0);
        let replacement = payload.into_order(id);
        for slot in inner.orders.iter_mut().filter(|o| o.email == email) {
            *slot = replacement.clone();
        }

        Ok(replacement)
    }

    async fn delete_by_id(&self, id: u64) -> OrderResult<Order> {
        let mut inner = self.write()?;

        let position = inner
            .orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| OrderError::NotFoundByKey {
                key: id.to_string(),
            })?;

        Ok(inner.orders.remove(position))
    }

    async fn delete_by_email(&self, email: &str) -> OrderResult<Order> {
        let mut inner = self.write()?;

        let position = inner
            .orders
            .iter()
            .position(|o| o.email == email)
            .ok_or_else(|| OrderError::NotFoundByKey {
                key: email.to_string(),
            })?;

        Ok(inner.orders.remove(position))
    }
}
