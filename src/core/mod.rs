//! Core domain types and errors

pub mod error;
pub mod order;

pub use error::{FailureBody, OrderError, OrderResult};
pub use order::{Dish, Drink, Order, OrderPayload};
