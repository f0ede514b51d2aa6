//! Domain error types.

use common::OrderId;
use order_store::StoreError;
use thiserror::Error;

use crate::order::ValidationErrors;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more field-level rule violations; nothing was persisted.
    #[error("Order validation failed: {0}")]
    Validation(ValidationErrors),

    /// The requested order does not exist.
    #[error("Order {0} not found")]
    NotFound(OrderId),

    /// An error occurred in the order store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
