//! Order service orchestrating validation and storage.

use chrono::Utc;
use common::OrderId;
use order_store::{Order, OrderStore};

use crate::error::DomainError;
use crate::order::{CreateOrder, validate};

/// Service for managing orders.
///
/// The only mutating entry point in the system: submissions pass through
/// validation before they reach the store, and invalid submissions never do.
pub struct OrderService<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    /// Creates a new order service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and persists an order submission.
    ///
    /// On validation failure, returns the full per-field message set without
    /// calling the store. Otherwise returns the stored order with its
    /// assigned id and creation timestamp.
    #[tracing::instrument(skip(self))]
    pub async fn create_order(&self, cmd: CreateOrder) -> Result<Order, DomainError> {
        let new_order = match validate::validate(&cmd, Utc::now().naive_utc()) {
            Ok(new_order) => new_order,
            Err(errors) => {
                metrics::counter!("orders_rejected_total").increment(1);
                tracing::warn!(fields = errors.len(), "rejected invalid order submission");
                return Err(DomainError::Validation(errors));
            }
        };

        let order = self.store.create(new_order).await?;
        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, "created order");
        Ok(order)
    }

    /// Returns all orders, most recently created first.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.list_all().await?)
    }

    /// Loads an order by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, DomainError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(id))
    }
}
