use async_trait::async_trait;
use common::OrderId;

use crate::{NewOrder, Order, Result};

/// Core trait for order store implementations.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a validated submission and returns the stored record.
    ///
    /// The store assigns the next integer id and the creation timestamp.
    /// Ids are distinct and strictly increasing, even under concurrent
    /// calls; uniqueness is delegated to the persistence medium, not to
    /// application-level locking.
    async fn create(&self, new_order: NewOrder) -> Result<Order>;

    /// Returns every stored order, most recently created first.
    ///
    /// Orders sharing a creation timestamp come back newest insertion
    /// first. Returns an empty vec, never an error, when nothing has
    /// been stored.
    async fn list_all(&self) -> Result<Vec<Order>>;

    /// Returns the order with the given id, or `None` if it was never
    /// created. A missing id is not an error.
    async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>>;
}
