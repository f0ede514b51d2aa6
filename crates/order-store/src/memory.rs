use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::OrderId;
use tokio::sync::RwLock;

use crate::{NewOrder, Order, Result, store::OrderStore};

/// In-memory order store implementation.
///
/// Used in tests and as the default store when no database is configured.
/// Provides the same interface as the PostgreSQL implementation; ids are
/// assigned sequentially under the write lock.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of orders stored.
    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Clears all stored orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, new_order: NewOrder) -> Result<Order> {
        let mut orders = self.orders.write().await;

        // Orders are never deleted, so the next key is always len + 1.
        let order = Order {
            id: OrderId::new(orders.len() as i64 + 1),
            sender_city: new_order.sender_city,
            sender_address: new_order.sender_address,
            receiver_city: new_order.receiver_city,
            receiver_address: new_order.receiver_address,
            weight: new_order.weight,
            pickup_date: new_order.pickup_date,
            created_at: Utc::now().naive_utc(),
        };

        orders.push(order.clone());
        Ok(order)
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let mut orders = self.orders.read().await.clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(orders)
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    fn new_order(sender_city: &str) -> NewOrder {
        NewOrder {
            sender_city: sender_city.to_string(),
            sender_address: "ул. Пушкина д. 5 кв. 12".to_string(),
            receiver_city: "Казань".to_string(),
            receiver_address: "ул. Ленина д. 10 кв. 5".to_string(),
            weight: Decimal::new(125, 1),
            pickup_date: NaiveDate::from_ymd_opt(2099, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = InMemoryOrderStore::new();

        let first = store.create(new_order("Москва")).await.unwrap();
        let second = store.create(new_order("Самара")).await.unwrap();

        assert_eq!(first.id, OrderId::new(1));
        assert_eq!(second.id, OrderId::new(2));
    }

    #[tokio::test]
    async fn create_sets_creation_timestamp() {
        let store = InMemoryOrderStore::new();
        let before = Utc::now().naive_utc();

        let order = store.create(new_order("Москва")).await.unwrap();

        assert!(order.created_at >= before);
    }

    #[tokio::test]
    async fn create_copies_fields_verbatim() {
        let store = InMemoryOrderStore::new();
        let submitted = new_order("Москва");

        let order = store.create(submitted.clone()).await.unwrap();

        assert_eq!(order.sender_city, submitted.sender_city);
        assert_eq!(order.sender_address, submitted.sender_address);
        assert_eq!(order.receiver_city, submitted.receiver_city);
        assert_eq!(order.receiver_address, submitted.receiver_address);
        assert_eq!(order.weight, submitted.weight);
        assert_eq!(order.pickup_date, submitted.pickup_date);
    }

    #[tokio::test]
    async fn list_all_empty_store() {
        let store = InMemoryOrderStore::new();
        let orders = store.list_all().await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn list_all_newest_first() {
        let store = InMemoryOrderStore::new();

        store.create(new_order("Москва")).await.unwrap();
        store.create(new_order("Самара")).await.unwrap();
        store.create(new_order("Пермь")).await.unwrap();

        let orders = store.list_all().await.unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].sender_city, "Пермь");
        assert_eq!(orders[1].sender_city, "Самара");
        assert_eq!(orders[2].sender_city, "Москва");
    }

    #[tokio::test]
    async fn get_by_id_found() {
        let store = InMemoryOrderStore::new();
        let created = store.create(new_order("Москва")).await.unwrap();

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_by_id_missing_is_none() {
        let store = InMemoryOrderStore::new();
        let fetched = store.get_by_id(OrderId::new(99)).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = InMemoryOrderStore::new();
        store.create(new_order("Москва")).await.unwrap();
        assert_eq!(store.count().await, 1);

        store.clear().await;
        assert_eq!(store.count().await, 0);
    }
}
