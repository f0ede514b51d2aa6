//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency and truncate
//! the orders table between tests, so they are serialized with `#[serial]`.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use order_store::{NewOrder, OrderId, OrderStore, PostgresOrderStore};
use rust_decimal::Decimal;
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for migrations
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!(
                "../../../migrations/001_create_orders_table.sql"
            ))
            .execute(&temp_pool)
            .await
            .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and a cleared table
async fn get_test_store() -> PostgresOrderStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    // Clear the table and reset the id sequence for test isolation
    sqlx::query("TRUNCATE TABLE orders RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();

    PostgresOrderStore::new(pool)
}

fn pickup_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2099, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn new_order(sender_city: &str) -> NewOrder {
    NewOrder {
        sender_city: sender_city.to_string(),
        sender_address: "ул. Пушкина д. 5 кв. 12".to_string(),
        receiver_city: "Казань".to_string(),
        receiver_address: "ул. Ленина д. 10 кв. 5".to_string(),
        weight: Decimal::new(125, 1),
        pickup_date: pickup_date(),
    }
}

#[tokio::test]
#[serial]
async fn create_assigns_id_and_timestamp() {
    let store = get_test_store().await;
    let before = Utc::now().naive_utc();

    let order = store.create(new_order("Москва")).await.unwrap();

    assert_eq!(order.id, OrderId::new(1));
    assert_eq!(order.sender_city, "Москва");
    assert_eq!(order.weight, Decimal::new(125, 1));
    assert_eq!(order.pickup_date, pickup_date());
    // The container clock and the test clock can differ slightly; only
    // sanity-check that a timestamp was assigned near the present.
    assert!(order.created_at > before - chrono::Duration::minutes(5));
}

#[tokio::test]
#[serial]
async fn create_and_get_roundtrip() {
    let store = get_test_store().await;

    let created = store.create(new_order("Москва")).await.unwrap();
    let fetched = store.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

#[tokio::test]
#[serial]
async fn get_by_id_missing_is_none() {
    let store = get_test_store().await;

    let fetched = store.get_by_id(OrderId::new(12345)).await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
#[serial]
async fn list_all_empty_table() {
    let store = get_test_store().await;

    let orders = store.list_all().await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
#[serial]
async fn list_all_newest_first() {
    let store = get_test_store().await;

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
#[serial]
async fn concurrent_creates_get_distinct_increasing_ids() {
    let store = get_test_store().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(new_order(&format!("Город-{i}"))).await.unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().id.as_i64());
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert!(ids.iter().all(|&id| id >= 1));
}
