use async_trait::async_trait;
use common::OrderId;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{NewOrder, Order, Result, store::OrderStore};

/// PostgreSQL-backed order store implementation.
///
/// Id assignment and the creation timestamp are delegated to the database
/// (`BIGSERIAL` key, `DEFAULT now()` column), so concurrent creates need no
/// application-level coordination.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        Ok(Order {
            id: OrderId::new(row.try_get("id")?),
            sender_city: row.try_get("sender_city")?,
            sender_address: row.try_get("sender_address")?,
            receiver_city: row.try_get("receiver_city")?,
            receiver_address: row.try_get("receiver_address")?,
            weight: row.try_get("weight")?,
            pickup_date: row.try_get("pickup_date")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn create(&self, new_order: NewOrder) -> Result<Order> {
        let row = sqlx::query(
            r#"
            INSERT INTO orders (sender_city, sender_address, receiver_city, receiver_address, weight, pickup_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, sender_city, sender_address, receiver_city, receiver_address, weight, pickup_date, created_at
            "#,
        )
        .bind(&new_order.sender_city)
        .bind(&new_order.sender_address)
        .bind(&new_order.receiver_city)
        .bind(&new_order.receiver_address)
        .bind(new_order.weight)
        .bind(new_order.pickup_date)
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_order(row)
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, sender_city, sender_address, receiver_city, receiver_address, weight, pickup_date, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, sender_city, sender_address, receiver_city, receiver_address, weight, pickup_date, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_order(row)?)),
            None => Ok(None),
        }
    }
}
