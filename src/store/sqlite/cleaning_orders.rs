use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::expect_affected;
use crate::models::{CleaningOrder, NewCleaningOrder};
use crate::store::{CleaningOrderStore, StoreError, StoreResult};

const ORDER_COLUMNS: &str = "id, booking_id, scheduled_at, kind, cost, done, notes";

// Six binds per row keeps each statement under SQLite's default limit of
// 999 bound parameters.
const ROWS_PER_INSERT: usize = 100;

/// Inserts `orders` on the given connection, in statements of at most
/// `ROWS_PER_INSERT` rows. Atomicity is up to the caller's transaction.
pub(super) async fn insert_orders(
    conn: &mut SqliteConnection,
    orders: &[NewCleaningOrder],
) -> Result<u64, sqlx::Error> {
    let mut written = 0;

    for chunk in orders.chunks(ROWS_PER_INSERT) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT INTO cleaning_orders (booking_id, scheduled_at, kind, cost, done, notes) ",
        );
        builder.push_values(chunk, |mut row, order| {
            row.push_bind(order.booking_id)
                .push_bind(order.scheduled_at)
                .push_bind(order.kind)
                .push_bind(order.cost)
                .push_bind(order.done)
                .push_bind(order.notes.clone());
        });

        written += builder.build().execute(&mut *conn).await?.rows_affected();
    }

    Ok(written)
}

#[derive(Debug, Clone)]
pub struct SqliteCleaningOrderStore {
    pool: SqlitePool,
}

impl SqliteCleaningOrderStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CleaningOrderStore for SqliteCleaningOrderStore {
    async fn create(&self, order: &NewCleaningOrder) -> StoreResult<CleaningOrder> {
        let order = sqlx::query_as::<_, CleaningOrder>(&format!(
            r#"
            INSERT INTO cleaning_orders (booking_id, scheduled_at, kind, cost, done, notes)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order.booking_id)
        .bind(order.scheduled_at)
        .bind(order.kind)
        .bind(order.cost)
        .bind(order.done)
        .bind(&order.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    async fn create_many(&self, orders: &[NewCleaningOrder]) -> StoreResult<u64> {
        if orders.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let written = insert_orders(&mut *tx, orders).await?;
        tx.commit().await?;

        Ok(written)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<CleaningOrder> {
        sqlx::query_as::<_, CleaningOrder>(&format!(
            "SELECT {ORDER_COLUMNS} FROM cleaning_orders WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<CleaningOrder>> {
        let orders = sqlx::query_as::<_, CleaningOrder>(&format!(
            "SELECT {ORDER_COLUMNS} FROM cleaning_orders ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(orders)
    }

    async fn update(&self, order: &CleaningOrder) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE cleaning_orders
            SET booking_id = ?, scheduled_at = ?, kind = ?, cost = ?, done = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(order.booking_id)
        .bind(order.scheduled_at)
        .bind(order.kind)
        .bind(order.cost)
        .bind(order.done)
        .bind(&order.notes)
        .bind(order.id)
        .execute(&self.pool)
        .await?;
        expect_affected(result)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM cleaning_orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }

    async fn assign_cleaner(&self, order_id: i64, cleaner_id: i64) -> StoreResult<()> {
        sqlx::query("INSERT INTO cleaner_orders (order_id, cleaner_id) VALUES (?, ?)")
            .bind(order_id)
            .bind(cleaner_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove_cleaner(&self, order_id: i64, cleaner_id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM cleaner_orders WHERE order_id = ? AND cleaner_id = ?")
            .bind(order_id)
            .bind(cleaner_id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }

    async fn list_by_cleaner(&self, cleaner_id: i64) -> StoreResult<Vec<CleaningOrder>> {
        let orders = sqlx::query_as::<_, CleaningOrder>(
            r#"
            SELECT o.id AS id, o.booking_id AS booking_id, o.scheduled_at AS scheduled_at,
                   o.kind AS kind, o.cost AS cost, o.done AS done, o.notes AS notes
            FROM cleaning_orders o
            JOIN cleaner_orders co ON co.order_id = o.id
            WHERE co.cleaner_id = ?
            ORDER BY o.id
            "#,
        )
        .bind(cleaner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(orders)
    }
}
