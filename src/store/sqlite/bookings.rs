use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use super::cleaning_orders::insert_orders;
use super::expect_affected;
use crate::models::{Booking, CreateBooking};
use crate::store::{BookingStore, ScheduleFn, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct SqliteBookingStore {
    pool: SqlitePool,
}

impl SqliteBookingStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn insert_booking(
    conn: &mut SqliteConnection,
    booking: &CreateBooking,
) -> Result<Booking, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (room_id, check_in, check_out, guests)
        VALUES (?, ?, ?, ?)
        RETURNING id, room_id, check_in, check_out, guests
        "#,
    )
    .bind(booking.room_id)
    .bind(booking.check_in)
    .bind(booking.check_out)
    .bind(booking.guests)
    .fetch_one(conn)
    .await
}

#[async_trait]
impl BookingStore for SqliteBookingStore {
    async fn create(&self, booking: &CreateBooking) -> StoreResult<Booking> {
        let mut conn = self.pool.acquire().await?;
        Ok(insert_booking(&mut *conn, booking).await?)
    }

    async fn create_with_schedule(
        &self,
        booking: &CreateBooking,
        schedule: ScheduleFn<'_>,
    ) -> StoreResult<(Booking, u64)> {
        let mut tx = self.pool.begin().await?;

        let created = insert_booking(&mut *tx, booking).await?;
        let orders = schedule(&created);
        let written = insert_orders(&mut *tx, &orders).await?;

        tx.commit().await?;
        Ok((created, written))
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "SELECT id, room_id, check_in, check_out, guests FROM bookings WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT id, room_id, check_in, check_out, guests FROM bookings ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    async fn update(&self, booking: &Booking) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET room_id = ?, check_in = ?, check_out = ?, guests = ?
            WHERE id = ?
            "#,
        )
        .bind(booking.room_id)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests)
        .bind(booking.id)
        .execute(&self.pool)
        .await?;
        expect_affected(result)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result)
    }
}
