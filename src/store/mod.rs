//! Persistence ports used by the services.
//!
//! Every store is an `async_trait` object so services can be wired against
//! the SQLite implementations in [`sqlite`] or against test doubles.

use async_trait::async_trait;

use crate::models::{
    Booking, Cleaner, CleaningOrder, CreateBooking, CreateCleaner, CreateRoom, NewCleaningOrder,
    Room,
};

pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no matching row")]
    NotFound,
    #[error("duplicate entry: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::Conflict(db.message().to_string())
            }
            // A row referenced by the statement disappeared under us.
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}

/// Builds the orders for a freshly inserted booking. Called inside the
/// booking's transaction, once its id is known.
pub type ScheduleFn<'a> = &'a (dyn Fn(&Booking) -> Vec<NewCleaningOrder> + Send + Sync);

#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn create(&self, room: &CreateRoom) -> StoreResult<Room>;
    async fn get_by_id(&self, id: i64) -> StoreResult<Room>;
    async fn list(&self) -> StoreResult<Vec<Room>>;
    async fn update(&self, room: &Room) -> StoreResult<()>;
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create(&self, booking: &CreateBooking) -> StoreResult<Booking>;

    /// Inserts the booking and the orders produced by `schedule` atomically.
    /// Returns the booking and the number of orders written.
    async fn create_with_schedule(
        &self,
        booking: &CreateBooking,
        schedule: ScheduleFn<'_>,
    ) -> StoreResult<(Booking, u64)>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Booking>;
    async fn list(&self) -> StoreResult<Vec<Booking>>;
    async fn update(&self, booking: &Booking) -> StoreResult<()>;
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait CleanerStore: Send + Sync {
    async fn create(&self, cleaner: &CreateCleaner) -> StoreResult<Cleaner>;
    async fn get_by_id(&self, id: i64) -> StoreResult<Cleaner>;
    async fn list(&self) -> StoreResult<Vec<Cleaner>>;
    async fn update(&self, cleaner: &Cleaner) -> StoreResult<()>;
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait CleaningOrderStore: Send + Sync {
    async fn create(&self, order: &NewCleaningOrder) -> StoreResult<CleaningOrder>;

    /// All-or-nothing bulk insert. Returns the number of rows written.
    async fn create_many(&self, orders: &[NewCleaningOrder]) -> StoreResult<u64>;

    async fn get_by_id(&self, id: i64) -> StoreResult<CleaningOrder>;
    async fn list(&self) -> StoreResult<Vec<CleaningOrder>>;
    async fn update(&self, order: &CleaningOrder) -> StoreResult<()>;
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Fails with [`StoreError::Conflict`] when the pair already exists.
    async fn assign_cleaner(&self, order_id: i64, cleaner_id: i64) -> StoreResult<()>;

    /// Fails with [`StoreError::NotFound`] when the pair does not exist.
    async fn remove_cleaner(&self, order_id: i64, cleaner_id: i64) -> StoreResult<()>;

    /// Orders linked to the cleaner, by ascending order id.
    async fn list_by_cleaner(&self, cleaner_id: i64) -> StoreResult<Vec<CleaningOrder>>;
}
