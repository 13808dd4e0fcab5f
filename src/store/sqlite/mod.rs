//! SQLite-backed stores sharing one `SqlitePool`.

mod bookings;
mod cleaners;
mod cleaning_orders;
mod rooms;

pub use bookings::SqliteBookingStore;
pub use cleaners::SqliteCleanerStore;
pub use cleaning_orders::SqliteCleaningOrderStore;
pub use rooms::SqliteRoomStore;

use sqlx::sqlite::SqliteQueryResult;

use super::{StoreError, StoreResult};

/// UPDATE/DELETE that touched nothing means the row was not there.
fn expect_affected(result: SqliteQueryResult) -> StoreResult<()> {
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
