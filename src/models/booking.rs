use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub check_in: DateTime<Utc>,
    /// Exclusive end of the stay.
    pub check_out: DateTime<Utc>,
    pub guests: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub room_id: i64,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i64,
}

/// Full replacement of a booking row. Already generated cleaning orders are
/// left as they are.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBooking {
    pub room_id: i64,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i64,
}
