use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CleaningKind {
    /// Mid-stay tidy-up.
    Periodic,
    /// Turnover clean after checkout.
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CleaningOrder {
    pub id: i64,
    pub booking_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub kind: CleaningKind,
    pub cost: i64,
    pub done: bool,
    pub notes: Option<String>,
}

/// An order that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCleaningOrder {
    pub booking_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub kind: CleaningKind,
    pub cost: i64,
    pub done: bool,
    pub notes: Option<String>,
}

/// `cost` left out or set to 0 means "estimate from kind".
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCleaningOrder {
    pub booking_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub kind: CleaningKind,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub done: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCleaningOrder {
    pub booking_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub kind: CleaningKind,
    pub cost: i64,
    #[serde(default)]
    pub done: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssignCleaner {
    pub cleaner_id: i64,
}
