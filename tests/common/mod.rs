#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use cleany::models::{Booking, Cleaner, CreateBooking, CreateCleaner, CreateRoom, Room};
use cleany::services::{Services, Stores};

/// Fresh in-memory database with the schema applied. One connection, so
/// every query sees the same database.
pub async fn pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    cleany::db::MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

pub async fn services() -> (Services, SqlitePool) {
    let pool = pool().await;
    (Services::new(Stores::sqlite(pool.clone())), pool)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub async fn room(services: &Services) -> Room {
    services
        .rooms
        .create(CreateRoom {
            floor: 2,
            desc: Some("sea view".into()),
        })
        .await
        .expect("room")
}

pub async fn cleaner(services: &Services, name: &str) -> Cleaner {
    services
        .cleaners
        .create(CreateCleaner {
            name: name.into(),
            surname: "Petrova".into(),
        })
        .await
        .expect("cleaner")
}

pub async fn booking(
    services: &Services,
    room_id: i64,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> Booking {
    services
        .bookings
        .create(CreateBooking {
            room_id,
            check_in,
            check_out,
            guests: 2,
        })
        .await
        .expect("booking")
}
