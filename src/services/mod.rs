//! Business operations, one component per aggregate.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::store::sqlite::{
    SqliteBookingStore, SqliteCleanerStore, SqliteCleaningOrderStore, SqliteRoomStore,
};
use crate::store::{BookingStore, CleanerStore, CleaningOrderStore, RoomStore};

pub mod bookings;
pub mod cleaners;
pub mod cleaning_orders;
pub mod pricing;
pub mod rooms;
pub mod schedule;

pub use bookings::BookingService;
pub use cleaners::CleanerService;
pub use cleaning_orders::CleaningOrderService;
pub use rooms::RoomService;

/// The store handles the services are built from.
#[derive(Clone)]
pub struct Stores {
    pub rooms: Arc<dyn RoomStore>,
    pub bookings: Arc<dyn BookingStore>,
    pub cleaners: Arc<dyn CleanerStore>,
    pub cleaning_orders: Arc<dyn CleaningOrderStore>,
}

impl Stores {
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self {
            rooms: Arc::new(SqliteRoomStore::new(pool.clone())),
            bookings: Arc::new(SqliteBookingStore::new(pool.clone())),
            cleaners: Arc::new(SqliteCleanerStore::new(pool.clone())),
            cleaning_orders: Arc::new(SqliteCleaningOrderStore::new(pool)),
        }
    }
}

/// Every service the transport layer talks to.
#[derive(Clone)]
pub struct Services {
    pub rooms: RoomService,
    pub bookings: BookingService,
    pub cleaners: CleanerService,
    pub cleaning_orders: CleaningOrderService,
}

impl Services {
    pub fn new(stores: Stores) -> Self {
        let cleaning_orders = CleaningOrderService::new(
            stores.cleaning_orders,
            stores.bookings.clone(),
            stores.cleaners.clone(),
        );

        Self {
            rooms: RoomService::new(stores.rooms.clone()),
            bookings: BookingService::new(stores.bookings, stores.rooms, cleaning_orders.clone()),
            cleaners: CleanerService::new(stores.cleaners),
            cleaning_orders,
        }
    }
}
