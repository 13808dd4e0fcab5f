//! Booking lifecycle: room and date checks, then the booking row and its
//! cleaning schedule in a single write.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{Context, ServiceError};
use crate::models::{Booking, CreateBooking, UpdateBooking};
use crate::services::CleaningOrderService;
use crate::store::{BookingStore, RoomStore};

/// Booking CRUD. Creating a booking also materializes its cleaning schedule.
#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
    rooms: Arc<dyn RoomStore>,
    cleaning_orders: CleaningOrderService,
}

fn check_stay(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<(), ServiceError> {
    if check_in >= check_out {
        return Err(ServiceError::validation(
            "check-in date must be before check-out date",
        ));
    }
    Ok(())
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        rooms: Arc<dyn RoomStore>,
        cleaning_orders: CleaningOrderService,
    ) -> Self {
        Self {
            bookings,
            rooms,
            cleaning_orders,
        }
    }

    /// Persists the booking together with every cleaning order of its stay.
    /// Both land in one transaction: a failed schedule leaves no booking.
    pub async fn create(&self, req: CreateBooking) -> Result<Booking, ServiceError> {
        self.rooms
            .get_by_id(req.room_id)
            .await
            .context("room not found")?;
        check_stay(req.check_in, req.check_out)?;

        let schedule = |booking: &Booking| self.cleaning_orders.schedule_for(booking);
        let (booking, scheduled) = self
            .bookings
            .create_with_schedule(&req, &schedule)
            .await
            .context("failed to create booking")?;

        log::info!(
            "booking {} created for room {} with {scheduled} cleaning orders",
            booking.id,
            booking.room_id
        );
        Ok(booking)
    }

    pub async fn get(&self, id: i64) -> Result<Booking, ServiceError> {
        self.bookings
            .get_by_id(id)
            .await
            .context("booking not found")
    }

    pub async fn list(&self) -> Result<Vec<Booking>, ServiceError> {
        self.bookings
            .list()
            .await
            .context("failed to get bookings")
    }

    /// Overwrites the booking. Orders generated for the old dates stay as
    /// they are.
    pub async fn update(&self, id: i64, req: UpdateBooking) -> Result<Booking, ServiceError> {
        let mut booking = self.get(id).await?;

        self.rooms
            .get_by_id(req.room_id)
            .await
            .context("room not found")?;
        check_stay(req.check_in, req.check_out)?;

        booking.room_id = req.room_id;
        booking.check_in = req.check_in;
        booking.check_out = req.check_out;
        booking.guests = req.guests;

        self.bookings
            .update(&booking)
            .await
            .context("failed to update booking")?;
        Ok(booking)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.bookings
            .delete(id)
            .await
            .context("failed to delete booking")
    }
}
