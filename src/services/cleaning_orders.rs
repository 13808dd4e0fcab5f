//! Cleaning orders: creation from a booking's schedule, CRUD, and the
//! link between orders and the cleaners working them.

use std::sync::Arc;

use crate::error::{Context, ServiceError};
use crate::models::{
    Booking, CleaningOrder, CreateCleaningOrder, NewCleaningOrder, UpdateCleaningOrder,
};
use crate::services::{pricing, schedule};
use crate::store::{BookingStore, CleanerStore, CleaningOrderStore};

/// Owns cleaning orders and their many-to-many link to cleaners.
#[derive(Clone)]
pub struct CleaningOrderService {
    orders: Arc<dyn CleaningOrderStore>,
    bookings: Arc<dyn BookingStore>,
    cleaners: Arc<dyn CleanerStore>,
}

impl CleaningOrderService {
    pub fn new(
        orders: Arc<dyn CleaningOrderStore>,
        bookings: Arc<dyn BookingStore>,
        cleaners: Arc<dyn CleanerStore>,
    ) -> Self {
        Self {
            orders,
            bookings,
            cleaners,
        }
    }

    /// Priced orders for the whole stay, not yet persisted.
    pub fn schedule_for(&self, booking: &Booking) -> Vec<NewCleaningOrder> {
        schedule::generate(booking.check_in, booking.check_out)
            .into_iter()
            .map(|task| NewCleaningOrder {
                booking_id: booking.id,
                scheduled_at: task.at,
                kind: task.kind,
                cost: pricing::base_cost(task.kind),
                done: false,
                notes: None,
            })
            .collect()
    }

    /// Generates and stores every order for an already persisted booking in
    /// one bulk write.
    pub async fn create_for_booking(
        &self,
        booking: &Booking,
    ) -> Result<Vec<NewCleaningOrder>, ServiceError> {
        self.bookings
            .get_by_id(booking.id)
            .await
            .context("booking not found")?;

        let planned = self.schedule_for(booking);
        let written = self
            .orders
            .create_many(&planned)
            .await
            .context("failed to create cleaning orders")?;

        log::info!("scheduled {written} cleaning orders for booking {}", booking.id);
        Ok(planned)
    }

    pub async fn create(&self, req: CreateCleaningOrder) -> Result<CleaningOrder, ServiceError> {
        self.bookings
            .get_by_id(req.booking_id)
            .await
            .context("booking not found")?;

        let cost = pricing::resolve_cost(req.cost, req.kind).map_err(|err| {
            log::warn!("rejected cleaning order for booking {}: {err}", req.booking_id);
            err
        })?;

        let order = NewCleaningOrder {
            booking_id: req.booking_id,
            scheduled_at: req.scheduled_at,
            kind: req.kind,
            cost,
            done: req.done,
            notes: req.notes,
        };

        self.orders
            .create(&order)
            .await
            .context("failed to create cleaning order")
    }

    pub async fn get(&self, id: i64) -> Result<CleaningOrder, ServiceError> {
        self.orders
            .get_by_id(id)
            .await
            .context("cleaning order not found")
    }

    pub async fn list(&self) -> Result<Vec<CleaningOrder>, ServiceError> {
        self.orders
            .list()
            .await
            .context("failed to get cleaning orders")
    }

    /// Orders the cleaner is assigned to, by ascending order id.
    pub async fn list_by_cleaner(&self, cleaner_id: i64) -> Result<Vec<CleaningOrder>, ServiceError> {
        self.orders
            .list_by_cleaner(cleaner_id)
            .await
            .context("failed to get cleaning orders")
    }

    /// Full replacement. A cost of 0 is stored as is; only creation estimates.
    pub async fn update(
        &self,
        id: i64,
        req: UpdateCleaningOrder,
    ) -> Result<CleaningOrder, ServiceError> {
        let mut order = self.get(id).await?;

        self.bookings
            .get_by_id(req.booking_id)
            .await
            .context("booking not found")?;

        if req.cost < 0 {
            return Err(ServiceError::validation("cost must be non-negative"));
        }

        order.booking_id = req.booking_id;
        order.scheduled_at = req.scheduled_at;
        order.kind = req.kind;
        order.cost = req.cost;
        order.done = req.done;
        order.notes = req.notes;

        self.orders
            .update(&order)
            .await
            .context("failed to update cleaning order")?;
        Ok(order)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.orders
            .delete(id)
            .await
            .context("failed to delete cleaning order")
    }

    pub async fn assign_cleaner(&self, order_id: i64, cleaner_id: i64) -> Result<(), ServiceError> {
        self.get(order_id).await?;
        self.cleaners
            .get_by_id(cleaner_id)
            .await
            .context("cleaner not found")?;

        self.orders
            .assign_cleaner(order_id, cleaner_id)
            .await
            .context("failed to assign cleaner")?;

        log::debug!("cleaner {cleaner_id} assigned to order {order_id}");
        Ok(())
    }

    pub async fn remove_cleaner(&self, order_id: i64, cleaner_id: i64) -> Result<(), ServiceError> {
        self.get(order_id).await?;
        self.cleaners
            .get_by_id(cleaner_id)
            .await
            .context("cleaner not found")?;

        self.orders
            .remove_cleaner(order_id, cleaner_id)
            .await
            .context("failed to remove cleaner")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CleaningKind;
    use chrono::{TimeZone, Utc};

    fn service() -> CleaningOrderService {
        // schedule_for never reaches the stores.
        let pool = sqlx::SqlitePool::connect_lazy("sqlite::memory:").unwrap();
        let stores = crate::services::Stores::sqlite(pool);
        CleaningOrderService::new(stores.cleaning_orders, stores.bookings, stores.cleaners)
    }

    #[actix_web::test]
    async fn schedule_is_priced_per_kind_and_tied_to_booking() {
        let booking = Booking {
            id: 42,
            room_id: 1,
            check_in: Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap(),
            check_out: Utc.with_ymd_and_hms(2024, 3, 4, 11, 0, 0).unwrap(),
            guests: 2,
        };

        let planned = service().schedule_for(&booking);

        assert_eq!(planned.len(), 3);
        assert!(planned.iter().all(|o| o.booking_id == 42 && !o.done && o.notes.is_none()));
        assert_eq!(
            planned.iter().map(|o| (o.kind, o.cost)).collect::<Vec<_>>(),
            vec![
                (CleaningKind::Periodic, 100),
                (CleaningKind::Periodic, 100),
                (CleaningKind::General, 200),
            ]
        );
    }
}
