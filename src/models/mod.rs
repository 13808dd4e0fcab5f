pub mod booking;
pub mod cleaner;
pub mod cleaning_order;
pub mod room;

pub use booking::{Booking, CreateBooking, UpdateBooking};
pub use cleaner::{Cleaner, CreateCleaner, UpdateCleaner};
pub use cleaning_order::{
    AssignCleaner, CleaningKind, CleaningOrder, CreateCleaningOrder, NewCleaningOrder,
    UpdateCleaningOrder,
};
pub use room::{CreateRoom, Room, UpdateRoom};
