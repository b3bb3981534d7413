pub mod models;
pub mod pii;

pub use models::{BookingDeclinedEvent, SeatBookedEvent, Ticket};
pub use pii::Masked;
