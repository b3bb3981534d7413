pub mod events;
pub mod ticket;

pub use events::{BookingDeclinedEvent, SeatBookedEvent};
pub use ticket::Ticket;
