pub mod console;
pub mod desk;
pub mod flow;
pub mod render;

pub use console::Console;
pub use desk::{Confirmation, Desk, TicketPreview};
pub use flow::{BookingFlow, BookingOutcome};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] skybook_catalog::CatalogError),

    #[error("Flight not found: {0}")]
    FlightNotFound(u32),

    #[error("Ticket ids exhausted at {0}")]
    TicketIdsExhausted(u32),
}
