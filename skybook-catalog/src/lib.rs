pub mod seat;
pub mod pricing;
pub mod flight;

pub use seat::{SeatCodeError, SeatError, SeatGrid, SeatPosition, SeatState, COLS, ROWS};
pub use pricing::{CabinClass, FareTable};
pub use flight::{CatalogError, Flight, FlightCatalog, UNKNOWN_CITY};
