use crate::pricing::FareTable;
use crate::seat::{SeatGrid, SeatPosition};
use tracing::debug;

/// Route name shown when a ticket points at a flight that is not in the catalog.
pub const UNKNOWN_CITY: &str = "Unknown";

/// A scheduled flight with its fares and seat availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub id: u32,
    pub from_city: String,
    pub to_city: String,
    pub fares: FareTable,
    pub seats: SeatGrid,
}

impl Flight {
    pub fn new(id: u32, from_city: impl Into<String>, to_city: impl Into<String>, fares: FareTable) -> Self {
        Self {
            id,
            from_city: from_city.into(),
            to_city: to_city.into(),
            fares,
            seats: SeatGrid::new(),
        }
    }
}

/// The fixed, ordered set of flights on sale.
#[derive(Debug, Clone)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// The three flights on sale, every seat empty.
    pub fn seeded() -> Self {
        Self::new(vec![
            Flight::new(101, "Karachi", "Islamabad", FareTable::new(20000, 15000, 10000)),
            Flight::new(102, "Lahore", "Islamabad", FareTable::new(18000, 13000, 9000)),
            Flight::new(103, "Karachi", "Lahore", FareTable::new(16000, 12000, 8000)),
        ])
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn get(&self, flight_id: u32) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == flight_id)
    }

    pub fn get_mut(&mut self, flight_id: u32) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|f| f.id == flight_id)
    }

    /// Look up by 1-based menu position.
    pub fn by_position(&self, position: usize) -> Option<&Flight> {
        position.checked_sub(1).and_then(|i| self.flights.get(i))
    }

    /// Origin and destination of a flight, or "Unknown" for both.
    pub fn route_of(&self, flight_id: u32) -> (&str, &str) {
        match self.get(flight_id) {
            Some(f) => (f.from_city.as_str(), f.to_city.as_str()),
            None => (UNKNOWN_CITY, UNKNOWN_CITY),
        }
    }

    /// Book an empty seat on a flight.
    pub fn book_seat(&mut self, flight_id: u32, pos: SeatPosition) -> Result<(), CatalogError> {
        let flight = self
            .get_mut(flight_id)
            .ok_or(CatalogError::FlightNotFound(flight_id))?;
        flight.seats.book(pos)?;
        debug!(flight_id, seat = %pos, "Seat booked");
        Ok(())
    }

    /// Mark a seat booked during log replay. Returns false for an unknown flight.
    pub fn mark_booked(&mut self, flight_id: u32, pos: SeatPosition) -> bool {
        match self.get_mut(flight_id) {
            Some(flight) => {
                flight.seats.mark_booked(pos);
                true
            }
            None => false,
        }
    }

    pub fn booked_count(&self) -> usize {
        self.flights.iter().map(|f| f.seats.booked_count()).sum()
    }
}

impl Default for FlightCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flight not found: {0}")]
    FlightNotFound(u32),

    #[error(transparent)]
    Seat(#[from] crate::seat::SeatError),
}
