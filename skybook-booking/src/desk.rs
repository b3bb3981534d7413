use crate::BookingError;
use skybook_catalog::{CabinClass, FlightCatalog, SeatPosition};
use skybook_shared::Ticket;
use skybook_store::{StoreError, TicketRepository};
use tracing::{info, warn};

/// A ticket shown to the passenger but not yet confirmed.
///
/// The id is only reserved: nothing is booked or written until
/// [`Desk::confirm`] consumes the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketPreview {
    pub ticket: Ticket,
    pub position: SeatPosition,
    pub class: CabinClass,
}

/// Result of committing a preview.
#[derive(Debug)]
pub struct Confirmation {
    pub ticket: Ticket,
    /// Set when the seat was booked in memory but the log append failed.
    pub store_error: Option<StoreError>,
}

/// Session state: the flights on sale, the next ticket id and the log.
pub struct Desk<T> {
    catalog: FlightCatalog,
    next_ticket_id: u32,
    repository: T,
}

impl<T: TicketRepository> Desk<T> {
    pub fn new(catalog: FlightCatalog, next_ticket_id: u32, repository: T) -> Self {
        Self {
            catalog,
            next_ticket_id,
            repository,
        }
    }

    /// Replay the repository into the catalog and start the counter after
    /// the highest stored ticket id.
    pub fn open(mut catalog: FlightCatalog, repository: T) -> Result<Self, StoreError> {
        let replay = repository.load(&catalog)?;
        replay.apply(&mut catalog);

        info!(
            records = replay.records,
            booked_seats = catalog.booked_count(),
            next_ticket_id = replay.next_ticket_id,
            "Ticket log replayed"
        );

        Ok(Self::new(catalog, replay.next_ticket_id, repository))
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    pub fn repository(&self) -> &T {
        &self.repository
    }

    pub fn next_ticket_id(&self) -> u32 {
        self.next_ticket_id
    }

    /// Classify the seat, snapshot its fare and reserve the next ticket id.
    pub fn preview(
        &self,
        flight_id: u32,
        seat_code: &str,
        position: SeatPosition,
        passenger_name: &str,
    ) -> Result<TicketPreview, BookingError> {
        let flight = self
            .catalog
            .get(flight_id)
            .ok_or(BookingError::FlightNotFound(flight_id))?;
        let (class, price) = flight.fares.quote(position.row);

        Ok(TicketPreview {
            ticket: Ticket::new(
                self.next_ticket_id,
                flight_id,
                seat_code,
                class.name(),
                price,
                passenger_name,
            ),
            position,
            class,
        })
    }

    /// Book the seat, advance the counter and append the ticket.
    ///
    /// A failed append leaves the seat booked and the counter advanced.
    /// Nothing is booked when the id space is used up.
    pub fn confirm(&mut self, preview: TicketPreview) -> Result<Confirmation, BookingError> {
        let ticket = preview.ticket;
        let next_ticket_id = self
            .next_ticket_id
            .checked_add(1)
            .ok_or(BookingError::TicketIdsExhausted(self.next_ticket_id))?;
        self.catalog.book_seat(ticket.flight_id, preview.position)?;
        self.next_ticket_id = next_ticket_id;

        let store_error = match self.repository.append(&ticket) {
            Ok(()) => None,
            Err(e) => {
                warn!(ticket_id = ticket.id, error = %e, "Booking kept in memory only");
                Some(e)
            }
        };

        Ok(Confirmation {
            ticket,
            store_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use skybook_store::TicketLog;
    use std::fs;

    #[test]
    fn test_open_replays_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.txt");
        fs::write(&path, "4 101 A1 First 20000.00 Ali\n2 103 c3 Economy 8000.00 Zara\n").unwrap();

        let desk = Desk::open(FlightCatalog::seeded(), TicketLog::new(&path)).unwrap();

        assert_eq!(desk.next_ticket_id(), 5);
        assert!(desk.catalog().get(101).unwrap().seats.is_booked(SeatPosition::new(0, 0).unwrap()));
        assert!(desk.catalog().get(103).unwrap().seats.is_booked(SeatPosition::new(2, 2).unwrap()));
        assert_eq!(desk.catalog().booked_count(), 2);
    }

    #[test]
    fn test_preview_does_not_reserve() {
        let dir = tempfile::tempdir().unwrap();
        let desk = Desk::new(FlightCatalog::seeded(), 1, TicketLog::new(dir.path().join("t.txt")));
        let pos = SeatPosition::parse("B2").unwrap();

        let preview = desk.preview(102, "b2", pos, "Hina").unwrap();

        assert_eq!(preview.ticket.id, 1);
        assert_eq!(preview.class, CabinClass::Business);
        assert_eq!(preview.ticket.seat_class, "Business");
        assert_eq!(preview.ticket.price, Decimal::from(13000));
        assert_eq!(preview.ticket.seat_code, "b2");
        assert_eq!(desk.next_ticket_id(), 1);
        assert_eq!(desk.catalog().booked_count(), 0);
        assert!(matches!(
            desk.preview(404, "B2", pos, "Hina"),
            Err(BookingError::FlightNotFound(404))
        ));
    }

    #[test]
    fn test_confirm_books_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.txt");
        let mut desk = Desk::new(FlightCatalog::seeded(), 1, TicketLog::new(&path));
        let pos = SeatPosition::parse("A1").unwrap();

        let preview = desk.preview(101, "A1", pos, "Test User").unwrap();
        let confirmation = desk.confirm(preview).unwrap();

        assert!(confirmation.store_error.is_none());
        assert_eq!(desk.next_ticket_id(), 2);
        assert!(desk.catalog().get(101).unwrap().seats.is_booked(pos));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1 101 A1 First 20000.00 Test User\n"
        );
    }

    #[test]
    fn test_confirm_refuses_last_ticket_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.txt");
        let mut desk = Desk::new(FlightCatalog::seeded(), u32::MAX, TicketLog::new(&path));
        let pos = SeatPosition::parse("C1").unwrap();

        let preview = desk.preview(101, "C1", pos, "Overflow").unwrap();
        let result = desk.confirm(preview);

        assert!(matches!(result, Err(BookingError::TicketIdsExhausted(u32::MAX))));
        assert_eq!(desk.next_ticket_id(), u32::MAX);
        assert!(!desk.catalog().get(101).unwrap().seats.is_booked(pos));
        assert!(!path.exists());
    }

    #[test]
    fn test_confirm_keeps_booking_when_append_fails() {
        let dir = tempfile::tempdir().unwrap();
        let log = TicketLog::new(dir.path().join("missing").join("tickets.txt"));
        let mut desk = Desk::new(FlightCatalog::seeded(), 7, log);
        let pos = SeatPosition::parse("D6").unwrap();

        let preview = desk.preview(103, "D6", pos, "Offline").unwrap();
        let confirmation = desk.confirm(preview).unwrap();

        assert!(confirmation.store_error.is_some());
        assert_eq!(desk.next_ticket_id(), 8);
        assert!(desk.catalog().get(103).unwrap().seats.is_booked(pos));
    }
}
