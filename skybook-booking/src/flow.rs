use crate::console::Console;
use crate::desk::Desk;
use crate::render;
use crate::BookingError;
use skybook_catalog::SeatPosition;
use skybook_shared::models::events::to_payload;
use skybook_shared::{BookingDeclinedEvent, SeatBookedEvent, Ticket};
use skybook_store::TicketRepository;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// How a pass through the booking flow ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Bad flight selection or end of input; nothing changed.
    Aborted,
    /// The passenger said no; the reserved id stays available.
    Declined { ticket_id: u32 },
    Confirmed { ticket: Ticket, persisted: bool },
}

/// One booking: flight, seat map, seat, name, preview, confirmation.
pub struct BookingFlow<'a, T, R, W> {
    desk: &'a mut Desk<T>,
    console: &'a mut Console<R, W>,
}

impl<'a, T, R, W> BookingFlow<'a, T, R, W>
where
    T: TicketRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(desk: &'a mut Desk<T>, console: &'a mut Console<R, W>) -> Self {
        Self { desk, console }
    }

    pub fn run(mut self) -> Result<BookingOutcome, BookingError> {
        let Some(flight_id) = self.select_flight()? else {
            return Ok(BookingOutcome::Aborted);
        };

        self.show_seat_map(flight_id)?;

        let Some((seat_code, position)) = self.select_seat(flight_id)? else {
            return Ok(BookingOutcome::Aborted);
        };

        let Some(name) = self.console.prompt("Enter passenger full name: ")? else {
            return Ok(BookingOutcome::Aborted);
        };

        let preview = self.desk.preview(flight_id, &seat_code, position, &name)?;
        if let Some(flight) = self.desk.catalog().get(flight_id) {
            render::ticket_preview(self.console, &preview, flight)?;
        }

        let Some(answer) = self.console.prompt("Confirm booking? (Y/N): ")? else {
            return Ok(BookingOutcome::Aborted);
        };

        let confirmed = answer
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'y'));

        if !confirmed {
            let event = BookingDeclinedEvent::new(preview.ticket.id, flight_id, seat_code);
            info!(payload = %to_payload(&event), "Booking declined");
            writeln!(self.console, "Booking cancelled. Returning to main menu.")?;
            return Ok(BookingOutcome::Declined {
                ticket_id: preview.ticket.id,
            });
        }

        let confirmation = self.desk.confirm(preview)?;
        let persisted = confirmation.store_error.is_none();

        let event = SeatBookedEvent::from_ticket(&confirmation.ticket, persisted);
        info!(payload = %to_payload(&event), "Seat booked");

        if persisted {
            writeln!(self.console, "Booking confirmed and saved.")?;
        } else {
            writeln!(self.console, "Error: Could not open ticket file for writing.")?;
            writeln!(self.console, "Booking confirmed.")?;
        }

        Ok(BookingOutcome::Confirmed {
            ticket: confirmation.ticket,
            persisted,
        })
    }

    /// Numbered flight list; anything but a listed number aborts.
    fn select_flight(&mut self) -> Result<Option<u32>, BookingError> {
        let catalog = self.desk.catalog();
        render::flight_list(self.console, catalog)?;

        let prompt = format!("Select flight (1-{}): ", catalog.len());
        let Some(answer) = self.console.prompt(&prompt)? else {
            return Ok(None);
        };

        let flight = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|position| self.desk.catalog().by_position(position));

        match flight {
            Some(flight) => {
                debug!(flight_id = flight.id, "Flight selected");
                Ok(Some(flight.id))
            }
            None => {
                writeln!(self.console, "Invalid flight selection. Returning to main menu.")?;
                Ok(None)
            }
        }
    }

    fn show_seat_map(&mut self, flight_id: u32) -> Result<(), BookingError> {
        let flight = self
            .desk
            .catalog()
            .get(flight_id)
            .ok_or(BookingError::FlightNotFound(flight_id))?;
        debug!(flight_id, available = flight.seats.available_count(), "Showing seat map");
        render::seat_map(self.console, flight)?;
        Ok(())
    }

    /// Ask until the answer is a valid, free seat. Returns the code as typed.
    fn select_seat(&mut self, flight_id: u32) -> Result<Option<(String, SeatPosition)>, BookingError> {
        loop {
            let Some(answer) = self.console.prompt("Enter seat (e.g., A1, B3, C4): ")? else {
                return Ok(None);
            };
            let seat_code = answer.split_whitespace().next().unwrap_or("").to_string();

            let position = match SeatPosition::parse(&seat_code) {
                Ok(position) => position,
                Err(e) => {
                    debug!(input = %seat_code, error = %e, "Rejected seat code");
                    writeln!(self.console, "Invalid seat format or out of range. Try again.")?;
                    continue;
                }
            };

            let flight = self
                .desk
                .catalog()
                .get(flight_id)
                .ok_or(BookingError::FlightNotFound(flight_id))?;

            if flight.seats.is_booked(position) {
                writeln!(self.console, "Seat {} is already booked. Choose another seat.", seat_code)?;
                continue;
            }

            return Ok(Some((seat_code, position)));
        }
    }
}
