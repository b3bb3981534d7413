//! Screen text for menus, seat maps and tickets.

use crate::desk::TicketPreview;
use skybook_catalog::seat::row_letter;
use skybook_catalog::{CabinClass, Flight, FlightCatalog, COLS};
use skybook_shared::Ticket;
use skybook_store::TicketRecord;
use std::io::{self, Write};

const RULE: &str = "---------------------------------------------------------";

/// Width of the "A(First)" label column on the seat map.
const LABEL_WIDTH: usize = 13;

pub fn main_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n================= SIMPLE AIRLINE SYSTEM =================")?;
    writeln!(out, "1. Select Flight")?;
    writeln!(out, "2. Exit Program (Show All Tickets - File Based)")?;
    writeln!(out, "=========================================================")?;
    write!(out, "Enter option (1-2): ")?;
    out.flush()
}

pub fn flight_list(out: &mut impl Write, catalog: &FlightCatalog) -> io::Result<()> {
    writeln!(out, "\nAvailable Flights:")?;
    writeln!(out, "{}", RULE)?;
    for (i, f) in catalog.flights().iter().enumerate() {
        writeln!(
            out,
            "{}) Flight {} : {} -> {}  [Economy: {:.2}, Business: {:.2}, First: {:.2}]",
            i + 1,
            f.id,
            f.from_city,
            f.to_city,
            f.fares.economy,
            f.fares.business,
            f.fares.first
        )?;
    }
    writeln!(out, "{}", RULE)
}

pub fn seat_map(out: &mut impl Write, flight: &Flight) -> io::Result<()> {
    writeln!(
        out,
        "\nSeat Map for Flight {} ({} -> {})",
        flight.id, flight.from_city, flight.to_city
    )?;

    write!(out, "{:width$}", "", width = LABEL_WIDTH)?;
    for col in 1..=COLS {
        write!(out, "{:>3}", col)?;
    }
    writeln!(out)?;

    for (row, seats) in flight.seats.rows() {
        let label = format!("{}({})", row_letter(row), CabinClass::for_row(row));
        write!(out, "{:<width$}", label, width = LABEL_WIDTH)?;
        for seat in seats {
            write!(out, "{:>3}", seat.symbol())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nLegend: O = Empty, X = Booked")?;
    writeln!(out, "Row A = First | Row B = Business | Rows C & D = Economy")
}

fn ticket_fields(out: &mut impl Write, ticket: &Ticket, from: &str, to: &str) -> io::Result<()> {
    writeln!(out, "Ticket ID   : {}", ticket.id)?;
    writeln!(out, "Name        : {}", ticket.passenger_name)?;
    writeln!(out, "Flight      : {} ({} -> {})", ticket.flight_id, from, to)?;
    writeln!(out, "Seat        : {} ({} Class)", ticket.seat_code, ticket.seat_class)?;
    writeln!(out, "Price       : {:.2}", ticket.price)
}

pub fn ticket_preview(out: &mut impl Write, preview: &TicketPreview, flight: &Flight) -> io::Result<()> {
    writeln!(out, "\n========== TICKET PREVIEW ==========")?;
    ticket_fields(out, &preview.ticket, &flight.from_city, &flight.to_city)?;
    writeln!(out, "====================================")
}

const LISTING_HEADER: &str = "\n================ ALL TICKETS (FILE BASED) ================";

/// Exit listing. `None` means the log file does not exist yet.
pub fn ticket_listing(out: &mut impl Write, records: Option<&[TicketRecord]>) -> io::Result<()> {
    writeln!(out, "{}", LISTING_HEADER)?;

    let Some(records) = records else {
        return writeln!(out, "No ticket file found yet. Maybe no tickets were generated.");
    };

    if records.is_empty() {
        return writeln!(out, "No tickets found in file.");
    }

    for record in records {
        ticket_fields(out, &record.ticket, &record.from_city, &record.to_city)?;
        writeln!(out, "-----------------------------------------------------")?;
    }
    Ok(())
}

pub fn ticket_listing_unreadable(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", LISTING_HEADER)?;
    writeln!(out, "Error: Could not open ticket file for reading.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use skybook_catalog::SeatPosition;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flight_list() {
        let catalog = FlightCatalog::seeded();
        let text = render(|out| flight_list(out, &catalog));

        assert!(text.contains(
            "1) Flight 101 : Karachi -> Islamabad  [Economy: 10000.00, Business: 15000.00, First: 20000.00]\n"
        ));
        assert!(text.contains(
            "3) Flight 103 : Karachi -> Lahore  [Economy: 8000.00, Business: 12000.00, First: 16000.00]\n"
        ));
    }

    #[test]
    fn test_seat_map_layout() {
        let mut catalog = FlightCatalog::seeded();
        catalog.book_seat(102, SeatPosition::parse("B3").unwrap()).unwrap();
        let flight = catalog.get(102).unwrap();

        let text = render(|out| seat_map(out, flight));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Seat Map for Flight 102 (Lahore -> Islamabad)");
        assert_eq!(lines[2], "               1  2  3  4  5  6");
        assert_eq!(lines[3], "A(First)       O  O  O  O  O  O");
        assert_eq!(lines[4], "B(Business)    O  O  X  O  O  O");
        assert_eq!(lines[5], "C(Economy)     O  O  O  O  O  O");
        assert_eq!(lines[6], "D(Economy)     O  O  O  O  O  O");
        assert_eq!(lines[8], "Legend: O = Empty, X = Booked");
    }

    #[test]
    fn test_listing_messages() {
        assert!(render(|out| ticket_listing(out, None)).contains("No ticket file found yet."));
        assert!(render(|out| ticket_listing(out, Some(&[]))).contains("No tickets found in file."));
    }
}
