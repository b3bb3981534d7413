use crate::codec::{decode_line, encode_line};
use skybook_catalog::{FlightCatalog, SeatPosition};
use skybook_shared::{Masked, Ticket};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// A seat marked booked by a record in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedSeat {
    pub flight_id: u32,
    pub position: SeatPosition,
}

/// What startup needs from the log: seats to mark and the next ticket id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogReplay {
    pub booked: Vec<BookedSeat>,
    pub next_ticket_id: u32,
    pub records: usize,
}

impl LogReplay {
    pub fn empty() -> Self {
        Self {
            booked: Vec::new(),
            next_ticket_id: 1,
            records: 0,
        }
    }

    /// Mark every replayed seat booked in the catalog.
    pub fn apply(&self, catalog: &mut FlightCatalog) {
        for seat in &self.booked {
            catalog.mark_booked(seat.flight_id, seat.position);
        }
    }
}

/// A ticket from the log together with its resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub ticket: Ticket,
    pub from_city: String,
    pub to_city: String,
}

/// Storage for confirmed tickets.
///
/// Implementors provide raw reads and appends; replay and listing are
/// built on top of [`TicketRepository::read_tickets`].
pub trait TicketRepository {
    /// Every valid record up to the first malformed line.
    /// `Ok(None)` when nothing has been stored yet.
    fn read_tickets(&self) -> Result<Option<Vec<Ticket>>, StoreError>;

    fn append(&self, ticket: &Ticket) -> Result<(), StoreError>;

    /// Replay the log against the catalog.
    ///
    /// Records for flights missing from the catalog still count toward the
    /// next ticket id but mark no seat.
    fn load(&self, catalog: &FlightCatalog) -> Result<LogReplay, StoreError> {
        let Some(tickets) = self.read_tickets()? else {
            return Ok(LogReplay::empty());
        };

        let mut max_id: u32 = 0;
        let mut booked = Vec::new();

        for ticket in &tickets {
            max_id = max_id.max(ticket.id);

            if catalog.get(ticket.flight_id).is_none() {
                debug!(ticket_id = ticket.id, flight_id = ticket.flight_id, "Unknown flight in ticket log");
                continue;
            }

            if let Ok(position) = SeatPosition::parse(&ticket.seat_code) {
                booked.push(BookedSeat {
                    flight_id: ticket.flight_id,
                    position,
                });
            }
        }

        let next_ticket_id = max_id
            .checked_add(1)
            .ok_or(StoreError::TicketIdsExhausted(max_id))?;

        Ok(LogReplay {
            booked,
            next_ticket_id,
            records: tickets.len(),
        })
    }

    /// Every valid record with its route, for the exit listing.
    fn load_all(&self, catalog: &FlightCatalog) -> Result<Option<Vec<TicketRecord>>, StoreError> {
        let Some(tickets) = self.read_tickets()? else {
            return Ok(None);
        };

        let records = tickets
            .into_iter()
            .map(|ticket| {
                let (from, to) = catalog.route_of(ticket.flight_id);
                TicketRecord {
                    from_city: from.to_string(),
                    to_city: to.to_string(),
                    ticket,
                }
            })
            .collect();

        Ok(Some(records))
    }
}

/// Append-only ticket log in a plain text file.
#[derive(Debug, Clone)]
pub struct TicketLog {
    path: PathBuf,
}

impl TicketLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TicketRepository for TicketLog {
    fn read_tickets(&self) -> Result<Option<Vec<Ticket>>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No ticket log yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Open {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut reader = BufReader::new(file);
        let mut tickets = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => line_no += 1,
                Err(e) => {
                    warn!(path = %self.path.display(), line = line_no + 1, error = %e, "Stopped reading ticket log");
                    break;
                }
            }

            // Names are free text; a stray non-UTF-8 byte must not end the read
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            if line.trim().is_empty() {
                continue;
            }

            match decode_line(line) {
                Ok(ticket) => tickets.push(ticket),
                Err(e) => {
                    debug!(path = %self.path.display(), line = line_no, error = %e, "Malformed ticket record, ignoring rest of log");
                    break;
                }
            }
        }

        Ok(Some(tickets))
    }

    fn append(&self, ticket: &Ticket) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}", encode_line(ticket)).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            ticket_id = ticket.id,
            flight_id = ticket.flight_id,
            seat = %ticket.seat_code,
            passenger = %Masked(&ticket.passenger_name),
            "Ticket appended to log"
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Could not open ticket log {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write ticket log {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Ticket ids exhausted: log already holds id {0}")]
    TicketIdsExhausted(u32),
}
