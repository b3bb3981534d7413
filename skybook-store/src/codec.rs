//! Line format of the ticket log.
//!
//! ```text
//! <ticket id> <flight id> <seat code> <seat class> <price> <passenger name...>
//! ```
//!
//! The first five fields are whitespace separated. Everything after the
//! price, minus one separating space, is the passenger name.

use rust_decimal::Decimal;
use skybook_shared::Ticket;
use std::str::FromStr;

/// Render a ticket as one log line, without the trailing newline.
pub fn encode_line(ticket: &Ticket) -> String {
    format!(
        "{} {} {} {} {:.2} {}",
        ticket.id,
        ticket.flight_id,
        ticket.seat_code,
        ticket.seat_class,
        ticket.price,
        ticket.passenger_name
    )
}

/// Parse one log line back into a ticket.
pub fn decode_line(line: &str) -> Result<Ticket, LineError> {
    let mut rest = line;

    let id = next_field(&mut rest, "ticket id")?;
    let id = u32::from_str(id).map_err(|_| LineError::InvalidNumber {
        field: "ticket id",
        value: id.to_string(),
    })?;

    let flight_id = next_field(&mut rest, "flight id")?;
    let flight_id = u32::from_str(flight_id).map_err(|_| LineError::InvalidNumber {
        field: "flight id",
        value: flight_id.to_string(),
    })?;

    let seat_code = next_field(&mut rest, "seat code")?;
    let seat_class = next_field(&mut rest, "seat class")?;

    let price = next_field(&mut rest, "price")?;
    let price = Decimal::from_str(price).map_err(|_| LineError::InvalidNumber {
        field: "price",
        value: price.to_string(),
    })?;

    let passenger_name = rest.strip_prefix(' ').unwrap_or(rest);

    Ok(Ticket::new(id, flight_id, seat_code, seat_class, price, passenger_name))
}

fn next_field<'a>(rest: &mut &'a str, field: &'static str) -> Result<&'a str, LineError> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        return Err(LineError::MissingField(field));
    }
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (token, tail) = trimmed.split_at(end);
    *rest = tail;
    Ok(token)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}
