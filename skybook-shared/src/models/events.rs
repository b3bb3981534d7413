use crate::pii::Masked;
use crate::models::ticket::Ticket;
use rust_decimal::Decimal;

#[derive(Debug, serde::Serialize, Clone)]
pub struct SeatBookedEvent {
    pub ticket_id: u32,
    pub flight_id: u32,
    pub seat_code: String,
    pub seat_class: String,
    pub price: Decimal,
    pub passenger: Masked<String>,
    pub persisted: bool,
    pub booked_at: i64,
}

impl SeatBookedEvent {
    pub fn from_ticket(ticket: &Ticket, persisted: bool) -> Self {
        Self {
            ticket_id: ticket.id,
            flight_id: ticket.flight_id,
            seat_code: ticket.seat_code.clone(),
            seat_class: ticket.seat_class.clone(),
            price: ticket.price,
            passenger: Masked(ticket.passenger_name.clone()),
            persisted,
            booked_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[derive(Debug, serde::Serialize, Clone)]
pub struct BookingDeclinedEvent {
    pub reserved_ticket_id: u32,
    pub flight_id: u32,
    pub seat_code: String,
    pub declined_at: i64,
}

impl BookingDeclinedEvent {
    pub fn new(reserved_ticket_id: u32, flight_id: u32, seat_code: impl Into<String>) -> Self {
        Self {
            reserved_ticket_id,
            flight_id,
            seat_code: seat_code.into(),
            declined_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Serializes an event into the JSON payload written to the log.
pub fn to_payload<E: serde::Serialize>(event: &E) -> String {
    serde_json::to_string(event).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booked_event_payload_masks_passenger() {
        let ticket = Ticket::new(7, 102, "B4", "Business", Decimal::from(13000), "Bilal Ahmed");
        let event = SeatBookedEvent::from_ticket(&ticket, true);

        let payload = to_payload(&event);

        assert!(payload.contains("\"ticket_id\":7"));
        assert!(payload.contains("\"seat_code\":\"B4\""));
        assert!(payload.contains("********"));
        assert!(!payload.contains("Bilal"));
    }
}
