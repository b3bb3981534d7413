use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A confirmed (or previewed) seat booking.
///
/// `seat_code` keeps the text the passenger typed, so "a1" stays "a1".
/// `seat_class` is a plain token because the ticket log may carry any
/// single-word class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    pub flight_id: u32,
    pub seat_code: String,
    pub seat_class: String,
    pub price: Decimal,
    pub passenger_name: String,
}

impl Ticket {
    pub fn new(
        id: u32,
        flight_id: u32,
        seat_code: impl Into<String>,
        seat_class: impl Into<String>,
        price: Decimal,
        passenger_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            flight_id,
            seat_code: seat_code.into(),
            seat_class: seat_class.into(),
            price,
            passenger_name: passenger_name.into(),
        }
    }
}
