use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabin class, derived from the seat row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    First,
    Business,
    Economy,
}

impl CabinClass {
    /// Row A is First, row B is Business, every row after that is Economy.
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => CabinClass::First,
            1 => CabinClass::Business,
            _ => CabinClass::Economy,
        }
    }

    /// Token written to the ticket log and shown on screen.
    pub fn name(&self) -> &'static str {
        match self {
            CabinClass::First => "First",
            CabinClass::Business => "Business",
            CabinClass::Economy => "Economy",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed fares of a flight, one per cabin class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareTable {
    pub first: Decimal,
    pub business: Decimal,
    pub economy: Decimal,
}

impl FareTable {
    pub fn new(first: impl Into<Decimal>, business: impl Into<Decimal>, economy: impl Into<Decimal>) -> Self {
        Self {
            first: first.into(),
            business: business.into(),
            economy: economy.into(),
        }
    }

    pub fn price_for(&self, class: CabinClass) -> Decimal {
        match class {
            CabinClass::First => self.first,
            CabinClass::Business => self.business,
            CabinClass::Economy => self.economy,
        }
    }

    /// Class and price of the seat in `row`.
    pub fn quote(&self, row: usize) -> (CabinClass, Decimal) {
        let class = CabinClass::for_row(row);
        (class, self.price_for(class))
    }
}
