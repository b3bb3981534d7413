use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat rows per flight, lettered A, B, C, D.
pub const ROWS: usize = 4;

/// Seats per row, numbered 1 to 6.
pub const COLS: usize = 6;

/// Zero-based position of a seat in a flight's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatPosition {
    pub row: usize,
    pub col: usize,
}

impl SeatPosition {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    /// Decode a two-character seat code such as "A1" or "c4".
    ///
    /// The letter is case-insensitive and must name one of the `ROWS` rows;
    /// the digit must be in `1..=COLS`.
    pub fn parse(code: &str) -> Result<Self, SeatCodeError> {
        let mut chars = code.chars();
        let (Some(row_char), Some(col_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SeatCodeError::WrongLength(code.chars().count()));
        };

        let row_char = row_char.to_ascii_uppercase();
        if !row_char.is_ascii_uppercase() || (row_char as usize - 'A' as usize) >= ROWS {
            return Err(SeatCodeError::RowOutOfRange(row_char));
        }

        let col_number = col_char
            .to_digit(10)
            .ok_or(SeatCodeError::NotADigit(col_char))?;
        if col_number < 1 || col_number as usize > COLS {
            return Err(SeatCodeError::ColumnOutOfRange(col_number));
        }

        Ok(Self {
            row: row_char as usize - 'A' as usize,
            col: col_number as usize - 1,
        })
    }

    pub fn row_letter(&self) -> char {
        row_letter(self.row)
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col + 1)
    }
}

pub fn row_letter(row: usize) -> char {
    (b'A' + row as u8) as char
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatCodeError {
    #[error("Seat code must be 2 characters, got {0}")]
    WrongLength(usize),

    #[error("Row letter {0} is out of range")]
    RowOutOfRange(char),

    #[error("Seat number {0} is not a digit")]
    NotADigit(char),

    #[error("Seat number {0} is out of range")]
    ColumnOutOfRange(u32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    #[default]
    Empty,
    Booked,
}

impl SeatState {
    /// Symbol used on the seat map.
    pub fn symbol(&self) -> char {
        match self {
            SeatState::Empty => 'O',
            SeatState::Booked => 'X',
        }
    }
}

/// Seat availability for one flight. Seats only move Empty -> Booked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatGrid {
    seats: [[SeatState; COLS]; ROWS],
}

impl SeatGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, pos: SeatPosition) -> SeatState {
        self.seats[pos.row][pos.col]
    }

    pub fn is_booked(&self, pos: SeatPosition) -> bool {
        self.state(pos) == SeatState::Booked
    }

    /// Book an empty seat.
    pub fn book(&mut self, pos: SeatPosition) -> Result<(), SeatError> {
        if self.is_booked(pos) {
            return Err(SeatError::AlreadyBooked(pos));
        }
        self.seats[pos.row][pos.col] = SeatState::Booked;
        Ok(())
    }

    /// Mark a seat booked whatever its current state (log replay).
    pub fn mark_booked(&mut self, pos: SeatPosition) {
        self.seats[pos.row][pos.col] = SeatState::Booked;
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &[SeatState; COLS])> {
        self.seats.iter().enumerate()
    }

    pub fn booked_count(&self) -> usize {
        self.seats
            .iter()
            .flatten()
            .filter(|s| **s == SeatState::Booked)
            .count()
    }

    pub fn available_count(&self) -> usize {
        ROWS * COLS - self.booked_count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("Seat {0} is already booked")]
    AlreadyBooked(SeatPosition),
}
