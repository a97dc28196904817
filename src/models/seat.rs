use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Фиксированная схема зала: 8 рядов (A..H) по 12 мест.
pub const SEAT_ROWS: u8 = 8;
pub const SEATS_PER_ROW: u8 = 12;

/// Ключ места: буква ряда + номер, например "A5".
/// Упорядочен по (ряд, номер), чтобы выбор обходился в порядке схемы зала.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatKey {
    row: char,
    number: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeatKeyError {
    #[error("ряд {0} вне схемы зала (A..H)")]
    RowOutOfRange(char),
    #[error("место {0} вне ряда (1..12)")]
    NumberOutOfRange(u8),
    #[error("некорректный ключ места: {0}")]
    Malformed(String),
}

impl SeatKey {
    pub fn new(row: char, number: u8) -> Result<Self, SeatKeyError> {
        let last_row = (b'A' + SEAT_ROWS - 1) as char;
        if !('A'..=last_row).contains(&row) {
            return Err(SeatKeyError::RowOutOfRange(row));
        }
        if number < 1 || number > SEATS_PER_ROW {
            return Err(SeatKeyError::NumberOutOfRange(number));
        }
        Ok(Self { row, number })
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Все места зала в порядке схемы (A1..A12, B1.. и т.д.).
    pub fn grid() -> impl Iterator<Item = SeatKey> {
        (0..SEAT_ROWS).flat_map(|r| {
            (1..=SEATS_PER_ROW).map(move |n| SeatKey {
                row: (b'A' + r) as char,
                number: n,
            })
        })
    }
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for SeatKey {
    type Err = SeatKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row = chars
            .next()
            .ok_or_else(|| SeatKeyError::Malformed(s.to_string()))?;
        let number: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| SeatKeyError::Malformed(s.to_string()))?;
        SeatKey::new(row.to_ascii_uppercase(), number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_corners() {
        assert!(SeatKey::new('A', 1).is_ok());
        assert!(SeatKey::new('H', 12).is_ok());
    }

    #[test]
    fn rejects_out_of_grid() {
        assert_eq!(SeatKey::new('I', 1), Err(SeatKeyError::RowOutOfRange('I')));
        assert_eq!(SeatKey::new('A', 0), Err(SeatKeyError::NumberOutOfRange(0)));
        assert_eq!(
            SeatKey::new('A', 13),
            Err(SeatKeyError::NumberOutOfRange(13))
        );
    }

    #[test]
    fn parses_and_displays() {
        let seat: SeatKey = "B7".parse().unwrap();
        assert_eq!(seat.row(), 'B');
        assert_eq!(seat.number(), 7);
        assert_eq!(seat.to_string(), "B7");
        assert_eq!("e12".parse::<SeatKey>().unwrap().to_string(), "E12");
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<SeatKey>().is_err());
        assert!("A".parse::<SeatKey>().is_err());
        assert!("5B".parse::<SeatKey>().is_err());
        assert!("Z99".parse::<SeatKey>().is_err());
    }

    #[test]
    fn grid_is_full_and_ordered() {
        let grid: Vec<SeatKey> = SeatKey::grid().collect();
        assert_eq!(grid.len(), (SEAT_ROWS as usize) * (SEATS_PER_ROW as usize));
        assert_eq!(grid[0].to_string(), "A1");
        assert_eq!(grid[12].to_string(), "B1");
        assert_eq!(grid.last().unwrap().to_string(), "H12");
        let mut sorted = grid.clone();
        sorted.sort();
        assert_eq!(grid, sorted);
    }
}
