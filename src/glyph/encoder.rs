//! Digit to segment lookup tables
//!
//! Each decimal place has its own hand-authored table. Within a place,
//! 1, 2, 4 and 6 map to single segments and most other digits are unions
//! of those. Digit 3 is the exception: it uses its own diagonal rather
//! than the union of 1 and 2.

use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;

use super::geometry::SegmentId;

/// A single decimal digit, 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, rejecting values above 9
    pub fn new(value: u8) -> Result<Self, EncodeError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(EncodeError::DigitOutOfRange { digit: value })
        }
    }

    /// The last decimal digit of `n`
    pub(crate) fn last_of(n: u32) -> Self {
        Self((n % 10) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decimal place a digit occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Units,
    Tens,
    Hundreds,
    Thousands,
}

impl Position {
    /// Positions in assembly order
    pub const DESCENDING: [Position; 4] = [
        Position::Thousands,
        Position::Hundreds,
        Position::Tens,
        Position::Units,
    ];

    /// Positional weight (1, 10, 100 or 1000)
    pub fn weight(self) -> u32 {
        match self {
            Position::Units => 1,
            Position::Tens => 10,
            Position::Hundreds => 100,
            Position::Thousands => 1000,
        }
    }

    /// Segment ids this position may draw
    pub fn segment_range(self) -> [SegmentId; 5] {
        match self {
            Position::Units => [2, 4, 11, 20, 21],
            Position::Tens => [1, 3, 9, 18, 19],
            Position::Hundreds => [6, 8, 17, 24, 25],
            Position::Thousands => [5, 7, 15, 22, 23],
        }
    }

    fn table(self) -> &'static DigitTable {
        match self {
            Position::Units => &UNITS,
            Position::Tens => &TENS,
            Position::Hundreds => &HUNDREDS,
            Position::Thousands => &THOUSANDS,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Units => write!(f, "units"),
            Position::Tens => write!(f, "tens"),
            Position::Hundreds => write!(f, "hundreds"),
            Position::Thousands => write!(f, "thousands"),
        }
    }
}

impl FromStr for Position {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "units" => Ok(Position::Units),
            "tens" => Ok(Position::Tens),
            "hundreds" => Ok(Position::Hundreds),
            "thousands" => Ok(Position::Thousands),
            _ => Err(EncodeError::UnknownPosition {
                name: s.to_string(),
            }),
        }
    }
}

type DigitTable = [&'static [SegmentId]; 10];

const UNITS: DigitTable = [
    &[],
    &[2],
    &[4],
    &[20],
    &[21],
    &[2, 21],
    &[11],
    &[2, 11],
    &[4, 11],
    &[2, 4, 11],
];

const TENS: DigitTable = [
    &[],
    &[1],
    &[3],
    &[19],
    &[18],
    &[1, 18],
    &[9],
    &[1, 9],
    &[3, 9],
    &[1, 3, 9],
];

const HUNDREDS: DigitTable = [
    &[],
    &[8],
    &[6],
    &[25],
    &[24],
    &[8, 24],
    &[17],
    &[8, 17],
    &[6, 17],
    &[8, 6, 17],
];

const THOUSANDS: DigitTable = [
    &[],
    &[7],
    &[5],
    &[22],
    &[23],
    &[7, 23],
    &[15],
    &[7, 15],
    &[5, 15],
    &[7, 5, 15],
];

/// Segments for a digit at a given position
pub fn lookup(digit: Digit, position: Position) -> &'static [SegmentId] {
    position.table()[usize::from(digit.value())]
}

/// Like [`lookup`] but takes a raw digit value, failing for values above 9
pub fn lookup_value(digit: u8, position: Position) -> Result<&'static [SegmentId], EncodeError> {
    Ok(lookup(Digit::new(digit)?, position))
}
