//! Splitting a number into positional digits

use std::fmt;

use super::encoder::{Digit, Position};

/// A number split into decimal places.
///
/// Places above the number's magnitude are `None`, not zero. Units are
/// always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed {
    pub thousands: Option<Digit>,
    pub hundreds: Option<Digit>,
    pub tens: Option<Digit>,
    pub units: Digit,
}

impl Decomposed {
    /// Digit at the given position, if the number reaches it
    pub fn digit(&self, position: Position) -> Option<Digit> {
        match position {
            Position::Thousands => self.thousands,
            Position::Hundreds => self.hundreds,
            Position::Tens => self.tens,
            Position::Units => Some(self.units),
        }
    }

    /// Present positions with their digits, thousands first
    pub fn present(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        Position::DESCENDING
            .into_iter()
            .filter_map(move |position| self.digit(position).map(|d| (position, d)))
    }
}

impl fmt::Display for Decomposed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for position in Position::DESCENDING {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match self.digit(position) {
                Some(d) => write!(f, "{}={}", position, d)?,
                None => write!(f, "{}=-", position)?,
            }
        }
        Ok(())
    }
}

/// Split `n` into thousands, hundreds, tens and units.
///
/// Presence is decided by magnitude, so 1000 has a thousands digit and 999
/// does not. Range is not validated; digits above the thousands place are
/// ignored.
pub fn decompose(n: u32) -> Decomposed {
    let place = |position: Position| {
        let weight = position.weight();
        (n >= weight).then(|| Digit::last_of(n / weight))
    };

    Decomposed {
        thousands: place(Position::Thousands),
        hundreds: place(Position::Hundreds),
        tens: place(Position::Tens),
        units: Digit::last_of(n),
    }
}
