//! Error types for encoding, input validation and output

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Contract violations when looking up the digit tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("digit {digit} is out of range (expected 0-9)")]
    DigitOutOfRange { digit: u8 },

    #[error("unknown position '{name}' (expected units, tens, hundreds or thousands)")]
    UnknownPosition { name: String },
}

/// Rejected user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing left after removing non-digit characters
    #[error("no digits in input")]
    Empty,

    /// Zero, or a value the glyphs cannot express
    #[error("Enter correct number: 1-9999")]
    OutOfRange { value: u32, span: Span },
}

impl InputError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            InputError::OutOfRange { value, span } if !source.is_empty() => {
                (span.clone(), format!("{} is outside 1-9999", value))
            }
            _ => return format!("Error: {}", self),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
