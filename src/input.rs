//! Input rules for free-form number entry
//!
//! Raw text is reduced to at most four digits before validation, so a
//! caller typing `12a45` ends up with `1245`.

use crate::error::InputError;

/// Maximum number of digits accepted
pub const MAX_DIGITS: usize = 4;

/// Largest number that has a rune
pub const MAX_NUMBER: u32 = 9999;

/// Strip everything except ASCII digits and cap the length.
///
/// A leading zero followed by more digits collapses to `"0"`.
pub fn sanitize(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    if digits.starts_with('0') && digits.len() > 1 {
        "0".to_string()
    } else {
        digits
    }
}

/// Validate sanitized input.
///
/// Empty input means there is nothing to show and yields `Ok(None)`.
pub fn validate(value: &str) -> Result<Option<u32>, InputError> {
    if value.is_empty() {
        return Ok(None);
    }

    let out_of_range = |value| InputError::OutOfRange {
        value,
        span: 0..value_len(value),
    };

    match value.parse::<u32>() {
        Ok(0) => Err(out_of_range(0)),
        Ok(n) if n > MAX_NUMBER => Err(out_of_range(n)),
        Ok(n) => Ok(Some(n)),
        // Only reachable for unsanitized input
        Err(_) => Err(InputError::Empty),
    }
}

fn value_len(value: u32) -> usize {
    value.to_string().len()
}

/// Sanitize and validate raw input.
///
/// Fails with [`InputError::Empty`] when no digits remain. Range errors
/// span the whole raw input, counted in characters.
pub fn parse_input(raw: &str) -> Result<u32, InputError> {
    let sanitized = sanitize(raw);
    if sanitized != raw {
        tracing::debug!(raw, sanitized = %sanitized, "sanitized input");
    }

    match validate(&sanitized) {
        Ok(Some(n)) => Ok(n),
        Ok(None) => Err(InputError::Empty),
        Err(InputError::OutOfRange { value, .. }) => Err(InputError::OutOfRange {
            value,
            span: 0..raw.chars().count(),
        }),
        Err(e) => Err(e),
    }
}
