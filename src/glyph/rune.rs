//! Assembling a rune from a number

use super::decompose::decompose;
use super::encoder::lookup;
use super::geometry::{SegmentId, BASE_SEGMENTS};

/// The segment list encoding one number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rune {
    pub number: u32,
    /// Base segments first, then thousands, hundreds, tens and units
    pub segments: Vec<SegmentId>,
}

impl Rune {
    /// Segments contributed by the digits, without the base stem
    pub fn digit_segments(&self) -> &[SegmentId] {
        self.segments.get(BASE_SEGMENTS.len()..).unwrap_or(&[])
    }
}

/// Build the rune for `n`.
///
/// Absent positions contribute nothing. Segments are concatenated without
/// deduplication.
pub fn assemble(n: u32) -> Rune {
    let parts = decompose(n);

    let mut segments = BASE_SEGMENTS.to_vec();
    for (position, digit) in parts.present() {
        segments.extend_from_slice(lookup(digit, position));
    }

    tracing::debug!(number = n, digits = %parts, ?segments, "assembled rune");

    Rune {
        number: n,
        segments,
    }
}

/// Convert a number into its rune
pub fn convert(number: u32) -> Rune {
    assemble(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trailing_zeros_add_nothing() {
        let rune = assemble(10);
        assert_eq!(rune.segments, vec![10, 13, 16, 1]);

        let rune = assemble(100);
        assert_eq!(rune.segments, vec![10, 13, 16, 8]);
    }

    #[test]
    fn test_order_is_thousands_first() {
        let rune = assemble(4723);
        assert_eq!(rune.number, 4723);
        assert_eq!(rune.segments, vec![10, 13, 16, 23, 8, 17, 3, 20]);
    }

    #[test]
    fn test_maximum_length() {
        let rune = assemble(9999);
        assert_eq!(rune.segments.len(), 15);
        assert_eq!(
            rune.digit_segments(),
            &[7, 5, 15, 8, 6, 17, 1, 3, 9, 2, 4, 11]
        );
    }

    #[test]
    fn test_zero_is_just_the_stem() {
        let rune = assemble(0);
        assert_eq!(rune.segments, vec![10, 13, 16]);
        assert!(rune.digit_segments().is_empty());
    }

    #[test]
    fn test_digit_segments_of_short_rune() {
        let rune = Rune {
            number: 1,
            segments: vec![10],
        };
        assert!(rune.digit_segments().is_empty());
    }

    #[test]
    fn test_base_present_for_all_numbers() {
        for n in 1..=9999 {
            let rune = convert(n);
            assert_eq!(&rune.segments[..3], &BASE_SEGMENTS, "number {}", n);
            assert!(rune.segments.len() <= 15);
        }
    }
}
