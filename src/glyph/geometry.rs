//! Geometry table for the 25 rune segments
//!
//! Segments live on a 2 column x 3 row grid of 30-unit cells:
//!
//! ```text
//!  x=0     x=30     x=60
//! ┌─────────┬─────────┐ y=0
//! |         |         |
//! ├─────────┼─────────┤ y=30
//! |         |         |
//! ├─────────┼─────────┤ y=60
//! |         |         |
//! └─────────┴─────────┘ y=90
//! ```
//!
//! Ids 1-8 are horizontal, 9-17 vertical and 18-25 diagonal.

use std::fmt;

/// Identifier of a segment. Valid ids are 1 through 25.
pub type SegmentId = u8;

/// Number of segments in the table
pub const SEGMENT_COUNT: usize = 25;

/// The central vertical stem drawn for every rune
pub const BASE_SEGMENTS: [SegmentId; 3] = [10, 13, 16];

/// Width of the rendered document
pub const DOCUMENT_WIDTH: u32 = 70;

/// Height of the rendered document
pub const DOCUMENT_HEIGHT: u32 = 100;

/// Origin offset of the viewBox, leaving a 5-unit margin around the grid
pub const VIEWBOX_ORIGIN: (i32, i32) = (-5, -5);

pub const STROKE_COLOR: &str = "#4c1d95";
pub const STROKE_WIDTH: u32 = 4;
pub const STROKE_LINECAP: &str = "round";

/// Orientation tag of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// A fixed line primitive on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub id: SegmentId,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub orientation: Orientation,
}

impl Segment {
    const fn new(
        id: SegmentId,
        (x1, y1): (i32, i32),
        (x2, y2): (i32, i32),
        orientation: Orientation,
    ) -> Self {
        Self {
            id,
            x1,
            y1,
            x2,
            y2,
            orientation,
        }
    }
}

use Orientation::{Diagonal, Horizontal, Vertical};

/// All segments, indexed by `id - 1`
pub const SEGMENTS: [Segment; SEGMENT_COUNT] = [
    // Horizontal
    Segment::new(1, (0, 0), (30, 0), Horizontal),
    Segment::new(2, (30, 0), (60, 0), Horizontal),
    Segment::new(3, (0, 30), (30, 30), Horizontal),
    Segment::new(4, (30, 30), (60, 30), Horizontal),
    Segment::new(5, (0, 60), (30, 60), Horizontal),
    Segment::new(6, (30, 60), (60, 60), Horizontal),
    Segment::new(7, (0, 90), (30, 90), Horizontal),
    Segment::new(8, (30, 90), (60, 90), Horizontal),
    // Vertical
    Segment::new(9, (0, 0), (0, 30), Vertical),
    Segment::new(10, (30, 0), (30, 30), Vertical),
    Segment::new(11, (60, 0), (60, 30), Vertical),
    Segment::new(12, (0, 30), (0, 60), Vertical),
    Segment::new(13, (30, 30), (30, 60), Vertical),
    Segment::new(14, (60, 30), (60, 60), Vertical),
    Segment::new(15, (0, 60), (0, 90), Vertical),
    Segment::new(16, (30, 60), (30, 90), Vertical),
    Segment::new(17, (60, 60), (60, 90), Vertical),
    // Diagonal
    Segment::new(18, (0, 0), (30, 30), Diagonal),
    Segment::new(19, (30, 0), (0, 30), Diagonal),
    Segment::new(20, (30, 0), (60, 30), Diagonal),
    Segment::new(21, (60, 0), (30, 30), Diagonal),
    Segment::new(22, (0, 60), (30, 90), Diagonal),
    Segment::new(23, (30, 60), (0, 90), Diagonal),
    Segment::new(24, (30, 60), (60, 90), Diagonal),
    Segment::new(25, (60, 60), (30, 90), Diagonal),
];

/// Look up a segment by id.
///
/// Returns None for ids outside 1-25.
pub fn resolve(id: SegmentId) -> Option<&'static Segment> {
    let index = usize::from(id).checked_sub(1)?;
    SEGMENTS.get(index)
}

/// The viewBox attribute value, e.g. `-5 -5 70 100`
pub fn viewbox() -> String {
    format!(
        "{} {} {} {}",
        VIEWBOX_ORIGIN.0, VIEWBOX_ORIGIN.1, DOCUMENT_WIDTH, DOCUMENT_HEIGHT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_id() {
        for (index, segment) in SEGMENTS.iter().enumerate() {
            assert_eq!(usize::from(segment.id), index + 1);
        }
    }

    #[test]
    fn test_resolve_known_segments() {
        let stem = resolve(10).unwrap();
        assert_eq!((stem.x1, stem.y1, stem.x2, stem.y2), (30, 0, 30, 30));
        assert_eq!(stem.orientation, Orientation::Vertical);

        let diagonal = resolve(25).unwrap();
        assert_eq!((diagonal.x1, diagonal.y1, diagonal.x2, diagonal.y2), (60, 60, 30, 90));
        assert_eq!(diagonal.orientation, Orientation::Diagonal);
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert!(resolve(0).is_none());
        assert!(resolve(26).is_none());
        assert!(resolve(u8::MAX).is_none());
    }

    #[test]
    fn test_orientation_matches_endpoints() {
        for segment in &SEGMENTS {
            let expected = if segment.y1 == segment.y2 {
                Orientation::Horizontal
            } else if segment.x1 == segment.x2 {
                Orientation::Vertical
            } else {
                Orientation::Diagonal
            };
            assert_eq!(segment.orientation, expected, "segment {}", segment.id);
        }
    }

    #[test]
    fn test_coordinates_on_grid() {
        for segment in &SEGMENTS {
            for x in [segment.x1, segment.x2] {
                assert!((0..=60).contains(&x) && x % 30 == 0);
            }
            for y in [segment.y1, segment.y2] {
                assert!((0..=90).contains(&y) && y % 30 == 0);
            }
        }
    }

    #[test]
    fn test_base_segments_form_center_column() {
        for id in BASE_SEGMENTS {
            let segment = resolve(id).unwrap();
            assert_eq!(segment.x1, 30);
            assert_eq!(segment.x2, 30);
        }
    }

    #[test]
    fn test_viewbox() {
        assert_eq!(viewbox(), "-5 -5 70 100");
    }
}
