//! Number to rune encoding
//!
//! A number is decomposed into decimal places, each place is looked up in
//! its own digit table, and the results are appended after the base stem.

pub mod decompose;
pub mod encoder;
pub mod geometry;
pub mod rune;

pub use decompose::{decompose, Decomposed};
pub use encoder::{lookup, lookup_value, Digit, Position};
pub use geometry::{resolve, Orientation, Segment, SegmentId, BASE_SEGMENTS, SEGMENTS};
pub use rune::{assemble, convert, Rune};
