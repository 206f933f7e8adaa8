//! SVG renderer for generating output from runes
//!
//! This module takes an ordered segment list and produces an SVG string
//! with one line element per resolved segment.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_warnings, RenderWarning, SvgBuilder};
