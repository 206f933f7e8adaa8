//! Runa - numbers 1-9999 as runic glyphs
//!
//! This library encodes a number as a set of line segments on a fixed
//! 2x3 grid and renders that set as SVG.
//!
//! # Example
//!
//! ```rust
//! use runa::{convert, render};
//!
//! let rune = convert(1991);
//! assert_eq!(&rune.segments[..3], &[10, 13, 16]);
//!
//! let svg = render(&rune.segments);
//! assert!(svg.contains("<svg"));
//! ```

pub mod download;
pub mod error;
pub mod glyph;
pub mod input;
pub mod renderer;
pub mod settings;

pub use download::DownloadError;
pub use error::{EncodeError, InputError};
pub use glyph::{assemble, convert, decompose, lookup, Digit, Position, Rune, SegmentId};
pub use renderer::{render_svg, RenderWarning, SvgConfig};
pub use settings::{Settings, SettingsError};

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur between raw input and a saved document
#[derive(Debug, Error)]
pub enum RunaError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

impl From<&Settings> for RenderConfig {
    fn from(settings: &Settings) -> Self {
        Self::new().with_svg(settings.svg_config())
    }
}

/// Render a segment list to SVG with default configuration
///
/// Ids outside 1-25 are skipped with a logged warning.
pub fn render(segments: &[SegmentId]) -> String {
    render_with_config(segments, &RenderConfig::default())
}

/// Render a segment list to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use runa::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::new().with_pretty_print(false));
/// let svg = render_with_config(&[10, 13, 16], &config);
/// assert_eq!(svg.matches("<line").count(), 3);
/// ```
pub fn render_with_config(segments: &[SegmentId], config: &RenderConfig) -> String {
    render_svg(segments, &config.svg)
}

/// Render a segment list, also returning a warning for every skipped id
pub fn render_with_warnings(
    segments: &[SegmentId],
    config: &RenderConfig,
) -> (String, Vec<RenderWarning>) {
    renderer::render_svg_with_warnings(segments, &config.svg)
}

/// Convert a number and render its rune with default configuration
pub fn render_number(number: u32) -> String {
    render(&convert(number).segments)
}

/// Sanitize raw text input, convert it and render the rune
///
/// # Example
///
/// ```rust
/// use runa::{render_input, RenderConfig};
///
/// let (rune, svg) = render_input("19a91", &RenderConfig::default()).unwrap();
/// assert_eq!(rune.number, 1991);
/// assert!(svg.contains("<line"));
/// ```
pub fn render_input(raw: &str, config: &RenderConfig) -> Result<(Rune, String), RunaError> {
    let number = input::parse_input(raw)?;
    let rune = convert(number);
    let svg = render_with_config(&rune.segments, config);
    Ok((rune, svg))
}

/// Render `number` with the given settings and write it to the settings'
/// output directory
pub fn save_rune(number: u32, settings: &Settings) -> Result<PathBuf, RunaError> {
    let svg = render_with_config(&convert(number).segments, &RenderConfig::from(settings));
    Ok(download::save(&settings.directory, number, &svg)?)
}
