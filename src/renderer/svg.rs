//! SVG generation from segment lists

use std::fmt;

use crate::glyph::geometry::{
    self, Segment, SegmentId, DOCUMENT_HEIGHT, DOCUMENT_WIDTH, STROKE_COLOR, STROKE_LINECAP,
    STROKE_WIDTH,
};

use super::SvgConfig;

/// A recoverable problem found while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// The id does not name one of the 25 segments; nothing was drawn for it
    UnknownSegment { id: SegmentId },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::UnknownSegment { id } => {
                write!(f, "segment {} not found in geometry table", id)
            }
        }
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    lines: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            lines: vec![],
        }
    }

    fn indent_str(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a line element for a segment
    pub fn add_line(&mut self, segment: &Segment) {
        self.lines.push(format!(
            r#"{}<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.indent_str(2),
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2
        ));
    }

    /// Number of line elements added so far
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg viewBox="{}" xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            geometry::viewbox(),
            DOCUMENT_WIDTH,
            DOCUMENT_HEIGHT
        ));
        svg.push_str(nl);

        svg.push_str(&format!(
            r#"{}<g stroke="{}" stroke-width="{}" stroke-linecap="{}">"#,
            self.indent_str(1),
            STROKE_COLOR,
            STROKE_WIDTH,
            STROKE_LINECAP
        ));
        svg.push_str(nl);

        for line in &self.lines {
            svg.push_str(line);
            svg.push_str(nl);
        }

        svg.push_str(&self.indent_str(1));
        svg.push_str("</g>");
        svg.push_str(nl);
        svg.push_str("</svg>");

        svg
    }
}

/// Render a segment list to an SVG string, collecting warnings for ids
/// that could not be resolved
pub fn render_svg_with_warnings(
    segments: &[SegmentId],
    config: &SvgConfig,
) -> (String, Vec<RenderWarning>) {
    let mut builder = SvgBuilder::new(config.clone());
    let mut warnings = Vec::new();

    for &id in segments {
        match geometry::resolve(id) {
            Some(segment) => builder.add_line(segment),
            None => {
                let warning = RenderWarning::UnknownSegment { id };
                tracing::warn!(segment = id, "{}", warning);
                warnings.push(warning);
            }
        }
    }

    (builder.build(), warnings)
}

/// Render a segment list to an SVG string.
///
/// Unknown ids are skipped with a logged warning.
pub fn render_svg(segments: &[SegmentId], config: &SvgConfig) -> String {
    render_svg_with_warnings(segments, config).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> SvgConfig {
        SvgConfig::new().with_pretty_print(false)
    }

    #[test]
    fn test_empty_document() {
        let svg = render_svg(&[], &compact());
        assert_eq!(
            svg,
            r##"<svg viewBox="-5 -5 70 100" xmlns="http://www.w3.org/2000/svg" width="70" height="100"><g stroke="#4c1d95" stroke-width="4" stroke-linecap="round"></g></svg>"##
        );
    }

    #[test]
    fn test_base_lines() {
        let svg = render_svg(&[10, 13, 16], &compact());
        assert_eq!(svg.matches("<line").count(), 3);
        assert!(svg.contains(r#"<line x1="30" y1="0" x2="30" y2="30"/>"#));
        assert!(svg.contains(r#"<line x1="30" y1="30" x2="30" y2="60"/>"#));
        assert!(svg.contains(r#"<line x1="30" y1="60" x2="30" y2="90"/>"#));
    }

    #[test]
    fn test_unknown_segment_is_skipped() {
        let (svg, warnings) = render_svg_with_warnings(&[10, 0, 26, 13], &compact());
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(
            warnings,
            vec![
                RenderWarning::UnknownSegment { id: 0 },
                RenderWarning::UnknownSegment { id: 26 },
            ]
        );
        assert!(warnings[1].to_string().contains("26"));
    }

    #[test]
    fn test_duplicates_are_drawn_twice() {
        let svg = render_svg(&[2, 2], &compact());
        assert_eq!(svg.matches(r#"<line x1="30" y1="0" x2="60" y2="0"/>"#).count(), 2);
    }

    #[test]
    fn test_standalone_declaration() {
        let svg = render_svg(&[], &SvgConfig::new().with_standalone(true));
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn test_pretty_print_indents_lines() {
        let svg = render_svg(&[1], &SvgConfig::default());
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], r#"    <line x1="0" y1="0" x2="30" y2="0"/>"#);
        assert_eq!(lines[3], "  </g>");
    }

    #[test]
    fn test_builder_counts_lines() {
        let mut builder = SvgBuilder::new(compact());
        builder.add_line(&geometry::SEGMENTS[0]);
        builder.add_line(&geometry::SEGMENTS[1]);
        assert_eq!(builder.line_count(), 2);
    }
}
