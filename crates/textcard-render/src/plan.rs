//! Placed layout plan: the render IR consumed by raster backends.

use textcard::RunStyle;

/// Character used to synthesize divider rules.
pub const DIVIDER_RULE_CHAR: char = '─';

/// A styled run with its measured rendered width.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredRun {
    /// Run text. Never empty.
    pub text: String,
    /// Run style.
    pub style: RunStyle,
    /// Width in pixels as measured during wrapping.
    pub width: f32,
}

impl MeasuredRun {
    pub fn new(text: impl Into<String>, style: RunStyle, width: f32) -> Self {
        Self {
            text: text.into(),
            style,
            width,
        }
    }
}

/// One renderable row of output after wrapping.
#[derive(Clone, Debug, PartialEq)]
pub enum PhysicalLine {
    /// Vertical gap; nothing is painted.
    Blank,
    /// Synthesized horizontal rule, pre-built to fill the content width.
    Divider {
        /// The rule text, [`DIVIDER_RULE_CHAR`] repeated to fit. May be
        /// empty when the rule glyph reports a zero advance.
        rule: String,
    },
    /// Styled text runs whose summed width fits the content width.
    Content {
        /// Runs in paint order.
        runs: Vec<MeasuredRun>,
    },
}

impl PhysicalLine {
    /// Summed run width for content lines, `0.0` otherwise.
    pub fn content_width(&self) -> f32 {
        match self {
            Self::Content { runs } => runs.iter().map(|r| r.width).sum(),
            _ => 0.0,
        }
    }
}

/// A physical line bound to its vertical slot on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// The line payload.
    pub line: PhysicalLine,
    /// Absolute y of the line's top edge on the canvas, in pixels.
    /// For dividers this is the rule's own top edge, inside its margins.
    pub y: f32,
    /// Ink height of the line, in pixels.
    pub height: f32,
}

/// The complete placed document: computed once, consumed read-only by
/// both canvas allocation and painting.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Placed lines in paint order.
    pub lines: Vec<PlacedLine>,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels, padding included.
    pub canvas_height: u32,
    /// Left edge of the content area (the padding), in pixels.
    pub content_left: f32,
    /// Width budget wrapped content was packed under.
    pub max_content_width: f32,
}

impl LayoutPlan {
    /// Number of placed content lines.
    pub fn content_line_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|p| matches!(p.line, PhysicalLine::Content { .. }))
            .count()
    }
}
