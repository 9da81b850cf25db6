//! Glyph measurement capability used by wrapping and layout.

use textcard::RunStyle;

/// Per-style glyph measurement hook implemented by raster backends.
///
/// Widths are horizontal advances; heights are tight ink extents taken
/// at a shared baseline. Keeping this surface small keeps the wrapping
/// engine and layout calculator independent of any font backend.
pub trait GlyphMetrics {
    /// Horizontal advance of a single character, in pixels.
    ///
    /// An unsupported glyph may legitimately report `0.0`; the wrapping
    /// engine still places such characters (they consume no budget).
    fn advance(&self, ch: char, style: RunStyle) -> f32;

    /// Rendered width of a string: the sum of its character advances.
    fn run_width(&self, text: &str, style: RunStyle) -> f32 {
        text.chars().map(|ch| self.advance(ch, style)).sum()
    }

    /// Tight vertical ink extent of `text` laid on one baseline.
    ///
    /// The union of per-glyph vertical bounds, so `"Ay"` is taller than
    /// `"ace"`, and ink-less text such as `" "` reports `0.0`.
    fn ink_height(&self, text: &str, style: RunStyle) -> f32;
}

impl<M: GlyphMetrics + ?Sized> GlyphMetrics for &M {
    fn advance(&self, ch: char, style: RunStyle) -> f32 {
        (**self).advance(ch, style)
    }

    fn run_width(&self, text: &str, style: RunStyle) -> f32 {
        (**self).run_width(text, style)
    }

    fn ink_height(&self, text: &str, style: RunStyle) -> f32 {
        (**self).ink_height(text, style)
    }
}
