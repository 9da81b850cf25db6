//! Render option surface shared by the layout and raster stages.

use serde::{Deserialize, Serialize};

/// Options controlling card geometry, typography, and decoration.
///
/// Together with the input text these fully determine the rendered
/// output; there is no hidden state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Total canvas width in pixels.
    pub width: u32,
    /// Inner padding around the content area in pixels.
    pub padding: u32,
    /// Font size in pixels.
    pub font_size: f32,
    /// Theme name; unknown names fall back to the default theme.
    pub theme: String,
    /// Draw the blurred drop-shadow frame around the card.
    pub use_frame: bool,
    /// Corner radius in pixels; `0` disables rounding.
    pub corner_radius: u32,
    /// Extra spacing between consecutive lines in pixels.
    pub text_line_spacing: f32,
    /// Margin above and below a divider rule in pixels.
    pub divider_margin: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1080,
            padding: 40,
            font_size: 24.0,
            theme: "dark-gradient".to_string(),
            use_frame: true,
            corner_radius: 15,
            text_line_spacing: 5.0,
            divider_margin: 10.0,
        }
    }
}

impl RenderOptions {
    /// Width available to wrapped content, in pixels.
    pub fn max_content_width(&self) -> f32 {
        (self.width.saturating_sub(2 * self.padding)).max(1) as f32
    }

    /// Clamp fields to sane bounds.
    pub fn normalized(mut self) -> Self {
        self.width = self.width.clamp(64, 8192);
        self.padding = self.padding.min(self.width / 4);
        self.font_size = self.font_size.clamp(6.0, 256.0);
        self.text_line_spacing = self.text_line_spacing.clamp(0.0, 256.0);
        self.divider_margin = self.divider_margin.clamp(0.0, 256.0);
        self.corner_radius = self.corner_radius.min(512);
        self
    }
}
