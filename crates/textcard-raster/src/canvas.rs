//! Canvas allocation and plan painting.

use crate::fonts::FaceStore;
use image::{Rgba, RgbaImage};
use textcard::{Background, Rgb, RunStyle, Theme};
use textcard_render::{LayoutPlan, PhysicalLine};

fn opaque(color: Rgb) -> Rgba<u8> {
    Rgba([color.0, color.1, color.2, 255])
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Allocate the canvas with the theme background.
///
/// Gradients interpolate per RGB channel between the endpoint colors at
/// pixel-row granularity, endpoints inclusive, tiled across the full
/// canvas width.
fn background(width: u32, height: u32, fill: Background) -> RgbaImage {
    match fill {
        Background::Solid(color) => RgbaImage::from_pixel(width, height, opaque(color)),
        Background::VerticalGradient(top, bottom) => {
            let mut canvas = RgbaImage::new(width, height);
            for y in 0..height {
                let t = if height > 1 {
                    y as f32 / (height - 1) as f32
                } else {
                    0.0
                };
                let row = Rgba([
                    lerp_channel(top.0, bottom.0, t),
                    lerp_channel(top.1, bottom.1, t),
                    lerp_channel(top.2, bottom.2, t),
                    255,
                ]);
                for x in 0..width {
                    canvas.put_pixel(x, y, row);
                }
            }
            canvas
        }
    }
}

fn draw_text(
    canvas: &mut RgbaImage,
    faces: &FaceStore,
    style: RunStyle,
    text: &str,
    x: f32,
    top_y: f32,
    color: Rgb,
) {
    use textcard_render::GlyphMetrics;

    let baseline_y = top_y + faces.ascent(style);
    let (width, height) = canvas.dimensions();
    let mut cursor = x;
    for ch in text.chars() {
        faces.draw_char(ch, style, cursor, baseline_y, &mut |px, py, coverage| {
            if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                return;
            }
            let coverage = coverage.clamp(0.0, 1.0);
            if coverage <= 0.0 {
                return;
            }
            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
            let Rgba([r, g, b, a]) = *pixel;
            *pixel = Rgba([
                lerp_channel(r, color.0, coverage),
                lerp_channel(g, color.1, coverage),
                lerp_channel(b, color.2, coverage),
                a,
            ]);
        });
        cursor += faces.advance(ch, style);
    }
}

/// Paint a layout plan onto a fresh canvas.
///
/// Geometry comes exclusively from the plan; this pass decides nothing.
/// Content runs advance the x cursor by their measured widths, divider
/// rules paint in the regular face, blank lines paint nothing.
pub fn paint(plan: &LayoutPlan, theme: &Theme, faces: &FaceStore) -> RgbaImage {
    let mut canvas = background(plan.canvas_width, plan.canvas_height, theme.background);

    for placed in &plan.lines {
        match &placed.line {
            PhysicalLine::Blank => {}
            PhysicalLine::Divider { rule } => {
                if !rule.is_empty() {
                    draw_text(
                        &mut canvas,
                        faces,
                        RunStyle::Normal,
                        rule,
                        plan.content_left,
                        placed.y,
                        theme.text,
                    );
                }
            }
            PhysicalLine::Content { runs } => {
                let mut x = plan.content_left;
                for run in runs {
                    draw_text(
                        &mut canvas,
                        faces,
                        run.style,
                        &run.text,
                        x,
                        placed.y,
                        theme.text,
                    );
                    x += run.width;
                }
            }
        }
    }

    canvas
}
