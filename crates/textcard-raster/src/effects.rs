//! Decorative post-processing: rounded corners and the shadow frame.

use image::{imageops, Rgba, RgbaImage};

/// Transparent margin around the card when the frame is enabled.
pub const FRAME_PADDING: u32 = 20;
/// Down-right displacement of the shadow shape.
pub const SHADOW_OFFSET: u32 = 10;
/// Gaussian blur sigma applied to the shadow shape.
pub const SHADOW_BLUR_SIGMA: f32 = 15.0;
/// Shadow fill alpha before blurring.
pub const SHADOW_ALPHA: u8 = 50;

/// Whether the pixel center at `(x, y)` lies inside the rounded
/// rectangle `[0, width) x [0, height)` with the given corner radius.
fn inside_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: f32) -> bool {
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;
    let w = width as f32;
    let h = height as f32;
    let radius = radius.min(w / 2.0).min(h / 2.0);

    let cx = if px < radius {
        radius
    } else if px > w - radius {
        w - radius
    } else {
        return true;
    };
    let cy = if py < radius {
        radius
    } else if py > h - radius {
        h - radius
    } else {
        return true;
    };
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= radius * radius
}

fn clip_corners(image: &mut RgbaImage, radius: u32) {
    let (width, height) = image.dimensions();
    for y in 0..height {
        for x in 0..width {
            if !inside_rounded_rect(x, y, width, height, radius as f32) {
                image.get_pixel_mut(x, y).0[3] = 0;
            }
        }
    }
}

fn fill_rounded_rect(
    image: &mut RgbaImage,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    for y in 0..height {
        for x in 0..width {
            if inside_rounded_rect(x, y, width, height, radius as f32) {
                let (cx, cy) = (left + x, top + y);
                if cx < image.width() && cy < image.height() {
                    image.put_pixel(cx, cy, color);
                }
            }
        }
    }
}

/// Apply rounded corners and the optional blurred drop-shadow frame.
///
/// With `use_frame == false` and `corner_radius == 0` the canvas passes
/// through untouched. Returns the finished image together with a flag
/// telling whether it now carries transparency.
///
/// Frame geometry matches the fixed design constants: the output grows
/// by `2 * FRAME_PADDING + SHADOW_OFFSET` on each axis, the shadow
/// shape sits `SHADOW_OFFSET` down-right of the content slot, and the
/// content composites at `(FRAME_PADDING, FRAME_PADDING)`.
pub fn apply_effects(image: RgbaImage, use_frame: bool, corner_radius: u32) -> (RgbaImage, bool) {
    if !use_frame && corner_radius == 0 {
        return (image, false);
    }

    let mut image = image;
    if corner_radius > 0 {
        clip_corners(&mut image, corner_radius);
    }
    if !use_frame {
        return (image, true);
    }

    let (width, height) = image.dimensions();
    let out_w = width + 2 * FRAME_PADDING + SHADOW_OFFSET;
    let out_h = height + 2 * FRAME_PADDING + SHADOW_OFFSET;

    let mut shadow = RgbaImage::new(out_w, out_h);
    fill_rounded_rect(
        &mut shadow,
        FRAME_PADDING + SHADOW_OFFSET,
        FRAME_PADDING + SHADOW_OFFSET,
        width,
        height,
        corner_radius,
        Rgba([0, 0, 0, SHADOW_ALPHA]),
    );
    let mut framed = imageops::blur(&shadow, SHADOW_BLUR_SIGMA);
    imageops::overlay(&mut framed, &image, FRAME_PADDING as i64, FRAME_PADDING as i64);
    (framed, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn disabled_effects_pass_the_canvas_through() {
        let image = filled(40, 30);
        let (out, has_alpha) = apply_effects(image.clone(), false, 0);
        assert!(!has_alpha);
        assert_eq!(out.as_raw(), image.as_raw());
    }

    #[test]
    fn corner_radius_clears_corner_alpha_only() {
        let (out, has_alpha) = apply_effects(filled(40, 30), false, 8);
        assert!(has_alpha);
        assert_eq!(out.get_pixel(0, 0).0[3], 0);
        assert_eq!(out.get_pixel(39, 0).0[3], 0);
        assert_eq!(out.get_pixel(0, 29).0[3], 0);
        assert_eq!(out.get_pixel(39, 29).0[3], 0);
        // Centers and edge midpoints stay opaque.
        assert_eq!(out.get_pixel(20, 15).0[3], 255);
        assert_eq!(out.get_pixel(20, 0).0[3], 255);
        assert_eq!(out.get_pixel(0, 15).0[3], 255);
    }

    #[test]
    fn frame_grows_canvas_by_fixed_margins() {
        let (out, has_alpha) = apply_effects(filled(40, 30), true, 0);
        assert!(has_alpha);
        assert_eq!(out.width(), 40 + 2 * FRAME_PADDING + SHADOW_OFFSET);
        assert_eq!(out.height(), 30 + 2 * FRAME_PADDING + SHADOW_OFFSET);
        // Content sits at the frame padding offset.
        assert_eq!(*out.get_pixel(FRAME_PADDING + 5, FRAME_PADDING + 5), Rgba([10, 20, 30, 255]));
        // The far corner sees at most a faint blur tail.
        assert!(out.get_pixel(0, 0).0[3] <= 3);
    }

    #[test]
    fn frame_casts_shadow_past_the_content_edge() {
        let (out, _) = apply_effects(filled(40, 30), true, 0);
        // Just outside the content's bottom-right corner, inside the
        // shadow's displaced footprint.
        let probe = out.get_pixel(FRAME_PADDING + 40 + 4, FRAME_PADDING + 30 + 4);
        assert!(probe.0[3] > 0, "expected blurred shadow coverage");
        assert!(probe.0[3] < 255);
    }
}
