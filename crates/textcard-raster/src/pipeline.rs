//! The blocking render entry points.

use crate::canvas::paint;
use crate::effects::apply_effects;
use crate::error::RenderError;
use crate::fonts::{FaceStore, FontPaths};
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use textcard::{parse_markup, RenderOptions, Theme};
use textcard_render::layout_document;

/// Render markup text to a finished RGBA image.
///
/// Parse, wrap, layout, paint, and post-process in one synchronous
/// pass. Never fails: malformed markup degrades to literal text and the
/// face store already absorbed any font problems.
pub fn render_to_image(text: &str, faces: &FaceStore, opts: &RenderOptions) -> RgbaImage {
    let theme = Theme::named(&opts.theme);
    let logical = parse_markup(text);
    let plan = layout_document(&logical, opts, faces);
    let canvas = paint(&plan, &theme, faces);
    let (finished, _) = apply_effects(canvas, opts.use_frame, opts.corner_radius);
    finished
}

/// Pick the path the image is actually written to.
///
/// A transparent result needs an alpha-capable container, so anything
/// but `.png` is coerced to `.png`; opaque results keep the requested
/// extension.
fn resolve_output_path(requested: &Path, has_alpha: bool) -> PathBuf {
    if !has_alpha {
        return requested.to_path_buf();
    }
    let is_png = requested
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        requested.to_path_buf()
    } else {
        requested.with_extension("png")
    }
}

/// Render markup text and write the image file.
///
/// Fonts load with the full fallback chain (user path, system face,
/// bundled default); only encoding or filesystem failures surface as
/// errors. Returns the resolved output path, which may differ from the
/// requested one by extension.
pub fn render_to_file(
    text: &str,
    output_path: &Path,
    fonts: &FontPaths,
    opts: &RenderOptions,
) -> Result<PathBuf, RenderError> {
    let faces = FaceStore::load(fonts, opts.font_size);
    let theme = Theme::named(&opts.theme);
    let logical = parse_markup(text);
    let plan = layout_document(&logical, opts, &faces);
    let canvas = paint(&plan, &theme, &faces);
    let (finished, has_alpha) = apply_effects(canvas, opts.use_frame, opts.corner_radius);

    let resolved = resolve_output_path(output_path, has_alpha);
    let result = if has_alpha {
        finished.save(&resolved)
    } else {
        // Opaque output: drop the alpha channel so formats like JPEG
        // stay writable.
        DynamicImage::ImageRgba8(finished).to_rgb8().save(&resolved)
    };
    result.map_err(|err| RenderError::write(resolved.clone(), err))?;

    log::info!("card image written to {}", resolved.display());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_extension_is_preserved() {
        assert_eq!(
            resolve_output_path(Path::new("/tmp/card.PNG"), true),
            PathBuf::from("/tmp/card.PNG")
        );
    }

    #[test]
    fn alpha_output_coerces_extension() {
        assert_eq!(
            resolve_output_path(Path::new("/tmp/card.jpg"), true),
            PathBuf::from("/tmp/card.png")
        );
        assert_eq!(
            resolve_output_path(Path::new("/tmp/card"), true),
            PathBuf::from("/tmp/card.png")
        );
    }

    #[test]
    fn opaque_output_keeps_requested_extension() {
        assert_eq!(
            resolve_output_path(Path::new("/tmp/card.jpg"), false),
            PathBuf::from("/tmp/card.jpg")
        );
    }
}
