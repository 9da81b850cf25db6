//! Font face loading, fallback, and glyph measurement.

use ab_glyph::{point, Font, FontArc, FontVec, PxScale, PxScaleFont, ScaleFont};
use std::path::{Path, PathBuf};
use textcard::RunStyle;
use textcard_render::GlyphMetrics;

/// Bundled default faces. DejaVu carries wide Latin coverage plus the
/// box-drawing glyph used for divider rules.
const BUILTIN_REGULAR: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const BUILTIN_BOLD: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Well-known system faces probed when no usable path is configured.
/// CJK-capable faces first; the list is best-effort, not exhaustive.
const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Optional user-configured font files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontPaths {
    /// Regular face path.
    pub regular: Option<PathBuf>,
    /// Bold face path.
    pub bold: Option<PathBuf>,
}

fn load_face(path: &Path) -> Option<FontArc> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("font '{}' unreadable: {err}", path.display());
            return None;
        }
    };
    match FontVec::try_from_vec(data) {
        Ok(font) => Some(FontArc::from(font)),
        Err(err) => {
            log::warn!("font '{}' not parseable: {err}", path.display());
            None
        }
    }
}

fn system_face() -> Option<FontArc> {
    for candidate in SYSTEM_CANDIDATES {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        if let Some(face) = load_face(path) {
            log::info!("using system face '{candidate}'");
            return Some(face);
        }
    }
    None
}

// The bundled bytes are compile-time constants; `bundled_faces_parse`
// keeps this infallible.
#[allow(clippy::expect_used)]
fn builtin_face(data: &'static [u8]) -> FontArc {
    FontArc::try_from_slice(data).expect("bundled DejaVu face parses")
}

/// Loaded regular/bold faces at a fixed pixel scale.
///
/// Construction never fails: a missing or unreadable regular face falls
/// back to a system face, then to the bundled default; a missing bold
/// face falls back to the regular face (or the bundled bold when the
/// regular face is itself the bundled default). Failures are logged at
/// warning level.
#[derive(Clone)]
pub struct FaceStore {
    regular: FontArc,
    bold: FontArc,
    scale: PxScale,
}

impl FaceStore {
    /// Load faces for the given paths at `font_size` pixels.
    pub fn load(paths: &FontPaths, font_size: f32) -> Self {
        let (regular, regular_is_bundled) = match paths.regular.as_deref().and_then(load_face) {
            Some(face) => (face, false),
            None => match system_face() {
                Some(face) => (face, false),
                None => (builtin_face(BUILTIN_REGULAR), true),
            },
        };

        let bold = match paths.bold.as_deref().and_then(load_face) {
            Some(face) => face,
            // Keep the pair matched: bundled bold next to the bundled
            // regular, otherwise reuse the regular face itself.
            None if regular_is_bundled => builtin_face(BUILTIN_BOLD),
            None => {
                log::warn!("no usable bold face; reusing the regular face");
                regular.clone()
            }
        };

        Self {
            regular,
            bold,
            scale: PxScale::from(font_size.max(1.0)),
        }
    }

    /// Bundled default faces at `font_size` pixels, bypassing discovery.
    pub fn builtin(font_size: f32) -> Self {
        Self {
            regular: builtin_face(BUILTIN_REGULAR),
            bold: builtin_face(BUILTIN_BOLD),
            scale: PxScale::from(font_size.max(1.0)),
        }
    }

    fn face(&self, style: RunStyle) -> &FontArc {
        match style {
            RunStyle::Normal => &self.regular,
            RunStyle::Bold => &self.bold,
        }
    }

    fn scaled(&self, style: RunStyle) -> PxScaleFont<&FontArc> {
        self.face(style).as_scaled(self.scale)
    }

    /// Distance from the line top to the baseline, in pixels.
    pub fn ascent(&self, style: RunStyle) -> f32 {
        self.scaled(style).ascent()
    }

    /// Rasterize `ch` at the given baseline position, feeding coverage
    /// samples to `blend(x, y, coverage)`.
    pub fn draw_char(
        &self,
        ch: char,
        style: RunStyle,
        x: f32,
        baseline_y: f32,
        blend: &mut dyn FnMut(i64, i64, f32),
    ) {
        let font = self.face(style);
        let glyph = font
            .glyph_id(ch)
            .with_scale_and_position(self.scale, point(x, baseline_y));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                blend(
                    bounds.min.x as i64 + gx as i64,
                    bounds.min.y as i64 + gy as i64,
                    coverage,
                );
            });
        }
    }
}

impl std::fmt::Debug for FaceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceStore").field("scale", &self.scale).finish()
    }
}

impl GlyphMetrics for FaceStore {
    fn advance(&self, ch: char, style: RunStyle) -> f32 {
        let font = self.face(style);
        font.as_scaled(self.scale).h_advance(font.glyph_id(ch))
    }

    fn ink_height(&self, text: &str, style: RunStyle) -> f32 {
        let font = self.face(style);
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;
        for ch in text.chars() {
            let glyph = font
                .glyph_id(ch)
                .with_scale_and_position(self.scale, point(0.0, 0.0));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                top = top.min(bounds.min.y);
                bottom = bottom.max(bounds.max.y);
            }
        }
        if bottom > top {
            bottom - top
        } else {
            0.0
        }
    }
}
