use std::fs;
use std::path::PathBuf;

use textcard::{parse_markup, RenderOptions, Theme};
use textcard_raster::{
    apply_effects, paint, render_to_file, render_to_image, FaceStore, FontPaths, FRAME_PADDING,
    SHADOW_OFFSET,
};
use textcard_render::layout_document;

fn options(theme: &str) -> RenderOptions {
    RenderOptions {
        width: 400,
        padding: 20,
        theme: theme.to_string(),
        use_frame: false,
        corner_radius: 0,
        ..RenderOptions::default()
    }
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("textcard-tests-{}-{tag}", std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

#[test]
fn rendered_canvas_matches_plan_dimensions() {
    let faces = FaceStore::builtin(24.0);
    let opts = options("dark");
    let text = "Daily notes\n---\nFirst **bold** item\n\nSecond item";
    let plan = layout_document(&parse_markup(text), &opts, &faces);
    let image = render_to_image(text, &faces, &opts);

    assert_eq!(image.width(), plan.canvas_width);
    assert_eq!(image.height(), plan.canvas_height);
}

#[test]
fn frame_adds_fixed_margins_to_plan_dimensions() {
    let faces = FaceStore::builtin(24.0);
    let mut opts = options("dark");
    opts.use_frame = true;
    opts.corner_radius = 15;
    let text = "framed card";
    let plan = layout_document(&parse_markup(text), &opts, &faces);
    let image = render_to_image(text, &faces, &opts);

    assert_eq!(image.width(), plan.canvas_width + 2 * FRAME_PADDING + SHADOW_OFFSET);
    assert_eq!(image.height(), plan.canvas_height + 2 * FRAME_PADDING + SHADOW_OFFSET);
}

#[test]
fn text_ink_lands_in_theme_color() {
    let faces = FaceStore::builtin(24.0);
    let opts = options("default");
    let image = render_to_image("Hello", &faces, &opts);

    // White background, black ink.
    let mut dark_pixels = 0usize;
    for pixel in image.pixels() {
        if pixel.0[0] < 100 && pixel.0[3] == 255 {
            dark_pixels += 1;
        }
    }
    assert!(dark_pixels > 10, "expected glyph coverage, got {dark_pixels}");
}

#[test]
fn divider_paints_a_rule_row() {
    let faces = FaceStore::builtin(24.0);
    let opts = options("default");
    let with_rule = render_to_image("above\n------\nbelow", &faces, &opts);
    let without_rule = render_to_image("above\nbelow", &faces, &opts);

    let ink = |image: &image::RgbaImage| {
        image
            .pixels()
            .filter(|p| p.0[0] < 100)
            .count()
    };
    assert!(ink(&with_rule) > ink(&without_rule));
    assert!(with_rule.height() > without_rule.height());
}

#[test]
fn gradient_theme_paints_endpoint_rows() {
    let faces = FaceStore::builtin(24.0);
    let opts = options("dark-gradient");
    let image = render_to_image("g", &faces, &opts);

    let top = image.get_pixel(0, 0);
    let bottom = image.get_pixel(0, image.height() - 1);
    assert_eq!((top.0[0], top.0[1], top.0[2]), (43, 48, 59));
    assert_eq!((bottom.0[0], bottom.0[1], bottom.0[2]), (20, 22, 28));
}

#[test]
fn disabled_postprocessing_is_pixel_identical_to_paint() {
    let faces = FaceStore::builtin(24.0);
    let opts = options("light");
    let text = "untouched **canvas**";
    let plan = layout_document(&parse_markup(text), &opts, &faces);
    let painted = paint(&plan, &Theme::named(&opts.theme), &faces);
    let (finished, has_alpha) = apply_effects(painted.clone(), false, 0);

    assert!(!has_alpha);
    assert_eq!(painted.as_raw(), finished.as_raw());
    assert_eq!(painted.as_raw(), render_to_image(text, &faces, &opts).as_raw());
}

#[test]
fn render_to_file_coerces_extension_for_transparent_output() {
    let dir = scratch_dir("coerce");
    let mut opts = options("dark");
    opts.use_frame = true;
    let requested = dir.join("report.jpg");
    let resolved = render_to_file("file output", &requested, &FontPaths::default(), &opts)
        .expect("render should succeed");

    assert_eq!(resolved, dir.join("report.png"));
    assert!(resolved.exists());
    let bytes = fs::read(&resolved).expect("read output");
    assert_eq!(&bytes[1..4], b"PNG");
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn render_to_file_keeps_jpeg_for_opaque_output() {
    let dir = scratch_dir("jpeg");
    let requested = dir.join("plain.jpg");
    let resolved = render_to_file("opaque card", &requested, &FontPaths::default(), &options("light"))
        .expect("render should succeed");

    assert_eq!(resolved, requested);
    let bytes = fs::read(&resolved).expect("read output");
    assert_eq!(&bytes[..2], &[0xff, 0xd8]);
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn render_to_file_surfaces_write_failures() {
    let mut opts = options("dark");
    opts.use_frame = false;
    let missing_dir = PathBuf::from("/definitely/missing/dir/out.png");
    let err = render_to_file("text", &missing_dir, &FontPaths::default(), &opts)
        .expect_err("write must fail");
    assert_eq!(err.code, "image_write_failed");
    assert!(err.path.is_some());
}

#[test]
fn bogus_font_paths_still_render() {
    let fonts = FontPaths {
        regular: Some(PathBuf::from("/nope/regular.ttf")),
        bold: Some(PathBuf::from("/nope/bold.ttf")),
    };
    let dir = scratch_dir("fallback");
    let out = dir.join("card.png");
    let resolved =
        render_to_file("fallback **faces**", &out, &fonts, &options("default")).expect("render");
    assert!(resolved.exists());
    fs::remove_dir_all(&dir).ok();
}
