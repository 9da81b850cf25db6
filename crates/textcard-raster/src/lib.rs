//! Raster backend for `textcard` layout plans.
//!
//! Loads real font faces (user-supplied, system, or the bundled
//! defaults), implements the layout crate's glyph-metrics capability
//! over them, paints plans onto RGBA canvases, applies the decorative
//! post-processing (rounded corners, drop-shadow frame), and writes
//! encoded image files.
//!
//! The whole pipeline is synchronous and CPU-bound; callers that live
//! on a cooperative scheduler should move [`render_to_file`] onto a
//! worker thread.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod canvas;
mod effects;
mod error;
mod fonts;
mod pipeline;

pub use canvas::paint;
pub use effects::{apply_effects, FRAME_PADDING, SHADOW_ALPHA, SHADOW_BLUR_SIGMA, SHADOW_OFFSET};
pub use error::RenderError;
pub use fonts::{FaceStore, FontPaths};
pub use pipeline::{render_to_file, render_to_image};
