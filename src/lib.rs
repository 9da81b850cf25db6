//! Core text model for `textcard`: markup parsing, themes, and render options.
//!
//! This crate turns raw text carrying a lightweight markup (``**bold**``
//! spans, blank lines, `---`/`———` divider rules) into logical lines of
//! styled runs, and owns the theme table and the option surface shared by
//! the layout and raster crates. It performs no measurement, layout, or
//! drawing; see `textcard-render` and `textcard-raster` for those stages.

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

mod config;
mod markup;
mod theme;

pub use config::RenderOptions;
pub use markup::{parse_markup, LogicalLine, RunStyle, StyledRun};
pub use theme::{Background, Rgb, Theme};
