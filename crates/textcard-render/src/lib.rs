//! Backend-agnostic layout for `textcard`: glyph-metrics capability,
//! line-wrapping engine, and the placed layout plan consumed by raster
//! backends.
//!
//! The layout pass runs exactly once per render. It measures styled runs
//! through [`GlyphMetrics`], wraps them under the content-width budget,
//! and emits a [`LayoutPlan`] with absolute vertical offsets, so canvas
//! allocation and painting both read the same geometry and can never
//! disagree.

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

mod layout;
mod metrics;
mod plan;
mod wrap;

pub use layout::layout_document;
pub use metrics::GlyphMetrics;
pub use plan::{LayoutPlan, MeasuredRun, PhysicalLine, PlacedLine, DIVIDER_RULE_CHAR};
pub use wrap::{is_forbidden_leader, wrap_runs};
