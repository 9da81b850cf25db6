//! Layout calculator: places physical lines and sizes the canvas.

use crate::metrics::GlyphMetrics;
use crate::plan::{LayoutPlan, PhysicalLine, PlacedLine, DIVIDER_RULE_CHAR};
use crate::wrap::wrap_runs;
use textcard::{LogicalLine, RenderOptions, RunStyle};

/// Synthesize the fixed-width divider rule text.
///
/// The rule character is repeated as many whole times as fit in the
/// content width; a zero-advance rule glyph yields an empty rule.
fn build_rule<M: GlyphMetrics + ?Sized>(max_content_width: f32, metrics: &M) -> String {
    let advance = metrics.advance(DIVIDER_RULE_CHAR, RunStyle::Normal);
    if advance <= 0.0 {
        log::warn!("rule glyph {DIVIDER_RULE_CHAR:?} has no advance; dividers render empty");
        return String::new();
    }
    let count = (max_content_width / advance) as usize;
    DIVIDER_RULE_CHAR.to_string().repeat(count)
}

/// Wrap and place a parsed document, producing the layout plan.
///
/// This is the single geometry pass: the returned plan carries every
/// line's absolute vertical slot and the final canvas size, and is
/// consumed read-only by canvas allocation and painting.
///
/// Spacing accumulation: `text_line_spacing` separates every pair of
/// consecutive physical lines, with none after the last. A divider
/// pulls toward the preceding line — whenever the previous physical
/// line is not blank (another divider included), the spacing between
/// them is suppressed — and carries `divider_margin` above and below
/// its rule instead.
pub fn layout_document<M: GlyphMetrics + ?Sized>(
    lines: &[LogicalLine],
    opts: &RenderOptions,
    metrics: &M,
) -> LayoutPlan {
    let max_content_width = opts.max_content_width();
    let rule = build_rule(max_content_width, metrics);

    let mut physical: Vec<PhysicalLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match line {
            LogicalLine::Blank => physical.push(PhysicalLine::Blank),
            LogicalLine::Divider => physical.push(PhysicalLine::Divider { rule: rule.clone() }),
            LogicalLine::Content(runs) => {
                // A content line whose markup dissolved into nothing
                // (e.g. a bare `****`) contributes no physical line.
                for runs in wrap_runs(runs, max_content_width, metrics) {
                    physical.push(PhysicalLine::Content { runs });
                }
            }
        }
    }

    let padding = opts.padding as f32;
    let spacing = opts.text_line_spacing;
    let margin = opts.divider_margin;
    let rule_height = metrics.ink_height(&DIVIDER_RULE_CHAR.to_string(), RunStyle::Normal);
    let blank_height = metrics.ink_height(" ", RunStyle::Normal);

    let mut placed = Vec::with_capacity(physical.len());
    let mut y = padding;
    let mut prev_blank = false;
    let last = physical.len().saturating_sub(1);
    for (i, line) in physical.into_iter().enumerate() {
        match line {
            PhysicalLine::Divider { .. } => {
                if i > 0 && !prev_blank {
                    y -= spacing;
                }
                y += margin;
                placed.push(PlacedLine {
                    line,
                    y,
                    height: rule_height,
                });
                y += rule_height + margin;
                prev_blank = false;
            }
            PhysicalLine::Blank => {
                placed.push(PlacedLine {
                    line,
                    y,
                    height: blank_height,
                });
                y += blank_height;
                prev_blank = true;
            }
            PhysicalLine::Content { runs } => {
                let height = runs
                    .iter()
                    .map(|r| metrics.ink_height(&r.text, r.style))
                    .fold(0.0, f32::max);
                placed.push(PlacedLine {
                    line: PhysicalLine::Content { runs },
                    y,
                    height,
                });
                y += height;
                prev_blank = false;
            }
        }
        if i != last {
            y += spacing;
        }
    }

    LayoutPlan {
        lines: placed,
        canvas_width: opts.width,
        canvas_height: (y + padding).ceil().max(1.0) as u32,
        content_left: padding,
        max_content_width,
    }
}
