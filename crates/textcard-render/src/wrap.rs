//! Greedy character-level line wrapping with forbidden-leader pull-back.

use crate::metrics::GlyphMetrics;
use crate::plan::MeasuredRun;
use textcard::{RunStyle, StyledRun};

/// Punctuation that must never open a physical line.
///
/// Mixed CJK/Latin closing punctuation; content between these and the
/// preceding character has no break opportunity.
const FORBIDDEN_LEADERS: &[char] = &[
    ',', '.', '!', '?', ';', ':', '}', ']', ')', '>', '》', '】', '』', '，', '。', '！', '？',
    '；', '：', '”', '’', '）', '〉', '、',
];

/// Whether `ch` belongs to the forbidden-leading-character set.
pub fn is_forbidden_leader(ch: char) -> bool {
    FORBIDDEN_LEADERS.contains(&ch)
}

/// Merge adjacent runs of identical style into single runs.
///
/// Purely a bookkeeping reduction; rendered output is unchanged.
fn merge_adjacent(runs: &[StyledRun]) -> Vec<StyledRun> {
    let mut merged: Vec<StyledRun> = Vec::with_capacity(runs.len());
    for run in runs {
        match merged.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => merged.push(run.clone()),
        }
    }
    merged
}

#[derive(Default)]
struct LineBuilder {
    runs: Vec<MeasuredRun>,
    width: f32,
    chars: usize,
}

impl LineBuilder {
    fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn push_char(&mut self, ch: char, style: RunStyle, advance: f32) {
        match self.runs.last_mut() {
            Some(last) if last.style == style => {
                last.text.push(ch);
                last.width += advance;
            }
            _ => self.runs.push(MeasuredRun::new(ch.to_string(), style, advance)),
        }
        self.width += advance;
        self.chars += 1;
    }

    /// Remove and return the last placed character together with its style.
    ///
    /// Builds on the additive width bookkeeping of `push_char`; the
    /// emptied trailing run is dropped so no empty run ever escapes.
    fn pull_last_char<M: GlyphMetrics + ?Sized>(&mut self, metrics: &M) -> Option<(char, RunStyle)> {
        let last = self.runs.last_mut()?;
        let ch = last.text.pop()?;
        let style = last.style;
        let advance = metrics.advance(ch, style);
        last.width -= advance;
        self.width -= advance;
        self.chars -= 1;
        if last.text.is_empty() {
            self.runs.pop();
        }
        Some((ch, style))
    }

    fn take(&mut self) -> Vec<MeasuredRun> {
        self.width = 0.0;
        self.chars = 0;
        std::mem::take(&mut self.runs)
    }
}

/// Wrap one logical line's runs into physical lines under `max_width`.
///
/// Packing is greedy and character-level: the content mixes CJK (no
/// inter-word spaces) and Latin text, so word boundaries cannot be
/// relied on. When the character that would open a new line is a
/// forbidden leader, the last character of the current line is pulled
/// back to accompany it — shifting exactly one character, never more.
///
/// Guarantees:
/// - every returned line's summed width is at most `max_width`, except
///   a single character wider than the whole budget, which is placed
///   alone rather than dropped;
/// - zero-advance characters are always placed and consume no budget;
/// - no returned line is empty and no run within a line is empty.
pub fn wrap_runs<M: GlyphMetrics + ?Sized>(
    runs: &[StyledRun],
    max_width: f32,
    metrics: &M,
) -> Vec<Vec<MeasuredRun>> {
    let merged = merge_adjacent(runs);
    let mut lines: Vec<Vec<MeasuredRun>> = Vec::new();
    let mut line = LineBuilder::default();
    let mut just_pulled = false;

    for run in &merged {
        let style = run.style;
        let mut iter = run.text.chars().peekable();
        while let Some(&ch) = iter.peek() {
            let advance = metrics.advance(ch, style);
            if !line.is_empty() && line.width + advance > max_width {
                if !just_pulled && is_forbidden_leader(ch) && line.chars > 1 {
                    if let Some((pulled, pulled_style)) = line.pull_last_char(metrics) {
                        lines.push(line.take());
                        let pulled_advance = metrics.advance(pulled, pulled_style);
                        line.push_char(pulled, pulled_style, pulled_advance);
                        just_pulled = true;
                        // Re-process `ch` against the freshly seeded line.
                        continue;
                    }
                }
                lines.push(line.take());
                just_pulled = false;
                // Re-process `ch` at the start of the new line.
                continue;
            }
            iter.next();
            line.push_char(ch, style, advance);
            just_pulled = false;
        }
    }

    if !line.is_empty() {
        lines.push(line.take());
    }
    lines
}
