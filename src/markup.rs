//! Markup parsing: raw text to logical lines of styled runs.

use regex::Regex;
use std::sync::OnceLock;

/// Text style of a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunStyle {
    /// Regular face.
    Normal,
    /// Bold face.
    Bold,
}

/// A contiguous span of text sharing one style.
///
/// Runs are immutable values once emitted by the parser; the wrapping
/// engine constructs new runs when it splits text across lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    /// Run text. Never empty.
    pub text: String,
    /// Run style.
    pub style: RunStyle,
}

impl StyledRun {
    /// Build a run. Callers are responsible for keeping `text` non-empty.
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One line of the original input text, classified before wrapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogicalLine {
    /// The raw line was exactly empty (zero length, not merely whitespace).
    Blank,
    /// The trimmed line is three or more `-`/`—` characters and nothing else.
    /// Rendered as a synthesized fixed-width rule, never copied verbatim.
    Divider,
    /// Anything else: an ordered sequence of styled runs.
    Content(Vec<StyledRun>),
}

// The pattern is a compile-time literal, so the parse cannot fail.
#[allow(clippy::unwrap_used)]
fn bold_span_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

/// Split one content line into styled runs.
///
/// `**...**` pairs are matched left-to-right, non-overlapping and greedy;
/// a lone or unmatched `**` stays literal text. Empty runs are dropped.
/// Adjacent runs of identical style are not merged here; the wrapping
/// engine owns that normalization.
fn parse_line_runs(line: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut cursor = 0;
    for caps in bold_span_pattern().captures_iter(line) {
        // captures_iter never yields a match without group 0.
        #[allow(clippy::unwrap_used)]
        let whole = caps.get(0).unwrap();
        let before = &line[cursor..whole.start()];
        if !before.is_empty() {
            runs.push(StyledRun::new(before, RunStyle::Normal));
        }
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if !inner.is_empty() {
            runs.push(StyledRun::new(inner, RunStyle::Bold));
        }
        cursor = whole.end();
    }
    let rest = &line[cursor..];
    if !rest.is_empty() {
        runs.push(StyledRun::new(rest, RunStyle::Normal));
    }
    runs
}

fn is_divider_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() >= 3 && trimmed.chars().all(|c| c == '-' || c == '—')
}

/// Parse raw text into logical lines.
///
/// Lines are split on `\n` with empty entries preserved, so consecutive
/// blank lines stay distinct. Any input is valid; malformed markup
/// degrades to literal text.
pub fn parse_markup(text: &str) -> Vec<LogicalLine> {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                LogicalLine::Blank
            } else if is_divider_line(line) {
                LogicalLine::Divider
            } else {
                LogicalLine::Content(parse_line_runs(line))
            }
        })
        .collect()
}
