//! Structured render errors.

use std::fmt;
use std::path::PathBuf;

/// Error surfaced by a render call.
///
/// Only I/O-level failures (encoding, writing the output file) reach
/// callers; font problems and malformed markup are recovered inside the
/// pipeline and logged instead.
#[derive(Debug)]
pub struct RenderError {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Output path context, when one exists.
    pub path: Option<PathBuf>,
}

impl RenderError {
    pub(crate) fn write(path: PathBuf, source: impl fmt::Display) -> Self {
        Self {
            code: "image_write_failed",
            message: source.to_string(),
            path: Some(path),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {} ({})", self.code, self.message, path.display()),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for RenderError {}
