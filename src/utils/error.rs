use thiserror::Error;

use crate::models::LineKind;

/// Errors surfaced by the pipeline around the extraction engine.
#[derive(Error, Debug)]
pub enum IdCardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OCR input error: {0}")]
    Ocr(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recoverable failure of a single anchor during a scan.
///
/// The scanner records these and keeps going; they never abort an extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("malformed trailing block: {anchor:?} anchor on line {line} needs {needed} more line(s)")]
    MalformedTrailingBlock {
        anchor: LineKind,
        line: usize,
        needed: usize,
    },

    #[error("MRZ line {line} too short for series and number ({len} chars)")]
    ShortMrzLine { line: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, IdCardError>;
