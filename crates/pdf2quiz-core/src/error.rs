use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("failed to load rewrite rules from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid rewrite rules: {0}")]
    RulesetInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
