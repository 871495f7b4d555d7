use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GreenGuardError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("{tool} not found. Install it or set its path in the [extraction] config section")]
    ToolNotFound { tool: String },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("unknown document kind '{0}'. Use pdf, image, text or xlsx")]
    UnknownDocumentKind(String),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("failed to load estimator from {path}: {reason}")]
    EstimatorLoad { path: PathBuf, reason: String },

    #[error("invalid estimator: {0}")]
    EstimatorInvalid(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("failed to load config from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("failed to write report: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
