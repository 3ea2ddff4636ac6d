use thiserror::Error;

/// Errors raised while loading workbooks.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported dictionary format: {0}")]
    UnsupportedFormat(String),
    #[error("no csv sheets found in directory: {0}")]
    EmptyDirectory(String),
}

/// Result type for ingest operations.
pub type IngestResult<T> = std::result::Result<T, IngestError>;
