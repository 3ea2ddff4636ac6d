use thiserror::Error;

/// Core error type shared across Datadex crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The workbook violates internal invariants.
    #[error("invalid workbook: {0}")]
    InvalidWorkbook(String),
}

/// Convenience alias for results returned by Datadex crates.
pub type Result<T> = std::result::Result<T, Error>;
