//! Error types for the analytics engine.

use crate::db::repository::RepositoryError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The record is missing both an identity and any usable date, so no
    /// aggregator downstream could place it. Batch normalization drops the
    /// record and keeps a count instead of failing the whole batch.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A custom period failed to parse or has `end < start`.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Export requested with a format outside pdf/xlsx/csv/json.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Export or save attempted before any report was assembled.
    #[error("No active report to operate on")]
    NoActiveReport,

    /// The remote record source rejected or timed out.
    #[error("Data source failure: {0}")]
    DataSourceFailure(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Internal(e.to_string())
    }
}
