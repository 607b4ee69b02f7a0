//! Error types for sheetsync.

use thiserror::Error;

/// Result type for sheetsync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur across the sheetsync crates.
#[derive(Debug, Error)]
pub enum SyncError {
    /// HTTP transport failure: the request could not be completed, or the
    /// endpoint answered with a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Application-level error carried in a JSON envelope. Displays as the
    /// extracted message alone, the way the endpoint phrased it.
    #[error("{0}")]
    Api(String),

    /// A required row collection was empty.
    #[error("expected at least one row")]
    EmptyRows,

    /// A row of a rectangular block has the wrong width.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Paired sequences differ in length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Chunking requires a positive chunk size.
    #[error("chunk size must be positive")]
    ChunkSize,

    /// Rows are 1-based; row 0 is not addressable.
    #[error("start row must be at least 1")]
    InvalidStartRow,

    /// Malformed data that could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// Named config cell not found.
    #[error("config variable not found: {0}")]
    MissingConfig(String),

    /// Failure reported by an external tabular store.
    #[error("store error: {0}")]
    Store(String),

    /// Failure reported by an external property store.
    #[error("property error: {0}")]
    Property(String),

    /// Failure reported by an external UI surface.
    #[error("UI error: {0}")]
    Ui(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
