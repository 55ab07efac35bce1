use thiserror::Error;

/// Error type for tablepath operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TablePathError {
    #[error(
        "Cannot split '{input}' into database, optional schema and table name (got {segments} segments)"
    )]
    InvalidFormat { input: String, segments: usize },
}

/// Result type alias for tablepath operations
pub type Result<T> = std::result::Result<T, TablePathError>;
