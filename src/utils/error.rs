use thiserror::Error;

/// Failure conditions reported by [`Universe`](crate::Universe) operations.
///
/// Every variant is a local, recoverable input violation; the failing call
/// leaves the field exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UniverseError {
    /// Construction with a zero dimension.
    #[error("invalid dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// A position outside the field.
    #[error("position ({row}, {col}) is outside the field")]
    OutOfBounds { row: usize, col: usize },

    /// A malformed plaintext pattern.
    #[error("bad pattern: {0}")]
    BadPattern(String),
}
