//! Error types for ridgematch.

use thiserror::Error;

/// Result alias for ridgematch operations.
pub type RidgeMatchResult<T> = std::result::Result<T, RidgeMatchError>;

/// Errors raised at the crate boundary.
///
/// The core algorithms never return these: out-of-bounds lookups yield
/// `None` and shape mismatches compare unequal. Errors only surface when
/// building images, validating configuration, or doing image I/O.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RidgeMatchError {
    /// An image must have at least one row and one column.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// A nested-row image had a row of different length than the first.
    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A flat pixel buffer did not hold exactly `rows * cols` values.
    #[error("buffer size mismatch: expected {expected}, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// A configuration value is outside its domain.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
    /// Decoding or encoding an image file failed.
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
