//! Error types for friend data parsing.

use thiserror::Error;

/// Errors that can occur when working with friend data files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Codec error (size, range or text length).
    #[error("{0}")]
    Common(#[from] frd_common::Error),

    /// Magic or version constant did not match.
    #[error("invalid magic: expected {expected:#010x}, got {actual:#010x}")]
    InvalidMagic { expected: u32, actual: u32 },

    /// Serial number is too short or has a non-digit where a digit is summed.
    #[error("invalid serial number: {0:?}")]
    InvalidSerial(String),
}

/// Result type for friend data operations.
pub type Result<T> = std::result::Result<T, Error>;
