//! Error types for frd-common.

use thiserror::Error;

/// Common error type for frd codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input buffer does not have the exact size of the record.
    #[error("invalid record size: expected {expected} bytes, got {actual}")]
    Size { expected: usize, actual: usize },

    /// Value does not fit in the bit field it is packed into.
    #[error("value {value} does not fit in a {width}-bit field")]
    Range { value: u64, width: u32 },

    /// Bit range does not lie inside its storage word.
    #[error("bit range at offset {offset} with width {width} does not fit a {bits}-bit word")]
    Span { offset: u32, width: u32, bits: u32 },

    /// Text needs more code units than its fixed slot holds.
    #[error("text too long: {actual} code units, capacity is {capacity}")]
    Length { capacity: usize, actual: usize },

    /// Text contains a NUL, which would terminate the slot early.
    #[error("text contains NUL at code unit {position}")]
    Nul { position: usize },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
