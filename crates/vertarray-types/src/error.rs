//! Error types for vertarray.
//!
//! All crates return `VertexResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for buffer growth, record construction and shape
/// generation.
#[derive(Debug, Error)]
pub enum VertexError {
    /// Capacity arithmetic would exceed the buffer's byte ceiling.
    #[error("Capacity overflow: {requested} elements of {stride} bytes exceeds the growth ceiling")]
    Overflow {
        /// Element count that was requested.
        requested: usize,
        /// Byte size of one element.
        stride: usize,
    },

    /// The allocator refused to provide storage.
    #[error("Allocation of {bytes} bytes failed")]
    Allocation {
        /// Size of the failed request in bytes.
        bytes: usize,
    },

    /// A seek targeted a slot outside the allocated capacity.
    #[error("Position {position} is out of bounds (capacity: {capacity})")]
    OutOfBounds {
        position: usize,
        capacity: usize,
    },

    /// A record could not be built from the supplied fields.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Shape parameters are not finite or out of range.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, VertexError>`.
pub type VertexResult<T> = Result<T, VertexError>;
