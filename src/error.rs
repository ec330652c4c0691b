//! Error types for buffer growth and matrix allocation.
//!
//! Only allocation problems are reported as values. Bad indices and
//! mismatched matrix shapes are caller bugs and panic instead.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors from [`GrowableBuffer`](crate::buffer::GrowableBuffer) growth.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not provide `requested` slots. The buffer keeps
    /// its previous storage and contents.
    #[error("allocation failed: could not grow buffer to {requested} elements")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: Option<TryReserveError>,
    },
}

/// Errors from [`Matrix`](crate::matrix::Matrix) construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("allocation failed: could not allocate a {rows}x{cols} matrix")]
    AllocationFailure {
        rows: usize,
        cols: usize,
        #[source]
        source: Option<TryReserveError>,
    },

    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

pub type BufferResult<T> = std::result::Result<T, BufferError>;
pub type MatrixResult<T> = std::result::Result<T, MatrixError>;
