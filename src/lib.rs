//! Two small numerical building blocks for poking at cache behaviour.
//!
//! I wanted to see how much memory layout and loop order matter before
//! reaching for SIMD or blocking. This crate has the two pieces I kept
//! coming back to:
//!
//! - [`GrowableBuffer`]: a `Vec<f64>`-like buffer whose growth policy you
//!   pick, so exact-fit growth (realloc on every append) can be timed
//!   against doubling.
//! - [`Matrix`] + [`multiply`]: row-major single-block matrices and an
//!   i-k-j matmul whose inner loop streams rows of B and C, versus the
//!   textbook i-j-k order and a jagged array-of-rows layout.
//!
//! ## Usage
//!
//! ```
//! use cachelab::{multiply, Matrix};
//!
//! let a = Matrix::from_fn(256, 256, |i, j| (i + j) as f64)?;
//! let b = Matrix::from_fn(256, 256, |i, j| (i * j % 7) as f64)?;
//! let mut c = Matrix::allocate(256, 256)?;
//!
//! multiply(&a, &b, &mut c);
//! # Ok::<(), cachelab::MatrixError>(())
//! ```
//!
//! ```
//! use cachelab::{GrowableBuffer, GrowthPolicy};
//!
//! let mut squares = GrowableBuffer::with_policy(GrowthPolicy::ExactFit);
//! for i in 0..1000 {
//!     squares.append((i * i) as f64)?;
//! }
//! assert_eq!(squares.reallocations(), 1000);
//! # Ok::<(), cachelab::BufferError>(())
//! ```
//!
//! ## What's inside
//!
//! - `buffer`: growable buffer with exact-fit or doubling growth
//! - `matrix`: single-block matrix, i-k-j and i-j-k kernels, jagged layout
//! - `config`: growth policy
//! - `error`: allocation errors

pub mod buffer;
pub mod config;
pub mod error;
pub mod matrix;

pub use buffer::{BufferSummary, GrowableBuffer};
pub use config::GrowthPolicy;
pub use error::{BufferError, MatrixError};
pub use matrix::naive_ijk::matmul_ijk;
pub use matrix::naive_ikj::matmul_ikj;
pub use matrix::{JaggedMatrix, Matrix, multiply, multiply_jagged};
