//! Dense matrices and the loop orderings being compared.
//!
//! [`Matrix`] keeps all rows in one row-major block. [`multiply`] runs the
//! i-k-j kernel over it; the i-j-k kernel and the jagged layout are kept
//! as baselines for correctness checks and benchmarks.

pub mod dense;
pub mod jagged;
pub mod naive_ijk;
pub mod naive_ikj;

pub use dense::{Matrix, multiply};
pub use jagged::{JaggedMatrix, multiply_jagged};
