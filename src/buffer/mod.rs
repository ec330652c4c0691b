//! Growable `f64` buffer with explicit control over reallocation.
//!
//! `Vec<f64>` already does all of this; the point here is to make the
//! growth policy visible and countable, so exact-fit growth (one
//! reallocation per append) can be measured against doubling.

pub mod growable;

pub use growable::{BufferSummary, GrowableBuffer};
