//! Growth policy for [`GrowableBuffer`](crate::buffer::GrowableBuffer).

/// How a buffer picks its new capacity when a reservation doesn't fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GrowthPolicy {
    /// Grow to exactly `len + extra`. Keeps memory tight, but a run of
    /// single-element appends reallocates on every call (O(n²) copying).
    ExactFit,
    /// Grow to `max(2 * capacity, len + extra)`. Amortized O(1) append,
    /// O(log n) reallocations for n appends.
    #[default]
    Doubling,
}

impl GrowthPolicy {
    /// New capacity for a buffer that currently holds `capacity` slots and
    /// needs at least `required`.
    ///
    /// Only meaningful when `required > capacity`; callers handle the
    /// no-growth case themselves.
    ///
    /// ```
    /// use cachelab::GrowthPolicy;
    ///
    /// assert_eq!(GrowthPolicy::ExactFit.grown_capacity(8, 9), 9);
    /// assert_eq!(GrowthPolicy::Doubling.grown_capacity(8, 9), 16);
    /// assert_eq!(GrowthPolicy::Doubling.grown_capacity(0, 1), 1);
    /// assert_eq!(GrowthPolicy::Doubling.grown_capacity(4, 100), 100);
    /// ```
    pub fn grown_capacity(self, capacity: usize, required: usize) -> usize {
        match self {
            GrowthPolicy::ExactFit => required,
            GrowthPolicy::Doubling => capacity.saturating_mul(2).max(required),
        }
    }
}
