use std::fmt;
use std::ops::Index;

use crate::config::GrowthPolicy;
use crate::error::{BufferError, BufferResult};

/// A resizable, contiguous, exclusively owned sequence of `f64`.
///
/// Capacity only changes through [`reserve`](Self::reserve) (which every
/// growing operation calls) and [`destroy`](Self::destroy). How much it
/// grows is decided by the buffer's [`GrowthPolicy`].
///
/// Slices handed out by [`as_slice`](Self::as_slice) borrow the buffer, so
/// they can't outlive a call that might move the storage.
///
/// ```
/// use cachelab::GrowableBuffer;
///
/// let mut buf = GrowableBuffer::new();
/// buf.append(1.0)?;
/// buf.append(3.0)?;
/// buf.insert(1, 2.0)?;
/// assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0]);
///
/// assert_eq!(buf.pop(0), 1.0);
/// assert_eq!(buf.as_slice(), &[2.0, 3.0]);
/// # Ok::<(), cachelab::BufferError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrowableBuffer {
    data: Vec<f64>,
    policy: GrowthPolicy,
    reallocations: usize,
}

impl GrowableBuffer {
    /// Empty buffer with the default (doubling) growth policy. Does not
    /// allocate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            data: Vec::new(),
            policy,
            reallocations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of allocated slots. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// How many times the storage has been (re)allocated since creation or
    /// the last [`destroy`](Self::destroy).
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Make room for at least `extra` more elements past `len()`.
    ///
    /// A no-op when `len() + extra` already fits. Otherwise the storage is
    /// regrown to the size the policy picks. If the allocator refuses, the
    /// buffer is left untouched and `AllocationFailure` is returned.
    pub fn reserve(&mut self, extra: usize) -> BufferResult<()> {
        let len = self.data.len();
        let capacity = self.data.capacity();

        let required = len
            .checked_add(extra)
            .ok_or(BufferError::AllocationFailure {
                requested: usize::MAX,
                source: None,
            })?;
        if required <= capacity {
            return Ok(());
        }

        let target = self.policy.grown_capacity(capacity, required);
        let grown = match self.data.try_reserve_exact(target - len) {
            Ok(()) => Ok(()),
            // A doubled target can fail where the bare requirement would not.
            Err(_) if target > required => self.data.try_reserve_exact(required - len),
            Err(err) => Err(err),
        };

        if let Err(err) = grown {
            log::warn!("buffer growth to {required} elements failed: {err}");
            return Err(BufferError::AllocationFailure {
                requested: required,
                source: Some(err),
            });
        }

        self.reallocations += 1;
        log::trace!(
            "buffer regrown: capacity {capacity} -> {} ({:?})",
            self.data.capacity(),
            self.policy
        );
        Ok(())
    }

    /// Push `value` onto the end.
    pub fn append(&mut self, value: f64) -> BufferResult<()> {
        self.reserve(1)?;
        self.data.push(value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`. The check happens before any growth, so a
    /// rejected insert leaves the buffer unchanged.
    pub fn insert(&mut self, index: usize, value: f64) -> BufferResult<()> {
        let len = self.data.len();
        assert!(
            index <= len,
            "insert index {index} out of range for buffer of length {len}"
        );

        self.reserve(1)?;
        // Open a slot at the end, then move the tail up into it.
        self.data.push(value);
        self.data.copy_within(index..len, index + 1);
        self.data[index] = value;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// Capacity is kept for later growth.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn pop(&mut self, index: usize) -> f64 {
        let len = self.data.len();
        assert!(
            index < len,
            "pop index {index} out of range for buffer of length {len}"
        );

        let out = self.data[index];
        self.data.copy_within(index + 1..len, index);
        self.data.truncate(len - 1);
        out
    }

    /// Free the storage and return to the empty state. Safe to call any
    /// number of times. The growth policy is kept.
    pub fn destroy(&mut self) {
        if self.data.capacity() > 0 {
            log::trace!("buffer destroyed: released {} slots", self.data.capacity());
        }
        self.data = Vec::new();
        self.reallocations = 0;
    }

    /// Length, capacity and storage address, for eyeballing growth.
    pub fn summary(&self) -> BufferSummary {
        BufferSummary {
            len: self.data.len(),
            capacity: self.data.capacity(),
            addr: (self.data.capacity() > 0).then(|| self.data.as_ptr() as usize),
        }
    }
}

impl Index<usize> for GrowableBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl From<Vec<f64>> for GrowableBuffer {
    fn from(mut data: Vec<f64>) -> Self {
        data.shrink_to_fit();
        Self {
            data,
            policy: GrowthPolicy::default(),
            reallocations: 0,
        }
    }
}

impl FromIterator<f64> for GrowableBuffer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// Prints the live elements as `[a, b, c]`.
impl fmt::Display for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Snapshot of a buffer's bookkeeping, see [`GrowableBuffer::summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSummary {
    pub len: usize,
    pub capacity: usize,
    /// Storage address, `None` while nothing is allocated.
    pub addr: Option<usize>,
}

impl fmt::Display for BufferSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ len: {}, capacity: {}, data: ", self.len, self.capacity)?;
        match self.addr {
            Some(addr) => write!(f, "{addr:#x} }}"),
            None => write!(f, "null }}"),
        }
    }
}
