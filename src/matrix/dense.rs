//! Row-major matrix backed by a single allocation.

use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::naive_ikj::matmul_ikj;

/// A `rows × cols` matrix of `f64` stored in one contiguous block.
///
/// Row `i` starts right where row `i - 1` ends, which is what lets
/// [`multiply`] stream whole rows through its inner loop. The shape is
/// fixed for the life of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a `rows × cols` matrix as one block.
    ///
    /// The block is zero-filled, but callers are expected to write their
    /// own values before use.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if `rows * cols` overflows or the allocator
    /// can't provide the block.
    pub fn allocate(rows: usize, cols: usize) -> MatrixResult<Self> {
        let len = rows.checked_mul(cols).ok_or(MatrixError::AllocationFailure {
            rows,
            cols,
            source: None,
        })?;

        let mut data = Vec::new();
        if let Err(err) = data.try_reserve_exact(len) {
            log::warn!("matrix allocation {rows}x{cols} failed: {err}");
            return Err(MatrixError::AllocationFailure {
                rows,
                cols,
                source: Some(err),
            });
        }
        data.resize(len, 0.0);

        log::debug!("allocated {rows}x{cols} matrix ({} bytes)", len * size_of::<f64>());
        Ok(Self { rows, cols, data })
    }

    /// Adopt a row-major vector as a `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `data.len() != rows * cols`.
    pub fn from_rows(rows: usize, cols: usize, data: Vec<f64>) -> MatrixResult<Self> {
        let expected = rows.checked_mul(cols).ok_or(MatrixError::AllocationFailure {
            rows,
            cols,
            source: None,
        })?;
        if data.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Allocate and fill with `f(i, j)`.
    ///
    /// ```
    /// use cachelab::Matrix;
    ///
    /// let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64)?;
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(m[(1, 2)], 5.0);
    /// # Ok::<(), cachelab::MatrixError>(())
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> MatrixResult<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut m = Self::allocate(rows, cols)?;
        if cols > 0 {
            for (i, row) in m.data.chunks_exact_mut(cols).enumerate() {
                for (j, v) in row.iter_mut().enumerate() {
                    *v = f(i, j);
                }
            }
        }
        Ok(m)
    }

    /// Free the block. Same as dropping the matrix; the handle is consumed
    /// so it can't be used afterwards.
    pub fn release(self) {
        log::debug!("released {}x{} matrix", self.rows, self.cols);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The whole block in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

/// Matrix multiply: C = A * B
///
/// A is m×k, B is k×n, C is m×n. Every element of C is overwritten.
/// Runs the i-k-j kernel ([`matmul_ikj`]) over the matrices' backing
/// blocks.
///
/// Shapes are a caller contract and are only checked in debug builds.
/// The borrow rules already rule out C aliasing A or B.
///
/// ```
/// use cachelab::{multiply, Matrix};
///
/// let a = Matrix::from_rows(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
/// let b = Matrix::from_rows(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0])?;
/// let mut c = Matrix::allocate(2, 2)?;
///
/// multiply(&a, &b, &mut c);
/// assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
/// # Ok::<(), cachelab::MatrixError>(())
/// ```
pub fn multiply(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    debug_assert_eq!(a.rows, c.rows, "A has {} rows, C has {}", a.rows, c.rows);
    debug_assert_eq!(b.cols, c.cols, "B has {} cols, C has {}", b.cols, c.cols);
    debug_assert_eq!(a.cols, b.rows, "A has {} cols, B has {} rows", a.cols, b.rows);

    matmul_ikj(&a.data, &b.data, &mut c.data, c.rows, c.cols, a.cols);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_is_one_block_of_rows_times_cols() {
        let m = Matrix::allocate(3, 4).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.as_slice().len(), 12);
    }

    #[test]
    fn rows_are_contiguous() {
        let m = Matrix::from_fn(3, 4, |i, j| (i * 10 + j) as f64).unwrap();
        let base = m.as_slice().as_ptr();
        for i in 0..3 {
            assert_eq!(m.row(i).as_ptr(), base.wrapping_add(i * 4));
            assert_eq!(m.row(i)[3], (i * 10 + 3) as f64);
        }
    }

    #[test]
    fn allocate_overflow_is_an_error() {
        let err = Matrix::allocate(usize::MAX, 2).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::AllocationFailure { rows: usize::MAX, cols: 2, source: None }
        ));
    }

    #[test]
    fn allocate_too_large_is_an_error() {
        let err = Matrix::allocate(usize::MAX / 16, 4).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::AllocationFailure { source: Some(_), .. }
        ));
    }

    #[test]
    fn from_rows_checks_length() {
        let err = Matrix::from_rows(2, 2, vec![1.0; 3]).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch { expected: 4, actual: 3 });
    }

    #[test]
    fn zero_sized_shapes() {
        let m = Matrix::allocate(0, 5).unwrap();
        assert!(m.as_slice().is_empty());
        let m = Matrix::from_fn(4, 0, |_, _| 1.0).unwrap();
        assert!(m.as_slice().is_empty());
        m.release();
    }

    #[test]
    fn index_and_get() {
        let mut m = Matrix::allocate(2, 2).unwrap();
        m[(1, 0)] = 3.5;
        assert_eq!(m.get(1, 0), Some(3.5));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_row_end_panics() {
        let m = Matrix::allocate(2, 2).unwrap();
        // (0, 2) would land on (1, 0) without the check.
        let _ = m[(0, 2)];
    }

    #[test]
    fn multiply_overwrites_sentinels() {
        let a = Matrix::from_fn(3, 5, |i, j| (i + j) as f64).unwrap();
        let b = Matrix::from_fn(5, 4, |i, j| i as f64 - j as f64).unwrap();
        let mut c = Matrix::allocate(3, 4).unwrap();
        c.fill(f64::NAN);

        multiply(&a, &b, &mut c);
        assert!(c.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn multiply_with_empty_inner_dimension() {
        let a = Matrix::allocate(3, 0).unwrap();
        let b = Matrix::allocate(0, 2).unwrap();
        let mut c = Matrix::allocate(3, 2).unwrap();
        c.fill(-99.0);

        multiply(&a, &b, &mut c);
        assert_eq!(c.as_slice(), &[0.0; 6]);
    }

    #[test]
    fn release_consumes_the_matrix() {
        let m = Matrix::allocate(8, 8).unwrap();
        m.release();
    }
}
