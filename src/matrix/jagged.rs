//! Array-of-rows matrix layout.
//!
//! Every row is its own heap allocation, so there's no guarantee row `i + 1`
//! sits anywhere near row `i`. This is the layout to measure against, never
//! the one to feed the fast kernel.

use crate::error::{MatrixError, MatrixResult};

/// `rows × cols` matrix stored as `rows` independently allocated rows.
#[derive(Debug, Clone, PartialEq)]
pub struct JaggedMatrix {
    cols: usize,
    rows: Vec<Vec<f64>>,
}

impl JaggedMatrix {
    /// Allocate `rows` separate zero-filled rows of `cols` values each.
    pub fn allocate(rows: usize, cols: usize) -> MatrixResult<Self> {
        let fail = |source| MatrixError::AllocationFailure { rows, cols, source };

        let mut table: Vec<Vec<f64>> = Vec::new();
        table.try_reserve_exact(rows).map_err(|e| fail(Some(e)))?;
        for _ in 0..rows {
            let mut row = Vec::new();
            row.try_reserve_exact(cols).map_err(|e| fail(Some(e)))?;
            row.resize(cols, 0.0);
            table.push(row);
        }
        Ok(Self { cols, rows: table })
    }

    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> MatrixResult<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut m = Self::allocate(rows, cols)?;
        for (i, row) in m.rows.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = f(i, j);
            }
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Flatten into one row-major vector.
    pub fn to_flat(&self) -> Vec<f64> {
        self.rows.concat()
    }
}

/// C = A * B over jagged rows, i-j-k order.
///
/// Same arithmetic as [`matmul_ijk`](crate::matrix::naive_ijk::matmul_ijk),
/// with an extra pointer hop per row on top of the column-wise walk of B.
pub fn multiply_jagged(a: &JaggedMatrix, b: &JaggedMatrix, c: &mut JaggedMatrix) {
    debug_assert_eq!(a.rows(), c.rows());
    debug_assert_eq!(b.cols, c.cols);
    debug_assert_eq!(a.cols, b.rows());

    for (a_row, c_row) in a.rows.iter().zip(c.rows.iter_mut()) {
        for (j, c_ij) in c_row.iter_mut().enumerate() {
            *c_ij = 0.0;
            for (p, &a_ip) in a_row.iter().enumerate() {
                *c_ij += a_ip * b.rows[p][j];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_row_has_cols_entries() {
        let m = JaggedMatrix::allocate(3, 5).unwrap();
        assert_eq!(m.rows(), 3);
        assert!((0..3).all(|i| m.row(i).len() == 5));
    }

    #[test]
    fn multiply_small() {
        let a = JaggedMatrix::from_fn(2, 3, |i, j| (i * 3 + j + 1) as f64).unwrap();
        let b = JaggedMatrix::from_fn(3, 2, |i, j| (i * 2 + j + 7) as f64).unwrap();
        let mut c = JaggedMatrix::from_fn(2, 2, |_, _| f64::NAN).unwrap();

        multiply_jagged(&a, &b, &mut c);
        assert_eq!(c.to_flat(), vec![58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn get_out_of_range() {
        let m = JaggedMatrix::allocate(1, 1).unwrap();
        assert_eq!(m.get(0, 0), Some(0.0));
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 0), None);
    }
}
