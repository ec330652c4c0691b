/// Cache-friendly matrix multiplication using i-k-j loop order: C = A * B
///
/// Swapping the j and k loops of the textbook order makes the innermost
/// loop walk one row of B and one row of C with stride 1. Both rows are
/// handed to the loop as slices, so there are no bounds checks left in it
/// and the compiler is free to vectorize the accumulation.
///
/// C is zeroed first, so any previous contents are overwritten. With
/// `k == 0` the result is all zeros and A and B are never read.
///
/// Exclusive `&mut` access to `c` means it can't overlap `a` or `b`, which
/// is the aliasing guarantee the vectorizer needs.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten with A * B
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// # Example
///
/// ```
/// use cachelab::matmul_ikj;
///
/// let a = vec![1.0, 2.0, 3.0,
///              4.0, 5.0, 6.0];
/// let b = vec![7.0, 8.0,
///              9.0, 10.0,
///              11.0, 12.0];
/// let mut c = vec![f64::NAN; 4];
///
/// matmul_ikj(&a, &b, &mut c, 2, 2, 3);
/// assert_eq!(c, vec![58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn matmul_ikj(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    debug_assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    debug_assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    c.fill(0.0);
    if n == 0 || k == 0 {
        return;
    }

    for (a_row, c_row) in a.chunks_exact(k).zip(c.chunks_exact_mut(n)).take(m) {
        for (&a_ip, b_row) in a_row.iter().zip(b.chunks_exact(n)) {
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ip * b_pj;
            }
        }
    }
}
