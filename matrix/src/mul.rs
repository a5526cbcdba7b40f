use alloc::vec;

use core::ops::{AddAssign, Mul};

use tracing::instrument;

use crate::Matrix;
use crate::dense::RowMajorMatrix;

/// Check the multiplication precondition: columns of `a` match rows of `b`.
pub fn compatible<T>(a: &impl Matrix<T>, b: &impl Matrix<T>) -> bool {
    a.width() == b.height()
}

/// Compute `C = A * B`, where both are dense row-major matrices.
///
/// Accumulation runs i (rows of `A`), j (columns of `B`), k (inner), each
/// entry summed from zero.
///
/// # Panics
/// Panics if dimensions of input matrices don't match; callers branch on
/// [`compatible`] first.
#[instrument(level = "debug", skip_all, fields(a = %a.dimensions(), b = %b.dimensions()))]
pub fn mul_row_major<T>(a: &RowMajorMatrix<T>, b: &RowMajorMatrix<T>) -> RowMajorMatrix<T>
where
    T: Clone + Default + AddAssign + Mul<Output = T>,
{
    assert!(compatible(a, b), "A, B dimensions don't match");
    let m = a.height();
    let n = a.width();
    let q = b.width();

    let mut values = vec![T::default(); m * q];
    for i in 0..m {
        for j in 0..q {
            let mut acc = T::default();
            for k in 0..n {
                acc += a.get(i, k) * b.get(k, j);
            }
            values[i * q + j] = acc;
        }
    }
    RowMajorMatrix::new(values, q)
}
