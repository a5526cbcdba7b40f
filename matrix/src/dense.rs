use alloc::vec;
use alloc::vec::Vec;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

use crate::Matrix;

/// A dense matrix stored in row-major form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMajorMatrix<T> {
    /// All values, stored in row-major order.
    pub values: Vec<T>,
    pub width: usize,
}

impl<T> RowMajorMatrix<T> {
    #[must_use]
    pub fn new(values: Vec<T>, width: usize) -> Self {
        debug_assert!(width != 0 || values.is_empty());
        debug_assert!(width == 0 || values.len() % width == 0);
        Self { values, width }
    }

    #[must_use]
    pub fn new_row(values: Vec<T>) -> Self {
        let width = values.len();
        Self { values, width }
    }

    #[must_use]
    pub fn new_col(values: Vec<T>) -> Self {
        Self { values, width: 1 }
    }

    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::new(vec![T::default(); rows * cols], cols)
    }

    pub fn get(&self, r: usize, c: usize) -> T
    where
        T: Clone,
    {
        debug_assert!(r < self.height() && c < self.width);
        self.values[r * self.width + c].clone()
    }

    pub fn row_slice(&self, r: usize) -> &[T] {
        debug_assert!(r < self.height());
        &self.values[r * self.width..(r + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // max(1) keeps a degenerate zero-width matrix from panicking.
        self.values.chunks_exact(self.width.max(1))
    }

    pub fn rand<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Self
    where
        StandardUniform: Distribution<T>,
    {
        let values = rng.sample_iter(StandardUniform).take(rows * cols).collect();
        Self {
            values,
            width: cols,
        }
    }
}

impl<T> Matrix<T> for RowMajorMatrix<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.values.len().checked_div(self.width).unwrap_or(0)
    }
}
