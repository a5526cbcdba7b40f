//! Fixed-width tabular formatting.
//!
//! Each entry is rendered right-aligned in a 4-character field with no
//! separator beyond the padding, one line per row, no headers. Entries wider
//! than the field are emitted unpadded.

use alloc::string::{String, ToString};
use core::fmt;

use itertools::Itertools;

use crate::dense::RowMajorMatrix;

/// [`fmt::Display`] adapter over a matrix, produced by
/// [`RowMajorMatrix::display_rows`].
pub struct DisplayRows<'a, T>(&'a RowMajorMatrix<T>);

impl<T: fmt::Display> fmt::Display for DisplayRows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            let fields = row
                .iter()
                .format_with("", |value, field| field(&format_args!("{value:>4}")));
            writeln!(f, "{fields}")?;
        }
        Ok(())
    }
}

impl<T> RowMajorMatrix<T> {
    /// View this matrix as fixed-width rows, ready to print.
    pub fn display_rows(&self) -> DisplayRows<'_, T> {
        DisplayRows(self)
    }
}

/// Render the matrix to an owned string, one `\n`-terminated line per row.
pub fn format_rows<T: fmt::Display>(m: &RowMajorMatrix<T>) -> String {
    m.display_rows().to_string()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_worked_example_formatting() {
        let m = RowMajorMatrix::new(vec![19, 22, 43, 50], 2);
        assert_eq!(format_rows(&m), "  19  22\n  43  50\n");
    }

    #[test]
    fn test_single_digit_padding() {
        let m = RowMajorMatrix::new(vec![1, 2, 3, 4, 5, 6], 3);
        assert_eq!(format_rows(&m), "   1   2   3\n   4   5   6\n");
    }

    #[test]
    fn test_negative_sign_counts_toward_width() {
        let m = RowMajorMatrix::new_row(vec![-12, 5]);
        assert_eq!(format_rows(&m), " -12   5\n");
    }

    #[test]
    fn test_wide_entries_are_unpadded() {
        let m = RowMajorMatrix::new_row(vec![12345, 1]);
        assert_eq!(format_rows(&m), "12345   1\n");
    }

    #[test]
    fn test_empty_matrix_formats_to_nothing() {
        let m = RowMajorMatrix::<i64>::new(vec![], 0);
        assert_eq!(format_rows(&m), "");
    }
}
