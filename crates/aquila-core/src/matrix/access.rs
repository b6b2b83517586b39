//! Row, column, submatrix, diagonal, and resize access for [`Matrix`].
//!
//! Every read accessor returns an independent copy; every fallible mutator
//! validates all indices up front so a failure never leaves the matrix
//! partially written.

use core::ops::Range;

use crate::dimensions::Dimensions;
use crate::error::{CoreError, Result};
use crate::vector::Vector;
use crate::Scalar;

use super::{Matrix, MatrixStorage};

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Rows and columns
    // ------------------------------------------------------------------

    /// An independent copy of the given row.
    pub fn row(&self, index: usize) -> Result<Vector<T>> {
        self.check_row(index)?;
        Ok(Vector::new(
            (0..self.columns()).map(|c| self.at(index, c)).collect(),
        ))
    }

    /// Replace the given row.
    ///
    /// The replacement length must equal the column count.
    pub fn set_row(&mut self, index: usize, row: &Vector<T>) -> Result<()> {
        self.check_row(index)?;
        let columns = self.columns();
        if row.len() != columns {
            return Err(CoreError::LengthMismatch {
                expected: columns,
                got: row.len(),
            });
        }
        let data = self.dense_mut("cannot set a row of a permutation-backed matrix")?;
        data[index * columns..(index + 1) * columns].copy_from_slice(row.as_slice());
        Ok(())
    }

    /// An independent copy of the given column.
    pub fn column(&self, index: usize) -> Result<Vector<T>> {
        self.check_column(index)?;
        Ok(Vector::new(
            (0..self.rows()).map(|r| self.at(r, index)).collect(),
        ))
    }

    /// Replace the given column.
    ///
    /// The replacement length must equal the row count.
    pub fn set_column(&mut self, index: usize, column: &Vector<T>) -> Result<()> {
        self.check_column(index)?;
        let rows = self.rows();
        let columns = self.columns();
        if column.len() != rows {
            return Err(CoreError::LengthMismatch {
                expected: rows,
                got: column.len(),
            });
        }
        let data = self.dense_mut("cannot set a column of a permutation-backed matrix")?;
        for (r, &value) in column.as_slice().iter().enumerate() {
            data[r * columns + index] = value;
        }
        Ok(())
    }

    /// Switch two rows in place.
    ///
    /// On a permutation-backed matrix this is an O(1) switch of the two
    /// permutation elements.
    pub fn switch_rows(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_row(i)?;
        self.check_row(j)?;
        let columns = self.columns();
        match &mut self.storage {
            MatrixStorage::Dense(data) => {
                for c in 0..columns {
                    data.swap(i * columns + c, j * columns + c);
                }
            }
            MatrixStorage::Permutation(p) => p.switch_elements(i, j)?,
        }
        Ok(())
    }

    /// Switch two columns in place.
    ///
    /// On a permutation-backed matrix the positions holding the two column
    /// indices are located and their elements switched.
    pub fn switch_columns(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_column(i)?;
        self.check_column(j)?;
        let columns = self.columns();
        match &mut self.storage {
            MatrixStorage::Dense(data) => {
                for r in 0..self.dimensions.rows {
                    data.swap(r * columns + i, r * columns + j);
                }
            }
            MatrixStorage::Permutation(p) => {
                let a = p.index_of(i)?;
                let b = p.index_of(j)?;
                p.switch_elements(a, b)?;
            }
        }
        Ok(())
    }

    /// Remove the given row, shrinking the matrix.
    ///
    /// Removing the only row collapses the matrix to the empty `(0, 0)`
    /// shape. Fails on permutation-backed matrices.
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        let Dimensions { rows, columns } = self.dimensions;
        let data = self.dense_mut("cannot remove a row of a permutation-backed matrix")?;
        if rows == 1 {
            *self = Matrix::new();
            return Ok(());
        }
        data.drain(index * columns..(index + 1) * columns);
        self.dimensions = Dimensions::new(rows - 1, columns);
        Ok(())
    }

    /// Remove the given column, shrinking the matrix.
    ///
    /// Removing the only column collapses the matrix to the empty `(0, 0)`
    /// shape. Fails on permutation-backed matrices.
    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        self.check_column(index)?;
        let Dimensions { rows, columns } = self.dimensions;
        let data = self.dense_mut("cannot remove a column of a permutation-backed matrix")?;
        if columns == 1 {
            *self = Matrix::new();
            return Ok(());
        }
        for r in (0..rows).rev() {
            data.remove(r * columns + index);
        }
        self.dimensions = Dimensions::new(rows, columns - 1);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Submatrices and subvectors
    // ------------------------------------------------------------------

    /// The submatrix formed by the given row and column index collections,
    /// in the given order.
    pub fn submatrix(&self, rows: &[usize], columns: &[usize]) -> Result<Matrix<T>> {
        for &r in rows {
            self.check_row(r)?;
        }
        for &c in columns {
            self.check_column(c)?;
        }
        let mut data = Vec::with_capacity(rows.len() * columns.len());
        for &r in rows {
            for &c in columns {
                data.push(self.at(r, c));
            }
        }
        Matrix::from_vec(data, Dimensions::new(rows.len(), columns.len()))
    }

    /// Replace the submatrix at the given row and column index collections.
    ///
    /// The replacement dimensions must equal `(rows.len(), columns.len())`.
    /// All indices are validated before any element is written.
    pub fn set_submatrix(
        &mut self,
        rows: &[usize],
        columns: &[usize],
        replacement: &Matrix<T>,
    ) -> Result<()> {
        for &r in rows {
            self.check_row(r)?;
        }
        for &c in columns {
            self.check_column(c)?;
        }
        let expected = Dimensions::new(rows.len(), columns.len());
        if replacement.dimensions() != expected {
            return Err(CoreError::DimensionMismatch {
                expected,
                got: replacement.dimensions(),
            });
        }
        let width = self.columns();
        let data = self.dense_mut("cannot set a submatrix of a permutation-backed matrix")?;
        for (sr, &r) in rows.iter().enumerate() {
            for (sc, &c) in columns.iter().enumerate() {
                data[r * width + c] = replacement.at(sr, sc);
            }
        }
        Ok(())
    }

    /// The part of the given row covered by `range`, as a vector.
    pub fn sub_row(&self, row: usize, range: Range<usize>) -> Result<Vector<T>> {
        self.check_row(row)?;
        self.check_column_range(&range)?;
        Ok(Vector::new(range.map(|c| self.at(row, c)).collect()))
    }

    /// Replace the part of the given row covered by `range`.
    pub fn set_sub_row(
        &mut self,
        row: usize,
        range: Range<usize>,
        replacement: &Vector<T>,
    ) -> Result<()> {
        self.check_row(row)?;
        self.check_column_range(&range)?;
        if replacement.len() != range.len() {
            return Err(CoreError::LengthMismatch {
                expected: range.len(),
                got: replacement.len(),
            });
        }
        let width = self.columns();
        let data = self.dense_mut("cannot set a sub-row of a permutation-backed matrix")?;
        data[row * width + range.start..row * width + range.end]
            .copy_from_slice(replacement.as_slice());
        Ok(())
    }

    /// The part of the given column covered by `range`, as a vector.
    pub fn sub_column(&self, range: Range<usize>, column: usize) -> Result<Vector<T>> {
        self.check_column(column)?;
        self.check_row_range(&range)?;
        Ok(Vector::new(range.map(|r| self.at(r, column)).collect()))
    }

    /// Replace the part of the given column covered by `range`.
    pub fn set_sub_column(
        &mut self,
        range: Range<usize>,
        column: usize,
        replacement: &Vector<T>,
    ) -> Result<()> {
        self.check_column(column)?;
        self.check_row_range(&range)?;
        if replacement.len() != range.len() {
            return Err(CoreError::LengthMismatch {
                expected: range.len(),
                got: replacement.len(),
            });
        }
        let width = self.columns();
        let data = self.dense_mut("cannot set a sub-column of a permutation-backed matrix")?;
        for (i, r) in range.enumerate() {
            data[r * width + column] = replacement.as_slice()[i];
        }
        Ok(())
    }

    fn check_row_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.rows() {
            return Err(CoreError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                bound: self.rows(),
            });
        }
        Ok(())
    }

    fn check_column_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.columns() {
            return Err(CoreError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                bound: self.columns(),
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Diagonals
    // ------------------------------------------------------------------

    /// The main diagonal, of length `dimensions().minimum()`.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.dimensions.minimum())
            .map(|i| self.at(i, i))
            .collect()
    }

    /// Replace the main diagonal.
    ///
    /// The replacement length must equal `dimensions().minimum()`.
    pub fn set_diagonal(&mut self, diagonal: &[T]) -> Result<()> {
        let minimum = self.dimensions.minimum();
        if diagonal.len() != minimum {
            return Err(CoreError::LengthMismatch {
                expected: minimum,
                got: diagonal.len(),
            });
        }
        let width = self.columns();
        let data = self.dense_mut("cannot set the diagonal of a permutation-backed matrix")?;
        for (i, &value) in diagonal.iter().enumerate() {
            data[i * width + i] = value;
        }
        Ok(())
    }

    /// Set every main-diagonal entry to `value`.
    pub fn fill_diagonal(&mut self, value: T) -> Result<()> {
        let minimum = self.dimensions.minimum();
        let width = self.columns();
        let data = self.dense_mut("cannot fill the diagonal of a permutation-backed matrix")?;
        for i in 0..minimum {
            data[i * width + i] = value;
        }
        Ok(())
    }

    /// The elements of diagonal `n`, where 0 is the main diagonal, negative
    /// offsets are sub-diagonals, and positive offsets are super-diagonals.
    ///
    /// The diagonal is walked from `(max(-n, 0), max(n, 0))`, stepping both
    /// indices until either bound is exceeded. Valid domain: `-n < rows`
    /// and `n < columns`.
    pub fn diagonal_elements(&self, n: isize) -> Result<Vec<T>> {
        self.check_diagonal(n)?;
        let mut r = (-n).max(0) as usize;
        let mut c = n.max(0) as usize;
        let mut elements = Vec::new();
        while r < self.rows() && c < self.columns() {
            elements.push(self.at(r, c));
            r += 1;
            c += 1;
        }
        Ok(elements)
    }

    pub(crate) fn check_diagonal(&self, n: isize) -> Result<()> {
        if -n < self.rows() as isize && n < self.columns() as isize {
            Ok(())
        } else {
            Err(CoreError::DiagonalOutOfBounds {
                index: n,
                dimensions: self.dimensions,
            })
        }
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    /// Resize the matrix in place.
    ///
    /// Growing pads with zeros at the bottom and right; shrinking truncates
    /// from the bottom and right. Entries at surviving `(r, c)` positions
    /// are preserved. Fails on permutation-backed matrices.
    pub fn resize(&mut self, new_dimensions: Dimensions) -> Result<()> {
        if self.permutation().is_some() {
            return Err(CoreError::ImmutableElements {
                reason: "cannot resize a permutation-backed matrix",
            });
        }
        let mut data = vec![T::zero(); new_dimensions.product()];
        let shared_rows = self.rows().min(new_dimensions.rows);
        let shared_columns = self.columns().min(new_dimensions.columns);
        for r in 0..shared_rows {
            for c in 0..shared_columns {
                data[r * new_dimensions.columns + c] = self.at(r, c);
            }
        }
        self.storage = MatrixStorage::Dense(data);
        self.dimensions = new_dimensions;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::Permutation;

    fn sample() -> Matrix<i32> {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_row_column_copies() {
        let m = sample();
        assert_eq!(m.row(1).unwrap().as_slice(), &[4, 5, 6]);
        assert_eq!(m.column(2).unwrap().as_slice(), &[3, 6, 9]);
        assert!(m.row(3).is_err());
        assert!(m.column(3).is_err());

        // Mutating the copy leaves the matrix untouched.
        let mut row = m.row(0).unwrap();
        row.set(0, 99).unwrap();
        assert_eq!(m.element(0, 0).unwrap(), 1);
    }

    #[test]
    fn test_set_row_column() {
        let mut m = sample();
        m.set_row(0, &Vector::new(vec![9, 8, 7])).unwrap();
        assert_eq!(m.row(0).unwrap().as_slice(), &[9, 8, 7]);

        m.set_column(1, &Vector::new(vec![0, 0, 0])).unwrap();
        assert_eq!(m.column(1).unwrap().as_slice(), &[0, 0, 0]);

        assert!(m.set_row(0, &Vector::new(vec![1, 2])).is_err());
        assert!(m.set_column(5, &Vector::new(vec![1, 2, 3])).is_err());
    }

    #[test]
    fn test_switch_rows_and_columns() {
        let mut m = sample();
        m.switch_rows(0, 2).unwrap();
        assert_eq!(m.elements_list(), vec![7, 8, 9, 4, 5, 6, 1, 2, 3]);

        m.switch_columns(0, 1).unwrap();
        assert_eq!(m.elements_list(), vec![8, 7, 9, 5, 4, 6, 2, 1, 3]);

        assert!(m.switch_rows(0, 3).is_err());
    }

    #[test]
    fn test_switch_rows_on_permutation_matrix() {
        let mut m = Matrix::<i32>::from_permutation(Permutation::identity(3));
        m.switch_rows(0, 2).unwrap();
        assert_eq!(m.permutation().unwrap().as_slice(), &[2, 1, 0]);
        assert_eq!(m.element(0, 2).unwrap(), 1);
    }

    #[test]
    fn test_switch_columns_on_permutation_matrix() {
        let mut m = Matrix::<i32>::from_permutation(Permutation::identity(3));
        m.switch_columns(0, 2).unwrap();
        // Column switch relocates the ones, acting on values not positions.
        assert_eq!(m.permutation().unwrap().as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn test_remove_row() {
        let mut m = sample();
        m.remove_row(1).unwrap();
        assert_eq!(m.dimensions(), Dimensions::new(2, 3));
        assert_eq!(m.elements_list(), vec![1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn test_remove_column() {
        let mut m = sample();
        m.remove_column(0).unwrap();
        assert_eq!(m.dimensions(), Dimensions::new(3, 2));
        assert_eq!(m.elements_list(), vec![2, 3, 5, 6, 8, 9]);
    }

    #[test]
    fn test_remove_last_collapses_to_empty() {
        let mut m = Matrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
        m.remove_row(0).unwrap();
        assert!(m.is_empty());

        let mut m = Matrix::from_rows(vec![vec![1], vec![2]]).unwrap();
        m.remove_column(0).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_submatrix() {
        let m = sample();
        let sub = m.submatrix(&[0, 2], &[1, 2]).unwrap();
        assert_eq!(sub.dimensions(), Dimensions::new(2, 2));
        assert_eq!(sub.elements_list(), vec![2, 3, 8, 9]);
        assert!(m.submatrix(&[0, 3], &[0]).is_err());
    }

    #[test]
    fn test_submatrix_round_trip() {
        let mut m = sample();
        let replacement = Matrix::from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();
        m.set_submatrix(&[0, 2], &[1, 2], &replacement).unwrap();
        assert_eq!(m.submatrix(&[0, 2], &[1, 2]).unwrap(), replacement);
    }

    #[test]
    fn test_set_submatrix_is_atomic() {
        let mut m = sample();
        let before = m.clone();
        let replacement = Matrix::from_rows(vec![vec![10, 20]]).unwrap();
        // Dimension mismatch fails without writing anything.
        assert!(m.set_submatrix(&[0, 2], &[1, 2], &replacement).is_err());
        assert_eq!(m, before);
        // Bad index fails without writing anything.
        let square = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert!(m.set_submatrix(&[0, 9], &[1, 2], &square).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn test_sub_row_and_sub_column() {
        let m = sample();
        assert_eq!(m.sub_row(1, 1..3).unwrap().as_slice(), &[5, 6]);
        assert_eq!(m.sub_column(0..2, 2).unwrap().as_slice(), &[3, 6]);
        assert!(m.sub_row(1, 1..4).is_err());
        assert!(m.sub_column(0..4, 0).is_err());
    }

    #[test]
    fn test_set_sub_row_and_sub_column() {
        let mut m = sample();
        m.set_sub_row(0, 1..3, &Vector::new(vec![20, 30])).unwrap();
        assert_eq!(m.row(0).unwrap().as_slice(), &[1, 20, 30]);

        m.set_sub_column(1..3, 0, &Vector::new(vec![40, 70])).unwrap();
        assert_eq!(m.column(0).unwrap().as_slice(), &[1, 40, 70]);

        assert!(m.set_sub_row(0, 1..3, &Vector::new(vec![1])).is_err());
    }

    #[test]
    fn test_diagonal() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.diagonal(), vec![1, 5]);

        let mut sq = sample();
        sq.set_diagonal(&[0, 0, 0]).unwrap();
        assert_eq!(sq.diagonal(), vec![0, 0, 0]);
        assert!(sq.set_diagonal(&[1, 2]).is_err());

        sq.fill_diagonal(9).unwrap();
        assert_eq!(sq.diagonal(), vec![9, 9, 9]);
    }

    #[test]
    fn test_diagonal_elements_offsets() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.diagonal_elements(0).unwrap(), vec![1, 5]);
        assert_eq!(m.diagonal_elements(1).unwrap(), vec![2, 6]);
        assert_eq!(m.diagonal_elements(2).unwrap(), vec![3]);
        assert_eq!(m.diagonal_elements(-1).unwrap(), vec![4]);
        assert!(m.diagonal_elements(3).is_err());
        assert!(m.diagonal_elements(-2).is_err());
    }

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut m = sample();
        m.resize(Dimensions::square(4)).unwrap();
        assert_eq!(
            m.elements_list(),
            vec![1, 2, 3, 0, 4, 5, 6, 0, 7, 8, 9, 0, 0, 0, 0, 0]
        );

        m.resize(Dimensions::square(2)).unwrap();
        assert_eq!(m.elements_list(), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_resize_rectangular() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        m.resize(Dimensions::new(1, 3)).unwrap();
        assert_eq!(m.elements_list(), vec![1, 2, 0]);
    }

    #[test]
    fn test_permutation_backed_mutations_fail() {
        let mut m = Matrix::<i32>::from_permutation(Permutation::identity(3));
        let err = |r: Result<()>| {
            assert!(matches!(r, Err(CoreError::ImmutableElements { .. })));
        };
        err(m.set_row(0, &Vector::new(vec![1, 0, 0])));
        err(m.set_column(0, &Vector::new(vec![1, 0, 0])));
        err(m.set_diagonal(&[1, 1, 1]));
        err(m.fill_diagonal(1));
        err(m.resize(Dimensions::square(4)));
        err(m.remove_row(0));
        err(m.remove_column(0));
    }
}
