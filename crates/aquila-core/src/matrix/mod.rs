//! Dense 2-D matrix type with row-major contiguous storage.
//!
//! The [`Matrix`] type is the central data structure of Aquila. It stores
//! elements in row-major order and is generic over any type implementing
//! [`Scalar`]. A matrix can alternatively be backed by a [`Permutation`],
//! in which case its n² entries are never materialized and every accessor
//! computes them on demand; see [`Matrix::from_permutation`].

mod access;
mod create;
mod display;
mod ops;
mod structure;

use crate::dimensions::Dimensions;
use crate::error::{CoreError, Result};
use crate::permutation::Permutation;
use crate::Scalar;

/// The backing store of a matrix.
///
/// `Dense` holds every element row-major; `Permutation` holds only the
/// permutation and derives entries on demand (`one` at `(r, p[r])`, `zero`
/// elsewhere).
#[derive(Debug, Clone)]
pub(crate) enum MatrixStorage<T: Scalar> {
    Dense(Vec<T>),
    Permutation(Permutation),
}

/// A 2-D matrix with value semantics.
///
/// Data is stored contiguously in row-major order. The matrix owns its data
/// and cloning performs a deep copy; every row, column, and submatrix
/// accessor returns an independent copy as well.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar> {
    pub(crate) storage: MatrixStorage<T>,
    pub(crate) dimensions: Dimensions,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create the empty `(0, 0)` matrix.
    pub fn new() -> Self {
        Self {
            storage: MatrixStorage::Dense(Vec::new()),
            dimensions: Dimensions::EMPTY,
        }
    }

    /// Create a matrix from a list of rows.
    ///
    /// Returns an error if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let columns = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count * columns);
        for row in rows {
            if row.len() != columns {
                return Err(CoreError::WrongElementCount {
                    count: row.len(),
                    expected: columns,
                });
            }
            data.extend(row);
        }
        let dimensions = if data.is_empty() {
            Dimensions::EMPTY
        } else {
            Dimensions::new(row_count, columns)
        };
        Ok(Self {
            storage: MatrixStorage::Dense(data),
            dimensions,
        })
    }

    /// Create a matrix from a flat row-major element list and dimensions.
    ///
    /// Returns an error if the element count does not equal
    /// `dimensions.product()`.
    pub fn from_vec(data: Vec<T>, dimensions: Dimensions) -> Result<Self> {
        if data.len() != dimensions.product() {
            return Err(CoreError::WrongElementCount {
                count: data.len(),
                expected: dimensions.product(),
            });
        }
        Ok(Self {
            storage: MatrixStorage::Dense(data),
            dimensions,
        })
    }

    /// Create a matrix from a flat row-major element list and a row count.
    ///
    /// The column count is derived; the element count must be a multiple of
    /// `rows`.
    pub fn from_vec_with_rows(data: Vec<T>, rows: usize) -> Result<Self> {
        if rows == 0 {
            return if data.is_empty() {
                Ok(Self::new())
            } else {
                Err(CoreError::WrongElementCount {
                    count: data.len(),
                    expected: 0,
                })
            };
        }
        if data.len() % rows != 0 {
            return Err(CoreError::WrongElementCount {
                count: data.len(),
                expected: (data.len() / rows) * rows,
            });
        }
        let columns = data.len() / rows;
        Self::from_vec(data, Dimensions::new(rows, columns))
    }

    /// Create a matrix from a flat row-major element list and a column count.
    ///
    /// The row count is derived; the element count must be a multiple of
    /// `columns`.
    pub fn from_vec_with_columns(data: Vec<T>, columns: usize) -> Result<Self> {
        if columns == 0 {
            return if data.is_empty() {
                Ok(Self::new())
            } else {
                Err(CoreError::WrongElementCount {
                    count: data.len(),
                    expected: 0,
                })
            };
        }
        if data.len() % columns != 0 {
            return Err(CoreError::WrongElementCount {
                count: data.len(),
                expected: (data.len() / columns) * columns,
            });
        }
        let rows = data.len() / columns;
        Self::from_vec(data, Dimensions::new(rows, columns))
    }

    /// Create a square matrix backed by a permutation.
    ///
    /// The result behaves as the n×n matrix with `one` at `(r, p[r])` for
    /// every position `r` and `zero` everywhere else, but stores only the
    /// permutation itself. Direct element writes fail with
    /// [`CoreError::ImmutableElements`]; row switches map to permutation
    /// element switches.
    pub fn from_permutation(permutation: Permutation) -> Self {
        let n = permutation.len();
        Self {
            storage: MatrixStorage::Permutation(permutation),
            dimensions: Dimensions::square(n),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The dimensions of the matrix.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    /// The number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    /// The shared size of a square matrix, `None` when not square.
    #[inline]
    pub fn size(&self) -> Option<usize> {
        self.dimensions.size()
    }

    /// Whether the matrix has the empty `(0, 0)` shape.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Whether rows equal columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.dimensions.is_square()
    }

    /// Whether every element equals zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|x| x == T::zero())
    }

    /// The backing permutation, when this matrix is permutation-backed.
    pub fn permutation(&self) -> Option<&Permutation> {
        match &self.storage {
            MatrixStorage::Permutation(p) => Some(p),
            MatrixStorage::Dense(_) => None,
        }
    }

    /// The element at `(r, c)` without bounds checks. Callers validate.
    #[inline]
    pub(crate) fn at(&self, r: usize, c: usize) -> T {
        match &self.storage {
            MatrixStorage::Dense(data) => data[r * self.dimensions.columns + c],
            MatrixStorage::Permutation(p) => {
                if p.as_slice()[r] == c {
                    T::one()
                } else {
                    T::zero()
                }
            }
        }
    }

    pub(crate) fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.rows() {
            return Err(CoreError::IndexOutOfBounds {
                index,
                bound: self.rows(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_column(&self, index: usize) -> Result<()> {
        if index >= self.columns() {
            return Err(CoreError::IndexOutOfBounds {
                index,
                bound: self.columns(),
            });
        }
        Ok(())
    }

    /// The dense data buffer, or an invalid-mutation error for
    /// permutation-backed matrices.
    pub(crate) fn dense_mut(&mut self, reason: &'static str) -> Result<&mut Vec<T>> {
        match &mut self.storage {
            MatrixStorage::Dense(data) => Ok(data),
            MatrixStorage::Permutation(_) => Err(CoreError::ImmutableElements { reason }),
        }
    }

    /// The element at row `r`, column `c`.
    pub fn element(&self, r: usize, c: usize) -> Result<T> {
        self.check_row(r)?;
        self.check_column(c)?;
        Ok(self.at(r, c))
    }

    /// Set the element at row `r`, column `c`.
    ///
    /// Fails on permutation-backed matrices.
    pub fn set_element(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        self.check_row(r)?;
        self.check_column(c)?;
        let columns = self.columns();
        let data = self.dense_mut("cannot set an element of a permutation-backed matrix")?;
        data[r * columns + c] = value;
        Ok(())
    }

    /// A flat row-major copy of all elements.
    ///
    /// A permutation-backed matrix materializes its entries here.
    pub fn elements_list(&self) -> Vec<T> {
        match &self.storage {
            MatrixStorage::Dense(data) => data.clone(),
            MatrixStorage::Permutation(_) => self.iter().collect(),
        }
    }

    /// The elements as a list of rows.
    ///
    /// The empty matrix yields `[[]]`, matching its display form.
    pub fn elements(&self) -> Vec<Vec<T>> {
        if self.rows() == 0 {
            return vec![vec![]];
        }
        (0..self.rows())
            .map(|r| (0..self.columns()).map(|c| self.at(r, c)).collect())
            .collect()
    }

    /// An independent, densely stored copy of this matrix.
    pub fn densified(&self) -> Matrix<T> {
        Matrix {
            storage: MatrixStorage::Dense(self.elements_list()),
            dimensions: self.dimensions,
        }
    }

    // ------------------------------------------------------------------
    // Iteration / map
    // ------------------------------------------------------------------

    /// Iterate over all elements in row-major order.
    ///
    /// Works for both storage variants without materializing anything.
    pub fn iter(&self) -> MatrixIter<'_, T> {
        MatrixIter {
            matrix: self,
            index: 0,
        }
    }

    /// Apply a function to every element, returning a new dense matrix.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            storage: MatrixStorage::Dense(self.iter().map(f).collect()),
            dimensions: self.dimensions,
        }
    }

    /// Apply a function element-wise to two matrices of the same dimensions.
    pub fn combine<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.dimensions != other.dimensions {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                got: other.dimensions,
            });
        }
        Ok(Matrix {
            storage: MatrixStorage::Dense(
                self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
            ),
            dimensions: self.dimensions,
        })
    }

    /// Fold all elements in row-major order.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(init, f)
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    /// Matrices are equal when their dimensions and all elements agree.
    ///
    /// A permutation-backed matrix equals its densified copy.
    fn eq(&self, other: &Self) -> bool {
        if self.dimensions != other.dimensions {
            return false;
        }
        match (&self.storage, &other.storage) {
            (MatrixStorage::Dense(a), MatrixStorage::Dense(b)) => a == b,
            (MatrixStorage::Permutation(a), MatrixStorage::Permutation(b)) => a == b,
            _ => self.iter().zip(other.iter()).all(|(a, b)| a == b),
        }
    }
}

/// Iterator over a matrix's elements in row-major order.
pub struct MatrixIter<'a, T: Scalar> {
    matrix: &'a Matrix<T>,
    index: usize,
}

impl<T: Scalar> Iterator for MatrixIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.matrix.dimensions.product() {
            return None;
        }
        let columns = self.matrix.columns();
        let r = self.index / columns;
        let c = self.index % columns;
        self.index += 1;
        Some(self.matrix.at(r, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.dimensions.product() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Scalar> ExactSizeIterator for MatrixIter<'_, T> {}
