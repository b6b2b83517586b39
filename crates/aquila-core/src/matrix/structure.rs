//! Structural queries and transforms: triangles, symmetry, transpose.

use crate::error::Result;
use crate::matrix::MatrixStorage;
use crate::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Triangles
    // ------------------------------------------------------------------

    /// A copy with every entry below diagonal `n` replaced by zero.
    ///
    /// Defined for non-square matrices too; the result need not itself be
    /// triangular in that case. Only the zeroed region is walked. `n == 0`
    /// is always valid; other offsets are domain-checked like
    /// [`Matrix::diagonal_elements`].
    pub fn upper_triangle_with(&self, n: isize) -> Result<Matrix<T>> {
        if n != 0 {
            self.check_diagonal(n)?;
        }
        let mut result = self.densified();
        let columns = self.columns() as isize;
        for r in 0..self.rows() {
            let end = (r as isize + n).clamp(0, columns) as usize;
            for c in 0..end {
                result.set_element(r, c, T::zero())?;
            }
        }
        Ok(result)
    }

    /// A copy with every entry below the main diagonal replaced by zero.
    pub fn upper_triangle(&self) -> Matrix<T> {
        // n = 0 never hits the diagonal domain check.
        self.upper_triangle_with(0).unwrap_or_else(|_| self.densified())
    }

    /// A copy with every entry above diagonal `n` replaced by zero.
    ///
    /// The mirror of [`Matrix::upper_triangle_with`].
    pub fn lower_triangle_with(&self, n: isize) -> Result<Matrix<T>> {
        if n != 0 {
            self.check_diagonal(n)?;
        }
        let mut result = self.densified();
        let columns = self.columns() as isize;
        for r in 0..self.rows() {
            let start = (r as isize + n + 1).clamp(0, columns) as usize;
            for c in start..self.columns() {
                result.set_element(r, c, T::zero())?;
            }
        }
        Ok(result)
    }

    /// A copy with every entry above the main diagonal replaced by zero.
    pub fn lower_triangle(&self) -> Matrix<T> {
        self.lower_triangle_with(0).unwrap_or_else(|_| self.densified())
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// Whether every off-diagonal entry is zero.
    pub fn is_diagonal(&self) -> bool {
        for r in 0..self.rows() {
            for c in 0..self.columns() {
                if r != c && self.at(r, c) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix equals its own transpose.
    ///
    /// Always false for non-square matrices. Each element pair is compared
    /// once, directly.
    pub fn is_symmetrical(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for k in 0..self.rows() {
            for j in 0..k {
                if self.at(k, j) != self.at(j, k) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix equals its own conjugate transpose.
    ///
    /// Always false for non-square matrices.
    pub fn is_hermitian(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.rows() {
            if self.at(r, r) != self.at(r, r).conjugate() {
                return false;
            }
            for c in (r + 1)..self.columns() {
                if self.at(r, c) != self.at(c, r).conjugate() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every entry below diagonal `n` is zero.
    ///
    /// When `must_be_square` is set, non-square matrices fail the predicate
    /// outright.
    pub fn is_upper_triangular_with(&self, n: isize, must_be_square: bool) -> bool {
        if must_be_square && !self.is_square() {
            return false;
        }
        let columns = self.columns() as isize;
        for r in 0..self.rows() {
            let end = (r as isize + n).clamp(0, columns) as usize;
            for c in 0..end {
                if self.at(r, c) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix is square and upper triangular.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_upper_triangular_with(0, true)
    }

    /// Whether every entry above diagonal `n` is zero.
    pub fn is_lower_triangular_with(&self, n: isize, must_be_square: bool) -> bool {
        if must_be_square && !self.is_square() {
            return false;
        }
        let columns = self.columns() as isize;
        for r in 0..self.rows() {
            let start = (r as isize + n + 1).clamp(0, columns) as usize;
            for c in start..self.columns() {
                if self.at(r, c) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix is square and lower triangular.
    pub fn is_lower_triangular(&self) -> bool {
        self.is_lower_triangular_with(0, true)
    }

    /// Whether the matrix is upper Hessenberg: zero below the first
    /// sub-diagonal.
    pub fn is_upper_hessenberg(&self) -> bool {
        self.is_upper_triangular_with(-1, true)
    }

    /// Whether the matrix is lower Hessenberg: zero above the first
    /// super-diagonal.
    pub fn is_lower_hessenberg(&self) -> bool {
        self.is_lower_triangular_with(1, true)
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    /// The transpose, with dimensions swapped.
    ///
    /// The transpose of a permutation-backed matrix stays
    /// permutation-backed: it is the matrix of the inverse permutation.
    pub fn transpose(&self) -> Matrix<T> {
        match &self.storage {
            MatrixStorage::Permutation(p) => Matrix::from_permutation(p.inverse()),
            MatrixStorage::Dense(_) => {
                Matrix::from_fn(self.dimensions.transpose(), |r, c| self.at(c, r))
            }
        }
    }

    /// The element-wise conjugate.
    pub fn conjugate(&self) -> Matrix<T> {
        self.map(Scalar::conjugate)
    }

    /// The conjugate transpose.
    pub fn conjugate_transpose(&self) -> Matrix<T> {
        self.transpose().conjugate()
    }

    // ------------------------------------------------------------------
    // Reductions
    // ------------------------------------------------------------------

    /// The trace: the sum of the main diagonal. `None` for the empty
    /// matrix.
    pub fn trace(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.diagonal().into_iter().sum())
    }

    /// The smallest element. `None` when the matrix has no elements.
    pub fn min_element(&self) -> Option<T> {
        self.iter().reduce(|a, b| if b < a { b } else { a })
    }

    /// The largest element. `None` when the matrix has no elements.
    pub fn max_element(&self) -> Option<T> {
        self.iter().reduce(|a, b| if b > a { b } else { a })
    }
}
