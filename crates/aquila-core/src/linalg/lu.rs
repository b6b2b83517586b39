//! Pivoted LU factorization.
//!
//! Factors a square matrix `A` into `P·A = L·U` where:
//! - `P` is a permutation matrix (stored permutation-backed, never densely)
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! The determinant falls out of the factorization as the signed product of
//! `U`'s diagonal.

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::permutation::{Parity, Permutation};
use crate::vector::Vector;
use crate::{Float, Scalar};

/// Result of a pivoted LU factorization: `P·A = L·U`.
#[derive(Debug, Clone)]
pub struct LuFactorization<T: Scalar> {
    /// Unit lower triangular factor.
    pub l: Matrix<T>,
    /// Upper triangular factor.
    pub u: Matrix<T>,
    /// Permutation matrix, permutation-backed.
    pub p: Matrix<T>,
    /// The determinant of the factored matrix.
    pub det: T,
}

impl<T: Scalar> Matrix<T> {
    /// Factor the matrix into `P·A = L·U` with pivoting enabled.
    ///
    /// ```
    /// use aquila_core::matrix::Matrix;
    ///
    /// let a: Matrix<f64> = Matrix::from_rows(vec![vec![2.0, 4.0], vec![3.0, 7.0]]).unwrap();
    /// let lu = a.lu().unwrap();
    /// assert!((lu.det - 2.0).abs() < 1e-12);
    /// ```
    pub fn lu(&self) -> Result<LuFactorization<T>> {
        self.lu_with(true, true)
    }

    /// Factor the matrix into `P·A = L·U`.
    ///
    /// With `optimal_pivoting` the pivot candidate scan runs along row `i`
    /// and brings the row indexed by the maximal entry to position `i`;
    /// without it the first row indexed by a non-zero entry is taken. A
    /// zero diagonal entry after the scan falls back to the first non-zero
    /// row below it in column `i`. The `optimal_pivoting` flag is ignored
    /// when `pivoting` is false.
    ///
    /// Fails only when the matrix is not square. Pivot choice is
    /// deterministic: ties keep the earliest candidate.
    pub fn lu_with(&self, pivoting: bool, optimal_pivoting: bool) -> Result<LuFactorization<T>> {
        let n = self.size().ok_or(CoreError::NotSquare {
            dimensions: self.dimensions(),
        })?;

        let mut l = Matrix::identity(n);
        let mut u = self.densified();
        let mut p = Matrix::from_permutation(Permutation::identity(n));
        let mut det_sign = T::one();

        for i in 0..n {
            if pivoting {
                let mut pivot_row = i;
                if optimal_pivoting {
                    let mut max = u.at(i, i);
                    for j in (i + 1)..n {
                        if u.at(i, j) > max {
                            max = u.at(i, j);
                            pivot_row = j;
                        }
                    }
                } else {
                    for j in i..n {
                        if u.at(i, j) != T::zero() {
                            pivot_row = j;
                            break;
                        }
                    }
                }
                if pivot_row != i {
                    switch_pivot_rows(&mut l, &mut u, &mut p, i, pivot_row)?;
                    det_sign = -det_sign;
                }
                if u.at(i, i) == T::zero() {
                    // The row scan came up empty; look down column i for a
                    // row that can supply the pivot. When none exists the
                    // column is already eliminated.
                    if let Some(r) = ((i + 1)..n).find(|&r| u.at(r, i) != T::zero()) {
                        switch_pivot_rows(&mut l, &mut u, &mut p, i, r)?;
                        det_sign = -det_sign;
                    }
                }
            }

            let pivot = u.at(i, i);
            if pivot == T::zero() {
                // Nothing to eliminate against; the zero lands on U's
                // diagonal and drives the determinant to zero.
                continue;
            }

            for r in (i + 1)..n {
                let factor = u.at(r, i) / pivot;
                l.set_element(r, i, factor)?;
                for c in (i + 1)..n {
                    let updated = u.at(r, c) - factor * u.at(i, c);
                    u.set_element(r, c, updated)?;
                }
                u.set_element(r, i, T::zero())?;
            }
        }

        let det = u.diagonal().into_iter().fold(det_sign, |acc, x| acc * x);
        Ok(LuFactorization { l, u, p, det })
    }

    /// The determinant.
    ///
    /// A permutation-backed matrix answers with its permutation's sign in
    /// O(n); everything else goes through the LU factorization. Fails when
    /// the matrix is not square. The empty matrix has determinant one.
    pub fn determinant(&self) -> Result<T> {
        if let Some(permutation) = self.permutation() {
            return Ok(match permutation.parity() {
                Parity::Even => T::one(),
                Parity::Odd => -T::one(),
            });
        }
        Ok(self.lu()?.det)
    }
}

/// Bring `pivot_row` up to position `i` in U and P. The multipliers already
/// recorded in L's columns `0..i` travel with their rows, keeping
/// `P·A = L·U` after every step.
fn switch_pivot_rows<T: Scalar>(
    l: &mut Matrix<T>,
    u: &mut Matrix<T>,
    p: &mut Matrix<T>,
    i: usize,
    pivot_row: usize,
) -> Result<()> {
    u.switch_rows(i, pivot_row)?;
    p.switch_rows(i, pivot_row)?;
    for c in 0..i {
        let held = l.at(i, c);
        l.set_element(i, c, l.at(pivot_row, c))?;
        l.set_element(pivot_row, c, held)?;
    }
    Ok(())
}

impl<T: Float> LuFactorization<T> {
    /// Solve `A·x = b` through the precomputed factors.
    ///
    /// Applies the permutation, then forward substitution through `L` and
    /// back substitution through `U`.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let n = self.u.rows();
        if b.len() != n {
            return Err(CoreError::LengthMismatch {
                expected: n,
                got: b.len(),
            });
        }

        // Pb
        let b_column = Matrix::from_vec_with_columns(b.as_slice().to_vec(), 1)?;
        let mut x = self.p.matmul(&b_column)?.elements_list();

        // Ly = Pb
        for i in 1..n {
            for j in 0..i {
                let step = self.l.at(i, j) * x[j];
                x[i] -= step;
            }
        }

        // Ux = y
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let step = self.u.at(i, j) * x[j];
                x[i] -= step;
            }
            let diag = self.u.at(i, i);
            if diag == T::zero() {
                return Err(CoreError::Singular);
            }
            x[i] /= diag;
        }

        Ok(Vector::new(x))
    }

    /// The inverse of the factored matrix, solved column by column.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let n = self.u.rows();
        let mut inverse = Matrix::zeros(self.u.dimensions());
        for col in 0..n {
            let mut e = Vector::zeros(n);
            e.set(col, T::one())?;
            let x = self.solve(&e)?;
            inverse.set_column(col, &x)?;
        }
        Ok(inverse)
    }
}
