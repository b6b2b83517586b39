//! Linear algebra routines built on the matrix family.
//!
//! The LU factorization lives in [`lu`]; this module adds the one-shot
//! convenience functions that factor and consume in a single call.

pub mod lu;

pub use lu::LuFactorization;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::{Float, Scalar};

/// The determinant of a square matrix.
pub fn det<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    a.determinant()
}

/// Solve `A·x = b` for a square `A`.
pub fn solve<T: Float>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.lu()?.solve(b)
}

/// The inverse of a square matrix.
pub fn inv<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    a.lu()?.inverse()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_det_convenience() {
        let a = Matrix::from_rows(vec![vec![2.0, 4.0], vec![3.0, 7.0]]).unwrap();
        assert!((det(&a).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_convenience() {
        let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 4.0]]).unwrap();
        let x = solve(&a, &Vector::new(vec![5.0, 6.0])).unwrap();
        assert!((x.get(0).unwrap() - 2.0).abs() < 1e-12);
        assert!((x.get(1).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inv_convenience() {
        let eye = Matrix::<f64>::identity(3);
        assert_eq!(inv(&eye).unwrap(), eye);
    }
}
