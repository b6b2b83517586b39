//! Arithmetic operators for [`Matrix`].
//!
//! Implements `Add`, `Sub` (element-wise, same dimensions), `Neg`, scalar
//! broadcast `Mul`/`Div`, and the matrix product. The operators panic on
//! shape mismatch; the `*_checked` methods return a `Result` instead.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::dimensions::Dimensions;
use crate::error::{CoreError, Result};
use crate::Scalar;

use super::{Matrix, MatrixStorage};

// ======================================================================
// Matrix + Matrix  (element-wise, same dimensions — panics on mismatch)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                assert_eq!(
                    self.dimensions, rhs.dimensions,
                    "dimension mismatch in element-wise {}: {} vs {}",
                    stringify!($method), self.dimensions, rhs.dimensions,
                );
                Matrix {
                    storage: MatrixStorage::Dense(
                        self.iter().zip(rhs.iter()).map(|(a, b)| a $op b).collect(),
                    ),
                    dimensions: self.dimensions,
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, +);
impl_matrix_binop!(Sub, sub, -);

// ======================================================================
// Negation and scalar broadcast
// ======================================================================

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        (&self).mul(rhs)
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        (&self).div(rhs)
    }
}

// ======================================================================
// Matrix product
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// The matrix product `self · other`.
    ///
    /// The inner dimensions must agree: `self.columns() == other.rows()`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.columns() != other.rows() {
            return Err(CoreError::DimensionMismatch {
                expected: Dimensions::new(self.columns(), other.columns()),
                got: other.dimensions(),
            });
        }
        let dimensions = Dimensions::new(self.rows(), other.columns());
        let mut data = vec![T::zero(); dimensions.product()];
        // i-k-j order keeps the inner loop walking other's rows contiguously.
        for r in 0..dimensions.rows {
            for k in 0..self.columns() {
                let a = self.at(r, k);
                if a == T::zero() {
                    continue;
                }
                for c in 0..dimensions.columns {
                    data[r * dimensions.columns + c] += a * other.at(k, c);
                }
            }
        }
        Matrix::from_vec(data, dimensions)
    }

    /// Element-wise addition, returning `Err` on dimension mismatch.
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.combine(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on dimension mismatch.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.combine(other, |a, b| a - b)
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// The matrix product. Panics when the inner dimensions disagree; use
    /// [`Matrix::matmul`] to get a `Result`.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.columns(),
            rhs.rows(),
            "inner dimension mismatch in matrix product: {} vs {}",
            self.dimensions,
            rhs.dimensions,
        );
        match self.matmul(rhs) {
            Ok(product) => product,
            Err(_) => unreachable!("inner dimensions were just checked"),
        }
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        (&self).mul(&rhs)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::permutation::Permutation;

    #[test]
    fn test_add() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let sum = &a + &b;
        assert_eq!(sum.elements_list(), vec![6, 8, 10, 12]);
    }

    #[test]
    fn test_sub() {
        let a = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!((a - b).elements_list(), vec![4; 4]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_add_dimension_mismatch_panics() {
        let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1], vec![2]]).unwrap();
        let _ = a + b;
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        let b = Matrix::from_rows(vec![vec![3, 4]]).unwrap();
        assert_eq!(a.add_checked(&b).unwrap().elements_list(), vec![4, 6]);
        assert!(a.add_checked(&Matrix::new()).is_err());
        assert_eq!(b.sub_checked(&a).unwrap().elements_list(), vec![2, 2]);
    }

    #[test]
    fn test_neg_and_scalar_ops() {
        let m = Matrix::from_rows(vec![vec![1.0, -2.0]]).unwrap();
        assert_eq!((-&m).elements_list(), vec![-1.0, 2.0]);
        assert_eq!((&m * 2.0).elements_list(), vec![2.0, -4.0]);
        assert_eq!((&m / 2.0).elements_list(), vec![0.5, -1.0]);
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.dimensions(), Dimensions::square(2));
        assert_eq!(c.elements_list(), vec![58, 64, 139, 154]);
    }

    #[test]
    fn test_matmul_inner_mismatch() {
        let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn test_mul_operator() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let eye = Matrix::<i32>::identity(2);
        assert_eq!(&a * &eye, a);
    }

    #[test]
    fn test_matmul_with_permutation_matrix() {
        // Multiplying by a permutation matrix on the left reorders rows.
        let p = Matrix::<i32>::from_permutation(Permutation::from_vec(vec![1, 0]).unwrap());
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let pa = p.matmul(&a).unwrap();
        assert_eq!(pa.elements_list(), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_matmul_identity_times_empty_shapes() {
        // 1x0 times 0x1 gives a 1x1 zero matrix.
        let row = Matrix::<i32>::from_vec(vec![], Dimensions::new(1, 0)).unwrap();
        let col = Matrix::<i32>::from_vec(vec![], Dimensions::new(0, 1)).unwrap();
        let product = row.matmul(&col).unwrap();
        assert_eq!(product.dimensions(), Dimensions::square(1));
        assert_eq!(product.elements_list(), vec![0]);
    }
}
