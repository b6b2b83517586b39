//! Convenience constructors for [`Matrix`].

use crate::dimensions::Dimensions;
use crate::random::{Random, Rng};
use crate::Scalar;

use super::{Matrix, MatrixStorage};

impl<T: Scalar> Matrix<T> {
    /// The n×n identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut data = vec![T::zero(); size * size];
        for i in 0..size {
            data[i * size + i] = T::one();
        }
        Self {
            storage: MatrixStorage::Dense(data),
            dimensions: Dimensions::square(size),
        }
    }

    /// A matrix holding `value` at every position.
    pub fn filled(value: T, dimensions: Dimensions) -> Self {
        Self {
            storage: MatrixStorage::Dense(vec![value; dimensions.product()]),
            dimensions,
        }
    }

    /// A matrix of zeros.
    pub fn zeros(dimensions: Dimensions) -> Self {
        Self::filled(T::zero(), dimensions)
    }

    /// A matrix of ones.
    pub fn ones(dimensions: Dimensions) -> Self {
        Self::filled(T::one(), dimensions)
    }

    /// Create a matrix by calling `generator` for each `(row, column)` pair.
    pub fn from_fn<F>(dimensions: Dimensions, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(dimensions.product());
        for r in 0..dimensions.rows {
            for c in 0..dimensions.columns {
                data.push(generator(r, c));
            }
        }
        Self {
            storage: MatrixStorage::Dense(data),
            dimensions,
        }
    }
}

impl<T: Scalar + Random> Matrix<T> {
    /// A matrix of pseudo-random elements.
    pub fn random(dimensions: Dimensions, rng: &mut Rng) -> Self {
        let data = (0..dimensions.product()).map(|_| T::random(rng)).collect();
        Self {
            storage: MatrixStorage::Dense(data),
            dimensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let eye = Matrix::<i32>::identity(3);
        assert_eq!(eye.elements_list(), vec![1, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert!(Matrix::<i32>::identity(0).is_empty());
    }

    #[test]
    fn test_filled_and_zeros() {
        let m = Matrix::filled(7, Dimensions::new(2, 3));
        assert_eq!(m.elements_list(), vec![7; 6]);

        let z = Matrix::<f64>::zeros(Dimensions::square(2));
        assert!(z.is_zero());

        let o = Matrix::<i32>::ones(Dimensions::new(1, 3));
        assert_eq!(o.elements_list(), vec![1, 1, 1]);
    }

    #[test]
    fn test_from_fn() {
        let m = Matrix::from_fn(Dimensions::new(2, 3), |r, c| (r * 10 + c) as i64);
        assert_eq!(m.elements_list(), vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_random_reproducible() {
        let mut rng1 = Rng::new(5);
        let mut rng2 = Rng::new(5);
        let a = Matrix::<f64>::random(Dimensions::new(3, 4), &mut rng1);
        let b = Matrix::<f64>::random(Dimensions::new(3, 4), &mut rng2);
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), Dimensions::new(3, 4));
    }
}
