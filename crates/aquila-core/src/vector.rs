//! Dense 1-D vector type with contiguous storage.
//!
//! [`Vector`] owns its elements and cloning performs a deep copy; every
//! subvector accessor returns an independent copy as well. The dot and
//! direct products are computed through the matrix product, so a vector of
//! length n behaves exactly like a 1×n (or n×1) matrix.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Range, Sub};

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::random::{Random, Rng};
use crate::{Float, Scalar};

/// A dense vector with value semantics.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T: Scalar> {
    elements: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a vector from an element list.
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Create a vector of `length` zeros.
    pub fn zeros(length: usize) -> Self {
        Self::filled(T::zero(), length)
    }

    /// Create a vector holding `value` at every position.
    pub fn filled(value: T, length: usize) -> Self {
        Self {
            elements: vec![value; length],
        }
    }

    /// Create a vector by calling `generator` for each index.
    pub fn from_fn<F>(length: usize, generator: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            elements: (0..length).map(generator).collect(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the vector has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether every element equals zero.
    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|&x| x == T::zero())
    }

    /// A flat slice of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consume the vector and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// The element at the given index.
    pub fn get(&self, index: usize) -> Result<T> {
        self.elements
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOutOfBounds {
                index,
                bound: self.len(),
            })
    }

    /// Set the element at the given index.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let bound = self.len();
        match self.elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CoreError::IndexOutOfBounds { index, bound }),
        }
    }

    /// An independent copy of the elements in the given index range.
    pub fn subvector(&self, range: Range<usize>) -> Result<Vector<T>> {
        self.check_range(&range)?;
        Ok(Vector::new(self.elements[range].to_vec()))
    }

    /// Replace the elements in the given index range.
    ///
    /// The replacement must have exactly as many elements as the range.
    /// Fails without mutating anything.
    pub fn set_subvector(&mut self, range: Range<usize>, replacement: &Vector<T>) -> Result<()> {
        self.check_range(&range)?;
        if replacement.len() != range.len() {
            return Err(CoreError::LengthMismatch {
                expected: range.len(),
                got: replacement.len(),
            });
        }
        self.elements[range].copy_from_slice(replacement.as_slice());
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.len() {
            return Err(CoreError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                bound: self.len(),
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Iteration / map
    // ------------------------------------------------------------------

    /// Iterate over all elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Apply a function to every element, returning a new vector.
    pub fn map<F>(&self, f: F) -> Vector<T>
    where
        F: Fn(T) -> T,
    {
        Vector {
            elements: self.elements.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Apply a function element-wise to two vectors of the same length.
    pub fn zip_map<F>(&self, other: &Vector<T>, f: F) -> Result<Vector<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.len() != other.len() {
            return Err(CoreError::LengthMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(Vector {
            elements: self
                .elements
                .iter()
                .zip(other.elements.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Fold all elements in order.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.elements.iter().copied().fold(init, f)
    }

    // ------------------------------------------------------------------
    // Numeric operations
    // ------------------------------------------------------------------

    /// The element-wise conjugate.
    pub fn conjugate(&self) -> Vector<T> {
        self.map(Scalar::conjugate)
    }

    /// The dot product with another vector of the same length.
    ///
    /// Computed as the 1×n by n×1 matrix product.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        if self.len() != other.len() {
            return Err(CoreError::LengthMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        let row = Matrix::from_vec_with_rows(self.elements.clone(), 1)?;
        let column = Matrix::from_vec_with_columns(other.elements.clone(), 1)?;
        row.matmul(&column)?.element(0, 0)
    }

    /// The direct (outer) product with another vector of the same length.
    ///
    /// Computed as the n×1 by 1×n matrix product, yielding an n×n matrix.
    pub fn direct_product(&self, other: &Vector<T>) -> Result<Matrix<T>> {
        if self.len() != other.len() {
            return Err(CoreError::LengthMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        let column = Matrix::from_vec_with_columns(self.elements.clone(), 1)?;
        let row = Matrix::from_vec_with_rows(other.elements.clone(), 1)?;
        column.matmul(&row)
    }

    /// Element-wise addition, returning `Err` on length mismatch.
    pub fn add_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on length mismatch.
    pub fn sub_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, |a, b| a - b)
    }
}

impl<T: Scalar + Random> Vector<T> {
    /// Create a vector of pseudo-random elements.
    pub fn random(length: usize, rng: &mut Rng) -> Self {
        Self::from_fn(length, |_| T::random(rng))
    }
}

impl<T: Float> Vector<T> {
    /// The Euclidean norm `sqrt(Σ xᵢ·xᵢ)`.
    ///
    /// Returns an error for the empty vector.
    pub fn norm(&self) -> Result<T> {
        if self.is_empty() {
            return Err(CoreError::Empty);
        }
        Ok(self.elements.iter().map(|&x| x * x).sum::<T>().sqrt())
    }
}

// ======================================================================
// Operators  (panicking; use the *_checked methods to get a Result)
// ======================================================================

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Vector<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                assert_eq!(
                    self.len(), rhs.len(),
                    "length mismatch in element-wise {}: {} vs {}",
                    stringify!($method), self.len(), rhs.len(),
                );
                Vector {
                    elements: self.elements.iter()
                        .zip(rhs.elements.iter())
                        .map(|(&a, &b)| a $op b)
                        .collect(),
                }
            }
        }
    };
}

impl_vector_binop!(Add, add, +);
impl_vector_binop!(Sub, sub, -);

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.map(|x| -x)
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.map(|x| -x)
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        (&self).mul(rhs)
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Vector<T> {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Vector<T> {
        (&self).div(rhs)
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    /// Formats the element list: `[1, 2, 3]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Vector::new(elements)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let v = Vector::new(vec![1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        assert_eq!(Vector::<i32>::zeros(2).as_slice(), &[0, 0]);
        assert_eq!(Vector::filled(7, 3).as_slice(), &[7, 7, 7]);
        assert_eq!(
            Vector::from_fn(4, |i| i as i64 * 2).as_slice(),
            &[0, 2, 4, 6]
        );
    }

    #[test]
    fn test_from_fn_with_stateful_generator() {
        // The generator may carry mutable state, like a PRNG.
        let mut rng = Rng::new(9);
        let v = Vector::<f64>::from_fn(4, |_| rng.next_f64());
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));

        let mut next = 0;
        let counted = Vector::from_fn(3, |_| {
            next += 1;
            next
        });
        assert_eq!(counted.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_get_set() {
        let mut v = Vector::new(vec![1, 2, 3]);
        assert_eq!(v.get(1).unwrap(), 2);
        assert!(v.get(3).is_err());

        v.set(1, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 9, 3]);
        assert!(v.set(3, 0).is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(Vector::<i32>::zeros(3).is_zero());
        assert!(!Vector::new(vec![0, 1, 0]).is_zero());
        assert!(Vector::<i32>::new(vec![]).is_zero());
    }

    #[test]
    fn test_subvector() {
        let v = Vector::new(vec![10, 20, 30, 40]);
        let sub = v.subvector(1..3).unwrap();
        assert_eq!(sub.as_slice(), &[20, 30]);
        assert!(v.subvector(2..5).is_err());

        // The copy is independent of the source.
        let mut w = v.clone();
        w.set(1, 0).unwrap();
        assert_eq!(sub.as_slice(), &[20, 30]);
    }

    #[test]
    fn test_set_subvector() {
        let mut v = Vector::new(vec![10, 20, 30, 40]);
        v.set_subvector(1..3, &Vector::new(vec![5, 6])).unwrap();
        assert_eq!(v.as_slice(), &[10, 5, 6, 40]);

        // Wrong length fails without mutating.
        assert!(v.set_subvector(0..2, &Vector::new(vec![1])).is_err());
        assert_eq!(v.as_slice(), &[10, 5, 6, 40]);

        assert!(v.set_subvector(3..5, &Vector::new(vec![1, 2])).is_err());
    }

    #[test]
    fn test_add_sub_operators() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![10.0, 20.0, 30.0]);
        assert_eq!((&a + &b).as_slice(), &[11.0, 22.0, 33.0]);
        assert_eq!((&b - &a).as_slice(), &[9.0, 18.0, 27.0]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_add_length_mismatch_panics() {
        let a = Vector::new(vec![1, 2]);
        let b = Vector::new(vec![1, 2, 3]);
        let _ = a + b;
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Vector::new(vec![1, 2]);
        let b = Vector::new(vec![3, 4]);
        assert_eq!(a.add_checked(&b).unwrap().as_slice(), &[4, 6]);
        assert!(a.add_checked(&Vector::new(vec![1])).is_err());
        assert_eq!(b.sub_checked(&a).unwrap().as_slice(), &[2, 2]);
    }

    #[test]
    fn test_scalar_operators() {
        let v = Vector::new(vec![2.0, 4.0]);
        assert_eq!((&v * 3.0).as_slice(), &[6.0, 12.0]);
        assert_eq!((&v / 2.0).as_slice(), &[1.0, 2.0]);
        assert_eq!((-&v).as_slice(), &[-2.0, -4.0]);
    }

    #[test]
    fn test_dot() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b).unwrap(), 32.0);
        assert!(a.dot(&Vector::new(vec![1.0])).is_err());
    }

    #[test]
    fn test_direct_product() {
        let a = Vector::new(vec![1, 2]);
        let b = Vector::new(vec![3, 4]);
        let m = a.direct_product(&b).unwrap();
        assert_eq!(m.dimensions(), crate::dimensions::Dimensions::square(2));
        assert_eq!(m.elements_list(), vec![3, 4, 6, 8]);
    }

    #[test]
    fn test_norm() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert_eq!(v.norm().unwrap(), 5.0);
        assert_eq!(
            Vector::<f64>::new(vec![]).norm(),
            Err(CoreError::Empty)
        );
    }

    #[test]
    fn test_conjugate() {
        let v = Vector::new(vec![1.5, -2.5]);
        assert_eq!(v.conjugate(), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Vector::<i32>::new(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_random_reproducible() {
        let mut rng1 = Rng::new(11);
        let mut rng2 = Rng::new(11);
        assert_eq!(
            Vector::<f64>::random(5, &mut rng1),
            Vector::<f64>::random(5, &mut rng2)
        );
    }
}
