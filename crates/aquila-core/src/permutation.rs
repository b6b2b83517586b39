//! Permutations of the index set `{0, …, n-1}`.
//!
//! A [`Permutation`] stores its array representation: position `i` holds the
//! index that will take `i`'s place when the permutation is applied. The
//! type is a leaf value type, independent of the matrix family, but it also
//! backs the compact permutation-matrix storage in [`crate::matrix`].

use core::fmt;

use crate::error::{CoreError, Result};
use crate::random::Rng;

// ---------------------------------------------------------------------------
// Parity
// ---------------------------------------------------------------------------

/// The parity of a permutation's transposition decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// The signature: `+1` for even, `-1` for odd.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Parity::Even => 1,
            Parity::Odd => -1,
        }
    }

    /// The parity of a decomposition with the given transposition count.
    #[inline]
    pub const fn from_transposition_count(count: usize) -> Parity {
        if count % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

// ---------------------------------------------------------------------------
// Permutation
// ---------------------------------------------------------------------------

/// A bijection on the index set `{0, …, n-1}` in array representation.
///
/// # Examples
///
/// ```
/// use aquila_core::permutation::Permutation;
///
/// let p = Permutation::from_vec(vec![1, 0, 3, 2]).unwrap();
/// assert_eq!(p.element(0).unwrap(), 1);
/// assert_eq!(p.to_string(), "[1, 0, 3, 2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// The identity permutation of the given length.
    pub fn identity(length: usize) -> Self {
        Self {
            indices: (0..length).collect(),
        }
    }

    /// Create a permutation from its array representation.
    ///
    /// Returns an error unless `indices` is a bijection on `{0, …, n-1}`:
    /// every value in range and no value repeated.
    pub fn from_vec(indices: Vec<usize>) -> Result<Self> {
        let n = indices.len();
        let mut seen = vec![false; n];
        for &element in &indices {
            if element >= n || seen[element] {
                return Err(CoreError::InvalidPermutation);
            }
            seen[element] = true;
        }
        Ok(Self { indices })
    }

    /// A uniformly random permutation of the given length (Fisher-Yates).
    pub fn random(length: usize, rng: &mut Rng) -> Self {
        let mut p = Self::identity(length);
        for i in (1..length).rev() {
            let j = rng.next_below(i + 1);
            p.indices.swap(i, j);
        }
        p
    }

    /// The length of the permutation.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the permutation has length zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The array representation as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// The element at the given position: the index that takes `index`'s
    /// place when the permutation is applied.
    pub fn element(&self, index: usize) -> Result<usize> {
        self.indices
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOutOfBounds {
                index,
                bound: self.len(),
            })
    }

    /// The position holding the given element. Runs in O(n).
    pub fn index_of(&self, element: usize) -> Result<usize> {
        self.indices
            .iter()
            .position(|&e| e == element)
            .ok_or(CoreError::IndexOutOfBounds {
                index: element,
                bound: self.len(),
            })
    }

    /// Switch the elements at the given positions.
    pub fn switch_elements(&mut self, i: usize, j: usize) -> Result<()> {
        let n = self.len();
        for index in [i, j] {
            if index >= n {
                return Err(CoreError::IndexOutOfBounds { index, bound: n });
            }
        }
        self.indices.swap(i, j);
        Ok(())
    }

    /// The inverse permutation: if `p` sends `i` to `p[i]`, the inverse
    /// sends `p[i]` back to `i`.
    pub fn inverse(&self) -> Permutation {
        let mut inverted = vec![0; self.len()];
        for (i, &element) in self.indices.iter().enumerate() {
            inverted[element] = i;
        }
        Permutation { indices: inverted }
    }

    /// Invert the permutation in place.
    pub fn inverse_in_place(&mut self) {
        *self = self.inverse();
    }

    /// The positions mapped to themselves, in ascending order.
    pub fn fixed_points(&self) -> Vec<usize> {
        self.indices
            .iter()
            .enumerate()
            .filter(|&(i, &e)| i == e)
            .map(|(i, _)| i)
            .collect()
    }

    /// The parity of the permutation.
    ///
    /// Computed from the cycle structure in O(n): a cycle of length k
    /// decomposes into k - 1 transpositions.
    pub fn parity(&self) -> Parity {
        let n = self.len();
        let mut visited = vec![false; n];
        let mut transpositions = 0;

        for start in 0..n {
            if visited[start] {
                continue;
            }
            let mut length = 0;
            let mut index = start;
            while !visited[index] {
                visited[index] = true;
                index = self.indices[index];
                length += 1;
            }
            transpositions += length - 1;
        }

        Parity::from_transposition_count(transpositions)
    }

    /// The signature of the permutation: `+1` for even, `-1` for odd.
    #[inline]
    pub fn sign(&self) -> i32 {
        self.parity().sign()
    }
}

impl fmt::Display for Permutation {
    /// Formats the array representation: `[1, 0, 3, 2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        assert_eq!(p.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(p.len(), 4);
        assert!(Permutation::identity(0).is_empty());
    }

    #[test]
    fn test_from_vec_valid() {
        let p = Permutation::from_vec(vec![2, 0, 1]).unwrap();
        assert_eq!(p.as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn test_from_vec_rejects_out_of_range() {
        assert_eq!(
            Permutation::from_vec(vec![0, 3, 1]),
            Err(CoreError::InvalidPermutation)
        );
    }

    #[test]
    fn test_from_vec_rejects_duplicates() {
        assert_eq!(
            Permutation::from_vec(vec![0, 1, 1]),
            Err(CoreError::InvalidPermutation)
        );
    }

    #[test]
    fn test_element_and_index_of() {
        let p = Permutation::from_vec(vec![3, 1, 0, 4, 2]).unwrap();
        assert_eq!(p.element(0).unwrap(), 3);
        assert_eq!(p.element(4).unwrap(), 2);
        assert!(p.element(5).is_err());
        assert_eq!(p.index_of(3).unwrap(), 0);
        assert_eq!(p.index_of(2).unwrap(), 4);
        assert!(p.index_of(5).is_err());
    }

    #[test]
    fn test_switch_elements() {
        let mut p = Permutation::identity(4);
        p.switch_elements(0, 2).unwrap();
        assert_eq!(p.as_slice(), &[2, 1, 0, 3]);
        assert!(p.switch_elements(0, 4).is_err());
        // Failed switch leaves the permutation untouched.
        assert_eq!(p.as_slice(), &[2, 1, 0, 3]);
    }

    #[test]
    fn test_inverse() {
        let p = Permutation::from_vec(vec![2, 0, 1]).unwrap();
        let inv = p.inverse();
        assert_eq!(inv.as_slice(), &[1, 2, 0]);
        // Composing with the inverse restores the identity positions.
        for i in 0..3 {
            assert_eq!(inv.element(p.element(i).unwrap()).unwrap(), i);
        }
    }

    #[test]
    fn test_inverse_in_place() {
        let mut p = Permutation::from_vec(vec![2, 0, 1]).unwrap();
        p.inverse_in_place();
        assert_eq!(p.as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn test_fixed_points() {
        let p = Permutation::from_vec(vec![0, 2, 1, 3]).unwrap();
        assert_eq!(p.fixed_points(), vec![0, 3]);
        assert_eq!(Permutation::identity(3).fixed_points(), vec![0, 1, 2]);
    }

    #[test]
    fn test_parity_and_sign() {
        // One transposition: odd.
        let p = Permutation::from_vec(vec![1, 0, 2]).unwrap();
        assert_eq!(p.parity(), Parity::Odd);
        assert_eq!(p.sign(), -1);

        // Two disjoint transpositions: even.
        let q = Permutation::from_vec(vec![1, 0, 3, 2]).unwrap();
        assert_eq!(q.parity(), Parity::Even);
        assert_eq!(q.sign(), 1);

        // A 3-cycle is even.
        let r = Permutation::from_vec(vec![1, 2, 0]).unwrap();
        assert_eq!(r.parity(), Parity::Even);

        assert_eq!(Permutation::identity(5).parity(), Parity::Even);
        assert_eq!(Permutation::identity(0).parity(), Parity::Even);
    }

    #[test]
    fn test_display() {
        let p = Permutation::from_vec(vec![1, 0, 3, 2]).unwrap();
        assert_eq!(p.to_string(), "[1, 0, 3, 2]");
        assert_eq!(Permutation::identity(0).to_string(), "[]");
    }

    #[test]
    fn test_random_is_valid() {
        let mut rng = Rng::new(42);
        for _ in 0..20 {
            let p = Permutation::random(8, &mut rng);
            let mut sorted = p.as_slice().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_random_reproducible() {
        let mut rng1 = Rng::new(7);
        let mut rng2 = Rng::new(7);
        assert_eq!(
            Permutation::random(10, &mut rng1),
            Permutation::random(10, &mut rng2)
        );
    }
}
