use core::fmt;

use crate::dimensions::Dimensions;

/// All errors returned by `aquila-core`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A row, column, or element index is out of bounds.
    IndexOutOfBounds { index: usize, bound: usize },

    /// An index range reaches past the valid domain.
    RangeOutOfBounds {
        start: usize,
        end: usize,
        bound: usize,
    },

    /// A diagonal offset lies outside the matrix.
    DiagonalOutOfBounds {
        index: isize,
        dimensions: Dimensions,
    },

    /// Operand shapes do not match the required layout.
    DimensionMismatch {
        expected: Dimensions,
        got: Dimensions,
    },

    /// Operand lengths do not match.
    LengthMismatch { expected: usize, got: usize },

    /// An element list does not agree with the declared shape.
    WrongElementCount { count: usize, expected: usize },

    /// The operation requires a square matrix.
    NotSquare { dimensions: Dimensions },

    /// The operation requires a non-empty operand.
    Empty,

    /// The receiver's elements cannot be written directly.
    ImmutableElements { reason: &'static str },

    /// An array is not a bijection on its own index set.
    InvalidPermutation,

    /// Matrix is singular and cannot be inverted / solved against.
    Singular,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, bound } => {
                write!(f, "index {index} out of bounds for length {bound}")
            }
            Self::RangeOutOfBounds { start, end, bound } => {
                write!(f, "range {start}..{end} out of bounds for length {bound}")
            }
            Self::DiagonalOutOfBounds { index, dimensions } => {
                write!(f, "diagonal {index} out of bounds for {dimensions}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {expected}, got {got}")
            }
            Self::WrongElementCount { count, expected } => {
                write!(f, "got {count} elements where the shape requires {expected}")
            }
            Self::NotSquare { dimensions } => {
                write!(f, "operation requires a square matrix, got {dimensions}")
            }
            Self::Empty => write!(f, "operation requires a non-empty operand"),
            Self::ImmutableElements { reason } => {
                write!(f, "elements cannot be written directly: {reason}")
            }
            Self::InvalidPermutation => {
                write!(f, "array is not a valid permutation of its index set")
            }
            Self::Singular => write!(f, "singular matrix"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Convenience alias used throughout `aquila-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
