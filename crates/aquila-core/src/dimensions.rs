//! The `(rows, columns)` shape descriptor shared by all 2-D types.

use core::fmt;
use core::ops::{Add, Sub};

/// The dimensions of a 2-dimensional matrix.
///
/// A plain value type: cheap to copy, compared field-wise. `(0, 0)` denotes
/// the empty shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// The number of rows.
    pub rows: usize,
    /// The number of columns.
    pub columns: usize,
}

impl Dimensions {
    /// The empty shape `(0, 0)`.
    pub const EMPTY: Dimensions = Dimensions {
        rows: 0,
        columns: 0,
    };

    /// Create dimensions with the given number of rows and columns.
    #[inline]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Create square dimensions where rows and columns are both `size`.
    #[inline]
    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// The product `rows * columns` (the element count of a dense matrix).
    #[inline]
    pub const fn product(&self) -> usize {
        self.rows * self.columns
    }

    /// The smaller of the two dimension values.
    #[inline]
    pub const fn minimum(&self) -> usize {
        if self.rows < self.columns {
            self.rows
        } else {
            self.columns
        }
    }

    /// The shared size of square dimensions, `None` when not square.
    #[inline]
    pub const fn size(&self) -> Option<usize> {
        if self.rows == self.columns {
            Some(self.rows)
        } else {
            None
        }
    }

    /// Whether rows equal columns.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Whether both dimension values are zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 && self.columns == 0
    }

    /// The same dimensions with rows and columns swapped.
    #[inline]
    pub const fn transpose(&self) -> Dimensions {
        Dimensions::new(self.columns, self.rows)
    }
}

impl Add for Dimensions {
    type Output = Dimensions;

    fn add(self, rhs: Dimensions) -> Dimensions {
        Dimensions::new(self.rows + rhs.rows, self.columns + rhs.columns)
    }
}

impl Sub for Dimensions {
    type Output = Dimensions;

    /// Component-wise subtraction, saturating at zero.
    fn sub(self, rhs: Dimensions) -> Dimensions {
        Dimensions::new(
            self.rows.saturating_sub(rhs.rows),
            self.columns.saturating_sub(rhs.columns),
        )
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, columns): (usize, usize)) -> Self {
        Dimensions::new(rows, columns)
    }
}
