//! Display formatting for [`Matrix`].

use core::fmt;

use crate::Scalar;

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// Formats the nested row lists: `[[1, 2], [3, 4]]`.
    ///
    /// The empty matrix prints as `[[]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if self.rows() == 0 {
            write!(f, "[]")?;
        }
        for r in 0..self.rows() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for c in 0..self.columns() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.at(r, c))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
