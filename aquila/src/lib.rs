//! # Aquila
//!
//! A generic dense linear-algebra engine: matrices, vectors, permutations,
//! and a pivoted LU factorization, generic over an element capability set.
//!
//! ```
//! use aquila::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![2.0, 4.0], vec![3.0, 7.0]]).unwrap();
//! let det = a.determinant().unwrap();
//! assert!((det - 2.0).abs() < 1e-12);
//! ```

pub use aquila_core as core;

/// Glob-import convenience: `use aquila::prelude::*;`
pub mod prelude {
    pub use aquila_core::prelude::*;
}
