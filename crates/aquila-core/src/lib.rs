//! `aquila-core` — Foundation crate for the Aquila ecosystem.
//!
//! Provides dense matrices and vectors, permutations, and a pivoted LU
//! factorization, generic over an element capability set.
//!
//! # Design
//!
//! - **Zero external dependencies** for math — everything is from scratch.
//! - Generic over numeric types via the [`Scalar`] / [`Float`] trait
//!   hierarchy.
//! - **Value semantics** throughout: rows, columns, submatrices, and
//!   subvectors are returned as independent copies, and every fallible
//!   mutation either fully succeeds or leaves the receiver untouched.

pub mod dimensions;
pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod permutation;
pub mod random;
pub mod vector;


// Re-export key types at crate root for convenience.
pub use dimensions::Dimensions;
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use linalg::LuFactorization;
pub use matrix::Matrix;
pub use permutation::{Parity, Permutation};
pub use vector::Vector;

/// Items intended for glob-import: `use aquila_core::prelude::*;`
pub mod prelude {
    pub use crate::dimensions::Dimensions;
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::LuFactorization;
    pub use crate::matrix::Matrix;
    pub use crate::permutation::{Parity, Permutation};
    pub use crate::random::{Random, Rng};
    pub use crate::vector::Vector;
}
