//! Matrix factorizations.
//!
//! # Available Decompositions
//!
//! - [`LuDecomposition`]: partial-pivoted Gaussian elimination, `P·A = L·U`
//! - [`QrDecomposition`]: classical Gram-Schmidt, `A = Q·R`
//! - [`CholeskyDecomposition`]: symmetric positive-definite, `A = L·Lᵀ`
//!
//! Each factorization is computed once from its input and never mutated
//! afterwards. Failure to factor is reported through a flag on the result
//! (`is_singular`, `is_positive_definite`) rather than an error, and solves
//! built on a failed factorization return `None`.
//!
//! All three use the same detection threshold,
//! [`Scalar::DETECTION_THRESHOLD`](crate::Scalar::DETECTION_THRESHOLD).

mod cholesky;
mod lu;
mod qr;

pub use cholesky::{cholesky_decompose, CholeskyDecomposition};
pub use lu::{lu_decompose, LuDecomposition};
pub use qr::{qr_decompose, QrDecomposition};
