//! # u-linalg
//!
//! Dense linear algebra for small matrices whose dimensions are known at
//! compile time.
//!
//! Matrices and vectors are stack-allocated `Copy` values parameterized by
//! const generics, so dimension mismatches are type errors. On top of them
//! the crate provides:
//!
//! - **Decompositions**: LU with partial pivoting, QR (Gram-Schmidt) and
//!   Cholesky
//! - **Linear solves**: square systems, inverses and least squares
//! - **Eigenvalues**: power iteration, inverse iteration, the QR algorithm and
//!   Rayleigh quotients
//! - **Norms** and **determinants**
//!
//! Numerical failure (a singular matrix, a matrix that is not
//! positive-definite, an iteration that runs out of budget) is reported
//! through flags and `Option`, never by panicking. [`LinalgError`] is
//! reserved for malformed input data and invalid configuration.
//!
//! # Example
//!
//! ```
//! use u_linalg::{lu_decompose, solve, Matrix, Vector};
//!
//! let a: Matrix<f64, 3, 3> = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
//! let b = Vector::from_array([4.0, 10.0, 24.0]);
//!
//! let x = solve(&a, &b).expect("non-singular");
//! assert!(x.approx_eq(&Vector::from_array([1.0, 1.0, 1.0]), 1e-10));
//! assert!((lu_decompose(&a).determinant() - 4.0).abs() < 1e-10);
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; nothing is
//! printed unless the application installs a logger.

pub mod config;
pub mod decomposition;
pub mod eigen;
pub mod error;
pub mod matrix;
pub mod norm;
pub mod operations;
pub mod scalar;
pub mod solve;
pub mod triangular;
pub mod vector;

pub use config::IterationConfig;
pub use decomposition::{
    cholesky_decompose, lu_decompose, qr_decompose, CholeskyDecomposition, LuDecomposition,
    QrDecomposition,
};
pub use eigen::{
    inverse_iteration, power_iteration, qr_algorithm, rayleigh_quotient, EigenPair, EigenResult,
};
pub use error::{LinalgError, LinalgResult};
pub use matrix::Matrix;
pub use operations::{determinant, inverse2, inverse3};
pub use scalar::Scalar;
pub use solve::{
    least_squares, least_squares_or_zero, matrix_inverse, solve, solve_cholesky, solve_lu,
};
pub use vector::Vector;
