//! Cholesky decomposition of symmetric positive-definite matrices.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::triangular::{backward_substitution, forward_substitution};
use crate::vector::Vector;

/// Lower-triangular factor of `A = L·Lᵀ`.
///
/// When a diagonal radicand is at or below the detection threshold the
/// factorization stops and `L` holds only the rows computed so far.
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyDecomposition<T, const N: usize> {
    l: Matrix<T, N, N>,
    positive_definite: bool,
}

/// Cholesky decomposition: lower-triangular L such that A = L·Lᵀ.
///
/// Symmetry is assumed, not checked: only the lower triangle of `a` is read.
///
/// # Algorithm
/// Row-by-row Cholesky-Banachiewicz factorization.
///
/// Reference: Golub & Van Loan (1996), *Matrix Computations*, Algorithm 4.2.1.
///
/// # Complexity
/// O(n³/3).
///
/// # Examples
/// ```
/// use u_linalg::{cholesky_decompose, Matrix};
/// let a = Matrix::from_rows([[4.0, 2.0], [2.0, 3.0]]);
/// let chol = cholesky_decompose(&a);
/// assert!(chol.is_positive_definite());
/// let l = chol.l();
/// assert!((l * l.transpose()).approx_eq(&a, 1e-10));
/// ```
pub fn cholesky_decompose<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
) -> CholeskyDecomposition<T, N> {
    let mut l = Matrix::zeros();
    let threshold = T::detection_threshold();

    for i in 0..N {
        for j in 0..=i {
            if j == i {
                let mut sum = T::zero();
                for k in 0..j {
                    sum = sum + l[(j, k)] * l[(j, k)];
                }
                let diag = a[(j, j)] - sum;
                if diag <= threshold {
                    log::debug!("Cholesky: radicand {diag:e} at row {j}, matrix is not positive-definite");
                    return CholeskyDecomposition {
                        l,
                        positive_definite: false,
                    };
                }
                l[(j, j)] = diag.sqrt();
            } else {
                let mut sum = T::zero();
                for k in 0..j {
                    sum = sum + l[(i, k)] * l[(j, k)];
                }
                l[(i, j)] = (a[(i, j)] - sum) / l[(j, j)];
            }
        }
    }

    CholeskyDecomposition {
        l,
        positive_definite: true,
    }
}

impl<T: Scalar, const N: usize> CholeskyDecomposition<T, N> {
    /// Lower-triangular factor.
    #[inline]
    pub fn l(&self) -> Matrix<T, N, N> {
        self.l
    }

    /// False when the factorization stopped on a non-positive radicand.
    #[inline]
    pub fn is_positive_definite(&self) -> bool {
        self.positive_definite
    }

    /// Solves A·x = b: L·y = b forward, then Lᵀ·x = y backward.
    ///
    /// Returns `None` if the input was not positive-definite.
    pub fn solve(&self, b: &Vector<T, N>) -> Option<Vector<T, N>> {
        if !self.positive_definite {
            return None;
        }
        let y = forward_substitution(&self.l, b);
        Some(backward_substitution(&self.l.transpose(), &y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cholesky_3x3() {
        let a = Matrix::from_rows([[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]);
        let chol = cholesky_decompose(&a);
        assert!(chol.is_positive_definite());
        let l = chol.l();
        // known factor: [[2, 0, 0], [6, 1, 0], [-8, 5, 3]]
        let expected = Matrix::from_rows([[2.0, 0.0, 0.0], [6.0, 1.0, 0.0], [-8.0, 5.0, 3.0]]);
        assert!(l.approx_eq(&expected, 1e-12));

        let llt = l * l.transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(llt[(i, j)], a[(i, j)], epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_cholesky_identity() {
        let eye = Matrix::<f64, 3, 3>::identity();
        let chol = cholesky_decompose(&eye);
        assert!(chol.is_positive_definite());
        assert_eq!(chol.l(), eye);
    }

    #[test]
    fn test_negative_diagonal_is_rejected() {
        let a = Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, -2.0, 0.0], [0.0, 0.0, 3.0]]);
        let chol = cholesky_decompose(&a);
        assert!(!chol.is_positive_definite());
        // first row was factored before the failure
        assert_eq!(chol.l()[(0, 0)], 1.0);
        assert!(chol.solve(&Vector::from_array([1.0, 1.0, 1.0])).is_none());
    }

    #[test]
    fn test_indefinite_is_rejected() {
        let a = Matrix::from_rows([[1.0, 2.0], [2.0, 1.0]]);
        assert!(!cholesky_decompose(&a).is_positive_definite());
    }

    #[test]
    fn test_semidefinite_is_rejected() {
        let a = Matrix::from_rows([[1.0, 1.0], [1.0, 1.0]]);
        assert!(!cholesky_decompose(&a).is_positive_definite());
    }

    #[test]
    fn test_solve() {
        let a = Matrix::from_rows([[25.0, 15.0, -5.0], [15.0, 18.0, 0.0], [-5.0, 0.0, 11.0]]);
        let b = Vector::from_array([35.0, 33.0, 6.0]);
        let x = cholesky_decompose(&a).solve(&b).unwrap();
        let ax = a * x;
        for i in 0..3 {
            assert_abs_diff_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }
}
