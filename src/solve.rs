//! Linear systems, inverses and least squares.
//!
//! Every solver that can fail returns `Option`: `None` means the underlying
//! factorization was singular (LU) or not positive-definite (Cholesky).
//!
//! # Examples
//!
//! ```
//! use u_linalg::{solve, Matrix, Vector};
//!
//! let a = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
//! let b = Vector::from_array([4.0, 10.0, 24.0]);
//! let x = solve(&a, &b).unwrap();
//! assert!((a * x).approx_eq(&b, 1e-10));
//! ```

use crate::decomposition::{cholesky_decompose, lu_decompose};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Solves A·x = b through LU with partial pivoting.
///
/// Returns `None` if `A` is singular.
pub fn solve_lu<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
    b: &Vector<T, N>,
) -> Option<Vector<T, N>> {
    lu_decompose(a).solve(b)
}

/// Solves A·x = b through Cholesky. `A` must be symmetric positive-definite.
///
/// Returns `None` if the factorization rejects `A`.
pub fn solve_cholesky<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
    b: &Vector<T, N>,
) -> Option<Vector<T, N>> {
    cholesky_decompose(a).solve(b)
}

/// Solves A·x = b for a general square matrix (LU path).
#[inline]
pub fn solve<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
    b: &Vector<T, N>,
) -> Option<Vector<T, N>> {
    solve_lu(a, b)
}

/// A⁻¹ from a single LU factorization and N triangular solve pairs.
///
/// Returns `None` if `A` is singular.
///
/// # Examples
/// ```
/// use u_linalg::{matrix_inverse, Matrix};
/// let a = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
/// let inv = matrix_inverse(&a).unwrap();
/// assert!((a * inv).approx_eq(&Matrix::identity(), 1e-10));
/// assert!(matrix_inverse(&Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]])).is_none());
/// ```
pub fn matrix_inverse<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> Option<Matrix<T, N, N>> {
    lu_decompose(a).inverse()
}

/// Least-squares solution of an overdetermined system (`R >= C`) via the
/// normal equations `(AᵀA)·x = Aᵀb`.
///
/// Returns `None` if `AᵀA` is singular, i.e. the columns of `A` are linearly
/// dependent.
///
/// Forming `AᵀA` squares the condition number; prefer well-scaled columns.
pub fn least_squares<T: Scalar, const R: usize, const C: usize>(
    a: &Matrix<T, R, C>,
    b: &Vector<T, R>,
) -> Option<Vector<T, C>> {
    let at = a.transpose();
    let ata = at * *a;
    let atb = at * *b;
    solve(&ata, &atb)
}

/// [`least_squares`] with a degraded fallback: the all-zero vector when the
/// normal equations are singular.
///
/// The zero vector is indistinguishable from a genuine zero solution. Callers
/// that need to detect failure should use [`least_squares`].
pub fn least_squares_or_zero<T: Scalar, const R: usize, const C: usize>(
    a: &Matrix<T, R, C>,
    b: &Vector<T, R>,
) -> Vector<T, C> {
    least_squares(a, b).unwrap_or_else(|| {
        log::debug!("least squares: normal equations are singular, returning zero vector");
        Vector::zeros()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_solve_linear_system() {
        let a = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
        let b = Vector::from_array([4.0, 10.0, 24.0]);
        let x = solve(&a, &b).expect("non-singular");
        let ax = a * x;
        for i in 0..3 {
            assert_abs_diff_eq!(ax[i], b[i], epsilon = 1e-10);
        }
        assert!(x.approx_eq(&Vector::from_array([1.0, 1.0, 1.0]), 1e-10));
    }

    #[test]
    fn test_solve_singular_is_none() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]);
        let b = Vector::from_array([1.0, 2.0, 3.0]);
        assert!(solve(&a, &b).is_none());
        assert!(solve_lu(&a, &b).is_none());
    }

    #[test]
    fn test_solve_cholesky_matches_lu() {
        let a = Matrix::from_rows([[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]);
        let b = Vector::from_array([1.0, 2.0, 3.0]);
        let x_chol = solve_cholesky(&a, &b).expect("SPD");
        let x_lu = solve_lu(&a, &b).expect("non-singular");
        assert!(x_chol.approx_eq(&x_lu, 1e-8));
    }

    #[test]
    fn test_solve_cholesky_rejects_indefinite() {
        let a = Matrix::from_rows([[1.0, 2.0], [2.0, 1.0]]);
        assert!(solve_cholesky(&a, &Vector::from_array([1.0, 1.0])).is_none());
        // LU handles the same system
        assert!(solve_lu(&a, &Vector::from_array([1.0, 1.0])).is_some());
    }

    #[test]
    fn test_matrix_inverse() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = matrix_inverse(&a).expect("non-singular");
        let eye = a * inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(eye[(i, j)], expected, epsilon = 1e-10);
            }
        }
        // known inverse
        let expected = Matrix::from_rows([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]);
        assert!(inv.approx_eq(&expected, 1e-10));
    }

    #[test]
    fn test_matrix_inverse_with_pivoting() {
        // zero leading entry forces a row swap
        let a = Matrix::from_rows([[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]]);
        let inv = matrix_inverse(&a).expect("non-singular");
        assert!((a * inv).approx_eq(&Matrix::identity(), 1e-10));
        assert!((inv * a).approx_eq(&Matrix::identity(), 1e-10));
    }

    #[test]
    fn test_least_squares_line_fit() {
        let a = Matrix::from_rows([[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]]);
        let b = Vector::from_array([2.0, 3.0, 5.0, 6.0]);
        let x = least_squares(&a, &b).expect("full column rank");
        // intercept 0.5, slope 1.4
        assert_abs_diff_eq!(x[0], 0.5, epsilon = 1e-10);
        assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-10);

        let residual = a * x - b;
        assert!(residual.dot(&residual) < 1.0);
        // residual is orthogonal to the column space
        let normal = a.transpose() * residual;
        assert!(normal.approx_eq(&Vector::zeros(), 1e-10));
    }

    #[test]
    fn test_least_squares_exact_for_square() {
        let a = Matrix::from_rows([[2.0, 1.0], [1.0, 3.0]]);
        let b = Vector::from_array([3.0, 5.0]);
        let x = least_squares(&a, &b).unwrap();
        assert!((a * x).approx_eq(&b, 1e-10));
    }

    #[test]
    fn test_least_squares_rank_deficient() {
        // duplicate columns
        let a = Matrix::from_rows([[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
        let b = Vector::from_array([1.0, 2.0, 3.0]);
        assert!(least_squares(&a, &b).is_none());
        assert_eq!(least_squares_or_zero(&a, &b), Vector::zeros());
    }
}
