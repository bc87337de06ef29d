//! Forward and backward substitution.
//!
//! Neither solver checks the diagonal. The LU and Cholesky paths only call
//! them with non-singular factors; a zero diagonal entry elsewhere produces
//! infinities or NaN rather than an error.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Solves L·x = b where L is lower-triangular (forward substitution).
///
/// Entries above the diagonal are ignored.
///
/// # Examples
/// ```
/// use u_linalg::{triangular::forward_substitution, Matrix, Vector};
/// let l = Matrix::from_rows([[2.0, 0.0], [1.0, 1.0]]);
/// let x = forward_substitution(&l, &Vector::from_array([4.0, 5.0]));
/// assert_eq!(x.into_array(), [2.0, 3.0]);
/// ```
pub fn forward_substitution<T: Scalar, const N: usize>(
    l: &Matrix<T, N, N>,
    b: &Vector<T, N>,
) -> Vector<T, N> {
    let mut x = Vector::zeros();
    for i in 0..N {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - l[(i, j)] * x[j];
        }
        x[i] = sum / l[(i, i)];
    }
    x
}

/// Solves U·x = b where U is upper-triangular (backward substitution).
///
/// Entries below the diagonal are ignored.
pub fn backward_substitution<T: Scalar, const N: usize>(
    u: &Matrix<T, N, N>,
    b: &Vector<T, N>,
) -> Vector<T, N> {
    let mut x = Vector::zeros();
    for i in (0..N).rev() {
        let mut sum = b[i];
        for j in (i + 1)..N {
            sum = sum - u[(i, j)] * x[j];
        }
        x[i] = sum / u[(i, i)];
    }
    x
}
