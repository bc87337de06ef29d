//! QR decomposition by classical Gram-Schmidt.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Factors of `A = Q·R`.
///
/// Columns of `Q` are orthonormal except where the corresponding column of
/// `A` was numerically in the span of the previous ones; those columns of `Q`
/// are zero and the matching `R[j,j]` holds the near-zero residual norm.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition<T, const N: usize> {
    q: Matrix<T, N, N>,
    r: Matrix<T, N, N>,
}

/// QR decomposition by classical Gram-Schmidt orthogonalization.
///
/// # Algorithm
/// Column `a_j` is projected onto every earlier `q_i`
/// (`R[i,j] = a_j · q_i`), the projections are subtracted, and the residual
/// norm becomes `R[j,j]`. A residual norm at or below the detection threshold
/// leaves `q_j` as the zero vector instead of dividing by it.
///
/// # Complexity
/// O(2n³).
///
/// # Examples
/// ```
/// use u_linalg::{qr_decompose, Matrix};
/// let a = Matrix::from_rows([[12.0, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]]);
/// let qr = qr_decompose(&a);
/// assert!((qr.q() * qr.r()).approx_eq(&a, 1e-8));
/// assert!((qr.q().transpose() * qr.q()).approx_eq(&Matrix::identity(), 1e-8));
/// ```
pub fn qr_decompose<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> QrDecomposition<T, N> {
    let mut q = Matrix::zeros();
    let mut r = Matrix::zeros();
    let threshold = T::detection_threshold();

    for j in 0..N {
        let a_j = a.column(j);
        let mut u_j = a_j;

        for i in 0..j {
            let q_i = q.column(i);
            let proj = a_j.dot(&q_i);
            r[(i, j)] = proj;
            u_j = u_j - q_i * proj;
        }

        let norm = u_j.norm();
        r[(j, j)] = norm;

        if norm > threshold {
            q.set_column(j, &(u_j / norm));
        } else {
            log::debug!("QR: column {j} is in the span of earlier columns (residual {norm:e})");
            q.set_column(j, &Vector::zeros());
        }
    }

    QrDecomposition { q, r }
}

impl<T: Scalar, const N: usize> QrDecomposition<T, N> {
    /// Factor with orthonormal (or zero) columns.
    #[inline]
    pub fn q(&self) -> Matrix<T, N, N> {
        self.q
    }

    /// Upper-triangular factor.
    #[inline]
    pub fn r(&self) -> Matrix<T, N, N> {
        self.r
    }

    /// True when some column of `Q` had to be left zero.
    pub fn is_rank_deficient(&self) -> bool {
        let threshold = T::detection_threshold();
        (0..N).any(|j| self.r[(j, j)].abs() <= threshold)
    }
}
