//! Determinants and closed-form small inverses.
//!
//! [`determinant`] expands by cofactors and is only meant for small fixed
//! dimensions. For anything beyond 3×3 prefer
//! [`LuDecomposition::determinant`](crate::LuDecomposition::determinant),
//! which is O(n³) instead of O(n!).

use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Determinant by closed form (n ≤ 3) or cofactor expansion along the first
/// row (n > 3).
///
/// The 0×0 determinant is 1.
///
/// # Complexity
/// O(n!) for n > 3.
///
/// # Examples
/// ```
/// use u_linalg::{determinant, Matrix};
/// let m = Matrix::from_rows([[2.0, 3.0], [1.0, 4.0]]);
/// assert_eq!(determinant(&m), 5.0);
/// ```
pub fn determinant<T: Scalar, const N: usize>(m: &Matrix<T, N, N>) -> T {
    match N {
        0 => T::one(),
        1 => m[(0, 0)],
        2 => det2(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]),
        3 => {
            m[(0, 0)] * det2(m[(1, 1)], m[(1, 2)], m[(2, 1)], m[(2, 2)])
                - m[(0, 1)] * det2(m[(1, 0)], m[(1, 2)], m[(2, 0)], m[(2, 2)])
                + m[(0, 2)] * det2(m[(1, 0)], m[(1, 1)], m[(2, 0)], m[(2, 1)])
        }
        _ => {
            let flat: Vec<T> = m.as_rows().iter().flat_map(|row| row.iter().copied()).collect();
            cofactor_expansion(&flat, N)
        }
    }
}

#[inline]
fn det2<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a * d - b * c
}

/// Cofactor expansion along row 0 of an `n`×`n` row-major matrix.
///
/// Minors have a size that is only known at runtime, so they are copied into
/// heap buffers.
fn cofactor_expansion<T: Scalar>(data: &[T], n: usize) -> T {
    match n {
        0 => return T::one(),
        1 => return data[0],
        2 => return det2(data[0], data[1], data[2], data[3]),
        _ => {}
    }

    let mut det = T::zero();
    let mut minor = Vec::with_capacity((n - 1) * (n - 1));
    for j in 0..n {
        minor.clear();
        for i in 1..n {
            for k in 0..n {
                if k != j {
                    minor.push(data[i * n + k]);
                }
            }
        }
        let term = data[j] * cofactor_expansion(&minor, n - 1);
        det = if j % 2 == 0 { det + term } else { det - term };
    }
    det
}

/// Closed-form inverse of a 2×2 matrix via the adjugate.
///
/// A zero determinant is not guarded; the result is then infinite or NaN.
pub fn inverse2<T: Scalar>(m: &Matrix<T, 2, 2>) -> Matrix<T, 2, 2> {
    let det = determinant(m);
    Matrix::from_rows([
        [m[(1, 1)] / det, -m[(0, 1)] / det],
        [-m[(1, 0)] / det, m[(0, 0)] / det],
    ])
}

/// Closed-form inverse of a 3×3 matrix via the adjugate.
///
/// A zero determinant is not guarded; the result is then infinite or NaN.
pub fn inverse3<T: Scalar>(m: &Matrix<T, 3, 3>) -> Matrix<T, 3, 3> {
    let det = determinant(m);
    // a·d - b·c over entries addressed as row * 3 + col
    let minor = |a: usize, b: usize, c: usize, d: usize| {
        m[(a / 3, a % 3)] * m[(d / 3, d % 3)] - m[(b / 3, b % 3)] * m[(c / 3, c % 3)]
    };
    Matrix::from_rows([
        [minor(4, 5, 7, 8) / det, minor(2, 1, 8, 7) / det, minor(1, 2, 4, 5) / det],
        [minor(5, 3, 8, 6) / det, minor(0, 2, 6, 8) / det, minor(2, 0, 5, 3) / det],
        [minor(3, 4, 6, 7) / det, minor(1, 0, 7, 6) / det, minor(0, 1, 3, 4) / det],
    ])
}
