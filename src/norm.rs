//! Vector and matrix norms.
//!
//! Zero-length inputs have norm zero.

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// ‖v‖₁ = Σ|vᵢ|.
pub fn l1_norm<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x.abs())
}

/// ‖v‖₂, the Euclidean norm.
pub fn l2_norm<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    v.norm()
}

/// ‖v‖∞ = max|vᵢ|.
pub fn linf_norm<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
}

/// ‖v‖ₚ = (Σ|vᵢ|ᵖ)^(1/p).
///
/// # Errors
/// Returns `InvalidNormOrder` if `p == 0`.
///
/// # Examples
/// ```
/// use u_linalg::{norm::lp_norm, Vector};
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert!((lp_norm(&v, 2).unwrap() - 5.0).abs() < 1e-12);
/// assert!(lp_norm(&v, 0).is_err());
/// ```
pub fn lp_norm<T: Scalar, const N: usize>(v: &Vector<T, N>, p: u32) -> LinalgResult<T> {
    if p == 0 {
        return Err(LinalgError::InvalidNormOrder { p });
    }
    let exponent = i32::try_from(p).map_err(|_| LinalgError::InvalidNormOrder { p })?;
    let sum = v
        .iter()
        .fold(T::zero(), |acc, &x| acc + x.abs().powi(exponent));
    let order = T::from_u32(p).ok_or(LinalgError::InvalidNormOrder { p })?;
    Ok(sum.powf(order.recip()))
}

/// Frobenius norm: √(Σᵢⱼ aᵢⱼ²).
pub fn frobenius_norm<T: Scalar, const R: usize, const C: usize>(m: &Matrix<T, R, C>) -> T {
    m.frobenius_norm()
}

/// Largest absolute entry.
pub fn max_norm<T: Scalar, const R: usize, const C: usize>(m: &Matrix<T, R, C>) -> T {
    m.as_rows()
        .iter()
        .flat_map(|row| row.iter())
        .fold(T::zero(), |acc, &x| acc.max(x.abs()))
}

/// Induced 1-norm: maximum absolute column sum.
pub fn matrix_1_norm<T: Scalar, const R: usize, const C: usize>(m: &Matrix<T, R, C>) -> T {
    (0..C).fold(T::zero(), |best, j| best.max(l1_norm(&m.column(j))))
}

/// Induced ∞-norm: maximum absolute row sum.
pub fn matrix_inf_norm<T: Scalar, const R: usize, const C: usize>(m: &Matrix<T, R, C>) -> T {
    (0..R).fold(T::zero(), |best, i| best.max(l1_norm(&m.row(i))))
}
