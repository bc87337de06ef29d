//! Eigenvalue routines for small dense matrices.
//!
//! # Available Routines
//!
//! - [`power_iteration`]: dominant eigenpair
//! - [`inverse_iteration`]: eigenpair nearest a shift
//! - [`qr_algorithm`]: all eigenvalues by unshifted QR iteration
//! - [`rayleigh_quotient`]: one-shot eigenvalue estimate for a direction
//!
//! The iterative routines never fail: when `max_iter` runs out they return
//! the best estimate so far with `converged == false`.
//!
//! # Examples
//!
//! ```
//! use u_linalg::{qr_algorithm, IterationConfig, Matrix};
//!
//! let a = Matrix::from_rows([[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
//! let eig = qr_algorithm(&a, &IterationConfig::default());
//! assert!(eig.converged);
//! for i in 0..3 {
//!     let v = eig.eigenvectors.column(i);
//!     assert!((a * v).approx_eq(&(v * eig.eigenvalues[i]), 1e-6));
//! }
//! ```

use crate::config::IterationConfig;
use crate::decomposition::{lu_decompose, qr_decompose};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Output of [`qr_algorithm`].
#[derive(Debug, Clone, PartialEq)]
pub struct EigenResult<T, const N: usize> {
    /// Diagonal of the final iterate, in iterate order (not sorted).
    pub eigenvalues: Vector<T, N>,
    /// Accumulated orthogonal transform; column `i` pairs with
    /// `eigenvalues[i]`. Only reliable for symmetric input.
    pub eigenvectors: Matrix<T, N, N>,
    /// True when the off-diagonal norm fell below the tolerance.
    pub converged: bool,
    /// Number of QR steps performed.
    pub iterations: usize,
}

/// A single eigenvalue estimate and its unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenPair<T, const N: usize> {
    /// Eigenvalue estimate.
    pub value: T,
    /// Unit vector paired with `value`.
    pub vector: Vector<T, N>,
    /// True when the convergence test passed within `max_iter` steps.
    pub converged: bool,
    /// Number of steps performed.
    pub iterations: usize,
}

#[inline]
fn uniform_start<T: Scalar, const N: usize>() -> Vector<T, N> {
    Vector::splat(T::one()).normalize()
}

/// Dominant eigenpair by power iteration.
///
/// Starts from the uniform unit vector and repeatedly applies `A`. The
/// estimate at each step is `v·(A·v)` taken before renormalizing; the loop
/// stops once it changes by less than `config.tolerance` between two
/// consecutive steps. The first step has no predecessor and never counts as
/// converged.
///
/// Converges to the eigenvalue of largest magnitude provided it is unique
/// and the start vector is not orthogonal to its eigenvector.
///
/// # Complexity
/// O(n²) per iteration.
///
/// # Examples
/// ```
/// use u_linalg::{power_iteration, IterationConfig, Matrix};
/// let a: Matrix<f64, 2, 2> = Matrix::from_rows([[2.0, 0.0], [0.0, 5.0]]);
/// let pair = power_iteration(&a, &IterationConfig::default());
/// assert!(pair.converged);
/// assert!((pair.value - 5.0).abs() < 1e-8);
/// ```
pub fn power_iteration<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
    config: &IterationConfig<T>,
) -> EigenPair<T, N> {
    let mut v = uniform_start::<T, N>();
    let mut previous: Option<T> = None;

    for iter in 0..config.max_iter {
        let w = *a * v;
        let estimate = v.dot(&w);
        let norm = w.norm();

        if norm <= T::detection_threshold() {
            // v is in the null space: an exact eigenvector for 0
            log::debug!("power iteration: A·v vanished at step {iter}");
            return EigenPair {
                value: estimate,
                vector: v,
                converged: true,
                iterations: iter + 1,
            };
        }

        let next = w / norm;
        log::trace!("power iteration {iter}: estimate {estimate:e}");

        if let Some(prev) = previous {
            if (estimate - prev).abs() < config.tolerance {
                return EigenPair {
                    value: estimate,
                    vector: next,
                    converged: true,
                    iterations: iter + 1,
                };
            }
        }

        previous = Some(estimate);
        v = next;
    }

    EigenPair {
        value: previous.unwrap_or_else(T::zero),
        vector: v,
        converged: false,
        iterations: config.max_iter,
    }
}

/// All eigenvalues by the unshifted QR algorithm.
///
/// Each step factors `A_k = Q_k·R_k` and forms `A_{k+1} = R_k·Q_k`, while the
/// product of the `Q_k` is accumulated. The loop stops when the Frobenius
/// norm of the off-diagonal part of `A_k` drops below `config.tolerance`.
///
/// No shifts are applied, so convergence is linear in the ratio of
/// neighbouring eigenvalue magnitudes and may fail for close or complex
/// eigenvalues.
///
/// Reference: Golub & Van Loan (1996), *Matrix Computations*, §7.3.
///
/// # Complexity
/// O(n³) per iteration.
pub fn qr_algorithm<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
    config: &IterationConfig<T>,
) -> EigenResult<T, N> {
    let mut ak = *a;
    let mut q_total = Matrix::identity();
    let mut converged = false;
    let mut iterations = 0;

    for iter in 0..config.max_iter {
        let qr = qr_decompose(&ak);
        ak = qr.r() * qr.q();
        q_total = q_total * qr.q();
        iterations = iter + 1;

        let off_diag = off_diagonal_norm(&ak);
        log::trace!("QR algorithm {iter}: off-diagonal norm {off_diag:e}");

        if off_diag < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "QR algorithm did not converge in {} iterations (off-diagonal norm {:e})",
            config.max_iter,
            off_diagonal_norm(&ak)
        );
    }

    EigenResult {
        eigenvalues: ak.diag(),
        eigenvectors: q_total,
        converged,
        iterations,
    }
}

fn off_diagonal_norm<T: Scalar, const N: usize>(m: &Matrix<T, N, N>) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        for j in 0..N {
            if i != j {
                sum = sum + m[(i, j)] * m[(i, j)];
            }
        }
    }
    sum.sqrt()
}

/// `(x·A·x) / (x·x)`.
///
/// A zero `x` gives NaN.
#[inline]
pub fn rayleigh_quotient<T: Scalar, const N: usize>(a: &Matrix<T, N, N>, x: &Vector<T, N>) -> T {
    x.dot(&(*a * *x)) / x.dot(x)
}

/// Eigenpair nearest `sigma` by shifted inverse iteration.
///
/// `A − σI` is factored once; every step solves `(A − σI)·w = v` with the
/// stored factors and normalizes `w`. Consecutive iterates are sign-aligned
/// before the `‖v_new − v‖ < tolerance` test, since a negative shifted
/// eigenvalue flips the direction on every step.
///
/// If the shifted matrix is singular (`sigma` is an eigenvalue to within the
/// detection threshold) the loop is skipped and the Rayleigh quotient of the
/// start vector is returned with `converged == false`.
///
/// # Examples
/// ```
/// use u_linalg::{inverse_iteration, IterationConfig, Matrix};
/// let a: Matrix<f64, 3, 3> = Matrix::from_rows([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 5.0]]);
/// let pair = inverse_iteration(&a, 2.8, &IterationConfig::default());
/// assert!(pair.converged);
/// assert!((pair.value - 3.0).abs() < 1e-8);
/// ```
pub fn inverse_iteration<T: Scalar, const N: usize>(
    a: &Matrix<T, N, N>,
    sigma: T,
    config: &IterationConfig<T>,
) -> EigenPair<T, N> {
    let mut v = uniform_start::<T, N>();
    let lu = lu_decompose(&a.shift_diagonal(sigma));

    if lu.is_singular() {
        log::debug!("inverse iteration: A - {sigma:e}·I is singular, returning start estimate");
        return EigenPair {
            value: rayleigh_quotient(a, &v),
            vector: v,
            converged: false,
            iterations: 0,
        };
    }

    for iter in 0..config.max_iter {
        let Some(w) = lu.solve(&v) else {
            break;
        };
        let mut next = w.normalize();
        if next.dot(&v) < T::zero() {
            next = -next;
        }

        let delta = (next - v).norm();
        log::trace!("inverse iteration {iter}: step {delta:e}");

        if delta < config.tolerance {
            return EigenPair {
                value: rayleigh_quotient(a, &next),
                vector: next,
                converged: true,
                iterations: iter + 1,
            };
        }
        v = next;
    }

    EigenPair {
        value: rayleigh_quotient(a, &v),
        vector: v,
        converged: false,
        iterations: config.max_iter,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // B + Bᵀ + 10·I: symmetric with eigenvalues well away from zero
    fn symmetric_matrix() -> impl Strategy<Value = Matrix<f64, 4, 4>> {
        proptest::collection::vec(-1.0_f64..1.0, 16).prop_map(|data| {
            let b = Matrix::<f64, 4, 4>::from_slice(&data).expect("valid dimensions");
            b + b.transpose() + Matrix::<f64, 4, 4>::identity().scale(10.0)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn qr_algorithm_preserves_trace(a in symmetric_matrix()) {
            let config = IterationConfig::default().with_max_iter(200);
            let eig = qr_algorithm(&a, &config);
            let sum: f64 = eig.eigenvalues.iter().sum();
            prop_assert!((sum - a.trace()).abs() < 1e-8, "sum={sum}, trace={}", a.trace());
            let q = eig.eigenvectors;
            prop_assert!((q.transpose() * q).approx_eq(&Matrix::identity(), 1e-8));
        }

        #[test]
        fn rayleigh_quotient_within_diagonal_range(
            x in proptest::collection::vec(-10.0_f64..10.0, 3),
        ) {
            let x = Vector::<f64, 3>::from_slice(&x).expect("length 3");
            prop_assume!(x.norm() > 1e-3);
            let a = Matrix::from_rows([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 5.0]]);
            let rq = rayleigh_quotient(&a, &x);
            prop_assert!((2.0 - 1e-12..=5.0 + 1e-12).contains(&rq));
        }
    }
}
