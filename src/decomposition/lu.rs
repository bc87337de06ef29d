//! LU decomposition with partial pivoting.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::triangular::{backward_substitution, forward_substitution};
use crate::vector::Vector;

/// Factors of `P·A = L·U`.
///
/// `L` is unit lower-triangular, `U` upper-triangular, and the permutation is
/// stored as the sequence of source rows: row `i` of `P·A` is row
/// `permutation()[i]` of `A`.
///
/// When the factorization hits a pivot below the detection threshold it
/// stops, flags the result as singular and keeps the partial factors.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T, const N: usize> {
    l: Matrix<T, N, N>,
    u: Matrix<T, N, N>,
    perm: [usize; N],
    singular: bool,
}

/// LU decomposition with partial pivoting.
///
/// # Algorithm
/// For each column k, the row at or below k with the largest |U[i,k]| is
/// swapped into place (in U, in the computed part of L, and in the
/// permutation), then rows below k are eliminated and the multipliers stored
/// in L.
///
/// Reference: Golub & Van Loan (1996), *Matrix Computations*, Algorithm 3.4.1.
///
/// # Complexity
/// O(2n³/3).
///
/// # Examples
/// ```
/// use u_linalg::{lu_decompose, Matrix};
/// let a = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
/// let lu = lu_decompose(&a);
/// assert!(!lu.is_singular());
/// let pa = lu.permutation_matrix() * a;
/// assert!((lu.l() * lu.u()).approx_eq(&pa, 1e-10));
/// ```
pub fn lu_decompose<T: Scalar, const N: usize>(a: &Matrix<T, N, N>) -> LuDecomposition<T, N> {
    let mut l = Matrix::identity();
    let mut u = *a;
    let mut perm = [0usize; N];
    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }
    let threshold = T::detection_threshold();

    for k in 0..N {
        // Partial pivoting
        let mut max_val = u[(k, k)].abs();
        let mut pivot_row = k;
        for i in (k + 1)..N {
            let v = u[(i, k)].abs();
            if v > max_val {
                max_val = v;
                pivot_row = i;
            }
        }

        if max_val < threshold {
            log::debug!("LU: pivot {max_val:e} in column {k} below threshold, matrix is singular");
            return LuDecomposition {
                l,
                u,
                perm,
                singular: true,
            };
        }

        if pivot_row != k {
            u.swap_rows(k, pivot_row);
            // only the multipliers already computed move with the row
            for j in 0..k {
                let tmp = l[(k, j)];
                l[(k, j)] = l[(pivot_row, j)];
                l[(pivot_row, j)] = tmp;
            }
            perm.swap(k, pivot_row);
        }

        let pivot = u[(k, k)];
        for i in (k + 1)..N {
            let factor = u[(i, k)] / pivot;
            l[(i, k)] = factor;
            u[(i, k)] = T::zero();
            for j in (k + 1)..N {
                u[(i, j)] = u[(i, j)] - factor * u[(k, j)];
            }
        }
    }

    LuDecomposition {
        l,
        u,
        perm,
        singular: false,
    }
}

impl<T: Scalar, const N: usize> LuDecomposition<T, N> {
    /// Unit lower-triangular factor.
    #[inline]
    pub fn l(&self) -> Matrix<T, N, N> {
        self.l
    }

    /// Upper-triangular factor.
    #[inline]
    pub fn u(&self) -> Matrix<T, N, N> {
        self.u
    }

    /// Row permutation: row `i` of `P·A` is row `permutation()[i]` of `A`.
    #[inline]
    pub fn permutation(&self) -> &[usize; N] {
        &self.perm
    }

    /// True when a pivot fell below the detection threshold.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// The permutation as a matrix `P` with `P·A = L·U`.
    pub fn permutation_matrix(&self) -> Matrix<T, N, N> {
        let mut p = Matrix::zeros();
        for (i, &src) in self.perm.iter().enumerate() {
            p[(i, src)] = T::one();
        }
        p
    }

    /// Sign of the permutation: +1 for an even number of swaps, -1 for odd.
    pub fn permutation_sign(&self) -> T {
        let mut visited = [false; N];
        let mut even = true;
        for start in 0..N {
            if visited[start] {
                continue;
            }
            // a cycle of length m is m - 1 transpositions
            let mut len = 0usize;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.perm[i];
                len += 1;
            }
            if len % 2 == 0 {
                even = !even;
            }
        }
        if even {
            T::one()
        } else {
            -T::one()
        }
    }

    /// det(A) = sign(P) · Πᵢ U[i,i], or zero when singular.
    ///
    /// # Complexity
    /// O(n) on top of the factorization.
    pub fn determinant(&self) -> T {
        if self.singular {
            return T::zero();
        }
        (0..N).fold(self.permutation_sign(), |acc, i| acc * self.u[(i, i)])
    }

    /// Solves A·x = b with the stored factors.
    ///
    /// Returns `None` if the factorization is singular.
    pub fn solve(&self, b: &Vector<T, N>) -> Option<Vector<T, N>> {
        if self.singular {
            return None;
        }
        let mut pb = Vector::zeros();
        for (i, &src) in self.perm.iter().enumerate() {
            pb[i] = b[src];
        }
        let y = forward_substitution(&self.l, &pb);
        Some(backward_substitution(&self.u, &y))
    }

    /// A⁻¹, assembled column by column from N solves against the stored
    /// factors.
    ///
    /// Returns `None` if the factorization is singular.
    pub fn inverse(&self) -> Option<Matrix<T, N, N>> {
        if self.singular {
            return None;
        }
        let mut inv = Matrix::zeros();
        for j in 0..N {
            // P·e_j
            let mut e = Vector::zeros();
            for (i, &src) in self.perm.iter().enumerate() {
                if src == j {
                    e[i] = T::one();
                }
            }
            let y = forward_substitution(&self.l, &e);
            let x = backward_substitution(&self.u, &y);
            inv.set_column(j, &x);
        }
        Some(inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_reconstructs<const N: usize>(a: &Matrix<f64, N, N>, lu: &LuDecomposition<f64, N>) {
        let prod = lu.l() * lu.u();
        for i in 0..N {
            for j in 0..N {
                assert_abs_diff_eq!(prod[(i, j)], a[(lu.permutation()[i], j)], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_lu_3x3() {
        let a = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
        let lu = lu_decompose(&a);
        assert!(!lu.is_singular());
        assert_reconstructs(&a, &lu);
        // largest entry of column 0 is pivoted first
        assert_eq!(lu.permutation()[0], 2);
    }

    #[test]
    fn test_factor_shapes() {
        let a: Matrix<f64, 3, 3> = Matrix::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let lu = lu_decompose(&a);
        let (l, u) = (lu.l(), lu.u());
        for i in 0..3 {
            assert_eq!(l[(i, i)], 1.0);
            for j in (i + 1)..3 {
                assert_eq!(l[(i, j)], 0.0);
                assert_eq!(u[(j, i)], 0.0);
            }
        }
        // partial pivoting keeps multipliers bounded by 1
        for i in 0..3 {
            for j in 0..i {
                assert!(l[(i, j)].abs() <= 1.0);
            }
        }
    }

    #[test]
    fn test_permutation_is_bijection() {
        let a = Matrix::from_rows([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 9.0]]);
        let lu = lu_decompose(&a);
        let mut seen = lu.permutation().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
        let pa = lu.permutation_matrix() * a;
        assert!((lu.l() * lu.u()).approx_eq(&pa, 1e-10));
    }

    #[test]
    fn test_singular_stops_early() {
        let a = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        let lu = lu_decompose(&a);
        assert!(lu.is_singular());
        assert!(lu.solve(&Vector::from_array([1.0, 2.0])).is_none());
        assert!(lu.inverse().is_none());
        assert_eq!(lu.determinant(), 0.0);
    }

    #[test]
    fn test_zero_matrix_is_singular() {
        let lu = lu_decompose(&Matrix::<f64, 3, 3>::zeros());
        assert!(lu.is_singular());
    }

    #[test]
    fn test_identity() {
        let eye = Matrix::<f64, 4, 4>::identity();
        let lu = lu_decompose(&eye);
        assert_eq!(lu.l(), eye);
        assert_eq!(lu.u(), eye);
        assert_eq!(lu.permutation(), &[0, 1, 2, 3]);
        assert_eq!(lu.permutation_sign(), 1.0);
    }

    #[test]
    fn test_determinant() {
        let a = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]]);
        assert_abs_diff_eq!(lu_decompose(&a).determinant(), 4.0, epsilon = 1e-10);

        let m = Matrix::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_abs_diff_eq!(lu_decompose(&m).determinant(), -306.0, epsilon = 1e-8);
    }

    #[test]
    fn test_permutation_sign_single_swap() {
        let a = Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        let lu = lu_decompose(&a);
        assert_eq!(lu.permutation(), &[1, 0]);
        assert_eq!(lu.permutation_sign(), -1.0);
        assert_abs_diff_eq!(lu.determinant(), -1.0);
    }

    #[test]
    fn test_solve_and_inverse() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let lu = lu_decompose(&a);
        let b = Vector::from_array([6.0, 5.0, 11.0]);
        let x = lu.solve(&b).unwrap();
        assert!(x.approx_eq(&Vector::from_array([1.0, 1.0, 1.0]), 1e-10));

        let inv = lu.inverse().unwrap();
        assert!((a * inv).approx_eq(&Matrix::identity(), 1e-10));
    }
}
