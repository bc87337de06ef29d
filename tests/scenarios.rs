//! End-to-end scenarios through the public API.

use approx::assert_abs_diff_eq;
use u_linalg::{
    cholesky_decompose, lu_decompose, power_iteration, qr_algorithm, solve, IterationConfig,
    Matrix, Vector,
};

fn lu_matrix() -> Matrix<f64, 3, 3> {
    Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]])
}

#[test]
fn lu_reconstructs_permuted_input() {
    let a = lu_matrix();
    let lu = lu_decompose(&a);
    assert!(!lu.is_singular());

    let (l, u) = (lu.l(), lu.u());
    let prod = l * u;
    let perm = lu.permutation();
    for i in 0..3 {
        assert_abs_diff_eq!(l[(i, i)], 1.0);
        for j in 0..3 {
            assert_abs_diff_eq!(prod[(i, j)], a[(perm[i], j)], epsilon = 1e-10);
        }
    }
}

#[test]
fn solve_recovers_right_hand_side() {
    let a = lu_matrix();
    let b = Vector::from_array([4.0, 10.0, 24.0]);
    let x = solve(&a, &b).expect("non-singular");
    let ax = a * x;
    for i in 0..3 {
        assert_abs_diff_eq!(ax[i], b[i], epsilon = 1e-10);
    }
}

#[test]
fn cholesky_reconstructs_input() {
    let a = Matrix::from_rows([[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]);
    let chol = cholesky_decompose(&a);
    assert!(chol.is_positive_definite());
    let l = chol.l();
    let llt = l * l.transpose();
    for i in 0..3 {
        for j in 0..3 {
            assert_abs_diff_eq!(llt[(i, j)], a[(i, j)], epsilon = 1e-8);
        }
    }
}

#[test]
fn qr_algorithm_eigenpairs_satisfy_eigen_equation() {
    let a = Matrix::from_rows([[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
    let eig = qr_algorithm(&a, &IterationConfig::default());
    assert!(eig.converged);

    for i in 0..3 {
        let v = eig.eigenvectors.column(i);
        let av = a * v;
        for k in 0..3 {
            assert_abs_diff_eq!(av[k], eig.eigenvalues[i] * v[k], epsilon = 1e-6);
        }
    }

    // the dominant pair agrees with power iteration
    let config = IterationConfig::new(1000, 1e-12).expect("valid config");
    let dominant = power_iteration(&a, &config);
    assert!(dominant.converged);
    let largest = eig
        .eigenvalues
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    assert_abs_diff_eq!(dominant.value, largest, epsilon = 1e-8);
}
