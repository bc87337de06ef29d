//! Fixed-size dense matrix.
//!
//! A row-major matrix whose dimensions are const generics, with the
//! elementwise arithmetic, products and accessors the decompositions build on.
//!
//! # Design
//!
//! - **Row-major storage**: `data[i][j] = A[i, j]`
//! - **Compile-time dimensions**: `Matrix<T, R, C> * Matrix<T, C, K>` only
//!   type-checks when the inner dimensions agree
//! - **Stack storage**: `Matrix` is `Copy`; every operation returns a fresh value
//! - **Fallible construction only at the slice boundary**: building from
//!   runtime-sized data returns `Result<_, LinalgError>`
//!
//! # Examples
//!
//! ```
//! use u_linalg::Matrix;
//!
//! let a = Matrix::from_rows([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//! let b = a.transpose();
//! let c = a * b;
//! assert_eq!(c[(0, 0)], 5.0);
//! assert_eq!(c[(1, 1)], 25.0);
//! ```

use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;
use crate::vector::Vector;

/// A dense `R`×`C` matrix stored in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from an array of rows.
    ///
    /// # Examples
    /// ```
    /// use u_linalg::Matrix;
    /// let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.get(0, 2), 3.0);
    /// assert_eq!(m.get(1, 0), 4.0);
    /// ```
    #[inline]
    pub fn from_rows(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// Creates a matrix from raw data in row-major order.
    ///
    /// # Errors
    /// Returns `Err` if `data.len() != R * C`.
    ///
    /// # Examples
    /// ```
    /// use u_linalg::Matrix;
    /// let m = Matrix::<f64, 2, 3>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.get(1, 2), 6.0);
    /// assert!(Matrix::<f64, 2, 2>::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(data: &[T]) -> LinalgResult<Self> {
        if data.len() != R * C {
            return Err(LinalgError::InvalidData {
                expected: R * C,
                got: data.len(),
            });
        }
        let mut m = Self::zeros();
        for (i, row) in m.data.iter_mut().enumerate() {
            row.copy_from_slice(&data[i * C..(i + 1) * C]);
        }
        Ok(m)
    }

    /// Creates a matrix from row slices.
    ///
    /// # Errors
    /// Returns `InvalidData` if there are not exactly `R` rows and
    /// `RaggedRows` if any row does not have exactly `C` entries.
    pub fn from_row_slices(rows: &[&[T]]) -> LinalgResult<Self> {
        if rows.len() != R {
            return Err(LinalgError::InvalidData {
                expected: R,
                got: rows.len(),
            });
        }
        let mut m = Self::zeros();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != C {
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: C,
                    got: row.len(),
                });
            }
            m.data[i].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Creates a matrix whose columns are the given vectors.
    pub fn from_columns(columns: [Vector<T, R>; C]) -> Self {
        let mut m = Self::zeros();
        for (j, col) in columns.iter().enumerate() {
            m.set_column(j, col);
        }
        m
    }

    /// Creates a zero matrix.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Returns the element at (row, col).
    ///
    /// # Panics
    /// Panics if indices are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row][col]
    }

    /// Sets the element at (row, col).
    ///
    /// # Panics
    /// Panics if indices are out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row][col] = value;
    }

    /// Returns a row as a vector.
    #[inline]
    pub fn row(&self, row: usize) -> Vector<T, C> {
        Vector::from_array(self.data[row])
    }

    /// Returns a column as a vector.
    pub fn column(&self, col: usize) -> Vector<T, R> {
        let mut v = Vector::zeros();
        for i in 0..R {
            v[i] = self.data[i][col];
        }
        v
    }

    /// Overwrites a column.
    pub fn set_column(&mut self, col: usize, v: &Vector<T, R>) {
        for i in 0..R {
            self.data[i][col] = v[i];
        }
    }

    /// Row-major view of the elements.
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            self.data.swap(a, b);
        }
    }

    /// Applies `f` to every element.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        let mut out = *self;
        for x in out.data.iter_mut().flat_map(|row| row.iter_mut()) {
            *x = f(*x);
        }
        out
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Transpose: returns Aᵀ.
    ///
    /// # Examples
    /// ```
    /// use u_linalg::Matrix;
    /// let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = m.transpose();
    /// assert_eq!(t.rows(), 3);
    /// assert_eq!(t.cols(), 2);
    /// assert_eq!(t.get(0, 1), 4.0);
    /// ```
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut result = Matrix::<T, C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                result.data[j][i] = self.data[i][j];
            }
        }
        result
    }

    /// Scalar multiplication: c · A.
    pub fn scale(&self, c: T) -> Self {
        self.map(|x| c * x)
    }

    /// Frobenius norm: ‖A‖_F = √(Σᵢⱼ aᵢⱼ²).
    pub fn frobenius_norm(&self) -> T {
        self.data
            .iter()
            .flat_map(|row| row.iter())
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// Elementwise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.data
            .iter()
            .flat_map(|row| row.iter())
            .zip(other.data.iter().flat_map(|row| row.iter()))
            .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Creates an identity matrix.
    ///
    /// # Examples
    /// ```
    /// use u_linalg::Matrix;
    /// let eye = Matrix::<f64, 3, 3>::identity();
    /// assert_eq!(eye.get(0, 0), 1.0);
    /// assert_eq!(eye.get(0, 1), 0.0);
    /// assert_eq!(eye.get(2, 2), 1.0);
    /// ```
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Returns the diagonal elements.
    pub fn diag(&self) -> Vector<T, N> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = self.data[i][i];
        }
        v
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.data[i][i])
    }

    /// Checks whether the matrix is symmetric within tolerance.
    pub fn is_symmetric(&self, tol: T) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if (self.data[i][j] - self.data[j][i]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `A - σI`.
    pub fn shift_diagonal(&self, sigma: T) -> Self {
        let mut m = *self;
        for i in 0..N {
            m.data[i][i] = m.data[i][i] - sigma;
        }
        m
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}

// ============================================================================
// Arithmetic operators
// ============================================================================

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (a, &b) in row.iter_mut().zip(rhs_row.iter()) {
                *a = *a + b;
            }
        }
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (a, &b) in row.iter_mut().zip(rhs_row.iter()) {
                *a = *a - b;
            }
        }
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, c: T) -> Self {
        self.scale(c)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    fn div(self, c: T) -> Self {
        self.map(|x| x / c)
    }
}

/// Matrix multiplication: A · B.
///
/// Uses i-k-j loop order for better cache locality on row-major storage.
impl<T: Scalar, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    fn mul(self, other: Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut result = Matrix::<T, R, K>::zeros();
        for i in 0..R {
            for k in 0..C {
                let a_ik = self.data[i][k];
                for j in 0..K {
                    result.data[i][j] = result.data[i][j] + a_ik * other.data[k][j];
                }
            }
        }
        result
    }
}

/// Matrix-vector multiplication: A · v.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        let mut result = Vector::zeros();
        for (i, row) in self.data.iter().enumerate() {
            result[i] = Vector::from_array(*row).dot(&v);
        }
        result
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Scalar, const R: usize, const C: usize> core::fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for row in self.data.iter() {
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x:>10.4}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
