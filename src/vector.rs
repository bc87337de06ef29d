//! Fixed-length dense vector.
//!
//! The length is a const generic, so vectors of different lengths are
//! different types and length mismatches are compile errors.
//!
//! # Examples
//!
//! ```
//! use u_linalg::Vector;
//!
//! let v = Vector::from_array([3.0, 4.0]);
//! assert_eq!(v.norm(), 5.0);
//! assert_eq!(v.dot(&v), 25.0);
//! ```

use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;

/// A dense vector of `N` scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Wraps an array.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Creates a vector from a slice.
    ///
    /// # Errors
    /// Returns `Err` if `data.len() != N`.
    ///
    /// # Examples
    /// ```
    /// use u_linalg::Vector;
    /// let v = Vector::<f64, 3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v[2], 3.0);
    /// assert!(Vector::<f64, 3>::from_slice(&[1.0]).is_err());
    /// ```
    pub fn from_slice(data: &[T]) -> LinalgResult<Self> {
        if data.len() != N {
            return Err(LinalgError::InvalidData {
                expected: N,
                got: data.len(),
            });
        }
        let mut v = Self::zeros();
        v.data.copy_from_slice(data);
        Ok(v)
    }

    /// The zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Standard basis vector `e_i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub fn basis(i: usize) -> Self {
        let mut v = Self::zeros();
        v.data[i] = T::one();
        v
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True when `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Unwraps into the backing array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Iterator over the components.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Inner product `self · other`.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// The zero vector has no direction; normalizing it divides by zero and
    /// yields NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    /// Applies `f` to every component.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        let mut out = *self;
        for x in out.data.iter_mut() {
            *x = f(*x);
        }
        out
    }

    /// Componentwise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
        self
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
        self
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, c: T) -> Self {
        self.map(|x| x * c)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, c: T) -> Self {
        self.map(|x| x / c)
    }
}

impl<T: Scalar, const N: usize> core::fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.4}")?;
        }
        write!(f, "]")
    }
}
