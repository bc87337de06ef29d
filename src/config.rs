//! Tuning parameters for the iterative eigenvalue routines.

use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;

/// Iteration limit and convergence tolerance.
///
/// The defaults are 1000 iterations and [`Scalar::DEFAULT_TOLERANCE`].
///
/// # Examples
///
/// ```
/// use u_linalg::IterationConfig;
///
/// let config = IterationConfig::<f64>::default().with_max_iter(200);
/// assert_eq!(config.max_iter, 200);
/// assert_eq!(config.tolerance, 1e-10);
///
/// assert!(IterationConfig::new(0, 1e-8).is_err());
/// assert!(IterationConfig::new(10, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationConfig<T> {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// Convergence threshold, compared against the routine's own measure.
    pub tolerance: T,
}

impl<T: Scalar> IterationConfig<T> {
    /// Iteration limit used by [`Default`].
    pub const DEFAULT_MAX_ITER: usize = 1000;

    /// Creates a validated configuration.
    ///
    /// # Errors
    /// `ZeroIterations` if `max_iter == 0`; `InvalidTolerance` if `tolerance`
    /// is not finite and strictly positive.
    pub fn new(max_iter: usize, tolerance: T) -> LinalgResult<Self> {
        let config = Self {
            max_iter,
            tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the same constraints as [`IterationConfig::new`].
    ///
    /// The builder setters and the public fields are unchecked; call this
    /// after modifying a configuration that came from untrusted input.
    ///
    /// # Errors
    /// See [`IterationConfig::new`].
    pub fn validate(&self) -> LinalgResult<()> {
        if self.max_iter == 0 {
            return Err(LinalgError::ZeroIterations);
        }
        if !self.tolerance.is_finite() || self.tolerance <= T::zero() {
            return Err(LinalgError::InvalidTolerance {
                value: self.tolerance.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Sets the iteration limit. Unchecked; see [`IterationConfig::validate`].
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance. Unchecked; see
    /// [`IterationConfig::validate`].
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl<T: Scalar> Default for IterationConfig<T> {
    fn default() -> Self {
        Self {
            max_iter: Self::DEFAULT_MAX_ITER,
            tolerance: T::DEFAULT_TOLERANCE,
        }
    }
}
