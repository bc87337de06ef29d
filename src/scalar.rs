//! Numeric domain shared by every container and routine.

use core::fmt::{Debug, Display, LowerExp};
use num_traits::{Float, FromPrimitive};

/// Real floating-point scalar usable by the decompositions.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar:
    Float + FromPrimitive + Debug + Display + LowerExp + Send + Sync + 'static
{
    /// Magnitude below which a pivot, residual norm or Cholesky radicand is
    /// treated as zero: machine epsilon times 100.
    const DETECTION_THRESHOLD: Self;

    /// Default convergence tolerance for iterative routines.
    const DEFAULT_TOLERANCE: Self;

    /// Shorthand for [`Scalar::DETECTION_THRESHOLD`] in generic code.
    #[inline]
    fn detection_threshold() -> Self {
        Self::DETECTION_THRESHOLD
    }
}

impl Scalar for f64 {
    const DETECTION_THRESHOLD: Self = f64::EPSILON * 100.0;
    const DEFAULT_TOLERANCE: Self = 1e-10;
}

impl Scalar for f32 {
    const DETECTION_THRESHOLD: Self = f32::EPSILON * 100.0;
    // 1e-10 is below f32 resolution near 1.0
    const DEFAULT_TOLERANCE: Self = 1e-6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_threshold() {
        assert_eq!(f64::detection_threshold(), f64::EPSILON * 100.0);
        assert_eq!(f32::detection_threshold(), f32::EPSILON * 100.0);
    }

    #[test]
    fn test_default_tolerance() {
        assert_eq!(<f64 as Scalar>::DEFAULT_TOLERANCE, 1e-10);
        assert!(<f32 as Scalar>::DEFAULT_TOLERANCE > f32::EPSILON);
    }
}
