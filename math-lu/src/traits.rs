//! Scalar abstraction for dense matrix operations
//!
//! [`RealField`] abstracts over the floating-point types the decomposition runs on,
//! so the same code serves `f64` (the default everywhere in this crate) and `f32`.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types that can be used in matrix operations.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + Display + 'static
{
    /// Magnitude |x|
    fn norm(&self) -> Self;

    /// Create from an `f64` literal, rounding to the nearest representable value
    fn from_real(r: f64) -> Self;

    /// Multiplicative inverse (1/x)
    fn inv(&self) -> Self;

    /// Check if this is approximately zero
    fn is_zero_approx(&self, tol: Self) -> bool {
        self.norm() < tol
    }
}

impl RealField for f64 {
    #[inline]
    fn norm(&self) -> f64 {
        f64::abs(*self)
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        r
    }

    #[inline]
    fn inv(&self) -> Self {
        1.0 / *self
    }
}

impl RealField for f32 {
    #[inline]
    fn norm(&self) -> f32 {
        f32::abs(*self)
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        r as f32
    }

    #[inline]
    fn inv(&self) -> Self {
        1.0 / *self
    }
}
