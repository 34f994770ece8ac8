//! The scalar field every vector, complex number and matrix is generic over.

use std::fmt::Debug;
use std::ops::Neg;

use num_traits::Num;

/// A signed scalar field: `f32`, `f64`, or any signed integer.
///
/// Operations that need a square root or trigonometry additionally ask for
/// [`num_traits::Float`], or take an explicit [`crate::SqrtProvider`] /
/// [`crate::TrigProvider`].
pub trait Scalar: Copy + PartialOrd + Debug + Num + Neg<Output = Self> {
    /// Absolute value, defined through ordering so integers and fixed-point
    /// types work too.
    #[inline]
    fn magnitude(self) -> Self {
        if self < Self::zero() { -self } else { self }
    }

    /// `2` in this field
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// False for NaN and infinities, true for every integer.
    #[inline]
    fn is_finite_value(self) -> bool {
        (self - self).is_zero()
    }

    /// The larger of two magnitudes. Both must be finite.
    #[inline]
    fn max_magnitude(self, other: Self) -> Self {
        let (a, b) = (self.magnitude(), other.magnitude());
        if a < b { b } else { a }
    }
}

impl<T> Scalar for T where T: Copy + PartialOrd + Debug + Num + Neg<Output = T> {}
