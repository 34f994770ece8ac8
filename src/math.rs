//! Pluggable numeric backend.
//!
//! Square roots and inverse trigonometry are injected at the call site so a
//! caller can swap in fixed-point or fast approximate math. Every method that
//! needs one has a `*_with` variant taking the provider and a plain variant
//! that uses [`StdMath`].

use num_traits::{Float, FloatConst};

use crate::Scalar;

/// Supplies square roots for norms and normalization.
pub trait SqrtProvider<T> {
    fn sqrt(&self, x: T) -> T;
}

/// Supplies the trigonometry used to build rotators from angles and to
/// extract angles back out of them.
pub trait TrigProvider<T: Scalar>: SqrtProvider<T> {
    fn sin(&self, x: T) -> T;
    fn cos(&self, x: T) -> T;
    fn asin(&self, x: T) -> T;
    fn acos(&self, x: T) -> T;

    /// √½, the threshold where angle extraction switches between `acos` and
    /// `asin`.
    fn sqrt_half(&self) -> T;

    /// τ/2 (that is, π)
    fn half_turn(&self) -> T {
        self.acos(-T::one())
    }
}

/// The platform's own `sqrt`, `sin`, `cos`, `asin` and `acos`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdMath;

impl<T: Float> SqrtProvider<T> for StdMath {
    #[inline]
    fn sqrt(&self, x: T) -> T {
        x.sqrt()
    }
}

impl<T: Float + FloatConst + Scalar> TrigProvider<T> for StdMath {
    #[inline]
    fn sin(&self, x: T) -> T {
        x.sin()
    }

    #[inline]
    fn cos(&self, x: T) -> T {
        x.cos()
    }

    #[inline]
    fn asin(&self, x: T) -> T {
        x.asin()
    }

    #[inline]
    fn acos(&self, x: T) -> T {
        x.acos()
    }

    #[inline]
    fn sqrt_half(&self) -> T {
        T::FRAC_1_SQRT_2()
    }

    #[inline]
    fn half_turn(&self) -> T {
        T::PI()
    }
}
