//! Unit complex numbers used as pure rotations.
//!
//! `Rotator2` is to [`Complex`] what [`Direction2`] is to [`Vector2`]: the
//! same layout, plus the promise that the modulus is 1. Multiplying by a
//! rotator turns a vector without changing its length. A direction read as a
//! rotator is the rotation taking [`Direction2::right`] onto it, and the two
//! views borrow as each other without copying.

use std::fmt;
use std::ops::{Deref, Mul, MulAssign};

use num_traits::{Float, FloatConst};

use crate::errors::MathError;
use crate::layout;
use crate::math::{SqrtProvider, StdMath, TrigProvider};
use crate::{Complex, Direction2, RotMatrix2x2, Scalar, Vector2};

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotator2<T> {
    value: Complex<T>,
}

impl<T> Rotator2<T> {
    /// Trusted construction. `value` must already have modulus 1.
    #[inline]
    pub(crate) const fn new_unchecked(value: Complex<T>) -> Self {
        Rotator2 { value }
    }
}

impl<T: Scalar> Rotator2<T> {
    /// No rotation
    pub fn identity() -> Self {
        Self::new_unchecked(Complex::one())
    }

    /// +90°
    pub fn orthogonal_left() -> Self {
        Self::new_unchecked(Complex::i())
    }

    /// −90°
    pub fn orthogonal_right() -> Self {
        Self::new_unchecked(Complex::new(T::zero(), -T::one()))
    }

    /// 180°
    pub fn turn_around() -> Self {
        Self::new_unchecked(Complex::new(-T::one(), T::zero()))
    }

    /// `(cos θ, sin θ)`, with the trigonometry supplied by `math`
    pub fn from_radians_with<M: TrigProvider<T>>(radians: T, math: &M) -> Self {
        Self::new_unchecked(Complex::new(math.cos(radians), math.sin(radians)))
    }

    /// Rotation turning `from` onto `to`. Both are normalized first, so any
    /// finite magnitude works. Fails if either vector is zero or not finite.
    pub fn from_to_with<M: SqrtProvider<T>>(
        from: &Vector2<T>,
        to: &Vector2<T>,
        math: &M,
    ) -> Result<Self, MathError> {
        let from = from.normalized_with(math)?;
        let to = to.normalized_with(math)?;
        Ok(Self::between_with(from, to, math))
    }

    /// Rotation turning direction `from` onto direction `to`. Never fails;
    /// the product is repaired to absorb rounding.
    pub fn between_with<M: SqrtProvider<T>>(from: Direction2<T>, to: Direction2<T>, math: &M) -> Self {
        let mut rotator = *to.as_rotator() * from.as_rotator().inversed();
        rotator.repair_with(math);
        rotator
    }

    #[inline]
    pub fn re(&self) -> T {
        self.value.re
    }

    #[inline]
    pub fn im(&self) -> T {
        self.value.im
    }

    /// Read-only view of the complex value
    #[inline]
    pub fn as_complex(&self) -> &Complex<T> {
        &self.value
    }

    #[inline]
    pub fn into_complex(self) -> Complex<T> {
        self.value
    }

    /// Where this rotation sends [`Direction2::right`]
    #[inline]
    pub fn into_direction(self) -> Direction2<T> {
        *self.as_direction()
    }

    /// Same as [`Rotator2::into_direction`], without copying
    #[inline]
    pub fn as_direction(&self) -> &Direction2<T> {
        // SAFETY: both wrap a #[repr(C)] { T, T } transparently and carry the
        // same unit-norm invariant
        unsafe { layout::cast_ref(self) }
    }

    #[inline]
    pub fn as_direction_mut(&mut self) -> &mut Direction2<T> {
        // SAFETY: as for `as_direction`
        unsafe { layout::cast_mut(self) }
    }

    /// The reverse rotation. For a unit value this is the conjugate, so no
    /// division is involved.
    #[inline]
    pub fn inversed(&self) -> Self {
        Self::new_unchecked(self.value.conjugate())
    }

    pub fn inverse(&mut self) -> &mut Self {
        *self = self.inversed();
        self
    }

    /// The same rotation as a matrix acting on column vectors
    pub fn make_matrix(&self) -> RotMatrix2x2<T> {
        RotMatrix2x2::new_unchecked(self.value.make_matrix())
    }

    #[inline]
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        self.value.compare(&other.value, epsilon2)
    }

    /// See [`Direction2::repair_fast`]
    pub fn repair_fast(&mut self) -> &mut Self {
        self.as_direction_mut().repair_fast();
        self
    }

    pub fn repair_with<M: SqrtProvider<T>>(&mut self, math: &M) -> &mut Self {
        self.as_direction_mut().repair_with(math);
        self
    }

    /// Signed rotation angle in `[−π, π)`.
    ///
    /// Near the real axis `asin(im)` is well conditioned, near the imaginary
    /// axis `acos(re)` is; the cut between them is at `|re| = √½`. A value
    /// that rounds up to `π` is reported as `−π`.
    pub fn angle_with<M: TrigProvider<T>>(&self, math: &M) -> T {
        let (re, im) = (self.re(), self.im());
        if re.magnitude() < math.sqrt_half() {
            let angle = math.acos(re);
            if im < T::zero() { -angle } else { angle }
        } else {
            let angle = math.asin(im);
            if re < T::zero() {
                let half_turn = math.half_turn();
                if im > T::zero() {
                    let angle = half_turn - angle;
                    if angle < half_turn { angle } else { -half_turn }
                } else {
                    -half_turn - angle
                }
            } else {
                angle
            }
        }
    }
}

impl<T: Scalar + Float + FloatConst> Rotator2<T> {
    pub fn from_radians(radians: T) -> Self {
        Self::from_radians_with(radians, &StdMath)
    }

    pub fn angle(&self) -> T {
        self.angle_with(&StdMath)
    }
}

impl<T: Scalar + Float> Rotator2<T> {
    pub fn from_to(from: &Vector2<T>, to: &Vector2<T>) -> Result<Self, MathError> {
        Self::from_to_with(from, to, &StdMath)
    }

    pub fn between(from: Direction2<T>, to: Direction2<T>) -> Self {
        Self::between_with(from, to, &StdMath)
    }

    /// Exact renormalization
    pub fn repair(&mut self) -> &mut Self {
        self.repair_with(&StdMath)
    }
}

impl<T> Deref for Rotator2<T> {
    type Target = Complex<T>;
    fn deref(&self) -> &Complex<T> {
        &self.value
    }
}

impl<T> From<Rotator2<T>> for Complex<T> {
    fn from(rotator: Rotator2<T>) -> Self {
        rotator.value
    }
}

impl<T: Scalar> Mul for Rotator2<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new_unchecked(self.value * rhs.value)
    }
}

impl<T: Scalar> Mul<Direction2<T>> for Rotator2<T> {
    type Output = Direction2<T>;
    fn mul(self, rhs: Direction2<T>) -> Direction2<T> {
        rhs * self
    }
}

/// Rotate a plain vector; its length is kept
impl<T: Scalar> Mul<Vector2<T>> for Rotator2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        rhs * self.value
    }
}

impl<T: Scalar> MulAssign for Rotator2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Rotator2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
