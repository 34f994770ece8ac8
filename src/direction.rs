//! Unit-length directions.
//!
//! A [`Direction2`] is a [`Vector2`] known to have length 1. There is no
//! public constructor taking an arbitrary vector: values come from the named
//! constants, from [`Vector2::normalized`], or from operations that keep the
//! length (negation, quarter turns, multiplication by a [`Rotator2`]).
//!
//! Floating point drift is not corrected automatically. Long chains of
//! rotations should call [`Direction2::repair_fast`] or
//! [`Direction2::repair`] from time to time.

use std::fmt;
use std::ops::{Deref, Mul, MulAssign, Neg};

use num_traits::Float;

use crate::layout;
use crate::log::warn;
use crate::math::{SqrtProvider, StdMath};
use crate::{Rotator2, Scalar, Vector2, Vector3};

/// Unit vector in the plane
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction2<T> {
    coordinates: Vector2<T>,
}

impl<T> Direction2<T> {
    /// Trusted construction. `vector` must already have unit length.
    #[inline]
    pub(crate) const fn new_unchecked(vector: Vector2<T>) -> Self {
        Direction2 { coordinates: vector }
    }

    /// Trusted reborrow of a unit-length vector as a direction.
    #[inline]
    pub(crate) fn from_vector_ref_unchecked(vector: &Vector2<T>) -> &Self {
        // SAFETY: #[repr(transparent)] over Vector2<T>; unit length is the
        // caller's contract
        unsafe { layout::cast_ref(vector) }
    }
}

impl<T: Scalar> Direction2<T> {
    pub fn up() -> Self {
        Self::new_unchecked(Vector2::up())
    }

    /// Same as [`Direction2::up`]
    pub fn forward() -> Self {
        Self::up()
    }

    pub fn down() -> Self {
        Self::new_unchecked(Vector2::down())
    }

    /// Same as [`Direction2::down`]
    pub fn back() -> Self {
        Self::down()
    }

    pub fn right() -> Self {
        Self::new_unchecked(Vector2::right())
    }

    pub fn left() -> Self {
        Self::new_unchecked(Vector2::left())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coordinates.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coordinates.y
    }

    /// Read-only view of the coordinates
    #[inline]
    pub fn as_vector(&self) -> &Vector2<T> {
        &self.coordinates
    }

    #[inline]
    pub fn into_vector(self) -> Vector2<T> {
        self.coordinates
    }

    /// View as the rotator that turns [`Direction2::right`] onto this
    /// direction, without copying
    #[inline]
    pub fn as_rotator(&self) -> &Rotator2<T> {
        // SAFETY: both wrap a #[repr(C)] { T, T } transparently and carry the
        // same unit-norm invariant
        unsafe { layout::cast_ref(self) }
    }

    #[inline]
    pub fn as_rotator_mut(&mut self) -> &mut Rotator2<T> {
        // SAFETY: as for `as_rotator`
        unsafe { layout::cast_mut(self) }
    }

    /// Rotated by +90°
    #[inline]
    pub fn orthogonal_left(&self) -> Self {
        Self::new_unchecked(self.coordinates.orthogonal_left())
    }

    /// Rotated by −90°
    #[inline]
    pub fn orthogonal_right(&self) -> Self {
        Self::new_unchecked(self.coordinates.orthogonal_right())
    }

    /// `‖self − other‖² < epsilon2`
    #[inline]
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        self.coordinates.compare(&other.coordinates, epsilon2)
    }

    /// Exact renormalization, with the square root supplied by `math`.
    pub fn repair_with<M: SqrtProvider<T>>(&mut self, math: &M) -> &mut Self {
        self.coordinates = self.coordinates.unit_scaled_with(math);
        self
    }

    /// One Newton step towards unit length: `v * (1.5 − ‖v‖²/2)`.
    ///
    /// Cheap, and accurate for the small drift left by a few thousand
    /// compositions. Diverges for vectors far from unit length.
    pub fn repair_fast(&mut self) -> &mut Self {
        self.coordinates *= newton_factor(self.coordinates.length_squared());
        self
    }
}

/// `1.5 − ‖v‖²/2`, warning when `‖v‖²` is too far from 1 for the step to
/// converge.
fn newton_factor<T: Scalar>(length_squared: T) -> T {
    let two = T::two();
    let three_halves = (two + T::one()) / two;
    if (length_squared - T::one()).magnitude() > T::one() / two {
        warn!(length_squared = ?length_squared, "fast repair applied far from unit length");
    }
    three_halves - length_squared / two
}

impl<T: Scalar + Float> Direction2<T> {
    /// Exact renormalization `v / ‖v‖`. Always safe, costs a square root.
    pub fn repair(&mut self) -> &mut Self {
        self.repair_with(&StdMath)
    }
}

impl<T> Deref for Direction2<T> {
    type Target = Vector2<T>;
    fn deref(&self) -> &Vector2<T> {
        &self.coordinates
    }
}

impl<T> AsRef<Vector2<T>> for Direction2<T> {
    fn as_ref(&self) -> &Vector2<T> {
        &self.coordinates
    }
}

impl<T> From<Direction2<T>> for Vector2<T> {
    fn from(direction: Direction2<T>) -> Self {
        direction.coordinates
    }
}

impl<T: Scalar> Neg for Direction2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new_unchecked(-self.coordinates)
    }
}

/// Rotate by a unit rotator; the result is again a direction
impl<T: Scalar> Mul<Rotator2<T>> for Direction2<T> {
    type Output = Self;
    fn mul(self, rhs: Rotator2<T>) -> Self {
        Self::new_unchecked(self.coordinates * *rhs.as_complex())
    }
}

impl<T: Scalar> MulAssign<Rotator2<T>> for Direction2<T> {
    fn mul_assign(&mut self, rhs: Rotator2<T>) {
        *self = *self * rhs;
    }
}

impl<T: fmt::Display> fmt::Display for Direction2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coordinates, f)
    }
}

/// Unit vector in space
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction3<T> {
    coordinates: Vector3<T>,
}

impl<T> Direction3<T> {
    /// Trusted construction. `vector` must already have unit length.
    #[inline]
    pub(crate) const fn new_unchecked(vector: Vector3<T>) -> Self {
        Direction3 { coordinates: vector }
    }
}

impl<T: Scalar> Direction3<T> {
    pub fn up() -> Self {
        Self::new_unchecked(Vector3::up())
    }

    pub fn down() -> Self {
        Self::new_unchecked(Vector3::down())
    }

    pub fn right() -> Self {
        Self::new_unchecked(Vector3::right())
    }

    pub fn left() -> Self {
        Self::new_unchecked(Vector3::left())
    }

    pub fn forward() -> Self {
        Self::new_unchecked(Vector3::forward())
    }

    pub fn back() -> Self {
        Self::new_unchecked(Vector3::back())
    }

    #[inline]
    pub fn as_vector(&self) -> &Vector3<T> {
        &self.coordinates
    }

    #[inline]
    pub fn into_vector(self) -> Vector3<T> {
        self.coordinates
    }

    #[inline]
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        self.coordinates.compare(&other.coordinates, epsilon2)
    }

    pub fn repair_with<M: SqrtProvider<T>>(&mut self, math: &M) -> &mut Self {
        self.coordinates = self.coordinates.unit_scaled_with(math);
        self
    }

    /// One Newton step towards unit length, see [`Direction2::repair_fast`]
    pub fn repair_fast(&mut self) -> &mut Self {
        self.coordinates *= newton_factor(self.coordinates.length_squared());
        self
    }
}

impl<T: Scalar + Float> Direction3<T> {
    pub fn repair(&mut self) -> &mut Self {
        self.repair_with(&StdMath)
    }
}

impl<T> Deref for Direction3<T> {
    type Target = Vector3<T>;
    fn deref(&self) -> &Vector3<T> {
        &self.coordinates
    }
}

impl<T> From<Direction3<T>> for Vector3<T> {
    fn from(direction: Direction3<T>) -> Self {
        direction.coordinates
    }
}

impl<T: Scalar> Neg for Direction3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new_unchecked(-self.coordinates)
    }
}
