//! Plain 2D and 3D vectors.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::errors::MathError;
use crate::layout;
use crate::log::debug;
use crate::math::{SqrtProvider, StdMath};
use crate::{Complex, Direction2, Direction3, Scalar};

/// 2 element vector
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }
}

impl<T: Scalar> Vector2<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn ones() -> Self {
        Self::new(T::one(), T::one())
    }

    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn down() -> Self {
        Self::new(T::zero(), -T::one())
    }

    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length, `x² + y²`
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Length, with the square root supplied by `math`. Squares the
    /// coordinates first; `length` on floats does not.
    pub fn length_with<M: SqrtProvider<T>>(&self, math: &M) -> T {
        math.sqrt(self.length_squared())
    }

    /// Rotated by +90° (counterclockwise)
    #[inline]
    pub fn orthogonal_left(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotated by −90° (clockwise)
    #[inline]
    pub fn orthogonal_right(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Divide by a scalar, refusing an exactly zero divisor instead of
    /// producing infinities.
    pub fn checked_div(self, scalar: T) -> Result<Self, MathError> {
        if scalar.is_zero() {
            debug!(vector = ?self, "rejected vector division by zero");
            return Err(MathError::DivisionByZero);
        }
        Ok(self.div_unchecked(scalar))
    }

    /// Division for callers that already know `scalar != 0`.
    #[inline]
    pub(crate) fn div_unchecked(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }

    /// Unit vector in the same direction, with the square root supplied by
    /// `math`. Fails for the zero vector and for NaN or infinite coordinates.
    pub fn normalized_with<M: SqrtProvider<T>>(&self, math: &M) -> Result<Direction2<T>, MathError> {
        if !(self.x.is_finite_value() && self.y.is_finite_value()) {
            debug!(vector = ?self, "rejected normalization of a non-finite vector");
            return Err(MathError::NonFinite);
        }
        if self.x.is_zero() && self.y.is_zero() {
            debug!("rejected normalization of the zero vector");
            return Err(MathError::DivisionByZero);
        }
        Ok(Direction2::new_unchecked(self.unit_scaled_with(math)))
    }

    /// Divides by the largest magnitude before squaring, so the squared
    /// length lies in `[1, 2]` and can neither overflow nor underflow.
    /// `self` must be finite and nonzero.
    pub(crate) fn unit_scaled_with<M: SqrtProvider<T>>(&self, math: &M) -> Self {
        let scaled = self.div_unchecked(self.x.max_magnitude(self.y));
        scaled.div_unchecked(scaled.length_with(math))
    }

    /// In-place normalization; the vector is left untouched on failure.
    pub fn normalize_with<M: SqrtProvider<T>>(&mut self, math: &M) -> Result<&mut Self, MathError> {
        *self = *self.normalized_with(math)?.as_vector();
        Ok(self)
    }

    /// `‖self − other‖² < epsilon2`. Note the threshold is a squared
    /// distance, not a per-axis tolerance.
    #[inline]
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        (*self - *other).length_squared() < epsilon2
    }

    /// View as a complex number, without copying
    #[inline]
    pub fn as_complex(&self) -> &Complex<T> {
        // SAFETY: both are #[repr(C)] { T, T } in the same order, no invariant
        unsafe { layout::cast_ref(self) }
    }

    /// Mutable view as a complex number, without copying
    #[inline]
    pub fn as_complex_mut(&mut self) -> &mut Complex<T> {
        // SAFETY: as for `as_complex`
        unsafe { layout::cast_mut(self) }
    }
}

impl<T: Scalar + Float> Vector2<T> {
    /// Length, without overflow for huge coordinates
    pub fn length(&self) -> T {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. Fails for the zero vector.
    pub fn normalized(&self) -> Result<Direction2<T>, MathError> {
        self.normalized_with(&StdMath)
    }

    pub fn normalize(&mut self) -> Result<&mut Self, MathError> {
        self.normalize_with(&StdMath)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Rotate and scale by a complex number
impl<T: Scalar> Mul<Complex<T>> for Vector2<T> {
    type Output = Self;
    fn mul(self, rhs: Complex<T>) -> Self {
        *(*self.as_complex() * rhs).as_vector()
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<Complex<T>> for Vector2<T> {
    fn mul_assign(&mut self, rhs: Complex<T>) {
        *self = *self * rhs;
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 3 element vector
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn ones() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn down() -> Self {
        Self::new(T::zero(), -T::one(), T::zero())
    }

    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn left() -> Self {
        Self::new(-T::one(), T::zero(), T::zero())
    }

    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    pub fn back() -> Self {
        Self::new(T::zero(), T::zero(), -T::one())
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn length_with<M: SqrtProvider<T>>(&self, math: &M) -> T {
        math.sqrt(self.length_squared())
    }

    pub fn checked_div(self, scalar: T) -> Result<Self, MathError> {
        if scalar.is_zero() {
            debug!(vector = ?self, "rejected vector division by zero");
            return Err(MathError::DivisionByZero);
        }
        Ok(self.div_unchecked(scalar))
    }

    #[inline]
    pub(crate) fn div_unchecked(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    pub fn normalized_with<M: SqrtProvider<T>>(&self, math: &M) -> Result<Direction3<T>, MathError> {
        if !(self.x.is_finite_value() && self.y.is_finite_value() && self.z.is_finite_value()) {
            debug!(vector = ?self, "rejected normalization of a non-finite vector");
            return Err(MathError::NonFinite);
        }
        if self.x.is_zero() && self.y.is_zero() && self.z.is_zero() {
            debug!("rejected normalization of the zero vector");
            return Err(MathError::DivisionByZero);
        }
        Ok(Direction3::new_unchecked(self.unit_scaled_with(math)))
    }

    /// As [`Vector2::unit_scaled_with`]; `self` must be finite and nonzero.
    pub(crate) fn unit_scaled_with<M: SqrtProvider<T>>(&self, math: &M) -> Self {
        let scale = self.x.max_magnitude(self.y).max_magnitude(self.z);
        let scaled = self.div_unchecked(scale);
        scaled.div_unchecked(scaled.length_with(math))
    }

    /// `‖self − other‖² < epsilon2`
    #[inline]
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        (*self - *other).length_squared() < epsilon2
    }
}

impl<T: Scalar + Float> Vector3<T> {
    pub fn length(&self) -> T {
        self.x.hypot(self.y).hypot(self.z)
    }

    pub fn normalized(&self) -> Result<Direction3<T>, MathError> {
        self.normalized_with(&StdMath)
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS2: f64 = 1e-24;

    // ==================== Vector2 tests ====================

    #[test]
    fn vector2_arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, -2.0);

        assert_eq!(a + b, Vector2::new(4.0, 2.0));
        assert_eq!(a - b, Vector2::new(2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(6.0, 8.0));
        assert_eq!(-a, Vector2::new(-3.0, -4.0));

        let mut c = a;
        c += b;
        c -= Vector2::new(1.0, 1.0);
        c *= 0.5;
        assert_eq!(c, Vector2::new(1.5, 0.5));
    }

    #[test]
    fn vector2_length_matches_dot() {
        let samples = [
            Vector2::new(3.0, 4.0),
            Vector2::new(-1.5, 0.25),
            Vector2::new(0.0, 0.0),
            Vector2::new(1e-3, -7e2),
        ];
        for v in samples {
            assert_eq!(v.length_squared(), v.dot(&v));
            assert!(v.length() >= 0.0);
        }
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn vector2_integer_field() {
        let v = Vector2::new(3i32, -4);
        assert_eq!(v.length_squared(), 25);
        assert_eq!(v.orthogonal_left(), Vector2::new(4, 3));
        assert_eq!(v.checked_div(2), Ok(Vector2::new(1, -2)));
        assert_eq!(v.checked_div(0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn vector2_checked_div_by_zero() {
        let v = Vector2::new(1.0, 0.0);
        assert_eq!(v.checked_div(0.0), Err(MathError::DivisionByZero));
        assert_eq!(v.checked_div(-0.0), Err(MathError::DivisionByZero));
        assert_eq!(v.checked_div(2.0), Ok(Vector2::new(0.5, 0.0)));
    }

    #[test]
    fn vector2_orthogonals() {
        let v = Vector2::new(2.0, 1.0);
        assert_eq!(v.orthogonal_left(), Vector2::new(-1.0, 2.0));
        assert_eq!(v.orthogonal_right(), Vector2::new(1.0, -2.0));
        assert_eq!(v.orthogonal_left().dot(&v), 0.0);
        assert_eq!(v.orthogonal_left().orthogonal_right(), v);
        assert_eq!(Vector2::<f64>::right().orthogonal_left(), Vector2::up());
    }

    #[test]
    fn vector2_left_is_negated_right() {
        assert_eq!(Vector2::<f64>::left(), -Vector2::right());
        assert_ne!(Vector2::<f64>::left(), Vector2::right());
        assert_eq!(Vector2::<i32>::down(), Vector2::new(0, -1));
    }

    #[test]
    fn vector2_compare_uses_squared_distance() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(1.0 + 1e-3, 1.0);
        assert!(a.compare(&b, 1e-5));
        assert!(!a.compare(&b, 1e-7));
        // per-axis 0.6 differences add up to 0.72 squared distance
        let c = Vector2::new(1.6, 1.6);
        assert!(!a.compare(&c, 0.7));
        assert!(a.compare(&c, 0.73));
    }

    #[test]
    fn vector2_normalized() {
        let d = Vector2::new(3.0, 4.0).normalized().unwrap();
        assert!(d.as_vector().compare(&Vector2::new(0.6, 0.8), EPS2));
        assert!((d.length() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn vector2_normalize_zero_fails_and_keeps_value() {
        let mut v = Vector2::<f64>::zero();
        assert_eq!(v.normalized(), Err(MathError::DivisionByZero));
        assert!(v.normalize().is_err());
        assert_eq!(v, Vector2::zero());

        let mut w = Vector2::new(0.0, -2.0);
        w.normalize().unwrap();
        assert_eq!(w, Vector2::new(0.0, -1.0));
    }

    #[test]
    fn vector2_normalize_huge_and_tiny() {
        let d = Vector2::new(2e19f32, 0.0).normalized().unwrap();
        assert_eq!(*d.as_vector(), Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::new(2e19f32, 0.0).length(), 2e19);

        let d = Vector2::new(1e200, -1e200).normalized().unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(d.as_vector().compare(&Vector2::new(h, -h), EPS2));
        assert!((d.length_squared() - 1.0).abs() < 1e-15);

        let d = Vector2::new(1e-170, 1e-170).normalized().unwrap();
        assert!(d.as_vector().compare(&Vector2::new(h, h), EPS2));

        let d = Vector2::new(0.0f32, -1e-40).normalized().unwrap();
        assert_eq!(*d.as_vector(), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn vector2_normalize_non_finite_fails() {
        let bad64 = [
            Vector2::new(f64::NAN, 1.0),
            Vector2::new(f64::INFINITY, 0.0),
            Vector2::new(1.0, f64::NEG_INFINITY),
        ];
        for v in bad64 {
            assert_eq!(v.normalized(), Err(MathError::NonFinite), "{v}");
        }
        let bad32 = [Vector2::new(f32::NAN, 0.0), Vector2::new(0.0, f32::INFINITY)];
        for v in bad32 {
            assert_eq!(v.normalized(), Err(MathError::NonFinite), "{v}");
        }

        let mut v = Vector2::new(f32::NAN, 2.0);
        assert_eq!(v.normalize().map(|v| *v), Err(MathError::NonFinite));
        assert!(v.x.is_nan() && v.y == 2.0);
    }

    #[test]
    fn vector2_times_complex_rotates_and_scales() {
        let v = Vector2::new(1.0, 0.0);
        let c = Complex::new(0.0, 2.0);
        assert_eq!(v * c, Vector2::new(0.0, 2.0));

        let mut w = Vector2::new(1.0, 1.0);
        w *= Complex::i();
        assert_eq!(w, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn vector2_complex_view_is_mutable() {
        let mut v = Vector2::new(1.0, 2.0);
        v.as_complex_mut().im = 5.0;
        assert_eq!(v, Vector2::new(1.0, 5.0));
        assert_eq!(v.as_complex().conjugate(), Complex::new(1.0, -5.0));
    }

    #[test]
    fn vector2_display() {
        insta::assert_snapshot!(Vector2::new(1.5, -2.0).to_string(), @"(1.5, -2)");
    }

    // ==================== Vector3 tests ====================

    #[test]
    fn vector3_cross_is_orthogonal() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let c = a.cross(&b);
        assert_eq!(c, Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(c.dot(&a), 0.0);
        assert_eq!(c.dot(&b), 0.0);
        assert_eq!(Vector3::<f64>::right().cross(&Vector3::up()), Vector3::forward());
    }

    #[test]
    fn vector3_scale_touches_every_axis() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v *= 2.0;
        assert_eq!(v, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(v.checked_div(2.0), Ok(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.checked_div(0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn vector3_add_assign_keeps_axes() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::new(10.0, 20.0, 30.0);
        assert_eq!(v, Vector3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn vector3_constants() {
        assert_eq!(Vector3::<i32>::back(), Vector3::new(0, 0, -1));
        assert_eq!(Vector3::<i32>::left(), -Vector3::right());
        assert_eq!(Vector3::<i32>::ones() - Vector3::ones(), Vector3::zero());
    }

    #[test]
    fn vector3_normalized() {
        let d = Vector3::new(0.0, 3.0, 4.0).normalized().unwrap();
        assert!(d.as_vector().compare(&Vector3::new(0.0, 0.6, 0.8), EPS2));
        assert_eq!(Vector3::<f64>::zero().normalized(), Err(MathError::DivisionByZero));
    }

    #[test]
    fn vector3_normalize_huge_and_non_finite() {
        let d = Vector3::new(0.0f32, 3e30, 4e30).normalized().unwrap();
        assert!((d.y - 0.6).abs() < 1e-6 && (d.z - 0.8).abs() < 1e-6);
        assert_eq!(Vector3::new(1e300, 0.0, 0.0).length(), 1e300);

        let d = Vector3::new(1e-300, 0.0, -1e-300).normalized().unwrap();
        assert!((d.length_squared() - 1.0).abs() < 1e-15);

        assert_eq!(Vector3::new(1.0, f64::NAN, 0.0).normalized(), Err(MathError::NonFinite));
        assert_eq!(Vector3::new(0.0, 0.0, f32::INFINITY).normalized(), Err(MathError::NonFinite));
    }
}
