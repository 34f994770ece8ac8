//! Complex numbers as rotate-and-scale operators on the plane.
//!
//! Multiplying a vector by `Complex { re, im }` rotates it by the complex
//! argument and scales it by the modulus. `Complex` has the same layout as
//! [`Vector2`] and the two borrow as each other for free.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::errors::MathError;
use crate::layout;
use crate::log::debug;
use crate::math::{SqrtProvider, StdMath};
use crate::{Matrix2x2, Rotator2, Scalar, Vector2};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }
}

impl<T: Scalar> Complex<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Multiplicative identity
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Imaginary unit, a quarter turn counterclockwise
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// `re² + im²`
    #[inline]
    pub fn modulus_squared(&self) -> T {
        self.as_vector().length_squared()
    }

    pub fn modulus_with<M: SqrtProvider<T>>(&self, math: &M) -> T {
        self.as_vector().length_with(math)
    }

    /// Divide by another complex number. Fails when `other` has zero modulus.
    pub fn checked_div(self, other: Self) -> Result<Self, MathError> {
        let denominator = other.modulus_squared();
        if denominator.is_zero() {
            debug!(divisor = ?other, "rejected complex division by zero modulus");
            return Err(MathError::DivisionByZero);
        }
        Ok((self * other.conjugate()).div_scalar_unchecked(denominator))
    }

    /// Divide by a real scalar. Fails when `scalar == 0`.
    pub fn checked_div_scalar(self, scalar: T) -> Result<Self, MathError> {
        self.as_vector().checked_div(scalar).map(|v| *v.as_complex())
    }

    #[inline]
    pub(crate) fn div_scalar_unchecked(self, scalar: T) -> Self {
        *self.as_vector().div_unchecked(scalar).as_complex()
    }

    /// `1 / self`, that is `conjugate() / modulus_squared()`
    pub fn inverted(&self) -> Result<Self, MathError> {
        let denominator = self.modulus_squared();
        if denominator.is_zero() {
            debug!(value = ?self, "rejected inversion of zero complex");
            return Err(MathError::DivisionByZero);
        }
        Ok(self.conjugate().div_scalar_unchecked(denominator))
    }

    /// Matrix performing the same rotate-and-scale on column vectors:
    /// `[[re, −im], [im, re]]`
    pub fn make_matrix(&self) -> Matrix2x2<T> {
        Matrix2x2::new(
            Vector2::new(self.re, -self.im),
            Vector2::new(self.im, self.re),
        )
    }

    pub fn normalized_with<M: SqrtProvider<T>>(&self, math: &M) -> Result<Rotator2<T>, MathError> {
        self.as_vector()
            .normalized_with(math)
            .map(|direction| *direction.as_rotator())
    }

    /// `‖self − other‖² < epsilon2`
    #[inline]
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        self.as_vector().compare(other.as_vector(), epsilon2)
    }

    /// View as a vector, without copying
    #[inline]
    pub fn as_vector(&self) -> &Vector2<T> {
        // SAFETY: both are #[repr(C)] { T, T } in the same order, no invariant
        unsafe { layout::cast_ref(self) }
    }

    #[inline]
    pub fn as_vector_mut(&mut self) -> &mut Vector2<T> {
        // SAFETY: as for `as_vector`
        unsafe { layout::cast_mut(self) }
    }
}

impl<T: Scalar + Float> Complex<T> {
    /// Modulus, without overflow for huge parts
    pub fn modulus(&self) -> T {
        self.as_vector().length()
    }

    pub fn normalized(&self) -> Result<Rotator2<T>, MathError> {
        self.normalized_with(&StdMath)
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        *(*self.as_vector() + *rhs.as_vector()).as_complex()
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        *(*self.as_vector() - *rhs.as_vector()).as_complex()
    }
}

/// `(ac − bd, ad + bc)`
impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Scalar> Mul<T> for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        *(*self.as_vector() * rhs).as_complex()
    }
}

impl<T: Scalar> Neg for Complex<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Scalar> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Complex<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::zero() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
