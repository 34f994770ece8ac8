//! General 2×2 and 3×3 matrices.
//!
//! Matrices are stored as row vectors and act on column vectors, so
//! `M * v = (line0·v, line1·v)`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::errors::MathError;
use crate::log::debug;
use crate::{Scalar, Vector2, Vector3};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Matrix2x2<T> {
    pub line0: Vector2<T>,
    pub line1: Vector2<T>,
}

pub type Matrix2x2f = Matrix2x2<f32>;
pub type Matrix2x2d = Matrix2x2<f64>;

impl<T> Matrix2x2<T> {
    pub const fn new(line0: Vector2<T>, line1: Vector2<T>) -> Self {
        Matrix2x2 { line0, line1 }
    }
}

impl<T: Scalar> Matrix2x2<T> {
    pub fn zero() -> Self {
        Self::new(Vector2::zero(), Vector2::zero())
    }

    pub fn identity() -> Self {
        Self::new(Vector2::right(), Vector2::up())
    }

    /// Same as [`Matrix2x2::identity`]
    pub fn one() -> Self {
        Self::identity()
    }

    /// +90°: `[[0, −1], [1, 0]]`
    pub fn orthogonal_left() -> Self {
        Self::new(Vector2::new(T::zero(), -T::one()), Vector2::new(T::one(), T::zero()))
    }

    /// −90°: `[[0, 1], [−1, 0]]`
    pub fn orthogonal_right() -> Self {
        Self::new(Vector2::new(T::zero(), T::one()), Vector2::new(-T::one(), T::zero()))
    }

    /// 180°: `[[−1, 0], [0, −1]]`
    pub fn turn_around() -> Self {
        Self::new(Vector2::left(), Vector2::down())
    }

    /// First column
    #[inline]
    pub fn column0(&self) -> Vector2<T> {
        Vector2::new(self.line0.x, self.line1.x)
    }

    /// Second column
    #[inline]
    pub fn column1(&self) -> Vector2<T> {
        Vector2::new(self.line0.y, self.line1.y)
    }

    pub fn transposed(&self) -> Self {
        Self::new(self.column0(), self.column1())
    }

    /// `ad − bc`
    pub fn det(&self) -> T {
        self.line0.x * self.line1.y - self.line0.y * self.line1.x
    }

    /// `adj(M) / det(M)`. Fails when the determinant is exactly zero.
    pub fn inversed(&self) -> Result<Self, MathError> {
        let det = self.det();
        if det.is_zero() {
            debug!(matrix = ?self, "rejected inversion of singular matrix");
            return Err(MathError::SingularMatrix);
        }
        let adjugate = Self::new(
            Vector2::new(self.line1.y, -self.line0.y),
            Vector2::new(-self.line1.x, self.line0.x),
        );
        Ok(adjugate.div_unchecked(det))
    }

    pub fn checked_div(self, scalar: T) -> Result<Self, MathError> {
        if scalar.is_zero() {
            debug!(matrix = ?self, "rejected matrix division by zero");
            return Err(MathError::DivisionByZero);
        }
        Ok(self.div_unchecked(scalar))
    }

    #[inline]
    fn div_unchecked(self, scalar: T) -> Self {
        Self::new(self.line0.div_unchecked(scalar), self.line1.div_unchecked(scalar))
    }

    /// Sum of the squared row differences, compared against `epsilon2`
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        let d0 = (self.line0 - other.line0).length_squared();
        let d1 = (self.line1 - other.line1).length_squared();
        d0 + d1 < epsilon2
    }
}

impl<T: Scalar> Add for Matrix2x2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.line0 + rhs.line0, self.line1 + rhs.line1)
    }
}

impl<T: Scalar> Sub for Matrix2x2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.line0 - rhs.line0, self.line1 - rhs.line1)
    }
}

impl<T: Scalar> Neg for Matrix2x2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.line0, -self.line1)
    }
}

impl<T: Scalar> Mul<T> for Matrix2x2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.line0 * rhs, self.line1 * rhs)
    }
}

impl<T: Scalar> Mul<Vector2<T>> for Matrix2x2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.line0.dot(&rhs), self.line1.dot(&rhs))
    }
}

/// Rows of `self` dotted with the columns of `rhs`
impl<T: Scalar> Mul for Matrix2x2<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let columns = rhs.transposed();
        Self::new(columns * self.line0, columns * self.line1)
    }
}

impl<T: Scalar> AddAssign for Matrix2x2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Matrix2x2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Matrix2x2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign for Matrix2x2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: fmt::Display> fmt::Display for Matrix2x2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.line0.x, self.line0.y, self.line1.x, self.line1.y
        )
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Matrix3x3<T> {
    pub line0: Vector3<T>,
    pub line1: Vector3<T>,
    pub line2: Vector3<T>,
}

pub type Matrix3x3f = Matrix3x3<f32>;
pub type Matrix3x3d = Matrix3x3<f64>;

impl<T> Matrix3x3<T> {
    pub const fn new(line0: Vector3<T>, line1: Vector3<T>, line2: Vector3<T>) -> Self {
        Matrix3x3 { line0, line1, line2 }
    }
}

impl<T: Scalar> Matrix3x3<T> {
    pub fn zero() -> Self {
        Self::new(Vector3::zero(), Vector3::zero(), Vector3::zero())
    }

    pub fn identity() -> Self {
        Self::new(Vector3::right(), Vector3::up(), Vector3::forward())
    }

    pub fn one() -> Self {
        Self::identity()
    }

    pub fn column0(&self) -> Vector3<T> {
        Vector3::new(self.line0.x, self.line1.x, self.line2.x)
    }

    pub fn column1(&self) -> Vector3<T> {
        Vector3::new(self.line0.y, self.line1.y, self.line2.y)
    }

    pub fn column2(&self) -> Vector3<T> {
        Vector3::new(self.line0.z, self.line1.z, self.line2.z)
    }

    pub fn transposed(&self) -> Self {
        Self::new(self.column0(), self.column1(), self.column2())
    }

    /// Cofactor expansion along the first row
    pub fn det(&self) -> T {
        self.line0.dot(&self.line1.cross(&self.line2))
    }

    /// `adj(M) / det(M)`. The adjugate's columns are the cross products of
    /// pairs of rows.
    pub fn inversed(&self) -> Result<Self, MathError> {
        let det = self.det();
        if det.is_zero() {
            debug!(matrix = ?self, "rejected inversion of singular matrix");
            return Err(MathError::SingularMatrix);
        }
        let adjugate = Self::new(
            self.line1.cross(&self.line2),
            self.line2.cross(&self.line0),
            self.line0.cross(&self.line1),
        )
        .transposed();
        Ok(adjugate.div_unchecked(det))
    }

    pub fn checked_div(self, scalar: T) -> Result<Self, MathError> {
        if scalar.is_zero() {
            debug!(matrix = ?self, "rejected matrix division by zero");
            return Err(MathError::DivisionByZero);
        }
        Ok(self.div_unchecked(scalar))
    }

    #[inline]
    fn div_unchecked(self, scalar: T) -> Self {
        Self::new(
            self.line0.div_unchecked(scalar),
            self.line1.div_unchecked(scalar),
            self.line2.div_unchecked(scalar),
        )
    }

    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        let d0 = (self.line0 - other.line0).length_squared();
        let d1 = (self.line1 - other.line1).length_squared();
        let d2 = (self.line2 - other.line2).length_squared();
        d0 + d1 + d2 < epsilon2
    }
}

impl<T: Scalar> Add for Matrix3x3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.line0 + rhs.line0, self.line1 + rhs.line1, self.line2 + rhs.line2)
    }
}

impl<T: Scalar> Sub for Matrix3x3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.line0 - rhs.line0, self.line1 - rhs.line1, self.line2 - rhs.line2)
    }
}

impl<T: Scalar> Neg for Matrix3x3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.line0, -self.line1, -self.line2)
    }
}

impl<T: Scalar> Mul<T> for Matrix3x3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.line0 * rhs, self.line1 * rhs, self.line2 * rhs)
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3::new(self.line0.dot(&rhs), self.line1.dot(&rhs), self.line2.dot(&rhs))
    }
}

impl<T: Scalar> Mul for Matrix3x3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let columns = rhs.transposed();
        Self::new(columns * self.line0, columns * self.line1, columns * self.line2)
    }
}

impl<T: Scalar> AddAssign for Matrix3x3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Matrix3x3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Matrix3x3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign for Matrix3x3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: fmt::Display> fmt::Display for Matrix3x3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { line0: a, line1: b, line2: c } = self;
        write!(
            f,
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS2: f64 = 1e-24;

    fn m2(a: f64, b: f64, c: f64, d: f64) -> Matrix2x2<f64> {
        Matrix2x2::new(Vector2::new(a, b), Vector2::new(c, d))
    }

    // ==================== Matrix2x2 tests ====================

    #[test]
    fn acts_on_column_vectors() {
        let m = m2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m * Vector2::new(1.0, 0.0), Vector2::new(1.0, 3.0));
        assert_eq!(m * Vector2::new(0.0, 1.0), Vector2::new(2.0, 4.0));
        assert_eq!(Matrix2x2::orthogonal_left() * Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0));
        assert_eq!(Matrix2x2::orthogonal_right() * Vector2::new(1.0, 0.0), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn product_applies_right_operand_first() {
        let a = m2(1.0, 2.0, 3.0, 4.0);
        let b = m2(0.0, 1.0, -1.0, 2.0);
        assert_eq!(a * b, m2(-2.0, 5.0, -4.0, 11.0));
        let v = Vector2::new(0.5, -1.5);
        assert_eq!((a * b) * v, a * (b * v));
    }

    #[test]
    fn quarter_turns() {
        let left = Matrix2x2::<f64>::orthogonal_left();
        let right = Matrix2x2::<f64>::orthogonal_right();
        assert_eq!(left * right, Matrix2x2::identity());
        assert_eq!(left * left, Matrix2x2::turn_around());
        assert_eq!(Matrix2x2::<f64>::one(), Matrix2x2::identity());
    }

    #[test]
    fn det_and_transpose() {
        let m = m2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.det(), -2.0);
        assert_eq!(m.transposed(), m2(1.0, 3.0, 2.0, 4.0));
        assert_eq!(m.transposed().det(), m.det());
        assert_eq!(m.column1(), Vector2::new(2.0, 4.0));
    }

    #[test]
    fn inversed_times_self_is_identity() {
        let m = m2(4.0, 7.0, 2.0, 6.0);
        let inv = m.inversed().unwrap();
        assert!((m * inv).compare(&Matrix2x2::identity(), EPS2));
        assert!((inv * m).compare(&Matrix2x2::identity(), EPS2));
    }

    #[test]
    fn singular_matrix_is_rejected() {
        assert_eq!(m2(1.0, 2.0, 2.0, 4.0).inversed(), Err(MathError::SingularMatrix));
        assert_eq!(Matrix2x2::<f64>::zero().inversed(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn checked_div_by_zero() {
        let m = m2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.checked_div(0.0), Err(MathError::DivisionByZero));
        assert_eq!(m.checked_div(2.0), Ok(m2(0.5, 1.0, 1.5, 2.0)));
    }

    #[test]
    fn componentwise_ops() {
        let mut m = m2(1.0, 2.0, 3.0, 4.0);
        m += Matrix2x2::identity();
        m -= m2(1.0, 1.0, 1.0, 1.0);
        m *= 2.0;
        assert_eq!(m, m2(2.0, 2.0, 4.0, 8.0));
        assert_eq!(-m + m, Matrix2x2::zero());
    }

    #[test]
    fn compare_sums_row_distances() {
        let a = m2(1.0, 0.0, 0.0, 1.0);
        let b = m2(1.1, 0.0, 0.0, 1.1);
        assert!(a.compare(&b, 0.021));
        assert!(!a.compare(&b, 0.019));
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(m2(1.0, -2.0, 0.5, 4.0).to_string(), @"[[1, -2], [0.5, 4]]");
    }

    // ==================== Matrix3x3 tests ====================

    #[test]
    fn matrix3_det_and_inverse() {
        let m = Matrix3x3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 4.0),
            Vector3::new(5.0, 6.0, 0.0),
        );
        assert_eq!(m.det(), 1.0);
        let inv = m.inversed().unwrap();
        assert_eq!(
            inv,
            Matrix3x3::new(
                Vector3::new(-24.0, 18.0, 5.0),
                Vector3::new(20.0, -15.0, -4.0),
                Vector3::new(-5.0, 4.0, 1.0),
            )
        );
        assert!((m * inv).compare(&Matrix3x3::identity(), EPS2));
    }

    #[test]
    fn matrix3_componentwise_ops() {
        let mut m = Matrix3x3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        m += Matrix3x3::identity();
        m -= Matrix3x3::new(Vector3::ones(), Vector3::ones(), Vector3::ones());
        m *= 2.0;
        assert_eq!(
            m,
            Matrix3x3::new(
                Vector3::new(2.0, 2.0, 4.0),
                Vector3::new(6.0, 10.0, 10.0),
                Vector3::new(12.0, 14.0, 18.0),
            )
        );
        assert_eq!(-m + m, Matrix3x3::zero());
    }

    #[test]
    fn matrix3_singular() {
        let m = Matrix3x3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.det(), 0.0);
        assert_eq!(m.inversed(), Err(MathError::SingularMatrix));
        assert_eq!(m.checked_div(0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn matrix3_product_and_transpose() {
        let m = Matrix3x3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 4.0),
            Vector3::new(5.0, 6.0, 0.0),
        );
        assert_eq!(m * Matrix3x3::identity(), m);
        assert_eq!(m.transposed().transposed(), m);
        assert_eq!(m * Vector3::new(1.0, 0.0, 0.0), m.column0());
        assert_eq!(-m + m, Matrix3x3::zero());
        assert_eq!(m * 2.0 - m, m);
    }
}
