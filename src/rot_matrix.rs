//! Orthonormal 2×2 matrices.
//!
//! A [`RotMatrix2x2`] holds a rotation in matrix form `[[a, −b], [b, a]]`.
//! Its rows are unit directions, so they are exposed as [`Direction2`]
//! borrows, and its inverse is its transpose.

use std::fmt;
use std::ops::{Deref, Mul, MulAssign};

use num_traits::Float;

use crate::math::{SqrtProvider, StdMath};
use crate::{Direction2, Matrix2x2, Rotator2, Scalar, Vector2};

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotMatrix2x2<T> {
    matrix: Matrix2x2<T>,
}

impl<T> RotMatrix2x2<T> {
    /// Trusted construction. `matrix` must already be orthonormal.
    #[inline]
    pub(crate) const fn new_unchecked(matrix: Matrix2x2<T>) -> Self {
        RotMatrix2x2 { matrix }
    }
}

impl<T: Scalar> RotMatrix2x2<T> {
    pub fn identity() -> Self {
        Self::new_unchecked(Matrix2x2::identity())
    }

    /// Same as [`RotMatrix2x2::identity`]
    pub fn one() -> Self {
        Self::identity()
    }

    pub fn orthogonal_left() -> Self {
        Self::new_unchecked(Matrix2x2::orthogonal_left())
    }

    pub fn orthogonal_right() -> Self {
        Self::new_unchecked(Matrix2x2::orthogonal_right())
    }

    pub fn turn_around() -> Self {
        Self::new_unchecked(Matrix2x2::turn_around())
    }

    /// Read-only view of the entries
    #[inline]
    pub fn as_matrix(&self) -> &Matrix2x2<T> {
        &self.matrix
    }

    #[inline]
    pub fn into_matrix(self) -> Matrix2x2<T> {
        self.matrix
    }

    #[inline]
    pub fn line0(&self) -> &Direction2<T> {
        Direction2::from_vector_ref_unchecked(&self.matrix.line0)
    }

    #[inline]
    pub fn line1(&self) -> &Direction2<T> {
        Direction2::from_vector_ref_unchecked(&self.matrix.line1)
    }

    #[inline]
    pub fn column0(&self) -> Direction2<T> {
        Direction2::new_unchecked(self.matrix.column0())
    }

    #[inline]
    pub fn column1(&self) -> Direction2<T> {
        Direction2::new_unchecked(self.matrix.column1())
    }

    /// The rotator with the same effect, read off the first column
    pub fn to_rotator(&self) -> Rotator2<T> {
        *self.column0().as_rotator()
    }

    /// Transpose in place by swapping the off-diagonal entries. No
    /// arithmetic is involved, so a double inverse is exact.
    pub fn inverse(&mut self) -> &mut Self {
        std::mem::swap(&mut self.matrix.line0.y, &mut self.matrix.line1.x);
        self
    }

    pub fn inversed(&self) -> Self {
        let mut inverse = *self;
        inverse.inverse();
        inverse
    }

    /// Determinant, 1 up to rounding
    #[inline]
    pub fn det(&self) -> T {
        self.matrix.det()
    }

    #[inline]
    pub fn compare(&self, other: &Self, epsilon2: T) -> bool {
        self.matrix.compare(&other.matrix, epsilon2)
    }

    /// Gram-Schmidt on the rows: normalize the first row, remove its
    /// component from the second, normalize the second.
    pub fn repair_with<M: SqrtProvider<T>>(&mut self, math: &M) -> &mut Self {
        let line0 = self.matrix.line0;
        let line0 = line0.unit_scaled_with(math);
        let line1 = self.matrix.line1 - line0 * self.matrix.line1.dot(&line0);
        let line1 = line1.unit_scaled_with(math);
        self.matrix = Matrix2x2::new(line0, line1);
        self
    }
}

impl<T: Scalar + Float> RotMatrix2x2<T> {
    pub fn repair(&mut self) -> &mut Self {
        self.repair_with(&StdMath)
    }
}

impl<T: Scalar> From<Rotator2<T>> for RotMatrix2x2<T> {
    fn from(rotator: Rotator2<T>) -> Self {
        rotator.make_matrix()
    }
}

impl<T> From<RotMatrix2x2<T>> for Matrix2x2<T> {
    fn from(matrix: RotMatrix2x2<T>) -> Self {
        matrix.matrix
    }
}

impl<T> Deref for RotMatrix2x2<T> {
    type Target = Matrix2x2<T>;
    fn deref(&self) -> &Matrix2x2<T> {
        &self.matrix
    }
}

impl<T: Scalar> Mul for RotMatrix2x2<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new_unchecked(self.matrix * rhs.matrix)
    }
}

impl<T: Scalar> Mul<Direction2<T>> for RotMatrix2x2<T> {
    type Output = Direction2<T>;
    fn mul(self, rhs: Direction2<T>) -> Direction2<T> {
        Direction2::new_unchecked(self.matrix * rhs.into_vector())
    }
}

impl<T: Scalar> Mul<Vector2<T>> for RotMatrix2x2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.matrix * rhs
    }
}

impl<T: Scalar> MulAssign for RotMatrix2x2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: fmt::Display> fmt::Display for RotMatrix2x2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
