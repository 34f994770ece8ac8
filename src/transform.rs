//! Packing a 2D linear map plus an offset into homogeneous transform
//! buffers, and reading it back.
//!
//! Two layouts are supported:
//!
//! - [`Transform2dUniform`], 9 elements, row major 3×3:
//!   `[l0.x, l0.y, o.x, l1.x, l1.y, o.y, 0, 0, 1]`
//! - [`Transform3dUniform`], 16 elements, a 4×4 with the offset in the last
//!   row: `[l0.x, l0.y, 0, 0, l1.x, l1.y, 0, 0, 0, 0, 1, 0, o.x, o.y, 0, 1]`
//!
//! Reading ignores the constant entries. Packing followed by reading gives
//! back the exact matrix and offset.

use crate::errors::BufferError;
use crate::log::debug;
use crate::{Matrix2x2, Scalar, Vector2};

/// 2D homogeneous transform, 3×3 row major
pub type Transform2dUniform<T> = [T; 9];

/// 2D transform embedded in a 4×4, offset in the last row
pub type Transform3dUniform<T> = [T; 16];

/// A fixed-size buffer layout for a `(Matrix2x2, Vector2)` pair
pub trait TransformBuffer<T>: Sized {
    fn pack(matrix: &Matrix2x2<T>, offset: &Vector2<T>) -> Self;
    fn unpack(&self) -> (Matrix2x2<T>, Vector2<T>);
}

impl<T: Scalar> TransformBuffer<T> for Transform2dUniform<T> {
    fn pack(matrix: &Matrix2x2<T>, offset: &Vector2<T>) -> Self {
        let (o, i) = (T::zero(), T::one());
        let Matrix2x2 { line0: l0, line1: l1 } = *matrix;
        [
            l0.x, l0.y, offset.x, //
            l1.x, l1.y, offset.y, //
            o, o, i,
        ]
    }

    fn unpack(&self) -> (Matrix2x2<T>, Vector2<T>) {
        let b = self;
        (
            Matrix2x2::new(Vector2::new(b[0], b[1]), Vector2::new(b[3], b[4])),
            Vector2::new(b[2], b[5]),
        )
    }
}

impl<T: Scalar> TransformBuffer<T> for Transform3dUniform<T> {
    fn pack(matrix: &Matrix2x2<T>, offset: &Vector2<T>) -> Self {
        let (o, i) = (T::zero(), T::one());
        let Matrix2x2 { line0: l0, line1: l1 } = *matrix;
        [
            l0.x, l0.y, o, o, //
            l1.x, l1.y, o, o, //
            o, o, i, o, //
            offset.x, offset.y, o, i,
        ]
    }

    fn unpack(&self) -> (Matrix2x2<T>, Vector2<T>) {
        let b = self;
        (
            Matrix2x2::new(Vector2::new(b[0], b[1]), Vector2::new(b[4], b[5])),
            Vector2::new(b[12], b[13]),
        )
    }
}

impl<T: Scalar> Matrix2x2<T> {
    pub fn make_transform_2d(&self, offset: &Vector2<T>) -> Transform2dUniform<T> {
        TransformBuffer::pack(self, offset)
    }

    pub fn make_transform_3d(&self, offset: &Vector2<T>) -> Transform3dUniform<T> {
        TransformBuffer::pack(self, offset)
    }

    /// Read a matrix and offset back out of a typed buffer
    pub fn read_transform<B: TransformBuffer<T>>(buffer: &B) -> (Self, Vector2<T>) {
        buffer.unpack()
    }

    /// Read from an untyped slice, picking the layout by its length
    pub fn read_transform_slice(buffer: &[T]) -> Result<(Self, Vector2<T>), BufferError> {
        if let Ok(buffer) = <&Transform2dUniform<T>>::try_from(buffer) {
            return Ok(buffer.unpack());
        }
        if let Ok(buffer) = <&Transform3dUniform<T>>::try_from(buffer) {
            return Ok(buffer.unpack());
        }
        debug!(len = buffer.len(), "rejected transform buffer");
        Err(BufferError::UnsupportedLength { len: buffer.len() })
    }
}
