//! Conversions to and from `glam`.
//!
//! `glam` stores matrices by column while this crate stores them by row, so
//! matrix conversions transpose the storage and keep the linear map.

use glam::{DMat2, DMat3, DVec2, DVec3, Mat2, Mat3, Vec2, Vec3};

use crate::transform::Transform2dUniform;
use crate::{Direction2, Direction3, Matrix2x2, Matrix3x3, RotMatrix2x2, Vector2, Vector3};

macro_rules! impl_glam {
    ($t:ty, $vec2:ty, $vec3:ty, $mat2:ty, $mat3:ty) => {
        impl From<Vector2<$t>> for $vec2 {
            fn from(v: Vector2<$t>) -> Self {
                <$vec2>::new(v.x, v.y)
            }
        }

        impl From<$vec2> for Vector2<$t> {
            fn from(v: $vec2) -> Self {
                Vector2::new(v.x, v.y)
            }
        }

        impl From<Direction2<$t>> for $vec2 {
            fn from(d: Direction2<$t>) -> Self {
                d.into_vector().into()
            }
        }

        impl From<Vector3<$t>> for $vec3 {
            fn from(v: Vector3<$t>) -> Self {
                <$vec3>::new(v.x, v.y, v.z)
            }
        }

        impl From<$vec3> for Vector3<$t> {
            fn from(v: $vec3) -> Self {
                Vector3::new(v.x, v.y, v.z)
            }
        }

        impl From<Direction3<$t>> for $vec3 {
            fn from(d: Direction3<$t>) -> Self {
                d.into_vector().into()
            }
        }

        impl From<Matrix2x2<$t>> for $mat2 {
            fn from(m: Matrix2x2<$t>) -> Self {
                <$mat2>::from_cols(m.column0().into(), m.column1().into())
            }
        }

        impl From<$mat2> for Matrix2x2<$t> {
            fn from(m: $mat2) -> Self {
                Matrix2x2::new(m.row(0).into(), m.row(1).into())
            }
        }

        impl From<RotMatrix2x2<$t>> for $mat2 {
            fn from(m: RotMatrix2x2<$t>) -> Self {
                m.into_matrix().into()
            }
        }

        impl From<Matrix3x3<$t>> for $mat3 {
            fn from(m: Matrix3x3<$t>) -> Self {
                <$mat3>::from_cols(m.column0().into(), m.column1().into(), m.column2().into())
            }
        }

        impl From<$mat3> for Matrix3x3<$t> {
            fn from(m: $mat3) -> Self {
                Matrix3x3::new(m.row(0).into(), m.row(1).into(), m.row(2).into())
            }
        }
    };
}

impl_glam!(f32, Vec2, Vec3, Mat2, Mat3);
impl_glam!(f64, DVec2, DVec3, DMat2, DMat3);

/// The homogeneous matrix stored in a 9 element transform buffer
pub fn mat3_from_transform_2d(buffer: &Transform2dUniform<f32>) -> Mat3 {
    Mat3::from_cols_array(buffer).transpose()
}

/// Double precision counterpart of [`mat3_from_transform_2d`]
pub fn dmat3_from_transform_2d(buffer: &Transform2dUniform<f64>) -> DMat3 {
    DMat3::from_cols_array(buffer).transpose()
}
