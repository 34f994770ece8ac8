//! Small-dimension linear algebra for 2D geometry.
//!
//! The crate provides plain vectors ([`Vector2`], [`Vector3`]), complex
//! numbers used as rotate-and-scale operators ([`Complex`]), and general
//! matrices ([`Matrix2x2`], [`Matrix3x3`]). On top of those sit the
//! constrained types, which carry an invariant in their type:
//!
//! - [`Direction2`] / [`Direction3`]: unit vectors
//! - [`Rotator2`]: unit complex numbers, i.e. pure rotations
//! - [`RotMatrix2x2`]: orthonormal matrices
//!
//! Constrained values are only produced by named constants, normalization,
//! and operations that keep the invariant. Nothing re-normalizes behind your
//! back: call `repair`/`repair_fast` after long chains of compositions.
//!
//! ```
//! use linal::{Direction2, Rotator2};
//!
//! let turned = Direction2::<f64>::up() * Rotator2::orthogonal_left();
//! assert!(turned.compare(&Direction2::left(), 1e-24));
//! ```
//!
//! Square roots and trigonometry come from a [`SqrtProvider`] /
//! [`TrigProvider`]; the `*_with` methods take one explicitly and the others
//! use [`StdMath`].

pub mod errors;
pub mod interop;
pub mod math;
pub mod transform;

mod complex;
mod direction;
mod layout;
mod log;
mod matrix;
mod rot_matrix;
mod rotator;
mod scalar;
mod vector;

pub use complex::Complex;
pub use direction::{Direction2, Direction3};
pub use errors::{BufferError, MathError};
pub use math::{SqrtProvider, StdMath, TrigProvider};
pub use matrix::{Matrix2x2, Matrix2x2d, Matrix2x2f, Matrix3x3, Matrix3x3d, Matrix3x3f};
pub use rot_matrix::RotMatrix2x2;
pub use rotator::Rotator2;
pub use scalar::Scalar;
pub use transform::{Transform2dUniform, Transform3dUniform, TransformBuffer};
pub use vector::{Vector2, Vector2d, Vector2f, Vector3, Vector3d, Vector3f};
