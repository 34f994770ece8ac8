//! Error types with diagnostic codes using miette
//!
//! Every failure in this crate is local and synchronous: the caller gets the
//! error back immediately and there is nothing to retry.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Arithmetic Errors
// ============================================================================

/// Errors raised by checked arithmetic on vectors, complex numbers and matrices
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A scalar divisor, or the modulus of a complex divisor, is exactly zero
    #[error("division by zero")]
    #[diagnostic(
        code(linal::math::division_by_zero),
        help("the divisor (or its modulus/length) is exactly zero; check it before dividing or normalizing")
    )]
    DivisionByZero,

    /// The determinant of the matrix to invert is exactly zero
    #[error("can't invert matrix with det == 0")]
    #[diagnostic(
        code(linal::math::singular_matrix),
        help("rows are linearly dependent; a rotation matrix can be inverted with `inversed` on RotMatrix2x2")
    )]
    SingularMatrix,

    /// A coordinate to normalize is NaN or infinite
    #[error("can't normalize a non-finite value")]
    #[diagnostic(
        code(linal::math::non_finite),
        help("a coordinate is NaN or infinite, so there is no direction to keep")
    )]
    NonFinite,
}

// ============================================================================
// Transform Buffer Errors
// ============================================================================

/// Errors raised while reading untyped transform buffers
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("transform buffer has {len} elements")]
    #[diagnostic(
        code(linal::transform::unsupported_length),
        help("expected 9 elements (2D homogeneous) or 16 elements (3D homogeneous)")
    )]
    UnsupportedLength { len: usize },
}
