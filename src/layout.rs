//! Memory layout guarantees behind the zero-copy views.
//!
//! `Vector2`/`Complex` are both `#[repr(C)]` pairs of `T`, `Direction2` and
//! `Rotator2` are `#[repr(transparent)]` over them, and the matrix types are
//! `#[repr(C)]` stacks of row vectors. The views (`as_complex`, `as_vector`,
//! `as_rotator`, `line0`, ...) cast references between these types. Size and
//! alignment are re-checked per instantiation at compile time, and field
//! offsets are pinned for the float instantiations below.

use std::marker::PhantomData;
use std::mem::{align_of, offset_of, size_of};

use crate::{
    Complex, Direction2, Direction3, Matrix2x2, Matrix3x3, RotMatrix2x2, Rotator2, Vector2,
    Vector3,
};

/// Compile-time size/alignment equality, evaluated when a cast is
/// monomorphized.
struct SameLayout<A, B>(PhantomData<(A, B)>);

impl<A, B> SameLayout<A, B> {
    const CHECK: () = assert!(
        size_of::<A>() == size_of::<B>() && align_of::<A>() == align_of::<B>(),
        "reinterpreted types must have the same size and alignment"
    );
}

/// Reborrow `a` as a `B`.
///
/// # Safety
/// `A` and `B` must have identical field types in identical order under
/// `#[repr(C)]` / `#[repr(transparent)]`, and every value of `A` must be a
/// valid `B` (including its invariant, if `B` has one).
#[inline(always)]
pub(crate) unsafe fn cast_ref<A, B>(a: &A) -> &B {
    #[allow(clippy::let_unit_value)]
    let () = SameLayout::<A, B>::CHECK;
    // SAFETY: layouts match (checked above), validity is the caller's contract
    unsafe { &*(a as *const A).cast::<B>() }
}

/// Mutable counterpart of [`cast_ref`].
///
/// # Safety
/// As for [`cast_ref`], in both directions: every value written through the
/// returned `&mut B` must also be a valid `A`.
#[inline(always)]
pub(crate) unsafe fn cast_mut<A, B>(a: &mut A) -> &mut B {
    #[allow(clippy::let_unit_value)]
    let () = SameLayout::<A, B>::CHECK;
    // SAFETY: layouts match (checked above), validity is the caller's contract
    unsafe { &mut *(a as *mut A).cast::<B>() }
}

macro_rules! assert_pair_layout {
    ($t:ty) => {
        const _: () = {
            assert!(size_of::<Vector2<$t>>() == size_of::<Complex<$t>>());
            assert!(align_of::<Vector2<$t>>() == align_of::<Complex<$t>>());
            assert!(offset_of!(Vector2<$t>, x) == offset_of!(Complex<$t>, re));
            assert!(offset_of!(Vector2<$t>, y) == offset_of!(Complex<$t>, im));
            assert!(size_of::<Vector2<$t>>() == 2 * size_of::<$t>());
            assert!(size_of::<Direction2<$t>>() == size_of::<Vector2<$t>>());
            assert!(size_of::<Rotator2<$t>>() == size_of::<Direction2<$t>>());
            assert!(align_of::<Rotator2<$t>>() == align_of::<Direction2<$t>>());
            assert!(offset_of!(Matrix2x2<$t>, line1) == size_of::<Vector2<$t>>());
            assert!(size_of::<Matrix2x2<$t>>() == 4 * size_of::<$t>());
            assert!(size_of::<RotMatrix2x2<$t>>() == size_of::<Matrix2x2<$t>>());
            assert!(size_of::<Vector3<$t>>() == 3 * size_of::<$t>());
            assert!(size_of::<Direction3<$t>>() == size_of::<Vector3<$t>>());
            assert!(size_of::<Matrix3x3<$t>>() == 9 * size_of::<$t>());
        };
    };
}

assert_pair_layout!(f32);
assert_pair_layout!(f64);

// Unconstrained float types are plain old data and can be cast both ways.
// Constrained ones are `NoUninit` only: they can be written out as bytes or
// floats, but no byte pattern can be cast into them.
macro_rules! impl_bytemuck {
    ($t:ty) => {
        // SAFETY: #[repr(C)] structs whose fields are all `$t`, so no padding
        // and every bit pattern is valid
        unsafe impl bytemuck::Zeroable for Vector2<$t> {}
        unsafe impl bytemuck::Pod for Vector2<$t> {}
        unsafe impl bytemuck::Zeroable for Vector3<$t> {}
        unsafe impl bytemuck::Pod for Vector3<$t> {}
        unsafe impl bytemuck::Zeroable for Complex<$t> {}
        unsafe impl bytemuck::Pod for Complex<$t> {}
        unsafe impl bytemuck::Zeroable for Matrix2x2<$t> {}
        unsafe impl bytemuck::Pod for Matrix2x2<$t> {}
        unsafe impl bytemuck::Zeroable for Matrix3x3<$t> {}
        unsafe impl bytemuck::Pod for Matrix3x3<$t> {}

        // SAFETY: #[repr(transparent)] over the Pod types above
        unsafe impl bytemuck::NoUninit for Direction2<$t> {}
        unsafe impl bytemuck::NoUninit for Direction3<$t> {}
        unsafe impl bytemuck::NoUninit for Rotator2<$t> {}
        unsafe impl bytemuck::NoUninit for RotMatrix2x2<$t> {}
    };
}

impl_bytemuck!(f32);
impl_bytemuck!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_and_complex_share_field_offsets() {
        assert_eq!(offset_of!(Vector2<f64>, x), offset_of!(Complex<f64>, re));
        assert_eq!(offset_of!(Vector2<f64>, y), offset_of!(Complex<f64>, im));
        assert_eq!(offset_of!(Vector2<i32>, y), offset_of!(Complex<i32>, im));
        assert_eq!(size_of::<Direction2<f32>>(), size_of::<Rotator2<f32>>());
    }

    #[test]
    fn vector_views_are_the_same_memory() {
        let v = Vector2::new(1.0f64, 2.0);
        let c: &Complex<f64> = v.as_complex();
        assert!(std::ptr::eq(
            c as *const Complex<f64> as *const u8,
            &v as *const Vector2<f64> as *const u8
        ));
        assert_eq!((c.re, c.im), (1.0, 2.0));
    }

    #[test]
    fn vectors_cast_to_flat_floats() {
        let points = [Vector2::new(1.0f32, 2.0), Vector2::new(3.0, 4.0)];
        let flat: &[f32] = bytemuck::cast_slice(&points);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);

        let m = Matrix2x2::new(Vector2::new(1.0f64, 2.0), Vector2::new(3.0, 4.0));
        let flat: &[f64] = bytemuck::cast_slice(std::slice::from_ref(&m));
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn directions_can_be_written_out_as_floats() {
        let dirs = [Direction2::<f32>::up(), Direction2::right()];
        let flat: &[f32] = bytemuck::cast_slice(&dirs);
        assert_eq!(flat, &[0.0, 1.0, 1.0, 0.0]);
    }
}
