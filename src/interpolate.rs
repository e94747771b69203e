//! Interpolation utilities.
//!
//! Any type carried as a vertex attribute through the clip/rasterize stages
//! implements `Interpolate`, and the clipping and rasterization code is
//! generic over it rather than hand-interpolating each attribute field by
//! field.

use nalgebra::{Vector2, Vector3, Vector4};

/// Describes a type that can be interpolated with barycentric coordinates
/// or linearly along an edge.
///
/// See <https://classes.soe.ucsc.edu/cmps160/Fall10/resources/barycentricInterpolation.pdf>.
pub trait Interpolate: Clone {
    /// Interpolate the three values with their corresponding barycentric
    /// coordinate weight.
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self;

    /// Simple linear interpolation between two values at parameter `t`.
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        x1 * u + x2 * v + x3 * w
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        x1 * (1.0 - t) + x2 * t
    }
}

macro_rules! impl_interpolate_for_vector {
    ($ty:ty) => {
        impl Interpolate for $ty {
            #[inline]
            fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
                x1 * u + x2 * v + x3 * w
            }

            #[inline]
            fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
                x1 * (1.0 - t) + x2 * t
            }
        }
    };
}

impl_interpolate_for_vector!(Vector2<f32>);
impl_interpolate_for_vector!(Vector3<f32>);
impl_interpolate_for_vector!(Vector4<f32>);

impl Interpolate for () {
    #[inline(always)]
    fn barycentric_interpolate(_: f32, _: &Self, _: f32, _: &Self, _: f32, _: &Self) -> Self {}

    #[inline(always)]
    fn linear_interpolate(_: f32, _: &Self, _: &Self) -> Self {}
}
