use crate::interpolate::Interpolate;
use crate::math::Vec4;

use super::ScreenVertex;

/// A vertex and its attribute bundle in clip space, as produced by the
/// transform stage before near-plane clipping and NDC projection.
#[derive(Debug, Clone)]
pub struct ClipVertex<K>
where
    K: Clone,
{
    /// Clip-space position `(x, y, z, w)`.
    pub position: Vec4,
    /// Attributes to be interpolated alongside `position`.
    pub attributes: K,
}

impl<K> ClipVertex<K>
where
    K: Clone,
{
    #[inline]
    pub fn new(position: Vec4, attributes: K) -> Self {
        ClipVertex { position, attributes }
    }

    /// A vertex is inside the near half-space iff `z + w >= 0`.
    #[inline]
    pub fn inside_near_plane(&self) -> bool {
        self.position.z + self.position.w >= 0.0
    }

    /// Projects clip-space `position` down to NDC and pairs it with the
    /// original clip-space `w`, producing the `ScreenVertex` the
    /// rasterizer works with.
    ///
    /// Callers are expected to have already discarded triangles where any
    /// corner has `w <= 0` (the invariant established by near-plane
    /// clipping).
    pub fn into_screen(self) -> ScreenVertex<K> {
        let w = self.position.w;
        let ndc = self.position.xyz() / w;

        ScreenVertex {
            ndc,
            w,
            attributes: self.attributes,
        }
    }
}

impl<K> Interpolate for ClipVertex<K>
where
    K: Interpolate,
{
    #[inline]
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        ClipVertex {
            position: Interpolate::barycentric_interpolate(
                u, &x1.position, v, &x2.position, w, &x3.position,
            ),
            attributes: Interpolate::barycentric_interpolate(
                u, &x1.attributes, v, &x2.attributes, w, &x3.attributes,
            ),
        }
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        ClipVertex {
            position: Interpolate::linear_interpolate(t, &x1.position, &x2.position),
            attributes: Interpolate::linear_interpolate(t, &x1.attributes, &x2.attributes),
        }
    }
}
