use crate::interpolate::Interpolate;
use crate::math::{Vec2, Vec3};

/// The attributes carried by every triangle corner through the clip and
/// rasterize stages: world-space position, world-space normal, and UV.
///
/// This is the concrete `K` that `ClipVertex<K>` / `ScreenVertex<K>` are
/// instantiated with — the pipeline only ever needs this one fixed
/// attribute bundle, so there is no generic uniforms machinery on top of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attributes {
    pub world_pos: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Interpolate for Attributes {
    #[inline]
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self {
        Attributes {
            world_pos: Interpolate::barycentric_interpolate(
                u, &x1.world_pos, v, &x2.world_pos, w, &x3.world_pos,
            ),
            normal: Interpolate::barycentric_interpolate(
                u, &x1.normal, v, &x2.normal, w, &x3.normal,
            ),
            uv: Interpolate::barycentric_interpolate(u, &x1.uv, v, &x2.uv, w, &x3.uv),
        }
    }

    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        Attributes {
            world_pos: Interpolate::linear_interpolate(t, &x1.world_pos, &x2.world_pos),
            normal: Interpolate::linear_interpolate(t, &x1.normal, &x2.normal),
            uv: Interpolate::linear_interpolate(t, &x1.uv, &x2.uv),
        }
    }
}
