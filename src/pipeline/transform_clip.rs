//! Transform & clip stage.

use log::trace;

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::error::RenderResult;
use crate::geometry::{clip_triangle_near, Attributes, ClipVertex, FaceWinding, ScreenVertex};
use crate::mesh::Triangle;

/// A triangle that survived transform, clipping, culling, and NDC-bounds
/// rejection, ready for rasterization.
pub type ProjectedTriangle = [ScreenVertex<Attributes>; 3];

/// Builds the view-projection matrix for this frame: `P = projection(...)`,
/// `V = matrot * translate(-cam.pos)`, `VP = P * V`.
pub fn view_projection(camera: &Camera) -> RenderResult<crate::math::Mat4> {
    let p = crate::math::projection(camera.near, camera.far, camera.fov_degrees, camera.aspect)?;
    let v = camera.view_matrix();
    Ok(p * v)
}

/// Runs transform and clipping over a single source triangle, returning
/// zero, one, or two triangles depending on how near-plane clipping,
/// backface culling, and NDC-bounds rejection affect it.
pub fn transform_and_clip_triangle(
    triangle: &Triangle,
    vp: &crate::math::Mat4,
    camera: &Camera,
    config: &RendererConfig,
) -> Vec<ProjectedTriangle> {
    let clip_verts: Vec<ClipVertex<Attributes>> = triangle
        .corners()
        .into_iter()
        .map(|v| {
            let clip_pos = vp * v.position.push(1.0);
            ClipVertex::new(
                clip_pos,
                Attributes {
                    world_pos: v.position,
                    normal: v.normal,
                    uv: v.uv,
                },
            )
        })
        .collect();

    let clipped = clip_triangle_near(
        clip_verts[0].clone(),
        clip_verts[1].clone(),
        clip_verts[2].clone(),
    );

    let mut out = Vec::with_capacity(clipped.len());

    for [a, b, c] in clipped.into_iter() {
        debug_assert!(a.position.w > 0.0 && b.position.w > 0.0 && c.position.w > 0.0);

        if config.cull_backfaces && is_backface(&a, &b, &c, camera) {
            trace!("triangle culled (backface)");
            continue;
        }

        let sa = a.into_screen();
        let sb = b.into_screen();
        let sc = c.into_screen();

        if ndc_bounds_reject(&sa, &sb, &sc) {
            trace!("triangle rejected (outside NDC bounds)");
            continue;
        }

        out.push([sa, sb, sc]);
    }

    out
}

/// World-space backface test: cull when
/// `((vy - vx) cross (vz - vx)) dot (vx - cam.pos) >= 0`.
fn is_backface(
    a: &ClipVertex<Attributes>,
    b: &ClipVertex<Attributes>,
    c: &ClipVertex<Attributes>,
    camera: &Camera,
) -> bool {
    let ab = b.attributes.world_pos - a.attributes.world_pos;
    let ac = c.attributes.world_pos - a.attributes.world_pos;
    let face_normal = ab.cross(&ac);
    let to_camera = a.attributes.world_pos - camera.position;
    face_normal.dot(&to_camera) >= 0.0
}

/// Rejects a whole triangle when all three NDC corners lie strictly
/// outside any one of the six NDC bounds.
fn ndc_bounds_reject(
    a: &ScreenVertex<Attributes>,
    b: &ScreenVertex<Attributes>,
    c: &ScreenVertex<Attributes>,
) -> bool {
    macro_rules! all_outside {
        ($axis:ident, $op:tt, $bound:expr) => {
            a.ndc.$axis $op $bound && b.ndc.$axis $op $bound && c.ndc.$axis $op $bound
        };
    }

    all_outside!(x, <, -1.0)
        || all_outside!(x, >, 1.0)
        || all_outside!(y, <, -1.0)
        || all_outside!(y, >, 1.0)
        || all_outside!(z, <, -1.0)
        || all_outside!(z, >, 1.0)
}

/// Determines the winding of a screen-space triangle, used by callers that
/// need explicit `FaceWinding` rather than a boolean cull decision (e.g.
/// symmetry tests).
pub fn screen_winding(a: &ScreenVertex<Attributes>, b: &ScreenVertex<Attributes>, c: &ScreenVertex<Attributes>) -> FaceWinding {
    let area = (c.ndc.x - a.ndc.x) * (b.ndc.y - a.ndc.y) - (b.ndc.x - a.ndc.x) * (c.ndc.y - a.ndc.y);
    if area.is_sign_negative() {
        FaceWinding::Clockwise
    } else {
        FaceWinding::CounterClockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec3};
    use crate::mesh::Vertex;

    fn simple_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 0.0), 90.0, 1.0, 0.1, 100.0)
    }

    fn tri_at(z: f32) -> Triangle {
        Triangle::new(
            Vertex::new(Vec3::new(-1.0, -1.0, z), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(1.0, -1.0, z), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(0.0, 1.0, z), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
        )
    }

    #[test]
    fn in_frustum_triangle_survives_with_bounded_ndc() {
        let camera = simple_camera();
        let config = RendererConfig::default();
        let vp = view_projection(&camera).unwrap();

        let tris = transform_and_clip_triangle(&tri_at(-5.0), &vp, &camera, &config);
        assert_eq!(tris.len(), 1);

        for v in &tris[0] {
            assert!(v.ndc.x.abs() <= 1.0 && v.ndc.y.abs() <= 1.0 && v.ndc.z.abs() <= 1.0);
            assert!(v.w > 0.0);
        }
    }

    #[test]
    fn behind_near_plane_triangle_is_dropped() {
        let camera = simple_camera();
        let config = RendererConfig::default();
        let vp = view_projection(&camera).unwrap();

        // z = +5 is in front of the camera (camera looks down -Z), so this
        // is entirely behind the near plane.
        let tris = transform_and_clip_triangle(&tri_at(5.0), &vp, &camera, &config);
        assert!(tris.is_empty());
    }

    #[test]
    fn backface_culling_is_symmetric_for_reversed_winding() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), 90.0, 1.0, 0.1, 100.0);
        let config = RendererConfig::default();
        let vp = view_projection(&camera).unwrap();

        let forward = tri_at(-5.0);
        let reversed = Triangle::new(forward.c, forward.b, forward.a);

        let forward_tris = transform_and_clip_triangle(&forward, &vp, &camera, &config);
        let reversed_tris = transform_and_clip_triangle(&reversed, &vp, &camera, &config);

        assert_ne!(forward_tris.is_empty(), reversed_tris.is_empty());
    }
}
