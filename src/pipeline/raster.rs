//! Rasterize & shade stage.

use crate::camera::Camera;
use crate::geometry::Attributes;
use crate::geometry::ScreenVertex;
use crate::light::Light;
use crate::material::Material;
use crate::math::Vec2;
use crate::pipeline::shading::{compose_final_color, shade, to_rgb8};
use crate::texture::sample_or_white;

/// The glyph written for every covered, depth-passing sample:
/// a full block character.
pub const PXCHAR: char = '█';

/// Rasterizes one screen-space triangle into `glyphs`/`colors`/`depth`,
/// which are expected to already be sized `width * height` and laid out
/// row-major.
#[allow(clippy::too_many_arguments)]
pub fn rasterize_triangle(
    tri: &[ScreenVertex<Attributes>; 3],
    material: &Material,
    camera: &Camera,
    lights: &[Light],
    background: crate::math::Vec3,
    width: u32,
    height: u32,
    glyphs: &mut [char],
    colors: &mut [[u8; 3]],
    depth: &mut [f32],
) {
    let p0 = to_pixel_space(&tri[0], width, height);
    let p1 = to_pixel_space(&tri[1], width, height);
    let p2 = to_pixel_space(&tri[2], width, height);

    let area = edge(p0, p1, p2);
    if area == 0.0 {
        return;
    }

    let min_x = p0.0.min(p1.0).min(p2.0).floor().max(0.0) as u32;
    let max_x = p0.0.max(p1.0).max(p2.0).ceil().min((width - 1) as f32) as u32;
    let min_y = p0.1.min(p1.1).min(p2.1).floor().max(0.0) as u32;
    let max_y = p0.1.max(p1.1).max(p2.1).ceil().min((height - 1) as f32) as u32;

    if min_x > max_x || min_y > max_y {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = (x as f32 + 0.5, y as f32 + 0.5);

            let w0 = edge(p1, p2, p) / area;
            let w1 = edge(p2, p0, p) / area;
            let w2 = edge(p0, p1, p) / area;

            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let d = w0 / tri[0].w + w1 / tri[1].w + w2 / tri[2].w;
            if d == 0.0 {
                continue;
            }

            let z_ndc = (tri[0].ndc.z * w0 / tri[0].w
                + tri[1].ndc.z * w1 / tri[1].w
                + tri[2].ndc.z * w2 / tri[2].w)
                / d;

            let index = (y * width + x) as usize;

            if z_ndc >= depth[index] {
                continue;
            }

            let world_pos = perspective_interpolate(
                w0, tri[0].attributes.world_pos,
                w1, tri[1].attributes.world_pos,
                w2, tri[2].attributes.world_pos,
                tri, d,
            );
            let normal = {
                let n = perspective_interpolate(
                    w0, tri[0].attributes.normal,
                    w1, tri[1].attributes.normal,
                    w2, tri[2].attributes.normal,
                    tri, d,
                );
                if n.norm() > f32::EPSILON {
                    n.normalize()
                } else {
                    n
                }
            };
            let uv: Vec2 = perspective_interpolate_vec2(
                w0, tri[0].attributes.uv,
                w1, tri[1].attributes.uv,
                w2, tri[2].attributes.uv,
                tri, d,
            );

            let terms = shade(material, world_pos, normal, camera, lights);
            let tex = sample_or_white(material.diffuse_tex.as_deref(), uv);
            let color = compose_final_color(terms, tex, material.transparency, background);

            depth[index] = z_ndc;
            glyphs[index] = PXCHAR;
            colors[index] = to_rgb8(color);
        }
    }
}

fn to_pixel_space(v: &ScreenVertex<Attributes>, width: u32, height: u32) -> (f32, f32) {
    let px = (v.ndc.x + 1.0) / 2.0 * width as f32;
    let py = (1.0 - v.ndc.y) / 2.0 * height as f32;
    (px, py)
}

/// `edge(a,b,c) = (c.x-a.x)(b.y-a.y) - (b.x-a.x)(c.y-a.y)`.
fn edge(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (c.0 - a.0) * (b.1 - a.1) - (b.0 - a.0) * (c.1 - a.1)
}

fn perspective_interpolate(
    w0: f32,
    v0: crate::math::Vec3,
    w1: f32,
    v1: crate::math::Vec3,
    w2: f32,
    v2: crate::math::Vec3,
    tri: &[ScreenVertex<Attributes>; 3],
    d: f32,
) -> crate::math::Vec3 {
    (v0 * (w0 / tri[0].w) + v1 * (w1 / tri[1].w) + v2 * (w2 / tri[2].w)) / d
}

fn perspective_interpolate_vec2(
    w0: f32,
    v0: Vec2,
    w1: f32,
    v1: Vec2,
    w2: f32,
    v2: Vec2,
    tri: &[ScreenVertex<Attributes>; 3],
    d: f32,
) -> Vec2 {
    (v0 * (w0 / tri[0].w) + v1 * (w1 / tri[1].w) + v2 * (w2 / tri[2].w)) / d
}
