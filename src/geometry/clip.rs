//! Sutherland-Hodgman clipping against the single near plane.

use smallvec::SmallVec;

use crate::interpolate::Interpolate;

use super::ClipVertex;

/// Clips a triangle's three clip-space vertices against the near plane
/// (`z + w >= 0`), returning the resulting convex polygon as 0, 3, or 4
/// vertices, already fan-triangulated into 0, 1, or 2 output triangles.
///
/// A `SmallVec` with inline capacity 4 avoids a heap allocation for the
/// overwhelmingly common case: a triangle clipped by one plane never grows
/// past four vertices.
pub fn clip_triangle_near<K>(
    a: ClipVertex<K>,
    b: ClipVertex<K>,
    c: ClipVertex<K>,
) -> SmallVec<[[ClipVertex<K>; 3]; 2]>
where
    K: Interpolate,
{
    let polygon = sutherland_hodgman_near([a, b, c]);

    let mut triangles = SmallVec::new();

    match polygon.len() {
        0 | 1 | 2 => {}
        3 => {
            let mut it = polygon.into_iter();
            let v0 = it.next().unwrap();
            let v1 = it.next().unwrap();
            let v2 = it.next().unwrap();
            triangles.push([v0, v1, v2]);
        }
        4 => {
            let mut it = polygon.into_iter();
            let v0 = it.next().unwrap();
            let v1 = it.next().unwrap();
            let v2 = it.next().unwrap();
            let v3 = it.next().unwrap();

            triangles.push([v0.clone(), v1, v2.clone()]);
            triangles.push([v0, v2, v3]);
        }
        _ => unreachable!("a triangle clipped by a single plane has at most 4 corners"),
    }

    triangles
}

fn sutherland_hodgman_near<K>(input: [ClipVertex<K>; 3]) -> SmallVec<[ClipVertex<K>; 4]>
where
    K: Interpolate,
{
    let mut output: SmallVec<[ClipVertex<K>; 4]> = SmallVec::new();

    for i in 0..3 {
        let current = &input[i];
        let next = &input[(i + 1) % 3];

        let current_inside = current.inside_near_plane();
        let next_inside = next.inside_near_plane();

        match (current_inside, next_inside) {
            (true, true) => {
                output.push(next.clone());
            }
            (true, false) => {
                output.push(intersect_near(current, next));
            }
            (false, true) => {
                output.push(intersect_near(current, next));
                output.push(next.clone());
            }
            (false, false) => {}
        }
    }

    output
}

/// Linear interpolation at the parameter where the edge `a -> b` crosses
/// `z + w = 0`, applied to every attribute (clip position, world position,
/// normal, uv) via the same `t`.
fn intersect_near<K>(a: &ClipVertex<K>, b: &ClipVertex<K>) -> ClipVertex<K>
where
    K: Interpolate,
{
    let ad = a.position.z + a.position.w;
    let bd = b.position.z + b.position.w;
    let t = ad / (ad - bd);

    Interpolate::linear_interpolate(t, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Attributes;
    use crate::math::{Vec2, Vec3, Vec4};

    fn vertex(x: f32, y: f32, z: f32, w: f32) -> ClipVertex<Attributes> {
        ClipVertex::new(
            Vec4::new(x, y, z, w),
            Attributes {
                world_pos: Vec3::new(x, y, z),
                normal: Vec3::new(0.0, 0.0, 1.0),
                uv: Vec2::new(0.0, 0.0),
            },
        )
    }

    #[test]
    fn fully_inside_yields_one_triangle_unchanged() {
        let a = vertex(-1.0, -1.0, 1.0, 2.0);
        let b = vertex(1.0, -1.0, 1.0, 2.0);
        let c = vertex(0.0, 1.0, 1.0, 2.0);

        let tris = clip_triangle_near(a, b, c);
        assert_eq!(tris.len(), 1);
    }

    #[test]
    fn fully_outside_yields_no_triangles() {
        // z + w < 0 for all three.
        let a = vertex(-1.0, -1.0, -5.0, 1.0);
        let b = vertex(1.0, -1.0, -5.0, 1.0);
        let c = vertex(0.0, 1.0, -5.0, 1.0);

        let tris = clip_triangle_near(a, b, c);
        assert_eq!(tris.len(), 0);
    }

    #[test]
    fn straddling_yields_two_triangles_with_corners_on_plane() {
        // a and b are inside (z + w = 1 >= 0), c is outside (z + w = -1 < 0):
        // two inside vertices clipped against one plane yields a 4-corner
        // quad, fan-triangulated into two triangles.
        let a = vertex(0.0, 1.0, 0.0, 1.0);
        let b = vertex(-1.0, -1.0, 0.0, 1.0);
        let c = vertex(1.0, -1.0, -2.0, 1.0);

        let tris = clip_triangle_near(a, b, c);
        assert_eq!(tris.len(), 2);

        for tri in &tris {
            for v in tri {
                let d = v.position.z + v.position.w;
                // Either an original inside vertex (d = 1) or an
                // intersection point (d ~= 0).
                assert!(d.abs() < 1e-5 || (d - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn one_inside_vertex_yields_a_single_triangle() {
        // a is inside (z + w = 1 >= 0), b and c are outside (z + w = -1 < 0):
        // one inside vertex clipped against one plane yields a 3-corner
        // polygon, i.e. exactly one triangle.
        let a = vertex(0.0, 1.0, 0.0, 1.0);
        let b = vertex(-1.0, -1.0, -2.0, 1.0);
        let c = vertex(1.0, -1.0, -2.0, 1.0);

        let tris = clip_triangle_near(a, b, c);
        assert_eq!(tris.len(), 1);
    }
}
