//! Mesh and triangle data model.

use std::sync::Arc;

use crate::material::Material;
use crate::math::{Vec2, Vec3};

/// One corner of a triangle: world-space position, UV, and vertex normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, uv: Vec2, normal: Vec3) -> Self {
        Vertex { position, uv, normal }
    }
}

/// A flat, always-triangulated triangle: three independent vertex records.
/// Winding is the order given by the source face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Triangle { a, b, c }
    }

    /// The three corners as an array, convenient for iteration.
    pub fn corners(&self) -> [Vertex; 3] {
        [self.a, self.b, self.c]
    }

    /// Unnormalized face normal from the edge cross product
    /// `(b - a) x (c - a)`.
    pub fn face_normal_unnormalized(&self) -> Vec3 {
        (self.b.position - self.a.position).cross(&(self.c.position - self.a.position))
    }
}

/// A named, ordered sequence of triangles sharing exactly one material.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub triangles: Vec<Triangle>,
    pub material: Arc<Material>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>, material: Arc<Material>) -> Self {
        Mesh {
            name: name.into(),
            triangles,
            material,
        }
    }

    /// Arithmetic mean of all triangle corners (3 per triangle, with
    /// repetition for shared vertices — a deliberate quirk, not a
    /// unique-vertex centroid).
    pub fn center(&self) -> Vec3 {
        if self.triangles.is_empty() {
            return Vec3::zeros();
        }

        let mut sum = Vec3::zeros();
        let mut count = 0usize;

        for tri in &self.triangles {
            for v in tri.corners() {
                sum += v.position;
                count += 1;
            }
        }

        sum / (count as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    fn tri(ax: f32, ay: f32) -> Triangle {
        Triangle::new(
            Vertex::new(Vec3::new(ax, ay, 0.0), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(ax + 1.0, ay, 0.0), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(ax, ay + 1.0, 0.0), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
        )
    }

    #[test]
    fn center_averages_corners_with_repetition() {
        let mesh = Mesh::new("m", vec![tri(0.0, 0.0)], Arc::new(Material::default()));
        // Corners: (0,0), (1,0), (0,1) -> average (1/3, 1/3, 0)
        let c = mesh.center();
        assert!((c - Vec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn empty_mesh_center_is_zero() {
        let mesh = Mesh::new("m", vec![], Arc::new(Material::default()));
        assert_eq!(mesh.center(), Vec3::zeros());
    }
}
