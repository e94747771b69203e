//! Scene transforms and the `Display` aggregate.

use log::warn;

use crate::behavior::{Behavior, ScheduledBehavior};
use crate::camera::Camera;
use crate::error::RenderResult;
use crate::light::Light;
use crate::math::{inv_transpose_3, rotation_x, rotation_y, rotation_z, scale, translation, Mat4, Vec3};
use crate::mesh::{Mesh, Vertex};

/// Applies the 4x4 transform `t` to every triangle's three positions, and
/// the inverse-transpose of `t`'s upper-left 3x3 to every vertex normal
/// (renormalized). This is the correct normal transform under
/// non-uniform scaling.
pub fn mesh_abs(mesh: &mut Mesh, t: &Mat4) -> RenderResult<()> {
    let normal_mat = inv_transpose_3(t)?;

    for tri in mesh.triangles.iter_mut() {
        for vertex in [&mut tri.a, &mut tri.b, &mut tri.c] {
            transform_vertex(vertex, t, &normal_mat);
        }
    }

    Ok(())
}

fn transform_vertex(vertex: &mut Vertex, t: &Mat4, normal_mat: &crate::math::Mat3) {
    let pos4 = t * vertex.position.push(1.0);
    vertex.position = pos4.xyz() / pos4.w;

    let n = normal_mat * vertex.normal;
    if n.norm() > f32::EPSILON {
        vertex.normal = n.normalize();
    }
}

/// Applies `t` about the mesh's own centroid: `translate(c) * t *
/// translate(-c)`, implemented by calling `mesh_abs` three times in
/// sequence (move the centroid to the origin, apply `t`, move it back).
pub fn mesh_rel(mesh: &mut Mesh, t: &Mat4) -> RenderResult<()> {
    let c = mesh.center();

    mesh_abs(mesh, &translation(-c))?;
    mesh_abs(mesh, t)?;
    mesh_abs(mesh, &translation(c))?;

    Ok(())
}

/// A frame's output buffers, one glyph codepoint and one 24-bit RGB value
/// per cell, plus the background used for transparency compositing.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub glyphs: Vec<char>,
    pub colors: Vec<[u8; 3]>,
    pub background: Vec3,
}

/// The top-level scene aggregate: meshes, lights, camera, and the frame
/// counter / run flag the outer application loop consults.
pub struct Display {
    pub meshes: Vec<Mesh>,
    pub lights: Vec<Light>,
    pub camera: Camera,
    pub background: Vec3,
    pub width: u32,
    pub height: u32,
    pub frame_count: u64,
    pub running: bool,
    pub behaviors: Vec<ScheduledBehavior>,
}

impl Display {
    pub fn new(camera: Camera, width: u32, height: u32) -> Self {
        assert!(width >= 1 && height >= 1, "Display: width and height must be >= 1");

        Display {
            meshes: Vec::new(),
            lights: Vec::new(),
            camera,
            background: Vec3::zeros(),
            width,
            height,
            frame_count: 0,
            running: true,
            behaviors: Vec::new(),
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn schedule(&mut self, behavior: ScheduledBehavior) {
        self.behaviors.push(behavior);
    }

    /// Releases all owned meshes and lights, resetting the frame counter.
    /// Textures and materials, owned exclusively by their mesh's material,
    /// are dropped along with the mesh.
    pub fn reset(&mut self) {
        self.meshes.clear();
        self.lights.clear();
        self.frame_count = 0;
    }

    /// Executes every scheduled behavior whose trigger permits this frame.
    /// Out-of-range mesh targets are logged and skipped rather than
    /// panicking, consistent with the pipeline being infallible at the
    /// per-primitive level.
    pub fn run_behaviors(&mut self, dt: f32) {
        let frame_count = self.frame_count;

        for scheduled in &self.behaviors {
            if !scheduled.should_run(frame_count) {
                continue;
            }

            if let Err(reason) = apply_behavior(&mut self.meshes, scheduled.behavior, dt) {
                warn!("behavior skipped: {reason}");
            }
        }
    }
}

fn apply_behavior(meshes: &mut [Mesh], behavior: Behavior, dt: f32) -> Result<(), String> {
    match behavior {
        Behavior::Rotate {
            target,
            axis,
            degrees_per_second,
        } => {
            let mesh = target_mesh(meshes, target)?;
            let theta = (degrees_per_second * dt).to_radians();
            let t = axis_rotation(axis, theta);
            mesh_rel(mesh, &t).map_err(|e| e.to_string())
        }
        Behavior::Translate { target, delta } => {
            let mesh = target_mesh(meshes, target)?;
            mesh_abs(mesh, &translation(delta)).map_err(|e| e.to_string())
        }
        Behavior::MoveToward {
            target,
            destination,
            speed,
        } => {
            let mesh = target_mesh(meshes, target)?;
            let center = mesh.center();
            let to_dest = destination - center;
            let dist = to_dest.norm();
            let step = speed * dt;

            let delta = if dist <= step || dist < f32::EPSILON {
                to_dest
            } else {
                to_dest.normalize() * step
            };

            mesh_abs(mesh, &translation(delta)).map_err(|e| e.to_string())
        }
        Behavior::Scale { target, factor } => {
            let mesh = target_mesh(meshes, target)?;
            mesh_rel(mesh, &scale(factor)).map_err(|e| e.to_string())
        }
    }
}

fn target_mesh(meshes: &mut [Mesh], target: usize) -> Result<&mut Mesh, String> {
    meshes
        .get_mut(target)
        .ok_or_else(|| format!("behavior target index {target} out of range"))
}

/// Builds a rotation matrix about an arbitrary (non-axis-aligned) axis by
/// composing the three axis rotations when `axis` happens to be axis
/// aligned, falling back to Rodrigues' formula otherwise. Axis-aligned
/// behaviors are the common case driven by scene scripts.
fn axis_rotation(axis: Vec3, theta: f32) -> Mat4 {
    if axis.x.abs() > 1.0 - 1e-6 {
        return rotation_x(theta * axis.x.signum());
    }
    if axis.y.abs() > 1.0 - 1e-6 {
        return rotation_y(theta * axis.y.signum());
    }
    if axis.z.abs() > 1.0 - 1e-6 {
        return rotation_z(theta * axis.z.signum());
    }

    // Rodrigues' rotation formula, negated-angle convention to match
    // rotation_x/y/z.
    let a = axis.normalize();
    let (s, c) = (-theta).sin_cos();
    let k = crate::math::Mat3::new(0.0, -a.z, a.y, a.z, 0.0, -a.x, -a.y, a.x, 0.0);
    let r3 = crate::math::Mat3::identity() + k * s + k * k * (1.0 - c);

    let mut m = Mat4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r3);
    m
}
