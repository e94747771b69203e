//! Camera model.

use crate::math::{rotation_x, rotation_y, Mat4, Vec3};

/// Perspective camera. `rotation` is rebuilt from `pitch`/`yaw` by
/// `rebuild_rotation` after any input event changes them; roll is not
/// represented.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Mat4,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
}

impl Camera {
    pub fn new(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Camera {
            position,
            rotation: Mat4::identity(),
            fov_degrees,
            aspect,
            near,
            far,
            yaw: 0.0,
            pitch: 0.0,
            speed: 1.0,
        };
        camera.rebuild_rotation();
        camera
    }

    /// Rebuilds `rotation` as `Rx(pitch) * Ry(yaw)`, the invariant the
    /// camera must uphold after every yaw/pitch mutation.
    pub fn rebuild_rotation(&mut self) {
        self.rotation = rotation_x(self.pitch) * rotation_y(self.yaw);
    }

    pub fn set_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.rebuild_rotation();
    }

    /// The view matrix: `matrot * translate(-position)`.
    pub fn view_matrix(&self) -> Mat4 {
        self.rotation * crate::math::translation(-self.position)
    }
}
