//! Point lights.

use crate::math::Vec3;

/// A point light. Lights outside `radius` contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Normalized to `[0, 1]` per component.
    pub color: Vec3,
    pub brightness: f32,
    pub radius: f32,
}

impl Light {
    pub fn new(position: Vec3, color: Vec3, brightness: f32, radius: f32) -> Self {
        Light {
            position,
            color: color.map(|c| c.clamp(0.0, 1.0)),
            brightness,
            radius,
        }
    }

    pub fn white(position: Vec3, brightness: f32, radius: f32) -> Self {
        Light::new(position, Vec3::new(1.0, 1.0, 1.0), brightness, radius)
    }
}
