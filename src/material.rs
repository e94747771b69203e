//! Material definitions.

use std::sync::Arc;

use crate::math::Vec3;
use crate::texture::Texture;

/// Surface material properties, mirroring the fields an MTL file can set.
#[derive(Debug, Clone)]
pub struct Material {
    /// Ka
    pub ambient: Vec3,
    /// Kd
    pub diffuse: Vec3,
    /// Ks
    pub specular: Vec3,
    /// Ns
    pub shininess: f32,
    /// d, mix factor against background
    pub transparency: f32,
    /// Lighting model tag, carried through from MTL but not otherwise
    /// interpreted by the pipeline (the pipeline always shades with
    /// Blinn-Phong).
    pub illum: u32,
    pub diffuse_tex: Option<Arc<Texture>>,
    pub specular_tex: Option<Arc<Texture>>,
    pub normal_tex: Option<Arc<Texture>>,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            ambient: Vec3::new(0.2, 0.2, 0.2),
            diffuse: Vec3::new(0.8, 0.8, 0.8),
            specular: Vec3::new(1.0, 1.0, 1.0),
            shininess: 32.0,
            transparency: 1.0,
            illum: 2,
            diffuse_tex: None,
            specular_tex: None,
            normal_tex: None,
        }
    }
}
