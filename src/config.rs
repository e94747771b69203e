//! Renderer configuration surface.
//!
//! A small, explicit, constructor-argument config struct — not a
//! scattering of booleans threaded through every function, and not a
//! process-global.

/// Options that govern pipeline behavior across the transform/clip and
/// rasterize/shade stages, and loader defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// Whether the transform/clip stage performs backface culling.
    /// Default `true`.
    pub cull_backfaces: bool,
    /// Forces smooth-normal synthesis regardless of the OBJ's `s` flag.
    /// Default `false`.
    pub force_smooth_normals: bool,
    pub default_fov: f32,
    pub default_near: f32,
    pub default_far: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            cull_backfaces: true,
            force_smooth_normals: false,
            default_fov: 60.0,
            default_near: 0.1,
            default_far: 1000.0,
        }
    }
}
