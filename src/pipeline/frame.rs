//! Persistent per-frame scratch buffers and the frame driver.

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::display::{Display, Frame};
use crate::error::RenderResult;
use crate::math::Vec3;
use crate::pipeline::raster::rasterize_triangle;
use crate::pipeline::transform_clip::{transform_and_clip_triangle, view_projection};

/// Owns the glyph/color/depth buffers across frames so steady-state
/// rendering does not allocate once the buffers have settled on a size.
/// Resizes only when `width`/`height` change from the previous call.
pub struct RendererContext {
    width: u32,
    height: u32,
    glyphs: Vec<char>,
    colors: Vec<[u8; 3]>,
    depth: Vec<f32>,
}

impl RendererContext {
    pub fn new() -> Self {
        RendererContext {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
            colors: Vec::new(),
            depth: Vec::new(),
        }
    }

    fn ensure_size(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }

        let len = (width * height) as usize;
        self.glyphs = vec![' '; len];
        self.colors = vec![[0u8; 3]; len];
        self.depth = vec![f32::INFINITY; len];
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.glyphs.iter_mut().for_each(|g| *g = ' ');
        self.colors.iter_mut().for_each(|c| *c = [0, 0, 0]);
        self.depth.iter_mut().for_each(|d| *d = f32::INFINITY);
    }

    /// Runs one full frame: scheduled behaviors, transform & clip,
    /// rasterize & shade for every triangle of every mesh, and hands back
    /// the composed `Frame`. Advances `display.frame_count` by one.
    ///
    /// Pipeline errors (a degenerate projection, a singular normal matrix
    /// from a mesh transform) abort the whole frame rather than emitting a
    /// partially-shaded one, per the error handling design.
    pub fn render_frame(&mut self, display: &mut Display, dt: f32) -> RenderResult<Frame> {
        self.render_frame_with_config(display, dt, &RendererConfig::default())
    }

    pub fn render_frame_with_config(
        &mut self,
        display: &mut Display,
        dt: f32,
        config: &RendererConfig,
    ) -> RenderResult<Frame> {
        display.run_behaviors(dt);

        self.ensure_size(display.width, display.height);
        self.clear();

        let vp = view_projection(&display.camera)?;

        for mesh in &display.meshes {
            for triangle in &mesh.triangles {
                let projected = transform_and_clip_triangle(triangle, &vp, &display.camera, config);

                for tri in &projected {
                    rasterize_triangle(
                        tri,
                        &mesh.material,
                        &display.camera,
                        &display.lights,
                        display.background,
                        display.width,
                        display.height,
                        &mut self.glyphs,
                        &mut self.colors,
                        &mut self.depth,
                    );
                }
            }
        }

        display.frame_count += 1;

        Ok(Frame {
            width: display.width,
            height: display.height,
            glyphs: self.glyphs.clone(),
            colors: self.colors.clone(),
            background: display.background,
        })
    }
}

impl Default for RendererContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around a `Camera` used only to keep test setup
/// terse below; production callers build `Camera` directly.
#[cfg(test)]
fn test_camera(z: f32) -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, z), 90.0, 1.0, 0.1, 100.0)
}
