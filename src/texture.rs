//! Decoded texture storage and sampling.

use crate::math::Vec3;

/// A decoded RGB raster, channel values in `[0, 1]`.
///
/// `Texture` always reports a channel count of 3: the source data is RGB,
/// never RGBA.
#[derive(Debug, Clone)]
pub struct Texture {
    width: u32,
    height: u32,
    samples: Vec<Vec3>,
}

impl Texture {
    /// Builds a texture from a flat row-major array of RGB samples in
    /// `[0, 1]`. Panics if `samples.len() != width * height`; this is a
    /// programmer-error invariant the loader is responsible for upholding,
    /// not a recoverable runtime condition.
    pub fn new(width: u32, height: u32, samples: Vec<Vec3>) -> Self {
        assert_eq!(
            samples.len(),
            (width as usize) * (height as usize),
            "Texture::new: sample count does not match width * height"
        );
        Texture { width, height, samples }
    }

    /// A single opaque-white 1x1 texture, used wherever a missing texture
    /// reference must still produce a sample.
    pub fn opaque_white() -> Self {
        Texture::new(1, 1, vec![Vec3::new(1.0, 1.0, 1.0)])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u32 {
        3
    }

    /// Nearest-neighbor sample at UV coordinates, wrapped into `[0, 1)`
    /// via `fract` so textures tile rather than clamp.
    pub fn sample(&self, uv: crate::math::Vec2) -> Vec3 {
        let u = wrap01(uv.x);
        let v = wrap01(uv.y);

        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        self.samples[(y * self.width + x) as usize]
    }
}

fn wrap01(x: f32) -> f32 {
    let f = x.fract();
    if f < 0.0 {
        f + 1.0
    } else {
        f
    }
}

/// Samples an optional texture reference, yielding opaque white when
/// `tex` is `None`.
pub fn sample_or_white(tex: Option<&Texture>, uv: crate::math::Vec2) -> Vec3 {
    match tex {
        Some(t) => t.sample(uv),
        None => Vec3::new(1.0, 1.0, 1.0),
    }
}
