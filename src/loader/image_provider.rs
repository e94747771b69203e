//! Pluggable texture decoding.

use std::path::Path;

use crate::error::{RenderError, RenderResult};

/// A decoded image: width, height, and a flat row-major RGB byte buffer
/// (always 3 channels — any alpha channel is dropped by the provider).
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// Decodes an image file into raw RGB samples. The core never decodes
/// images itself; callers supply an implementation, or use the bundled
/// `image`-crate-backed one behind the `image_compat` feature.
pub trait ImageProvider {
    fn decode(&self, path: &Path) -> RenderResult<DecodedImage>;
}

/// An `ImageProvider` that always fails, used where no texture decoding is
/// wanted or available — textures referenced in an MTL simply fall back to
/// opaque white with a logged warning.
#[derive(Debug, Default)]
pub struct NullImageProvider;

impl ImageProvider for NullImageProvider {
    fn decode(&self, path: &Path) -> RenderResult<DecodedImage> {
        Err(RenderError::TextureDecodeFailed(path.to_path_buf()))
    }
}

#[cfg(feature = "image_compat")]
pub struct ImageCrateProvider;

#[cfg(feature = "image_compat")]
impl ImageProvider for ImageCrateProvider {
    fn decode(&self, path: &Path) -> RenderResult<DecodedImage> {
        let img = image::open(path).map_err(|_| RenderError::TextureDecodeFailed(path.to_path_buf()))?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        if width == 0 || height == 0 {
            return Err(RenderError::TextureDecodeFailed(path.to_path_buf()));
        }

        Ok(DecodedImage {
            width,
            height,
            rgb: rgb.into_raw(),
        })
    }
}
