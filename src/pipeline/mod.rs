//! The rendering pipeline: transform & clip, rasterize & shade,
//! frame composition, and the per-frame driver.

pub mod frame;
pub mod raster;
pub mod shading;
pub mod transform_clip;

pub use self::frame::RendererContext;
pub use self::transform_clip::ProjectedTriangle;
