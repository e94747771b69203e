//! Shader-stage geometry structures: clip-space and screen-space vertices,
//! the attribute bundle they carry, face winding, and near-plane clipping.

mod attributes;
mod clip;
mod clipvertex;
mod screenvertex;
mod winding;

pub use self::attributes::Attributes;
pub use self::clip::clip_triangle_near;
pub use self::clipvertex::ClipVertex;
pub use self::screenvertex::ScreenVertex;
pub use self::winding::FaceWinding;
