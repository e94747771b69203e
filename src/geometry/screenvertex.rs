use crate::math::Vec3;

/// A vertex in normalized device coordinates, paired with its original
/// clip-space `w`, which the rasterizer needs to perform perspective-correct
/// interpolation.
#[derive(Debug, Clone)]
pub struct ScreenVertex<K> {
    /// Normalized device coordinates: `x, y, z` all in `[-1, 1]` for a
    /// visible point.
    pub ndc: Vec3,
    /// The clip-space `w` this vertex was divided by to reach `ndc`.
    pub w: f32,
    /// Attributes to be perspective-correctly interpolated across a
    /// triangle's surface.
    pub attributes: K,
}
