//! Blinn-Phong shading.

use crate::camera::Camera;
use crate::light::Light;
use crate::material::Material;
use crate::math::Vec3;

/// Accumulated ambient/diffuse/specular terms before texture modulation
/// and transparency mixing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedTerms {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

/// Computes per-sample Blinn-Phong lighting at `world_pos` with surface
/// normal `normal` (expected unit length), against every light in `lights`.
///
/// Deliberately does **not** apply distance attenuation to the diffuse
/// term, only to specular — a faithfully-reproduced quirk of the source
/// design, not an oversight.
pub fn shade(
    material: &Material,
    world_pos: Vec3,
    normal: Vec3,
    camera: &Camera,
    lights: &[Light],
) -> ShadedTerms {
    let ambient = clamp01(material.ambient);

    let mut diffuse = Vec3::zeros();
    let mut specular = Vec3::zeros();

    let view = (camera.position - world_pos).normalize();

    for light in lights {
        let to_light_raw = light.position - world_pos;
        let dist = to_light_raw.norm();

        if dist > light.radius {
            continue;
        }

        let to_light = if dist > f32::EPSILON {
            to_light_raw / dist
        } else {
            to_light_raw
        };

        let n_dot_l = normal.dot(&to_light).max(0.0);
        if n_dot_l <= 0.0 {
            continue;
        }

        let half = (view + to_light).normalize();
        let n_dot_h = normal.dot(&half).max(0.0);
        let spec_factor = n_dot_h.powf(material.shininess);

        let attenuation = 1.0 / (1.0 + (dist / light.radius).powi(2));

        diffuse += material.diffuse.component_mul(&light.color) * (light.brightness * n_dot_l);
        specular += material.specular.component_mul(&light.color)
            * (light.brightness * spec_factor * attenuation);
    }

    ShadedTerms {
        ambient,
        diffuse: clamp01(diffuse),
        specular: clamp01(specular),
    }
}

fn clamp01(v: Vec3) -> Vec3 {
    v.map(|c| c.clamp(0.0, 1.0))
}

/// Combines shaded terms with a sampled texture color, mixes against the
/// background by `transparency`, and clamps to `[0, 1]`:
/// `c = (ambient + diffuse) * tex + specular`, then
/// `lerp(background, c, transparency)`.
pub fn compose_final_color(
    terms: ShadedTerms,
    tex: Vec3,
    transparency: f32,
    background: Vec3,
) -> Vec3 {
    let c = (terms.ambient + terms.diffuse).component_mul(&tex) + terms.specular;
    let mixed = background * (1.0 - transparency) + c * transparency;
    clamp01(mixed)
}

/// Converts a clamped `[0, 1]` color to 8-bit RGB via rounding.
pub fn to_rgb8(c: Vec3) -> [u8; 3] {
    [
        (c.x * 255.0).round() as u8,
        (c.y * 255.0).round() as u8,
        (c.z * 255.0).round() as u8,
    ]
}
