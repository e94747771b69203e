//! Folder-pairing asset discovery.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::warn;

use crate::config::RendererConfig;
use crate::error::{RenderError, RenderResult};
use crate::loader::image_provider::ImageProvider;
use crate::loader::smooth::synthesize_smooth_normals;
use crate::loader::{mtl, obj};
use crate::material::Material;
use crate::math::Vec3;
use crate::mesh::Mesh;
use crate::texture::Texture;

/// Scans `dir` for `.obj`/`.mtl` files (case-insensitive) and pairs them
/// into one `Mesh`, resolving any referenced texture paths through
/// `images`. When more than one candidate of a kind is present, the
/// lexicographically-last file name wins, with a logged warning —
/// directory iteration order is not guaranteed by the OS, so sorting by
/// name is what makes this deterministic. Zero `.obj` files is
/// `RenderError::AssetMissing`.
pub fn load_mesh(
    dir: &Path,
    images: &dyn ImageProvider,
    config: &RendererConfig,
) -> RenderResult<Mesh> {
    let mut obj_paths: Vec<PathBuf> = Vec::new();
    let mut mtl_paths: Vec<PathBuf> = Vec::new();
    let mut fallback_image_path: Option<PathBuf> = None;

    let entries = fs::read_dir(dir).map_err(|_| RenderError::AssetMissing(dir.to_path_buf()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let ext_lower = ext.to_ascii_lowercase();

        match ext_lower.as_str() {
            "obj" => obj_paths.push(path),
            "mtl" => mtl_paths.push(path),
            "png" | "jpg" | "jpeg" => fallback_image_path = Some(path),
            _ => {}
        }
    }

    obj_paths.sort();
    mtl_paths.sort();

    if obj_paths.len() > 1 {
        warn!(
            "{}: multiple .obj files found, using the lexicographically-last",
            dir.display()
        );
    }
    if mtl_paths.len() > 1 {
        warn!(
            "{}: multiple .mtl files found, using the lexicographically-last",
            dir.display()
        );
    }

    let obj_path = obj_paths.pop().ok_or_else(|| RenderError::AssetMissing(dir.to_path_buf()))?;
    let mtl_path = mtl_paths.pop();

    let obj_text = fs::read_to_string(&obj_path).map_err(|_| RenderError::AssetMissing(obj_path.clone()))?;
    let mut parsed = obj::parse(&obj_text, &obj_path);

    let mtl_materials = match &mtl_path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|_| RenderError::AssetMissing(path.clone()))?;
            mtl::parse(&text, path)
        }
        None => Vec::new(),
    };

    let material = build_material(
        mtl_materials.into_iter().next(),
        mtl_path.as_deref(),
        fallback_image_path.as_deref(),
        images,
    );

    if parsed.smooth || config.force_smooth_normals {
        synthesize_smooth_normals(&mut parsed.triangles);
    }

    let name = obj_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh")
        .to_string();

    Ok(Mesh::new(name, parsed.triangles, Arc::new(material)))
}

fn build_material(
    mtl: Option<mtl::MtlMaterial>,
    mtl_path: Option<&Path>,
    fallback_image_path: Option<&Path>,
    images: &dyn ImageProvider,
) -> Material {
    let mut material = Material::default();
    let base_dir = mtl_path.and_then(Path::parent);

    let Some(mtl) = mtl else {
        if let Some(path) = fallback_image_path {
            material.diffuse_tex = decode_texture(path, images).map(Arc::new);
        }
        return material;
    };

    if let Some(v) = mtl.ambient {
        material.ambient = v;
    }
    if let Some(v) = mtl.diffuse {
        material.diffuse = v;
    }
    if let Some(v) = mtl.specular {
        material.specular = v;
    }
    if let Some(v) = mtl.shininess {
        material.shininess = v;
    }
    if let Some(v) = mtl.transparency {
        material.transparency = v;
    }
    if let Some(v) = mtl.illum {
        material.illum = v;
    }

    let resolve = |relative: &str| -> PathBuf {
        match base_dir {
            Some(dir) => dir.join(relative),
            None => PathBuf::from(relative),
        }
    };

    material.diffuse_tex = match mtl.map_kd.as_deref() {
        Some(rel) => decode_texture(&resolve(rel), images).map(Arc::new),
        None => fallback_image_path.and_then(|p| decode_texture(p, images)).map(Arc::new),
    };
    material.specular_tex = mtl
        .map_ks
        .as_deref()
        .and_then(|rel| decode_texture(&resolve(rel), images))
        .map(Arc::new);
    material.normal_tex = mtl
        .map_bump
        .as_deref()
        .and_then(|rel| decode_texture(&resolve(rel), images))
        .map(Arc::new);

    material
}

fn decode_texture(path: &Path, images: &dyn ImageProvider) -> Option<Texture> {
    match images.decode(path) {
        Ok(decoded) => {
            let samples = decoded
                .rgb
                .chunks_exact(3)
                .map(|c| Vec3::new(c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0))
                .collect();
            Some(Texture::new(decoded.width, decoded.height, samples))
        }
        Err(_) => {
            warn!("{}: texture decode failed, substituting opaque white", path.display());
            None
        }
    }
}
