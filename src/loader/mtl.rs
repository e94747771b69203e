//! MTL text parsing.

use log::warn;
use std::path::Path;

use crate::math::Vec3;

/// One `newmtl` block's fields, before texture paths are resolved through
/// an `ImageProvider`.
#[derive(Debug, Clone, Default)]
pub struct MtlMaterial {
    pub name: String,
    pub ambient: Option<Vec3>,
    pub diffuse: Option<Vec3>,
    pub specular: Option<Vec3>,
    pub shininess: Option<f32>,
    pub transparency: Option<f32>,
    pub illum: Option<u32>,
    pub map_kd: Option<String>,
    pub map_ks: Option<String>,
    pub map_bump: Option<String>,
}

/// Parses MTL text into an ordered list of materials, one per `newmtl`
/// block. Malformed lines are logged and skipped.
pub fn parse(text: &str, source: &Path) -> Vec<MtlMaterial> {
    let mut materials = Vec::new();
    let mut current: Option<MtlMaterial> = None;

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let directive = match tokens.next() {
            Some(d) => d,
            None => continue,
        };
        let rest: Vec<&str> = tokens.collect();

        match directive {
            "newmtl" => {
                if let Some(m) = current.take() {
                    materials.push(m);
                }
                current = Some(MtlMaterial {
                    name: rest.join(" "),
                    ..Default::default()
                });
            }
            "Ka" | "Kd" | "Ks" => {
                let Some(m) = current.as_mut() else {
                    warn_malformed(source, line_no, "color directive before newmtl");
                    continue;
                };
                match parse_vec3(&rest) {
                    Some(v) => match directive {
                        "Ka" => m.ambient = Some(v),
                        "Kd" => m.diffuse = Some(v),
                        _ => m.specular = Some(v),
                    },
                    None => warn_malformed(source, line_no, "malformed color directive"),
                }
            }
            "Ns" => {
                let Some(m) = current.as_mut() else {
                    warn_malformed(source, line_no, "Ns before newmtl");
                    continue;
                };
                match rest.first().and_then(|s| s.parse::<f32>().ok()) {
                    Some(v) => m.shininess = Some(v),
                    None => warn_malformed(source, line_no, "malformed Ns directive"),
                }
            }
            "d" => {
                let Some(m) = current.as_mut() else {
                    warn_malformed(source, line_no, "d before newmtl");
                    continue;
                };
                match rest.first().and_then(|s| s.parse::<f32>().ok()) {
                    Some(v) => m.transparency = Some(v),
                    None => warn_malformed(source, line_no, "malformed d directive"),
                }
            }
            "illum" => {
                let Some(m) = current.as_mut() else {
                    warn_malformed(source, line_no, "illum before newmtl");
                    continue;
                };
                match rest.first().and_then(|s| s.parse::<u32>().ok()) {
                    Some(v) => m.illum = Some(v),
                    None => warn_malformed(source, line_no, "malformed illum directive"),
                }
            }
            "map_Kd" => set_map(&mut current, source, line_no, &rest, |m, p| m.map_kd = Some(p)),
            "map_Ks" => set_map(&mut current, source, line_no, &rest, |m, p| m.map_ks = Some(p)),
            "map_Bump" | "map_bump" => {
                set_map(&mut current, source, line_no, &rest, |m, p| m.map_bump = Some(p))
            }
            _ => {}
        }
    }

    if let Some(m) = current.take() {
        materials.push(m);
    }

    materials
}

fn set_map(
    current: &mut Option<MtlMaterial>,
    source: &Path,
    line_no: usize,
    rest: &[&str],
    assign: impl FnOnce(&mut MtlMaterial, String),
) {
    let Some(m) = current.as_mut() else {
        warn_malformed(source, line_no, "texture map directive before newmtl");
        return;
    };

    match rest.last() {
        Some(path) => assign(m, (*path).to_string()),
        None => warn_malformed(source, line_no, "malformed texture map directive"),
    }
}

fn warn_malformed(source: &Path, line_no: usize, reason: &str) {
    warn!(
        "{}:{}: {reason}, skipping line",
        source.display(),
        line_no + 1
    );
}

fn parse_vec3(rest: &[&str]) -> Option<Vec3> {
    if rest.len() < 3 {
        return None;
    }
    let x: f32 = rest[0].parse().ok()?;
    let y: f32 = rest[1].parse().ok()?;
    let z: f32 = rest[2].parse().ok()?;
    Some(Vec3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn src() -> PathBuf {
        PathBuf::from("test.mtl")
    }

    #[test]
    fn parses_single_material_fields() {
        let text = "newmtl wood\nKa 0.1 0.1 0.1\nKd 0.5 0.3 0.2\nKs 1 1 1\nNs 16\nd 1\nmap_Kd wood.png\n";
        let mats = parse(text, &src());
        assert_eq!(mats.len(), 1);
        assert_eq!(mats[0].name, "wood");
        assert_eq!(mats[0].diffuse, Some(Vec3::new(0.5, 0.3, 0.2)));
        assert_eq!(mats[0].shininess, Some(16.0));
        assert_eq!(mats[0].map_kd.as_deref(), Some("wood.png"));
    }

    #[test]
    fn supports_multiple_materials_per_file() {
        let text = "newmtl a\nKd 1 0 0\nnewmtl b\nKd 0 1 0\n";
        let mats = parse(text, &src());
        assert_eq!(mats.len(), 2);
        assert_eq!(mats[0].name, "a");
        assert_eq!(mats[1].name, "b");
    }

    #[test]
    fn directive_before_any_newmtl_is_ignored_not_panicking() {
        let text = "Kd 1 0 0\nnewmtl a\nKd 0 1 0\n";
        let mats = parse(text, &src());
        assert_eq!(mats.len(), 1);
        assert_eq!(mats[0].diffuse, Some(Vec3::new(0.0, 1.0, 0.0)));
    }
}
