//! OBJ text parsing.

use log::warn;
use std::path::Path;

use crate::math::{Vec2, Vec3};
use crate::mesh::{Triangle, Vertex};

/// The outcome of parsing one OBJ file: the triangulated geometry plus
/// whether the file requested smooth shading via `s on`/`s 1`.
#[derive(Debug, Clone, Default)]
pub struct ParsedObj {
    pub triangles: Vec<Triangle>,
    pub smooth: bool,
}

/// 1-based OBJ vertex/UV/normal index, 0 meaning absent. Never survives
/// past this module.
fn parse_index(raw: &str) -> Result<Option<usize>, ()> {
    let n: i64 = raw.parse().map_err(|_| ())?;
    if n == 0 {
        Ok(None)
    } else if n > 0 {
        Ok(Some((n - 1) as usize))
    } else {
        Err(())
    }
}

struct FaceVertex {
    position: Option<usize>,
    uv: Option<usize>,
    normal: Option<usize>,
}

fn parse_face_vertex(token: &str) -> Result<FaceVertex, ()> {
    let parts: Vec<&str> = token.split('/').collect();

    match parts.as_slice() {
        [p] => Ok(FaceVertex {
            position: parse_index(p)?,
            uv: None,
            normal: None,
        }),
        [p, t] => Ok(FaceVertex {
            position: parse_index(p)?,
            uv: if t.is_empty() { None } else { Some(parse_index(t)?.ok_or(())?) },
            normal: None,
        }),
        [p, t, n] => Ok(FaceVertex {
            position: parse_index(p)?,
            uv: if t.is_empty() { None } else { Some(parse_index(t)?.ok_or(())?) },
            normal: if n.is_empty() { None } else { Some(parse_index(n)?.ok_or(())?) },
        }),
        _ => Err(()),
    }
}

/// Parses OBJ text, logging and skipping malformed lines rather than
/// failing the whole file.
pub fn parse(text: &str, source: &Path) -> ParsedObj {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut uvs: Vec<Vec2> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut face_verts: Vec<Vec<FaceVertex>> = Vec::new();
    let mut smooth = false;

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
            "v" => match parse_vec3(&rest) {
                Some(v) => positions.push(v),
                None => warn_malformed(source, line_no, "malformed v directive"),
            },
            "vt" => match parse_vec2(&rest) {
                Some(v) => uvs.push(v),
                None => warn_malformed(source, line_no, "malformed vt directive"),
            },
            "vn" => match parse_vec3(&rest) {
                Some(v) => normals.push(v),
                None => warn_malformed(source, line_no, "malformed vn directive"),
            },
            "s" => match rest.first() {
                Some(&"1") | Some(&"on") => smooth = true,
                Some(&"0") | Some(&"off") => smooth = false,
                _ => warn_malformed(source, line_no, "malformed s directive"),
            },
            "f" => {
                if rest.len() < 3 {
                    warn_malformed(source, line_no, "face has fewer than 3 vertices");
                    continue;
                }

                let mut parsed = Vec::with_capacity(rest.len());
                let mut ok = true;
                for token in &rest {
                    match parse_face_vertex(token) {
                        Ok(fv) => parsed.push(fv),
                        Err(()) => {
                            warn_malformed(source, line_no, "unparsable face-vertex token");
                            ok = false;
                            break;
                        }
                    }
                }

                if ok {
                    face_verts.push(parsed);
                }
            }
            _ => {
                // Unknown directives (g, mtllib, usemtl, ...) are ignored.
            }
        }
    }

    let triangles = triangulate(&face_verts, &positions, &uvs, &normals);

    ParsedObj { triangles, smooth }
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

fn parse_vec2(rest: &[&str]) -> Option<Vec2> {
    if rest.len() < 2 {
        return None;
    }
    let x: f32 = rest[0].parse().ok()?;
    let y: f32 = rest[1].parse().ok()?;
    Some(Vec2::new(x, y))
}

fn triangulate(
    faces: &[Vec<FaceVertex>],
    positions: &[Vec3],
    uvs: &[Vec2],
    normals: &[Vec3],
) -> Vec<Triangle> {
    let mut triangles = Vec::new();

    for face in faces {
        let build = |fv: &FaceVertex| -> Option<Vertex> {
            let position = *positions.get(fv.position?)?;
            let uv = fv.uv.and_then(|i| uvs.get(i)).copied().unwrap_or(Vec2::zeros());
            let normal = fv.normal.and_then(|i| normals.get(i)).copied().unwrap_or(Vec3::zeros());
            Some(Vertex::new(position, uv, normal))
        };

        let verts: Vec<Option<Vertex>> = face.iter().map(build).collect();
        if verts.iter().any(Option::is_none) {
            continue;
        }
        let verts: Vec<Vertex> = verts.into_iter().map(Option::unwrap).collect();

        for i in 1..verts.len() - 1 {
            triangles.push(Triangle::new(verts[0], verts[i], verts[i + 1]));
        }
    }

    triangles
}
