//! End-to-end scenarios exercising the public pipeline API.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use termraster::behavior::{Behavior, ScheduledBehavior, Trigger};
use termraster::loader::image_provider::NullImageProvider;
use termraster::loader::load_mesh;
use termraster::material::Material;
use termraster::math::{Vec2, Vec3};
use termraster::mesh::{Mesh, Triangle, Vertex};
use termraster::{Camera, Display, Light, RenderError, RendererConfig, RendererContext};

fn triangle_mesh(z: f32, material: Material) -> Mesh {
    let tri = Triangle::new(
        Vertex::new(Vec3::new(-1.0, -1.0, z), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
        Vertex::new(Vec3::new(1.0, -1.0, z), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
        Vertex::new(Vec3::new(0.0, 1.0, z), Vec2::zeros(), Vec3::new(0.0, 0.0, 1.0)),
    );
    Mesh::new("tri", vec![tri], Arc::new(material))
}

fn white_material() -> Material {
    let mut m = Material::default();
    m.ambient = Vec3::new(1.0, 1.0, 1.0);
    m.diffuse = Vec3::new(1.0, 1.0, 1.0);
    m
}

// Single triangle, no lights, white diffuse, fov=90, aspect=1, 100x100
// frame, background black. Expect a filled triangular region occupying
// roughly 30-40% of the frame, centered horizontally.
#[test]
fn single_triangle_covers_expected_fraction_and_is_centered() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 0.0), 90.0, 1.0, 0.1, 100.0);
    let mut display = Display::new(camera, 100, 100);
    display.add_mesh(triangle_mesh(-5.0, white_material()));

    let mut ctx = RendererContext::new();
    let frame = ctx.render_frame(&mut display, 0.0).unwrap();

    let covered = frame.glyphs.iter().filter(|&&g| g != ' ').count();
    let fraction = covered as f32 / (100 * 100) as f32;
    assert!(fraction > 0.2 && fraction < 0.5, "covered fraction was {fraction}");

    let mut min_x = 100u32;
    let mut max_x = 0u32;
    for y in 0..100u32 {
        for x in 0..100u32 {
            if frame.glyphs[(y * 100 + x) as usize] != ' ' {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
            }
        }
    }
    let center = (min_x + max_x) as f32 / 2.0;
    assert!((center - 49.5).abs() < 5.0, "triangle not horizontally centered: {center}");
}

// Same triangle, one point light at the camera, red diffuse, zero
// ambient. Expect nonzero red at every covered pixel, brighter at the
// centroid than at the corners.
#[test]
fn point_light_shades_brighter_at_centroid_than_corners() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 0.0), 90.0, 1.0, 0.1, 100.0);
    let mut display = Display::new(camera, 100, 100);

    let mut material = Material::default();
    material.ambient = Vec3::zeros();
    material.diffuse = Vec3::new(1.0, 0.0, 0.0);
    material.shininess = 32.0;

    display.add_mesh(triangle_mesh(-5.0, material));
    display.add_light(Light::white(Vec3::new(0.0, 0.0, 0.0), 1.0, 10.0));

    let mut ctx = RendererContext::new();
    let frame = ctx.render_frame(&mut display, 0.0).unwrap();

    let covered: Vec<usize> = (0..frame.glyphs.len())
        .filter(|&i| frame.glyphs[i] != ' ')
        .collect();
    assert!(!covered.is_empty());
    for &i in &covered {
        assert!(frame.colors[i][0] > 0, "covered pixel had zero red channel");
    }

    let centroid_index = (50 * 100 + 50) as usize;
    let corner_index = covered[0];
    assert!(frame.colors[centroid_index][0] >= frame.colors[corner_index][0]);
}

// Two overlapping triangles at different depths; the nearer (green)
// one must win the depth test everywhere it overlaps the farther (red) one.
#[test]
fn depth_test_resolves_overlap_in_favor_of_nearer_triangle() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 0.0), 90.0, 1.0, 0.1, 100.0);
    let mut display = Display::new(camera, 50, 50);

    let mut red = Material::default();
    red.ambient = Vec3::new(1.0, 0.0, 0.0);
    red.diffuse = Vec3::new(1.0, 0.0, 0.0);

    let mut green = Material::default();
    green.ambient = Vec3::new(0.0, 1.0, 0.0);
    green.diffuse = Vec3::new(0.0, 1.0, 0.0);

    display.add_mesh(triangle_mesh(-5.0, red));
    display.add_mesh(triangle_mesh(-3.0, green));

    let mut ctx = RendererContext::new();
    let frame = ctx.render_frame(&mut display, 0.0).unwrap();

    let index = (25 * 50 + 25) as usize;
    assert_eq!(frame.colors[index][1], 255);
    assert_eq!(frame.colors[index][0], 0);
}

// Transparent material (d=0.5) over a blue background. The final pixel
// color equals 0.5*background + 0.5*shaded within 1/255.
#[test]
fn transparency_mixes_with_background() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 0.0), 90.0, 1.0, 0.1, 100.0);
    let mut display = Display::new(camera, 50, 50);
    display.background = Vec3::new(0.0, 0.0, 1.0);

    let mut material = white_material();
    material.transparency = 0.5;

    display.add_mesh(triangle_mesh(-5.0, material));

    let mut ctx = RendererContext::new();
    let frame = ctx.render_frame(&mut display, 0.0).unwrap();

    let index = (25 * 50 + 25) as usize;
    let color = frame.colors[index];

    // shaded (ambient+diffuse=white) * white_tex + 0 specular = white
    // mix = 0.5*blue + 0.5*white = (0.5, 0.5, 1.0)
    let expected = [128u8, 128u8, 255u8];
    for channel in 0..3 {
        assert!(
            (color[channel] as i16 - expected[channel] as i16).abs() <= 1,
            "channel {channel}: got {}, expected near {}",
            color[channel],
            expected[channel]
        );
    }
}

// OBJ with `s on` and no `vn` lines loads with unit-length normals,
// shared at corners with the same position.
#[test]
fn smooth_obj_without_normals_synthesizes_unit_shared_normals() {
    let dir = scenario_dir("smooth_normals");
    write_file(
        &dir,
        "quad.obj",
        "s on\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
    );

    let mesh = load_mesh(&dir, &NullImageProvider, &RendererConfig::default()).unwrap();
    assert_eq!(mesh.triangles.len(), 2);

    for tri in &mesh.triangles {
        for v in tri.corners() {
            assert!((v.normal.norm() - 1.0).abs() < 1e-5);
        }
    }

    // Both triangles share the corner at (0,0,0) via the fan triangulation
    // (0,1,2),(0,2,3): triangle 0's `a` and triangle 1's `a` are both that
    // shared corner and must carry the same synthesized normal.
    assert_eq!(mesh.triangles[0].a.normal, mesh.triangles[1].a.normal);

    fs::remove_dir_all(&dir).ok();
}

// A malformed OBJ line does not abort the whole file; the valid triangles
// still load.
#[test]
fn malformed_obj_line_is_tolerated() {
    let dir = scenario_dir("malformed_line");
    write_file(
        &dir,
        "mesh.obj",
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 bogus\nf 1 2 3\n",
    );

    let mesh = load_mesh(&dir, &NullImageProvider, &RendererConfig::default()).unwrap();
    assert_eq!(mesh.triangles.len(), 1);

    fs::remove_dir_all(&dir).ok();
}

// A directory with zero .obj files fails with AssetMissing.
#[test]
fn zero_obj_files_is_asset_missing() {
    let dir = scenario_dir("zero_obj_files");

    let result = load_mesh(&dir, &NullImageProvider, &RendererConfig::default());
    assert!(matches!(result, Err(RenderError::AssetMissing(_))));

    fs::remove_dir_all(&dir).ok();
}

// A Rotate behavior scheduled on Startup only ever mutates the mesh on
// frame 0.
#[test]
fn startup_behavior_only_runs_on_frame_zero() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), 90.0, 1.0, 0.1, 100.0);
    let mut display = Display::new(camera, 10, 10);
    let mesh_index = display.add_mesh(triangle_mesh(0.0, Material::default()));

    display.schedule(ScheduledBehavior::new(
        Trigger::Startup,
        Behavior::Rotate {
            target: mesh_index,
            axis: Vec3::new(0.0, 1.0, 0.0),
            degrees_per_second: 90.0,
        },
    ));

    let mut ctx = RendererContext::new();
    ctx.render_frame(&mut display, 1.0).unwrap();
    let after_frame_zero = display.meshes[mesh_index].triangles[0].a.position;

    ctx.render_frame(&mut display, 1.0).unwrap();
    let after_frame_one = display.meshes[mesh_index].triangles[0].a.position;

    assert_eq!(after_frame_zero, after_frame_one);
}

fn scenario_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("termraster_e2e_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) {
    let mut f = fs::File::create(dir.join(name)).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}
