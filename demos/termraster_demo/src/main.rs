//! Loads a mesh from a folder given on the command line (or falls back to
//! a single hard-coded triangle), spins it in place, and streams encoded
//! ANSI frames to stdout.

use std::io::{stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use nalgebra::Vector3;

use termraster::backend::{AnsiBackend, FrameBackend};
use termraster::behavior::{Behavior, ScheduledBehavior, Trigger};
#[cfg(not(feature = "image_compat"))]
use termraster::loader::image_provider::NullImageProvider;
#[cfg(feature = "image_compat")]
use termraster::loader::image_provider::ImageCrateProvider;
use termraster::loader::load_mesh;
use termraster::material::Material;
use termraster::mesh::{Mesh, Triangle, Vertex};
use termraster::{Camera, Display, RendererConfig, RendererContext};

const WIDTH: u32 = 100;
const HEIGHT: u32 = 45;
const FRAME_COUNT: u64 = 180;

fn fallback_triangle_mesh() -> Mesh {
    let tri = Triangle::new(
        Vertex::new(Vector3::new(-1.0, -1.0, 0.0), nalgebra::Vector2::new(0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
        Vertex::new(Vector3::new(1.0, -1.0, 0.0), nalgebra::Vector2::new(1.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
        Vertex::new(Vector3::new(0.0, 1.0, 0.0), nalgebra::Vector2::new(0.5, 1.0), Vector3::new(0.0, 0.0, 1.0)),
    );
    Mesh::new("fallback_triangle", vec![tri], Arc::new(Material::default()))
}

fn load_scene_mesh(config: &RendererConfig) -> Mesh {
    let path = std::env::args().nth(1).map(PathBuf::from);

    let Some(path) = path else {
        return fallback_triangle_mesh();
    };

    #[cfg(feature = "image_compat")]
    let result = load_mesh(&path, &ImageCrateProvider, config);
    #[cfg(not(feature = "image_compat"))]
    let result = load_mesh(&path, &NullImageProvider, config);

    match result {
        Ok(mesh) => mesh,
        Err(err) => {
            log::warn!("failed to load mesh from {}: {err}, using fallback triangle", path.display());
            fallback_triangle_mesh()
        }
    }
}

fn main() {
    env_logger::init();

    let config = RendererConfig::default();

    let camera = Camera::new(
        Vector3::new(0.0, 0.0, 4.0),
        config.default_fov,
        WIDTH as f32 / HEIGHT as f32,
        config.default_near,
        config.default_far,
    );

    let mut display = Display::new(camera, WIDTH, HEIGHT);
    display.background = Vector3::new(0.02, 0.02, 0.05);

    let mesh_index = display.add_mesh(load_scene_mesh(&config));

    display.add_light(termraster::Light::white(Vector3::new(2.0, 3.0, 3.0), 4.0, 20.0));
    display.add_light(termraster::Light::new(
        Vector3::new(-3.0, -1.0, 2.0),
        Vector3::new(0.4, 0.5, 1.0),
        2.5,
        15.0,
    ));

    display.schedule(ScheduledBehavior::new(
        Trigger::Continuous,
        Behavior::Rotate {
            target: mesh_index,
            axis: Vector3::new(0.0, 1.0, 0.0),
            degrees_per_second: 45.0,
        },
    ));

    let mut ctx = RendererContext::new();
    let stdout = stdout();
    let mut backend = AnsiBackend::new(stdout.lock());

    let dt = 1.0 / 30.0;

    for _ in 0..FRAME_COUNT {
        let frame = ctx
            .render_frame_with_config(&mut display, dt, &config)
            .expect("frame render failed");

        backend.present(&frame).expect("frame present failed");
        std::thread::sleep(Duration::from_secs_f32(dt));
    }

    let _ = backend.into_inner().flush();
}
