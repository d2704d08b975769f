//! Viewfinder demo entry point.
//!
//! A small raylib window showcasing the camera:
//! - arrow keys move the followed target through the world
//! - the camera scrolls only when the target leaves the deadzone,
//!   converging with damping
//! - SPACE shakes the camera, F fades to white, G fades back in
//! - R resets the camera through the scene-reset message
//! - resizing the window goes through the canvas-resized message
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

use viewfinder::components::mapposition::MapPosition;
use viewfinder::events::scene::{CanvasResized, SceneReset};
use viewfinder::events::viewport::{ViewportChanged, ViewportResized};
use viewfinder::render::colorlayer::ColorLayer;
use viewfinder::render::raylib_renderer::RaylibRenderer;
use viewfinder::render::{Renderer2D, Scene};
use viewfinder::resources::camera2d::{Axis, Camera2D, DEFAULT_FADE_DURATION, FollowTarget};
use viewfinder::resources::cameraconfig::CameraConfig;
use viewfinder::resources::overlaypool::OverlayPool;
use viewfinder::resources::worldtime::WorldTime;
use viewfinder::systems::camera::{camera_update_system, update_camera_messages};
use viewfinder::systems::render::draw_camera;
use viewfinder::systems::time::update_world_time;

/// Viewfinder 2D camera demo
#[derive(Parser)]
#[command(
    version,
    about = "Deadzone follow, shake and fade demo for the viewfinder camera"
)]
struct Cli {
    /// Path to the camera INI configuration (default: ./camera.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// World width in pixels.
    #[arg(long, default_value_t = 2400.0)]
    world_width: f32,

    /// World height in pixels.
    #[arg(long, default_value_t = 1800.0)]
    world_height: f32,
}

/// Demo scene: a color backdrop, a dot grid and the followed target.
struct DemoScene {
    backdrop: ColorLayer,
    offset: Vector2,
    target: Vector2,
    world_width: f32,
    world_height: f32,
}

impl Scene for DemoScene {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.x += dx;
        self.offset.y += dy;
        self.backdrop.translate(dx, dy);
    }

    fn draw(&mut self, renderer: &mut dyn Renderer2D, view: &Rectangle) {
        self.backdrop.draw(renderer, view);

        // Grid dots make the scrolling visible; cull against the view.
        renderer.set_color(Color::new(70, 80, 90, 255));
        let step = 120.0;
        let mut x = 0.0;
        while x <= self.world_width {
            let mut y = 0.0;
            while y <= self.world_height {
                if x + 4.0 >= view.x
                    && x <= view.x + view.width
                    && y + 4.0 >= view.y
                    && y <= view.y + view.height
                {
                    renderer.fill_rect(x + self.offset.x, y + self.offset.y, 4.0, 4.0);
                }
                y += step;
            }
            x += step;
        }

        renderer.set_color(Color::GOLD);
        renderer.fill_rect(
            self.target.x + self.offset.x - 10.0,
            self.target.y + self.offset.y - 10.0,
            20.0,
            20.0,
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => CameraConfig::with_path(path),
        None => CameraConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let (viewport_width, viewport_height) = config.viewport_size();

    let (mut rl, thread) = raylib::init()
        .size(viewport_width as i32, viewport_height as i32)
        .resizable()
        .title("Viewfinder")
        .build();
    rl.set_target_fps(120);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(OverlayPool::new());
    world.insert_resource(Messages::<SceneReset>::default());
    world.insert_resource(Messages::<CanvasResized>::default());
    world.insert_resource(Messages::<ViewportChanged>::default());
    world.insert_resource(Messages::<ViewportResized>::default());

    let target = world
        .spawn(MapPosition::new(
            cli.world_width / 2.0,
            cli.world_height / 2.0,
        ))
        .id();

    let mut camera = Camera2D::from_config(&config);
    camera.set_bounds(0.0, 0.0, cli.world_width, cli.world_height);
    camera
        .follow(FollowTarget::Entity(target), Axis::Both, 0.12)
        .expect("entity targets are always accepted");
    world.insert_resource(camera);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(camera_update_system);
    update.add_systems(update_camera_messages.after(camera_update_system));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    let mut scene = DemoScene {
        backdrop: ColorLayer::new("backdrop", Color::new(24, 28, 34, 255)),
        offset: Vector2 { x: 0.0, y: 0.0 },
        target: Vector2 { x: 0.0, y: 0.0 },
        world_width: cli.world_width,
        world_height: cli.world_height,
    };

    log::info!("arrows move the target, SPACE shakes, F fades out, G fades in, R resets");

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        let speed = 420.0 * dt;
        if let Some(mut mp) = world.get_mut::<MapPosition>(target) {
            if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
                mp.x += speed;
            }
            if rl.is_key_down(KeyboardKey::KEY_LEFT) {
                mp.x -= speed;
            }
            if rl.is_key_down(KeyboardKey::KEY_DOWN) {
                mp.y += speed;
            }
            if rl.is_key_down(KeyboardKey::KEY_UP) {
                mp.y -= speed;
            }
            mp.x = mp.x.clamp(0.0, cli.world_width);
            mp.y = mp.y.clamp(0.0, cli.world_height);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            world.resource_mut::<Camera2D>().shake(
                16.0,
                0.6,
                Axis::Both,
                Some(Box::new(|| log::info!("shake finished"))),
                false,
            );
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            world.resource_scope(|world, mut camera: Mut<Camera2D>| {
                let mut pool = world.resource_mut::<OverlayPool>();
                camera.fade_out(&mut pool, Color::WHITE, DEFAULT_FADE_DURATION, None);
            });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_G) {
            world.resource_scope(|world, mut camera: Mut<Camera2D>| {
                let mut pool = world.resource_mut::<OverlayPool>();
                camera.fade_in(&mut pool, Color::WHITE, DEFAULT_FADE_DURATION, None);
            });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            world
                .resource_mut::<Messages<SceneReset>>()
                .write(SceneReset::default());
        }
        if rl.is_window_resized() {
            let width = rl.get_screen_width() as f32;
            let height = rl.get_screen_height() as f32;
            world
                .resource_mut::<Messages<CanvasResized>>()
                .write(CanvasResized { width, height });
        }

        update.run(&mut world);
        world.clear_trackers();

        if let Some(mp) = world.get::<MapPosition>(target) {
            scene.target = mp.as_vector2();
        }

        // --------------- draw ---------------
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        {
            let mut renderer = RaylibRenderer::new(&mut d);
            world.resource_scope(|world, mut camera: Mut<Camera2D>| {
                world.resource_scope(|_, mut pool: Mut<OverlayPool>| {
                    draw_camera(&mut camera, &mut pool, &mut renderer, &mut scene);
                });
            });
        }
        d.draw_fps(10, 10);
    }
}
