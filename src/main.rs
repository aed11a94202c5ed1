//! Headless demo driver for the RPG engine core.
//!
//! Stands in for the real window/frame-clock driver: it loads the INI
//! configuration, builds the demo world from an embedded tilemap, and steps
//! the simulation at a fixed 16 ms delta against a counting render
//! backend. The scripted input walks the player toward the test enemy, so
//! a full run exercises input, integration, camera tracking, rendering,
//! and the collision revert reaction.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --frames 300
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};

use rpgengine::game::{setup_demo_world, spawn_map_objects, spawn_tiles, tick};
use rpgengine::math::{Color, Rect, Transform2D, Vec2};
use rpgengine::resources::gameconfig::GameConfig;
use rpgengine::resources::input::InputState;
use rpgengine::resources::tilemap::Tilemap;
use rpgengine::resources::worldtime::WorldTime;
use rpgengine::storage::EntityComponentStorage;
use rpgengine::systems::render::RenderBackend;

/// A small dungeon corner: a few floor tiles and one invisible blocker.
const DEMO_MAP: &str = r#"{
    "tile_size": 16,
    "sheet_columns": 8,
    "map_width": 4,
    "map_height": 4,
    "layers": [
        {
            "name": "ground",
            "positions": [
                {"x": 0, "y": 0, "id": 3},
                {"x": 1, "y": 0, "id": 3},
                {"x": 2, "y": 0, "id": 4, "flip_h": true},
                {"x": 0, "y": 1, "id": 11},
                {"x": 1, "y": 1, "id": 12, "flip_d": true}
            ]
        }
    ],
    "objects": [
        {"kind": "Collision", "x": 64.0, "y": 64.0, "width": 16.0, "height": 16.0}
    ]
}"#;

/// RPG engine headless demo
#[derive(Parser)]
#[command(version, about = "Runs the ECS demo world for a fixed number of frames")]
struct Cli {
    /// Number of frames to simulate before exiting.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Render collaborator that only counts what it is asked to draw.
#[derive(Default)]
struct CountingBackend {
    draw_calls: usize,
    frames: usize,
}

impl RenderBackend for CountingBackend {
    fn begin(&mut self, _transform: Transform2D) {}

    fn draw(
        &mut self,
        _sheet: &str,
        _position: Vec2,
        _src_rect: Rect,
        _tint: Color,
        _rotation: f32,
        _origin: Vec2,
    ) {
        self.draw_calls += 1;
    }

    fn end(&mut self) {
        self.frames += 1;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("using default configuration: {e}");
    }

    let tilemap = Tilemap::from_json(DEMO_MAP).expect("embedded demo map is valid");

    let mut storage = EntityComponentStorage::new();
    spawn_tiles(&mut storage, &tilemap, "dungeon");
    spawn_map_objects(&mut storage, &tilemap);
    let player = setup_demo_world(&mut storage, &config);
    info!("world ready: {} entities, player eid {player}", storage.len());

    let mut time = WorldTime::new();
    let mut input = InputState::default();
    let mut backend = CountingBackend::default();
    let frame_delta = Duration::from_millis(16);

    for frame in 0..cli.frames {
        // walk down-right for the first half of the run, then stand still
        let walking = frame < cli.frames / 2;
        input.set_directions(false, walking, false, walking);

        time.advance(frame_delta);
        tick(&mut storage, &time, &input, &mut backend);

        if frame % 60 == 0 {
            if let Some(position) = storage.entity(player).position() {
                debug!(
                    "frame {frame}: player at ({:.1}, {:.1})",
                    position.pos.x, position.pos.y
                );
            }
        }
    }

    if let Some(position) = storage.entity(player).position() {
        info!(
            "simulated {} frames, {} draw calls, player ended at ({:.1}, {:.1})",
            backend.frames, backend.draw_calls, position.pos.x, position.pos.y
        );
    }
}
