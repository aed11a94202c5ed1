//! World building and the per-frame driver entry point.
//!
//! Spawning consumes map-loader output and turns it into entities; [`tick`]
//! runs the five system passes in their fixed order. Everything here is
//! glue over the storage and systems, in the shape the external driver
//! calls it.

use std::f32::consts::{FRAC_PI_2, PI};

use log::{debug, warn};

use crate::components::camera::Camera;
use crate::components::collision::Collision;
use crate::components::input::InputControlled;
use crate::components::movement::Movement;
use crate::components::position::Position;
use crate::components::render::Render;
use crate::events::collision::revert_to_prev_positions;
use crate::math::{Rect, Vec2};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::tilemap::Tilemap;
use crate::resources::worldtime::WorldTime;
use crate::storage::EntityComponentStorage;
use crate::storage::entity::Eid;
use crate::systems::camera::{camera_system, camera_transform};
use crate::systems::collision::collision_system;
use crate::systems::input::input_system;
use crate::systems::position::position_system;
use crate::systems::render::{RenderBackend, render_system};

/// Spawn one entity per placed tile: a sprite from the sheet, a world
/// position from the grid coordinates, and a full-tile collision box.
///
/// Tile ids index the sheet left-to-right, top-to-bottom. A diagonal flip
/// becomes a -90 degree rotation and a horizontal flip adds 180 degrees;
/// vertical flips have no rotation equivalent under this mapping and are
/// ignored, as the original map converter did.
pub fn spawn_tiles(storage: &mut EntityComponentStorage, tilemap: &Tilemap, sheet: &str) {
    let tile_size = tilemap.tile_size as f32;
    let columns = tilemap.sheet_columns.max(1);

    let mut spawned = 0usize;
    for layer in &tilemap.layers {
        for tile in &layer.positions {
            let mut rotation = if tile.flip_d { -FRAC_PI_2 } else { 0.0 };
            if tile.flip_h {
                rotation += PI;
            }

            let col = tile.id % columns;
            let row = tile.id / columns;
            let src_rect = Rect::new(
                col as f32 * tile_size,
                row as f32 * tile_size,
                tile_size,
                tile_size,
            );

            storage.add_entity([
                Render::new(sheet, src_rect).with_rotation(rotation).into(),
                Position::new(tile.x as f32 * tile_size, tile.y as f32 * tile_size).into(),
                Collision::new(Vec2::ZERO, Vec2::new(tile_size, tile_size)).into(),
            ]);
            spawned += 1;
        }
    }
    debug!("spawned {spawned} tile entities from {} layers", tilemap.layers.len());
}

/// Spawn entities for the map's object metadata. Only `"Collision"`
/// objects are meaningful to the core: they become invisible blockers with
/// a Position and a Collision box sized from the object rectangle.
pub fn spawn_map_objects(storage: &mut EntityComponentStorage, tilemap: &Tilemap) {
    for object in &tilemap.objects {
        match object.kind.as_str() {
            "Collision" => {
                storage.add_entity([
                    Position::new(object.x, object.y).into(),
                    Collision::new(Vec2::ZERO, Vec2::new(object.width, object.height)).into(),
                ]);
            }
            other => warn!("ignoring map object of unknown kind {other:?}"),
        }
    }
}

/// Build the demo scene: a controllable player tracked by the camera and a
/// stationary test enemy, both with revert-on-collision boxes.
///
/// Returns the player's Eid.
pub fn setup_demo_world(storage: &mut EntityComponentStorage, config: &GameConfig) -> Eid {
    storage.add_named_entity(
        "enemy",
        [
            Render::new("dungeon", Rect::new(80.0, 144.0, 16.0, 16.0)).into(),
            Position::new(300.0, 300.0).into(),
            Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0))
                .with_reaction(revert_to_prev_positions)
                .into(),
        ],
    );

    let player_start = Vec2::new(200.0, 200.0);
    let player = storage.add_named_entity(
        "player",
        [
            Render::new("dungeon", Rect::new(64.0, 128.0, 16.0, 16.0)).into(),
            Position::from_vec(player_start).into(),
            Movement::new(Vec2::ZERO, Vec2::new(6.0, 6.0)).into(),
            InputControlled.into(),
            Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0))
                .with_reaction(revert_to_prev_positions)
                .into(),
        ],
    );

    let (width, height) = config.window_size();
    storage.add_components_to_entity(
        player,
        [Camera::new(
            Vec2::new(width as f32 * 0.5, height as f32 * 0.5),
            player_start,
            config.camera_scale,
        )
        .into()],
    );

    player
}

/// Advance the world by one frame: input, position integration, camera
/// tracking, the render pass bracketed by the camera transform, then
/// collision detection and reaction dispatch.
pub fn tick(
    storage: &mut EntityComponentStorage,
    time: &WorldTime,
    input: &InputState,
    backend: &mut dyn RenderBackend,
) {
    input_system(storage, input);
    position_system(storage, time);
    camera_system(storage, time);

    backend.begin(camera_transform(storage));
    render_system(storage, backend);
    backend.end();

    collision_system(storage);
}
