//! Integration tests for map-driven world building and the demo scene.

use std::f32::consts::{FRAC_PI_2, PI};

use rpgengine::components::ComponentKind;
use rpgengine::game::{setup_demo_world, spawn_map_objects, spawn_tiles};
use rpgengine::math::Vec2;
use rpgengine::resources::gameconfig::GameConfig;
use rpgengine::resources::tilemap::Tilemap;
use rpgengine::storage::EntityComponentStorage;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn sample_map() -> Tilemap {
    Tilemap::from_json(
        r#"{
            "tile_size": 16,
            "sheet_columns": 8,
            "map_width": 4,
            "map_height": 4,
            "layers": [
                {
                    "name": "ground",
                    "positions": [
                        {"x": 0, "y": 0, "id": 3},
                        {"x": 2, "y": 1, "id": 12, "flip_d": true},
                        {"x": 3, "y": 3, "id": 9, "flip_h": true}
                    ]
                }
            ],
            "objects": [
                {"kind": "Collision", "x": 64.0, "y": 80.0, "width": 16.0, "height": 32.0},
                {"kind": "SpawnPoint", "x": 0.0, "y": 0.0}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn spawn_tiles_creates_one_entity_per_placement() {
    let mut ecs = EntityComponentStorage::new();
    spawn_tiles(&mut ecs, &sample_map(), "dungeon");

    assert_eq!(ecs.len(), 3);
    assert_eq!(ecs.eids_with(ComponentKind::Render).len(), 3);
    assert_eq!(ecs.eids_with(ComponentKind::Position).len(), 3);
    assert_eq!(ecs.eids_with(ComponentKind::Collision).len(), 3);
}

#[test]
fn spawn_tiles_computes_world_position_and_source_rect() {
    let mut ecs = EntityComponentStorage::new();
    spawn_tiles(&mut ecs, &sample_map(), "dungeon");

    // second placement: grid (2,1), id 12 with 8 sheet columns
    let eid = ecs.eids_with(ComponentKind::Render)[1];
    let entity = ecs.entity(eid);
    let pos = entity.position().unwrap();
    assert!(approx_eq(pos.pos.x, 32.0));
    assert!(approx_eq(pos.pos.y, 16.0));

    let render = entity.render().unwrap();
    assert_eq!(render.sheet, "dungeon");
    assert!(approx_eq(render.src_rect.x, 64.0));
    assert!(approx_eq(render.src_rect.y, 16.0));
    assert!(approx_eq(render.src_rect.width, 16.0));

    let collision = entity.collision().unwrap();
    assert_eq!(collision.size, Vec2::new(16.0, 16.0));
}

#[test]
fn spawn_tiles_maps_flips_to_rotations() {
    let mut ecs = EntityComponentStorage::new();
    spawn_tiles(&mut ecs, &sample_map(), "dungeon");

    let renders: Vec<f32> = ecs
        .eids_with(ComponentKind::Render)
        .iter()
        .map(|&eid| ecs.entity(eid).render().unwrap().rotation)
        .collect();

    assert!(approx_eq(renders[0], 0.0));
    assert!(approx_eq(renders[1], -FRAC_PI_2));
    assert!(approx_eq(renders[2], PI));
}

#[test]
fn spawn_map_objects_spawns_collision_blockers_only() {
    let mut ecs = EntityComponentStorage::new();
    spawn_map_objects(&mut ecs, &sample_map());

    // the SpawnPoint object is not meaningful to the core
    assert_eq!(ecs.len(), 1);
    let eid = ecs.eids_with(ComponentKind::Collision)[0];
    let entity = ecs.entity(eid);
    assert!(entity.render().is_none());

    let pos = entity.position().unwrap();
    assert!(approx_eq(pos.pos.x, 64.0));
    assert!(approx_eq(pos.pos.y, 80.0));
    assert_eq!(entity.collision().unwrap().size, Vec2::new(16.0, 32.0));
}

#[test]
fn demo_world_wires_player_and_enemy() {
    let mut ecs = EntityComponentStorage::new();
    let config = GameConfig::new();
    let player = setup_demo_world(&mut ecs, &config);

    assert_eq!(ecs.lookup("player"), Some(player));
    assert!(ecs.lookup("enemy").is_some());

    let entity = ecs.entity(player);
    assert!(entity.render().is_some());
    assert!(entity.movement().is_some());
    assert!(entity.collision().is_some());
    assert!(entity.has(ComponentKind::Input));

    // the player owns the camera designation
    assert_eq!(ecs.camera_eid(), Some(player));

    // camera origin is half the window, pre-divided by the scale
    let camera = entity.camera().unwrap();
    let (width, _) = config.window_size();
    assert!(approx_eq(
        camera.origin.x,
        width as f32 * 0.5 / config.camera_scale
    ));
}

#[test]
fn demo_player_walks_into_enemy_and_stops() {
    use rpgengine::game::tick;
    use rpgengine::math::{Color, Rect, Transform2D};
    use rpgengine::resources::input::InputState;
    use rpgengine::resources::worldtime::WorldTime;
    use rpgengine::systems::render::RenderBackend;
    use std::time::Duration;

    struct NullBackend;
    impl RenderBackend for NullBackend {
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
        }
        fn end(&mut self) {}
    }

    let mut ecs = EntityComponentStorage::new();
    let player = setup_demo_world(&mut ecs, &GameConfig::new());
    let enemy = ecs.lookup("enemy").unwrap();

    let mut input = InputState::default();
    input.set_directions(false, true, false, true);
    let mut time = WorldTime::new();
    let mut backend = NullBackend;

    for _ in 0..200 {
        time.advance(Duration::from_millis(16));
        tick(&mut ecs, &time, &input, &mut backend);
    }

    // the revert reaction keeps the player from passing through the enemy
    let player_pos = ecs.entity(player).position().unwrap().pos;
    let enemy_pos = ecs.entity(enemy).position().unwrap().pos;
    assert!(approx_eq(enemy_pos.x, 300.0));
    assert!(player_pos.x < enemy_pos.x + 16.0);
    assert!(player_pos.y < enemy_pos.y + 16.0);
    assert!(player_pos.x > 200.0, "player never moved");
}
