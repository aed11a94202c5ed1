//! Input-to-velocity system.
//!
//! Acts on the first entity carrying the
//! [`InputControlled`](crate::components::input::InputControlled) tag: its
//! velocity is reset every frame and rebuilt from the held direction keys,
//! each contributing a fixed direction vector scaled by the entity's own
//! per-axis move speed. Simultaneous keys add up; diagonal movement is the
//! unnormalized sum of both axis vectors.

use log::warn;

use crate::components::ComponentKind;
use crate::math::Vec2;
use crate::resources::input::InputState;
use crate::storage::EntityComponentStorage;

/// Direction vectors applied per held key, in world units per millisecond
/// of velocity per unit of move speed.
pub const MOVE_UP: Vec2 = Vec2::new(0.0, -0.01);
pub const MOVE_DOWN: Vec2 = Vec2::new(0.0, 0.01);
pub const MOVE_LEFT: Vec2 = Vec2::new(-0.01, 0.0);
pub const MOVE_RIGHT: Vec2 = Vec2::new(0.01, 0.0);

/// Update the controlled entity's velocity from the key snapshot.
///
/// # Panics
///
/// Panics when no entity carries the `InputControlled` tag: a world driven
/// by this system without a controlled entity is a setup bug, not a
/// runtime condition to tolerate.
pub fn input_system(storage: &mut EntityComponentStorage, input: &InputState) {
    let eid = *storage
        .eids_with(ComponentKind::Input)
        .first()
        .expect("input system requires an input-controlled entity");

    let Some(movement) = storage.entity_mut(eid).movement_mut() else {
        warn!("input entity {eid} has no movement component, skipping input");
        return;
    };

    movement.velocity = Vec2::ZERO;
    if input.maindirection_up.active {
        movement.velocity += MOVE_UP * movement.move_speed;
    }
    if input.maindirection_down.active {
        movement.velocity += MOVE_DOWN * movement.move_speed;
    }
    if input.maindirection_left.active {
        movement.velocity += MOVE_LEFT * movement.move_speed;
    }
    if input.maindirection_right.active {
        movement.velocity += MOVE_RIGHT * movement.move_speed;
    }
}
