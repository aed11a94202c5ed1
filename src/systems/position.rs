//! Position integration system.
//!
//! For every entity with both Position and Movement, records the current
//! position as the previous-frame value and advances it by
//! `velocity * delta_milliseconds` (plain Euler, unclamped). Entities with
//! a Position but no Movement are static scenery and are left untouched.

use crate::components::ComponentKind;
use crate::resources::worldtime::WorldTime;
use crate::storage::EntityComponentStorage;

pub fn position_system(storage: &mut EntityComponentStorage, time: &WorldTime) {
    let delta_ms = time.delta_millis();

    // snapshot the index; attach operations never run mid-system
    let eids = storage.eids_with(ComponentKind::Position).to_vec();
    for eid in eids {
        let entity = storage.entity_mut(eid);
        let Some(velocity) = entity.movement().map(|m| m.velocity) else {
            continue;
        };
        if let Some(position) = entity.position_mut() {
            position.prev = position.pos;
            position.pos += velocity.scale_by(delta_ms);
        }
    }
}
