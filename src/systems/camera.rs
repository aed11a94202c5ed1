//! Camera tracking system and viewport transform.
//!
//! Each frame the camera's internal position is interpolated toward the
//! designated camera entity's world position with a smoothing factor of
//! `move_speed * delta_seconds` per axis: an exponential-decay follow, not
//! a snap. [`camera_transform`] exposes the resulting view transform for
//! the render pass.

use log::warn;

use crate::math::Transform2D;
use crate::resources::worldtime::WorldTime;
use crate::storage::EntityComponentStorage;

/// Smooth the camera toward its target entity.
///
/// Does nothing when no camera entity is designated. The designated entity
/// is expected to carry Camera, Position, and Movement; if any is missing
/// the update is skipped with a warning.
pub fn camera_system(storage: &mut EntityComponentStorage, time: &WorldTime) {
    let Some(eid) = storage.camera_eid() else {
        return;
    };
    let delta = time.delta_seconds();

    let entity = storage.entity_mut(eid);
    let target = entity.position().map(|p| p.pos);
    let speed = entity.movement().map(|m| m.move_speed);
    let (Some(target), Some(speed)) = (target, speed) else {
        warn!("camera entity {eid} is missing position or movement, skipping camera update");
        return;
    };
    let Some(camera) = entity.camera_mut() else {
        warn!("camera entity {eid} has no camera component, skipping camera update");
        return;
    };

    let factor = speed.scale_by(delta);
    camera.position.x += (target.x - camera.position.x) * factor.x;
    camera.position.y += (target.y - camera.position.y) * factor.y;
}

/// The current viewport transform: translate by the camera origin, then by
/// the negated camera position, then scale. Identity when no camera is
/// designated.
pub fn camera_transform(storage: &EntityComponentStorage) -> Transform2D {
    let camera = storage
        .camera_eid()
        .and_then(|eid| storage.entity(eid).camera());
    match camera {
        Some(camera) => Transform2D {
            translation: camera.origin - camera.position,
            scale: camera.scale,
        },
        None => Transform2D::IDENTITY,
    }
}
