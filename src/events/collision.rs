//! Collision event payload and reaction callbacks.
//!
//! The collision system builds one [`CollisionEvent`] per detected pair and
//! hands it to every reaction registered on either participant's Collision
//! component, in registration order. Reactions receive mutable access to
//! the storage and are free to modify either entity's components.

use crate::storage::EntityComponentStorage;
use crate::storage::entity::Eid;

/// The two participants of one detected overlap. No ordering guarantees
/// beyond `a` appearing before `b` in the collision index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Eid,
    pub b: Eid,
}

/// Reaction callback signature for Collision components.
pub type CollisionReaction = fn(&mut EntityComponentStorage, &CollisionEvent);

/// Return both entities involved in a collision to their previous-frame
/// positions, undoing the move that caused the overlap.
///
/// A participant without a Position component is left alone. Once both
/// positions equal their previous values, running the reaction again has no
/// further effect.
pub fn revert_to_prev_positions(storage: &mut EntityComponentStorage, event: &CollisionEvent) {
    for eid in [event.a, event.b] {
        if let Some(position) = storage.entity_mut(eid).position_mut() {
            position.revert();
        }
    }
}
