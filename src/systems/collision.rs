//! Collision detection and reaction dispatch.
//!
//! Two phases per frame. Detection tests every unordered pair drawn from
//! the Collision index for AABB overlap; an entity missing its Position or
//! Collision component simply cannot collide that frame. Resolution then
//! invokes each participant's reaction list once per detected pair, in
//! registration order, with a [`CollisionEvent`] naming both entities.
//! Reactions may mutate the storage; there is no settling pass, so residual
//! overlap after a reaction is possible and accepted.
//!
//! The pairwise test is O(n²) in the number of collision-bearing entities.
//! Fine at this scale; broad-phase partitioning would slot in here if that
//! ever stops being true.

use smallvec::SmallVec;

use crate::components::ComponentKind;
use crate::events::collision::{CollisionEvent, CollisionReaction};
use crate::storage::EntityComponentStorage;
use crate::storage::entity::Eid;

/// Run one detection + resolution pass over all collision-bearing entities.
pub fn collision_system(storage: &mut EntityComponentStorage) {
    let candidates = storage.eids_with(ComponentKind::Collision).to_vec();

    // detection: unordered pairs, each tested exactly once
    let mut pairs: Vec<(Eid, Eid)> = Vec::new();
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if entities_collide(storage, candidates[i], candidates[j]) {
                pairs.push((candidates[i], candidates[j]));
            }
        }
    }

    // resolution: reactions run after detection so they see a consistent frame
    for (a, b) in pairs {
        dispatch_reactions(storage, CollisionEvent { a, b });
    }
}

/// Whether both entities carry Position + Collision and their boxes
/// overlap. Touching edges count as overlap.
fn entities_collide(storage: &EntityComponentStorage, a: Eid, b: Eid) -> bool {
    let entity_a = storage.entity(a);
    let entity_b = storage.entity(b);
    let (Some(col_a), Some(pos_a)) = (entity_a.collision(), entity_a.position()) else {
        return false;
    };
    let (Some(col_b), Some(pos_b)) = (entity_b.collision(), entity_b.position()) else {
        return false;
    };
    col_a.overlaps(pos_a.pos, col_b, pos_b.pos)
}

/// Invoke entity a's reactions, then entity b's, each in registration
/// order. Reaction lists are copied out first so handlers are free to
/// mutate either entity's components.
fn dispatch_reactions(storage: &mut EntityComponentStorage, event: CollisionEvent) {
    for eid in [event.a, event.b] {
        let reactions: SmallVec<[CollisionReaction; 2]> = match storage.entity(eid).collision() {
            Some(collision) => collision.reactions.clone(),
            None => continue,
        };
        for reaction in reactions {
            reaction(storage, &event);
        }
    }
}
