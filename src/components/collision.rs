use smallvec::SmallVec;

use crate::events::collision::CollisionReaction;
use crate::math::Vec2;

/// Collision bounding box plus the reactions to run when the owning entity
/// is involved in a detected overlap.
///
/// The box's top-left corner is the owning entity's position plus `offset`,
/// and its extent is `size`. Reactions are invoked in registration order,
/// once per detected pair; see [`crate::systems::collision`].
#[derive(Debug, Clone)]
pub struct Collision {
    pub offset: Vec2,
    pub size: Vec2,
    /// Reaction callbacks, invoked in attachment order.
    pub reactions: SmallVec<[CollisionReaction; 2]>,
}

impl Collision {
    /// Create a Collision box with no reactions.
    pub fn new(offset: Vec2, size: Vec2) -> Self {
        Self {
            offset,
            size,
            reactions: SmallVec::new(),
        }
    }

    /// Builder-style reaction registration.
    pub fn with_reaction(mut self, reaction: CollisionReaction) -> Self {
        self.reactions.push(reaction);
        self
    }

    pub fn add_reaction(&mut self, reaction: CollisionReaction) {
        self.reactions.push(reaction);
    }

    /// Returns (min, max) corners of the box for an entity at `position`.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let min = position + self.offset;
        let max = min + self.size;
        (min, max)
    }

    /// AABB overlap test against another box at a different entity position.
    /// Intervals are closed: boxes that merely touch count as overlapping.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        max_a.x >= min_b.x && min_a.x <= max_b.x && max_a.y >= min_b.y && min_a.y <= max_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_offset_and_size() {
        let col = Collision::new(Vec2::new(2.0, 3.0), Vec2::new(16.0, 16.0));
        let (min, max) = col.aabb(Vec2::new(10.0, 10.0));
        assert_eq!(min, Vec2::new(12.0, 13.0));
        assert_eq!(max, Vec2::new(28.0, 29.0));
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0));
        let b = Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0));
        assert!(a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0));
        let b = Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0));
        // a.right == b.left
        assert!(a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(16.0, 0.0)));
    }

    #[test]
    fn test_separated_boxes_do_not_overlap() {
        let a = Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0));
        let b = Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0));
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(16.1, 0.0)));
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(0.0, 40.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Collision::new(Vec2::new(1.0, 0.0), Vec2::new(8.0, 8.0));
        let b = Collision::new(Vec2::ZERO, Vec2::new(16.0, 16.0));
        let pa = Vec2::new(5.0, 5.0);
        let pb = Vec2::new(0.0, 0.0);
        assert_eq!(a.overlaps(pa, &b, pb), b.overlaps(pb, &a, pa));
    }
}
