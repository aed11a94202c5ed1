use crate::math::Vec2;

/// Velocity and per-axis movement speed for an entity.
///
/// Velocity is expressed in world units per millisecond; the position system
/// integrates it against the frame delta in milliseconds. `move_speed` scales
/// the fixed direction vectors applied by the input system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub velocity: Vec2,
    pub move_speed: Vec2,
}

impl Movement {
    pub fn new(velocity: Vec2, move_speed: Vec2) -> Self {
        Self {
            velocity,
            move_speed,
        }
    }
}

impl Default for Movement {
    /// Zero velocity, unit move speed on both axes.
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stationary_with_unit_speed() {
        let m = Movement::default();
        assert_eq!(m.velocity, Vec2::ZERO);
        assert_eq!(m.move_speed, Vec2::ONE);
    }
}
