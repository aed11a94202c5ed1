use crate::math::Vec2;

/// Viewport manipulation data. The camera system derives the frame's view
/// transform from this component and smooths `position` toward the owning
/// entity's world position.
///
/// Attaching a Camera to an entity designates that entity as the current
/// camera target in [`EntityComponentStorage`].
///
/// [`EntityComponentStorage`]: crate::storage::EntityComponentStorage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Uniform zoom factor of the viewport.
    pub scale: f32,
    /// Viewport re-centering offset. Stored pre-divided by `scale`, since
    /// the composed view transform multiplies by the scale afterwards.
    pub origin: Vec2,
    /// Smoothed camera position, interpolated toward the tracked entity.
    pub position: Vec2,
}

impl Camera {
    /// Create a Camera. `origin` is given in screen pixels (typically half
    /// the window size) and `position` is the starting world position.
    pub fn new(origin: Vec2, position: Vec2, scale: f32) -> Self {
        Self {
            scale,
            origin: origin.scale_by(1.0 / scale),
            position,
        }
    }
}
