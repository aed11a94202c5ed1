//! Render pass: a read-only walk over the Render index.
//!
//! The core never draws anything itself. [`RenderBackend`] is the narrow
//! interface to the rendering collaborator: the driver brackets each frame
//! with `begin`/`end`, and the system hands over one draw call per entity
//! that carries both Render and Position. Entities without a Position are
//! skipped.

use crate::components::ComponentKind;
use crate::math::{Color, Rect, Transform2D, Vec2};
use crate::storage::EntityComponentStorage;

/// Rendering collaborator interface.
///
/// `begin` receives the camera's view transform for the frame; `draw` is
/// called once per visible sprite; `end` closes the frame's batch.
pub trait RenderBackend {
    fn begin(&mut self, transform: Transform2D);
    fn draw(
        &mut self,
        sheet: &str,
        position: Vec2,
        src_rect: Rect,
        tint: Color,
        rotation: f32,
        origin: Vec2,
    );
    fn end(&mut self);
}

/// Hand every Render+Position entity's sprite data to the backend,
/// unmodified. Rotation pivots around the sprite's center.
pub fn render_system(storage: &EntityComponentStorage, backend: &mut dyn RenderBackend) {
    for &eid in storage.eids_with(ComponentKind::Render) {
        let entity = storage.entity(eid);
        let (Some(render), Some(position)) = (entity.render(), entity.position()) else {
            continue;
        };
        backend.draw(
            &render.sheet,
            position.pos,
            render.src_rect,
            Color::WHITE,
            render.rotation,
            render.src_rect.local_center(),
        );
    }
}
