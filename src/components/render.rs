use crate::math::Rect;

/// Sprite data for an entity: which sheet to sample and where.
///
/// `sheet` is a key into the rendering backend's texture store; the core
/// never touches texture data itself. `src_rect` selects the sprite within
/// the sheet and `rotation` is applied around the sprite's center, in
/// radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    pub sheet: String,
    pub src_rect: Rect,
    pub rotation: f32,
}

impl Render {
    pub fn new(sheet: impl Into<String>, src_rect: Rect) -> Self {
        Self {
            sheet: sheet.into(),
            src_rect,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}
