//! Minimal 2D math shared by components and systems.
//!
//! Only what the engine actually needs: [`Vec2`] for positions and
//! velocities, [`Rect`] for sprite-sheet source rectangles, [`Color`] for
//! tinting, and [`Transform2D`] for the camera's viewport transform.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2-dimensional vector with `f32` components.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared length of the vector. Avoids the square root of [`length`].
    ///
    /// [`length`]: Vec2::length
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the vector scaled by a scalar factor.
    #[inline]
    pub fn scale_by(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Componentwise multiplication, matching the original engine's
/// per-axis speed scaling.
impl Mul for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale_by(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// An axis-aligned rectangle, used for sprite-sheet source regions.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Creates a new `Rect` from its top-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle, relative to its own top-left corner.
    #[inline]
    pub fn local_center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Uniform-scale affine transform used for the camera viewport.
///
/// Applying the transform first translates a point, then scales it. The
/// camera system composes its transform as translate(+origin) then
/// translate(-camera position) then scale, which collapses to a single
/// translation of `origin - position` followed by the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: f32,
}

impl Transform2D {
    /// The do-nothing viewport transform.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Maps a world-space point into view space.
    #[inline]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        (point + self.translation).scale_by(self.scale)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_vec2_add_sub() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0);
        assert!(approx_eq(v.x, 4.0));
        assert!(approx_eq(v.y, 6.0));
        let w = v - Vec2::new(4.0, 6.0);
        assert!(approx_eq(w.x, 0.0));
        assert!(approx_eq(w.y, 0.0));
    }

    #[test]
    fn test_vec2_componentwise_mul() {
        let v = Vec2::new(2.0, 3.0) * Vec2::new(4.0, 5.0);
        assert!(approx_eq(v.x, 8.0));
        assert!(approx_eq(v.y, 15.0));
    }

    #[test]
    fn test_vec2_scale_by() {
        let v = Vec2::new(3.0, -4.0).scale_by(2.0);
        assert!(approx_eq(v.x, 6.0));
        assert!(approx_eq(v.y, -8.0));
        assert!(approx_eq(v.length(), 10.0));
    }

    #[test]
    fn test_transform_identity_is_noop() {
        let p = Vec2::new(12.5, -7.0);
        let q = Transform2D::IDENTITY.apply(p);
        assert!(approx_eq(q.x, p.x));
        assert!(approx_eq(q.y, p.y));
    }

    #[test]
    fn test_transform_translates_then_scales() {
        let t = Transform2D {
            translation: Vec2::new(10.0, -5.0),
            scale: 2.0,
        };
        let q = t.apply(Vec2::new(1.0, 1.0));
        assert!(approx_eq(q.x, 22.0));
        assert!(approx_eq(q.y, -8.0));
    }

    #[test]
    fn test_rect_local_center() {
        let r = Rect::new(32.0, 48.0, 16.0, 16.0);
        let c = r.local_center();
        assert!(approx_eq(c.x, 8.0));
        assert!(approx_eq(c.y, 8.0));
    }
}
