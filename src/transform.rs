//! Transform component for 2D geometry.
//!
//! Provides a [`Transform2d`] struct with a fluent API for managing
//! position, rotation, scale, and shear, and turning them into a single
//! composite [`Mat3`].

use crate::math::{mat3::Mat3, vec2::Vec2};

/// A 2D transform with position, rotation (radians), scale, and shear.
///
/// Provides a fluent API where mutating methods return `&mut Self` for
/// chaining:
///
/// ```ignore
/// transform
///     .set_position_xy(5.0, 2.0)
///     .rotate(0.1)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2d {
    position: Vec2,
    rotation: f32, // radians, counter-clockwise
    scale: Vec2,
    shear: Vec2, // x: shx, y: shy
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            shear: Vec2::ZERO,
        }
    }
}

impl Transform2d {
    /// Create a new transform with default values (position=0, rotation=0,
    /// scale=1, shear=0).
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Position ============

    /// Get the position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the position.
    pub fn set_position(&mut self, position: Vec2) -> &mut Self {
        self.position = position;
        self
    }

    /// Set the position from x, y components.
    pub fn set_position_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    /// Translate along the X axis.
    pub fn translate_x(&mut self, dx: f32) -> &mut Self {
        self.position.x += dx;
        self
    }

    /// Translate along the Y axis.
    pub fn translate_y(&mut self, dy: f32) -> &mut Self {
        self.position.y += dy;
        self
    }

    // ============ Rotation ============

    /// Get the rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the rotation (radians, counter-clockwise).
    pub fn set_rotation(&mut self, rotation: f32) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Add a delta rotation (radians).
    pub fn rotate(&mut self, delta: f32) -> &mut Self {
        self.rotation += delta;
        self
    }

    // ============ Scale ============

    /// Get the scale.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Set the scale.
    pub fn set_scale(&mut self, scale: Vec2) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Set uniform scale (same value for x and y).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec2::new(s, s);
        self
    }

    /// Multiply the current scale by a factor vector.
    pub fn scale_by(&mut self, factor: Vec2) -> &mut Self {
        self.scale.x *= factor.x;
        self.scale.y *= factor.y;
        self
    }

    /// Multiply the current scale uniformly.
    pub fn scale_uniform(&mut self, factor: f32) -> &mut Self {
        self.scale.x *= factor;
        self.scale.y *= factor;
        self
    }

    // ============ Shear ============

    /// Get the shear factors (shx, shy).
    pub fn shear(&self) -> Vec2 {
        self.shear
    }

    /// Set the shear factors: `x' = x + shx * y`, `y' = y + shy * x`.
    pub fn set_shear(&mut self, shx: f32, shy: f32) -> &mut Self {
        self.shear = Vec2::new(shx, shy);
        self
    }

    // ============ Matrix Generation ============

    /// Generate the transformation matrix.
    ///
    /// Order: Translation * Rotation * Shear * Scale
    /// (Scale applied first, then shear, then rotation, then translation)
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::translation(self.position.x, self.position.y)
            * Mat3::rotation(self.rotation)
            * Mat3::shearing(self.shear.x, self.shear.y)
            * Mat3::scaling(self.scale.x, self.scale.y)
    }

    /// Transform a point by this transform's matrix.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.to_matrix() * p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default() {
        let t = Transform2d::default();
        assert_eq!(t.position(), Vec2::ZERO);
        assert_eq!(t.rotation(), 0.0);
        assert_eq!(t.scale(), Vec2::ONE);
        assert_eq!(t.shear(), Vec2::ZERO);
    }

    #[test]
    fn test_fluent_api() {
        let mut t = Transform2d::new();
        t.set_position_xy(1.0, 2.0).rotate(0.5).set_scale_uniform(2.0);

        assert_eq!(t.position(), Vec2::new(1.0, 2.0));
        assert_relative_eq!(t.rotation(), 0.5);
        assert_eq!(t.scale(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_translate() {
        let mut t = Transform2d::new();
        t.set_position_xy(1.0, 0.0).translate_x(2.0);
        assert_eq!(t.position().x, 3.0);
    }

    #[test]
    fn test_scale_by() {
        let mut t = Transform2d::new();
        t.set_scale(Vec2::new(2.0, 3.0)).scale_uniform(2.0);
        assert_eq!(t.scale(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_to_matrix_identity() {
        let t = Transform2d::default();
        // Default transform should produce identity matrix
        assert_eq!(t.to_matrix(), Mat3::identity());
    }

    #[test]
    fn test_apply_order_scale_before_translate() {
        let mut t = Transform2d::new();
        t.set_position_xy(10.0, 0.0).set_scale_uniform(2.0);

        // Scale happens about the origin, then the translation moves the result
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn test_apply_rotation() {
        let mut t = Transform2d::new();
        t.set_rotation(FRAC_PI_2);

        let p = t.apply(Vec2::RIGHT);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }
}
