//! Shared geometric value types.
//!
//! Plain data carriers used by every algorithm in the crate: rasterizers
//! consume real-coordinate endpoints and emit [`Pixel`]s, clippers consume
//! [`Segment`]s and [`Polygon`]s against a [`ClipWindow`]. None of these
//! types hold algorithm state; decision variables live inside each call.

use thiserror::Error;

use crate::math::vec2::Vec2;

/// Errors reported for malformed geometric input.
///
/// Both variants are caller bugs surfaced at the algorithm boundary, not
/// runtime faults, so there is no retry or recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A clip window whose minimum exceeds its maximum on some axis.
    #[error("invalid clip window: ({x_min}, {y_min}) to ({x_max}, {y_max})")]
    InvalidClipWindow {
        x_min: f32,
        y_min: f32,
        x_max: f32,
        y_max: f32,
    },

    /// A polygon with fewer than 3 vertices.
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },
}

/// An integer device coordinate produced by a rasterizer.
///
/// Real coordinates are rounded only at the point of emission, never
/// earlier, so rounding error does not compound across steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a real-coordinate point to the nearest pixel.
    pub fn rounding(p: Vec2) -> Self {
        Self::new(p.x.round() as i32, p.y.round() as i32)
    }
}

/// An ordered pair of endpoints.
///
/// The order carries no direction semantics beyond what each algorithm
/// documents; Bresenham's entry point reorders internally so the iterated
/// axis runs low-to-high.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Segment {
    pub const fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    /// The displacement from `p1` to `p2`.
    pub fn delta(&self) -> Vec2 {
        self.p2 - self.p1
    }

    /// The point `p1 + u * (p2 - p1)` for a parameter `u` in `[0, 1]`.
    pub fn at(&self, u: f32) -> Vec2 {
        self.p1 + (self.p2 - self.p1) * u
    }
}

/// An ordered vertex list, implicitly closed (last connects back to first).
///
/// Subject and clip polygons must use a consistent winding for the
/// half-plane inside test in [`crate::clip`] to be correct; winding is not
/// auto-detected.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Create a polygon from at least 3 vertices.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Vertices in order. The closing edge back to the first is implicit.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over directed edges as (start, end) pairs, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// An axis-aligned rectangular clip region.
///
/// The constructor enforces `x_min <= x_max` and `y_min <= y_max`. A
/// degenerate window (equal bounds on an axis) is legal and clips
/// everything to a point or rejects all non-point geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl ClipWindow {
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self, GeometryError> {
        if x_min > x_max || y_min > y_max {
            return Err(GeometryError::InvalidClipWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// True if the point lies inside or on the boundary.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// The four corners in counter-clockwise order, as a clip polygon.
    pub fn to_polygon(&self) -> Polygon {
        Polygon {
            vertices: vec![
                Vec2::new(self.x_min, self.y_min),
                Vec2::new(self.x_max, self.y_min),
                Vec2::new(self.x_max, self.y_max),
                Vec2::new(self.x_min, self.y_max),
            ],
        }
    }
}
