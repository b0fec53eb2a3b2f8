//! A 2D scan-conversion and clipping kernel.
//!
//! This crate provides the incremental integer/parametric algorithms that
//! turn continuous geometric primitives (lines, circles, ellipses,
//! polygons) into discrete pixel sequences or clipped geometry:
//!
//! - Line rasterization: DDA and Bresenham, selectable at runtime
//! - Circle and ellipse rasterization: midpoint decision algorithms with
//!   octant/quadrant symmetry
//! - Line clipping: Cohen-Sutherland outcodes and Liang-Barsky parametric
//!   intervals, selectable at runtime
//! - Polygon clipping: Sutherland-Hodgman against a convex clip polygon
//!
//! Every algorithm is a pure function from value-type inputs to a freshly
//! materialized point or vertex sequence; displaying the result is the
//! caller's concern (the bundled [`render::Canvas`] is one such consumer,
//! with PNG export for the demo binary).
//!
//! # Quick Start
//!
//! ```ignore
//! use rasterly::prelude::*;
//!
//! let pixels = rasterize_segment(
//!     LineAlgorithm::Bresenham,
//!     Segment::new(Vec2::new(0.0, 0.0), Vec2::new(5.0, 2.0)),
//! );
//!
//! let window = ClipWindow::new(-0.5, -0.5, 0.5, 0.5)?;
//! let visible = clip_segment(LineClipAlgorithm::LiangBarsky, segment, &window);
//! ```

// Public API - exposed to library consumers
pub mod clip;
pub mod colors;
pub mod geometry;
pub mod math;
pub mod raster;
pub mod render;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use clip::LineClipAlgorithm;
pub use geometry::{ClipWindow, GeometryError, Pixel, Polygon, Segment};
pub use raster::LineAlgorithm;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rasterly::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::geometry::{ClipWindow, GeometryError, Pixel, Polygon, Segment};

    // Rasterization
    pub use crate::raster::{
        bresenham_line, dda_line, midpoint_circle, midpoint_ellipse, rasterize_segment,
        LineAlgorithm,
    };

    // Clipping
    pub use crate::clip::{
        clip_segment, cohen_sutherland_clip, liang_barsky_clip, sutherland_hodgman_clip,
        LineClipAlgorithm,
    };

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec2::Vec2;

    // Transforms
    pub use crate::transform::Transform2d;

    // Rendering
    pub use crate::render::Canvas;
}
