//! Scan conversion of primitives into pixel sequences.
//!
//! Every rasterizer here is a pure function from primitive parameters to
//! a freshly allocated, ordered `Vec<Pixel>`; nothing here writes to a
//! pixel buffer. The caller routes the result to whatever display collaborator
//! it uses (see [`crate::render::Canvas`] for the bundled one).
//!
//! Available line strategies:
//! - [`dda_line`]: incremental real-valued stepping, rounds per emission
//! - [`bresenham_line`]: integer-only error-term stepping
//!
//! Both can be selected at runtime through [`LineAlgorithm`].

mod circle;
mod ellipse;
mod line;

pub use circle::midpoint_circle;
pub use ellipse::midpoint_ellipse;
pub use line::{bresenham_line, dda_line};

use crate::geometry::{Pixel, Segment};

/// Available line rasterization strategies.
///
/// Both strategies produce the same discrete approximation for
/// non-degenerate slopes; they differ in arithmetic (real increments vs.
/// integer error term) and in output order for reversed input (see
/// [`bresenham_line`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Incremental real-valued stepping (digital differential analyzer).
    #[default]
    Dda,
    /// Integer-only error-term stepping, shallow/steep decomposition.
    Bresenham,
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::Dda => write!(f, "DDA"),
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
        }
    }
}

/// Rasterize a segment with the selected strategy.
///
/// The Bresenham strategy works on integer endpoints, so the segment's
/// real endpoints are rounded up front; the DDA strategy rounds at each
/// emission instead.
pub fn rasterize_segment(algorithm: LineAlgorithm, segment: Segment) -> Vec<Pixel> {
    match algorithm {
        LineAlgorithm::Dda => dda_line(segment.p1, segment.p2),
        LineAlgorithm::Bresenham => {
            bresenham_line(Pixel::rounding(segment.p1), Pixel::rounding(segment.p2))
        }
    }
}
