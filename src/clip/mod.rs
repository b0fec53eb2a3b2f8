//! Clipping of primitives against a rectangular window or convex polygon.
//!
//! Line clipping offers two interchangeable strategies selected through
//! [`LineClipAlgorithm`]; both produce identical accept/reject outcomes
//! and clipped coordinates (up to floating-point tolerance) for any
//! rectangular window. Polygon clipping reduces a subject polygon against
//! a convex clip polygon one half-plane at a time.

mod outcode;
mod parametric;
mod polygon;

pub use outcode::cohen_sutherland_clip;
pub use parametric::liang_barsky_clip;
pub use polygon::sutherland_hodgman_clip;

use crate::geometry::{ClipWindow, Segment};

/// Available line clipping strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineClipAlgorithm {
    /// Outcode iteration: trivial accept/reject, then one boundary per pass.
    #[default]
    CohenSutherland,
    /// Parametric interval narrowing: four boundary checks, no loop.
    LiangBarsky,
}

impl std::fmt::Display for LineClipAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineClipAlgorithm::CohenSutherland => write!(f, "Cohen-Sutherland"),
            LineClipAlgorithm::LiangBarsky => write!(f, "Liang-Barsky"),
        }
    }
}

/// Clip a segment against a rectangular window with the selected strategy.
///
/// Returns the visible sub-segment, or `None` when the segment lies
/// entirely outside the window.
pub fn clip_segment(
    algorithm: LineClipAlgorithm,
    segment: Segment,
    window: &ClipWindow,
) -> Option<Segment> {
    match algorithm {
        LineClipAlgorithm::CohenSutherland => cohen_sutherland_clip(segment, window),
        LineClipAlgorithm::LiangBarsky => liang_barsky_clip(segment, window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use approx::assert_relative_eq;

    fn window() -> ClipWindow {
        ClipWindow::new(-0.5, -0.5, 0.5, 0.5).unwrap()
    }

    fn assert_segments_agree(a: Segment, b: Segment) {
        assert_relative_eq!(a.p1.x, b.p1.x, epsilon = 1e-5);
        assert_relative_eq!(a.p1.y, b.p1.y, epsilon = 1e-5);
        assert_relative_eq!(a.p2.x, b.p2.x, epsilon = 1e-5);
        assert_relative_eq!(a.p2.y, b.p2.y, epsilon = 1e-5);
    }

    #[test]
    fn test_strategies_agree_fully_inside() {
        let segment = Segment::new(Vec2::new(-0.2, -0.2), Vec2::new(0.3, 0.3));

        let outcode = cohen_sutherland_clip(segment, &window()).unwrap();
        let parametric = liang_barsky_clip(segment, &window()).unwrap();

        assert_segments_agree(outcode, segment);
        assert_segments_agree(parametric, segment);
    }

    #[test]
    fn test_strategies_agree_crossing() {
        let segment = Segment::new(Vec2::new(-0.9, -0.7), Vec2::new(0.9, 0.7));

        let outcode = cohen_sutherland_clip(segment, &window()).unwrap();
        let parametric = liang_barsky_clip(segment, &window()).unwrap();

        assert_segments_agree(outcode, parametric);
        // Both endpoints land on the window boundary
        assert!(window().contains(outcode.p1));
        assert!(window().contains(outcode.p2));
    }

    #[test]
    fn test_strategies_agree_fully_outside() {
        let segment = Segment::new(Vec2::new(0.7, -0.9), Vec2::new(0.9, 0.6));

        assert_eq!(cohen_sutherland_clip(segment, &window()), None);
        assert_eq!(liang_barsky_clip(segment, &window()), None);
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let segment = Segment::new(Vec2::new(-0.7, -0.3), Vec2::new(0.2, 0.1));

        assert_eq!(
            clip_segment(LineClipAlgorithm::CohenSutherland, segment, &window()),
            cohen_sutherland_clip(segment, &window())
        );
        assert_eq!(
            clip_segment(LineClipAlgorithm::LiangBarsky, segment, &window()),
            liang_barsky_clip(segment, &window())
        );
    }

    #[test]
    fn test_degenerate_window_clips_to_point() {
        let point_window = ClipWindow::new(0.0, 0.0, 0.0, 0.0).unwrap();

        // A segment through the degenerate window collapses to its point
        let through = Segment::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        for algorithm in [LineClipAlgorithm::CohenSutherland, LineClipAlgorithm::LiangBarsky] {
            let clipped = clip_segment(algorithm, through, &point_window).unwrap();
            assert_relative_eq!(clipped.p1.x, 0.0, epsilon = 1e-6);
            assert_relative_eq!(clipped.p1.y, 0.0, epsilon = 1e-6);
            assert_relative_eq!(clipped.p2.x, 0.0, epsilon = 1e-6);
            assert_relative_eq!(clipped.p2.y, 0.0, epsilon = 1e-6);
        }

        // A segment missing it is rejected
        let missing = Segment::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        for algorithm in [LineClipAlgorithm::CohenSutherland, LineClipAlgorithm::LiangBarsky] {
            assert_eq!(clip_segment(algorithm, missing, &point_window), None);
        }
    }
}
