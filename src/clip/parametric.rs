//! Liang-Barsky parametric line clipping.

use crate::geometry::{ClipWindow, Segment};

/// Clip a segment against a rectangular window by narrowing the
/// parametric interval `[u1, u2]` of `p1 + u * (p2 - p1)`.
///
/// For each boundary the pair `(p, q)` encodes the segment's approach:
/// `p == 0` means the segment runs parallel to that boundary and is
/// rejected outright when it also lies outside of it (`q < 0`);
/// otherwise `r = q / p` is an entering candidate (`p < 0`, raises `u1`)
/// or an exiting candidate (`p > 0`, lowers `u2`). An inverted interval
/// after all four boundaries means no visible portion remains.
///
/// Gives the same geometric result as
/// [`cohen_sutherland_clip`](super::cohen_sutherland_clip) with fewer
/// branches and no loop.
pub fn liang_barsky_clip(segment: Segment, window: &ClipWindow) -> Option<Segment> {
    let delta = segment.delta();

    // Boundary order: left, right, bottom, top
    let p = [-delta.x, delta.x, -delta.y, delta.y];
    let q = [
        segment.p1.x - window.x_min,
        window.x_max - segment.p1.x,
        segment.p1.y - window.y_min,
        window.y_max - segment.p1.y,
    ];

    let mut u1 = 0.0f32;
    let mut u2 = 1.0f32;

    for (&pi, &qi) in p.iter().zip(&q) {
        if pi == 0.0 {
            // Parallel to this boundary; outside of it means gone entirely
            if qi < 0.0 {
                return None;
            }
        } else {
            let r = qi / pi;
            if pi < 0.0 {
                u1 = u1.max(r);
            } else {
                u2 = u2.min(r);
            }
        }
    }

    if u1 > u2 {
        return None;
    }

    Some(Segment::new(segment.at(u1), segment.at(u2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use approx::assert_relative_eq;

    fn window() -> ClipWindow {
        ClipWindow::new(-0.5, -0.5, 0.5, 0.5).unwrap()
    }

    #[test]
    fn test_fully_inside_keeps_full_interval() {
        let segment = Segment::new(Vec2::new(-0.3, -0.2), Vec2::new(0.2, 0.3));
        let clipped = liang_barsky_clip(segment, &window()).unwrap();

        assert_relative_eq!(clipped.p1.x, segment.p1.x);
        assert_relative_eq!(clipped.p1.y, segment.p1.y);
        assert_relative_eq!(clipped.p2.x, segment.p2.x, epsilon = 1e-6);
        assert_relative_eq!(clipped.p2.y, segment.p2.y, epsilon = 1e-6);
    }

    #[test]
    fn test_entering_segment() {
        let segment = Segment::new(Vec2::new(-0.7, -0.3), Vec2::new(0.2, 0.1));
        let clipped = liang_barsky_clip(segment, &window()).unwrap();

        // Enters through the left edge; the inside endpoint is untouched
        assert_relative_eq!(clipped.p1.x, -0.5, epsilon = 1e-6);
        assert_relative_eq!(clipped.p2.x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(clipped.p2.y, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_through_segment_clipped_both_ends() {
        let segment = Segment::new(Vec2::new(-0.1, -0.7), Vec2::new(0.3, 0.7));
        let clipped = liang_barsky_clip(segment, &window()).unwrap();

        assert_relative_eq!(clipped.p1.y, -0.5, epsilon = 1e-6);
        assert_relative_eq!(clipped.p2.y, 0.5, epsilon = 1e-6);
        assert!(window().contains(clipped.p1));
        assert!(window().contains(clipped.p2));
    }

    #[test]
    fn test_fully_outside_rejected() {
        let segment = Segment::new(Vec2::new(0.55, 0.55), Vec2::new(0.9, 0.9));
        assert_eq!(liang_barsky_clip(segment, &window()), None);
    }

    #[test]
    fn test_parallel_outside_rejected() {
        // Horizontal segment above the window: p == 0 for top/bottom, outside top
        let segment = Segment::new(Vec2::new(-0.3, 0.8), Vec2::new(0.3, 0.8));
        assert_eq!(liang_barsky_clip(segment, &window()), None);
    }

    #[test]
    fn test_parallel_inside_clipped_in_x_only() {
        let segment = Segment::new(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0));
        let clipped = liang_barsky_clip(segment, &window()).unwrap();

        assert_relative_eq!(clipped.p1.x, -0.5, epsilon = 1e-6);
        assert_relative_eq!(clipped.p1.y, 0.0);
        assert_relative_eq!(clipped.p2.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(clipped.p2.y, 0.0);
    }

    #[test]
    fn test_zero_length_segment() {
        // Degenerate segment: inside is kept as a point, outside rejected
        let inside = Segment::new(Vec2::new(0.1, 0.1), Vec2::new(0.1, 0.1));
        assert_eq!(liang_barsky_clip(inside, &window()), Some(inside));

        let outside = Segment::new(Vec2::new(0.9, 0.9), Vec2::new(0.9, 0.9));
        assert_eq!(liang_barsky_clip(outside, &window()), None);
    }
}
