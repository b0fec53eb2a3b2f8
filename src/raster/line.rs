//! Line scan conversion.
//!
//! Two interchangeable strategies produce an ordered pixel sequence for a
//! segment: the DDA walks the dominant axis with real-valued increments
//! and rounds at each emission, while Bresenham tracks an integer error
//! term and never touches floating point. For non-degenerate slopes both
//! emit exactly one pixel per unit step along the dominant axis and agree
//! up to rounding-tie artifacts.

use crate::geometry::Pixel;
use crate::math::vec2::Vec2;

/// Rasterize a segment with the DDA (digital differential analyzer)
/// strategy.
///
/// The number of steps is the rounded dominant-axis extent; x and y then
/// advance by `extent / steps` per step, so the minor axis moves by the
/// slope (or inverse slope) each emission. Coordinates stay real-valued
/// throughout and are rounded only when a pixel is pushed.
///
/// Guarantees for a non-degenerate segment: exactly `steps + 1` pixels,
/// the first and last being the rounded endpoints, walking monotonically
/// along the dominant axis. A zero-length segment collapses to its single
/// rounded pixel.
pub fn dda_line(p1: Vec2, p2: Vec2) -> Vec<Pixel> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    let steps = dx.abs().max(dy.abs()).round() as i32;
    if steps == 0 {
        return vec![Pixel::rounding(p1)];
    }

    let x_increment = dx / steps as f32;
    let y_increment = dy / steps as f32;

    let mut x = p1.x;
    let mut y = p1.y;
    let mut pixels = Vec::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        pixels.push(Pixel::new(x.round() as i32, y.round() as i32));
        x += x_increment;
        y += y_increment;
    }

    pixels
}

/// Rasterize a segment between integer endpoints with Bresenham's
/// algorithm.
///
/// Decomposes by slope magnitude: the shallow case (`|dy| <= |dx|`)
/// iterates x, the steep case iterates y, each tracking the other axis
/// through an integer decision parameter. This entry point pre-swaps the
/// endpoints so the iterated axis runs low-to-high (the per-case routines
/// do not reorder), which means the output sequence follows the dominant
/// axis upward regardless of the order the endpoints were given in.
///
/// Purely horizontal and vertical segments route to the branch that
/// iterates their nonzero extent; a zero-length segment yields its single
/// pixel from the shallow branch.
pub fn bresenham_line(p1: Pixel, p2: Pixel) -> Vec<Pixel> {
    if (p2.y - p1.y).abs() <= (p2.x - p1.x).abs() {
        let (lo, hi) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };
        bresenham_shallow(lo, hi)
    } else {
        let (lo, hi) = if p1.y > p2.y { (p2, p1) } else { (p1, p2) };
        bresenham_steep(lo, hi)
    }
}

/// Shallow case (`|dy| <= |dx|`): x iterates from `p1.x` to `p2.x`,
/// which the caller guarantees runs low-to-high.
fn bresenham_shallow(p1: Pixel, p2: Pixel) -> Vec<Pixel> {
    let dx = p2.x - p1.x;
    let mut dy = p2.y - p1.y;

    // Fold the minor-axis direction into a step sign so the decision
    // parameter only ever sees the magnitude of dy.
    let mut y_step = 1;
    if dy < 0 {
        y_step = -1;
        dy = -dy;
    }

    let mut d = 2 * dy - dx;
    let mut y = p1.y;
    let mut pixels = Vec::with_capacity(dx as usize + 1);

    for x in p1.x..=p2.x {
        pixels.push(Pixel::new(x, y));

        if d > 0 {
            y += y_step;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }

    pixels
}

/// Steep case (`|dy| > |dx|`): the role swap of [`bresenham_shallow`],
/// iterating y and tracking x.
fn bresenham_steep(p1: Pixel, p2: Pixel) -> Vec<Pixel> {
    let dy = p2.y - p1.y;
    let mut dx = p2.x - p1.x;

    let mut x_step = 1;
    if dx < 0 {
        x_step = -1;
        dx = -dx;
    }

    let mut d = 2 * dx - dy;
    let mut x = p1.x;
    let mut pixels = Vec::with_capacity(dy as usize + 1);

    for y in p1.y..=p2.y {
        pixels.push(Pixel::new(x, y));

        if d > 0 {
            x += x_step;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dda_endpoint_inclusion() {
        let pixels = dda_line(Vec2::new(100.0, 100.0), Vec2::new(600.0, 400.0));
        assert_eq!(pixels.first(), Some(&Pixel::new(100, 100)));
        assert_eq!(pixels.last(), Some(&Pixel::new(600, 400)));
        // steps = max(500, 300) = 500, so 501 pixels
        assert_eq!(pixels.len(), 501);
    }

    #[test]
    fn test_dda_zero_length() {
        assert_eq!(dda_line(Vec2::new(3.2, 4.7), Vec2::new(3.2, 4.7)), vec![Pixel::new(3, 5)]);
    }

    #[test]
    fn test_dda_subpixel_segment_collapses() {
        // Both extents round to zero steps
        assert_eq!(dda_line(Vec2::new(0.1, 0.1), Vec2::new(0.3, 0.2)), vec![Pixel::new(0, 0)]);
    }

    #[test]
    fn test_bresenham_shallow_reference_walk() {
        let pixels = bresenham_line(Pixel::new(0, 0), Pixel::new(5, 2));
        assert_eq!(
            pixels,
            vec![
                Pixel::new(0, 0),
                Pixel::new(1, 0),
                Pixel::new(2, 1),
                Pixel::new(3, 1),
                Pixel::new(4, 2),
                Pixel::new(5, 2),
            ]
        );
    }

    #[test]
    fn test_dda_bresenham_agreement() {
        // One pixel per x step, with matching y under both strategies
        let dda = dda_line(Vec2::new(0.0, 0.0), Vec2::new(5.0, 2.0));
        let bres = bresenham_line(Pixel::new(0, 0), Pixel::new(5, 2));

        assert_eq!(dda.len(), 6);
        assert_eq!(dda, bres);
    }

    #[test]
    fn test_bresenham_steep_line() {
        let pixels = bresenham_line(Pixel::new(200, 100), Pixel::new(400, 500));
        assert_eq!(pixels.len(), 401); // one pixel per y step
        assert_eq!(pixels.first(), Some(&Pixel::new(200, 100)));
        assert_eq!(pixels.last(), Some(&Pixel::new(400, 500)));
    }

    #[test]
    fn test_bresenham_negative_slope() {
        let pixels = bresenham_line(Pixel::new(0, 4), Pixel::new(4, 0));
        assert_eq!(pixels.first(), Some(&Pixel::new(0, 4)));
        assert_eq!(pixels.last(), Some(&Pixel::new(4, 0)));
        assert_eq!(pixels.len(), 5);
    }

    #[test]
    fn test_bresenham_reversed_endpoints_same_pixels() {
        let forward: HashSet<_> = bresenham_line(Pixel::new(1, 2), Pixel::new(9, 5))
            .into_iter()
            .collect();
        let backward: HashSet<_> = bresenham_line(Pixel::new(9, 5), Pixel::new(1, 2))
            .into_iter()
            .collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_bresenham_horizontal_and_vertical() {
        let horizontal = bresenham_line(Pixel::new(2, 7), Pixel::new(6, 7));
        assert_eq!(horizontal.len(), 5);
        assert!(horizontal.iter().all(|p| p.y == 7));

        let vertical = bresenham_line(Pixel::new(3, 1), Pixel::new(3, 6));
        assert_eq!(vertical.len(), 6);
        assert!(vertical.iter().all(|p| p.x == 3));
    }

    #[test]
    fn test_bresenham_single_pixel() {
        assert_eq!(bresenham_line(Pixel::new(5, 5), Pixel::new(5, 5)), vec![Pixel::new(5, 5)]);
    }

    #[test]
    fn test_bresenham_diagonal() {
        let pixels = bresenham_line(Pixel::new(0, 0), Pixel::new(3, 3));
        assert_eq!(
            pixels,
            vec![Pixel::new(0, 0), Pixel::new(1, 1), Pixel::new(2, 2), Pixel::new(3, 3)]
        );
    }
}
