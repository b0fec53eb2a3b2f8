//! Two-region midpoint ellipse scan conversion.

use crate::geometry::Pixel;

/// Rasterize an axis-aligned ellipse outline with the two-region midpoint
/// algorithm.
///
/// Region 1 covers the arc where the tangent slope magnitude is below 1:
/// x advances every step while the running derivative terms satisfy
/// `dx < dy`. Region 2 picks up from the region-1 exit point with a fresh
/// decision parameter and runs until y reaches 0, advancing y every step.
/// The hand-off is continuous: the first region-2 point is one unit step
/// from the last region-1 point in each axis.
///
/// Every computed arc point is mirrored into the four quadrants around
/// the center; reflections that coincide on the axes are emitted once, so
/// the output contains each outline pixel exactly once.
///
/// Degenerate radii collapse by explicit branch: both zero emits the
/// center pixel, a single zero radius emits the axis-aligned segment the
/// ellipse flattens into. Negative radii are treated as their magnitude.
pub fn midpoint_ellipse(center: Pixel, rx: i32, ry: i32) -> Vec<Pixel> {
    let rx = rx.abs();
    let ry = ry.abs();

    if rx == 0 && ry == 0 {
        return vec![center];
    }
    if ry == 0 {
        return (center.x - rx..=center.x + rx)
            .map(|x| Pixel::new(x, center.y))
            .collect();
    }
    if rx == 0 {
        return (center.y - ry..=center.y + ry)
            .map(|y| Pixel::new(center.x, y))
            .collect();
    }

    let rx2 = (rx * rx) as f32;
    let ry2 = (ry * ry) as f32;
    let two_rx2 = 2.0 * rx2;
    let two_ry2 = 2.0 * ry2;

    let mut x = 0;
    let mut y = ry;

    // Running derivative terms: the ellipse tangent has slope magnitude 1
    // where 2*ry^2*x = 2*rx^2*y, which is the region boundary
    let mut dx = 0.0;
    let mut dy = two_rx2 * y as f32;

    let mut pixels = Vec::new();
    mirror_quadrants(&mut pixels, center, x, y);

    // Region 1: x advances every step
    let mut p1 = ry2 - rx2 * ry as f32 + 0.25 * rx2;

    while dx < dy {
        x += 1;
        dx += two_ry2;

        if p1 < 0.0 {
            p1 += ry2 + dx;
        } else {
            y -= 1;
            dy -= two_rx2;
            p1 += ry2 + dx - dy;
        }

        mirror_quadrants(&mut pixels, center, x, y);
    }

    // Region 2: y advances every step, starting from the region-1 exit point
    let mut p2 = ry2 * (x as f32 + 0.5).powi(2) + rx2 * (y as f32 - 1.0).powi(2) - rx2 * ry2;

    while y > 0 {
        y -= 1;
        dy -= two_rx2;

        if p2 > 0.0 {
            p2 += rx2 - dy;
        } else {
            x += 1;
            dx += two_ry2;
            p2 += rx2 - dy + dx;
        }

        mirror_quadrants(&mut pixels, center, x, y);
    }

    pixels
}

/// Push the reflections of the arc point `(x, y)` into the four quadrants
/// around the center, skipping reflections that coincide with one already
/// pushed for this step (`x == 0` or `y == 0`).
fn mirror_quadrants(pixels: &mut Vec<Pixel>, center: Pixel, x: i32, y: i32) {
    let (xc, yc) = (center.x, center.y);

    pixels.push(Pixel::new(xc + x, yc + y));
    if x != 0 {
        pixels.push(Pixel::new(xc - x, yc + y));
    }
    if y != 0 {
        pixels.push(Pixel::new(xc + x, yc - y));
        if x != 0 {
            pixels.push(Pixel::new(xc - x, yc - y));
        }
    }
}
