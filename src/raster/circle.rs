//! Midpoint circle scan conversion.

use crate::geometry::Pixel;

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Walks the arc from `(0, r)` toward the `x == y` diagonal with an
/// integer decision parameter `d`, initialized to `1 - r`. At each step x
/// grows; whether y shrinks depends on whether the midpoint between the
/// two candidate pixels falls inside the circle (`d < 0` keeps y). Every
/// computed arc point is then mirrored into the other seven octants
/// around the center.
///
/// Mirrored points that coincide, on the axes (`x == 0`) and on the
/// diagonal (`x == y`), are emitted once, so the output contains each
/// outline pixel exactly once. A zero radius collapses to the center
/// pixel; a negative radius is treated as its magnitude.
pub fn midpoint_circle(center: Pixel, radius: i32) -> Vec<Pixel> {
    let radius = radius.abs();
    if radius == 0 {
        return vec![center];
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    let mut pixels = Vec::new();
    mirror_octants(&mut pixels, center, x, y);

    while x < y {
        x += 1;

        if d < 0 {
            // Midpoint inside the circle: stay on this row
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }

        // A step that crosses the diagonal lands exactly on the swap of
        // the previous arc point, whose mirrors are already emitted
        if x <= y {
            mirror_octants(&mut pixels, center, x, y);
        }
    }

    pixels
}

/// Push the reflections of the arc point `(x, y)` into all eight octants
/// around the center, skipping reflections that coincide with one already
/// pushed for this step (`x == 0`, `y == 0`, or `x == y`).
fn mirror_octants(pixels: &mut Vec<Pixel>, center: Pixel, x: i32, y: i32) {
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
    if x != y {
        // The axis-swapped mirrors duplicate the set above on the diagonal
        pixels.push(Pixel::new(xc + y, yc + x));
        if y != 0 {
            pixels.push(Pixel::new(xc - y, yc + x));
        }
        if x != 0 {
            pixels.push(Pixel::new(xc + y, yc - x));
            if y != 0 {
                pixels.push(Pixel::new(xc - y, yc - x));
            }
        }
    }
}
