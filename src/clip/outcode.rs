//! Cohen-Sutherland outcode line clipping.

use crate::geometry::{ClipWindow, Segment};
use crate::math::vec2::Vec2;

// Region codes: a point's outcode ORs one bit per window boundary it
// violates. Left/right and bottom/top are mutually exclusive per axis.
const INSIDE: u8 = 0b0000;
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const BOTTOM: u8 = 0b0100;
const TOP: u8 = 0b1000;

fn outcode(p: Vec2, window: &ClipWindow) -> u8 {
    let mut code = INSIDE;

    if p.x < window.x_min {
        code |= LEFT;
    } else if p.x > window.x_max {
        code |= RIGHT;
    }
    if p.y < window.y_min {
        code |= BOTTOM;
    } else if p.y > window.y_max {
        code |= TOP;
    }

    code
}

/// Clip a segment against a rectangular window using outcodes.
///
/// Each pass either trivially accepts (both outcodes zero), trivially
/// rejects (the outcodes share a bit, so both endpoints are beyond the
/// same boundary), or replaces one outside endpoint with its intersection
/// on a boundary its outcode names, checking top/bottom before
/// right/left. One boundary is cleared per pass, so the loop terminates
/// within four iterations.
pub fn cohen_sutherland_clip(segment: Segment, window: &ClipWindow) -> Option<Segment> {
    let Segment { mut p1, mut p2 } = segment;
    let mut code1 = outcode(p1, window);
    let mut code2 = outcode(p2, window);

    loop {
        if code1 == INSIDE && code2 == INSIDE {
            return Some(Segment::new(p1, p2));
        }
        if code1 & code2 != INSIDE {
            return None;
        }

        // Pick an endpoint that is outside and slide it onto the boundary
        // its outcode names. The selected bit guarantees the segment has
        // extent along that axis, so the division is never by zero.
        let code_out = if code1 != INSIDE { code1 } else { code2 };

        let p = if code_out & TOP != INSIDE {
            Vec2::new(
                p1.x + (p2.x - p1.x) * (window.y_max - p1.y) / (p2.y - p1.y),
                window.y_max,
            )
        } else if code_out & BOTTOM != INSIDE {
            Vec2::new(
                p1.x + (p2.x - p1.x) * (window.y_min - p1.y) / (p2.y - p1.y),
                window.y_min,
            )
        } else if code_out & RIGHT != INSIDE {
            Vec2::new(
                window.x_max,
                p1.y + (p2.y - p1.y) * (window.x_max - p1.x) / (p2.x - p1.x),
            )
        } else {
            Vec2::new(
                window.x_min,
                p1.y + (p2.y - p1.y) * (window.x_min - p1.x) / (p2.x - p1.x),
            )
        };

        if code_out == code1 {
            p1 = p;
            code1 = outcode(p1, window);
        } else {
            p2 = p;
            code2 = outcode(p2, window);
        }
    }
}
