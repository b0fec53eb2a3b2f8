//! Sutherland-Hodgman polygon clipping.

use crate::geometry::Polygon;
use crate::math::vec2::Vec2;

// Near-parallel guard for the edge intersection denominator
const DENOM_EPSILON: f32 = 1e-10;

/// True if `p` lies strictly on the inner side of the directed clip edge.
///
/// The inner side is the left of `edge_start -> edge_end`, which matches a
/// counter-clockwise clip polygon; a clockwise clip polygon flips the
/// convention for subject and clip alike, which is why consistent winding
/// between the two is a caller invariant.
fn inside(p: Vec2, edge_start: Vec2, edge_end: Vec2) -> bool {
    (edge_end - edge_start).cross(p - edge_start) > 0.0
}

/// Intersection of the segment `p1 -> p2` with the infinite line through
/// the clip edge. A near-zero denominator (near-parallel lines) falls back
/// to `p1` instead of dividing.
fn intersection(p1: Vec2, p2: Vec2, edge_start: Vec2, edge_end: Vec2) -> Vec2 {
    let d1 = p2 - p1;
    let d2 = edge_end - edge_start;

    let denom = d1.cross(d2);
    if denom.abs() < DENOM_EPSILON {
        return p1;
    }

    let t = (edge_start - p1).cross(d2) / denom;
    p1 + d1 * t
}

/// Clip a subject polygon against a convex clip polygon.
///
/// Processes one clip edge at a time: the vertices of the current output
/// polygon are walked pairwise, emitting inside vertices as-is and the
/// boundary intersection wherever an edge crosses the clip line (entering
/// transitions emit the intersection before the vertex, exiting ones emit
/// only the intersection). The output of one pass feeds the next; an
/// empty intermediate polygon short-circuits.
///
/// The result has at most `subject.len() + clip.len()` vertices and may
/// have fewer than 3 (possibly zero) when the subject is clipped away,
/// which is why it is returned as a bare vertex list rather than a
/// [`Polygon`].
///
/// The clip polygon must be convex and wound consistently with the
/// subject; neither property is validated, and a non-convex clip polygon
/// produces undefined output.
pub fn sutherland_hodgman_clip(subject: &Polygon, clip: &Polygon) -> Vec<Vec2> {
    let mut output: Vec<Vec2> = subject.vertices().to_vec();

    for (edge_start, edge_end) in clip.edges() {
        if output.is_empty() {
            // Entirely outside; no later edge can bring vertices back
            break;
        }

        let input = std::mem::take(&mut output);

        for (i, &current) in input.iter().enumerate() {
            let previous = input[(i + input.len() - 1) % input.len()];

            let current_inside = inside(current, edge_start, edge_end);
            let previous_inside = inside(previous, edge_start, edge_end);

            if current_inside {
                if !previous_inside {
                    output.push(intersection(previous, current, edge_start, edge_end));
                }
                output.push(current);
            } else if previous_inside {
                output.push(intersection(previous, current, edge_start, edge_end));
            }
        }
    }

    output
}
