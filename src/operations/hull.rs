use crate::error::Result;
use crate::geometry::{Point, Polygon};
use crate::math::{orientation, Orientation};

/// Convex hull of a point slice by Graham scan.
///
/// Returns `Ok(None)` for fewer than three input points. The scan anchors at
/// the lexicographically smallest `(y, x)` point, sorts the rest by polar
/// angle about the anchor (ties broken by distance from the anchor, which
/// makes the result deterministic for duplicated angles), then walks the
/// sorted sequence keeping only counterclockwise turns on a stack. The stack,
/// bottom-first, is the hull's vertex sequence.
///
/// # Errors
///
/// The hull is returned as a validated [`Polygon`], so a degenerate result
/// (for example from an all-collinear input) surfaces as a
/// `ValidationError`.
pub fn convex_hull(points: &[Point]) -> Result<Option<Polygon>> {
    if points.len() < 3 {
        return Ok(None);
    }
    let Some(anchor) = points
        .iter()
        .copied()
        .min_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
    else {
        return Ok(None);
    };

    let mut sorted = points.to_vec();
    sorted.sort_by(|p, q| {
        let pa = (*p - anchor).polar_angle();
        let qa = (*q - anchor).polar_angle();
        pa.total_cmp(&qa)
            .then_with(|| anchor.distance_to(*p).total_cmp(&anchor.distance_to(*q)))
    });

    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len());
    stack.push(sorted[0]);
    stack.push(sorted[1]);
    for &candidate in &sorted[2..] {
        while stack.len() > 2 {
            let below = stack[stack.len() - 2];
            let top = stack[stack.len() - 1];
            let turn = orientation(below.x, below.y, top.x, top.y, candidate.x, candidate.y);
            if turn == Orientation::CounterClockwise {
                break;
            }
            stack.pop();
        }
        stack.push(candidate);
    }

    Ok(Some(Polygon::new(stack)?))
}
