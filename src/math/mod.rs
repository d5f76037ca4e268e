/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for near-zero cross products and degenerate slope
/// denominators.
pub const EPSILON: f64 = 1e-12;

/// Turn direction of the ordered point triple `(p, q, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Classifies the turn taken at `q` when walking `p → q → r`.
///
/// Cross products with magnitude below [`EPSILON`] classify as
/// [`Orientation::Collinear`]. Every consumer in the crate (segment
/// intersection, polygon validation, the hull scan) goes through this one
/// predicate; the sign convention is fixed here and nowhere else.
#[must_use]
pub fn orientation(px: f64, py: f64, qx: f64, qy: f64, rx: f64, ry: f64) -> Orientation {
    let cross = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    if cross.abs() < EPSILON {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}
