use crate::math::{orientation, Orientation, EPSILON};

use super::Point;

/// A line segment between two points.
///
/// Directionless as a geometric object, but `a` and `b` are kept in input
/// order because the slope sign and the containment test depend on it.
/// Degenerate (zero-length) when `a == b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    /// Creates a segment between two endpoints.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(self) -> f64 {
        self.a.distance_to(self.b)
    }

    /// Slope of the carrier line through `a` and `b`.
    ///
    /// The denominator keeps the sign of `b.x - a.x` but its magnitude is
    /// floored at [`EPSILON`], so a near-vertical segment yields a very
    /// steep finite slope instead of dividing by zero. This approximation
    /// keeps the intersection machinery stable on degenerate input.
    #[must_use]
    pub fn slope(self) -> f64 {
        let dy = self.b.y - self.a.y;
        let dx = self.b.x - self.a.x;
        let denom = if dx < 0.0 {
            dx.min(-EPSILON)
        } else {
            dx.max(EPSILON)
        };
        dy / denom
    }

    /// Y-intercept of the carrier line through `a` and `b`.
    #[must_use]
    pub fn intercept(self) -> f64 {
        self.a.y - self.slope() * self.a.x
    }

    /// Tests whether `point` lies on the segment, excluding both endpoints.
    ///
    /// A point within `2 * eps` of either endpoint is rejected, as is a
    /// point outside the bounding box expanded by `eps`. Otherwise the point
    /// is accepted iff its vertical distance to the carrier line is within
    /// `2 * eps`.
    #[must_use]
    pub fn contains_point(self, point: Point, eps: f64) -> bool {
        if self.a.distance_to(point) < 2.0 * eps || self.b.distance_to(point) < 2.0 * eps {
            return false;
        }

        let min_x = self.a.x.min(self.b.x);
        let max_x = self.a.x.max(self.b.x);
        let min_y = self.a.y.min(self.b.y);
        let max_y = self.a.y.max(self.b.y);
        if min_x - point.x > eps
            || point.x - max_x > eps
            || min_y - point.y > eps
            || point.y - max_y > eps
        {
            return false;
        }

        let distance = (point.y - (self.slope() * point.x + self.intercept())).abs();
        distance <= 2.0 * eps
    }

    /// Tests whether two segments intersect.
    ///
    /// The general case requires the two orientation pairs to disagree and
    /// the computed crossing point to lie on both segments; each collinear
    /// orientation falls back to a containment check of the corresponding
    /// endpoint. Endpoint-to-endpoint touching does not count, matching the
    /// endpoint exclusion of [`Segment::contains_point`].
    #[must_use]
    pub fn intersects(self, other: Segment) -> bool {
        let o1 = orientation(self.a.x, self.a.y, self.b.x, self.b.y, other.a.x, other.a.y);
        let o2 = orientation(self.a.x, self.a.y, self.b.x, self.b.y, other.b.x, other.b.y);
        let o3 = orientation(other.a.x, other.a.y, other.b.x, other.b.y, self.a.x, self.a.y);
        let o4 = orientation(other.a.x, other.a.y, other.b.x, other.b.y, self.b.x, self.b.y);

        if o1 != o2 && o3 != o4 {
            let crossing = self.carrier_intersection(other);
            if self.contains_point(crossing, EPSILON) && other.contains_point(crossing, EPSILON) {
                return true;
            }
        }
        if o1 == Orientation::Collinear && self.contains_point(other.a, EPSILON) {
            return true;
        }
        if o2 == Orientation::Collinear && self.contains_point(other.b, EPSILON) {
            return true;
        }
        if o3 == Orientation::Collinear && other.contains_point(self.a, EPSILON) {
            return true;
        }
        if o4 == Orientation::Collinear && other.contains_point(self.b, EPSILON) {
            return true;
        }

        false
    }

    /// Intersection point of two segments, or `None` when they do not
    /// intersect.
    #[must_use]
    pub fn intersection(self, other: Segment) -> Option<Point> {
        if self.intersects(other) {
            Some(self.carrier_intersection(other))
        } else {
            None
        }
    }

    /// Crossing point of the two carrier lines in slope/intercept form.
    ///
    /// The slope difference is floored to `±EPSILON` before dividing so
    /// near-parallel lines do not blow up.
    fn carrier_intersection(self, other: Segment) -> Point {
        let m1 = self.slope();
        let c1 = self.intercept();
        let m2 = other.slope();
        let c2 = other.intercept();

        let dm = m1 - m2;
        let dm = if dm > 0.0 {
            dm.max(EPSILON)
        } else {
            dm.min(-EPSILON)
        };

        let x = (c2 - c1) / dm;
        let y = m1 * x + c1;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn length_three_four_five() {
        assert_relative_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn slope_and_intercept() {
        let s = seg(0.0, 1.0, 2.0, 5.0);
        assert_relative_eq!(s.slope(), 2.0);
        assert_relative_eq!(s.intercept(), 1.0);
    }

    #[test]
    fn slope_keeps_sign_of_dx() {
        // Same segment traversed in the other direction: dy and dx both
        // flip, so the slope must not change sign.
        let forward = seg(0.0, 1.0, 2.0, 5.0);
        let backward = seg(2.0, 5.0, 0.0, 1.0);
        assert_relative_eq!(forward.slope(), backward.slope());
    }

    #[test]
    fn slope_of_vertical_segment_is_floored() {
        // dx = 0 is floored to +EPSILON; the slope is huge but finite.
        let down = seg(1.0, 1.0, 1.0, 0.0);
        assert!(down.slope() < -1e11);
        let up = seg(1.0, 0.0, 1.0, 1.0);
        assert!(up.slope() > 1e11);
    }

    #[test]
    fn contains_point_near_the_segment() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert!(s.contains_point(Point::new(1.0, 1.1), 0.11));
        assert!(!s.contains_point(Point::new(1.0, 1.1), 0.01));
        assert!(!s.contains_point(Point::new(2.0, 1.0), 0.01));
    }

    #[test]
    fn contains_point_excludes_endpoints() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert!(!s.contains_point(Point::new(0.0, 0.0), 0.01));
        assert!(!s.contains_point(Point::new(2.0, 2.0), 0.01));
        // Exact midpoint is still in.
        assert!(s.contains_point(Point::new(1.0, 1.0), 0.01));
    }

    #[test]
    fn intersects_crossing_diagonals() {
        let s1 = seg(0.0, 0.0, 1.0, 1.0);
        let s2 = seg(0.0, 1.0, 1.0, 0.0);
        assert!(s1.intersects(s2));
        assert!(s2.intersects(s1));
    }

    #[test]
    fn intersection_point_of_crossing_diagonals() {
        let s1 = seg(0.0, 0.0, 1.0, 1.0);
        let s2 = seg(0.0, 1.0, 1.0, 0.0);
        let p = s1.intersection(s2);
        assert_eq!(p, Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn intersects_sharing_an_endpoint_is_false() {
        let s1 = seg(0.0, 0.0, 1.0, 1.0);
        let s2 = seg(0.0, 1.0, 1.0, 1.0);
        assert!(!s1.intersects(s2));
        assert!(s1.intersection(s2).is_none());
    }

    #[test]
    fn intersects_near_parallel_segments() {
        let s = seg(0.0, 0.0, 1.0, 1.0);
        // Crossing just inside the right end.
        assert!(s.intersects(seg(0.0, 1.0, 1.0, 0.999_999_99)));
        // Crossing just beyond the right end.
        assert!(!s.intersects(seg(0.0, 1.0, 1.0, 1.000_000_01)));
    }

    #[test]
    fn intersects_collinear_overlap() {
        let s1 = seg(0.0, 0.0, 2.0, 2.0);
        let s2 = seg(1.0, 1.0, 3.0, 3.0);
        assert!(s1.intersects(s2));
        assert!(s2.intersects(s1));
    }

    #[test]
    fn intersects_collinear_disjoint_is_false() {
        let s1 = seg(0.0, 0.0, 1.0, 1.0);
        let s2 = seg(2.0, 2.0, 3.0, 3.0);
        assert!(!s1.intersects(s2));
    }

    #[test]
    fn intersects_parallel_offset_is_false() {
        let s1 = seg(0.0, 0.0, 1.0, 0.0);
        let s2 = seg(0.0, 1.0, 1.0, 1.0);
        assert!(!s1.intersects(s2));
        assert!(s1.intersection(s2).is_none());
    }
}
