use crate::error::Result;
use crate::operations::hull;

use super::polygon::centroid_of;
use super::{Point, Polygon};

/// An unordered, non-empty collection of points.
///
/// Duplicates are allowed and none of the polygon validity invariants apply.
/// The SQL null point set coincides with the empty one, so emptiness is
/// unrepresentable here and [`PointSet::new`] returns `None` for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set, or `None` when `points` is empty.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    /// Creates a point set from a polygon's vertex sequence.
    #[must_use]
    pub fn from_polygon(polygon: &Polygon) -> Self {
        Self {
            points: polygon.vertices().to_vec(),
        }
    }

    /// The member points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Proximity membership test: true iff `point` lies within `eps` of any
    /// member point.
    ///
    /// This is distinct from the area containment test of
    /// [`Polygon::contains_point`].
    #[must_use]
    pub fn contains_point(&self, point: Point, eps: f64) -> bool {
        self.points.iter().any(|p| point.distance_to(*p) <= eps)
    }

    /// Arithmetic mean of the member points.
    #[must_use]
    pub fn centroid(&self) -> Point {
        centroid_of(&self.points)
    }

    /// Convex hull of the member points as a validated [`Polygon`].
    ///
    /// Returns `Ok(None)` when the set has fewer than three points.
    ///
    /// # Errors
    ///
    /// Propagates the polygon validation failure when the hull is
    /// degenerate, e.g. for an all-collinear set.
    pub fn find_convex_hull(&self) -> Result<Option<Polygon>> {
        hull::convex_hull(&self.points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn empty_input_is_null() {
        assert!(PointSet::new(Vec::new()).is_none());
    }

    #[test]
    fn from_polygon_copies_vertices() {
        let polygon =
            Polygon::new(pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])).unwrap();
        let set = PointSet::from_polygon(&polygon);
        assert_eq!(set.points(), polygon.vertices());
    }

    #[test]
    fn contains_point_is_a_proximity_test() {
        let set = PointSet::new(pts(&[(0.0, 0.0), (5.0, 5.0)])).unwrap();
        assert!(set.contains_point(Point::new(0.05, 0.0), 0.1));
        assert!(set.contains_point(Point::new(5.0, 5.0), 0.1));
        assert!(!set.contains_point(Point::new(2.5, 2.5), 0.1));
        // Inside the segment between members but near neither: not a member.
        assert!(!set.contains_point(Point::new(1.0, 1.0), 0.1));
    }

    #[test]
    fn centroid_of_members() {
        let set = PointSet::new(pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)])).unwrap();
        assert_eq!(set.centroid(), Point::new(2.5, 2.5));
    }

    #[test]
    fn centroid_of_single_point() {
        let set = PointSet::new(pts(&[(2.0, 3.0)])).unwrap();
        assert_eq!(set.centroid(), Point::new(2.0, 3.0));
    }
}
