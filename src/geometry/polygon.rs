use crate::error::{Result, ValidationError};
use crate::math::{Vector2, EPSILON};

use super::{Point, Segment};

/// A simple polygon: an ordered, cyclic sequence of at least three vertices
/// whose boundary does not self-intersect.
///
/// The invariants are enforced by [`Polygon::new`] and can never be violated
/// afterwards; every query operation relies on them.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooFewVertices`] for fewer than three
    /// vertices, or [`ValidationError::SelfIntersectingEdges`] when any two
    /// cyclic edges intersect. Neighbouring edges touching at their shared
    /// vertex do not count as an intersection.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(ValidationError::TooFewVertices(vertices.len()).into());
        }
        let edges = cyclic_edges(&vertices).unwrap_or_default();
        for (i, first) in edges.iter().enumerate() {
            for (j, second) in edges.iter().enumerate().skip(i + 1) {
                if first.intersects(*second) {
                    return Err(ValidationError::SelfIntersectingEdges { first: i, second: j }.into());
                }
            }
        }
        Ok(Self { vertices })
    }

    /// The ordered vertex sequence.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The ordered cyclic sequence of boundary segments.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        cyclic_edges(&self.vertices).unwrap_or_default()
    }

    /// Total boundary length, wrapping from the last vertex back to the
    /// first.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        self.edges().iter().map(|e| e.length()).sum()
    }

    /// Signed area by the shoelace formula over the cyclic vertex sequence.
    ///
    /// The sign depends on the winding direction. Valid only for
    /// non-self-intersecting polygons, which construction guarantees.
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            sum += (a.x + b.x) * (a.y - b.y);
        }
        sum / 2.0
    }

    /// Point-in-polygon test by ray casting, exclusive on most of the
    /// boundary.
    ///
    /// For each non-horizontal edge a crossing is counted when the point's y
    /// lies in the half-open y-extent of the edge and its x is strictly left
    /// of the edge's x-intersection at that y, or at or left of a vertical
    /// edge. Vertices and points on horizontal or left-side edges therefore
    /// test outside, while a point on a right-side vertical edge crosses it
    /// and tests inside.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let n = self.vertices.len();
        let mut crossings = 0;
        for i in 0..n {
            let p1 = self.vertices[i];
            let p2 = self.vertices[(i + 1) % n];

            if (p1.y - p2.y).abs() < EPSILON {
                continue;
            }
            if point.y <= p1.y.min(p2.y)
                || point.y > p1.y.max(p2.y)
                || point.x > p1.x.max(p2.x)
            {
                continue;
            }

            if (p1.x - p2.x).abs() < EPSILON {
                // Vertical edge: the bounding check above already placed the
                // point at or left of it.
                crossings += 1;
                continue;
            }

            let x_intersection = p1.x + (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y);
            if point.x < x_intersection {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }

    /// Tests whether any boundary edge intersects the given segment.
    #[must_use]
    pub fn intersects_segment(&self, segment: Segment) -> bool {
        self.edges().iter().any(|e| e.intersects(segment))
    }

    /// Arithmetic mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Point {
        centroid_of(&self.vertices)
    }
}

/// Decomposes a point sequence into its cyclic edge list, wrapping the last
/// point back to the first. Returns `None` below two points.
#[must_use]
pub fn cyclic_edges(points: &[Point]) -> Option<Vec<Segment>> {
    if points.len() < 2 {
        return None;
    }
    let mut edges = Vec::with_capacity(points.len());
    for window in points.windows(2) {
        edges.push(Segment::new(window[0], window[1]));
    }
    if let (Some(last), Some(first)) = (points.last(), points.first()) {
        edges.push(Segment::new(*last, *first));
    }
    Some(edges)
}

/// Arithmetic mean of a non-empty point slice.
///
/// Shared by [`Polygon::centroid`] and the point-set centroid.
#[must_use]
pub(crate) fn centroid_of(points: &[Point]) -> Point {
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.to_vector());
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Point::new(sum.x / n, sum.y / n)
}
