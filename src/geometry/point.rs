use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::Vector2;

/// An immutable 2D coordinate value.
///
/// Equality is exact on both coordinates; no tolerance is applied. SQL-style
/// nullability is represented as `Option<Point>` at the crate boundary, so
/// the type itself always carries meaningful coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinates as a [`Vector2`].
    #[must_use]
    pub fn to_vector(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    /// Polar angle of the point about the origin, in `(-π, π]`.
    #[must_use]
    pub fn polar_angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self + (-rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, divisor: f64) -> Point {
        Point::new(self.x / divisor, self.y / divisor)
    }
}
