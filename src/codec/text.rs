//! Textual literal forms.
//!
//! Points render as `"(x y)"`; segments, polygons, and point sets as a
//! comma-separated list of point literals in one outer pair of parentheses.
//! Parsing tolerates arbitrary whitespace and newlines between tokens and
//! strips wrapping parentheses from both ends before splitting, so nested
//! literals survive the comma split as `"1 2)"`-style fragments.

use std::fmt;

use crate::error::{ParseError, Result};
use crate::geometry::{Point, PointSet, Polygon, Segment};

use super::TextCodec;

/// Canonical rendering of a null value, applied uniformly to all four types.
pub const NULL_MARKER: &str = "NULL";

fn is_null_text(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty() || trimmed == NULL_MARKER
}

/// Flattens newlines and strips wrapping parentheses and spaces from both
/// ends.
fn strip_wrapping(input: &str) -> String {
    input
        .replace('\n', " ")
        .trim_matches(|c| c == '(' || c == ')' || c == ' ')
        .to_owned()
}

/// Parses one point literal (or a fragment left over from a list split).
fn parse_point_body(token: &str) -> Result<Point> {
    let body = strip_wrapping(token);
    let coords: Vec<&str> = body.split_whitespace().collect();
    if coords.len() != 2 {
        return Err(ParseError::CoordinateCount {
            expected: 2,
            got: coords.len(),
        }
        .into());
    }
    let x = parse_coordinate(coords[0])?;
    let y = parse_coordinate(coords[1])?;
    Ok(Point::new(x, y))
}

fn parse_coordinate(token: &str) -> Result<f64> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate(token.to_owned()).into())
}

/// Parses a comma-separated point list. An empty body yields an empty list;
/// the caller decides whether that means null or a validation failure.
fn parse_point_list(input: &str) -> Result<Vec<Point>> {
    let body = strip_wrapping(input);
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    body.split(',').map(parse_point_body).collect()
}

fn format_point_list(points: &[Point]) -> String {
    let body: Vec<String> = points.iter().map(ToString::to_string).collect();
    format!("({})", body.join(","))
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_point_list(self.vertices()))
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_point_list(self.points()))
    }
}

impl TextCodec for Point {
    fn parse_text(input: &str) -> Result<Option<Self>> {
        if is_null_text(input) {
            return Ok(None);
        }
        parse_point_body(input).map(Some)
    }

    fn format_text(value: Option<&Self>) -> String {
        value.map_or_else(|| NULL_MARKER.to_owned(), ToString::to_string)
    }
}

impl TextCodec for Segment {
    fn parse_text(input: &str) -> Result<Option<Self>> {
        if is_null_text(input) {
            return Ok(None);
        }
        let points = parse_point_list(input)?;
        if points.len() != 2 {
            return Err(ParseError::PointCount {
                expected: 2,
                got: points.len(),
            }
            .into());
        }
        Ok(Some(Segment::new(points[0], points[1])))
    }

    fn format_text(value: Option<&Self>) -> String {
        value.map_or_else(|| NULL_MARKER.to_owned(), ToString::to_string)
    }
}

impl TextCodec for Polygon {
    fn parse_text(input: &str) -> Result<Option<Self>> {
        if is_null_text(input) {
            return Ok(None);
        }
        let points = parse_point_list(input)?;
        Polygon::new(points).map(Some)
    }

    fn format_text(value: Option<&Self>) -> String {
        value.map_or_else(|| NULL_MARKER.to_owned(), ToString::to_string)
    }
}

impl TextCodec for PointSet {
    fn parse_text(input: &str) -> Result<Option<Self>> {
        if is_null_text(input) {
            return Ok(None);
        }
        let points = parse_point_list(input)?;
        Ok(PointSet::new(points))
    }

    fn format_text(value: Option<&Self>) -> String {
        value.map_or_else(|| NULL_MARKER.to_owned(), ToString::to_string)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::error::{SpatialisError, ValidationError};

    use super::*;

    #[test]
    fn point_parse_basic() {
        let p = Point::parse_text("(3 4)").unwrap();
        assert_eq!(p, Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn point_parse_tolerates_whitespace_and_newlines() {
        let p = Point::parse_text("  ( 1\n2 ) ").unwrap();
        assert_eq!(p, Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn point_parse_null_inputs() {
        assert_eq!(Point::parse_text("NULL").unwrap(), None);
        assert_eq!(Point::parse_text("").unwrap(), None);
        assert_eq!(Point::parse_text("   ").unwrap(), None);
    }

    #[test]
    fn point_parse_rejects_wrong_coordinate_count() {
        assert!(matches!(
            Point::parse_text("(1)"),
            Err(SpatialisError::Parse(ParseError::CoordinateCount {
                expected: 2,
                got: 1
            }))
        ));
        assert!(matches!(
            Point::parse_text("(1 2 3)"),
            Err(SpatialisError::Parse(ParseError::CoordinateCount {
                expected: 2,
                got: 3
            }))
        ));
    }

    #[test]
    fn point_parse_rejects_non_numeric_coordinate() {
        assert!(matches!(
            Point::parse_text("(a 2)"),
            Err(SpatialisError::Parse(ParseError::InvalidCoordinate(_)))
        ));
    }

    #[test]
    fn point_format_and_null_marker() {
        assert_eq!(Point::format_text(Some(&Point::new(1.0, 2.0))), "(1 2)");
        assert_eq!(Point::format_text(None), "NULL");
    }

    #[test]
    fn point_round_trips_exactly() {
        for p in [
            Point::new(std::f64::consts::PI, -std::f64::consts::E),
            Point::new(0.1, 1e-300),
            Point::new(-12345.678_9, 4.0 / 3.0),
        ] {
            let text = Point::format_text(Some(&p));
            assert_eq!(Point::parse_text(&text).unwrap(), Some(p));
        }
    }

    #[test]
    fn segment_parse_nested_literals() {
        let s = Segment::parse_text(" ( ( 1 2 )\n, ( 3 4 )   )").unwrap().unwrap();
        assert_eq!(s.a, Point::new(1.0, 2.0));
        assert_eq!(s.b, Point::new(3.0, 4.0));
    }

    #[test]
    fn segment_parse_wrong_point_count() {
        assert!(matches!(
            Segment::parse_text("((1 2))"),
            Err(SpatialisError::Parse(ParseError::PointCount {
                expected: 2,
                got: 1
            }))
        ));
    }

    #[test]
    fn segment_format() {
        let s = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(Segment::format_text(Some(&s)), "((1 2),(3 4))");
        assert_eq!(Segment::format_text(None), "NULL");
    }

    #[test]
    fn polygon_parse_and_format() {
        let polygon = Polygon::parse_text("((0 0), (0 1), (1 1), (1 0))")
            .unwrap()
            .unwrap();
        assert_eq!(
            polygon.vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 0.0),
            ]
        );
        assert_eq!(
            Polygon::format_text(Some(&polygon)),
            "((0 0),(0 1),(1 1),(1 0))"
        );
    }

    #[test]
    fn polygon_parse_null() {
        assert!(Polygon::parse_text("NULL").unwrap().is_none());
        assert!(Polygon::parse_text("").unwrap().is_none());
    }

    #[test]
    fn polygon_parse_runs_validation() {
        let bowtie = Polygon::parse_text("((0 0), (1 1), (1 0), (0 1))");
        assert!(matches!(
            bowtie,
            Err(SpatialisError::Validation(
                ValidationError::SelfIntersectingEdges { .. }
            ))
        ));
        assert!(matches!(
            Polygon::parse_text("()"),
            Err(SpatialisError::Validation(ValidationError::TooFewVertices(0)))
        ));
        assert!(matches!(
            Polygon::parse_text("((0 0), (0 1))"),
            Err(SpatialisError::Validation(ValidationError::TooFewVertices(2)))
        ));
    }

    #[test]
    fn point_set_parse_loose_formatting() {
        let set = PointSet::parse_text("(1\n            2)\n        , (3   4 ), ( 5 6 ) ")
            .unwrap()
            .unwrap();
        assert_eq!(
            set.points(),
            &[
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0),
            ]
        );
    }

    #[test]
    fn point_set_parse_empty_is_null() {
        assert!(PointSet::parse_text("()").unwrap().is_none());
        assert!(PointSet::parse_text("NULL").unwrap().is_none());
    }

    #[test]
    fn point_set_format() {
        let set = PointSet::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(PointSet::format_text(Some(&set)), "((1 2),(3 4))");
        assert_eq!(PointSet::format_text(None), "NULL");
    }
}
