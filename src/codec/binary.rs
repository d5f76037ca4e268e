//! Binary persisted layout, little-endian throughout.
//!
//! A point record is one null-flag byte followed, when non-null, by the two
//! coordinates as 8-byte IEEE-754 doubles. Polygon and point-set records are
//! a 4-byte signed point count followed by that many point records; there is
//! no outer null flag, a count of zero stands for the null value.

use crate::error::{CodecError, Result, ValidationError};
use crate::geometry::{Point, PointSet, Polygon};

use super::BinaryCodec;

const NULL_FLAG: u8 = 1;
const PRESENT_FLAG: u8 = 0;

fn take<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8]> {
    if input.len() < n {
        return Err(CodecError::UnexpectedEof.into());
    }
    let (head, rest) = input.split_at(n);
    *input = rest;
    Ok(head)
}

fn read_u8(input: &mut &[u8]) -> Result<u8> {
    Ok(take(input, 1)?[0])
}

fn read_f64(input: &mut &[u8]) -> Result<f64> {
    let bytes: [u8; 8] = take(input, 8)?
        .try_into()
        .map_err(|_| CodecError::UnexpectedEof)?;
    Ok(f64::from_le_bytes(bytes))
}

fn read_i32(input: &mut &[u8]) -> Result<i32> {
    let bytes: [u8; 4] = take(input, 4)?
        .try_into()
        .map_err(|_| CodecError::UnexpectedEof)?;
    Ok(i32::from_le_bytes(bytes))
}

/// Writes a count-prefixed sequence of non-null point records.
fn write_point_seq(points: &[Point], buf: &mut Vec<u8>) -> Result<()> {
    let count =
        i32::try_from(points.len()).map_err(|_| CodecError::CountOverflow(points.len()))?;
    buf.extend_from_slice(&count.to_le_bytes());
    for point in points {
        Point::write_binary(Some(point), buf)?;
    }
    Ok(())
}

/// Reads a count-prefixed sequence of point records, null flags preserved.
fn read_point_seq(input: &mut &[u8]) -> Result<Vec<Option<Point>>> {
    let count = read_i32(input)?;
    let count = usize::try_from(count).map_err(|_| CodecError::NegativeCount(count))?;
    // A point record is at least one byte, so the remaining input bounds any
    // honest count; a corrupt prefix must not drive the allocation.
    let mut points = Vec::with_capacity(count.min(input.len()));
    for _ in 0..count {
        points.push(Point::read_binary(input)?);
    }
    Ok(points)
}

impl BinaryCodec for Point {
    fn write_binary(value: Option<&Self>, buf: &mut Vec<u8>) -> Result<()> {
        match value {
            None => buf.push(NULL_FLAG),
            Some(point) => {
                buf.push(PRESENT_FLAG);
                buf.extend_from_slice(&point.x.to_le_bytes());
                buf.extend_from_slice(&point.y.to_le_bytes());
            }
        }
        Ok(())
    }

    fn read_binary(input: &mut &[u8]) -> Result<Option<Self>> {
        if read_u8(input)? != PRESENT_FLAG {
            return Ok(None);
        }
        let x = read_f64(input)?;
        let y = read_f64(input)?;
        Ok(Some(Point::new(x, y)))
    }
}

impl BinaryCodec for Polygon {
    fn write_binary(value: Option<&Self>, buf: &mut Vec<u8>) -> Result<()> {
        match value {
            None => write_point_seq(&[], buf),
            Some(polygon) => write_point_seq(polygon.vertices(), buf),
        }
    }

    fn read_binary(input: &mut &[u8]) -> Result<Option<Self>> {
        let records = read_point_seq(input)?;
        if records.is_empty() {
            return Ok(None);
        }
        let vertices = records
            .into_iter()
            .enumerate()
            .map(|(index, point)| point.ok_or(ValidationError::NullVertex { index }))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Polygon::new(vertices).map(Some)
    }
}

impl BinaryCodec for PointSet {
    fn write_binary(value: Option<&Self>, buf: &mut Vec<u8>) -> Result<()> {
        match value {
            None => write_point_seq(&[], buf),
            Some(set) => write_point_seq(set.points(), buf),
        }
    }

    fn read_binary(input: &mut &[u8]) -> Result<Option<Self>> {
        let records = read_point_seq(input)?;
        let points = records
            .into_iter()
            .enumerate()
            .map(|(index, point)| point.ok_or(CodecError::NullElement { index }))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(PointSet::new(points))
    }
}
