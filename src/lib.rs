pub mod codec;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use codec::{BinaryCodec, TextCodec};
pub use error::{Result, SpatialisError};
pub use geometry::{Point, PointSet, Polygon, Segment};
