pub mod point;
pub mod point_set;
pub mod polygon;
pub mod segment;

pub use point::Point;
pub use point_set::PointSet;
pub use polygon::{cyclic_edges, Polygon};
pub use segment::Segment;
