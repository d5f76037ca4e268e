use thiserror::Error;

/// Top-level error type for the Spatialis kernel.
#[derive(Debug, Error)]
pub enum SpatialisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors raised when a polygon construction invariant is violated.
///
/// These are fatal to the constructor call and are never coerced to a
/// null value.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon vertex {index} is null")]
    NullVertex { index: usize },

    #[error("polygon edges {first} and {second} intersect")]
    SelfIntersectingEdges { first: usize, second: usize },
}

/// Errors raised while parsing a textual geometry literal.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected} coordinates, got {got}")]
    CoordinateCount { expected: usize, got: usize },

    #[error("expected {expected} points, got {got}")]
    PointCount { expected: usize, got: usize },

    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),
}

/// Errors raised while decoding the binary persisted layout.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("negative point count: {0}")]
    NegativeCount(i32),

    #[error("point count {0} does not fit the 4-byte length prefix")]
    CountOverflow(usize),

    #[error("point {index} of a point set record is null")]
    NullElement { index: usize },
}

/// Convenience type alias for results using [`SpatialisError`].
pub type Result<T> = std::result::Result<T, SpatialisError>;
