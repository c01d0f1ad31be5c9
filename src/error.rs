//! Error types shared across the pipeline.
//!
//! Every failure is local to the call that produced it: the rasterizer never
//! catches an error and carries on with a partial frame.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the math kernel, geometry model, camera and rasterizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation that only makes sense for directions got a point.
    #[error("expected a direction (w = 0), got w = {w}")]
    ExpectedDirection { w: f64 },

    /// An operation that only makes sense for points got a direction.
    #[error("expected a point (w = 1), got w = {w}")]
    ExpectedPoint { w: f64 },

    /// Vector add/sub with a right operand that is not a direction.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Normalising a direction of zero length.
    #[error("cannot normalize a zero-length direction")]
    ZeroLength,

    #[error("matrix is singular (determinant = {determinant})")]
    SingularMatrix { determinant: f64 },

    #[error("matrix index ({row}, {col}) is outside [0, 3] x [0, 3]")]
    IndexOutOfRange { row: usize, col: usize },

    #[error("a triangle needs exactly 3 vertices, got {0}")]
    VertexCount(usize),

    #[error("rasterizer size {width}x{height} is too small")]
    SizeTooSmall { width: f64, height: f64 },

    /// The camera was built without a perspective or orthographic variant.
    #[error("unsupported: camera has no projection type")]
    MissingProjection,
}

/// Errors raised while turning OBJ text into a [`Mesh`](crate::Mesh).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ parse error: {0}")]
    Obj(#[from] tobj::LoadError),

    /// A face references an attribute the file never declared.
    #[error("{attribute} index {index} out of range (pool has {len} entries)")]
    IndexOutOfRange {
        attribute: &'static str,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Geometry(#[from] Error),
}

/// Errors raised while reading a [`RasterConfig`](crate::RasterConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
