//! Error types for octree builds and queries.
//!
//! Configuration problems are caught before any sampling starts and surface
//! as [`BuildError`]. Passing an index that does not exist in the arena is a
//! caller bug and surfaces as [`QueryError`]. A query that runs off the edge
//! of the domain is not an error at all: it returns `None` or an empty set.

use glam::IVec3;

use crate::types::Axis;

/// Build refused during precondition checks. Nothing was sampled or
/// allocated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
  #[error("{name} threshold must be finite, got {value}")]
  NonFiniteThreshold { name: &'static str, value: f32 },

  #[error("max depth {requested} exceeds supported maximum {max}")]
  DepthTooLarge { requested: u8, max: u8 },

  #[error("margin must be at least 1 sample, got {0}")]
  InvalidMargin(i32),

  #[error("grid has {actual} samples along {axis:?}, depth requires at least {required}")]
  GridTooSmall {
    axis: Axis,
    actual: i32,
    required: i32,
  },

  #[error("density buffer holds {actual} samples, grid dimensions need {expected}")]
  BufferSizeMismatch { expected: usize, actual: usize },

  #[error("chunk {coord} lies outside the i32 grid coordinate range")]
  ChunkOutOfRange { coord: IVec3 },
}

/// Contract violation on a neighbor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
  #[error("node index {index} out of range for arena of {len} nodes")]
  IndexOutOfRange { index: usize, len: usize },
}
