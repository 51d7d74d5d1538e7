//! BuildConfig - thresholds, depth and grid margin for one octree build.

use glam::Vec3;

use crate::constants::{DEFAULT_MARGIN_SAMPLES, DEFAULT_MAX_DEPTH, MAX_DEPTH, MIN_MARGIN_SAMPLES};
use crate::error::BuildError;
use crate::types::{Axis, GridDims};

/// Configuration for a single octree build.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildConfig {
  /// Density value of the implicit surface.
  pub iso_threshold: f32,

  /// Nodes whose whole window lies below this value are flagged as
  /// obstacles. `None` disables the classification.
  pub obstacle_threshold: Option<f32>,

  /// Deepest subdivision level. The root cube is `1 << max_depth` cells on
  /// each axis.
  pub max_depth: u8,

  /// Samples required beyond the root cube on each axis.
  pub margin_samples: i32,

  /// Offset added to every node center to produce `world_center`.
  pub chunk_origin: Vec3,
}

impl BuildConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_iso_threshold(mut self, iso_threshold: f32) -> Self {
    self.iso_threshold = iso_threshold;
    self
  }

  pub fn with_obstacle_threshold(mut self, obstacle_threshold: f32) -> Self {
    self.obstacle_threshold = Some(obstacle_threshold);
    self
  }

  pub fn with_max_depth(mut self, max_depth: u8) -> Self {
    self.max_depth = max_depth;
    self
  }

  pub fn with_margin_samples(mut self, margin_samples: i32) -> Self {
    self.margin_samples = margin_samples;
    self
  }

  pub fn with_chunk_origin(mut self, chunk_origin: Vec3) -> Self {
    self.chunk_origin = chunk_origin;
    self
  }

  /// Edge length of the root cube in grid units.
  ///
  /// The depth is clamped to `MAX_DEPTH` only to keep the shift from
  /// overflowing. For a config that fails [`BuildConfig::validate`] the
  /// value is meaningless; validate before sizing anything from it.
  #[inline]
  pub fn root_size(&self) -> i32 {
    1i32 << self.max_depth.min(MAX_DEPTH)
  }

  /// Samples needed per axis: root cube plus margin.
  ///
  /// Same caveat as [`BuildConfig::root_size`].
  #[inline]
  pub fn required_grid_extent(&self) -> i32 {
    self.root_size().saturating_add(self.margin_samples)
  }

  /// Check every precondition of a build against grid dimensions.
  ///
  /// Runs before any sampling or allocation, so a violation can never show
  /// up later as an out-of-range read.
  pub fn validate(&self, dims: GridDims) -> Result<(), BuildError> {
    if !self.iso_threshold.is_finite() {
      return Err(BuildError::NonFiniteThreshold {
        name: "iso",
        value: self.iso_threshold,
      });
    }
    if let Some(obstacle) = self.obstacle_threshold {
      if !obstacle.is_finite() {
        return Err(BuildError::NonFiniteThreshold {
          name: "obstacle",
          value: obstacle,
        });
      }
    }
    if self.max_depth > MAX_DEPTH {
      return Err(BuildError::DepthTooLarge {
        requested: self.max_depth,
        max: MAX_DEPTH,
      });
    }
    if self.margin_samples < MIN_MARGIN_SAMPLES {
      return Err(BuildError::InvalidMargin(self.margin_samples));
    }

    let required = self.required_grid_extent();
    for axis in Axis::ALL {
      let actual = dims.axis(axis);
      if actual < required {
        return Err(BuildError::GridTooSmall {
          axis,
          actual,
          required,
        });
      }
    }
    Ok(())
  }
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      iso_threshold: 0.0,
      obstacle_threshold: None,
      max_depth: DEFAULT_MAX_DEPTH,
      margin_samples: DEFAULT_MARGIN_SAMPLES,
      chunk_origin: Vec3::ZERO,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
