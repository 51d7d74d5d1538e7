//! Density fields and the dense sample grid the builder consumes.
//!
//! A [`DensityField`] maps an integer grid coordinate to a scalar. It is the
//! only way the octree builder reads the volume, so any deterministic
//! function can stand in for a precomputed buffer.
//!
//! [`DensityGrid`] is the flattened buffer form (`x + y * W + z * W * H`).
//! Filling it is embarrassingly parallel: every cell is an independent unit
//! of work, so [`DensityGrid::sample_field`] hands cells to rayon.

use glam::IVec3;
use rayon::prelude::*;

use crate::error::BuildError;
use crate::types::GridDims;

pub mod noise;
pub mod samplers;

pub use noise::value_noise_3d;
pub use samplers::{HeightmapSampler, PlaneSampler, SphereSampler, TerrainSampler};

/// Scalar density source.
///
/// Implementations must be pure: the same coordinate always yields the same
/// value, and sampling has no side effects. The builder assumes nothing
/// about continuity beyond what min/max sampling of a window requires.
pub trait DensityField: Send + Sync {
  /// Density at grid coordinate `p`.
  fn sample(&self, p: IVec3) -> f32;

  /// Sample region this field can answer, `None` if unbounded.
  ///
  /// The builder never samples beyond it.
  fn bounds(&self) -> Option<GridDims> {
    None
  }
}

impl<F> DensityField for F
where
  F: Fn(IVec3) -> f32 + Send + Sync,
{
  #[inline]
  fn sample(&self, p: IVec3) -> f32 {
    self(p)
  }
}

/// Dense, flattened density buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
  dims: GridDims,
  values: Vec<f32>,
}

impl DensityGrid {
  /// Wrap an existing row-major buffer.
  pub fn from_vec(dims: GridDims, values: Vec<f32>) -> Result<Self, BuildError> {
    let expected = dims.len();
    if values.len() != expected {
      return Err(BuildError::BufferSizeMismatch {
        expected,
        actual: values.len(),
      });
    }
    Ok(Self { dims, values })
  }

  /// Evaluate `field` at every cell of `dims`, in parallel.
  ///
  /// The output is identical to a serial evaluation: each cell writes only
  /// its own slot.
  #[tracing::instrument(skip_all, name = "density::sample_field")]
  pub fn sample_field<F: DensityField + ?Sized>(dims: GridDims, field: &F) -> Self {
    let mut values = vec![0.0f32; dims.len()];
    values
      .par_iter_mut()
      .enumerate()
      .for_each(|(index, value)| {
        *value = field.sample(dims.unflatten(index));
      });
    tracing::debug!(samples = values.len(), ?dims, "sampled density grid");
    Self { dims, values }
  }

  pub fn dims(&self) -> GridDims {
    self.dims
  }

  pub fn values(&self) -> &[f32] {
    &self.values
  }

  pub fn into_values(self) -> Vec<f32> {
    self.values
  }

  /// Sample at `p`, `None` outside the grid.
  #[inline]
  pub fn get(&self, p: IVec3) -> Option<f32> {
    if self.dims.contains(p) {
      Some(self.values[self.dims.flatten(p)])
    } else {
      None
    }
  }
}

impl DensityField for DensityGrid {
  /// Reads the buffer.
  ///
  /// # Panics
  ///
  /// Panics if `p` lies outside the grid, like slice indexing. Builds are
  /// validated against [`DensityField::bounds`] and never get here.
  #[inline]
  fn sample(&self, p: IVec3) -> f32 {
    match self.get(p) {
      Some(value) => value,
      None => panic!("density sample at {p} outside grid {:?}", self.dims),
    }
  }

  fn bounds(&self) -> Option<GridDims> {
    Some(self.dims)
  }
}
