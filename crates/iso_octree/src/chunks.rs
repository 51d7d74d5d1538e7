//! Independent per-chunk builds.
//!
//! A large volume is cut into cubic chunks of `root_size` cells. Each chunk
//! carries its own density grid (root cube plus margin, so neighboring grids
//! overlap by the margin) and builds its own arena. Builds share nothing,
//! so they run in parallel and finish in any order; results come back in
//! request order.
//!
//! ```text
//!   chunk (0,0,0)            chunk (1,0,0)
//!   origin (0,0,0)           origin (root_size,0,0)
//!   +--------------+--+      +--------------+--+
//!   |  root cube   |m |      |  root cube   |m |    m = margin samples
//!   +--------------+--+      +--------------+--+
//! ```

use glam::IVec3;
use rayon::prelude::*;

use crate::density::{DensityField, DensityGrid};
use crate::error::BuildError;
use crate::octree::{build_from_grid, BuildConfig, OctreeBuild};
use crate::types::GridDims;

/// One chunk to build.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkRequest {
  /// Chunk coordinate in units of `root_size`.
  pub coord: IVec3,
  /// Samples local to the chunk, `(0,0,0)` at the chunk origin.
  pub grid: DensityGrid,
}

impl ChunkRequest {
  pub fn new(coord: IVec3, grid: DensityGrid) -> Self {
    Self { coord, grid }
  }

  /// Sample a world-space field over the chunk at `coord`.
  ///
  /// The grid spans `required_grid_extent()` samples per axis starting at
  /// the chunk's grid origin `coord * root_size`. The config is validated
  /// and the chunk's sample range checked for `i32` overflow before the
  /// field is read.
  pub fn sample<F: DensityField + ?Sized>(
    coord: IVec3,
    field: &F,
    config: &BuildConfig,
  ) -> Result<Self, BuildError> {
    let extent = config.required_grid_extent();
    let dims = GridDims::cube(extent);
    config.validate(dims)?;
    let base = chunk_base(coord, config).ok_or(BuildError::ChunkOutOfRange { coord })?;
    let grid = DensityGrid::sample_field(dims, &|p: IVec3| field.sample(base + p));
    Ok(Self { coord, grid })
  }
}

/// Result of one chunk build.
#[derive(Debug)]
pub struct ChunkBuild {
  pub coord: IVec3,
  pub result: Result<OctreeBuild, BuildError>,
}

/// World-space origin of the chunk at `coord`.
///
/// Computed in `f32`, so any coordinate is accepted.
pub fn chunk_origin(coord: IVec3, config: &BuildConfig) -> glam::Vec3 {
  coord.as_vec3() * config.root_size() as f32
}

/// Grid origin `coord * root_size`, `None` if the chunk's last sample
/// would overflow `i32`.
fn chunk_base(coord: IVec3, config: &BuildConfig) -> Option<IVec3> {
  let root_size = config.root_size();
  let last = config.required_grid_extent() - 1;
  let axis = |c: i32| -> Option<i32> {
    let base = c.checked_mul(root_size)?;
    base.checked_add(last)?;
    Some(base)
  };
  Some(IVec3::new(axis(coord.x)?, axis(coord.y)?, axis(coord.z)?))
}

/// Build every requested chunk in parallel.
///
/// Each build uses `config` with its `chunk_origin` replaced by the chunk's
/// own origin. A failing chunk does not affect the others.
#[tracing::instrument(skip_all, name = "chunks::build_chunks", fields(chunks = requests.len()))]
pub fn build_chunks(requests: Vec<ChunkRequest>, config: &BuildConfig) -> Vec<ChunkBuild> {
  if requests.is_empty() {
    return Vec::new();
  }

  let builds: Vec<ChunkBuild> = requests
    .into_par_iter()
    .map(|request| {
      let chunk_config = config
        .clone()
        .with_chunk_origin(chunk_origin(request.coord, config));
      ChunkBuild {
        coord: request.coord,
        result: build_from_grid(&request.grid, &chunk_config),
      }
    })
    .collect();

  let failed = builds.iter().filter(|b| b.result.is_err()).count();
  if failed > 0 {
    tracing::warn!(failed, total = builds.len(), "chunk builds refused");
  }
  builds
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use glam::Vec3;

  use super::*;
  use crate::density::{HeightmapSampler, PlaneSampler};
  use crate::octree::build;

  fn requests(config: &BuildConfig) -> Vec<ChunkRequest> {
    let field = HeightmapSampler::new(14.0, 9);
    let mut requests = Vec::new();
    for z in 0..2 {
      for x in 0..3 {
        requests.push(ChunkRequest::sample(IVec3::new(x, 0, z), &field, config).unwrap());
      }
    }
    requests
  }

  #[test]
  fn test_results_keep_request_order() {
    let config = BuildConfig::new().with_max_depth(4);
    let reqs = requests(&config);
    let coords: Vec<_> = reqs.iter().map(|r| r.coord).collect();
    let builds = build_chunks(reqs, &config);
    assert_eq!(builds.iter().map(|b| b.coord).collect::<Vec<_>>(), coords);
    assert!(builds.iter().all(|b| b.result.is_ok()));
  }

  #[test]
  fn test_chunk_build_equals_standalone_build() {
    let config = BuildConfig::new().with_max_depth(4);
    let field = HeightmapSampler::new(14.0, 9);
    let coord = IVec3::new(2, 0, 1);
    let origin = Vec3::new(32.0, 0.0, 16.0);
    assert_eq!(chunk_origin(coord, &config), origin);

    let request = ChunkRequest::sample(coord, &field, &config).unwrap();
    let builds = build_chunks(vec![request], &config);
    let chunked = builds[0].result.as_ref().unwrap();

    let shifted = |p: IVec3| field.sample(p + IVec3::new(32, 0, 16));
    let standalone = build(
      &shifted,
      GridDims::cube(config.required_grid_extent()),
      &config.clone().with_chunk_origin(origin),
    )
    .unwrap();

    assert_eq!(chunked.nodes(), standalone.nodes());
    assert_eq!(chunked.leaf_indices(), standalone.leaf_indices());
    assert_eq!(chunked.root().world_center, Vec3::splat(8.0) + origin);
  }

  #[test]
  fn test_neighbor_chunks_share_boundary_samples() {
    let config = BuildConfig::default();
    let field = PlaneSampler::new(3.5);
    let left = ChunkRequest::sample(IVec3::ZERO, &field, &config).unwrap();
    let right = ChunkRequest::sample(IVec3::X, &field, &config).unwrap();
    for y in 0..config.required_grid_extent() {
      let a = left.grid.get(IVec3::new(8, y, 0));
      let b = right.grid.get(IVec3::new(0, y, 0));
      assert_eq!(a, b);
    }
  }

  #[test]
  fn test_failed_chunk_does_not_poison_others() {
    let config = BuildConfig::default();
    let good = ChunkRequest::sample(IVec3::ZERO, &PlaneSampler::new(3.5), &config).unwrap();
    let small = DensityGrid::from_vec(GridDims::cube(4), vec![0.0; 64]).unwrap();
    let bad = ChunkRequest::new(IVec3::X, small);

    let builds = build_chunks(vec![good, bad], &config);
    assert!(builds[0].result.is_ok());
    assert!(matches!(builds[1].result, Err(BuildError::GridTooSmall { .. })));
  }

  #[test]
  fn test_sample_refuses_overflowing_coord_before_sampling() {
    let calls = AtomicUsize::new(0);
    let field = |p: IVec3| {
      calls.fetch_add(1, Ordering::Relaxed);
      p.y as f32
    };
    let config = BuildConfig::default();

    let coord = IVec3::new(i32::MAX / 8, 0, 0);
    let err = ChunkRequest::sample(coord, &field, &config).unwrap_err();
    assert_eq!(err, BuildError::ChunkOutOfRange { coord });

    let err = ChunkRequest::sample(IVec3::new(0, i32::MIN, 0), &field, &config).unwrap_err();
    assert!(matches!(err, BuildError::ChunkOutOfRange { .. }));
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    // Last coordinate whose samples all fit.
    let edge = IVec3::new((i32::MAX - 10) / 8, 0, 0);
    assert!(ChunkRequest::sample(edge, &field, &config).is_ok());
  }

  #[test]
  fn test_sample_refuses_invalid_config_before_sampling() {
    let calls = AtomicUsize::new(0);
    let field = |p: IVec3| {
      calls.fetch_add(1, Ordering::Relaxed);
      p.y as f32
    };
    let config = BuildConfig::default().with_max_depth(40);

    let err = ChunkRequest::sample(IVec3::ZERO, &field, &config).unwrap_err();
    assert!(matches!(err, BuildError::DepthTooLarge { requested: 40, .. }));
    assert_eq!(calls.load(Ordering::Relaxed), 0);
  }

  #[test]
  fn test_chunk_origin_far_from_zero() {
    let config = BuildConfig::default();
    let origin = chunk_origin(IVec3::new(i32::MAX, 0, -1), &config);
    assert_eq!(origin, Vec3::new(i32::MAX as f32 * 8.0, 0.0, -8.0));
  }

  #[test]
  fn test_empty_request_list() {
    assert!(build_chunks(Vec::new(), &BuildConfig::default()).is_empty());
  }
}
