//! Breadth-first octree build over a density field.
//!
//! # Worklist
//!
//! The arena doubles as the worklist. A cursor walks it front to back while
//! subdivisions append children at the tail, so the walk visits nodes in
//! breadth-first order and stack depth never depends on tree depth:
//!
//! ```text
//!   nodes:  [ root | c0 c1 .. c7 | c2.0 .. c2.7 | ... ]
//!             ^cursor             ^appended when c2 is visited
//! ```
//!
//! # Classification
//!
//! Each node's inclusive window `[position, position + size]` is scanned
//! once, when the node is created, so every record is complete on append.
//! At the cursor the node is either:
//! - pruned: the window does not straddle the iso-threshold,
//! - a leaf: it straddles and sits at `max_depth`,
//! - subdivided: it straddles above `max_depth`; 8 children are appended in
//!   octant order and the parent's `child_index_start` is set.

use glam::IVec3;
use web_time::Instant;

use super::{BuildConfig, BuildStats, Octant, OctreeBuild, OctreeNode};
use crate::density::{DensityField, DensityGrid};
use crate::error::BuildError;
use crate::types::GridDims;

/// Build a sparse octree over `field`.
///
/// `dims` bounds the region the builder may sample. A field that reports
/// its own [`DensityField::bounds`] narrows it further, so a declared
/// region larger than the backing grid is refused. The configuration is
/// checked against the result before anything is read.
#[tracing::instrument(skip_all, name = "octree::build", fields(max_depth = config.max_depth))]
pub fn build<F: DensityField + ?Sized>(
  field: &F,
  dims: GridDims,
  config: &BuildConfig,
) -> Result<OctreeBuild, BuildError> {
  let dims = field.bounds().map_or(dims, |bounds| dims.intersect(bounds));
  if let Err(err) = config.validate(dims) {
    tracing::warn!(%err, ?dims, "octree build refused");
    return Err(err);
  }

  let start = Instant::now();
  let mut stats = BuildStats::default();
  let mut nodes: Vec<OctreeNode> = Vec::new();
  let mut leaves: Vec<usize> = Vec::new();

  let mut root = OctreeNode::root(config.root_size(), config.chunk_origin);
  scan_node(field, config, &mut root, &mut stats);
  nodes.push(root);

  let mut cursor = 0;
  while cursor < nodes.len() {
    let node = nodes[cursor];
    cursor += 1;
    stats.nodes_visited += 1;

    if !node.straddles(config.iso_threshold) {
      continue;
    }
    if node.depth >= config.max_depth {
      leaves.push(node.index);
      continue;
    }

    let first_child = nodes.len();
    for octant in Octant::ALL {
      let mut child = node.child(octant, nodes.len(), config.chunk_origin);
      scan_node(field, config, &mut child, &mut stats);
      nodes.push(child);
    }
    nodes[node.index].child_index_start = Some(first_child);

    tracing::trace!(
      index = node.index,
      depth = node.depth,
      first_child,
      "subdivided node"
    );
  }

  stats.nodes_created = nodes.len();
  stats.leaf_count = leaves.len();
  stats.max_depth_reached = nodes.last().map_or(0, |n| n.depth);
  stats.elapsed_us = start.elapsed().as_micros() as u64;

  tracing::debug!(
    nodes = stats.nodes_created,
    leaves = stats.leaf_count,
    obstacles = stats.obstacle_count,
    samples = stats.samples_scanned,
    elapsed_us = stats.elapsed_us,
    "octree build complete"
  );

  Ok(OctreeBuild {
    nodes,
    leaves,
    config: config.clone(),
    dims,
    stats,
  })
}

/// Build over a precomputed grid, bounded by the grid's own dimensions.
pub fn build_from_grid(grid: &DensityGrid, config: &BuildConfig) -> Result<OctreeBuild, BuildError> {
  build(grid, grid.dims(), config)
}

/// Min and max of the inclusive window `[position, position + size]`.
///
/// Returns the sample count alongside.
pub fn scan_window<F: DensityField + ?Sized>(field: &F, position: IVec3, size: i32) -> (f32, f32, usize) {
  let mut min = f32::INFINITY;
  let mut max = f32::NEG_INFINITY;
  let mut count = 0;
  let end = position + IVec3::splat(size);
  for z in position.z..=end.z {
    for y in position.y..=end.y {
      for x in position.x..=end.x {
        let value = field.sample(IVec3::new(x, y, z));
        min = min.min(value);
        max = max.max(value);
        count += 1;
      }
    }
  }
  (min, max, count)
}

fn scan_node<F: DensityField + ?Sized>(
  field: &F,
  config: &BuildConfig,
  node: &mut OctreeNode,
  stats: &mut BuildStats,
) {
  let (min, max, count) = scan_window(field, node.position, node.size);
  node.min_density = min;
  node.max_density = max;
  node.is_obstacle = config
    .obstacle_threshold
    .is_some_and(|threshold| min < threshold && max < threshold);

  stats.samples_scanned += count;
  if node.is_obstacle {
    stats.obstacle_count += 1;
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
